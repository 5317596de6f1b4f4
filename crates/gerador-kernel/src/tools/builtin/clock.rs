//! date, time: Show the local date or time.

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Date;

pub struct Time;

#[async_trait]
impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Show the current date")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(format_date(&Local::now()))
    }
}

#[async_trait]
impl Tool for Time {
    fn name(&self) -> &str {
        "time"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("time", "Show the current time")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(format_time(&Local::now()))
    }
}

// Fixed en-US layout, in whatever zone `now` carries.
fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Current date is: {}", now.format("%-m/%-d/%Y"))
}

fn format_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Current time is: {}", now.format("%-I:%M:%S %p"))
}
