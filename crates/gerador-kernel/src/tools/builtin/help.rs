//! help: Show the help document.

use async_trait::async_trait;

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Where the help text lives on the drive.
pub const HELP_FILE: &str = r"C:\DOCS\README.TXT";

pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Show this help message")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        // The file is user-editable; if it has been clobbered there is just
        // nothing to show.
        ExecResult::success(ctx.read_file(HELP_FILE).unwrap_or_default())
    }
}
