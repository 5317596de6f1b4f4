//! type: Display file contents.

use async_trait::async_trait;

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Type tool: print a file.
pub struct Type;

#[async_trait]
impl Tool for Type {
    fn name(&self) -> &str {
        "type"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("type", "Display file content").usage("type <file>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(path) = args.get(0) else {
            return ExecResult::failure(1, "The syntax of the command is incorrect.");
        };

        match ctx.read_file(path) {
            Ok(content) => ExecResult::success(content),
            Err(e) => ExecResult::fs_failure(&e),
        }
    }
}
