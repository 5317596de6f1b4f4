//! cls: Clear the screen.

use async_trait::async_trait;

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Cls;

#[async_trait]
impl Tool for Cls {
    fn name(&self) -> &str {
        "cls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cls", "Clear the screen")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ctx.history.clear();
        ExecResult::success("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileTree;

    #[tokio::test]
    async fn test_cls_empties_history() {
        let mut ctx = ExecContext::new(FileTree::seeded());
        ctx.history.push_command(r"C:\>dir");
        ctx.history.push_output("...");
        let result = Cls.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.ok());
        assert!(ctx.history.is_empty());
    }
}
