//! edit: Open a file for editing.
//!
//! The tool only opens the file: it records an [`EditSession`] on the
//! context. The front end takes it, lets the user change the text, and
//! hands it back to `Kernel::save_edit`.

use async_trait::async_trait;

use crate::interpreter::ExecResult;
use crate::tools::{EditSession, ExecContext, Tool, ToolArgs, ToolSchema};

/// Edit tool: open a (possibly new) file.
pub struct Edit;

#[async_trait]
impl Tool for Edit {
    fn name(&self) -> &str {
        "edit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("edit", "Open a text editor for a file").usage("edit <file>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(target) = args.get(0) else {
            return ExecResult::failure(1, "Please specify a file to edit.");
        };

        let path = match ctx.resolve_path(target) {
            Ok(path) => path,
            Err(e) => return ExecResult::fs_failure(&e),
        };
        // A missing file opens empty and is created on save.
        let content = ctx.read_file(target).unwrap_or_default();

        tracing::debug!(path = %path, bytes = content.len(), "opening editor");
        ctx.pending_edit = Some(EditSession { path, content });
        ExecResult::success("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{DosPath, FileTree};

    fn make_ctx() -> ExecContext {
        ExecContext::new(FileTree::seeded())
    }

    #[tokio::test]
    async fn test_edit_existing_file() {
        let mut ctx = make_ctx();
        let result = Edit.execute(ToolArgs::from_words(["config.sys"]), &mut ctx).await;
        assert!(result.ok());

        let session = ctx.pending_edit.take().unwrap();
        assert_eq!(session.path, DosPath::parse(r"C:\CONFIG.SYS").unwrap());
        assert!(session.content.starts_with("DEVICE="));
    }

    #[tokio::test]
    async fn test_edit_new_file_opens_empty() {
        let mut ctx = make_ctx();
        ctx.set_cwd(DosPath::parse(r"C:\DOCS").unwrap());
        Edit.execute(ToolArgs::from_words(["notes.txt"]), &mut ctx).await;

        let session = ctx.pending_edit.take().unwrap();
        assert_eq!(session.path.to_string(), r"C:\DOCS\NOTES.TXT");
        assert!(session.content.is_empty());
    }

    #[tokio::test]
    async fn test_edit_no_arg() {
        let mut ctx = make_ctx();
        let result = Edit.execute(ToolArgs::new(), &mut ctx).await;
        assert_eq!(result.err, "Please specify a file to edit.");
        assert!(ctx.pending_edit.is_none());
    }
}
