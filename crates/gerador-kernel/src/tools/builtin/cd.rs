//! cd: Change working directory.

use async_trait::async_trait;

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::DosPath;

/// Cd tool: change current working directory.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change directory").usage(r"cd [path | .. | \]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        // Names may contain spaces, so the whole argument list is the path.
        let path = args.joined();

        if path.is_empty() || path == "." {
            return ExecResult::success("");
        }
        if path == r"\" {
            ctx.set_cwd(DosPath::root());
            return ExecResult::success("");
        }

        let target = match ctx.resolve(&path) {
            Ok(resolution) if resolution.dir().is_some() => Some(resolution.path),
            _ => None,
        };

        match target {
            Some(dir) => {
                tracing::debug!(cwd = %dir, "changed directory");
                ctx.set_cwd(dir);
                ExecResult::success("")
            }
            None => ExecResult::failure(1, format!("Invalid directory: {}", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileTree;

    fn make_ctx() -> ExecContext {
        ExecContext::new(FileTree::seeded())
    }

    async fn cd(ctx: &mut ExecContext, words: &[&str]) -> ExecResult {
        Cd.execute(ToolArgs::from_words(words.iter().copied()), ctx).await
    }

    #[tokio::test]
    async fn test_cd_subdir() {
        let mut ctx = make_ctx();
        let result = cd(&mut ctx, &["docs"]).await;
        assert!(result.ok());
        assert_eq!(ctx.cwd.display_dir(), r"C:\DOCS\");
    }

    #[tokio::test]
    async fn test_cd_parent_round_trip() {
        let mut ctx = make_ctx();
        cd(&mut ctx, &["SYSTEM"]).await;
        let result = cd(&mut ctx, &[".."]).await;
        assert!(result.ok());
        assert!(ctx.cwd.is_root());
    }

    #[tokio::test]
    async fn test_cd_backslash_goes_to_root() {
        let mut ctx = make_ctx();
        cd(&mut ctx, &["DOCS"]).await;
        let result = cd(&mut ctx, &[r"\"]).await;
        assert!(result.ok());
        assert!(ctx.cwd.is_root());
    }

    #[tokio::test]
    async fn test_cd_absolute() {
        let mut ctx = make_ctx();
        cd(&mut ctx, &["DOCS"]).await;
        let result = cd(&mut ctx, &[r"C:\SYSTEM"]).await;
        assert!(result.ok());
        assert_eq!(ctx.cwd.to_string(), r"C:\SYSTEM");
    }

    #[tokio::test]
    async fn test_cd_noop_forms() {
        let mut ctx = make_ctx();
        cd(&mut ctx, &["DOCS"]).await;
        let cases: [&[&str]; 2] = [&[], &["."]];
        for words in cases {
            let result = cd(&mut ctx, words).await;
            assert!(result.ok());
            assert!(result.err.is_empty());
            assert_eq!(ctx.cwd.to_string(), r"C:\DOCS");
        }
    }

    #[tokio::test]
    async fn test_cd_nonexistent() {
        let mut ctx = make_ctx();
        let result = cd(&mut ctx, &["NOWHERE"]).await;
        assert!(!result.ok());
        assert_eq!(result.err, "Invalid directory: NOWHERE");
        assert!(ctx.cwd.is_root());
    }

    #[tokio::test]
    async fn test_cd_file_fails() {
        let mut ctx = make_ctx();
        let result = cd(&mut ctx, &["config.sys"]).await;
        assert_eq!(result.err, "Invalid directory: config.sys");
        assert!(ctx.cwd.is_root());
    }
}
