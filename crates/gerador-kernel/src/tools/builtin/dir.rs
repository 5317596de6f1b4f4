//! dir: List the current directory, DOS style.
//!
//! ```text
//!  Volume in drive C has no label.
//!  Volume Serial Number is 1337-BEEF
//!
//!  Directory of C:\DOCS\
//!
//! .            <DIR>
//! ..           <DIR>
//! README.TXT         440 04-26-24  10:00p
//!           1 File(s)            440 bytes
//!           2 Dir(s)        67,108,864 bytes free
//! ```

use async_trait::async_trait;

use crate::interpreter::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::{DirEntry, DosPath};

/// Every entry carries the same stamp.
const STAMP_DATE: &str = "04-26-24";
const STAMP_TIME: &str = "10:00p";

const SERIAL_NUMBER: &str = "1337-BEEF";

/// Reported free space: 64 MiB.
pub const FREE_BYTES: u64 = 64 * 1024 * 1024;

/// Dir tool: list the current directory.
pub struct Dir;

#[async_trait]
impl Tool for Dir {
    fn name(&self) -> &str {
        "dir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("dir", "List directory contents")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match ctx.tree.list_children(&ctx.cwd) {
            Ok(entries) => ExecResult::success(format_listing(&ctx.cwd, &entries)),
            Err(e) => {
                tracing::error!(cwd = %ctx.cwd, error = %e, "working directory does not resolve");
                ExecResult::failure(1, "Error: Current path is not a directory.")
            }
        }
    }
}

/// Render a listing of `entries` as the contents of `cwd`.
///
/// Every listing starts with synthetic `.` and `..` rows, the root's
/// included; both count toward the directory total.
pub fn format_listing(cwd: &DosPath, entries: &[DirEntry]) -> String {
    let mut out = String::new();
    out.push_str(" Volume in drive C has no label.\n");
    out.push_str(&format!(" Volume Serial Number is {SERIAL_NUMBER}\n\n"));
    out.push_str(&format!(" Directory of {}\n\n", cwd.display_dir()));

    let mut file_count = 0u64;
    let mut dir_count = 0u64;
    let mut total_bytes = 0u64;

    out.push_str(".            <DIR>          \n");
    out.push_str("..           <DIR>          \n");
    dir_count += 2;

    for entry in entries {
        if entry.is_dir() {
            dir_count += 1;
            out.push_str(&format!(
                "{:<12}<DIR>          {STAMP_DATE}  {STAMP_TIME}\n",
                entry.name
            ));
        } else {
            file_count += 1;
            total_bytes += entry.size;
            out.push_str(&format!(
                "{:<12}{:>10} {STAMP_DATE}  {STAMP_TIME}\n",
                entry.name, entry.size
            ));
        }
    }

    out.push_str(&format!("{file_count:>11} File(s) {total_bytes:>14} bytes\n"));
    out.push_str(&format!(
        "{dir_count:>11} Dir(s)  {:>16} bytes free",
        group_thousands(FREE_BYTES)
    ));
    out
}

/// `67108864` → `67,108,864`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FileTree;

    fn make_ctx() -> ExecContext {
        ExecContext::new(FileTree::seeded())
    }

    #[tokio::test]
    async fn test_dir_root() {
        let mut ctx = make_ctx();
        let result = Dir.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.ok());
        assert!(result.out.contains(r" Directory of C:\"));
        assert!(result.out.contains("DOCS        <DIR>          04-26-24  10:00p"));
        assert!(result.out.contains("CONFIG.SYS          35 04-26-24  10:00p"));
        assert!(result.out.contains("          2 File(s)"));
        assert!(result.out.contains("          4 Dir(s)"));

        let lines: Vec<_> = result.out.lines().collect();
        assert_eq!(lines[5], ".            <DIR>          ");
        assert_eq!(lines[6], "..           <DIR>          ");
    }

    #[tokio::test]
    async fn test_dir_docs_has_dot_entries() {
        let mut ctx = make_ctx();
        ctx.set_cwd(DosPath::parse(r"C:\DOCS").unwrap());
        let result = Dir.execute(ToolArgs::new(), &mut ctx).await;

        let lines: Vec<_> = result.out.lines().collect();
        assert_eq!(lines[5], ".            <DIR>          ");
        assert_eq!(lines[6], "..           <DIR>          ");
        assert!(lines[7].starts_with("README.TXT  "));
        assert!(lines[8].starts_with("          1 File(s)"));
        assert!(lines[9].starts_with("          2 Dir(s)"));
        assert!(lines[9].ends_with("67,108,864 bytes free"));
        assert_eq!(lines.len(), 10);
    }

    #[tokio::test]
    async fn test_dir_reports_content_length() {
        let mut ctx = make_ctx();
        ctx.tree
            .write(&DosPath::parse(r"C:\NOTE.TXT").unwrap(), "12345")
            .unwrap();
        let result = Dir.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.out.contains("NOTE.TXT             5 04-26-24  10:00p"));
    }

    #[tokio::test]
    async fn test_dir_missing_cwd_is_reported() {
        let mut ctx = make_ctx();
        ctx.set_cwd(DosPath::parse(r"C:\GONE").unwrap());
        let result = Dir.execute(ToolArgs::new(), &mut ctx).await;
        assert!(!result.ok());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(FREE_BYTES), "67,108,864");
    }
}
