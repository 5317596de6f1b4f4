//! ExecResult: the structured result of every command.
//!
//! Every built-in and every translated command produces one of these. The
//! kernel turns `out` into an output entry and `err` into an error entry in
//! the session history; the front end decides how to color them.

use crate::vfs::FsError;

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Text shown as normal output.
    pub out: String,
    /// Text shown as an error.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// A failed result carrying the terminal wording of a filesystem error.
    pub fn fs_failure(err: &FsError) -> Self {
        Self::failure(1, err.to_string())
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}
