//! Errors raised by path resolution and tree mutation.

use thiserror::Error;

/// A failed lookup or mutation in the virtual file tree.
///
/// The `Display` text is what the terminal prints, so it follows the DOS
/// wording rather than Rust conventions. The payload carries the offending
/// path for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// The path does not start with the drive label, or its parent is missing.
    #[error("Invalid path.")]
    InvalidPath(String),

    /// Some segment of the path does not exist.
    #[error("File not found.")]
    NotFound(String),

    /// A file was required but the path names a directory.
    #[error("Not a file.")]
    NotAFile(String),

    /// A directory was required but the path names a file.
    #[error("Not a directory.")]
    NotADirectory(String),

    /// A write targeted a name that is already a directory.
    #[error("Access denied - {0} is a directory.")]
    IsADirectory(String),
}
