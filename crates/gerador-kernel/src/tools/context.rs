//! Execution context for tools.

use crate::interpreter::History;
use crate::vfs::{DosPath, FileTree, FsError, Node, Resolution};

/// A file opened by `edit`, waiting for the front end to save or drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Absolute target path.
    pub path: DosPath,
    /// Current content; empty for a file that does not exist yet.
    pub content: String,
}

/// Session state a tool can read and change.
///
/// Owned by the kernel; tools get `&mut` access for the duration of one
/// command.
#[derive(Debug, Clone)]
pub struct ExecContext {
    /// The drive.
    pub tree: FileTree,
    /// Current working directory.
    pub cwd: DosPath,
    /// Scrollback.
    pub history: History,
    /// File opened by `edit`, if any.
    pub pending_edit: Option<EditSession>,
    /// Set once the boot sequence has run.
    pub startup_done: bool,
}

impl ExecContext {
    /// Create a context at `C:\` over the given tree.
    pub fn new(tree: FileTree) -> Self {
        Self {
            tree,
            cwd: DosPath::root(),
            history: History::new(),
            pending_edit: None,
            startup_done: false,
        }
    }

    /// Resolve raw input relative to the cwd.
    pub fn resolve(&self, raw: &str) -> Result<Resolution<'_>, FsError> {
        self.tree.resolver().resolve(raw, &self.cwd)
    }

    /// Absolute form of raw input.
    pub fn resolve_path(&self, raw: &str) -> Result<DosPath, FsError> {
        self.cwd.resolve(raw)
    }

    /// Read a file named relative to the cwd.
    ///
    /// Anything that does not resolve is "not found"; a directory is
    /// "not a file".
    pub fn read_file(&self, raw: &str) -> Result<String, FsError> {
        let resolution = self
            .resolve(raw)
            .map_err(|_| FsError::NotFound(raw.to_string()))?;
        match resolution.node {
            Some(Node::File { content }) => Ok(content.clone()),
            Some(Node::Directory(_)) => Err(FsError::NotAFile(resolution.path.to_string())),
            None => Err(FsError::NotFound(resolution.path.to_string())),
        }
    }

    /// Create or overwrite a file at an absolute path.
    pub fn write_file(&mut self, path: &DosPath, content: impl Into<String>) -> Result<(), FsError> {
        self.tree.write(path, content)
    }

    /// Change the current working directory.
    pub fn set_cwd(&mut self, path: DosPath) {
        self.cwd = path;
    }

    /// The prompt shown before input, e.g. `C:\DOCS\>`.
    pub fn prompt(&self) -> String {
        format!("{}>", self.cwd.display_dir())
    }
}
