//! The session's file tree.

use std::sync::Arc;

use super::entry::DirEntry;
use super::error::FsError;
use super::node::{Directory, Node};
use super::path::DosPath;
use super::resolver::PathResolver;
use super::seed;

/// In-memory directory hierarchy rooted at `C:\`.
///
/// Cloning is cheap and produces an independent snapshot: writes go
/// through `Arc::make_mut`, so a clone taken before a write never sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTree {
    root: Arc<Node>,
}

impl Default for FileTree {
    fn default() -> Self {
        Self::new(Directory::new())
    }
}

impl FileTree {
    /// Create a tree with the given root directory.
    pub fn new(root: Directory) -> Self {
        Self {
            root: Arc::new(Node::Directory(root)),
        }
    }

    /// The fixed initial layout every session starts from.
    pub fn seeded() -> Self {
        Self::new(seed::initial_layout())
    }

    /// Root node; always a directory.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// An immutable view of the current state.
    pub fn snapshot(&self) -> FileTree {
        self.clone()
    }

    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(self)
    }

    /// Node at `path`, if any.
    pub fn get(&self, path: &DosPath) -> Option<&Node> {
        self.resolver().walk(path.clone()).node
    }

    /// Contents of the file at `path`.
    pub fn read(&self, path: &DosPath) -> Result<&str, FsError> {
        match self.get(path) {
            Some(Node::File { content }) => Ok(content),
            Some(Node::Directory(_)) => Err(FsError::NotAFile(path.to_string())),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    /// Children of the directory at `dir`, in insertion order.
    pub fn list_children(&self, dir: &DosPath) -> Result<Vec<DirEntry>, FsError> {
        match self.get(dir) {
            Some(Node::Directory(d)) => Ok(d.entries()),
            Some(Node::File { .. }) => Err(FsError::NotADirectory(dir.to_string())),
            None => Err(FsError::NotFound(dir.to_string())),
        }
    }

    /// Create or overwrite `name` inside the directory at `dir`.
    ///
    /// The tree is left untouched on error: a missing or non-directory
    /// `dir` is an invalid path, and `name` must not already be a directory.
    pub fn set_file(
        &mut self,
        dir: &DosPath,
        name: &str,
        content: impl Into<String>,
    ) -> Result<(), FsError> {
        match self.get(dir) {
            Some(Node::Directory(d)) => {
                if d.get(name).is_some_and(Node::is_dir) {
                    return Err(FsError::IsADirectory(dir.join(name).to_string()));
                }
            }
            _ => return Err(FsError::InvalidPath(dir.join(name).to_string())),
        }

        let mut current = Arc::make_mut(&mut self.root);
        for segment in dir.segments() {
            current = match current {
                Node::Directory(d) => d
                    .child_mut(segment)
                    .ok_or_else(|| FsError::InvalidPath(dir.to_string()))?,
                Node::File { .. } => return Err(FsError::InvalidPath(dir.to_string())),
            };
        }
        match current {
            Node::Directory(d) => d.set_file(name, content.into()),
            Node::File { .. } => Err(FsError::InvalidPath(dir.to_string())),
        }
    }

    /// Create or overwrite the file at an absolute path.
    pub fn write(&mut self, path: &DosPath, content: impl Into<String>) -> Result<(), FsError> {
        let Some(parent) = path.parent() else {
            return Err(FsError::IsADirectory(path.to_string()));
        };
        self.set_file(&parent, path.file_name(), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> DosPath {
        DosPath::parse(raw).unwrap()
    }

    #[test]
    fn seeded_layout() {
        let tree = FileTree::seeded();
        let names: Vec<_> = tree
            .list_children(&DosPath::root())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["DOCS", "SYSTEM", "AUTOEXEC.BAT", "CONFIG.SYS"]);
        assert!(tree.read(&path(r"C:\DOCS\README.TXT")).is_ok());
    }

    #[test]
    fn write_then_read() {
        let mut tree = FileTree::seeded();
        tree.write(&path(r"C:\DOCS\NOTES.TXT"), "first").unwrap();
        assert_eq!(tree.read(&path(r"C:\DOCS\NOTES.TXT")).unwrap(), "first");
        tree.write(&path(r"c:\docs\notes.txt"), "second").unwrap();
        assert_eq!(tree.read(&path(r"C:\DOCS\NOTES.TXT")).unwrap(), "second");
    }

    #[test]
    fn snapshot_does_not_see_later_writes() {
        let mut tree = FileTree::seeded();
        let before = tree.snapshot();
        tree.write(&path(r"C:\SYSTEM\IO.SYS"), "patched").unwrap();
        tree.write(&path(r"C:\NEW.TXT"), "new").unwrap();

        assert_eq!(before.read(&path(r"C:\SYSTEM\IO.SYS")).unwrap(), "SYSTEM FILE - READ ONLY");
        assert!(before.get(&path(r"C:\NEW.TXT")).is_none());
        assert_eq!(tree.read(&path(r"C:\SYSTEM\IO.SYS")).unwrap(), "patched");
        assert_eq!(before, FileTree::seeded());
    }

    #[test]
    fn write_over_directory_is_rejected() {
        let mut tree = FileTree::seeded();
        let err = tree.write(&path(r"C:\DOCS"), "oops").unwrap_err();
        assert!(matches!(err, FsError::IsADirectory(_)));
        assert_eq!(tree, FileTree::seeded());
    }

    #[test]
    fn write_into_missing_directory_is_invalid() {
        let mut tree = FileTree::seeded();
        let err = tree.write(&path(r"C:\NOPE\FILE.TXT"), "x").unwrap_err();
        assert!(matches!(err, FsError::InvalidPath(_)));
        let err = tree.write(&path(r"C:\AUTOEXEC.BAT\FILE.TXT"), "x").unwrap_err();
        assert!(matches!(err, FsError::InvalidPath(_)));
        assert_eq!(tree, FileTree::seeded());
    }

    #[test]
    fn write_to_root_is_rejected() {
        let mut tree = FileTree::seeded();
        assert!(tree.write(&DosPath::root(), "x").is_err());
    }

    #[test]
    fn read_errors() {
        let tree = FileTree::seeded();
        assert!(matches!(tree.read(&path(r"C:\NOFILE.TXT")), Err(FsError::NotFound(_))));
        assert!(matches!(tree.read(&path(r"C:\SYSTEM")), Err(FsError::NotAFile(_))));
        assert!(matches!(
            tree.list_children(&path(r"C:\CONFIG.SYS")),
            Err(FsError::NotADirectory(_))
        ));
    }
}
