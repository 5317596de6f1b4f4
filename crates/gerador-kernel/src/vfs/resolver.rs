//! Path resolution against a [`FileTree`].

use super::error::FsError;
use super::node::{Directory, Node};
use super::path::DosPath;
use super::tree::FileTree;

/// Outcome of resolving a path.
///
/// `node` is `None` when the path does not exist. `parent` is the last
/// directory the walk passed through: for a missing path that is where the
/// walk stopped, and it is `None` only for the root itself. `name` is the
/// final segment even when nothing exists there yet.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    pub path: DosPath,
    pub parent: Option<&'a Directory>,
    pub node: Option<&'a Node>,
    pub name: String,
}

impl<'a> Resolution<'a> {
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    /// The resolved node as a directory, if it is one.
    pub fn dir(&self) -> Option<&'a Directory> {
        self.node.and_then(Node::as_dir)
    }

    /// The resolved node's file content, if it is a file.
    pub fn file(&self) -> Option<&'a str> {
        self.node.and_then(Node::as_file)
    }
}

/// Walks a tree one segment at a time.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    tree: &'a FileTree,
}

impl<'a> PathResolver<'a> {
    pub fn new(tree: &'a FileTree) -> Self {
        Self { tree }
    }

    /// Resolve raw user input relative to `cwd`.
    pub fn resolve(&self, raw: &str, cwd: &DosPath) -> Result<Resolution<'a>, FsError> {
        Ok(self.walk(cwd.resolve(raw)?))
    }

    /// Walk an already-normalized path from the root.
    pub fn walk(&self, path: DosPath) -> Resolution<'a> {
        let (parent, node) = self.descend(&path);
        Resolution {
            name: path.file_name().to_string(),
            path,
            parent,
            node,
        }
    }

    /// Follow `path` down from the root, stopping at the first missing
    /// segment or at a file where a directory is needed.
    fn descend(&self, path: &DosPath) -> (Option<&'a Directory>, Option<&'a Node>) {
        let mut parent = None;
        let mut node = self.tree.root();

        for segment in path.segments() {
            let Some(dir) = node.as_dir() else {
                return (parent, None);
            };
            parent = Some(dir);
            match dir.get(segment) {
                Some(child) => node = child,
                None => return (parent, None),
            }
        }

        (parent, Some(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd(raw: &str) -> DosPath {
        DosPath::parse(raw).unwrap()
    }

    #[test]
    fn resolves_existing_file() {
        let tree = FileTree::seeded();
        let res = tree.resolver().resolve("README.TXT", &cwd(r"C:\DOCS")).unwrap();
        assert!(res.file().is_some_and(|c| c.starts_with("Welcome")));
        assert_eq!(res.name, "README.TXT");
        assert!(res.parent.is_some_and(|p| p.get("README.TXT").is_some()));
    }

    #[test]
    fn root_has_no_parent() {
        let tree = FileTree::seeded();
        let res = tree.resolver().walk(DosPath::root());
        assert!(res.dir().is_some());
        assert!(res.parent.is_none());
        assert_eq!(res.name, "C:");
    }

    #[test]
    fn missing_leaf_keeps_parent_and_name() {
        let tree = FileTree::seeded();
        let res = tree.resolver().resolve("new.txt", &cwd(r"C:\DOCS")).unwrap();
        assert!(!res.exists());
        assert_eq!(res.name, "NEW.TXT");
        assert!(res.parent.is_some_and(|p| p.get("README.TXT").is_some()));
    }

    #[test]
    fn file_in_the_middle_stops_the_walk() {
        let tree = FileTree::seeded();
        let res = tree
            .resolver()
            .resolve(r"AUTOEXEC.BAT\INNER", &DosPath::root())
            .unwrap();
        assert!(!res.exists());
        assert_eq!(res.name, "INNER");
        // The walk stopped at the root, the last directory it visited.
        assert!(res.parent.is_some_and(|p| p.get("DOCS").is_some()));
    }

    #[test]
    fn resolution_is_idempotent() {
        let tree = FileTree::seeded();
        let resolver = tree.resolver();
        let a = resolver.resolve(r"C:\SYSTEM\IO.SYS", &DosPath::root()).unwrap();
        let b = resolver.resolve(r"C:\SYSTEM\IO.SYS", &DosPath::root()).unwrap();
        assert_eq!(a.node, b.node);
        assert_eq!(a.parent, b.parent);
        assert_eq!(a.name, b.name);
        assert_eq!(a.path, b.path);
    }
}
