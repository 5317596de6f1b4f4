//! Tree nodes.
//!
//! Children are held behind `Arc`, so cloning a [`Directory`] is shallow and
//! a write only copies the nodes along the path it touches
//! (`Arc::make_mut`). Everything not on that path stays shared with older
//! snapshots.

use std::sync::Arc;

use super::entry::DirEntry;
use super::error::FsError;

/// A node in the virtual file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { content: String },
    Directory(Directory),
}

impl Node {
    /// Create a file node.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// The directory behind this node, if it is one.
    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File { .. } => None,
        }
    }

    /// The file content behind this node, if it is a file.
    pub fn as_file(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory(_) => None,
        }
    }

    /// Size in bytes: content length for files, 0 for directories.
    pub fn size(&self) -> u64 {
        match self {
            Node::File { content } => content.len() as u64,
            Node::Directory(_) => 0,
        }
    }

    /// Listing row for this node under the given name.
    pub fn entry(&self, name: &str) -> DirEntry {
        match self {
            Node::File { content } => DirEntry::file(name, content.len() as u64),
            Node::Directory(_) => DirEntry::directory(name),
        }
    }
}

/// A directory: an insertion-ordered set of uniquely named children.
///
/// Names are stored upper-case; lookups upper-case their argument, so
/// `readme.txt` and `README.TXT` name the same child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    children: Vec<(String, Arc<Node>)>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a file child.
    pub fn with_file(mut self, name: &str, content: impl Into<String>) -> Self {
        self.put(name, Node::file(content));
        self
    }

    /// Builder: add a subdirectory child.
    pub fn with_dir(mut self, name: &str, dir: Directory) -> Self {
        self.put(name, Node::Directory(dir));
        self
    }

    /// Look up a direct child by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        let key = name.to_uppercase();
        self.children
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, node)| node.as_ref())
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(n, node)| (n.as_str(), node.as_ref()))
    }

    /// Listing rows in insertion order.
    pub fn entries(&self) -> Vec<DirEntry> {
        self.children().map(|(name, node)| node.entry(name)).collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Mutable access to a child, un-sharing it first.
    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        let key = name.to_uppercase();
        self.children
            .iter_mut()
            .find(|(n, _)| *n == key)
            .map(|(_, node)| Arc::make_mut(node))
    }

    /// Create or replace a file. Replacing keeps the child's position.
    pub(crate) fn set_file(&mut self, name: &str, content: String) -> Result<(), FsError> {
        let key = name.to_uppercase();
        match self.children.iter_mut().find(|(n, _)| *n == key) {
            Some((_, existing)) if existing.is_dir() => Err(FsError::IsADirectory(key)),
            Some((_, existing)) => {
                *existing = Arc::new(Node::file(content));
                Ok(())
            }
            None => {
                self.children.push((key, Arc::new(Node::file(content))));
                Ok(())
            }
        }
    }

    fn put(&mut self, name: &str, node: Node) {
        let key = name.to_uppercase();
        match self.children.iter_mut().find(|(n, _)| *n == key) {
            Some((_, existing)) => *existing = Arc::new(node),
            None => self.children.push((key, Arc::new(node))),
        }
    }
}
