//! File System Types
//!
//! Core types for the virtual file system: the node tree, directory
//! listings and the errors raised by structural operations.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// File system errors
///
/// The `Display` form of each variant is the exact line shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("Error: Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Error: File not found: {path}")]
    FileNotFound { path: String },

    #[error("Error: Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Error: Not a file: {path}")]
    NotAFile { path: String },

    #[error("Error: Directory already exists: {name}")]
    DirectoryExists { name: String },

    #[error("Error: File or directory already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Error: Directory not empty: {name}")]
    NotEmpty { name: String },

    #[error("Error: Invalid name: '{name}'")]
    InvalidName { name: String },
}

/// Kind of a node, as reported by listings and `stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// A node of the tree.
///
/// Every directory exclusively owns its children, so the tree is acyclic by
/// construction and each node has exactly one name path from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory { children: BTreeMap<String, Node> },
    File { content: String },
}

impl Node {
    /// Create an empty directory node.
    pub fn directory() -> Self {
        Node::Directory { children: BTreeMap::new() }
    }

    /// Create a file node holding `content`.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File { content: content.into() }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    /// Check if node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Check if node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Children of a directory; `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

/// Result of listing a directory.
///
/// An empty directory is reported as `Empty` rather than an empty vector so
/// callers cannot confuse it with a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Entries(Vec<DirEntry>),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// Entries in name order (empty slice for `Empty`).
    pub fn entries(&self) -> &[DirEntry] {
        match self {
            Listing::Empty => &[],
            Listing::Entries(entries) => entries,
        }
    }

    /// Check whether the listing contains `name` with the given kind.
    pub fn contains(&self, name: &str, kind: NodeKind) -> bool {
        self.entries().iter().any(|e| e.name == name && e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kinds() {
        assert_eq!(Node::directory().kind(), NodeKind::Directory);
        assert_eq!(Node::file("x").kind(), NodeKind::File);
        assert!(Node::directory().is_directory());
        assert!(Node::file("").is_file());
    }

    #[test]
    fn test_file_has_no_children() {
        assert!(Node::file("content").children().is_none());
        assert_eq!(Node::directory().children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_empty_listing_is_not_entries() {
        assert!(Listing::Empty.is_empty());
        assert!(Listing::Empty.entries().is_empty());
        assert!(!Listing::Entries(vec![]).is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = FsError::DirectoryNotFound { path: "nope".to_string() };
        assert_eq!(err.to_string(), "Error: Directory not found: nope");
        let err = FsError::AlreadyExists { name: "a".to_string() };
        assert_eq!(err.to_string(), "Error: File or directory already exists: a");
        let err = FsError::DirectoryExists { name: "a".to_string() };
        assert_eq!(err.to_string(), "Error: Directory already exists: a");
    }
}
