//! In-Memory File System Implementation
//!
//! The tree lives entirely in memory for the lifetime of the session.
//! Every structural operation is scoped to a directory given by its
//! canonical absolute path (normally the session's current directory) and
//! either applies completely or not at all.

use std::collections::BTreeMap;

use tracing::debug;

use super::path;
use super::types::*;

/// Content of the seeded `/documents.txt`.
pub const SAMPLE_DOCUMENT: &str = "This is a sample document.";

/// Home directory of the seeded layout.
pub const HOME_DIR: &str = "/home/user";

/// In-memory virtual file system rooted at `/`.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: Node,
}

impl VirtualFileSystem {
    /// Create a file system holding only the root directory.
    pub fn new() -> Self {
        Self { root: Node::directory() }
    }

    /// Create the fixed startup layout:
    ///
    /// ```text
    /// /
    /// ├── bin/
    /// ├── documents.txt
    /// ├── etc/
    /// └── home/
    ///     └── user/
    /// ```
    pub fn seeded() -> Self {
        let home = Node::Directory {
            children: BTreeMap::from([("user".to_string(), Node::directory())]),
        };
        let root = Node::Directory {
            children: BTreeMap::from([
                ("home".to_string(), home),
                ("bin".to_string(), Node::directory()),
                ("etc".to_string(), Node::directory()),
                ("documents.txt".to_string(), Node::file(SAMPLE_DOCUMENT)),
            ]),
        };
        Self { root }
    }

    /// Resolve `target` starting from directory `start` and report its kind.
    pub fn stat(&self, start: &str, target: &str) -> Result<NodeKind, FsError> {
        let origin = path::walk(&self.root, &path::segments(start)).ok_or_else(|| {
            FsError::DirectoryNotFound { path: start.to_string() }
        })?;
        path::resolve(&self.root, origin, target)
            .map(Node::kind)
            .ok_or_else(|| FsError::DirectoryNotFound { path: target.to_string() })
    }

    /// Kind of the node at an absolute path, if any.
    pub fn kind_at(&self, absolute: &str) -> Option<NodeKind> {
        path::walk(&self.root, &path::segments(absolute)).map(Node::kind)
    }

    /// List the entries of `dir` in name order.
    pub fn list(&self, dir: &str) -> Result<Listing, FsError> {
        let children = self.children(dir)?;
        if children.is_empty() {
            return Ok(Listing::Empty);
        }
        Ok(Listing::Entries(
            children
                .iter()
                .map(|(name, node)| DirEntry { name: name.clone(), kind: node.kind() })
                .collect(),
        ))
    }

    /// Create an empty subdirectory `name` in `dir`.
    pub fn create_directory(&mut self, dir: &str, name: &str) -> Result<(), FsError> {
        self.insert(dir, name, Node::directory())
    }

    /// Create an empty file `name` in `dir`.
    pub fn create_file(&mut self, dir: &str, name: &str) -> Result<(), FsError> {
        self.insert(dir, name, Node::file(""))
    }

    /// Remove the empty subdirectory `name` from `dir`.
    pub fn remove_directory(&mut self, dir: &str, name: &str) -> Result<(), FsError> {
        let children = self.children_mut(dir)?;
        match children.get(name) {
            None => return Err(FsError::DirectoryNotFound { path: name.to_string() }),
            Some(Node::File { .. }) => return Err(FsError::NotADirectory { path: name.to_string() }),
            Some(Node::Directory { children: grandchildren }) if !grandchildren.is_empty() => {
                return Err(FsError::NotEmpty { name: name.to_string() });
            }
            Some(Node::Directory { .. }) => {}
        }
        children.remove(name);
        debug!(dir, name, "removed directory");
        Ok(())
    }

    /// Remove the file `name` from `dir`.
    pub fn remove_file(&mut self, dir: &str, name: &str) -> Result<(), FsError> {
        let children = self.children_mut(dir)?;
        match children.get(name) {
            None => return Err(FsError::FileNotFound { path: name.to_string() }),
            Some(Node::Directory { .. }) => return Err(FsError::NotAFile { path: name.to_string() }),
            Some(Node::File { .. }) => {}
        }
        children.remove(name);
        debug!(dir, name, "removed file");
        Ok(())
    }

    /// Read the content of file `name` in `dir`.
    pub fn read_file(&self, dir: &str, name: &str) -> Result<&str, FsError> {
        match self.children(dir)?.get(name) {
            Some(Node::File { content }) => Ok(content),
            Some(Node::Directory { .. }) => Err(FsError::NotAFile { path: name.to_string() }),
            None => Err(FsError::FileNotFound { path: name.to_string() }),
        }
    }

    /// Replace the content of file `name` in `dir`, creating it if needed.
    pub fn write_file(&mut self, dir: &str, name: &str, content: &str) -> Result<(), FsError> {
        validate_name(name)?;
        let children = self.children_mut(dir)?;
        match children.get_mut(name) {
            Some(Node::File { content: existing }) => {
                *existing = content.to_string();
            }
            Some(Node::Directory { .. }) => {
                return Err(FsError::NotAFile { path: name.to_string() });
            }
            None => {
                children.insert(name.to_string(), Node::file(content));
            }
        }
        debug!(dir, name, bytes = content.len(), "wrote file");
        Ok(())
    }

    fn insert(&mut self, dir: &str, name: &str, node: Node) -> Result<(), FsError> {
        validate_name(name)?;
        let children = self.children_mut(dir)?;
        let kind = node.kind();
        if children.contains_key(name) {
            return Err(match kind {
                NodeKind::Directory => FsError::DirectoryExists { name: name.to_string() },
                NodeKind::File => FsError::AlreadyExists { name: name.to_string() },
            });
        }
        children.insert(name.to_string(), node);
        debug!(dir, name, ?kind, "created node");
        Ok(())
    }

    fn children(&self, dir: &str) -> Result<&BTreeMap<String, Node>, FsError> {
        match path::walk(&self.root, &path::segments(dir)) {
            Some(node) => node
                .children()
                .ok_or_else(|| FsError::NotADirectory { path: dir.to_string() }),
            None => Err(FsError::DirectoryNotFound { path: dir.to_string() }),
        }
    }

    fn children_mut(
        &mut self,
        dir: &str,
    ) -> Result<&mut BTreeMap<String, Node>, FsError> {
        match path::walk_mut(&mut self.root, &path::segments(dir)) {
            Some(node) => node
                .children_mut()
                .ok_or_else(|| FsError::NotADirectory { path: dir.to_string() }),
            None => Err(FsError::DirectoryNotFound { path: dir.to_string() }),
        }
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// A child name must be a single resolvable segment.
fn validate_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(path::SEPARATOR) {
        return Err(FsError::InvalidName { name: name.to_string() });
    }
    Ok(())
}
