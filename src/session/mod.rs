//! Shell Session
//!
//! Per-session state: the file system, the current directory and the input
//! history. The current directory is kept as a canonical absolute path and
//! re-resolved on every use, so it can never dangle.

pub mod history;

use tracing::debug;

use crate::error::ShellError;
use crate::fs::{path, FsError, NodeKind, VirtualFileSystem, HOME_DIR};

pub use history::History;

/// Default prompt user.
pub const DEFAULT_USER: &str = "user";

/// Default prompt host.
pub const DEFAULT_HOST: &str = "memsh";

#[derive(Debug, Clone)]
pub struct ShellSession {
    fs: VirtualFileSystem,
    cwd: String,
    history: History,
    user: String,
    host: String,
}

impl ShellSession {
    /// Session over the seeded layout, positioned at `/home/user`.
    pub fn new() -> Self {
        Self {
            fs: VirtualFileSystem::seeded(),
            cwd: HOME_DIR.to_string(),
            history: History::new(),
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Session over `fs`, starting in `cwd` (which must be a directory).
    pub fn with_fs(fs: VirtualFileSystem, cwd: &str) -> Result<Self, FsError> {
        let cwd = path::canonicalize(cwd);
        match fs.kind_at(&cwd) {
            Some(NodeKind::Directory) => {}
            Some(NodeKind::File) => return Err(FsError::NotADirectory { path: cwd }),
            None => return Err(FsError::DirectoryNotFound { path: cwd }),
        }
        Ok(Self {
            fs,
            cwd,
            history: History::new(),
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
        })
    }

    pub fn set_identity(&mut self, user: impl Into<String>, host: impl Into<String>) {
        self.user = user.into();
        self.host = host.into();
    }

    /// Canonical absolute path of the current directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn fs(&self) -> &VirtualFileSystem {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFileSystem {
        &mut self.fs
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// `user@host:/path$`
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.user, self.host, self.cwd)
    }

    /// Move the session to `target`.
    ///
    /// A literal `..` drops the last segment of the current path (staying at
    /// `/` when already there). Anything else is joined onto the current
    /// path, or taken as-is when absolute. On failure nothing changes.
    pub fn change_directory(&mut self, target: &str) -> Result<(), ShellError> {
        let next = if target == ".." {
            path::parent(&self.cwd)
        } else {
            path::join(&self.cwd, target)
        };

        match self.fs.kind_at(&next) {
            Some(NodeKind::Directory) => {
                debug!(from = %self.cwd, to = %next, "changed directory");
                self.cwd = next;
                Ok(())
            }
            Some(NodeKind::File) => Err(FsError::NotADirectory { path: target.to_string() }.into()),
            None => Err(FsError::DirectoryNotFound { path: target.to_string() }.into()),
        }
    }
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new()
    }
}
