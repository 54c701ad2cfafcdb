//! File System Module
//!
//! Provides the in-memory virtual file system the shell operates on:
//! - `types`: nodes, listings and errors
//! - `path`: pure path resolution over the node tree
//! - `in_memory_fs`: the owned tree and its structural operations

pub mod in_memory_fs;
pub mod path;
pub mod types;

pub use in_memory_fs::{VirtualFileSystem, HOME_DIR, SAMPLE_DOCUMENT};
pub use types::*;
