//! memsh - a minimal shell over an in-memory filesystem
//!
//! This library provides a virtual filesystem, path resolution, a session
//! with navigation and history, and a registry of shell verbs that drive
//! them. Rendering, keystroke capture and host introspection are supplied
//! by the caller.

pub mod arithmetic;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod host;
pub mod output;
pub mod session;
pub mod shell;
pub mod terminal;

pub use error::{ErrorKind, ShellError};
pub use output::{BufferedSink, LineClass, OutputLine, OutputSink};
pub use shell::{Shell, ShellOptions};
