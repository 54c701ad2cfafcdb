//! Shell Errors
//!
//! Every failure a command can report. None of them is fatal: the shell
//! turns each into a single error line and keeps running.

use thiserror::Error;

use crate::arithmetic::EvalError;
use crate::fs::FsError;

/// Coarse classification of a [`ShellError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingArgument,
    NotFound,
    AlreadyExists,
    NotADirectory,
    NotAFile,
    NotEmpty,
    InvalidName,
    UnknownCommand,
    EvaluationError,
    LinkOpenFailed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("Error: Missing {what}.")]
    MissingArgument { what: &'static str },

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("Command not found: {0}")]
    UnknownCommand(String),

    #[error("Error: Invalid expression: {0}.")]
    Evaluation(#[from] EvalError),

    #[error("Error: Could not open {url}: {reason}")]
    LinkOpen { url: String, reason: String },
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::MissingArgument { .. } => ErrorKind::MissingArgument,
            ShellError::UnknownCommand(_) => ErrorKind::UnknownCommand,
            ShellError::Evaluation(_) => ErrorKind::EvaluationError,
            ShellError::LinkOpen { .. } => ErrorKind::LinkOpenFailed,
            ShellError::Fs(fs) => match fs {
                FsError::DirectoryNotFound { .. } | FsError::FileNotFound { .. } => ErrorKind::NotFound,
                FsError::NotADirectory { .. } => ErrorKind::NotADirectory,
                FsError::NotAFile { .. } => ErrorKind::NotAFile,
                FsError::AlreadyExists { .. } | FsError::DirectoryExists { .. } => ErrorKind::AlreadyExists,
                FsError::NotEmpty { .. } => ErrorKind::NotEmpty,
                FsError::InvalidName { .. } => ErrorKind::InvalidName,
            },
        }
    }
}
