//! Error types for the mkcpp CLI.
//!
//! Uses thiserror for derive macros. Each error is a single line the user
//! sees before the process exits.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mkcpp operations.
#[derive(Error, Debug)]
pub enum MkcppError {
    /// No project name was supplied (or it was empty).
    #[error("project name required")]
    MissingName,

    /// The target directory, or a file of the same name, already exists.
    #[error("directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A directory/file creation or permission change failed.
    #[error("{context}: {source}")]
    Filesystem {
        context: String,
        source: std::io::Error,
    },
}

impl MkcppError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Every failure maps to the same user-error code; the variants exist so
    /// callers and tests can tell precondition failures apart from I/O
    /// trouble.
    pub fn exit_code(&self) -> i32 {
        match self {
            MkcppError::MissingName => exit_codes::USER_ERROR,
            MkcppError::AlreadyExists(_) => exit_codes::USER_ERROR,
            MkcppError::Filesystem { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for mkcpp operations.
pub type Result<T> = std::result::Result<T, MkcppError>;
