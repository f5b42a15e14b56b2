//! Error types for datefinder.
//!
//! Matching itself cannot fail. Everything here belongs to the input
//! boundary, where strings are collected from files before being scanned.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for input acquisition.
pub type FinderResult<T> = Result<T, FinderError>;

/// Errors raised while collecting input strings.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Error occurred while reading a file
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File content is not valid UTF-8
    #[error("Invalid encoding in '{}': {reason}", .path.display())]
    InvalidEncoding { path: PathBuf, reason: String },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}
