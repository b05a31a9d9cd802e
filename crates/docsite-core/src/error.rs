//! Error types for docsite operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all docsite crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in docsite operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// HTTP request or response failure.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl Error {
    /// Wrap a bare I/O error.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(err)
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found_msg(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// True for failures that happened while talking to a remote source.
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

/// Result type alias using docsite's Error type.
pub type Result<T> = std::result::Result<T, Error>;
