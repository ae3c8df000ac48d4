//! Error types for loading content trees and configuration.
//!
//! Route resolution and widget rendering never fail: an unmatched path is a valid state. Only the
//! collaborators that touch the filesystem or parse external data report errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading content, configuration or writing a built site.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem access failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A JSON page tree could not be decoded.
    #[error("Invalid page tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML configuration could not be decoded.
    #[error("Invalid configuration in {path}: {message}")]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// The markdown grammar or title query failed to load.
    #[error("Markdown parser error: {0}")]
    Parser(String),

    /// Two pages in one tree share a path.
    #[error("Duplicate page path: {0}")]
    DuplicatePath(String),

    /// A page path would be written outside the output directory.
    #[error("Page path escapes the output directory: {0}")]
    UnsafePath(String),
}

impl Error {
    #[must_use]
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
