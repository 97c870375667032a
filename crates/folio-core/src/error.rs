//! Error types for Folio operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Folio crates. Uses `thiserror` for derive macros.
//!
//! Header parsing and rendering never fail; these errors come from the
//! edges of the pipeline: reading a document source, loading configuration,
//! and slug lookups against an index.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Folio operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error, with the path that was being accessed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or walked.
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

    /// The document source could not enumerate its documents.
    #[error("Document source error: {0}")]
    Source(String),
}

impl Error {
    /// Create an I/O error for a specific path.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a document source error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Returns `true` if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias using Folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;
