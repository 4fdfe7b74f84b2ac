//! Error types for the `trip-rag` crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading guides or configuring retrieval.
#[derive(Debug, Error)]
pub enum RagError {
    /// The guide file could not be read.
    #[error("Failed to read guide file {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The guide file is not valid JSON.
    #[error("Failed to parse guide file {}: {source}", path.display())]
    Parse {
        /// The path that was parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The guide file is valid JSON but not an array of records.
    #[error("Invalid guide file {}: {message}", path.display())]
    InvalidFormat {
        /// The path that was parsed.
        path: PathBuf,
        /// A description of the problem.
        message: String,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RagError>;
