//! Store error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from record store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested identifier
    #[error("No movie with id '{0}'")]
    NotFound(String),
}

/// Errors from loading the startup seed file
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("Failed to read seed file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not a valid movie array
    #[error("Invalid seed file '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
