//! Core error types for silentburn-core.
//!
//! This module defines the error hierarchy using thiserror for error
//! handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for silentburn-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to resolve or create the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Failed to read a key from the backing store
    #[error("Failed to read key '{key}' at {path}: {source}")]
    ReadFailed {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a key to the backing store
    #[error("Failed to write key '{key}' at {path}: {source}")]
    WriteFailed {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted data under a key failed to parse
    #[error("Corrupt data under key '{key}': {message}")]
    Corrupt { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
