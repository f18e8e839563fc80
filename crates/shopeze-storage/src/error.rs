//! Storage error types.

use thiserror::Error;

/// Errors that can occur when writing to storage.
///
/// Reads never error: missing or malformed data is reported as absent.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to perform a backend write.
    #[error("Storage write failed: {0}")]
    Write(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Write(e.to_string())
    }
}
