//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing a storage slot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slot key is empty or contains characters the backend cannot store.
    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),
}
