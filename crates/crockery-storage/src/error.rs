//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store cannot be reached (no window, access denied).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A read or write against the backend failed.
    #[error("Store operation failed: {0}")]
    Store(String),
}
