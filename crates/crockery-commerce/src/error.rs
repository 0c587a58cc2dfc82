//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The cart store backing a handle has been dropped.
    #[error("Cart store used outside its lifetime: the owning store has been dropped")]
    StoreUnavailable,

    /// A price was negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// The external deep link could not be opened.
    #[error("Unable to open link: {0}")]
    HandoffFailed(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crockery_storage::StorageError> for CommerceError {
    fn from(e: crockery_storage::StorageError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
