//! Key-value store wrapper with automatic serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// A string key-value backend.
///
/// Implemented by the browser's local storage and by [`MemoryStore`](crate::MemoryStore).
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a raw value under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}

/// Type-safe cache over a [`KeyValueStore`].
///
/// Values are stored as JSON text for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or holds an empty string. A
    /// value that is present but does not deserialize as `T` is an error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<CartItem>> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get_raw(key)? {
            Some(text) if !text.is_empty() => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.store.set_raw(key, &text)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.store.get_raw(key)?.is_some())
    }

    /// Access the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}
