//! In-memory key-value backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory store used off-browser and in tests.
///
/// Clones share the same map, so a test can keep one clone to inspect what
/// another component wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one raw value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .inner
            .borrow_mut()
            .values
            .insert(key.into(), value.into());
        store
    }

    /// Make every subsequent read fail, as a denied `localStorage` would.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    /// Make every subsequent write fail, as a full quota would.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Number of successful `set_raw` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(StorageError::Store(format!("read of '{}' refused", key)));
        }
        Ok(inner.values.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Store(format!("write of '{}' refused", key)));
        }
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().values.remove(key);
        Ok(())
    }
}
