//! Type-safe key-value persistence for the CrockeryShop storefront.
//!
//! Wraps a string key-value backend with automatic JSON serialization.
//! In the browser the backend is `window.localStorage`; everywhere else
//! (and in tests) it is an in-memory map.
//!
//! # Example
//!
//! ```
//! use crockery_storage::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("cart", &vec!["1", "2"]).unwrap();
//!
//! let items: Option<Vec<String>> = cache.get("cart").unwrap();
//! assert_eq!(items, Some(vec!["1".to_string(), "2".to_string()]));
//! ```

mod error;
mod kv;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

pub use error::StorageError;
pub use kv::{Cache, KeyValueStore};
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, KeyValueStore, MemoryStore, StorageError};
}
