//! Shopping cart module.
//!
//! Contains the line item type, the pure cart reducer and the store that
//! owns cart state, persists it and hands out view handles.

mod item;
mod state;
mod store;

pub use item::CartItem;
pub use state::{CartAction, CartState};
pub use store::{CartHandle, CartStore, CommitHook, PersistCart};
