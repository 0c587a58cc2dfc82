//! Checkout module.
//!
//! Contains the order summary shown on the cart page and the order
//! contract types reserved for a future backend.

mod order;
mod summary;

pub use order::{Order, OrderLine, OrderStatus};
pub use summary::OrderSummary;
