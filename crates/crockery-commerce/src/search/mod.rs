//! Catalog search module.

mod filter;

pub use filter::{filter_products, NameFilter};
