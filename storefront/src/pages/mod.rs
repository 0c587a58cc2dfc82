//! Routed pages.

mod cart;
mod catalog;

pub use cart::CartPage;
pub use catalog::CatalogPage;
