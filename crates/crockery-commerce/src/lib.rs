//! Storefront domain types and logic for CrockeryShop.
//!
//! This crate holds everything the storefront does that is not markup:
//!
//! - **Catalog**: Products, banner slides, the fixed sample catalog
//! - **Search**: Case-insensitive name filtering
//! - **Cart**: Line items, the pure cart reducer, the persisted cart store
//! - **Checkout**: Order summary (tax, shipping, total), order contract types
//! - **Carousel**: Banner slide position with wrap-around
//! - **Handoff**: "Buy now" messaging deep links
//!
//! # Example
//!
//! ```rust
//! use crockery_commerce::prelude::*;
//! use crockery_observability::StructuredLogger;
//!
//! let config = ShopConfig::default();
//! let store = CartStore::new(StructuredLogger::new("cart-store"));
//! let cart = store.handle();
//!
//! for product in sample_catalog().iter().take(2) {
//!     cart.add_item(product.to_cart_item()).unwrap();
//! }
//!
//! let summary = OrderSummary::for_cart(&cart.snapshot(), &config.pricing).unwrap();
//! assert_eq!(summary.subtotal.display(), "$74.98");
//! assert!(summary.is_free_shipping());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod config;

pub mod account;
pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod handoff;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use config::ShopConfig;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{
        CarouselConfig, CartPageConfig, HandoffConfig, PricingConfig, ShopConfig, StorageConfig,
    };
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{banner_slides, sample_catalog, BannerSlide, Product};

    // Cart
    pub use crate::cart::{CartAction, CartHandle, CartItem, CartState, CartStore, CommitHook, PersistCart};

    // Checkout
    pub use crate::checkout::{Order, OrderLine, OrderStatus, OrderSummary};

    // Search
    pub use crate::search::{filter_products, NameFilter};

    pub use crate::account::User;
    pub use crate::carousel::Carousel;
    pub use crate::handoff::{LinkOpener, MessageHandoff};
}
