//! CrockeryShop storefront
//!
//! Client-side rendered Leptos app:
//! - Catalog page with search, banner carousel and product grid
//! - Cart page with order summary
//! - "Buy now" handoff to a messaging deep link
//!
//! All cart logic lives in `crockery-commerce`; this crate is views and
//! browser glue.

mod app;
mod cart;
mod components;
mod pages;

pub use app::App;
pub use cart::ShopCart;
