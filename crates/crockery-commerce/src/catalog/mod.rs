//! Product catalog module.
//!
//! Contains the product record, the banner slide record and the fixed
//! sample catalog the storefront ships with.

mod product;
mod sample;

pub use product::{BannerSlide, Product};
pub use sample::{banner_slides, sample_catalog};
