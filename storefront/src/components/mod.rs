//! Shared view components.

mod notice;
mod product_card;

pub use notice::{Notice, NoticeBanner};
pub use product_card::ProductCard;
