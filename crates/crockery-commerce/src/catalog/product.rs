//! Product and banner types.

use crate::cart::CartItem;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description shown on the card.
    pub description: String,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Image URL or asset path.
    pub image_url: String,
    /// Optional merchandising category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Create a product with no category.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
            category: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Build the cart line this product adds.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.price,
            self.image_url.clone(),
        )
    }
}

/// One image in the catalog page's banner carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSlide {
    pub id: u32,
    pub src: String,
    pub alt: String,
}

impl BannerSlide {
    pub fn new(id: u32, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id,
            src: src.into(),
            alt: alt.into(),
        }
    }
}
