//! Cart line item.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// One line in the cart, created by one "add to cart" action.
///
/// Lines are never merged: adding the same product twice yields two lines
/// with the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier.
    pub id: ProductId,
    /// Product name (denormalized for display).
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price, persisted as a decimal number.
    #[serde(with = "money::decimal")]
    pub price: Money,
    #[serde(default)]
    pub image_url: String,
    /// Reserved for quantity tracking; the cart never sets or reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl CartItem {
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
            quantity: None,
        }
    }

    /// Check the unit price is non-negative.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::InvalidPrice(format!(
                "{} for item {}",
                self.price, self.id
            )));
        }
        Ok(())
    }
}
