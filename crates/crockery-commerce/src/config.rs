//! Storefront configuration.
//!
//! Every section has defaults, so an empty document is a valid config:
//!
//! ```toml
//! [storage]
//! cart_key = "cart"
//!
//! [pricing]
//! tax_rate_percent = 10.0
//! free_shipping_threshold = 50.0
//! flat_shipping = 5.0
//!
//! [carousel]
//! autoplay_interval_ms = 5000
//!
//! [cart_page]
//! removal_delay_ms = 300
//!
//! [handoff]
//! base_url = "https://wa.me"
//! phone_id = "919207232303"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::{self, Money};

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub storage: StorageConfig,
    pub pricing: PricingConfig,
    pub carousel: CarouselConfig,
    pub cart_page: CartPageConfig,
    pub handoff: HandoffConfig,
}

impl ShopConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }
}

/// Where the cart is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Local storage key holding the JSON item array.
    pub cart_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: "cart".to_string(),
        }
    }
}

/// Tax and shipping rules for the order summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Tax as a percentage of the subtotal.
    pub tax_rate_percent: f64,
    /// Shipping is free when the subtotal is strictly above this amount.
    #[serde(with = "money::decimal")]
    pub free_shipping_threshold: Money,
    /// Shipping charged at or below the threshold.
    #[serde(with = "money::decimal")]
    pub flat_shipping: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: 10.0,
            free_shipping_threshold: Money::usd(5_000),
            flat_shipping: Money::usd(500),
        }
    }
}

/// Banner carousel timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5_000,
        }
    }
}

/// Cart page behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartPageConfig {
    /// Exit animation length before a removal commits.
    pub removal_delay_ms: u64,
}

impl CartPageConfig {
    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }
}

impl Default for CartPageConfig {
    fn default() -> Self {
        Self {
            removal_delay_ms: 300,
        }
    }
}

/// "Buy now" messaging deep link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    pub base_url: String,
    /// Destination phone number with country code and no `+`.
    pub phone_id: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me".to_string(),
            phone_id: "919207232303".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ShopConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.storage.cart_key, "cart");
        assert_eq!(config.carousel.autoplay_interval(), Duration::from_millis(5000));
        assert_eq!(config.cart_page.removal_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = ShopConfig::from_toml_str(
            r#"
            [pricing]
            tax_rate_percent = 8.5

            [handoff]
            phone_id = "15550100"
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.tax_rate_percent, 8.5);
        assert_eq!(config.pricing.free_shipping_threshold, Money::usd(5_000));
        assert_eq!(config.pricing.flat_shipping, Money::usd(500));
        assert_eq!(config.handoff.phone_id, "15550100");
        assert_eq!(config.handoff.base_url, "https://wa.me");
    }

    #[test]
    fn test_decimal_prices() {
        let config = ShopConfig::from_toml_str(
            r#"
            [pricing]
            free_shipping_threshold = 75.5
            flat_shipping = 4.99
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.free_shipping_threshold, Money::usd(7_550));
        assert_eq!(config.pricing.flat_shipping, Money::usd(499));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = ShopConfig::from_toml_str("[pricing]\ntax_rate_percent = \"ten\"");
        assert!(matches!(result, Err(CommerceError::Config(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = ShopConfig::from_toml_str("[pricing]\nflat_shipping = -1.0");
        assert!(result.is_err());
    }
}
