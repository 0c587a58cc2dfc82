//! "Buy now" messaging deep link.
//!
//! Builds a pre-filled message for a product and hands the resulting URL to
//! a [`LinkOpener`]. The browser opener lives in the storefront; tests use
//! recording or failing openers.

use crate::catalog::Product;
use crate::config::HandoffConfig;
use crate::error::CommerceError;

/// Opens an external URL in a new browsing context.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), CommerceError>;
}

impl<T: LinkOpener + ?Sized> LinkOpener for &T {
    fn open(&self, url: &str) -> Result<(), CommerceError> {
        (**self).open(url)
    }
}

/// Deep link builder for a fixed messaging destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHandoff {
    base_url: String,
    phone_id: String,
}

impl MessageHandoff {
    pub fn new(base_url: impl Into<String>, phone_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            phone_id: phone_id.into(),
        }
    }

    pub fn from_config(config: &HandoffConfig) -> Self {
        Self::new(config.base_url.clone(), config.phone_id.clone())
    }

    /// The plain-text enquiry for a product.
    pub fn message(&self, product: &Product) -> String {
        [
            "Hello, I am interested in purchasing:".to_string(),
            String::new(),
            format!("Product: {}", product.name),
            format!("Description: {}", product.description),
            format!("Price: ${}", product.price.display_amount()),
            String::new(),
            "Please provide more details and let me know how to proceed.".to_string(),
        ]
        .join("\n")
    }

    /// `{base_url}/{phone_id}/?text={encoded message}`
    pub fn link(&self, product: &Product) -> String {
        format!(
            "{}/{}/?text={}",
            self.base_url.trim_end_matches('/'),
            self.phone_id,
            urlencoding::encode(&self.message(product))
        )
    }

    /// Open the deep link for a product. Returns the URL that was opened.
    ///
    /// Opener failures come back as [`CommerceError::HandoffFailed`] so the
    /// caller can show a notice.
    pub fn hand_off(&self, product: &Product, opener: &impl LinkOpener) -> Result<String, CommerceError> {
        let url = self.link(product);
        match opener.open(&url) {
            Ok(()) => Ok(url),
            Err(CommerceError::HandoffFailed(reason)) => Err(CommerceError::HandoffFailed(reason)),
            Err(other) => Err(CommerceError::HandoffFailed(other.to_string())),
        }
    }
}

impl Default for MessageHandoff {
    fn default() -> Self {
        Self::from_config(&HandoffConfig::default())
    }
}
