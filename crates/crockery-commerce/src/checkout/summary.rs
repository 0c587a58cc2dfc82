//! Order summary figures for the cart page.

use crate::cart::CartState;
use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::money::Money;

/// Subtotal, tax, shipping and grand total for a cart.
///
/// Derived on every render and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Price a subtotal under `pricing`.
    ///
    /// Shipping is free only when the subtotal is strictly above the
    /// threshold; exactly at the threshold the flat rate applies.
    pub fn from_subtotal(subtotal: Money, pricing: &PricingConfig) -> Result<Self, CommerceError> {
        let tax = subtotal
            .percentage(pricing.tax_rate_percent)
            .ok_or(CommerceError::Overflow)?;

        let threshold = pricing.free_shipping_threshold;
        if threshold.currency != subtotal.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: subtotal.currency.code().to_string(),
                got: threshold.currency.code().to_string(),
            });
        }
        let shipping = if subtotal.amount_cents > threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            pricing.flat_shipping
        };

        let total = Money::try_sum([subtotal, tax, shipping].iter(), subtotal.currency)
            .ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: subtotal.currency.code().to_string(),
                got: shipping.currency.code().to_string(),
            })?;

        Ok(Self {
            subtotal,
            tax,
            shipping,
            total,
        })
    }

    /// Price the lines currently in the cart.
    pub fn for_cart(state: &CartState, pricing: &PricingConfig) -> Result<Self, CommerceError> {
        Self::from_subtotal(state.total_amount(), pricing)
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
