//! Cart state and its transitions.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Append a line, even if the product is already in the cart.
    Add(CartItem),
    /// Remove every line for this product.
    Remove(ProductId),
    /// Empty the cart.
    Clear,
}

impl CartAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add_item",
            CartAction::Remove(_) => "remove_item",
            CartAction::Clear => "clear_cart",
        }
    }
}

/// The cart's items and their derived total.
///
/// Fields are private so `total_amount` can only ever be the sum of `items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartItem>,
    total_amount: Money,
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty()
    }
}

impl CartState {
    /// The empty cart: no items, zero total.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_amount: Money::zero(Currency::USD),
        }
    }

    /// Build a state from a restored item sequence.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CommerceError> {
        for item in &items {
            item.validate()?;
        }
        let total_amount = sum_prices(&items)?;
        Ok(Self {
            items,
            total_amount,
        })
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of line prices. Excludes tax and shipping.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Number of lines (not distinct products).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any line carries this product.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Apply one action, returning the next state.
    ///
    /// The total is recomputed from the full item sequence every time.
    /// A rejected action (negative price, overflow) leaves no new state;
    /// the caller keeps the old one.
    pub fn reduce(self, action: CartAction) -> Result<CartState, CommerceError> {
        match action {
            CartAction::Add(item) => {
                item.validate()?;
                let mut items = self.items;
                items.push(item);
                CartState::from_items(items)
            }
            CartAction::Remove(id) => {
                let mut items = self.items;
                items.retain(|i| i.id != id);
                CartState::from_items(items)
            }
            CartAction::Clear => Ok(CartState::empty()),
        }
    }
}

fn sum_prices(items: &[CartItem]) -> Result<Money, CommerceError> {
    let currency = items
        .first()
        .map(|i| i.price.currency)
        .unwrap_or_default();
    if let Some(other) = items.iter().find(|i| i.price.currency != currency) {
        return Err(CommerceError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: other.price.currency.code().to_string(),
        });
    }
    Money::try_sum(items.iter().map(|i| &i.price), currency).ok_or(CommerceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), "", Money::usd(cents), "")
    }

    #[test]
    fn test_add_appends_duplicates() {
        let state = CartState::empty()
            .reduce(CartAction::Add(item("1", 1000)))
            .unwrap()
            .reduce(CartAction::Add(item("1", 1000)))
            .unwrap();

        assert_eq!(state.item_count(), 2);
        assert_eq!(state.total_amount(), Money::usd(2000));
    }

    #[test]
    fn test_remove_drops_every_matching_line() {
        let state = CartState::from_items(vec![item("1", 1000), item("2", 500), item("1", 1000)])
            .unwrap()
            .reduce(CartAction::Remove(ProductId::new("1")))
            .unwrap();

        assert_eq!(state.items(), &[item("2", 500)]);
        assert_eq!(state.total_amount(), Money::usd(500));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let before = CartState::from_items(vec![item("1", 1000), item("2", 500)]).unwrap();
        let after = before
            .clone()
            .reduce(CartAction::Remove(ProductId::new("99")))
            .unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let state = CartState::from_items(vec![item("1", 1000)])
            .unwrap()
            .reduce(CartAction::Clear)
            .unwrap();

        assert_eq!(state, CartState::empty());
        assert!(state.is_empty());
        assert!(state.total_amount().is_zero());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let state = CartState::empty()
            .reduce(CartAction::Add(item("3", 100)))
            .unwrap()
            .reduce(CartAction::Add(item("1", 100)))
            .unwrap()
            .reduce(CartAction::Add(item("2", 100)))
            .unwrap();

        let ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = CartState::empty().reduce(CartAction::Add(item("1", -5)));
        assert!(matches!(result, Err(CommerceError::InvalidPrice(_))));
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let mut eur = item("2", 100);
        eur.price = Money::new(100, Currency::EUR);
        let result = CartState::from_items(vec![item("1", 100)])
            .unwrap()
            .reduce(CartAction::Add(eur));
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_overflow_rejected() {
        let result = CartState::from_items(vec![item("1", i64::MAX)])
            .unwrap()
            .reduce(CartAction::Add(item("2", 1)));
        assert!(matches!(result, Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_action_names() {
        assert_eq!(CartAction::Add(item("1", 1)).name(), "add_item");
        assert_eq!(CartAction::Remove(ProductId::new("1")).name(), "remove_item");
        assert_eq!(CartAction::Clear.name(), "clear_cart");
    }
}
