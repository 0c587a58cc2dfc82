//! Order contract types.
//!
//! These mirror the shape a future order backend is expected to accept.
//! Nothing in the storefront creates or reads them yet.

use crate::ids::{OrderId, ProductId, UserId};
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// A product and how many of it were ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderLine>,
    #[serde(with = "money::decimal")]
    pub total_amount: Money,
    /// Unix timestamp (seconds).
    pub order_date: i64,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_shape() {
        let order = Order {
            id: OrderId::new("o-1"),
            user_id: UserId::new("u-1"),
            items: vec![OrderLine {
                product_id: ProductId::new("3"),
                quantity: 2,
            }],
            total_amount: Money::usd(2598),
            order_date: 1_700_000_000,
            status: OrderStatus::Confirmed,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["userId"], "u-1");
        assert_eq!(json["items"][0]["productId"], "3");
        assert_eq!(json["totalAmount"], 25.98);
        assert_eq!(json["orderDate"], 1_700_000_000);
        assert_eq!(json["status"], "confirmed");
    }
}
