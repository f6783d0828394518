//! Error types for the order book
//!
//! Every error is returned synchronously to the caller. A failed operation
//! leaves the book exactly as it was before the call.

use crate::ids::OrderId;
use crate::numeric::Price;
use crate::order::Side;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookError {
    #[error("Invalid order side: {value}")]
    InvalidSide { value: String },

    #[error("Invalid order: {reason}")]
    InvalidOrder { reason: String },

    #[error("Order {order_id} not found on {side} side")]
    NotFound { side: Side, order_id: OrderId },

    #[error("Price mismatch for order {order_id}: resting at {resting}, requested {requested}")]
    PriceMismatch {
        order_id: OrderId,
        resting: Price,
        requested: Price,
    },
}

impl BookError {
    pub fn invalid_order(reason: impl Into<String>) -> Self {
        BookError::InvalidOrder {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = BookError::NotFound {
            side: Side::Sell,
            order_id: OrderId::new(99),
        };
        assert_eq!(err.to_string(), "Order 99 not found on SELL side");
    }

    #[test]
    fn test_price_mismatch_display() {
        let err = BookError::PriceMismatch {
            order_id: OrderId::new(5),
            resting: Price::from_u64(205),
            requested: Price::from_u64(206),
        };
        assert!(err.to_string().contains("resting at 205"));
        assert!(err.to_string().contains("requested 206"));
    }

    #[test]
    fn test_invalid_order_helper() {
        let err = BookError::invalid_order("quantity must be positive");
        assert_eq!(err.to_string(), "Invalid order: quantity must be positive");
    }
}
