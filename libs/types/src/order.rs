//! Order types
//!
//! An order has an immutable identity (id, type, instrument, price, side)
//! and a quantity that the matching engine reduces as the order fills.

use crate::errors::BookError;
use crate::ids::{InstrumentId, OrderId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Numeric side code (0 = buy, 1 = sell)
    pub fn code(&self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = BookError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Side::Buy),
            1 => Ok(Side::Sell),
            other => Err(BookError::InvalidSide {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Side {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" | "BID" => Ok(Side::Buy),
            "SELL" | "ASK" => Ok(Side::Sell),
            _ => Err(BookError::InvalidSide { value: s.to_string() }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type tag
///
/// Only limit orders exist. Market orders have no matching rule in this
/// book and are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    #[default]
    Limit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "Limit"),
        }
    }
}

/// A unit of trading intent, incoming or resting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub order_type: OrderType,
    pub instrument: InstrumentId,
    pub price: Price,
    /// Remaining (unfilled) quantity
    pub quantity: Quantity,
    pub side: Side,
}

impl Order {
    pub fn new(
        order_id: OrderId,
        order_type: OrderType,
        instrument: InstrumentId,
        price: Price,
        quantity: Quantity,
        side: Side,
    ) -> Self {
        Self {
            order_id,
            order_type,
            instrument,
            price,
            quantity,
            side,
        }
    }

    /// Create a limit order
    pub fn limit(
        order_id: u64,
        instrument: impl Into<InstrumentId>,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self::new(
            OrderId::new(order_id),
            OrderType::Limit,
            instrument.into(),
            price,
            quantity,
            side,
        )
    }

    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Copy of this order carrying a different quantity
    ///
    /// Used to build amendments for `OrderBook::update`.
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.order_id, self.order_type, self.instrument, self.price, self.quantity, self.side
        )
    }
}
