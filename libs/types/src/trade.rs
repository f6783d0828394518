//! Trade execution record
//!
//! A trade is one match event between an incoming (taker) order and a
//! resting (maker) order. It always prints at the maker's price.

use crate::ids::{InstrumentId, OrderId, TradeId};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub taker_order_id: OrderId,
    pub maker_order_id: OrderId,
    pub instrument: InstrumentId,
    /// Execution price (maker's price)
    pub price: Price,
    pub quantity: Quantity,
    /// Taker side
    pub side: Side,
}

impl Trade {
    pub fn new(
        trade_id: TradeId,
        taker_order_id: OrderId,
        maker_order_id: OrderId,
        instrument: InstrumentId,
        price: Price,
        quantity: Quantity,
        side: Side,
    ) -> Self {
        Self {
            trade_id,
            taker_order_id,
            maker_order_id,
            instrument,
            price,
            quantity,
            side,
        }
    }

    /// Trade value (price × quantity)
    pub fn notional(&self) -> Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.trade_id, self.instrument, self.price, self.quantity, self.side
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade::new(
            TradeId::new(1),
            OrderId::new(9),
            OrderId::new(5),
            InstrumentId::new("AAPL"),
            "205.5".parse().unwrap(),
            Quantity::from_u64(10),
            Side::Buy,
        )
    }

    #[test]
    fn test_trade_notional() {
        assert_eq!(sample_trade().notional(), Decimal::from(2055));
    }

    #[test]
    fn test_trade_display() {
        assert_eq!(sample_trade().to_string(), "1,AAPL,205.5,10,BUY");
    }

    #[test]
    fn test_trade_serialization() {
        let trade = sample_trade();
        let json = serde_json::to_string(&trade).unwrap();
        let deserialized: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deserialized);
    }
}
