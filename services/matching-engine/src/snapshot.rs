//! Read-only views of the order book
//!
//! Snapshots own their data: later book mutations never show through.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::ids::InstrumentId;
use types::numeric::{Price, Quantity};
use types::order::Order;

/// Aggregated view of one price level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub price: Price,
    pub quantity: Quantity,
    pub order_count: usize,
}

/// Resting orders of both sides as of one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub instrument: InstrumentId,
    /// Best (highest) bid first, FIFO within a price
    pub bids: Vec<Order>,
    /// Best (lowest) ask first, FIFO within a price
    pub asks: Vec<Order>,
}

impl BookSnapshot {
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Ladder rendering for manual inspection; asks are printed highest first
/// so the spread sits in the middle.
impl fmt::Display for BookSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----OrderBook----")?;
        writeln!(f, "Ticker: {}", self.instrument)?;
        writeln!(f, "-----------------")?;
        writeln!(f, "Ask--------------")?;
        for ask in self.asks.iter().rev() {
            writeln!(f, "{}, {}", ask.price, ask.quantity)?;
        }
        writeln!(f, "Ask--------------")?;
        writeln!(f, "Bid--------------")?;
        for bid in &self.bids {
            writeln!(f, "{}, {}", bid.price, bid.quantity)?;
        }
        writeln!(f, "Bid--------------")?;
        write!(f, "-----------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::Side;

    #[test]
    fn test_display_layout() {
        let snapshot = BookSnapshot {
            instrument: InstrumentId::new("AAPL"),
            bids: vec![Order::limit(1, "AAPL", Side::Buy, Price::from_u64(201), Quantity::from_u64(10))],
            asks: vec![
                Order::limit(2, "AAPL", Side::Sell, Price::from_u64(205), Quantity::from_u64(5)),
                Order::limit(3, "AAPL", Side::Sell, Price::from_u64(210), Quantity::from_u64(7)),
            ],
        };

        let rendered = snapshot.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "Ticker: AAPL");
        assert_eq!(lines[4], "210, 7");
        assert_eq!(lines[5], "205, 5");
        assert_eq!(lines[8], "201, 10");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = BookSnapshot {
            instrument: InstrumentId::new("AAPL"),
            bids: Vec::new(),
            asks: Vec::new(),
        };
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let snapshot = BookSnapshot {
            instrument: InstrumentId::new("AAPL"),
            bids: vec![Order::limit(1, "AAPL", Side::Buy, "200.5".parse().unwrap(), Quantity::from_u64(10))],
            asks: Vec::new(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"price\":\"200.5\""));
        let back: BookSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);

        let level = LevelSummary {
            price: Price::from_u64(205),
            quantity: "15.25".parse().unwrap(),
            order_count: 2,
        };
        let value = serde_json::to_value(&level).unwrap();
        assert_eq!(value["quantity"], "15.25");
        assert_eq!(value["order_count"], 2);
    }
}
