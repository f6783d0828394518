//! Identifier types for book entities
//!
//! Order ids are assigned by the caller and must be unique among live
//! orders. Trade ids are assigned by the book from a per-book counter, so
//! they are plain integers ordered by execution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Book-assigned identifier for a trade
///
/// Strictly increasing and gap-free within one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(u64);

impl TradeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    ///
    /// # Panics
    /// Panics on overflow; callers check room first with `checked_add`.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The id `count` places after this one, if it fits in a u64
    pub fn checked_add(&self, count: u64) -> Option<Self> {
        self.0.checked_add(count).map(Self)
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instrument identifier (ticker)
///
/// Free-form symbol such as "AAPL" or "BTC/USDT". Must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Create a new InstrumentId from a string
    ///
    /// # Panics
    /// Panics if the symbol is empty
    pub fn new(symbol: impl Into<String>) -> Self {
        let s = symbol.into();
        assert!(!s.trim().is_empty(), "InstrumentId must not be empty");
        Self(s)
    }

    /// Try to create an InstrumentId, returning None if empty
    pub fn try_new(symbol: impl Into<String>) -> Option<Self> {
        let s = symbol.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_ordering() {
        assert!(OrderId::new(1) < OrderId::new(2));
        assert_eq!(OrderId::from(7).as_u64(), 7);
    }

    #[test]
    fn test_trade_id_next() {
        let id = TradeId::new(41);
        assert_eq!(id.next(), TradeId::new(42));
    }

    #[test]
    fn test_instrument_try_new() {
        assert!(InstrumentId::try_new("AAPL").is_some());
        assert!(InstrumentId::try_new("  ").is_none());
    }

    #[test]
    #[should_panic(expected = "InstrumentId must not be empty")]
    fn test_instrument_empty_panics() {
        InstrumentId::new("");
    }

    #[test]
    fn test_id_serialization() {
        let json = serde_json::to_string(&OrderId::new(5)).unwrap();
        assert_eq!(json, "5");

        let market = InstrumentId::new("AAPL");
        let json = serde_json::to_string(&market).unwrap();
        assert_eq!(json, "\"AAPL\"");
        let deserialized: InstrumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(market, deserialized);
    }
}
