//! Crossing detection logic
//!
//! Determines when an incoming order can trade against a resting price.

use types::numeric::Price;
use types::order::Side;

/// Check if a bid and ask can match at given prices
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming order crosses a resting price on the opposite side
///
/// A buy crosses an ask at or below its limit; a sell crosses a bid at or
/// above its limit.
pub fn incoming_can_match(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::Buy => can_match(incoming_price, resting_price),
        Side::Sell => can_match(resting_price, incoming_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_match_crossing() {
        assert!(can_match(Price::from_u64(206), Price::from_u64(205)));
    }

    #[test]
    fn test_can_match_exact() {
        let price = Price::from_u64(205);
        assert!(can_match(price, price), "Equal prices should match");
    }

    #[test]
    fn test_can_match_no_cross() {
        assert!(!can_match(Price::from_u64(201), Price::from_u64(205)));
    }

    #[test]
    fn test_incoming_buy() {
        assert!(incoming_can_match(Side::Buy, Price::from_u64(206), Price::from_u64(205)));
        assert!(!incoming_can_match(Side::Buy, Price::from_u64(204), Price::from_u64(205)));
    }

    #[test]
    fn test_incoming_sell() {
        assert!(incoming_can_match(Side::Sell, Price::from_u64(200), Price::from_u64(201)));
        assert!(!incoming_can_match(Side::Sell, Price::from_u64(202), Price::from_u64(201)));
    }

    #[test]
    fn test_zero_price_sell_crosses_any_bid() {
        assert!(incoming_can_match(Side::Sell, Price::zero(), Price::from_u64(1)));
    }
}
