//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Both types are non-negative by construction: a negative value can never
//! reach the book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building a numeric value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Cannot parse decimal from {input:?}")]
    Parse { input: String },

    #[error("Negative value not allowed: {value}")]
    Negative { value: String },
}

fn parse_non_negative(input: &str) -> Result<Decimal, NumericError> {
    let value = Decimal::from_str(input.trim()).map_err(|_| NumericError::Parse {
        input: input.to_string(),
    })?;
    non_negative(value)
}

fn non_negative(value: Decimal) -> Result<Decimal, NumericError> {
    if value < Decimal::ZERO {
        return Err(NumericError::Negative {
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Limit price
///
/// Zero is a valid price (a sell at zero crosses any bid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Wrap a decimal, returning None if it is negative
    pub fn try_new(value: Decimal) -> Option<Self> {
        non_negative(value).ok().map(Self)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_non_negative(s).map(Self)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        non_negative(value).map(Self)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order or trade quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Wrap a decimal, returning None if it is negative
    pub fn try_new(value: Decimal) -> Option<Self> {
        non_negative(value).ok().map(Self)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Add, returning None if the sum exceeds the decimal range
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, returning None if the result would be negative
    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        match self.0.cmp(&other.0) {
            Ordering::Less => None,
            _ => Some(Self(self.0 - other.0)),
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, other: Quantity) -> Quantity {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), |acc, q| acc + q)
    }
}

impl FromStr for Quantity {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_non_negative(s).map(Self)
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        non_negative(value).map(Self)
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parse() {
        let price: Price = "205.50".parse().unwrap();
        assert_eq!(price.as_decimal(), Decimal::new(20550, 2));
        assert_eq!(Price::from_str("0").unwrap(), Price::zero());
    }

    #[test]
    fn test_price_equality_ignores_scale() {
        // 205.0 and 205 must land on the same price level
        let a: Price = "205.0".parse().unwrap();
        let b = Price::from_u64(205);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            Price::from_str("-1"),
            Err(NumericError::Negative { value: "-1".to_string() })
        );
        assert!(Quantity::try_new(Decimal::new(-5, 1)).is_none());
        assert!(matches!(
            Quantity::from_str("abc"),
            Err(NumericError::Parse { .. })
        ));
    }

    #[test]
    fn test_quantity_arithmetic() {
        let a: Quantity = "1.5".parse().unwrap();
        let b: Quantity = "0.5".parse().unwrap();

        assert_eq!(a + b, Quantity::from_u64(2));
        assert_eq!(a.checked_sub(b), Some(Quantity::from_u64(1)));
        assert_eq!(b.checked_sub(a), None);
        assert_eq!(a.min(b), b);
        assert!(a.checked_sub(a).unwrap().is_zero());
    }

    #[test]
    fn test_quantity_checked_add_overflow() {
        let max = Quantity::try_new(Decimal::MAX).unwrap();
        assert_eq!(max.checked_add(Quantity::from_u64(1)), None);
        assert_eq!(max.checked_add(Quantity::zero()), Some(max));
        assert_eq!(
            Quantity::from_u64(2).checked_add(Quantity::from_u64(3)),
            Some(Quantity::from_u64(5))
        );
    }

    #[test]
    fn test_quantity_sum() {
        let total: Quantity = ["1.5", "2.5", "3.0"]
            .iter()
            .map(|s| s.parse::<Quantity>().unwrap())
            .sum();
        assert_eq!(total, Quantity::from_u64(7));
    }

    #[test]
    fn test_serde_as_string() {
        let price: Price = "3000.50".parse().unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"3000.50\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);

        let negative: Result<Quantity, _> = serde_json::from_str("\"-2\"");
        assert!(negative.is_err());
    }
}
