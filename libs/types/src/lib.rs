//! Types library for the limit order book
//!
//! Core type definitions shared by the matching engine and its callers.
//! Every price and quantity is an exact decimal, so crossing checks and
//! price-level equality never depend on floating-point rounding.
//!
//! # Modules
//! - `ids`: Identifiers (OrderId, TradeId, InstrumentId)
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Order types (Side, OrderType, Order)
//! - `trade`: Trade execution record
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::errors::*;
}
