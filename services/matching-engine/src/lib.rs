//! Matching Engine
//!
//! Single-instrument limit order book implementing price-time priority
//! matching.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced (FIFO within a price level)
//! - Deterministic matching (same inputs → same outputs)
//! - The book is never crossed after an `add`
//! - Conservation of quantity
//! - Trade ids strictly increasing and gap-free per book
//! - Rejected operations leave the book unchanged

pub mod book;
pub mod config;
pub mod matching;
pub mod order_book;
pub mod snapshot;
pub mod trade_log;

pub use config::{BookConfig, DEFAULT_TRADE_LOG_CAPACITY};
pub use order_book::{OrderBook, UpdateOutcome};
pub use snapshot::{BookSnapshot, LevelSummary};
pub use trade_log::TradeLog;
