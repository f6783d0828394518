//! Order book configuration

/// Trade history retained per book unless configured otherwise
pub const DEFAULT_TRADE_LOG_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    /// Maximum number of trades kept in the trade log
    pub trade_log_capacity: usize,
    /// Id assigned to the first trade the book executes
    ///
    /// Ids are u64 and never wrap. `add` rejects an order when the ids left
    /// before `u64::MAX` may not cover the trades it could execute.
    pub first_trade_id: u64,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            trade_log_capacity: DEFAULT_TRADE_LOG_CAPACITY,
            first_trade_id: 1,
        }
    }
}

impl BookConfig {
    pub fn with_trade_log_capacity(mut self, capacity: usize) -> Self {
        self.trade_log_capacity = capacity;
        self
    }
}
