//! Bounded trade history
//!
//! Ring buffer of the most recent trades executed by one book. When full,
//! the oldest trade is evicted before the new one is appended.

use std::collections::VecDeque;

use types::ids::TradeId;
use types::trade::Trade;

use crate::config::DEFAULT_TRADE_LOG_CAPACITY;

#[derive(Debug, Clone)]
pub struct TradeLog {
    history: VecDeque<Trade>,
    capacity: usize,
    /// Trades recorded over the log's lifetime, evicted ones included
    total_recorded: u64,
}

impl TradeLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            // Large capacities grow on demand
            history: VecDeque::with_capacity(capacity.min(DEFAULT_TRADE_LOG_CAPACITY)),
            capacity,
            total_recorded: 0,
        }
    }

    /// Append a trade, evicting the oldest if at capacity
    pub fn record(&mut self, trade: Trade) {
        self.total_recorded += 1;
        if self.capacity == 0 {
            return;
        }
        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(trade);
    }

    /// Most recent trades, newest first
    pub fn recent(&self, limit: usize) -> Vec<Trade> {
        self.history.iter().rev().take(limit).cloned().collect()
    }

    /// Retained trades, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Trade> + '_ {
        self.history.iter()
    }

    /// Look up a retained trade by id
    pub fn get(&self, trade_id: TradeId) -> Option<&Trade> {
        // Ids are contiguous, so the position is arithmetic
        let first = self.history.front()?.trade_id.as_u64();
        let offset = trade_id.as_u64().checked_sub(first)?;
        let trade = self.history.get(usize::try_from(offset).ok()?)?;
        (trade.trade_id == trade_id).then_some(trade)
    }

    pub fn last(&self) -> Option<&Trade> {
        self.history.back()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn total_recorded(&self) -> u64 {
        self.total_recorded
    }
}
