//! Trade execution logic
//!
//! Allocates trade ids and builds trade records for each match.

use types::ids::{InstrumentId, OrderId, TradeId};
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

/// Match executor owning the book's trade id sequence
#[derive(Debug, Clone)]
pub struct MatchExecutor {
    next_trade_id: TradeId,
}

impl MatchExecutor {
    /// Create an executor whose first trade gets `first_trade_id`
    pub fn new(first_trade_id: TradeId) -> Self {
        Self {
            next_trade_id: first_trade_id,
        }
    }

    /// Get next trade id (strictly increasing, gap-free)
    fn allocate(&mut self) -> TradeId {
        let id = self.next_trade_id;
        self.next_trade_id = id.next();
        id
    }

    /// Id the next executed trade will receive
    pub fn peek_next_id(&self) -> TradeId {
        self.next_trade_id
    }

    /// Whether `count` more trades can be executed without the id
    /// sequence overflowing
    pub fn can_allocate(&self, count: usize) -> bool {
        u64::try_from(count)
            .ok()
            .and_then(|count| self.next_trade_id.checked_add(count))
            .is_some()
    }

    /// Execute a trade between an incoming (taker) and a resting (maker) order
    ///
    /// `price` is the maker's price; `side` is the taker's side.
    pub fn execute_trade(
        &mut self,
        instrument: &InstrumentId,
        taker_order_id: OrderId,
        maker_order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Trade {
        Trade::new(
            self.allocate(),
            taker_order_id,
            maker_order_id,
            instrument.clone(),
            price,
            quantity,
            side,
        )
    }
}

impl Default for MatchExecutor {
    fn default() -> Self {
        Self::new(TradeId::new(1))
    }
}
