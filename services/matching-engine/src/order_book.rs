//! Single-instrument order book
//!
//! Owns both sides of the book, the order index, the trade id sequence
//! and the trade log. All mutation goes through `add`, `cancel` and
//! `update`; each call runs to completion and either succeeds or leaves
//! the book untouched.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use types::errors::BookError;
use types::ids::{InstrumentId, OrderId, TradeId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::SideBook;
use crate::config::BookConfig;
use crate::matching::{crossing, MatchExecutor};
use crate::snapshot::{BookSnapshot, LevelSummary};
use crate::trade_log::TradeLog;

/// Where a resting order lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Locator {
    side: Side,
    price: Price,
    sequence: u64,
}

/// Result of a successful `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Quantity replaced in place; queue position unchanged
    Amended { previous_quantity: Quantity },
    /// New quantity was zero, so the order left the book
    Removed(Order),
}

/// Price/time-priority limit order book for one instrument
///
/// Not internally synchronized: share it across threads only behind a
/// lock that serializes whole calls.
#[derive(Debug, Clone)]
pub struct OrderBook {
    instrument: InstrumentId,
    bids: SideBook,
    asks: SideBook,
    index: HashMap<OrderId, Locator>,
    executor: MatchExecutor,
    trades: TradeLog,
    /// Arrival sequence for the next resting order
    next_sequence: u64,
}

impl OrderBook {
    /// Create an empty book with default configuration
    pub fn new(instrument: impl Into<InstrumentId>) -> Self {
        Self::with_config(instrument, BookConfig::default())
    }

    pub fn with_config(instrument: impl Into<InstrumentId>, config: BookConfig) -> Self {
        let instrument = instrument.into();
        info!(
            instrument = %instrument,
            trade_log_capacity = config.trade_log_capacity,
            "OrderBook initialized"
        );

        Self {
            instrument,
            bids: SideBook::new(Side::Buy),
            asks: SideBook::new(Side::Sell),
            index: HashMap::new(),
            executor: MatchExecutor::new(TradeId::new(config.first_trade_id)),
            trades: TradeLog::new(config.trade_log_capacity),
            next_sequence: 0,
        }
    }

    /// Submit an order
    ///
    /// Matches against the opposite side from the best price outward while
    /// prices cross, then rests any remainder at the back of its price
    /// level. Returns the trades generated by this call in execution order.
    pub fn add(&mut self, mut order: Order) -> Result<Vec<Trade>, BookError> {
        if let Err(err) = self.validate_incoming(&order) {
            warn!(order_id = %order.order_id, error = %err, "Order rejected");
            return Err(err);
        }

        let Self {
            instrument,
            bids,
            asks,
            index,
            executor,
            trades: log,
            next_sequence,
        } = &mut *self;

        let (own, opposite) = match order.side {
            Side::Buy => (bids, asks),
            Side::Sell => (asks, bids),
        };

        let mut trades = Vec::new();

        while !order.quantity.is_zero() {
            let Some((level_price, level)) = opposite.best_level_mut() else {
                break;
            };
            if !crossing::incoming_can_match(order.side, order.price, level_price) {
                break;
            }
            let Some(maker) = level.front() else {
                break;
            };

            let maker_order_id = maker.order_id;
            let matched = order.quantity.min(maker.quantity);

            // Execution price is the maker's price
            let trade = executor.execute_trade(
                instrument,
                order.order_id,
                maker_order_id,
                order.side,
                level_price,
                matched,
            );

            order.quantity = order
                .quantity
                .checked_sub(matched)
                .unwrap_or_else(Quantity::zero);

            if let Some(filled) = level.fill_front(matched) {
                index.remove(&filled.order_id);
                debug!(order_id = %filled.order_id, price = %level_price, "Maker fully filled");
            }
            opposite.prune(level_price);

            debug!(
                trade_id = %trade.trade_id,
                taker = %trade.taker_order_id,
                maker = %trade.maker_order_id,
                price = %trade.price,
                quantity = %trade.quantity,
                "Trade executed"
            );

            log.record(trade.clone());
            trades.push(trade);
        }

        if !order.quantity.is_zero() {
            let sequence = *next_sequence;
            *next_sequence += 1;

            debug!(
                order_id = %order.order_id,
                side = %order.side,
                price = %order.price,
                quantity = %order.quantity,
                "Order resting"
            );

            let locator = Locator {
                side: order.side,
                price: order.price,
                sequence,
            };
            let order_id = order.order_id;
            own.insert(sequence, order);
            index.insert(order_id, locator);
        }

        debug_assert!(!self.is_crossed(), "book crossed after add");
        Ok(trades)
    }

    /// Remove a resting order identified by side and id
    pub fn cancel(&mut self, side: Side, order_id: OrderId) -> Result<Order, BookError> {
        let locator = self.locate(side, order_id)?;

        let removed = self
            .side_mut(side)
            .remove(locator.price, locator.sequence)
            .ok_or(BookError::NotFound { side, order_id })?;
        self.index.remove(&order_id);

        debug!(order_id = %order_id, side = %side, price = %locator.price, "Order canceled");
        Ok(removed)
    }

    /// Amend the quantity of a resting order
    ///
    /// The amendment carries the resting order's id, side and price. A
    /// positive quantity replaces the resting quantity without losing time
    /// priority; zero removes the order. A different price is rejected.
    pub fn update(&mut self, amendment: &Order) -> Result<UpdateOutcome, BookError> {
        let side = amendment.side;
        let order_id = amendment.order_id;
        if let Err(err) = self.check_instrument(amendment) {
            warn!(order_id = %order_id, error = %err, "Update rejected");
            return Err(err);
        }
        let locator = self.locate(side, order_id)?;

        if locator.price != amendment.price {
            let err = BookError::PriceMismatch {
                order_id,
                resting: locator.price,
                requested: amendment.price,
            };
            warn!(order_id = %order_id, error = %err, "Update rejected");
            return Err(err);
        }

        if amendment.quantity.is_zero() {
            let removed = self
                .side_mut(side)
                .remove(locator.price, locator.sequence)
                .ok_or(BookError::NotFound { side, order_id })?;
            self.index.remove(&order_id);

            debug!(order_id = %order_id, "Order amended to zero, removed");
            return Ok(UpdateOutcome::Removed(removed));
        }

        let resting_quantity = self
            .side(side)
            .get(locator.price, locator.sequence)
            .map(|order| order.quantity)
            .ok_or(BookError::NotFound { side, order_id })?;
        if !self
            .side(side)
            .can_absorb(locator.price, amendment.quantity, resting_quantity)
        {
            let err = BookError::invalid_order("quantity would overflow the price level total");
            warn!(order_id = %order_id, error = %err, "Update rejected");
            return Err(err);
        }

        let previous_quantity = self
            .side_mut(side)
            .set_quantity(locator.price, locator.sequence, amendment.quantity)
            .ok_or(BookError::NotFound { side, order_id })?;

        debug!(
            order_id = %order_id,
            previous = %previous_quantity,
            quantity = %amendment.quantity,
            "Order amended"
        );
        Ok(UpdateOutcome::Amended { previous_quantity })
    }

    /// Owned copy of both sides, best to worst
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            instrument: self.instrument.clone(),
            bids: self.bids.orders().cloned().collect(),
            asks: self.asks.orders().cloned().collect(),
        }
    }

    /// Aggregated top `levels` price levels of one side
    pub fn depth(&self, side: Side, levels: usize) -> Vec<LevelSummary> {
        self.side(side).depth_snapshot(levels)
    }

    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best()
    }

    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best()
    }

    /// Best ask minus best bid, when both sides are populated
    pub fn spread(&self) -> Option<Decimal> {
        let bid = self.bids.best_price()?;
        let ask = self.asks.best_price()?;
        Some(ask.as_decimal() - bid.as_decimal())
    }

    /// True if the best bid is at or above the best ask
    pub fn is_crossed(&self) -> bool {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) => crossing::can_match(bid, ask),
            _ => false,
        }
    }

    /// Look up a resting order
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        let locator = self.index.get(&order_id)?;
        self.side(locator.side).get(locator.price, locator.sequence)
    }

    pub fn contains(&self, order_id: OrderId) -> bool {
        self.index.contains_key(&order_id)
    }

    pub fn side(&self, side: Side) -> &SideBook {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub fn bids(&self) -> &SideBook {
        &self.bids
    }

    pub fn asks(&self) -> &SideBook {
        &self.asks
    }

    pub fn trades(&self) -> &TradeLog {
        &self.trades
    }

    pub fn instrument(&self) -> &InstrumentId {
        &self.instrument
    }

    /// Number of resting orders
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn validate_incoming(&self, order: &Order) -> Result<(), BookError> {
        if order.quantity.is_zero() {
            return Err(BookError::invalid_order("quantity must be positive"));
        }
        self.check_instrument(order)?;
        if self.index.contains_key(&order.order_id) {
            return Err(BookError::invalid_order(format!(
                "order id {} is already resting",
                order.order_id
            )));
        }
        // The remainder rests on its own level, and never exceeds the order
        if !self
            .side(order.side)
            .can_absorb(order.price, order.quantity, Quantity::zero())
        {
            return Err(BookError::invalid_order(
                "quantity would overflow the price level total",
            ));
        }
        // Each trade exhausts its maker or the taker, so one add executes at
        // most as many trades as there are resting orders
        if !self.executor.can_allocate(self.index.len()) {
            return Err(BookError::invalid_order("trade id sequence exhausted"));
        }
        Ok(())
    }

    fn check_instrument(&self, order: &Order) -> Result<(), BookError> {
        if order.instrument != self.instrument {
            return Err(BookError::invalid_order(format!(
                "instrument {} does not match book {}",
                order.instrument, self.instrument
            )));
        }
        Ok(())
    }

    fn locate(&self, side: Side, order_id: OrderId) -> Result<Locator, BookError> {
        match self.index.get(&order_id) {
            Some(locator) if locator.side == side => Ok(*locator),
            _ => {
                debug!(order_id = %order_id, side = %side, "Order not found");
                Err(BookError::NotFound { side, order_id })
            }
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}
