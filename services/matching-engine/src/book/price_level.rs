//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at one price on one side.
//! Orders are keyed by the book's arrival sequence, so iteration order is
//! time priority and any order can be removed without scanning the queue.

use std::collections::BTreeMap;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing orders at a specific price
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Orders keyed by arrival sequence (FIFO order)
    orders: BTreeMap<u64, Order>,
    /// Total quantity available at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Insert an order at the back of the queue (time priority)
    ///
    /// `sequence` must be greater than every sequence already queued.
    pub fn insert(&mut self, sequence: u64, order: Order) {
        debug_assert!(
            self.orders.keys().next_back().map_or(true, |last| *last < sequence),
            "arrival sequence must increase"
        );
        self.total_quantity = self.total_quantity + order.quantity;
        self.orders.insert(sequence, order);
    }

    /// Remove an order by its arrival sequence
    pub fn remove(&mut self, sequence: u64) -> Option<Order> {
        let order = self.orders.remove(&sequence)?;
        self.release(order.quantity);
        Some(order)
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.values().next()
    }

    /// Fill the front order by `quantity`
    ///
    /// Returns the front order if the fill exhausted it (it is removed from
    /// the level), `None` if it is still resting with reduced quantity.
    /// A fill larger than the front order is clamped to its quantity.
    pub fn fill_front(&mut self, quantity: Quantity) -> Option<Order> {
        let mut entry = self.orders.first_entry()?;
        let filled = quantity.min(entry.get().quantity);
        let remaining = entry
            .get()
            .quantity
            .checked_sub(filled)
            .unwrap_or_else(Quantity::zero);

        let exhausted = if remaining.is_zero() {
            let mut order = entry.remove();
            order.quantity = remaining;
            Some(order)
        } else {
            entry.get_mut().quantity = remaining;
            None
        };

        self.release(filled);
        exhausted
    }

    /// Replace the quantity of a queued order in place
    ///
    /// The order keeps its position in the queue. Returns the previous
    /// quantity, or None if no order has that sequence.
    pub fn set_quantity(&mut self, sequence: u64, quantity: Quantity) -> Option<Quantity> {
        let order = self.orders.get_mut(&sequence)?;
        let previous = order.quantity;
        order.quantity = quantity;

        self.release(previous);
        self.total_quantity = self.total_quantity + quantity;

        Some(previous)
    }

    /// Whether the level total can take `incoming` more without overflowing,
    /// after `outgoing` has left it
    pub fn can_absorb(&self, incoming: Quantity, outgoing: Quantity) -> bool {
        self.total_quantity
            .checked_sub(outgoing)
            .unwrap_or_else(Quantity::zero)
            .checked_add(incoming)
            .is_some()
    }

    pub fn get(&self, sequence: u64) -> Option<&Order> {
        self.orders.get(&sequence)
    }

    /// Orders in time priority
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.values()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    fn release(&mut self, quantity: Quantity) {
        self.total_quantity = self
            .total_quantity
            .checked_sub(quantity)
            .unwrap_or_else(Quantity::zero);
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}
