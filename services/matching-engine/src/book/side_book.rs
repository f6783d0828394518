//! One side of the order book
//!
//! Price levels are kept in a BTreeMap for deterministic iteration. The
//! side decides which end of the map is "best": the highest price for
//! bids, the lowest for asks. Everything else is shared, so bid and ask
//! handling cannot drift apart.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use super::price_level::PriceLevel;
use crate::snapshot::LevelSummary;

#[derive(Debug, Clone)]
pub struct SideBook {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl SideBook {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Queue an order at the back of its price level
    pub fn insert(&mut self, sequence: u64, order: Order) {
        debug_assert_eq!(order.side, self.side, "order inserted on wrong side");
        self.levels
            .entry(order.price)
            .or_insert_with(PriceLevel::new)
            .insert(sequence, order);
    }

    /// Remove an order, dropping its price level if it becomes empty
    pub fn remove(&mut self, price: Price, sequence: u64) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let order = level.remove(sequence)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(order)
    }

    /// Change a resting order's quantity without touching its queue position
    pub fn set_quantity(&mut self, price: Price, sequence: u64, quantity: Quantity) -> Option<Quantity> {
        self.levels.get_mut(&price)?.set_quantity(sequence, quantity)
    }

    /// Whether the level at `price` can take `incoming` more after
    /// `outgoing` leaves it; an absent level starts from zero
    pub fn can_absorb(&self, price: Price, incoming: Quantity, outgoing: Quantity) -> bool {
        match self.levels.get(&price) {
            Some(level) => level.can_absorb(incoming, outgoing),
            None => true,
        }
    }

    pub fn get(&self, price: Price, sequence: u64) -> Option<&Order> {
        self.levels.get(&price)?.get(sequence)
    }

    /// Best price and the total quantity resting there
    pub fn best(&self) -> Option<(Price, Quantity)> {
        self.levels().next().map(|(price, level)| (price, level.total_quantity()))
    }

    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Mutable access to the best price level
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        let entry = match self.side {
            Side::Buy => self.levels.iter_mut().next_back(),
            Side::Sell => self.levels.iter_mut().next(),
        };
        entry.map(|(price, level)| (*price, level))
    }

    /// Drop the level at `price` if nothing rests there anymore
    pub(crate) fn prune(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }

    /// Price levels from best to worst
    pub fn levels(&self) -> impl Iterator<Item = (Price, &PriceLevel)> + '_ {
        let (ascending, descending) = match self.side {
            Side::Buy => (None, Some(self.levels.iter().rev())),
            Side::Sell => (Some(self.levels.iter()), None),
        };
        ascending
            .into_iter()
            .flatten()
            .chain(descending.into_iter().flatten())
            .map(|(price, level)| (*price, level))
    }

    /// Resting orders in priority order (best price first, FIFO within a price)
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.levels().flat_map(|(_, level)| level.iter())
    }

    /// Aggregated top `depth` price levels
    pub fn depth_snapshot(&self, depth: usize) -> Vec<LevelSummary> {
        self.levels()
            .take(depth)
            .map(|(price, level)| LevelSummary {
                price,
                quantity: level.total_quantity(),
                order_count: level.order_count(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn order_count(&self) -> usize {
        self.levels.values().map(PriceLevel::order_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_order(id: u64, side: Side, price: u64, qty: &str) -> Order {
        Order::limit(id, "AAPL", side, Price::from_u64(price), qty.parse().unwrap())
    }

    fn book_with(side: Side, prices: &[u64]) -> SideBook {
        let mut book = SideBook::new(side);
        for (i, price) in prices.iter().enumerate() {
            let seq = i as u64 + 1;
            book.insert(seq, create_test_order(seq, side, *price, "1.0"));
        }
        book
    }

    #[test]
    fn test_bid_side_best_is_highest() {
        let book = book_with(Side::Buy, &[200, 201, 199]);

        assert_eq!(book.best_price(), Some(Price::from_u64(201)));
        let prices: Vec<Price> = book.levels().map(|(p, _)| p).collect();
        assert_eq!(
            prices,
            vec![Price::from_u64(201), Price::from_u64(200), Price::from_u64(199)]
        );
    }

    #[test]
    fn test_ask_side_best_is_lowest() {
        let mut book = book_with(Side::Sell, &[206, 205, 210]);

        assert_eq!(book.best_price(), Some(Price::from_u64(205)));
        let (price, level) = book.best_level_mut().unwrap();
        assert_eq!(price, Price::from_u64(205));
        assert_eq!(level.front().unwrap().order_id.as_u64(), 2);
    }

    #[test]
    fn test_same_price_aggregates() {
        let mut book = SideBook::new(Side::Buy);
        book.insert(1, create_test_order(1, Side::Buy, 201, "10"));
        book.insert(2, create_test_order(2, Side::Buy, 201, "5"));

        assert_eq!(book.level_count(), 1);
        assert_eq!(book.order_count(), 2);
        assert_eq!(book.best(), Some((Price::from_u64(201), Quantity::from_u64(15))));
    }

    #[test]
    fn test_remove_drops_empty_level() {
        let mut book = book_with(Side::Sell, &[205, 206]);

        let removed = book.remove(Price::from_u64(205), 1).unwrap();
        assert_eq!(removed.order_id.as_u64(), 1);
        assert_eq!(book.level_count(), 1);
        assert!(book.remove(Price::from_u64(205), 1).is_none());
        assert!(book.remove(Price::from_u64(300), 2).is_none());
    }

    #[test]
    fn test_orders_in_priority_order() {
        let mut book = SideBook::new(Side::Buy);
        book.insert(1, create_test_order(1, Side::Buy, 200, "10"));
        book.insert(2, create_test_order(2, Side::Buy, 201, "10"));
        book.insert(3, create_test_order(3, Side::Buy, 201, "5"));
        book.insert(4, create_test_order(4, Side::Buy, 201, "7"));

        let ids: Vec<u64> = book.orders().map(|o| o.order_id.as_u64()).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_depth_snapshot() {
        let book = book_with(Side::Sell, &[50000, 51000, 49000, 52000]);

        let depth = book.depth_snapshot(2);
        assert_eq!(depth.len(), 2);
        assert_eq!(depth[0].price, Price::from_u64(49000));
        assert_eq!(depth[1].price, Price::from_u64(50000));
        assert_eq!(depth[0].order_count, 1);
    }

    #[test]
    fn test_prune_keeps_non_empty_level() {
        let mut book = book_with(Side::Buy, &[200]);
        book.prune(Price::from_u64(200));
        assert_eq!(book.level_count(), 1);

        if let Some((_, level)) = book.best_level_mut() {
            level.fill_front("1.0".parse().unwrap());
        }
        book.prune(Price::from_u64(200));
        assert!(book.is_empty());
    }
}
