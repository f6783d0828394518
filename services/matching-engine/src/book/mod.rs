//! Order book infrastructure module
//!
//! Contains price levels and the side book shared by bids and asks.

pub mod price_level;
pub mod side_book;

pub use price_level::PriceLevel;
pub use side_book::SideBook;
