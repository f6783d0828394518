//! Walks a small AAPL book through a sweep and an amendment, printing the
//! book after each step. Set `RUST_LOG=debug` to see matching events.

use matching_engine::OrderBook;
use tracing_subscriber::EnvFilter;
use types::prelude::*;

fn limit(id: u64, side: Side, price: &str, qty: u64) -> anyhow::Result<Order> {
    Ok(Order::limit(
        id,
        "AAPL",
        side,
        price.parse::<Price>()?,
        Quantity::from_u64(qty),
    ))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut book = OrderBook::new("AAPL");

    let seed = [
        limit(1, Side::Buy, "200.0", 10)?,
        limit(2, Side::Buy, "201.0", 10)?,
        limit(3, Side::Buy, "201.0", 5)?,
        limit(4, Side::Buy, "201.0", 7)?,
        limit(5, Side::Sell, "205.0", 10)?,
        limit(6, Side::Sell, "206.0", 10)?,
        limit(7, Side::Sell, "205.0", 5)?,
        limit(8, Side::Sell, "210.0", 7)?,
    ];
    for order in seed {
        book.add(order)?;
    }

    println!("Before:");
    println!("{}\n", book.snapshot());

    let trades = book.add(limit(9, Side::Buy, "206", 20)?)?;
    println!("Trades:");
    for trade in &trades {
        println!("{trade}");
    }
    println!();
    println!("{}\n", book.snapshot());

    // Order 5 was fully consumed by the sweep, so this amendment is refused
    match book.update(&limit(5, Side::Sell, "205", 100)?) {
        Ok(outcome) => println!("Amended order 5: {outcome:?}"),
        Err(err) => println!("Amend order 5 failed: {err}"),
    }

    book.update(&limit(6, Side::Sell, "206", 100)?)?;
    println!("{}", book.snapshot());

    Ok(())
}
