//! GBCE Demo — a short driver that builds the sample catalog, runs a fixed
//! demonstration sequence of calculator calls (dividend yields, P/E ratios,
//! trades, VWSPs, geometric mean) and exits. Each operation logs its inputs
//! and result through `env_logger`.
//!
//! Usage example (CLI):
//! ```bash
//! gbce_demo --vwsp-formula weighted
//! ```
#![warn(missing_docs)]
mod args;

use clap::Parser;
use gbce_core::Result;
use gbce_core::exchange::Exchange;
use gbce_core::ledger::Side;
use gbce_core::symbols::Symbol;
use log::info;

use crate::args::Args;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let mut exchange = Exchange::new();
    exchange.set_vwsp_formula(args.vwsp_formula);
    info!("Exchange created with VWSP formula: {}", args.vwsp_formula);

    // Dividend yields for a spread of prices.
    exchange.dividend_yield(15.0, Symbol::TEA)?;
    exchange.dividend_yield(5.0, Symbol::POP)?;
    exchange.dividend_yield(5.0, Symbol::ALE)?;
    exchange.dividend_yield(10.0, Symbol::GIN)?;
    exchange.dividend_yield(0.0, Symbol::JOE)?;

    // P/E ratios for the same symbols.
    exchange.pe_ratio(10.0, Symbol::TEA)?;
    exchange.pe_ratio(5.0, Symbol::POP)?;
    exchange.pe_ratio(5.0, Symbol::ALE)?;
    exchange.pe_ratio(10.0, Symbol::GIN)?;
    exchange.pe_ratio(0.0, Symbol::JOE)?;

    // A handful of trades across the board.
    exchange.register_trade(2.0, Symbol::TEA, 20.0, Side::Sell);
    exchange.register_trade(1.0, Symbol::POP, 5.0, Side::Buy);
    exchange.register_trade(3.0, Symbol::ALE, 15.0, Side::Buy);
    exchange.register_trade(5.0, Symbol::GIN, 10.0, Side::Buy);
    exchange.register_trade(2.0, Symbol::GIN, 10.0, Side::Sell);
    exchange.register_trade(5.0, Symbol::JOE, 2.0, Side::Buy);

    // Volume-weighted stock prices and the cross-stock geometric mean.
    exchange.vwsp(Symbol::TEA)?;
    exchange.vwsp(Symbol::JOE)?;
    exchange.geometric_mean()?;

    if let Some(trade) = exchange.ledger().last() {
        let json = trade.to_json_bytes()?;
        info!("Last recorded trade: {}", String::from_utf8_lossy(&json));
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
