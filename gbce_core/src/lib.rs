//!
//! Core library for the Global Beverage Corporation Exchange calculator.
//!
//! This crate aggregates:
//! - `error` — unified error type `ExchangeError` used across the workspace.
//! - `result` — handy `Result<T, ExchangeError>` alias.
//! - `symbols` — the fixed set of traded stock symbols.
//! - `catalog` — per-symbol reference data (stock type, dividends, par value).
//! - `ledger` — the append-only trade book.
//! - `clock` — time source abstraction for the time-windowed calculations.
//! - `exchange` — the calculator operations (dividend yield, P/E ratio,
//!   trade registration, VWSP, geometric mean).
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod symbols;
pub mod catalog;
pub mod ledger;
pub mod clock;
pub mod exchange;

pub use error::ExchangeError;
pub use result::Result;
pub use exchange::Exchange;
