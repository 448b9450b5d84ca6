//! Error types shared across the exchange workspace.
//!
//! The `ExchangeError` enum unifies the failure cases of catalog
//! construction, symbol lookup and price statistics, allowing crates to
//! propagate a single error type.
use thiserror::Error;

use crate::symbols::Symbol;

/// Unified error type shared by the core library and its callers.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// A symbol was requested that the catalog does not contain.
    #[error("Symbol not found in catalog: {0}")]
    SymbolNotFound(Symbol),

    /// Two catalog definitions were supplied for the same symbol.
    #[error("Duplicate catalog definition for symbol: {0}")]
    DuplicateSymbol(Symbol),

    /// Trades exist inside the VWSP window but their quantities sum to zero,
    /// so the volume weighting is undefined.
    #[error("Recent trades for {0} have zero total quantity")]
    NoRecentTrades(Symbol),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
