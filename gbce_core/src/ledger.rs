//! Append-only trade book.
//!
//! A `TradeRecord` is created once at registration time and never mutated or
//! removed; the `TradeLedger` keeps records in insertion order, which is also
//! chronological order because timestamps are captured at registration. The
//! ledger is never cleared during a run and grows without bound.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::result::Result;
use crate::symbols::Symbol;

/// Buy or sell side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// The trade bought stock.
    Buy,
    /// The trade sold stock.
    Sell,
}

/// A single recorded trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Traded symbol. Membership in the catalog is not validated here.
    pub symbol: Symbol,
    /// Traded price, accepted as given.
    pub price: f64,
    /// Traded quantity, accepted as given (sign included).
    pub quantity: f64,
    /// Buy or sell indicator.
    pub side: Side,
    /// UTC instant captured when the trade was registered.
    pub timestamp: DateTime<Utc>,
}

impl TradeRecord {
    /// Encode the record to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Append-only, insertion-ordered list of trades.
#[derive(Debug, Default)]
pub struct TradeLedger {
    trades: Vec<TradeRecord>,
}

impl TradeLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        TradeLedger { trades: Vec::new() }
    }

    /// Appends a record. Existing records are never touched.
    pub fn record(&mut self, trade: TradeRecord) {
        self.trades.push(trade);
    }

    /// Number of recorded trades.
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Returns `true` if no trade has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// The most recently recorded trade, if any.
    pub fn last(&self) -> Option<&TradeRecord> {
        self.trades.last()
    }

    /// Iterates over all recorded trades in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TradeRecord> {
        self.trades.iter()
    }

    /// Trades for `symbol` whose timestamp lies strictly inside the open
    /// interval (`from`, `to`).
    pub fn trades_between(
        &self,
        symbol: Symbol,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Iterator<Item = &TradeRecord> {
        self.trades
            .iter()
            .filter(move |t| t.symbol == symbol && t.timestamp > from && t.timestamp < to)
    }
}
