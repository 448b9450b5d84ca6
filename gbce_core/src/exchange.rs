//! Calculator operations over the catalog and the trade ledger.
//!
//! `Exchange` owns the `StockCatalog`, the `TradeLedger` and a `Clock` and
//! exposes the calculator surface:
//!
//! - `dividend_yield` and `pe_ratio` — pure reads of the catalog.
//! - `register_trade` — appends a timestamped record to the ledger.
//! - `vwsp` — volume-weighted stock price over trades of the last five
//!   minutes, read back from the ledger.
//! - `geometric_mean` — fifth root of the product of all five symbols' VWSPs,
//!   recomputed freshly on every call.
//!
//! Every operation logs a `debug!` entry line and an `info!` result line.
//! Logging is a write-only concern and never affects computed results.

use chrono::Duration;
use clap::ValueEnum;
use log::{debug, info};
use strum_macros::{Display, EnumString};

use crate::catalog::{StockCatalog, StockKind};
use crate::clock::{Clock, SystemClock};
use crate::error::ExchangeError;
use crate::ledger::{Side, TradeLedger, TradeRecord};
use crate::result::Result;
use crate::symbols::Symbol;

/// Width of the VWSP window, in minutes.
pub const VWSP_WINDOW_MINUTES: i64 = 5;

/// Formula used for the volume-weighted stock price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum VwspFormula {
    /// `(Σ price × Σ quantity) / Σ quantity`, which algebraically collapses
    /// to `Σ price`. Almost certainly a defect in the inherited formula, but
    /// kept as the default so existing output stays unchanged.
    #[default]
    Literal,
    /// `Σ (price × quantity) / Σ quantity`, the usual VWSP definition.
    Weighted,
}

/// Stock exchange session: catalog, trade ledger and the calculator
/// operations over them.
///
/// The ledger is owned by the session rather than shared process-wide, and
/// the clock is injected so the time-windowed calculations are testable with
/// fixed timestamps.
pub struct Exchange<C: Clock = SystemClock> {
    catalog: StockCatalog,
    ledger: TradeLedger,
    clock: C,
    vwsp_formula: VwspFormula,
}

impl Exchange<SystemClock> {
    /// Creates an exchange over the sample catalog, using wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(StockCatalog::sample(), SystemClock)
    }
}

impl Default for Exchange<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Exchange<C> {
    /// Creates an exchange over `catalog` with the provided time source and
    /// an empty ledger.
    pub fn with_clock(catalog: StockCatalog, clock: C) -> Self {
        Exchange {
            catalog,
            ledger: TradeLedger::new(),
            clock,
            vwsp_formula: VwspFormula::default(),
        }
    }

    /// Selects the VWSP formula. Defaults to [`VwspFormula::Literal`].
    pub fn set_vwsp_formula(&mut self, formula: VwspFormula) {
        self.vwsp_formula = formula;
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &StockCatalog {
        &self.catalog
    }

    /// Read access to the trade ledger.
    pub fn ledger(&self) -> &TradeLedger {
        &self.ledger
    }

    /// Read access to the time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Calculates the dividend yield for `symbol` at the given `price`.
    ///
    /// A price of zero or below yields `0.0` with no division attempted.
    /// Preferred stocks yield `fixed_dividend_pct × par_value / price`; a
    /// preferred stock without a fixed dividend yields `0.0`. Common stocks
    /// yield `last_dividend / price`.
    pub fn dividend_yield(&self, price: f64, symbol: Symbol) -> Result<f64> {
        debug!("Calculating dividend yield for {}", symbol);
        let def = self.catalog.get(symbol)?;

        let mut div_yield = 0.0;
        if price > 0.0 {
            div_yield = match def.kind {
                StockKind::Preferred => match def.fixed_dividend_pct {
                    Some(pct) if !pct.is_nan() => pct * def.par_value / price,
                    _ => 0.0,
                },
                StockKind::Common => def.last_dividend / price,
            };
        }
        info!(
            "For price {} and symbol {} dividend yield is {}",
            price, symbol, div_yield
        );
        Ok(div_yield)
    }

    /// Calculates the price/earnings ratio for `symbol` at the given `price`.
    ///
    /// Returns `0.0` when the symbol's last dividend is not positive, which
    /// avoids a division by zero.
    pub fn pe_ratio(&self, price: f64, symbol: Symbol) -> Result<f64> {
        debug!("Calculating P/E ratio for {}", symbol);
        let def = self.catalog.get(symbol)?;

        let pe_ratio = if def.last_dividend > 0.0 {
            price / def.last_dividend
        } else {
            0.0
        };
        info!(
            "For price {} and symbol {} P/E ratio is {}",
            price, symbol, pe_ratio
        );
        Ok(pe_ratio)
    }

    /// Records a trade with the current timestamp.
    ///
    /// The trade is appended as given: catalog membership, price sign and
    /// quantity sign are not validated. Safe to call any number of times.
    pub fn register_trade(&mut self, price: f64, symbol: Symbol, quantity: f64, side: Side) {
        debug!("Registering trade for {}", symbol);
        let trade = TradeRecord {
            symbol,
            price,
            quantity,
            side,
            timestamp: self.clock.now(),
        };
        self.ledger.record(trade);
        info!(
            "New {} trade registered for {}: {} x {}",
            side, symbol, quantity, price
        );
    }

    /// Calculates the volume-weighted stock price for `symbol` over trades
    /// of the last five minutes.
    ///
    /// The window is the open interval `(now − 5 min, now)`. Returns `0.0`
    /// when no trade qualifies, including the empty-ledger case. Returns
    /// [`ExchangeError::NoRecentTrades`] when qualifying trades exist but
    /// their quantities sum to zero, leaving the weighting undefined.
    pub fn vwsp(&self, symbol: Symbol) -> Result<f64> {
        debug!("Calculating VWSP for {}", symbol);
        self.catalog.get(symbol)?;

        let mut vwsp = 0.0;
        if !self.ledger.is_empty() {
            let now = self.clock.now();
            let from = now - Duration::minutes(VWSP_WINDOW_MINUTES);

            let mut sum_price = 0.0;
            let mut sum_quantity = 0.0;
            let mut sum_price_quantity = 0.0;
            let mut matched = 0usize;
            for trade in self.ledger.trades_between(symbol, from, now) {
                sum_price += trade.price;
                sum_quantity += trade.quantity;
                sum_price_quantity += trade.price * trade.quantity;
                matched += 1;
            }

            if matched > 0 {
                if sum_quantity == 0.0 {
                    return Err(ExchangeError::NoRecentTrades(symbol));
                }
                vwsp = match self.vwsp_formula {
                    VwspFormula::Literal => (sum_price * sum_quantity) / sum_quantity,
                    VwspFormula::Weighted => sum_price_quantity / sum_quantity,
                };
            }
        }
        info!(
            "For symbol {} volume-weighted stock price is {}",
            symbol, vwsp
        );
        Ok(vwsp)
    }

    /// Calculates the geometric mean of the VWSPs of all exchange symbols.
    ///
    /// Each VWSP is recomputed against the current time on every call; there
    /// is no caching. A symbol without qualifying trades contributes a VWSP
    /// of `0.0`, which makes the whole mean `0.0`.
    pub fn geometric_mean(&self) -> Result<f64> {
        debug!("Calculating geometric mean over {} symbols", Symbol::ALL.len());
        let mut product = 1.0;
        for symbol in Symbol::ALL {
            product *= self.vwsp(symbol)?;
        }
        let mean = product.powf(1.0 / Symbol::ALL.len() as f64);
        info!("Geometric mean for all symbols is {}", mean);
        Ok(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockDefinition;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn fixed_exchange() -> Exchange<FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        Exchange::with_clock(StockCatalog::sample(), clock)
    }

    #[test]
    fn dividend_yield_for_common_stock() {
        let exchange = fixed_exchange();
        assert_eq!(exchange.dividend_yield(10.0, Symbol::ALE).unwrap(), 2.3);
    }

    #[test]
    fn dividend_yield_for_preferred_stock() {
        let exchange = fixed_exchange();
        // 0.02 * 100 / 10
        assert_eq!(exchange.dividend_yield(10.0, Symbol::GIN).unwrap(), 0.2);
    }

    #[test]
    fn dividend_yield_is_zero_for_non_positive_price() {
        let exchange = fixed_exchange();
        for symbol in Symbol::ALL {
            assert_eq!(exchange.dividend_yield(0.0, symbol).unwrap(), 0.0);
            assert_eq!(exchange.dividend_yield(-5.0, symbol).unwrap(), 0.0);
        }
    }

    #[test]
    fn dividend_yield_without_fixed_dividend_is_zero() {
        let catalog = StockCatalog::from_definitions(vec![StockDefinition {
            symbol: Symbol::GIN,
            kind: StockKind::Preferred,
            last_dividend: 8.0,
            fixed_dividend_pct: None,
            par_value: 100.0,
        }])
        .unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        let exchange = Exchange::with_clock(catalog, clock);
        assert_eq!(exchange.dividend_yield(10.0, Symbol::GIN).unwrap(), 0.0);
    }

    #[test]
    fn dividend_yield_with_nan_fixed_dividend_is_zero() {
        let catalog = StockCatalog::from_definitions(vec![StockDefinition {
            symbol: Symbol::GIN,
            kind: StockKind::Preferred,
            last_dividend: 8.0,
            fixed_dividend_pct: Some(f64::NAN),
            par_value: 100.0,
        }])
        .unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        let exchange = Exchange::with_clock(catalog, clock);
        assert_eq!(exchange.dividend_yield(10.0, Symbol::GIN).unwrap(), 0.0);
    }

    #[test]
    fn pe_ratio_divides_price_by_last_dividend() {
        let exchange = fixed_exchange();
        assert_eq!(exchange.pe_ratio(100.0, Symbol::POP).unwrap(), 12.5);
    }

    #[test]
    fn pe_ratio_guards_non_positive_last_dividend() {
        let exchange = fixed_exchange();
        // TEA's last dividend is 0, so any price maps to 0.
        assert_eq!(exchange.pe_ratio(100.0, Symbol::TEA).unwrap(), 0.0);
        assert_eq!(exchange.pe_ratio(-3.0, Symbol::TEA).unwrap(), 0.0);
    }

    #[test]
    fn pe_ratio_of_zero_price_is_a_genuine_zero() {
        let exchange = fixed_exchange();
        assert_eq!(exchange.pe_ratio(0.0, Symbol::ALE).unwrap(), 0.0);
    }

    #[test]
    fn unknown_symbol_is_an_error_for_every_lookup() {
        let catalog = StockCatalog::from_definitions(Vec::new()).unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        let exchange = Exchange::with_clock(catalog, clock);

        assert!(matches!(
            exchange.dividend_yield(10.0, Symbol::ALE),
            Err(ExchangeError::SymbolNotFound(Symbol::ALE))
        ));
        assert!(matches!(
            exchange.pe_ratio(10.0, Symbol::ALE),
            Err(ExchangeError::SymbolNotFound(Symbol::ALE))
        ));
        assert!(matches!(
            exchange.vwsp(Symbol::ALE),
            Err(ExchangeError::SymbolNotFound(Symbol::ALE))
        ));
    }

    #[test]
    fn register_trade_appends_one_record() {
        let mut exchange = fixed_exchange();
        let before = exchange.clock().now();
        exchange.register_trade(5.0, Symbol::ALE, 10.0, Side::Buy);

        assert_eq!(exchange.ledger().len(), 1);
        let trade = exchange.ledger().last().unwrap();
        assert_eq!(trade.symbol, Symbol::ALE);
        assert_eq!(trade.price, 5.0);
        assert_eq!(trade.quantity, 10.0);
        assert_eq!(trade.side, Side::Buy);
        assert!(trade.timestamp >= before);
    }

    #[test]
    fn register_trade_preserves_prior_entries() {
        let mut exchange = fixed_exchange();
        exchange.register_trade(5.0, Symbol::ALE, 10.0, Side::Buy);
        exchange.register_trade(2.0, Symbol::ALE, 10.0, Side::Sell);

        assert_eq!(exchange.ledger().len(), 2);
        let first = exchange.ledger().iter().next().unwrap();
        assert_eq!(first.price, 5.0);
        assert_eq!(first.side, Side::Buy);
    }

    #[test]
    fn vwsp_of_a_single_trade_is_its_price() {
        let mut exchange = fixed_exchange();
        exchange.register_trade(2.0, Symbol::ALE, 10.0, Side::Sell);
        exchange.clock().advance(Duration::seconds(1));

        assert_eq!(exchange.vwsp(Symbol::ALE).unwrap(), 2.0);
    }

    #[test]
    fn literal_vwsp_sums_prices() {
        let mut exchange = fixed_exchange();
        exchange.register_trade(5.0, Symbol::ALE, 10.0, Side::Buy);
        exchange.register_trade(2.0, Symbol::ALE, 10.0, Side::Sell);
        exchange.clock().advance(Duration::seconds(1));

        // (5 + 2) * 20 / 20
        assert_eq!(exchange.vwsp(Symbol::ALE).unwrap(), 7.0);
    }

    #[test]
    fn weighted_vwsp_weights_prices_by_quantity() {
        let mut exchange = fixed_exchange();
        exchange.set_vwsp_formula(VwspFormula::Weighted);
        exchange.register_trade(5.0, Symbol::ALE, 10.0, Side::Buy);
        exchange.register_trade(2.0, Symbol::ALE, 10.0, Side::Sell);
        exchange.clock().advance(Duration::seconds(1));

        // (5*10 + 2*10) / 20
        assert_eq!(exchange.vwsp(Symbol::ALE).unwrap(), 3.5);
    }

    #[test]
    fn vwsp_without_trades_is_zero() {
        let exchange = fixed_exchange();
        assert_eq!(exchange.vwsp(Symbol::ALE).unwrap(), 0.0);
    }

    #[test]
    fn vwsp_window_excludes_its_endpoints() {
        let mut exchange = fixed_exchange();
        exchange.register_trade(9.0, Symbol::ALE, 10.0, Side::Buy);
        // Registered at exactly "now": outside the open interval.
        assert_eq!(exchange.vwsp(Symbol::ALE).unwrap(), 0.0);

        // Exactly five minutes old: still outside.
        exchange.clock().advance(Duration::minutes(VWSP_WINDOW_MINUTES));
        assert_eq!(exchange.vwsp(Symbol::ALE).unwrap(), 0.0);
    }

    #[test]
    fn vwsp_ignores_trades_older_than_the_window() {
        let mut exchange = fixed_exchange();
        exchange.register_trade(9.0, Symbol::ALE, 10.0, Side::Buy);
        exchange.clock().advance(Duration::minutes(10));
        exchange.register_trade(2.0, Symbol::ALE, 10.0, Side::Sell);
        exchange.clock().advance(Duration::seconds(1));

        assert_eq!(exchange.vwsp(Symbol::ALE).unwrap(), 2.0);
    }

    #[test]
    fn vwsp_with_zero_total_quantity_is_an_error() {
        let mut exchange = fixed_exchange();
        exchange.register_trade(5.0, Symbol::ALE, 10.0, Side::Buy);
        exchange.register_trade(5.0, Symbol::ALE, -10.0, Side::Sell);
        exchange.clock().advance(Duration::seconds(1));

        assert!(matches!(
            exchange.vwsp(Symbol::ALE),
            Err(ExchangeError::NoRecentTrades(Symbol::ALE))
        ));
    }

    #[test]
    fn vwsp_is_idempotent_under_a_fixed_clock() {
        let mut exchange = fixed_exchange();
        exchange.register_trade(5.0, Symbol::ALE, 10.0, Side::Buy);
        exchange.clock().advance(Duration::seconds(1));

        let first = exchange.vwsp(Symbol::ALE).unwrap();
        let second = exchange.vwsp(Symbol::ALE).unwrap();
        assert_eq!(first, second);
        assert_eq!(exchange.ledger().len(), 1);
    }

    #[test]
    fn geometric_mean_without_trades_is_zero() {
        let exchange = fixed_exchange();
        assert_eq!(exchange.geometric_mean().unwrap(), 0.0);
    }

    #[test]
    fn geometric_mean_is_zero_if_any_symbol_is_untraded() {
        let mut exchange = fixed_exchange();
        for symbol in [Symbol::TEA, Symbol::POP, Symbol::ALE, Symbol::GIN] {
            exchange.register_trade(2.0, symbol, 10.0, Side::Buy);
        }
        exchange.clock().advance(Duration::seconds(1));

        // JOE has no trades, its VWSP of 0 zeroes the product.
        assert_eq!(exchange.geometric_mean().unwrap(), 0.0);
    }

    #[test]
    fn geometric_mean_of_unit_prices_is_one() {
        let mut exchange = fixed_exchange();
        for symbol in Symbol::ALL {
            exchange.register_trade(1.0, symbol, 10.0, Side::Buy);
        }
        exchange.clock().advance(Duration::seconds(1));

        assert_eq!(exchange.geometric_mean().unwrap(), 1.0);
    }
}
