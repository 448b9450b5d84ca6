//! Static reference data for each traded symbol.
//!
//! A `StockCatalog` maps every symbol to its `StockDefinition`: the stock
//! type, the last dividend, the optional fixed dividend and the par value.
//! Symbol uniqueness is checked when the catalog is built and the catalog is
//! read-only afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::ExchangeError;
use crate::result::Result;
use crate::symbols::Symbol;

/// Dividend formula selector for a stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StockKind {
    /// Pays the last reported dividend.
    Common,
    /// Pays a fixed percentage of the par value.
    Preferred,
}

/// Reference data for a single symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockDefinition {
    /// Symbol this definition belongs to.
    pub symbol: Symbol,
    /// Stock type; selects the dividend formula.
    pub kind: StockKind,
    /// Last reported dividend.
    pub last_dividend: f64,
    /// Fixed dividend as a fraction of the par value. Only meaningful for
    /// preferred stocks; `None` is treated as "no dividend".
    pub fixed_dividend_pct: Option<f64>,
    /// Par value of the stock.
    pub par_value: f64,
}

/// Read-only symbol-to-definition table.
#[derive(Debug, Clone)]
pub struct StockCatalog {
    definitions: HashMap<Symbol, StockDefinition>,
}

impl StockCatalog {
    /// Builds a catalog from the given definitions.
    ///
    /// Returns `ExchangeError::DuplicateSymbol` if two definitions share a
    /// symbol.
    pub fn from_definitions(definitions: Vec<StockDefinition>) -> Result<Self> {
        let mut map = HashMap::new();
        for def in definitions {
            let symbol = def.symbol;
            if map.insert(symbol, def).is_some() {
                return Err(ExchangeError::DuplicateSymbol(symbol));
            }
        }
        Ok(StockCatalog { definitions: map })
    }

    /// The GBCE sample data set: five symbols, GIN being the only preferred
    /// stock.
    pub fn sample() -> Self {
        let definitions = vec![
            StockDefinition {
                symbol: Symbol::TEA,
                kind: StockKind::Common,
                last_dividend: 0.0,
                fixed_dividend_pct: None,
                par_value: 100.0,
            },
            StockDefinition {
                symbol: Symbol::POP,
                kind: StockKind::Common,
                last_dividend: 8.0,
                fixed_dividend_pct: None,
                par_value: 100.0,
            },
            StockDefinition {
                symbol: Symbol::ALE,
                kind: StockKind::Common,
                last_dividend: 23.0,
                fixed_dividend_pct: None,
                par_value: 60.0,
            },
            StockDefinition {
                symbol: Symbol::GIN,
                kind: StockKind::Preferred,
                last_dividend: 8.0,
                fixed_dividend_pct: Some(0.02),
                par_value: 100.0,
            },
            StockDefinition {
                symbol: Symbol::JOE,
                kind: StockKind::Common,
                last_dividend: 13.0,
                fixed_dividend_pct: None,
                par_value: 250.0,
            },
        ];
        Self::from_definitions(definitions).expect("sample catalog has unique symbols")
    }

    /// Looks up the definition for `symbol`.
    pub fn get(&self, symbol: Symbol) -> Result<&StockDefinition> {
        self.definitions
            .get(&symbol)
            .ok_or(ExchangeError::SymbolNotFound(symbol))
    }

    /// Number of symbols in the catalog.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
