//! Stock symbols quoted on the exchange.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Set of supported stock symbols.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    TEA,
    POP,
    ALE,
    GIN,
    JOE,
}

impl Symbol {
    /// All symbols quoted on the exchange, in catalog order.
    pub const ALL: [Symbol; 5] = [
        Symbol::TEA,
        Symbol::POP,
        Symbol::ALE,
        Symbol::GIN,
        Symbol::JOE,
    ];
}
