//! Command-line arguments for the GBCE demo driver.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use gbce_core::exchange::VwspFormula;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// VWSP formula to use. `literal` reproduces the inherited
    /// sum-of-prices behaviour; `weighted` is the conventional
    /// quantity-weighted form.
    #[clap(long, value_enum, default_value = "literal")]
    pub vwsp_formula: VwspFormula,
}
