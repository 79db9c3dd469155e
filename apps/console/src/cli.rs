//! Command line surface.
//!
//! - `stockroom` / `stockroom interactive` - menu-driven session
//! - `stockroom list` - print the inventory once
//! - `stockroom report <kind>` - print one report once

use clap::{Parser, Subcommand, ValueEnum};

/// Stockroom - manage a small product inventory from the terminal
#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Start with an empty inventory instead of the sample catalogue
    #[arg(long, global = true)]
    pub empty: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use JSON output format (list and report only)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Interactive,

    /// List every product
    List,

    /// Print a single report
    Report {
        #[arg(value_enum)]
        kind: ReportKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Products, units and value per category
    Category,
    /// Out-of-stock and below-threshold products
    LowStock,
    /// Totals, average price and extremes
    Valuation,
    /// Distinct categories and suppliers in use
    Unique,
}

impl Cli {
    /// The command to run; no sub-command means the interactive menu.
    pub fn selected(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}
