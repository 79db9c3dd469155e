//! # Stockroom Entry Point
//!
//! ```text
//! stockroom [--empty] [--verbose] [--json] [interactive | list | report <kind>]
//! ```
//!
//! The actual setup is in lib.rs so the session can be driven from tests.

use clap::Parser;
use stockroom_console_lib::cli::Cli;

fn main() -> anyhow::Result<()> {
    stockroom_console_lib::run(Cli::parse())
}
