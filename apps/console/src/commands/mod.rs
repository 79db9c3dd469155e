//! # Menu Commands
//!
//! One function per main-menu option.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch)
//! ├── product.rs  ◄─── List, add, search, update, delete (1-5)
//! └── report.rs   ◄─── Category, low stock, valuation, unique (6-8, CLI)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Command Flow                                    │
//! │                                                                         │
//! │  "4"  ──► validate_menu_option(raw, 1, 9) ──► MenuCommand::from_option  │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │  dispatch(MenuCommand::UpdateProduct, &mut state, prompt, out)          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  product::update_product(...) -> ConsoleResult<()>                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ok(Flow::Continue) / Err(ConsoleError) shown by the session            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod report;

use stockroom_core::MenuCommand;

use crate::error::ConsoleResult;
use crate::output::Output;
use crate::prompt::Prompt;
use crate::state::AppState;

/// What the session loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs one menu command against the session state.
pub fn dispatch(
    command: MenuCommand,
    state: &mut AppState,
    prompt: &mut dyn Prompt,
    out: &Output,
) -> ConsoleResult<Flow> {
    match command {
        MenuCommand::ListProducts => product::list_products(state, out),
        MenuCommand::AddProduct => product::add_product(state, prompt, out)?,
        MenuCommand::SearchProducts => product::search_products(state, prompt, out)?,
        MenuCommand::UpdateProduct => product::update_product(state, prompt, out)?,
        MenuCommand::DeleteProduct => product::delete_product(state, prompt, out)?,
        MenuCommand::CategoryReport => report::category_report(state, out),
        MenuCommand::LowStockReport => report::low_stock_report(state, out),
        MenuCommand::ValuationReport => report::valuation_report(state, out),
        MenuCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}
