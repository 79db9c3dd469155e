//! # Stockroom Console Library
//!
//! Terminal front end for the Stockroom inventory.
//! `main.rs` parses the command line and hands it to [`run`].
//!
//! ## Module Organization
//! ```text
//! stockroom_console_lib/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap command line definition
//! ├── session.rs      ◄─── Interactive menu loop
//! ├── prompt.rs       ◄─── Line input (terminal or scripted)
//! ├── output.rs       ◄─── Styled / JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (inventory, reference data, config)
//! │   ├── config.rs   ◄─── Environment-driven configuration
//! │   └── seed.rs     ◄─── Sample catalogue
//! ├── commands/
//! │   ├── mod.rs      ◄─── Menu dispatch
//! │   ├── product.rs  ◄─── List / add / search / update / delete
//! │   └── report.rs   ◄─── Reports
//! └── error.rs        ◄─── Console error type
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod prompt;
pub mod session;
pub mod state;

use anyhow::Context;
use stockroom_core::ReferenceData;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ReportKind};
use output::Output;
use prompt::TermPrompt;
use session::Session;
use state::{AppConfig, AppState};

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,stockroom=info (debug with --verbose)               │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOCKROOM_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • Reference data (categories, suppliers)                            │
/// │     • Inventory: sample catalogue, or empty with --empty                │
/// │                                                                         │
/// │  4. Run Command ──────────────────────────────────────────────────────► │
/// │     • interactive (default): menu loop until Exit or end of input       │
/// │     • list / report: print once and return                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);

    let config = AppConfig::from_env().context("Invalid STOCKROOM_* configuration")?;
    info!(
        stock_threshold = config.inventory.stock_threshold,
        max_products = config.inventory.max_products,
        "Configuration loaded"
    );

    let reference = ReferenceData::default();
    let state = if cli.empty {
        AppState::new(config, reference)
    } else {
        AppState::with_sample_data(config, reference)
            .context("Sample inventory does not fit the configuration")?
    };

    match cli.selected() {
        Commands::Interactive => {
            if cli.json {
                warn!("--json has no effect in interactive mode");
            }
            let out = Output::new(cli.verbose, false);
            let mut session = Session::new(state, TermPrompt::new(), out);
            session.run().context("Interactive session failed")?;
        }
        Commands::List => {
            let out = Output::new(cli.verbose, cli.json);
            commands::product::list_products(&state, &out);
        }
        Commands::Report { kind } => {
            let out = Output::new(cli.verbose, cli.json);
            print_report(&state, kind, &out);
        }
    }

    Ok(())
}

fn print_report(state: &AppState, kind: ReportKind, out: &Output) {
    match kind {
        ReportKind::Category => commands::report::category_report(state, out),
        ReportKind::LowStock => commands::report::low_stock_report(state, out),
        ReportKind::Valuation => commands::report::valuation_report(state, out),
        ReportKind::Unique => commands::report::unique_values_report(state, out),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_core=trace` - Trace the core crate only
/// - Default: `warn,stockroom=info`, or `debug` with `--verbose`
///
/// Logs go to stderr so they never interleave with menu output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn,stockroom=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
