//! # Aso Terminal Library
//!
//! The interactive point-of-sale shell for the stall.
//!
//! ## Module Organization
//! ```text
//! aso_terminal_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── session.rs      ◄─── Main menu dispatcher
//! ├── console.rs      ◄─── Prompts, tokens, input recovery
//! ├── display.rs      ◄─── Menu and receipt layout
//! ├── commands/
//! │   ├── order.rs    ◄─── Order flow and checkout
//! │   └── restock.rs  ◄─── Restock flow
//! ├── state/
//! │   └── config.rs   ◄─── Store configuration (catalog, tax, branding)
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Streams
//! Operator dialogue goes to stdout. Logs go to stderr so they never
//! interleave with prompts.

pub mod commands;
pub mod console;
pub mod display;
pub mod error;
pub mod session;
pub mod state;

use std::io;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use console::Console;
use error::AppError;
use session::Session;
use state::StallConfig;

/// Runs the terminal against the process's stdin and stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Load the built-in store configuration
/// 3. Build the inventory and run the main menu
/// 4. Map the outcome to an exit status
pub fn run() -> ExitCode {
    init_tracing();

    info!("Starting Mainit na Aso POS terminal");

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout().lock());

    let outcome = Session::new(StallConfig::default(), console).and_then(|mut s| s.run());

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::InputClosed) => {
            warn!("standard input closed, ending session");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "session failed");
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, so the operator sees only the dialogue
/// - `RUST_LOG=info` - order lines, clamps, restocks, checkouts
/// - `RUST_LOG=aso_terminal_lib=debug` - every rejected keystroke
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
