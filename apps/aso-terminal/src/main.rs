//! # Aso Terminal Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mainit na Aso POS                                │
//! │                                                                         │
//! │  main.rs ────► calls aso_terminal_lib::run()                           │
//! │  lib.rs ─────► logging, configuration, session                         │
//! │  session.rs ─► [O]rder | [R]estock | [E]xit                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    aso_terminal_lib::run()
}
