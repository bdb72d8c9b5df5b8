//! # Session
//!
//! The main menu dispatcher: the one loop the process lives in.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  === Mainit na Aso's System Menu ===                                   │
//! │  [O]rder | [R]estock | [E]xit                                          │
//! │  Enter choice: _                                                       │
//! │        │                                                                │
//! │        ├── "O"/"o" ──► commands::take_order ──┐                        │
//! │        ├── "R"/"r" ──► commands::run_restock ─┤                        │
//! │        ├── "E"/"e" ──► goodbye, return Ok     │                        │
//! │        ├── other char ──► "Invalid option"    │                        │
//! │        └── blank / word / bytes ─► "Invalid input"                     │
//! │                  ▲                            │                        │
//! │                  └────────────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use aso_core::{Command, CoreError, Inventory};
use tracing::{debug, info};

use crate::commands;
use crate::console::Console;
use crate::error::AppResult;
use crate::state::StallConfig;

pub struct Session<R, W> {
    config: StallConfig,
    inventory: Inventory,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session with a fresh inventory built from `config`.
    pub fn new(config: StallConfig, console: Console<R, W>) -> AppResult<Self> {
        let inventory = config.build_inventory()?;
        info!(
            store = %config.store_name,
            items = inventory.len(),
            tax_bps = config.tax_rate_bps,
            "session started"
        );

        Ok(Session {
            config,
            inventory,
            console,
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs the main menu until the operator chooses `E`.
    ///
    /// Operator mistakes never end the loop; only I/O failure or end of
    /// input does, as an error.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            let out = self.console.out();
            writeln!(out, "\n\n=== {} System Menu ===", self.config.store_name)?;
            writeln!(out, "[O]rder | [R]estock | [E]xit")?;

            let Some(line) = self.console.read_line("Enter choice: ")? else {
                writeln!(self.console.out(), "Invalid input. Please try again.")?;
                continue;
            };

            match Command::parse(&line) {
                Ok(Command::Order) => {
                    debug!("dispatch order");
                    commands::take_order(&mut self.console, &mut self.inventory, &self.config)?;
                }
                Ok(Command::Restock) => {
                    debug!("dispatch restock");
                    commands::run_restock(&mut self.console, &mut self.inventory)?;
                }
                Ok(Command::Exit) => {
                    info!("operator exit");
                    writeln!(
                        self.console.out(),
                        "\nExiting {} System. Goodbye!",
                        self.config.store_name
                    )?;
                    self.console.out().flush()?;
                    return Ok(());
                }
                Err(err @ CoreError::UnknownCommand(_)) => {
                    debug!(?err, "unknown command");
                    writeln!(self.console.out(), "{}", err)?;
                }
                Err(err) => {
                    debug!(error = %err, "unreadable command");
                    self.console.discard_line();
                    writeln!(self.console.out(), "Invalid input. Please try again.")?;
                }
            }
        }
    }

    pub fn into_parts(self) -> (Inventory, Console<R, W>) {
        (self.inventory, self.console)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
