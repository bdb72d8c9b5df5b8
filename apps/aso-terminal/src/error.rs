//! # App Error Type
//!
//! Errors that can end an operator session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal                           │
//! │                                                                         │
//! │  ValidationError / CoreError                                           │
//! │     └── printed at the prompt, operator re-enters  (never escapes)     │
//! │                                                                         │
//! │  AppError                                                               │
//! │     ├── Io           stdout/stdin broke          → exit code 1         │
//! │     ├── InputClosed  stdin reached end of file   → exit code 0         │
//! │     ├── Config       bad store configuration     → exit code 1         │
//! │     └── Core         catalog could not be built  → exit code 1         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use aso_core::CoreError;
use thiserror::Error;

use crate::state::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InputClosed => 0,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
