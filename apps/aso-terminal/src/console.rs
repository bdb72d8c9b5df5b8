//! # Console
//!
//! Prompting and input recovery over any `BufRead` / `Write` pair.
//!
//! ## Token Model
//! ```text
//! stdin line:   "1 3 0\n"
//!                │ │ │
//!                ▼ ▼ ▼
//! pending:     ["1","3","0"]   ◄── numeric prompts pop one token each
//!
//! bad token:   "abc 5\n"  → "abc" rejected, "5" discarded with the line
//! negative:    "-2 5\n"   → "-2" rejected, "5" kept for the re-prompt
//! non-UTF-8:   "\xff 5\n" → whole line rejected and discarded
//! ```
//!
//! The main menu reads whole lines instead, so an empty line is seen (and
//! rejected) rather than skipped.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use aso_core::validation::parse_non_negative_int;
use aso_core::ValidationError;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Printed when a numeric prompt gets something that is not a whole number.
pub const MSG_NOT_A_NUMBER: &str = "Invalid input. Please enter a whole number.";

/// Printed when a numeric prompt gets a negative whole number.
pub const MSG_NEGATIVE: &str = "Input must be a non-negative number.";

/// One unit of numeric-prompt input.
enum Token {
    Word(String),
    /// A whole line that was not valid UTF-8.
    Unreadable,
}

pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// The output stream, for `writeln!`.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: &str) -> AppResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Drops whatever is left of the current input line.
    pub fn discard_line(&mut self) {
        if !self.pending.is_empty() {
            debug!(discarded = self.pending.len(), "discarding rest of input line");
        }
        self.pending.clear();
    }

    /// Reads one raw line, without its terminator.
    ///
    /// `Ok(None)` means the line was consumed but is not valid UTF-8.
    fn read_raw_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }

        match String::from_utf8(buf) {
            Ok(line) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(err) => {
                debug!(error = %err, "unreadable input line");
                Ok(None)
            }
        }
    }

    /// Next whitespace-separated token, reading more lines as needed.
    /// Blank lines are skipped.
    fn next_token(&mut self) -> AppResult<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Token::Word(token));
            }
            match self.read_raw_line()? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                None => return Ok(Token::Unreadable),
            }
        }
    }

    /// Prompts for a line of input.
    ///
    /// If tokens from an earlier line are still queued they form the line;
    /// otherwise a fresh line is read. Either way nothing is left pending.
    /// `None` is an unreadable line, already discarded.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        self.prompt(prompt)?;

        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(Some(rest.join(" ")));
        }

        self.read_raw_line()
    }

    /// Prompts until the operator enters an integer `>= 0`.
    ///
    /// ## Recovery
    /// - Not a number (or too large): message, discard the line, re-prompt
    /// - Negative: message, re-prompt, keep the rest of the line
    ///
    /// Only end of input ends the loop without a value.
    pub fn read_non_negative_int(&mut self, prompt: &str, field: &str) -> AppResult<u32> {
        loop {
            self.prompt(prompt)?;
            let token = match self.next_token()? {
                Token::Word(token) => token,
                Token::Unreadable => {
                    writeln!(self.output, "{}", MSG_NOT_A_NUMBER)?;
                    continue;
                }
            };

            match parse_non_negative_int(&token, field) {
                Ok(value) => return Ok(value),
                Err(ValidationError::Negative { .. }) => {
                    debug!(field, %token, "negative input rejected");
                    writeln!(self.output, "{}", MSG_NEGATIVE)?;
                }
                Err(err) => {
                    debug!(field, %token, error = %err, "malformed input rejected");
                    writeln!(self.output, "{}", MSG_NOT_A_NUMBER)?;
                    self.discard_line();
                }
            }
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
