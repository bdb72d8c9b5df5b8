//! # Domain Types
//!
//! Core domain types used throughout the stall POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   snapshot    ┌─────────────────┐                 │
//! │  │    MenuItem     │ ────────────► │    CartLine     │                 │
//! │  │  (live, mut)    │               │  (frozen)       │                 │
//! │  │  name           │               │  name           │                 │
//! │  │  price          │               │  unit_price     │                 │
//! │  │  quantity       │               │  quantity       │                 │
//! │  │  max_stock      │               └─────────────────┘                 │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │    Command      │                             │
//! │  │  bps (u32)      │   │  Order          │                             │
//! │  │  700 = 7%       │   │  Restock        │                             │
//! │  └─────────────────┘   │  Exit           │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Live Record vs Snapshot
//! `MenuItem` is the shared mutable stock record. `CartLine` is copied out of
//! it when an order line is confirmed, so later stock changes never alter
//! what the receipt shows.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 700 bps = 7%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Human label such as `7%` or `8.25%`.
    pub fn label(&self) -> String {
        if self.0 % 100 == 0 {
            format!("{}%", self.0 / 100)
        } else {
            let rendered = format!("{}.{:02}", self.0 / 100, self.0 % 100);
            format!("{}%", rendered.trim_end_matches('0'))
        }
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::DEFAULT_TAX_RATE
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A sellable item with its live stock level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Display name shown on the menu and receipt.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Units currently available for sale.
    pub quantity: u32,

    /// Capacity ceiling, used only during restocking.
    pub max_stock: u32,
}

impl MenuItem {
    /// Units that would bring the item back to capacity.
    #[inline]
    pub fn needed(&self) -> u32 {
        self.max_stock.saturating_sub(self.quantity)
    }

    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.quantity >= self.max_stock
    }

    /// Freezes name and price into a receipt line for `quantity` units.
    pub fn snapshot(&self, quantity: u32) -> CartLine {
        CartLine {
            name: self.name.clone(),
            unit_price: self.price,
            quantity,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One confirmed order entry, frozen at the moment it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Item name at time of ordering (frozen).
    pub name: String,

    /// Unit price at time of ordering (frozen).
    pub unit_price: Money,

    /// Quantity ordered.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Main Menu Command
// =============================================================================

/// Top-level operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `O`: take an order.
    Order,
    /// `R`: walk the restock list.
    Restock,
    /// `E`: leave the program.
    Exit,
}

impl Command {
    /// Parses one line of main-menu input.
    ///
    /// ## Rules
    /// - Exactly one non-whitespace character after trimming
    /// - Case-insensitive
    ///
    /// ```rust
    /// use aso_core::Command;
    ///
    /// assert_eq!(Command::parse(" o ").unwrap(), Command::Order);
    /// assert!(Command::parse("").is_err());
    /// assert!(Command::parse("order").is_err());
    /// assert!(Command::parse("x").is_err());
    /// ```
    pub fn parse(input: &str) -> CoreResult<Command> {
        let mut chars = input.trim().chars();
        let choice = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            (None, _) => {
                return Err(ValidationError::Required {
                    field: "choice".to_string(),
                }
                .into())
            }
            (Some(_), Some(_)) => {
                return Err(ValidationError::InvalidFormat {
                    field: "choice".to_string(),
                    reason: "must be a single character".to_string(),
                }
                .into())
            }
        };

        match choice.to_ascii_uppercase() {
            'O' => Ok(Command::Order),
            'R' => Ok(Command::Restock),
            'E' => Ok(Command::Exit),
            other => Err(CoreError::UnknownCommand(other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
