//! # Error Types
//!
//! Domain-specific error types for aso-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aso-core errors (this file)                                           │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  aso-terminal errors (app crate)                                       │
//! │  └── AppError         - I/O, closed input, configuration               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Almost every variant here is recoverable: the terminal prints the message
//! and re-prompts. Only `AppError` ever ends a session.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The operator picked an item id outside `1..=count`.
    ///
    /// ## When This Occurs
    /// - Typing `7` on a six-item menu
    /// - Any id that maps to no storage slot
    #[error("Invalid item ID {id}: must be between 1 and {count}")]
    ItemNotFound { id: usize, count: usize },

    /// The selected item has no units left.
    ///
    /// ## User Workflow
    /// ```text
    /// Select item 3 (stock: 0)
    ///      │
    ///      ▼
    /// OutOfStock { name: "Chicken Hotdog" }
    ///      │
    ///      ▼
    /// Back to browsing, cart untouched
    /// ```
    #[error("Sorry, {name} is currently out of stock!")]
    OutOfStock { name: String },

    /// A single-character main menu command that maps to nothing.
    /// The message is the operator-facing text.
    #[error("Invalid option. Please choose 'O', 'R', or 'E'.")]
    UnknownCommand(char),

    /// Inventory built from an empty catalog.
    #[error("Catalog must contain at least one item")]
    EmptyCatalog,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These cover both operator keystrokes and catalog configuration records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Token did not parse as a base-10 integer.
    #[error("{field}: '{input}' is not a whole number")]
    NotANumber { field: String, input: String },

    /// Integer parsed but is below zero.
    #[error("{field} must be a non-negative number")]
    Negative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Starting stock is above the item's capacity.
    #[error("{field}: stock {quantity} exceeds max capacity {max_stock}")]
    CapacityExceeded {
        field: String,
        quantity: u32,
        max_stock: u32,
    },

    /// Invalid format (e.g. a multi-character menu command).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two catalog items with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            name: "Lemonade".to_string(),
        };
        assert_eq!(err.to_string(), "Sorry, Lemonade is currently out of stock!");

        let err = CoreError::ItemNotFound { id: 9, count: 6 };
        assert_eq!(err.to_string(), "Invalid item ID 9: must be between 1 and 6");

        let err = CoreError::UnknownCommand('X');
        assert_eq!(err.to_string(), "Invalid option. Please choose 'O', 'R', or 'E'.");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must be a non-negative number");

        let err = ValidationError::CapacityExceeded {
            field: "Lemonade".to_string(),
            quantity: 80,
            max_stock: 70,
        };
        assert_eq!(
            err.to_string(),
            "Lemonade: stock 80 exceeds max capacity 70"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
