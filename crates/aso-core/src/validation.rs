//! # Validation Module
//!
//! Input validation utilities for the stall POS.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (aso-terminal)                                       │
//! │  ├── Tokenizes stdin, re-prompts on failure                            │
//! │  └── Discards the rest of a bad line                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Token → non-negative integer                                      │
//! │  ├── Item id / order quantity rules                                    │
//! │  └── Catalog record rules                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory                                                    │
//! │  └── Stock clamping against live quantities                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aso_core::validation::{parse_non_negative_int, validate_order_quantity};
//!
//! assert_eq!(parse_non_negative_int("12", "quantity").unwrap(), 12);
//! assert!(parse_non_negative_int("-3", "quantity").is_err());
//! assert!(validate_order_quantity(0).is_err());
//! ```

use std::collections::HashSet;

use crate::catalog::CatalogEntry;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest item name the menu layout can hold.
pub const MAX_ITEM_NAME_LEN: usize = 60;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses one operator token as a non-negative base-10 integer.
///
/// ## Outcomes
/// ```text
/// "25"    → Ok(25)
/// "+7"    → Ok(7)
/// "-4"    → Negative        (token was well formed, nothing to discard)
/// "abc"   → NotANumber      (console discards the rest of the line)
/// "2.5"   → NotANumber
/// "9999999999" → OutOfRange (does not fit a stock counter)
/// ```
pub fn parse_non_negative_int(token: &str, field: &str) -> ValidationResult<u32> {
    let token = token.trim();
    let value: i64 = token.parse().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        input: token.to_string(),
    })?;

    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: u32::MAX as i64,
    })
}

/// Validates an ordered quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound here: the inventory clamps to available stock
pub fn validate_order_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "Quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in cents (zero allowed for free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates an item name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a single catalog record.
///
/// ## Rules
/// - Name present and at most `MAX_ITEM_NAME_LEN` characters
/// - Price not negative
/// - Opening stock not above max stock
pub fn validate_catalog_entry(entry: &CatalogEntry) -> ValidationResult<()> {
    validate_item_name(&entry.name)?;
    validate_price_cents(entry.price_cents)?;

    if entry.quantity > entry.max_stock {
        return Err(ValidationError::CapacityExceeded {
            field: entry.name.trim().to_string(),
            quantity: entry.quantity,
            max_stock: entry.max_stock,
        });
    }

    Ok(())
}

/// Validates every record plus cross-record uniqueness of names
/// (case-insensitive).
pub fn validate_catalog(entries: &[CatalogEntry]) -> ValidationResult<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        validate_catalog_entry(entry)?;

        let key = entry.name.trim().to_lowercase();
        if !seen.insert(key) {
            return Err(ValidationError::Duplicate {
                field: "name".to_string(),
                value: entry.name.trim().to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative_int() {
        assert_eq!(parse_non_negative_int("0", "id"), Ok(0));
        assert_eq!(parse_non_negative_int(" 25 ", "id"), Ok(25));
        assert_eq!(parse_non_negative_int("+7", "id"), Ok(7));
        assert_eq!(
            parse_non_negative_int("-1", "id"),
            Err(ValidationError::Negative {
                field: "id".to_string()
            })
        );
        assert!(matches!(
            parse_non_negative_int("abc", "id"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_non_negative_int("2.5", "id"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_non_negative_int("", "id"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_non_negative_int("9999999999", "id"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_order_quantity() {
        assert!(validate_order_quantity(1).is_ok());
        assert!(validate_order_quantity(500).is_ok());
        assert!(validate_order_quantity(0).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(3000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(700).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_catalog_entry() {
        assert!(validate_catalog_entry(&CatalogEntry::new("Lemonade", 2000, 40, 70)).is_ok());
        assert!(validate_catalog_entry(&CatalogEntry::new("  ", 2000, 40, 70)).is_err());
        assert!(validate_catalog_entry(&CatalogEntry::new("Lemonade", -1, 40, 70)).is_err());
        assert!(matches!(
            validate_catalog_entry(&CatalogEntry::new("Lemonade", 2000, 80, 70)),
            Err(ValidationError::CapacityExceeded { quantity: 80, .. })
        ));
        assert!(validate_catalog_entry(&CatalogEntry::new("A".repeat(61), 1, 0, 0)).is_err());
    }

    #[test]
    fn test_validate_catalog_rejects_duplicates() {
        let entries = vec![
            CatalogEntry::new("Lemonade", 2000, 40, 70),
            CatalogEntry::new("lemonade ", 2500, 10, 20),
        ];
        assert!(matches!(
            validate_catalog(&entries),
            Err(ValidationError::Duplicate { .. })
        ));
        assert!(validate_catalog(&crate::catalog::default_catalog()).is_ok());
    }
}
