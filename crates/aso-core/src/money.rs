//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 3000 + 2 × 3600 = 16200 cents  → "$162.00"                      │
//! │    16200 × 7% = 1134 cents            → "$11.34"                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aso_core::money::Money;
//!
//! let price = Money::from_cents(3000); // $30.00
//! let line = price * 3u32;             // $90.00
//! assert_eq!(line.to_string(), "$90.00");
//! assert_eq!(line.display_with("PHP ").to_string(), "PHP 90.00");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::types::TaxRate;

/// Currency prefix used by the plain `Display` impl.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► CartLine.unit_price ──► CartLine.line_total
///                                                   │
///                    Receipt.subtotal ◄─────────────┘
///                          │
///                          ├──► Receipt.tax (TaxRate)
///                          ▼
///                    Receipt.grand_total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use aso_core::money::Money;
    ///
    /// let price = Money::from_cents(4500); // $45.00
    /// assert_eq!(price.cents(), 4500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 provides the
    /// rounding (5000/10000 = 0.5). Amounts here are never negative.
    ///
    /// ```rust
    /// use aso_core::money::Money;
    /// use aso_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(16200); // $162.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(700));
    /// assert_eq!(tax.cents(), 1134); // $11.34
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so a large subtotal times bps cannot overflow
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a unit quantity.
    ///
    /// ```rust
    /// use aso_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(3600); // Soda (Can)
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 7200);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Formats with a custom currency prefix instead of `$`.
    pub fn display_with<'a>(&self, symbol: &'a str) -> MoneyDisplay<'a> {
        MoneyDisplay {
            money: *self,
            symbol,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Fixed two-decimal rendering with a currency prefix.
///
/// Honors width/alignment flags, so `{:<8}` pads the whole `$30.00` token.
#[derive(Debug, Clone, Copy)]
pub struct MoneyDisplay<'a> {
    money: Money,
    symbol: &'a str,
}

impl fmt::Display for MoneyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.money.is_negative() { "-" } else { "" };
        let rendered = format!(
            "{}{}{}.{:02}",
            sign,
            self.symbol,
            self.money.dollars().abs(),
            self.money.cents_part()
        );
        f.pad(&rendered)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(DEFAULT_CURRENCY_SYMBOL), f)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a unit quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(17334)), "$173.34");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_display_padding_and_symbol() {
        assert_eq!(format!("{:<8}|", Money::from_cents(3000)), "$30.00  |");
        assert_eq!(
            Money::from_cents(1500).display_with("₱").to_string(),
            "₱15.00"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3u32).cents(), 3000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let lines = [Money::from_cents(9000), Money::from_cents(7200)];
        let total: Money = lines.iter().sum();
        assert_eq!(total.cents(), 16200);
    }

    #[test]
    fn test_tax_seven_percent() {
        let rate = TaxRate::from_bps(700);
        assert_eq!(Money::from_cents(16200).calculate_tax(rate).cents(), 1134);
        // 0.35 * 7% = 0.0245 → rounds to 2 cents
        assert_eq!(Money::from_cents(35).calculate_tax(rate).cents(), 2);
        // 0.07 * 7% = 0.0049 → rounds to 0
        assert_eq!(Money::from_cents(7).calculate_tax(rate).cents(), 0);
    }

    #[test]
    fn test_tax_half_rounds_up() {
        // $10.00 at 8.25% = $0.825 → $0.83
        let tax = Money::from_cents(1000).calculate_tax(TaxRate::from_bps(825));
        assert_eq!(tax.cents(), 83);
    }
}
