//! # Cart & Receipt
//!
//! Order-scoped state: the lines confirmed during one order, and the receipt
//! computed from them at checkout.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌──────────┐  push(line)  ┌──────────┐  checkout()  ┌──────────────────┐
//! │  Empty   │─────────────►│ In Cart  │─────────────►│ Some(Receipt)    │
//! │  Cart    │              │          │              └──────────────────┘
//! └──────────┘              └──────────┘
//!      │
//!      │ checkout()
//!      ▼
//!    None  (order cancelled, no totals)
//! ```
//!
//! Each confirmed entry is its own line; ordering the same item twice prints
//! it twice on the receipt.

use crate::money::Money;
use crate::types::{CartLine, TaxRate};

/// The lines of the order in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a confirmed line and returns the running subtotal.
    pub fn push(&mut self, line: CartLine) -> Money {
        self.lines.push(line);
        self.subtotal()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    /// Σ unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Consumes the cart into a receipt, or `None` if nothing was ordered.
    pub fn checkout(self, tax_rate: TaxRate) -> Option<Receipt> {
        if self.lines.is_empty() {
            return None;
        }

        let subtotal = self.subtotal();
        let tax = subtotal.calculate_tax(tax_rate);

        Some(Receipt {
            lines: self.lines,
            subtotal,
            tax_rate,
            tax,
            grand_total: subtotal + tax,
        })
    }
}

/// Final figures for a non-empty order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use proptest::prelude::*;

    const SEVEN_PERCENT: TaxRate = TaxRate::from_bps(700);

    #[test]
    fn test_empty_cart_cancels() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.checkout(SEVEN_PERCENT), None);
    }

    #[test]
    fn test_hotdog_and_soda_receipt() {
        let mut inventory = Inventory::default();
        let mut cart = Cart::new();

        let running = cart.push(inventory.sell(1, 3).unwrap().line);
        assert_eq!(running.to_string(), "$90.00");
        let running = cart.push(inventory.sell(4, 2).unwrap().line);
        assert_eq!(running.to_string(), "$162.00");

        assert_eq!(inventory.get(1).unwrap().quantity, 47);
        assert_eq!(inventory.get(4).unwrap().quantity, 98);
        assert_eq!(cart.total_quantity(), 5);

        let receipt = cart.checkout(SEVEN_PERCENT).unwrap();
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.subtotal.to_string(), "$162.00");
        assert_eq!(receipt.tax.to_string(), "$11.34");
        assert_eq!(receipt.grand_total.to_string(), "$173.34");
    }

    #[test]
    fn test_same_item_twice_gives_two_lines() {
        let mut inventory = Inventory::default();
        let mut cart = Cart::new();
        cart.push(inventory.sell(6, 1).unwrap().line);
        cart.push(inventory.sell(6, 2).unwrap().line);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.subtotal().cents(), 6000);
    }

    proptest! {
        #[test]
        fn prop_receipt_totals_are_consistent(
            picks in proptest::collection::vec((1usize..=6, 1u32..60), 1..12)
        ) {
            let mut inventory = Inventory::default();
            let mut cart = Cart::new();
            for (id, q) in picks {
                if let Ok(sale) = inventory.sell(id, q) {
                    cart.push(sale.line);
                }
            }
            prop_assume!(!cart.is_empty());

            let expected: i64 = cart
                .lines()
                .iter()
                .map(|l| l.unit_price.cents() * l.quantity as i64)
                .sum();
            let receipt = cart.checkout(SEVEN_PERCENT).unwrap();

            prop_assert_eq!(receipt.subtotal.cents(), expected);
            // subtotal × 1.07 rounded half up to the cent
            let rounded = (expected as i128 * 10700 + 5000) / 10000;
            prop_assert_eq!(receipt.grand_total.cents() as i128, rounded);
        }
    }
}
