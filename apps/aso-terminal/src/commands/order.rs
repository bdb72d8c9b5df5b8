//! # Order Flow
//!
//! Takes one customer order against live stock and prints the receipt.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  id in 1..=N, in stock  ┌──────────────┐                │
//! │   │ Browsing │────────────────────────►│ ItemSelected │                │
//! │   │          │◄────────────────────────│              │                │
//! │   └────┬─────┘   qty confirmed/rejected └──────────────┘                │
//! │        │   ▲                                                            │
//! │        │   └── bad id / out of stock (no state change)                 │
//! │        │ id == 0                                                        │
//! │        ▼                                                                │
//! │   ┌──────────┐                                                          │
//! │   │ Checkout │──► receipt, or "Order canceled." when the cart is empty │
//! │   └──────────┘                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity zero is rejected while a quantity above stock is clamped to
//! stock. The two rules stay separate.

use std::io::{BufRead, Write};

use aso_core::{Cart, CoreError, Inventory, Receipt, ValidationError};
use tracing::{debug, info};

use crate::console::Console;
use crate::display;
use crate::error::AppResult;
use crate::state::StallConfig;

/// Runs the order loop until the operator enters `0`, then checks out.
///
/// Returns the receipt, or `None` when the order was cancelled.
pub fn take_order<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
    config: &StallConfig,
) -> AppResult<Option<Receipt>> {
    let mut cart = Cart::new();

    writeln!(
        console.out(),
        "\nWelcome to {}! Start your order (Type '0' to finish order).",
        config.store_name
    )?;

    loop {
        display::write_menu(console.out(), inventory, config)?;

        let id_prompt = format!(
            "\nEnter Item ID (1-{}) or '0' to checkout: ",
            inventory.len()
        );
        let id = console.read_non_negative_int(&id_prompt, "item id")? as usize;
        if id == 0 {
            break;
        }

        let qty_prompt = match inventory.select(id) {
            Ok(item) => format!(
                "How many {}s do you want? (Max {}): ",
                item.name, item.quantity
            ),
            Err(CoreError::ItemNotFound { .. }) => {
                debug!(id, "item id out of range");
                writeln!(console.out(), "Invalid item ID. Please try again.")?;
                continue;
            }
            Err(err) => {
                debug!(id, error = %err, "item not selectable");
                writeln!(console.out(), "{}", err)?;
                continue;
            }
        };

        let requested = console.read_non_negative_int(&qty_prompt, "quantity")?;

        let sale = match inventory.sell(id, requested) {
            Ok(sale) => sale,
            Err(CoreError::Validation(ValidationError::MustBePositive { .. })) => {
                writeln!(console.out(), "Quantity must be greater than zero.")?;
                continue;
            }
            Err(err) => {
                writeln!(console.out(), "{}", err)?;
                continue;
            }
        };

        if sale.was_clamped() {
            info!(
                item = %sale.line.name,
                requested = sale.requested,
                granted = sale.line.quantity,
                "order quantity clamped to stock"
            );
            writeln!(
                console.out(),
                "Only {} are in stock. Adding all available.",
                sale.line.quantity
            )?;
        }

        let quantity = sale.line.quantity;
        let name = sale.line.name.clone();
        let running_total = cart.push(sale.line);

        info!(
            item = %name,
            quantity,
            remaining = sale.remaining,
            subtotal_cents = running_total.cents(),
            "order line added"
        );
        writeln!(
            console.out(),
            "\nAdded {} x {} to your order. Current total: {}",
            quantity,
            name,
            running_total.display_with(&config.currency_symbol)
        )?;
    }

    let units = cart.total_quantity();
    let receipt = cart.checkout(config.tax_rate());
    match &receipt {
        Some(r) => info!(
            lines = r.lines.len(),
            units,
            subtotal_cents = r.subtotal.cents(),
            tax_cents = r.tax.cents(),
            total_cents = r.grand_total.cents(),
            "order checked out"
        ),
        None => info!("order cancelled with empty cart"),
    }

    display::write_receipt(console.out(), receipt.as_ref(), config)?;
    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn order(script: &str) -> (Option<Receipt>, Inventory, String) {
        let config = StallConfig::default();
        let mut inventory = config.build_inventory().unwrap();
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

        let receipt = take_order(&mut console, &mut inventory, &config).unwrap();
        let (_, out) = console.into_parts();
        (receipt, inventory, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_hotdogs_and_sodas() {
        let (receipt, inventory, out) = order("1\n3\n4\n2\n0\n");
        let receipt = receipt.unwrap();

        assert_eq!(inventory.get(1).unwrap().quantity, 47);
        assert_eq!(inventory.get(4).unwrap().quantity, 98);
        assert_eq!(receipt.subtotal.cents(), 16200);
        assert_eq!(receipt.tax.cents(), 1134);
        assert_eq!(receipt.grand_total.cents(), 17334);

        assert!(out.contains("How many Classic Hotdogs do you want? (Max 50): "));
        assert!(out.contains("Added 3 x Classic Hotdog to your order. Current total: $90.00"));
        assert!(out.contains("Added 2 x Soda (Can) to your order. Current total: $162.00"));
        assert!(out.contains("** $173.34 **"));
    }

    #[test]
    fn test_empty_order_is_cancelled() {
        let (receipt, inventory, out) = order("0\n");
        assert!(receipt.is_none());
        assert_eq!(inventory, Inventory::default());
        assert!(out.contains("Order canceled."));
        assert!(!out.contains("GRAND TOTAL"));
    }

    #[test]
    fn test_quantity_above_stock_is_clamped() {
        let (receipt, inventory, out) = order("3 25\n0\n");
        let receipt = receipt.unwrap();

        assert!(out.contains("Only 20 are in stock. Adding all available."));
        assert_eq!(receipt.lines[0].quantity, 20);
        assert_eq!(inventory.get(3).unwrap().quantity, 0);
    }

    #[test]
    fn test_sold_out_item_is_rejected() {
        let (receipt, inventory, out) = order("3 20\n3\n0\n");

        assert!(out.contains("Sorry, Chicken Hotdog is currently out of stock!"));
        assert_eq!(receipt.unwrap().lines.len(), 1);
        assert_eq!(inventory.get(3).unwrap().quantity, 0);
    }

    #[test]
    fn test_zero_quantity_and_bad_id() {
        let (receipt, inventory, out) = order("2 0\n9\n0\n");

        assert!(out.contains("Quantity must be greater than zero."));
        assert!(out.contains("Invalid item ID. Please try again."));
        assert!(receipt.is_none());
        assert_eq!(inventory, Inventory::default());
    }

    #[test]
    fn test_bad_tokens_recover() {
        let (receipt, _, out) = order("abc\n-1\n5 x\n4\n0\n");

        assert!(out.contains("Invalid input. Please enter a whole number."));
        assert!(out.contains("Input must be a non-negative number."));
        let receipt = receipt.unwrap();
        assert_eq!(receipt.lines[0].name, "Bottled Water");
        assert_eq!(receipt.lines[0].quantity, 4);
    }
}
