//! # Display
//!
//! Text layout for the ordering menu and the checkout receipt.
//!
//! ```text
//! ======================================
//!         Mainit na Aso's Hotdog Menu
//! ======================================
//! Item Id Item                     Price     Stocks
//! --------------------------------------
//! 1       Classic Hotdog           $30.00    50
//! ...
//! ```

use std::io::{self, Write};

use aso_core::{Inventory, Receipt};

use crate::state::StallConfig;

const DOUBLE_RULE: &str = "======================================";
const SINGLE_RULE: &str = "--------------------------------------";
const STAR_RULE: &str = "**************************************";

/// Width of the label column in receipt totals.
const TOTALS_LABEL_WIDTH: usize = 31;

/// Prints the ordering view: only items with stock left.
pub fn write_menu<W: Write>(out: &mut W, inventory: &Inventory, config: &StallConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", DOUBLE_RULE)?;
    writeln!(out, "        {} Hotdog Menu", config.store_name)?;
    writeln!(out, "{}", DOUBLE_RULE)?;
    writeln!(out, "{:<8}{:<25}{:<10}Stocks", "Item Id", "Item", "Price")?;
    writeln!(out, "{}", SINGLE_RULE)?;

    for (id, item) in inventory.in_stock() {
        writeln!(
            out,
            "{:<8}{:<25}{:<10}{}",
            id,
            item.name,
            item.price.display_with(&config.currency_symbol),
            item.quantity
        )?;
    }

    writeln!(out, "{}", DOUBLE_RULE)
}

/// Prints the receipt banner followed by either the itemized totals or the
/// cancellation notice.
pub fn write_receipt<W: Write>(
    out: &mut W,
    receipt: Option<&Receipt>,
    config: &StallConfig,
) -> io::Result<()> {
    let symbol = config.currency_symbol.as_str();

    writeln!(out, "\n")?;
    writeln!(out, "{}", STAR_RULE)?;
    writeln!(out, "             ORDER RECEIPT")?;
    writeln!(out, "{}", STAR_RULE)?;

    let Some(receipt) = receipt else {
        writeln!(out, "You didn't order anything. Order canceled.")?;
        return writeln!(out, "{}", STAR_RULE);
    };

    for line in &receipt.lines {
        writeln!(
            out,
            "{:<5} x {:<25} {}",
            line.quantity,
            line.name,
            line.line_total().display_with(symbol)
        )?;
    }

    writeln!(out, "{}", SINGLE_RULE)?;
    writeln!(
        out,
        "{:<width$} {}",
        "Subtotal:",
        receipt.subtotal.display_with(symbol),
        width = TOTALS_LABEL_WIDTH
    )?;
    writeln!(
        out,
        "{:<width$} {}",
        format!("Tax ({}):", receipt.tax_rate.label()),
        receipt.tax.display_with(symbol),
        width = TOTALS_LABEL_WIDTH
    )?;
    writeln!(out, "{}", STAR_RULE)?;
    writeln!(
        out,
        "{:<width$} ** {} **",
        "** GRAND TOTAL **:",
        receipt.grand_total.display_with(symbol),
        width = TOTALS_LABEL_WIDTH
    )?;
    writeln!(out, "{}", STAR_RULE)?;
    writeln!(out, "Thank you for visiting {} Hotdog!", config.store_name)
}
