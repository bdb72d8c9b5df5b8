//! # Catalog
//!
//! The list of sellable items a store opens with. Kept as plain data so a
//! different stall can run the same engine with its own menu.

use serde::Deserialize;

use crate::money::Money;
use crate::types::MenuItem;

/// One catalog record: what an item costs and how much of it the stall holds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Opening stock.
    pub quantity: u32,

    /// Capacity ceiling for restocking.
    pub max_stock: u32,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price_cents: i64, quantity: u32, max_stock: u32) -> Self {
        CatalogEntry {
            name: name.into(),
            price_cents,
            quantity,
            max_stock,
        }
    }

    /// Builds the live stock record. Callers validate first.
    pub fn to_menu_item(&self) -> MenuItem {
        MenuItem {
            name: self.name.trim().to_string(),
            price: Money::from_cents(self.price_cents),
            quantity: self.quantity,
            max_stock: self.max_stock,
        }
    }
}

/// The hotdog stall's built-in six-item menu.
///
/// | # | Name             | Price | Stock | Max |
/// |---|------------------|-------|-------|-----|
/// | 1 | Classic Hotdog   | 30.00 | 50    | 100 |
/// | 2 | Chili Cheese Dog | 50.00 | 30    | 50  |
/// | 3 | Chicken Hotdog   | 45.00 | 20    | 40  |
/// | 4 | Soda (Can)       | 36.00 | 100   | 200 |
/// | 5 | Bottled Water    | 15.00 | 80    | 150 |
/// | 6 | Lemonade         | 20.00 | 40    | 70  |
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        // Hotdogs
        CatalogEntry::new("Classic Hotdog", 3000, 50, 100),
        CatalogEntry::new("Chili Cheese Dog", 5000, 30, 50),
        CatalogEntry::new("Chicken Hotdog", 4500, 20, 40),
        // Drinks
        CatalogEntry::new("Soda (Can)", 3600, 100, 200),
        CatalogEntry::new("Bottled Water", 1500, 80, 150),
        CatalogEntry::new("Lemonade", 2000, 40, 70),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0], CatalogEntry::new("Classic Hotdog", 3000, 50, 100));
        assert_eq!(catalog[5].name, "Lemonade");
        assert!(catalog.iter().all(|e| e.quantity <= e.max_stock));
    }

    #[test]
    fn test_entry_deserializes_from_json() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{ "name": "Corn Dog", "price_cents": 4000, "quantity": 10, "max_stock": 25 }"#,
        )
        .unwrap();
        let item = entry.to_menu_item();
        assert_eq!(item.name, "Corn Dog");
        assert_eq!(item.price.to_string(), "$40.00");
        assert_eq!(item.needed(), 15);
    }
}
