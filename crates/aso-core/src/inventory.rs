//! # Inventory
//!
//! The menu/stock store: an ordered list of `MenuItem`s built once from the
//! catalog. Items are never inserted or removed; only their quantity moves.
//!
//! ## Identity
//! ```text
//! Operator sees:   1  2  3  4  5  6     (display id, 1-based)
//!                  │  │  │  │  │  │
//! Storage slot:    0  1  2  3  4  5     (Vec index)
//! ```
//!
//! ## Stock Movements
//! ```text
//! sell(id, q)      stock s → s - min(q, s)      (order decrement)
//! restock(id, a)   stock s → min(s + a, max)    (capacity clamp)
//! ```
//! Both keep `0 <= quantity <= max_stock` for items that started inside it.

use crate::catalog::CatalogEntry;
use crate::error::{CoreError, CoreResult};
use crate::types::{CartLine, MenuItem};
use crate::validation::{validate_catalog, validate_order_quantity};

// =============================================================================
// Outcomes
// =============================================================================

/// Result of selling units of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    /// Frozen receipt line for the granted quantity.
    pub line: CartLine,

    /// What the operator asked for.
    pub requested: u32,

    /// Stock left on the item afterwards.
    pub remaining: u32,
}

impl Sale {
    /// True when the request was cut down to available stock.
    #[inline]
    pub fn was_clamped(&self) -> bool {
        self.line.quantity < self.requested
    }
}

/// Result of restocking one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restock {
    /// Units actually added.
    pub added: u32,

    /// What the operator asked for.
    pub requested: u32,

    /// Stock level afterwards.
    pub new_stock: u32,
}

impl Restock {
    /// True when the amount was capped at remaining capacity.
    #[inline]
    pub fn was_clamped(&self) -> bool {
        self.added < self.requested
    }
}

// =============================================================================
// Inventory
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<MenuItem>,
}

impl Inventory {
    /// Builds the store from catalog records.
    ///
    /// ## Errors
    /// - `EmptyCatalog` for zero records
    /// - `Validation` for a bad record or a duplicate name
    pub fn from_catalog(entries: &[CatalogEntry]) -> CoreResult<Self> {
        if entries.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        validate_catalog(entries)?;

        Ok(Inventory {
            items: entries.iter().map(CatalogEntry::to_menu_item).collect(),
        })
    }

    /// All items in display order, regardless of stock.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Looks up an item by 1-based display id.
    pub fn get(&self, id: usize) -> Option<&MenuItem> {
        id.checked_sub(1).and_then(|slot| self.items.get(slot))
    }

    /// `(id, item)` pairs for everything that can be ordered right now.
    pub fn in_stock(&self) -> impl Iterator<Item = (usize, &MenuItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_in_stock())
            .map(|(slot, item)| (slot + 1, item))
    }

    /// Checks that `id` names an item with stock to sell.
    ///
    /// ## Errors
    /// - `ItemNotFound` when `id` is outside `1..=len`
    /// - `OutOfStock` when the item's quantity is zero
    pub fn select(&self, id: usize) -> CoreResult<&MenuItem> {
        let item = self.get(id).ok_or(CoreError::ItemNotFound {
            id,
            count: self.items.len(),
        })?;

        if !item.is_in_stock() {
            return Err(CoreError::OutOfStock {
                name: item.name.clone(),
            });
        }

        Ok(item)
    }

    /// Sells up to `requested` units of item `id`.
    ///
    /// A request above stock is clamped to stock, not rejected. A request of
    /// zero is rejected. The returned line is snapshotted before the
    /// decrement so it carries the ordered amount.
    pub fn sell(&mut self, id: usize, requested: u32) -> CoreResult<Sale> {
        self.select(id)?;
        validate_order_quantity(requested)?;

        let item = &mut self.items[id - 1];
        let granted = requested.min(item.quantity);
        let line = item.snapshot(granted);
        item.quantity -= granted;

        Ok(Sale {
            line,
            requested,
            remaining: item.quantity,
        })
    }

    /// Adds up to `amount` units to item `id`, capped at its max stock.
    ///
    /// An amount of zero is a no-op skip.
    pub fn restock(&mut self, id: usize, amount: u32) -> CoreResult<Restock> {
        let count = self.items.len();
        let item = id
            .checked_sub(1)
            .and_then(|slot| self.items.get_mut(slot))
            .ok_or(CoreError::ItemNotFound { id, count })?;

        let added = amount.min(item.needed());
        item.quantity += added;

        Ok(Restock {
            added,
            requested: amount,
            new_stock: item.quantity,
        })
    }
}

impl Default for Inventory {
    /// The built-in six-item stall menu.
    fn default() -> Self {
        Inventory {
            items: crate::catalog::default_catalog()
                .iter()
                .map(CatalogEntry::to_menu_item)
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
