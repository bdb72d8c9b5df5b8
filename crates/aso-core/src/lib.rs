//! # aso-core: Pure Business Logic for the Stall POS
//!
//! Everything the hotdog stall knows about money, stock, carts and receipts,
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aso POS Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                aso-terminal (stdin / stdout)                    │   │
//! │  │    Main menu ──► Order flow ──► Receipt    Restock flow         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aso-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ inventory │  │ validation│  │   │
//! │  │   │ MenuItem  │  │   Money   │  │ Inventory │  │   rules   │  │   │
//! │  │   │ CartLine  │  │  TaxRate  │  │   cart    │  │  catalog  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDIN • NO STDOUT • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, CartLine, TaxRate, Command)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Catalog records and the built-in menu
//! - [`inventory`] - Stock store with sell/restock clamping
//! - [`cart`] - Order lines and receipt totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input and catalog rules
//!
//! ## Example Usage
//!
//! ```rust
//! use aso_core::{Cart, Inventory, DEFAULT_TAX_RATE};
//!
//! let mut inventory = Inventory::default();
//! let mut cart = Cart::new();
//!
//! cart.push(inventory.sell(1, 3)?.line); // 3 × Classic Hotdog
//! cart.push(inventory.sell(4, 2)?.line); // 2 × Soda (Can)
//!
//! let receipt = cart.checkout(DEFAULT_TAX_RATE).expect("cart has lines");
//! assert_eq!(receipt.grand_total.to_string(), "$173.34");
//! # Ok::<(), aso_core::CoreError>(())
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, Receipt};
pub use catalog::{default_catalog, CatalogEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, Restock, Sale};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied at checkout: 7%.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(700);

/// Store name printed on menus and receipts.
pub const DEFAULT_STORE_NAME: &str = "Mainit na Aso's";
