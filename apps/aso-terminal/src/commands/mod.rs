//! # Operator Commands
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── order.rs    ◄─── [O]rder: browse, add lines, checkout
//! └── restock.rs  ◄─── [R]estock: walk every item toward capacity
//! ```
//!
//! Each command borrows exactly the state it needs: the console, the
//! inventory, and (for ordering) the store configuration.

pub mod order;
pub mod restock;

pub use order::take_order;
pub use restock::run_restock;
