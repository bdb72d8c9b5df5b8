//! # State Module
//!
//! What a running terminal holds between operator actions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State                                        │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │   StallConfig    │   │    Inventory     │   │     Console      │    │
//! │  │  (read-only)     │   │  (aso-core)      │   │  stdin / stdout  │    │
//! │  │  store name      │   │  live stock      │   │  pending tokens  │    │
//! │  │  tax rate        │   │                  │   │                  │    │
//! │  │  catalog         │   │                  │   │                  │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  Single thread: everything is owned by `Session`, no locks.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is not here: it lives only for the duration of one order.

mod config;

pub use config::{ConfigError, StallConfig};
