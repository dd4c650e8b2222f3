//! Host-facing driver for the currency resolver.
//!
//! The runtime owns the [`coinage_core::CurrencyRegistry`], pulls inventory
//! snapshots, runs the exchange and crafting passes, and applies the
//! resulting deltas back to the inventory. Hosts invoke it once per relevant
//! lifecycle event; everything in between is synchronous and bounded.

pub mod error;
pub mod exchange;
pub mod inventory;
pub mod oracle;

pub use error::{Result, RuntimeError};
pub use exchange::{ExchangeRuntime, PassSummary};
pub use inventory::{InventoryProvider, MemoryInventory};
pub use oracle::ItemDirectory;
