//! Deterministic currency exchange and crafting logic shared across hosts.
//!
//! `coinage-core` defines the canonical rules (registry tables, tier
//! resolution, the automatic exchange pass, weighted reward sampling, and
//! skeleton crafting) and exposes pure APIs that can be reused by the runtime
//! and offline tools. Resolvers never touch an inventory directly: they read
//! [`state::StackSnapshot`] slices pulled by the caller and return
//! [`state::InventoryDelta`] requests for the caller to apply.
pub mod config;
pub mod currency;
pub mod env;
pub mod error;
pub mod exchange;
pub mod state;

pub use config::ExchangeConfig;
pub use currency::{
    CurrencyRegistry, CurrencyTable, DefinitionError, ItemBacked, Reward, Skeleton, Unit,
};
pub use env::{ItemOracle, PcgRng, RngOracle, mix_seed};
pub use error::{CoinageError, ErrorSeverity};
pub use exchange::{CraftResolution, exchange_units, resolve_crafting, sample_rewards};
pub use state::{
    Insertion, InventoryDelta, ItemHandle, Removal, ResourceId, ResourceIdError, StackSnapshot,
};
