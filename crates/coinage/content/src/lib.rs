//! Data-driven currency definitions and loaders.
//!
//! This crate converts external definition documents into
//! [`coinage_core::CurrencyRegistry`] entries:
//! - currency units, rewards, and skeletons (JSON, one document set per
//!   namespace)
//! - exchange configuration (TOML)
//!
//! A malformed record fails alone, with a logged diagnostic; a parsed batch
//! replaces its registry table exactly once. Definitions are consumed by the
//! runtime and never appear in resolver state.

pub mod loaders;

pub use loaders::{Category, ConfigLoader, ContentFactory, CurrencyLoader, LoadReport};
