//! Definition loaders for reading currency data from files.
//!
//! This module provides loaders that convert JSON definition documents and
//! TOML configuration into registry contents. Record-level failures are
//! logged and skipped; document-level failures surface as errors.

pub mod config;
pub mod currency;
pub mod factory;

pub use config::ConfigLoader;
pub use currency::{Category, CurrencyLoader};
pub use factory::{ContentFactory, LoadReport};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
