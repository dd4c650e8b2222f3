//! Exchange configuration loader.

use std::path::Path;

use coinage_core::ExchangeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for exchange configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load exchange configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing an ExchangeConfig
    pub fn load(path: &Path) -> LoadResult<ExchangeConfig> {
        let content = read_file(path)?;
        let config: ExchangeConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse exchange config TOML: {}", e))?;

        Ok(config)
    }
}
