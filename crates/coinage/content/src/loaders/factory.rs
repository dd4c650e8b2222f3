//! Content factory for loading a currency data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use coinage_core::{CurrencyRegistry, ExchangeConfig, ItemOracle};
use strum::IntoEnumIterator;

use crate::loaders::{Category, ConfigLoader, CurrencyLoader, LoadResult, read_file};

/// Content factory that loads all currency content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── mint/
/// │   ├── units.json
/// │   ├── rewards.json
/// │   └── skeletons.json
/// └── guild/
///     └── units.json
/// ```
///
/// Every immediate subdirectory is a definition namespace; a missing
/// category file is simply absent, not an error. Documents from all
/// namespaces merge into one batch per category so each registry table is
/// replaced exactly once per load.
pub struct ContentFactory {
    data_dir: PathBuf,
}

/// Number of entries loaded per category across one full load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub units: usize,
    pub rewards: usize,
    pub skeletons: usize,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load exchange configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<ExchangeConfig> {
        let path = self.data_dir.join("config.toml");

        if !path.exists() {
            return Ok(ExchangeConfig::default());
        }

        ConfigLoader::load(&path)
    }

    /// Load every namespace directory into `registry`.
    ///
    /// Item references resolve through `items`; unresolvable records are
    /// skipped by the loader. An unreadable or unparsable document fails the
    /// whole load before any table is touched.
    pub fn load_registry(
        &self,
        items: &dyn ItemOracle,
        registry: &mut CurrencyRegistry,
    ) -> LoadResult<LoadReport> {
        let loader = CurrencyLoader::new(items);
        let mut units = Vec::new();
        let mut rewards = Vec::new();
        let mut skeletons = Vec::new();

        for namespace in self.namespaces()? {
            let dir = self.data_dir.join(&namespace);

            for category in Category::iter() {
                let path = dir.join(category.file_name());

                if !path.exists() {
                    continue;
                }

                let text = read_file(&path)?;
                let document: serde_json::Value = serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?;

                match category {
                    Category::Units => units.extend(loader.parse_units(&namespace, &document)?),
                    Category::Rewards => {
                        rewards.extend(loader.parse_rewards(&namespace, &document)?);
                    }
                    Category::Skeletons => {
                        skeletons.extend(loader.parse_skeletons(&namespace, &document)?);
                    }
                }
            }
        }

        let report = LoadReport {
            units: registry.load_units(units),
            rewards: registry.load_rewards(rewards),
            skeletons: registry.load_skeletons(skeletons),
        };

        tracing::info!(
            units = report.units,
            rewards = report.rewards,
            skeletons = report.skeletons,
            "loaded currency definitions"
        );

        Ok(report)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Lists namespace directories, sorted for stable registry order.
    fn namespaces(&self) -> LoadResult<Vec<String>> {
        let mut namespaces = Vec::new();

        let entries = fs::read_dir(&self.data_dir).with_context(|| {
            format!("failed to read data directory {}", self.data_dir.display())
        })?;

        for entry in entries {
            let entry = entry?;

            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    namespaces.push(name.to_owned());
                }
            }
        }

        namespaces.sort();
        Ok(namespaces)
    }
}
