//! Currency definition documents.
//!
//! Documents are JSON objects keyed by namespaced identifiers, one document
//! per category. Record keys may be bare paths, which take the document's
//! namespace. Skipping is always per record: an unresolvable key, a
//! duplicate, an unknown item, or invalid fields reject that record alone
//! and the rest of the batch continues.

use std::collections::HashSet;

use anyhow::Context;
use coinage_core::{
    CurrencyRegistry, ItemHandle, ItemOracle, ResourceId, Reward, Skeleton, Unit,
};
use serde::Deserialize;
use serde_json::Value;

use crate::loaders::LoadResult;

/// Definition document categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Units,
    Rewards,
    Skeletons,
}

impl Category {
    /// File name of this category's document inside a namespace directory.
    pub fn file_name(self) -> String {
        format!("{self}.json")
    }
}

/// Raw unit record as it appears in a `units` document.
#[derive(Debug, Clone, Deserialize)]
struct RawUnit {
    item: String,
    value: i64,
    #[serde(default)]
    drops: bool,
    #[serde(default)]
    exchanges: serde_json::Map<String, Value>,
}

/// Raw reward record as it appears in a `rewards` document.
#[derive(Debug, Clone, Deserialize)]
struct RawReward {
    item: String,
    weight: i64,
}

/// Raw skeleton record as it appears in a `skeletons` document.
#[derive(Debug, Clone, Deserialize)]
struct RawSkeleton {
    item: String,
    cost: Vec<String>,
}

/// Loads currency definition documents into a [`CurrencyRegistry`].
pub struct CurrencyLoader<'a> {
    items: &'a dyn ItemOracle,
}

impl<'a> CurrencyLoader<'a> {
    /// Creates a loader resolving item references through `items`.
    pub fn new(items: &'a dyn ItemOracle) -> Self {
        Self { items }
    }

    /// Parses a `units` document from `namespace`.
    ///
    /// Exchange-map entries for the unit's own namespace, and entries whose
    /// rate is not a positive integer, are dropped silently.
    pub fn parse_units(
        &self,
        namespace: &str,
        document: &Value,
    ) -> LoadResult<Vec<(ResourceId, Unit)>> {
        self.parse_records(namespace, document, |key, record: RawUnit| {
            let item = self.resolve_item(&record.item)?;
            let value = positive(record.value, "value")?;

            let mut unit = Unit::new(item, value)?.with_drops(record.drops);

            for (target, rate) in &record.exchanges {
                if target == key.namespace() {
                    continue;
                }
                let Some(rate) = rate.as_u64().and_then(|rate| u32::try_from(rate).ok()) else {
                    continue;
                };

                unit = unit.with_exchange_rate(target.clone(), rate);
            }

            Ok(unit)
        })
    }

    /// Parses a `rewards` document from `namespace`.
    pub fn parse_rewards(
        &self,
        namespace: &str,
        document: &Value,
    ) -> LoadResult<Vec<(ResourceId, Reward)>> {
        self.parse_records(namespace, document, |_key, record: RawReward| {
            let item = self.resolve_item(&record.item)?;
            let weight = positive(record.weight, "weight")?;

            Ok(Reward::new(item, weight)?)
        })
    }

    /// Parses a `skeletons` document from `namespace`.
    ///
    /// Cost entries name reward registry keys; bare paths take the document
    /// namespace. Any unparsable cost identifier rejects that skeleton's
    /// record.
    pub fn parse_skeletons(
        &self,
        namespace: &str,
        document: &Value,
    ) -> LoadResult<Vec<(ResourceId, Skeleton)>> {
        self.parse_records(namespace, document, |_key, record: RawSkeleton| {
            let item = self.resolve_item(&record.item)?;
            let mut requires = Vec::with_capacity(record.cost.len());

            for raw in &record.cost {
                let id = ResourceId::parse_in(namespace, raw)
                    .with_context(|| format!("invalid cost identifier '{raw}'"))?;

                requires.push(id);
            }

            Ok(Skeleton::new(item, requires)?)
        })
    }

    /// Parses and loads a `units` document, replacing the unit table.
    ///
    /// Returns the number of units loaded.
    pub fn load_units(
        &self,
        namespace: &str,
        document: &Value,
        registry: &mut CurrencyRegistry,
    ) -> LoadResult<usize> {
        let count = registry.load_units(self.parse_units(namespace, document)?);
        tracing::info!(namespace, count, "loaded currency units");

        Ok(count)
    }

    /// Parses and loads a `rewards` document, replacing the reward table.
    ///
    /// Returns the number of rewards loaded.
    pub fn load_rewards(
        &self,
        namespace: &str,
        document: &Value,
        registry: &mut CurrencyRegistry,
    ) -> LoadResult<usize> {
        let count = registry.load_rewards(self.parse_rewards(namespace, document)?);
        tracing::info!(namespace, count, "loaded currency rewards");

        Ok(count)
    }

    /// Parses and loads a `skeletons` document, replacing the skeleton table.
    ///
    /// Returns the number of skeletons loaded.
    pub fn load_skeletons(
        &self,
        namespace: &str,
        document: &Value,
        registry: &mut CurrencyRegistry,
    ) -> LoadResult<usize> {
        let count = registry.load_skeletons(self.parse_skeletons(namespace, document)?);
        tracing::info!(namespace, count, "loaded currency skeletons");

        Ok(count)
    }

    /// Parses every record in a category document, skipping malformed ones.
    fn parse_records<T, R, F>(
        &self,
        namespace: &str,
        document: &Value,
        mut build: F,
    ) -> LoadResult<Vec<(ResourceId, T)>>
    where
        R: serde::de::DeserializeOwned,
        F: FnMut(&ResourceId, R) -> anyhow::Result<T>,
    {
        let object = document
            .as_object()
            .context("expected a top-level object of keyed records")?;

        let mut entries = Vec::with_capacity(object.len());
        let mut seen: HashSet<ResourceId> = HashSet::with_capacity(object.len());

        for (raw_key, value) in object {
            let key = match ResourceId::parse_in(namespace, raw_key) {
                Ok(key) => key,
                Err(error) => {
                    tracing::warn!(key = %raw_key, %error, "invalid identifier key");
                    continue;
                }
            };

            if !seen.insert(key.clone()) {
                tracing::warn!(key = %key, "duplicate identifier key");
                continue;
            }

            let record: R = match serde_json::from_value(value.clone()) {
                Ok(record) => record,
                Err(error) => {
                    tracing::warn!(key = %key, %error, "malformed record");
                    continue;
                }
            };

            match build(&key, record) {
                Ok(entry) => entries.push((key, entry)),
                Err(error) => {
                    tracing::warn!(key = %key, %error, "rejected record");
                }
            }
        }

        Ok(entries)
    }

    fn resolve_item(&self, raw: &str) -> anyhow::Result<ItemHandle> {
        let id: ResourceId = raw
            .parse()
            .with_context(|| format!("invalid item identifier '{raw}'"))?;

        self.items
            .resolve(&id)
            .with_context(|| format!("unresolvable item '{id}'"))
    }
}

fn positive(raw: i64, field: &str) -> anyhow::Result<u32> {
    u32::try_from(raw)
        .ok()
        .filter(|&parsed| parsed > 0)
        .with_context(|| format!("expected a positive non-zero {field}"))
}
