//! The host-facing exchange trigger.

use coinage_content::{ContentFactory, LoadReport};
use coinage_core::{
    CurrencyRegistry, ExchangeConfig, InventoryDelta, ItemOracle, PcgRng, exchange_units,
    mix_seed, resolve_crafting,
};

use crate::error::{Result, RuntimeError};
use crate::inventory::InventoryProvider;

/// Outcome summary of one exchange invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PassSummary {
    /// Delta applied by the unit exchange phase.
    pub exchanged: InventoryDelta,
    /// Delta applied by the crafting phase.
    pub crafted: InventoryDelta,
}

impl PassSummary {
    /// Returns true when the invocation changed nothing.
    pub fn is_empty(&self) -> bool {
        self.exchanged.is_empty() && self.crafted.is_empty()
    }
}

/// Drives the resolvers against a live inventory.
///
/// One runtime owns the registry, the configuration, and the rng seed; hosts
/// call [`run`](Self::run) once per relevant lifecycle event. Deltas apply
/// remove-first; insertions always happen once computed, even when a removal
/// came up short against a concurrently mutated inventory. The
/// actual-removed count is bookkeeping only and is surfaced in the log.
pub struct ExchangeRuntime {
    registry: CurrencyRegistry,
    config: ExchangeConfig,
    rng: PcgRng,
    base_seed: u64,
    nonce: u64,
}

impl ExchangeRuntime {
    /// Creates a runtime around a loaded registry.
    pub fn new(registry: CurrencyRegistry, config: ExchangeConfig, base_seed: u64) -> Self {
        Self {
            registry,
            config,
            rng: PcgRng,
            base_seed,
            nonce: 0,
        }
    }

    /// Returns the owned registry.
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// Mutable registry access for definition reloads.
    ///
    /// Reloads follow single-writer discipline: never reload while a pass is
    /// in flight (passes borrow the registry for their whole invocation, so
    /// the borrow checker enforces this within one thread).
    pub fn registry_mut(&mut self) -> &mut CurrencyRegistry {
        &mut self.registry
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Reloads registry contents and configuration from a content directory.
    pub fn load_content(
        &mut self,
        factory: &ContentFactory,
        items: &dyn ItemOracle,
    ) -> Result<LoadReport> {
        let config = factory
            .load_config()
            .map_err(|error| RuntimeError::LoadFailed(error.to_string()))?;
        let report = factory
            .load_registry(items, &mut self.registry)
            .map_err(|error| RuntimeError::LoadFailed(error.to_string()))?;

        self.config = config;
        Ok(report)
    }

    /// Runs one full exchange invocation against `inventory`.
    ///
    /// Control flow: snapshot, unit exchange pass, apply, re-snapshot iff
    /// the exchange changed anything, crafting pass, apply.
    pub fn run(&mut self, inventory: &mut dyn InventoryProvider) -> PassSummary {
        let seed = mix_seed(self.base_seed, self.nonce, 0);
        self.nonce += 1;

        let mut stacks = inventory.snapshot();
        let exchanged = exchange_units(&self.registry, &self.config, &stacks, &self.rng, seed);

        if !exchanged.is_empty() {
            self.apply(inventory, &exchanged);
            // Conversions changed the bag; crafting must see the new state.
            stacks = inventory.snapshot();
        }

        let crafted = resolve_crafting(&self.registry, &stacks).to_delta(&self.registry);

        if !crafted.is_empty() {
            self.apply(inventory, &crafted);
        }

        tracing::debug!(
            exchanged = !exchanged.is_empty(),
            crafted = !crafted.is_empty(),
            "exchange pass complete"
        );

        PassSummary { exchanged, crafted }
    }

    /// Applies a delta: removals first, then unconditional insertions.
    fn apply(&self, inventory: &mut dyn InventoryProvider, delta: &InventoryDelta) {
        for removal in &delta.removals {
            let removed = inventory.remove_matching(removal.item, removal.count);

            if removed < removal.count {
                tracing::warn!(
                    item = removal.item.0,
                    requested = removal.count,
                    removed,
                    "removal came up short; inventory changed between snapshot and apply"
                );
            }
        }

        for insertion in &delta.insertions {
            inventory.insert(insertion.item, insertion.count);
        }
    }
}
