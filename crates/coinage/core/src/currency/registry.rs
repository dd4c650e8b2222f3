//! The registry owning all three currency tables.

use super::{CurrencyTable, Reward, Skeleton, Unit};
use crate::state::ResourceId;

/// Holds the unit, reward, and skeleton tables.
///
/// Explicitly constructed and passed by reference; the owner is whichever
/// component drives the exchange trigger. The tables are independent:
/// rebuilding one category never touches the other two, and a failed parse
/// upstream simply never calls `load_*` for that category.
#[derive(Clone, Debug, Default)]
pub struct CurrencyRegistry {
    units: CurrencyTable<Unit>,
    rewards: CurrencyTable<Reward>,
    skeletons: CurrencyTable<Skeleton>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the unit table.
    pub fn units(&self) -> &CurrencyTable<Unit> {
        &self.units
    }

    /// Returns the reward table.
    pub fn rewards(&self) -> &CurrencyTable<Reward> {
        &self.rewards
    }

    /// Returns the skeleton table.
    pub fn skeletons(&self) -> &CurrencyTable<Skeleton> {
        &self.skeletons
    }

    /// Replaces the unit table, returning the new size.
    pub fn load_units(&mut self, entries: Vec<(ResourceId, Unit)>) -> usize {
        self.units.load(entries)
    }

    /// Replaces the reward table, returning the new size.
    pub fn load_rewards(&mut self, entries: Vec<(ResourceId, Reward)>) -> usize {
        self.rewards.load(entries)
    }

    /// Replaces the skeleton table, returning the new size.
    pub fn load_skeletons(&mut self, entries: Vec<(ResourceId, Skeleton)>) -> usize {
        self.skeletons.load(entries)
    }
}
