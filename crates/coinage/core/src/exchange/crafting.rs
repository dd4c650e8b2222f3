//! Skeleton crafting resolution.

use std::collections::{BTreeMap, HashMap};

use crate::currency::{CurrencyRegistry, ItemBacked, Skeleton};
use crate::state::{InventoryDelta, ResourceId, StackSnapshot};

/// Totals from one crafting resolution: rewards consumed and skeletons
/// produced, keyed for deterministic enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftResolution {
    /// Rewards consumed across all rounds, per reward key.
    pub consumed: BTreeMap<ResourceId, u32>,
    /// Skeletons produced across all rounds, per skeleton key.
    pub produced: BTreeMap<ResourceId, u32>,
}

impl CraftResolution {
    /// Returns true when nothing was craftable.
    pub fn is_empty(&self) -> bool {
        self.produced.is_empty()
    }

    /// Converts the totals into removal and insertion requests.
    pub fn to_delta(&self, registry: &CurrencyRegistry) -> InventoryDelta {
        let mut delta = InventoryDelta::new();

        for (key, &count) in &self.consumed {
            if let Some(reward) = registry.rewards().get(key) {
                delta.remove(reward.item(), count);
            }
        }
        for (key, &count) in &self.produced {
            if let Some(skeleton) = registry.skeletons().get(key) {
                delta.insert(skeleton.item(), count);
            }
        }

        delta
    }
}

/// Crafts every skeleton whose reward requirements are currently covered.
///
/// Candidates are gathered once, in table order, then consumed round by
/// round: each round crafts every still-satisfiable candidate (decrementing
/// shared holdings as it goes) and drops the rest. Competing skeletons
/// therefore share rewards greedily, round by round, rather than by any
/// global optimum - the allocation is order-dependent on purpose.
///
/// Each successful craft consumes at least one reward (requirement lists are
/// non-empty), so holdings decrease monotonically and the loop terminates on
/// any finite snapshot. A skeleton whose requirements can never be met
/// yields zero production, not an error.
pub fn resolve_crafting(registry: &CurrencyRegistry, stacks: &[StackSnapshot]) -> CraftResolution {
    // Reward holdings per key, pinned stacks excluded.
    let mut holdings: HashMap<ResourceId, u32> = HashMap::new();

    for stack in stacks {
        if !stack.exchangeable || stack.count == 0 {
            continue;
        }
        if let Some((key, _)) = registry.rewards().find_entry(stack.item) {
            *holdings.entry(key.clone()).or_insert(0) += stack.count;
        }
    }

    let mut resolution = CraftResolution::default();
    let mut craftable: Vec<(&ResourceId, &Skeleton)> = registry
        .skeletons()
        .iter()
        .filter(|(_, skeleton)| skeleton.has_requirements(&holdings))
        .collect();

    while !craftable.is_empty() {
        craftable.retain(|&(key, skeleton)| {
            if !skeleton.has_requirements(&holdings) {
                return false;
            }

            for required in skeleton.requires() {
                *resolution.consumed.entry(required.clone()).or_insert(0) += 1;

                if let Some(held) = holdings.get_mut(required) {
                    *held -= 1;
                }
            }

            *resolution.produced.entry(key.clone()).or_insert(0) += 1;
            true
        });
    }

    resolution
}
