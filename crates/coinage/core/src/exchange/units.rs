//! Automatic exchange of currency units.

use std::collections::HashMap;

use super::sampler::sample_rewards;
use super::{CHANCE_STREAM, SAMPLE_STREAM};
use crate::config::ExchangeConfig;
use crate::currency::{CurrencyRegistry, ItemBacked};
use crate::env::{RngOracle, mix_seed};
use crate::state::{InventoryDelta, ResourceId, StackSnapshot};

/// Runs the automatic exchange pass over one inventory snapshot.
///
/// Stacks pinned non-exchangeable or matching no known unit are ignored.
/// For every unit with holdings, whole bundles convert into the next tier
/// (exact multiples only); units flagged `drops_rewards` roll one reward
/// chance per converted bundle. Non-convertible configurations - no next
/// tier, zero price, zero bundles - are skipped silently: a highest-value
/// unit is a valid steady state, not an error.
///
/// The returned delta is empty exactly when nothing qualified, which the
/// caller uses to decide whether to re-snapshot before crafting.
pub fn exchange_units(
    registry: &CurrencyRegistry,
    config: &ExchangeConfig,
    stacks: &[StackSnapshot],
    rng: &dyn RngOracle,
    seed: u64,
) -> InventoryDelta {
    // Sum holdings per matched unit, first match winning for shared items.
    let mut holdings: HashMap<&ResourceId, u32> = HashMap::new();

    for stack in stacks {
        if !stack.exchangeable || stack.count == 0 {
            continue;
        }
        if let Some((key, _)) = registry.units().find_entry(stack.item) {
            *holdings.entry(key).or_insert(0) += stack.count;
        }
    }

    let mut delta = InventoryDelta::new();
    let mut chance_rolls: u64 = 0;

    // Walking the table rather than the holdings map keeps the pass order
    // deterministic for a given snapshot.
    for (index, (key, unit)) in registry.units().iter().enumerate() {
        let Some(&count) = holdings.get(key) else {
            continue;
        };

        let Some((next_key, next)) = registry.next_tier(unit, true) else {
            continue;
        };

        // Price in source units for one next-tier unit.
        let price = if next_key.namespace() == key.namespace() {
            next.value() / unit.value()
        } else {
            match unit.exchange_rate(next_key.namespace()) {
                Some(rate) => next.value() / rate,
                None => continue,
            }
        };

        if price == 0 {
            continue;
        }

        let bundles = count / price;

        if bundles == 0 {
            continue;
        }

        delta.remove(unit.item(), bundles * price);
        delta.insert(next.item(), bundles);

        if unit.drops_rewards() {
            let mut rolls = 0;

            for _ in 0..bundles {
                let roll_seed = mix_seed(seed, CHANCE_STREAM, chance_rolls);
                chance_rolls += 1;

                if rng.roll_chance(roll_seed, config.reward_chance) {
                    rolls += 1;
                }
            }

            let sample_seed = mix_seed(seed, SAMPLE_STREAM, index as u64);

            for (_, reward) in sample_rewards(registry.rewards(), rolls, rng, sample_seed) {
                delta.insert(reward.item(), 1);
            }
        }
    }

    delta
}
