//! Weighted reward sampling.

use super::DRAW_STREAM;
use crate::currency::{CurrencyTable, Reward};
use crate::env::{RngOracle, mix_seed};
use crate::state::ResourceId;

/// Draws `count` rewards with replacement, proportional to weight.
///
/// Every draw derives its own seed from `seed` and the draw index, so draws
/// are independent and duplicates are expected. The result length always
/// equals `count` for a non-empty table - never capped by the number of
/// distinct rewards. An empty table yields an empty result, not an error.
pub fn sample_rewards<'t>(
    rewards: &'t CurrencyTable<Reward>,
    count: u32,
    rng: &dyn RngOracle,
    seed: u64,
) -> Vec<(&'t ResourceId, &'t Reward)> {
    if rewards.is_empty() || count == 0 {
        return Vec::new();
    }

    let total: u64 = rewards
        .iter()
        .map(|(_, reward)| u64::from(reward.weight()))
        .sum();
    let mut drawn = Vec::with_capacity(count as usize);

    for draw in 0..u64::from(count) {
        let roll = u64::from(rng.next_u32(mix_seed(seed, DRAW_STREAM, draw))) % total;
        let mut cumulative = 0u64;

        for (key, reward) in rewards.iter() {
            cumulative += u64::from(reward.weight());

            if roll < cumulative {
                drawn.push((key, reward));
                break;
            }
        }
    }

    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::ItemHandle;

    fn key(raw: &str) -> ResourceId {
        raw.parse().unwrap()
    }

    fn table(entries: Vec<(ResourceId, Reward)>) -> CurrencyTable<Reward> {
        let mut table = CurrencyTable::new();
        table.load(entries);
        table
    }

    #[test]
    fn returns_exactly_count_even_past_table_size() {
        let rewards = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:emerald"), Reward::new(ItemHandle(2), 3).unwrap()),
        ]);

        assert_eq!(sample_rewards(&rewards, 4, &PcgRng, 11).len(), 4);
        assert_eq!(sample_rewards(&rewards, 100, &PcgRng, 11).len(), 100);
        assert_eq!(sample_rewards(&rewards, 0, &PcgRng, 11).len(), 0);
    }

    #[test]
    fn empty_table_yields_empty_result() {
        let rewards = table(Vec::new());
        assert!(sample_rewards(&rewards, 5, &PcgRng, 11).is_empty());
    }

    #[test]
    fn draws_are_reproducible_for_a_seed() {
        let rewards = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:emerald"), Reward::new(ItemHandle(2), 3).unwrap()),
        ]);

        let first: Vec<_> = sample_rewards(&rewards, 16, &PcgRng, 99)
            .into_iter()
            .map(|(key, _)| key.clone())
            .collect();
        let second: Vec<_> = sample_rewards(&rewards, 16, &PcgRng, 99)
            .into_iter()
            .map(|(key, _)| key.clone())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn draw_frequency_tracks_weight() {
        let rewards = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:emerald"), Reward::new(ItemHandle(2), 3).unwrap()),
        ]);

        let drawn = sample_rewards(&rewards, 2000, &PcgRng, 7);
        let emeralds = drawn
            .iter()
            .filter(|(key, _)| key.path() == "emerald")
            .count();

        // Expected 1500 of 2000; the bounds are loose on purpose, this is a
        // statistical property rather than an exact one.
        assert!((1300..=1700).contains(&emeralds), "emeralds = {emeralds}");
    }
}
