//! Deterministic random number generation.
//!
//! Reward sampling must be reproducible for a given invocation: the runtime
//! derives one seed per pass and the consumers mix in a stream tag plus a
//! roll index, so every draw sees fresh, independent randomness without any
//! shared mutable generator state.

/// Seeded random source used by the sampler and reward-chance rolls.
///
/// Implementations must be pure: the same seed always yields the same value.
pub trait RngOracle: Send + Sync {
    /// Generates a random u32 from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Rolls a success with probability `chance` in `[0.0, 1.0]`.
    fn roll_chance(&self, seed: u64, chance: f64) -> bool {
        if chance >= 1.0 {
            return true;
        }
        if chance <= 0.0 {
            return false;
        }

        f64::from(self.next_u32(seed)) / f64::from(u32::MAX) <= chance
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR produces 32-bit output from 64-bit state with a single
/// multiply, an xorshift, and a rotate. Stateless here: the caller supplies
/// the state as a seed, which keeps draws independent and replayable.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then random rotate.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;

        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Mixes a base seed with a stream tag and a roll index into an independent
/// seed.
///
/// `stream` separates consumers sharing one base seed (chance rolls vs.
/// sampler draws); `index` separates rolls within one consumer. Constants
/// are the SplitMix64/FxHash multipliers with a final avalanche step.
pub fn mix_seed(base_seed: u64, stream: u64, index: u64) -> u64 {
    let mut hash = base_seed;

    hash ^= stream.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= index.wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
