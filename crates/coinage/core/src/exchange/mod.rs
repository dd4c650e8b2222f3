//! Resolver passes over inventory snapshots.
//!
//! Each pass is a pure function: snapshot in, delta out. The driving runtime
//! owns snapshot acquisition and delta application, so concurrent external
//! mutation can only make a computed delta stale - it can never corrupt
//! resolver state. All passes are bounded and non-blocking: finite
//! inventory, finite registry, and a monotonically terminating crafting
//! loop.
mod crafting;
mod sampler;
mod units;

pub use crafting::{CraftResolution, resolve_crafting};
pub use sampler::sample_rewards;
pub use units::exchange_units;

/// Seed stream tags keeping chance rolls and sampler draws independent even
/// though they derive from one pass seed.
pub(crate) const CHANCE_STREAM: u64 = 1;
pub(crate) const SAMPLE_STREAM: u64 = 2;
pub(crate) const DRAW_STREAM: u64 = 3;
