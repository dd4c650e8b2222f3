//! Boundaries to external collaborators.
//!
//! The resolvers own neither the item registry nor a randomness source; they
//! reach both through these traits so hosts and tests can substitute
//! implementations without touching resolver code.
mod items;
mod rng;

pub use items::ItemOracle;
pub use rng::{PcgRng, RngOracle, mix_seed};
