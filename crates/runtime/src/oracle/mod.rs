//! Reference oracle implementations backing the resolver's collaborator
//! traits.
pub mod items;

pub use items::ItemDirectory;
