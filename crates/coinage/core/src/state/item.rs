//! Item reference type.

/// Reference to an item known to the host's item registry (lookup via
/// [`crate::env::ItemOracle`]).
///
/// Handles are opaque and only meaningful to the registry that issued them;
/// every currency definition "is" an item by reference, never by embedding
/// the item itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);
