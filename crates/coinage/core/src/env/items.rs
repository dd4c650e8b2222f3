//! Item registry boundary.

use crate::state::{ItemHandle, ResourceId};

/// Read-only access to the host's item registry.
///
/// Unresolvable references are soft failures everywhere: the definition
/// loader skips the offending record and the passes skip the offending
/// stack. Nothing in the resolver crashes on a missing item.
pub trait ItemOracle: Send + Sync {
    /// Resolves an item identifier to its opaque handle.
    fn resolve(&self, id: &ResourceId) -> Option<ItemHandle>;

    /// Reverse lookup of the identifier behind a handle.
    fn identifier(&self, item: ItemHandle) -> Option<ResourceId>;
}
