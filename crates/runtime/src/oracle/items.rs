//! Minimal [`coinage_core::ItemOracle`] backed by in-memory maps.
use coinage_core::{ItemHandle, ItemOracle, ResourceId};
use std::collections::HashMap;

/// ItemOracle implementation with sequentially allocated handles
#[derive(Clone, Debug, Default)]
pub struct ItemDirectory {
    by_id: HashMap<ResourceId, ItemHandle>,
    by_handle: HashMap<ItemHandle, ResourceId>,
}

impl ItemDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item identifier, returning its handle.
    ///
    /// Registering the same identifier twice returns the existing handle.
    pub fn register(&mut self, id: ResourceId) -> ItemHandle {
        if let Some(&handle) = self.by_id.get(&id) {
            return handle;
        }

        let handle = ItemHandle(self.by_id.len() as u32);
        self.by_id.insert(id.clone(), handle);
        self.by_handle.insert(handle, id);
        handle
    }
}

impl ItemOracle for ItemDirectory {
    fn resolve(&self, id: &ResourceId) -> Option<ItemHandle> {
        self.by_id.get(id).copied()
    }

    fn identifier(&self, item: ItemHandle) -> Option<ResourceId> {
        self.by_handle.get(&item).cloned()
    }
}
