//! Inventory mutation requests.
//!
//! Resolvers never mutate an inventory; they return an [`InventoryDelta`]
//! describing removals and insertions for the caller to apply. A removal
//! request is a ceiling restricted to exchangeable stacks - the caller
//! reports how much was actually removed.

use super::ItemHandle;

/// Request to remove up to `count` of `item` from exchangeable stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Removal {
    pub item: ItemHandle,
    pub count: u32,
}

/// Request to insert `count` of `item`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insertion {
    pub item: ItemHandle,
    pub count: u32,
}

/// Net inventory mutations computed by one resolver pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryDelta {
    pub removals: Vec<Removal>,
    pub insertions: Vec<Insertion>,
}

impl InventoryDelta {
    /// Creates an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a removal request, coalescing repeated items.
    pub fn remove(&mut self, item: ItemHandle, count: u32) {
        if count == 0 {
            return;
        }
        if let Some(existing) = self.removals.iter_mut().find(|r| r.item == item) {
            existing.count += count;
        } else {
            self.removals.push(Removal { item, count });
        }
    }

    /// Records an insertion request, coalescing repeated items.
    pub fn insert(&mut self, item: ItemHandle, count: u32) {
        if count == 0 {
            return;
        }
        if let Some(existing) = self.insertions.iter_mut().find(|i| i.item == item) {
            existing.count += count;
        } else {
            self.insertions.push(Insertion { item, count });
        }
    }

    /// Returns true if the pass requested no mutations.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.insertions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_coalesce_per_item() {
        let mut delta = InventoryDelta::new();
        delta.insert(ItemHandle(1), 2);
        delta.insert(ItemHandle(1), 3);
        delta.insert(ItemHandle(2), 1);
        delta.remove(ItemHandle(1), 4);

        assert_eq!(delta.insertions.len(), 2);
        assert_eq!(delta.insertions[0].count, 5);
        assert_eq!(delta.removals.len(), 1);
    }

    #[test]
    fn zero_counts_are_dropped() {
        let mut delta = InventoryDelta::new();
        delta.insert(ItemHandle(1), 0);
        delta.remove(ItemHandle(1), 0);

        assert!(delta.is_empty());
    }
}
