//! Inventory access boundary.

use coinage_core::{ItemHandle, StackSnapshot};

/// Mutable access to a host inventory.
///
/// The runtime pulls a snapshot, lets the resolvers compute deltas, and
/// applies them here; no resolver ever holds inventory access across calls.
/// Removal is a ceiling: implementations take at most `limit` from
/// exchangeable stacks and report what was actually removed, so a live
/// inventory mutated between snapshot and apply can only come up short,
/// never go negative.
pub trait InventoryProvider {
    /// Returns a point-in-time copy of every stack.
    fn snapshot(&self) -> Vec<StackSnapshot>;

    /// Removes up to `limit` of `item` from exchangeable stacks, returning
    /// the count actually removed.
    fn remove_matching(&mut self, item: ItemHandle, limit: u32) -> u32;

    /// Inserts `count` of `item`.
    fn insert(&mut self, item: ItemHandle, count: u32);
}

/// Reference in-memory inventory backed by a stack list.
///
/// Stacks merge per item and pin state; emptied stacks are dropped. Hosts
/// pin stacks (e.g. hand-crafted currency) to keep the resolver away from
/// them.
#[derive(Clone, Debug, Default)]
pub struct MemoryInventory {
    stacks: Vec<StackSnapshot>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exchangeable stack.
    pub fn add(&mut self, item: ItemHandle, count: u32) {
        self.push(StackSnapshot::new(item, count));
    }

    /// Adds a stack pinned against automatic exchange.
    pub fn add_pinned(&mut self, item: ItemHandle, count: u32) {
        self.push(StackSnapshot::pinned(item, count));
    }

    /// Total count of `item` across all stacks.
    pub fn count_of(&self, item: ItemHandle) -> u32 {
        self.stacks
            .iter()
            .filter(|stack| stack.item == item)
            .map(|stack| stack.count)
            .sum()
    }

    fn push(&mut self, stack: StackSnapshot) {
        if stack.count == 0 {
            return;
        }

        let merged = self
            .stacks
            .iter_mut()
            .find(|slot| slot.item == stack.item && slot.exchangeable == stack.exchangeable);

        match merged {
            Some(slot) => slot.count += stack.count,
            None => self.stacks.push(stack),
        }
    }
}

impl InventoryProvider for MemoryInventory {
    fn snapshot(&self) -> Vec<StackSnapshot> {
        self.stacks.clone()
    }

    fn remove_matching(&mut self, item: ItemHandle, limit: u32) -> u32 {
        let mut remaining = limit;

        for stack in &mut self.stacks {
            if remaining == 0 {
                break;
            }
            if stack.item != item || !stack.exchangeable {
                continue;
            }

            let taken = stack.count.min(remaining);
            stack.count -= taken;
            remaining -= taken;
        }

        self.stacks.retain(|stack| stack.count > 0);
        limit - remaining
    }

    fn insert(&mut self, item: ItemHandle, count: u32) {
        self.push(StackSnapshot::new(item, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_skips_pinned_stacks_and_reports_actuals() {
        let mut inventory = MemoryInventory::new();
        inventory.add(ItemHandle(1), 6);
        inventory.add_pinned(ItemHandle(1), 10);

        assert_eq!(inventory.remove_matching(ItemHandle(1), 8), 6);
        assert_eq!(inventory.count_of(ItemHandle(1)), 10);
    }

    #[test]
    fn inserts_merge_with_unpinned_stacks() {
        let mut inventory = MemoryInventory::new();
        inventory.add_pinned(ItemHandle(1), 2);
        inventory.insert(ItemHandle(1), 3);
        inventory.insert(ItemHandle(1), 4);

        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(inventory.count_of(ItemHandle(1)), 9);
    }
}
