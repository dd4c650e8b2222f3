//! Inventory stack snapshots.

use super::ItemHandle;

/// Point-in-time view of one inventory stack.
///
/// Snapshots are pulled by value once per pass; resolvers only read them and
/// never hold one across invocations. A stack pinned `exchangeable = false`
/// is invisible to conversion and crafting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackSnapshot {
    pub item: ItemHandle,
    pub count: u32,
    pub exchangeable: bool,
}

impl StackSnapshot {
    /// Creates an exchangeable stack.
    pub fn new(item: ItemHandle, count: u32) -> Self {
        Self {
            item,
            count,
            exchangeable: true,
        }
    }

    /// Creates a stack pinned against automatic exchange.
    pub fn pinned(item: ItemHandle, count: u32) -> Self {
        Self {
            item,
            count,
            exchangeable: false,
        }
    }
}
