//! Value types shared by the resolvers.
mod delta;
mod item;
mod key;
mod stack;

pub use delta::{Insertion, InventoryDelta, Removal};
pub use item::ItemHandle;
pub use key::{ResourceId, ResourceIdError};
pub use stack::StackSnapshot;
