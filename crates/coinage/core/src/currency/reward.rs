//! Reward definitions.

use super::{DefinitionError, ItemBacked};
use crate::state::ItemHandle;

/// An item granted by weighted sampling when currency converts upward.
///
/// Rewards are crafting inputs, not currency: they never take part in tier
/// resolution, only in sampling and skeleton requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    item: ItemHandle,
    weight: u32,
}

impl Reward {
    /// Creates a reward with the given sampling weight.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::NonPositiveWeight`] when `weight` is zero.
    pub fn new(item: ItemHandle, weight: u32) -> Result<Self, DefinitionError> {
        if weight == 0 {
            return Err(DefinitionError::NonPositiveWeight);
        }

        Ok(Self { item, weight })
    }

    /// Returns the sampling weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl ItemBacked for Reward {
    fn item(&self) -> ItemHandle {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_weight() {
        assert_eq!(
            Reward::new(ItemHandle(1), 0),
            Err(DefinitionError::NonPositiveWeight)
        );
    }
}
