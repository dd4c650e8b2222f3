//! Skeleton definitions.

use std::collections::HashMap;

use super::{DefinitionError, ItemBacked};
use crate::state::{ItemHandle, ResourceId};

/// A composite item craftable only by consuming a fixed multiset of rewards.
///
/// The requirement list names reward registry keys and may repeat them; it is
/// never empty. An always-craftable skeleton would never leave the crafting
/// loop, so the empty list is rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skeleton {
    item: ItemHandle,
    requires: Vec<ResourceId>,
}

impl Skeleton {
    /// Creates a skeleton requiring the given rewards.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyCost`] when `requires` is empty.
    pub fn new(item: ItemHandle, requires: Vec<ResourceId>) -> Result<Self, DefinitionError> {
        if requires.is_empty() {
            return Err(DefinitionError::EmptyCost);
        }

        Ok(Self { item, requires })
    }

    /// Returns the required reward keys, repeats included.
    pub fn requires(&self) -> &[ResourceId] {
        &self.requires
    }

    /// Collapses the requirement list into counts per reward key.
    pub fn requirement_counts(&self) -> HashMap<&ResourceId, u32> {
        let mut counts = HashMap::with_capacity(self.requires.len());

        for key in &self.requires {
            *counts.entry(key).or_insert(0) += 1;
        }

        counts
    }

    /// Returns whether `holdings` covers this skeleton's requirement multiset.
    ///
    /// A requirement key absent from `holdings` counts as zero held, so a
    /// skeleton naming an unregistered reward is simply never satisfiable.
    pub fn has_requirements(&self, holdings: &HashMap<ResourceId, u32>) -> bool {
        self.requirement_counts()
            .into_iter()
            .all(|(key, needed)| holdings.get(key).is_some_and(|&held| held >= needed))
    }
}

impl ItemBacked for Skeleton {
    fn item(&self) -> ItemHandle {
        self.item
    }
}
