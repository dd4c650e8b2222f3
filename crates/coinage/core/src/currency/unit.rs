//! Currency unit definitions.

use std::collections::BTreeMap;

use super::{DefinitionError, ItemBacked};
use crate::state::ItemHandle;

/// A base unit of currency.
///
/// Units relate to each other only transitively, through
/// [`CurrencyRegistry::next_tier`](super::CurrencyRegistry::next_tier) -
/// nothing is linked at load time, so reloading one table never leaves a
/// dangling reference behind.
///
/// The exchange map carries rates into other namespaces; it never contains
/// the unit's own namespace (the loader filters those out, since a unit does
/// not know its own registry key).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    item: ItemHandle,
    value: u32,
    drops_rewards: bool,
    exchange: BTreeMap<String, u32>,
}

impl Unit {
    /// Creates a unit worth `value` within its own namespace.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::NonPositiveValue`] when `value` is zero.
    pub fn new(item: ItemHandle, value: u32) -> Result<Self, DefinitionError> {
        if value == 0 {
            return Err(DefinitionError::NonPositiveValue);
        }

        Ok(Self {
            item,
            value,
            drops_rewards: false,
            exchange: BTreeMap::new(),
        })
    }

    /// Sets whether converting this unit upward rolls reward drops.
    #[must_use]
    pub fn with_drops(mut self, drops_rewards: bool) -> Self {
        self.drops_rewards = drops_rewards;
        self
    }

    /// Adds an exchange rate into another namespace.
    ///
    /// A zero rate is dropped silently; there is no way to express "worth
    /// nothing over there" that the tier resolver could act on.
    #[must_use]
    pub fn with_exchange_rate(mut self, namespace: impl Into<String>, rate: u32) -> Self {
        if rate > 0 {
            self.exchange.insert(namespace.into(), rate);
        }
        self
    }

    /// Returns this unit's value in its own namespace.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns whether converting this unit upward rolls reward drops.
    pub fn drops_rewards(&self) -> bool {
        self.drops_rewards
    }

    /// Returns the exchange rate into `namespace`, if one is configured.
    pub fn exchange_rate(&self, namespace: &str) -> Option<u32> {
        self.exchange.get(namespace).copied()
    }
}

impl ItemBacked for Unit {
    fn item(&self) -> ItemHandle {
        self.item
    }
}
