//! Keyed lookup tables for currency definitions.

use std::collections::HashMap;

use crate::state::{ItemHandle, ResourceId};

/// Capability shared by every currency definition: each one is backed by an
/// item reference.
pub trait ItemBacked {
    /// Returns the backing item reference.
    fn item(&self) -> ItemHandle;
}

/// Insertion-ordered table of currency definitions.
///
/// Enumeration order is load order, which keeps every tie-break in the
/// resolvers deterministic. [`load`](Self::load) replaces the whole table
/// atomically; between loads the table is read-only (single writer, many
/// readers per load cycle).
#[derive(Clone, Debug)]
pub struct CurrencyTable<T> {
    entries: Vec<(ResourceId, T)>,
    index: HashMap<ResourceId, usize>,
}

impl<T: ItemBacked> CurrencyTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the table's entire contents, returning the new size.
    ///
    /// Old entries are discarded, never merged. Duplicate keys keep the
    /// earliest entry, matching [`find`](Self::find)'s first-match
    /// discipline; the definition loader rejects duplicates before they
    /// reach this point.
    pub fn load(&mut self, entries: Vec<(ResourceId, T)>) -> usize {
        self.entries.clear();
        self.index.clear();

        for (key, value) in entries {
            if self.index.contains_key(&key) {
                continue;
            }
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }

        self.entries.len()
    }

    /// Inserts or replaces a single definition, returning the new size.
    ///
    /// A replaced entry keeps its original position in iteration order.
    pub fn insert(&mut self, key: ResourceId, value: T) -> usize {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }

        self.entries.len()
    }

    /// Looks up a definition by its registry key.
    pub fn get(&self, key: &ResourceId) -> Option<&T> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Returns whether `key` is registered.
    pub fn contains(&self, key: &ResourceId) -> bool {
        self.index.contains_key(key)
    }

    /// Finds the first definition backed by `item`, in insertion order.
    pub fn find(&self, item: ItemHandle) -> Option<&T> {
        self.find_entry(item).map(|(_, value)| value)
    }

    /// Finds the first `(key, definition)` pair backed by `item`.
    pub fn find_entry(&self, item: ItemHandle) -> Option<(&ResourceId, &T)> {
        self.entries
            .iter()
            .find(|(_, value)| value.item() == item)
            .map(|(key, value)| (key, value))
    }

    /// Reverse lookup of a definition's key by value identity.
    pub fn key_of(&self, value: &T) -> Option<&ResourceId>
    where
        T: PartialEq,
    {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate == value)
            .map(|(key, _)| key)
    }

    /// Returns the number of registered definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceId, &T)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<T> Default for CurrencyTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Reward;

    fn key(raw: &str) -> ResourceId {
        raw.parse().unwrap()
    }

    fn table(entries: Vec<(ResourceId, Reward)>) -> CurrencyTable<Reward> {
        let mut table = CurrencyTable::new();
        table.load(entries);
        table
    }

    #[test]
    fn load_replaces_contents_atomically() {
        let mut table = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:emerald"), Reward::new(ItemHandle(2), 3).unwrap()),
        ]);

        let size = table.load(vec![(
            key("mint:topaz"),
            Reward::new(ItemHandle(3), 2).unwrap(),
        )]);

        assert_eq!(size, 1);
        assert!(table.get(&key("mint:ruby")).is_none());
        assert!(table.get(&key("mint:topaz")).is_some());
    }

    #[test]
    fn find_returns_the_first_match_in_insertion_order() {
        let table = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:ruby_alt"), Reward::new(ItemHandle(1), 7).unwrap()),
        ]);

        let (found_key, found) = table.find_entry(ItemHandle(1)).unwrap();
        assert_eq!(found_key, &key("mint:ruby"));
        assert_eq!(found.weight(), 1);
    }

    #[test]
    fn key_of_reverses_by_value_identity() {
        let emerald = Reward::new(ItemHandle(2), 3).unwrap();
        let table = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:emerald"), emerald),
        ]);

        assert_eq!(table.key_of(&emerald), Some(&key("mint:emerald")));
        assert_eq!(table.key_of(&Reward::new(ItemHandle(9), 9).unwrap()), None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut table = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:emerald"), Reward::new(ItemHandle(2), 3).unwrap()),
        ]);

        let size = table.insert(key("mint:ruby"), Reward::new(ItemHandle(1), 4).unwrap());

        assert_eq!(size, 2);
        assert_eq!(table.get(&key("mint:ruby")).unwrap().weight(), 4);
        // The replaced entry keeps its slot in iteration order.
        assert_eq!(table.iter().next().unwrap().0, &key("mint:ruby"));
    }

    #[test]
    fn duplicate_keys_keep_the_earliest_entry() {
        let table = table(vec![
            (key("mint:ruby"), Reward::new(ItemHandle(1), 1).unwrap()),
            (key("mint:ruby"), Reward::new(ItemHandle(2), 5).unwrap()),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&key("mint:ruby")).unwrap().weight(), 1);
    }
}
