//! Next-tier resolution across the unit table.

use super::{CurrencyRegistry, Unit};
use crate::state::ResourceId;

impl CurrencyRegistry {
    /// Finds the next unit of currency by value.
    ///
    /// A candidate qualifies when it shares the unit's namespace with a
    /// strictly greater value, or when the unit's exchange map carries a rate
    /// for the candidate's namespace and the candidate's effective value
    /// (`rate * candidate.value`, expressed in the unit's namespace) strictly
    /// exceeds the unit's own. With `exact_multiple` set, the effective value
    /// must additionally divide evenly by the unit's value.
    ///
    /// The smallest effective value wins; ties keep the earliest table entry.
    /// A unit absent from the registry, or one with no qualifying candidate,
    /// has no next tier.
    pub fn next_tier(&self, unit: &Unit, exact_multiple: bool) -> Option<(&ResourceId, &Unit)> {
        let own_namespace = self.units().key_of(unit)?.namespace();
        let own_value = u64::from(unit.value());

        let mut best: Option<(u64, &ResourceId, &Unit)> = None;

        for (key, candidate) in self.units().iter() {
            let effective = if key.namespace() == own_namespace {
                u64::from(candidate.value())
            } else if let Some(rate) = unit.exchange_rate(key.namespace()) {
                // Effective value expressed in this unit's namespace.
                u64::from(rate) * u64::from(candidate.value())
            } else {
                // No rate configured: the currencies are incompatible.
                continue;
            };

            if effective <= own_value {
                continue;
            }
            if exact_multiple && effective % own_value != 0 {
                continue;
            }
            if best.is_none_or(|(value, _, _)| effective < value) {
                best = Some((effective, key, candidate));
            }
        }

        best.map(|(_, key, candidate)| (key, candidate))
    }
}
