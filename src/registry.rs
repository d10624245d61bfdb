//! Slot registry: who registered which numbers for which slot.
//!
//! Thread-safe via `DashMap`: both the duplicate check plus merge and the
//! draw engine's snapshot run under the slot's shard lock, so the engine
//! never observes a half-applied registration.

use crate::errors::ValidationError;
use crate::types::TimeSlot;
use dashmap::DashMap;
use std::collections::{BTreeSet, HashMap};

/// One participant's chosen numbers, keyed by email, per slot.
pub type ParticipantEntries = HashMap<String, BTreeSet<u32>>;

/// Mapping from a time slot to its registered participants. Entries are
/// retained after the slot is drawn (see DESIGN.md on pruning).
#[derive(Default)]
pub struct SlotRegistry {
    slots: DashMap<TimeSlot, ParticipantEntries>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `numbers` into the participant's entry for `slot`, creating the
    /// slot and the entry as needed. Set semantics: the resulting entry is
    /// the union of the existing set and `numbers`.
    ///
    /// Rejects the whole call with `DuplicateNumber` when any submitted
    /// number is already held by this participant for this slot; no partial
    /// merge occurs. The check and the merge are atomic with respect to
    /// concurrent registrations for the same slot.
    pub fn merge(
        &self,
        slot: TimeSlot,
        email: &str,
        numbers: &BTreeSet<u32>,
    ) -> Result<(), ValidationError> {
        let mut entry = self.slots.entry(slot).or_default();
        if let Some(existing) = entry.get(email) {
            if numbers.iter().any(|n| existing.contains(n)) {
                return Err(ValidationError::DuplicateNumber);
            }
        }
        entry
            .entry(email.to_string())
            .or_default()
            .extend(numbers.iter().copied());
        Ok(())
    }

    /// Clone the slot's participant entries, or `None` when nobody
    /// registered. The clone is taken under the shard lock: registrations
    /// committing after this read belong to the next view of the slot.
    pub fn snapshot(&self, slot: TimeSlot) -> Option<ParticipantEntries> {
        self.slots.get(&slot).map(|entry| entry.clone())
    }

    /// The numbers one participant holds for a slot.
    pub fn numbers_for(&self, slot: TimeSlot, email: &str) -> Option<BTreeSet<u32>> {
        self.slots
            .get(&slot)
            .and_then(|entry| entry.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slot() -> TimeSlot {
        TimeSlot::of(Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap())
    }

    fn numbers(ns: &[u32]) -> BTreeSet<u32> {
        ns.iter().copied().collect()
    }

    #[test]
    fn test_merge_unions_numbers() {
        let registry = SlotRegistry::new();
        registry.merge(slot(), "a@x.com", &numbers(&[5, 9])).unwrap();
        registry.merge(slot(), "a@x.com", &numbers(&[12])).unwrap();

        assert_eq!(
            registry.numbers_for(slot(), "a@x.com"),
            Some(numbers(&[5, 9, 12]))
        );
    }

    #[test]
    fn test_duplicate_number_rejected_without_partial_merge() {
        let registry = SlotRegistry::new();
        registry.merge(slot(), "a@x.com", &numbers(&[5])).unwrap();

        let err = registry
            .merge(slot(), "a@x.com", &numbers(&[5, 200]))
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateNumber);

        // 200 must not have leaked in alongside the rejected 5.
        assert_eq!(registry.numbers_for(slot(), "a@x.com"), Some(numbers(&[5])));
    }

    #[test]
    fn test_cross_participant_duplicates_allowed() {
        let registry = SlotRegistry::new();
        registry.merge(slot(), "a@x.com", &numbers(&[7])).unwrap();
        registry.merge(slot(), "b@x.com", &numbers(&[7])).unwrap();

        let snapshot = registry.snapshot(slot()).unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_snapshot_absent_slot() {
        let registry = SlotRegistry::new();
        assert!(registry.snapshot(slot()).is_none());
    }
}
