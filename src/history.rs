//! History store: finalized drawing records, append-only per slot.

use crate::types::{HistoryRecord, TimeSlot};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Mapping from slot to its finalized drawing record. A record, once
/// written, is never replaced.
#[derive(Default)]
pub struct HistoryStore {
    records: DashMap<TimeSlot, HistoryRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the record for a slot. Returns `false` (leaving the existing
    /// record untouched) when the slot was already finalized.
    pub fn insert(&self, slot: TimeSlot, record: HistoryRecord) -> bool {
        match self.records.entry(slot) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(record);
                true
            }
        }
    }

    pub fn get(&self, slot: TimeSlot) -> Option<HistoryRecord> {
        self.records.get(&slot).map(|entry| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
