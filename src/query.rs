//! Historical queries over finalized drawings.

use crate::history::HistoryStore;
use crate::types::{DrawSummary, TimeSlot};
use std::sync::Arc;

/// Assembles reports over `[start, end)` by stepping slot-by-slot through
/// the history store. Slots with no record are omitted, not zero-filled.
/// No upper bound on the range size is enforced.
pub struct HistoricalQueryService {
    history: Arc<HistoryStore>,
}

impl HistoricalQueryService {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self { history }
    }

    /// One summary per drawn slot in `[start, end)`, ascending by slot.
    /// `start >= end` yields an empty report.
    pub fn query(&self, start: TimeSlot, end: TimeSlot) -> Vec<(TimeSlot, DrawSummary)> {
        let mut report = Vec::new();
        let mut slot = start;
        while slot < end {
            if let Some(record) = self.history.get(slot) {
                report.push((slot, DrawSummary::from(&record)));
            }
            slot = slot.next();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HistoryRecord;
    use chrono::{TimeZone, Utc};

    fn slot_at(minute: u32) -> TimeSlot {
        TimeSlot::of(Utc.with_ymd_and_hms(2025, 1, 1, 10, minute, 0).unwrap())
    }

    fn record(drawn: u32) -> HistoryRecord {
        HistoryRecord {
            drawn: Some(drawn),
            winners: vec!["a@x.com".to_string()],
            pool: 100.0,
        }
    }

    fn service_with_draws(minutes: &[u32]) -> HistoricalQueryService {
        let history = Arc::new(HistoryStore::new());
        for &m in minutes {
            history.insert(slot_at(m), record(m));
        }
        HistoricalQueryService::new(history)
    }

    #[test]
    fn test_empty_range_yields_nothing() {
        let service = service_with_draws(&[0, 1, 2]);
        assert!(service.query(slot_at(1), slot_at(1)).is_empty());
        assert!(service.query(slot_at(5), slot_at(1)).is_empty());
    }

    #[test]
    fn test_range_without_draws_yields_nothing() {
        let service = service_with_draws(&[0]);
        assert!(service.query(slot_at(10), slot_at(20)).is_empty());
    }

    #[test]
    fn test_summaries_ascending_with_gaps_omitted() {
        let service = service_with_draws(&[1, 3, 7]);
        let report = service.query(slot_at(0), slot_at(7));

        let slots: Vec<TimeSlot> = report.iter().map(|(s, _)| *s).collect();
        // End exclusive: minute 7 is outside [0, 7).
        assert_eq!(slots, vec![slot_at(1), slot_at(3)]);

        let (_, summary) = &report[0];
        assert_eq!(summary.drawn, Some(1));
        assert_eq!(summary.winner_count, 1);
        assert_eq!(summary.pool, 100.0);
    }
}
