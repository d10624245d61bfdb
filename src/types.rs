//! Core lottery types shared across the registry, engine, and settlement.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Smallest number a participant may register.
pub const NUMBER_MIN: u32 = 1;
/// Largest number a participant may register.
pub const NUMBER_MAX: u32 = 255;

/// A minute-granularity time bucket. The unit of registration, drawing, and
/// history: every constructor truncates sub-minute precision, so any two
/// timestamps within the same minute map to the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot(DateTime<Utc>);

impl TimeSlot {
    /// Build a slot from an arbitrary timestamp, truncating to the minute.
    pub fn of(timestamp: DateTime<Utc>) -> Self {
        let secs = timestamp.timestamp();
        let truncated = secs - secs.rem_euclid(60);
        // from_timestamp only fails outside chrono's representable range,
        // which truncation cannot leave.
        Self(DateTime::from_timestamp(truncated, 0).unwrap_or(timestamp))
    }

    /// The slot one scheduling period later. Carry-over targets this slot.
    pub fn next(&self) -> Self {
        Self(self.0 + Duration::minutes(1))
    }

    /// The truncated timestamp backing this slot.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M"))
    }
}

// Serialized as the display form so slot-keyed maps become JSON objects.
impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ephemeral outcome of one drawing. Produced by the draw engine once per
/// tick and consumed exactly once by the settlement handler.
#[derive(Clone, Debug, Serialize)]
pub struct DrawResult {
    pub slot: TimeSlot,
    /// `None` when no draw took place (no participants for the slot).
    pub drawn: Option<u32>,
    /// Emails of every participant whose number set contains the drawn
    /// number. Participant-level: one entry regardless of how many of their
    /// numbers matched.
    pub winners: Vec<String>,
    pub participants: usize,
}

/// Finalized record of a drawing. Immutable once written to the history
/// store; one record per slot that actually underwent a draw.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryRecord {
    pub drawn: Option<u32>,
    pub winners: Vec<String>,
    /// Prize pool amount at settlement time.
    pub pool: f64,
}

/// Per-slot summary returned by historical queries.
#[derive(Clone, Debug, Serialize)]
pub struct DrawSummary {
    pub drawn: Option<u32>,
    pub winner_count: usize,
    pub pool: f64,
}

impl From<&HistoryRecord> for DrawSummary {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            drawn: record.drawn,
            winner_count: record.winners.len(),
            pool: record.pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_slot_truncates_to_minute() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 42).unwrap();
        let slot = TimeSlot::of(ts);
        assert_eq!(slot.timestamp().to_rfc3339(), "2025-01-01T10:00:00+00:00");

        // Any sub-minute precision lands in the same slot.
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 59).unwrap();
        assert_eq!(slot, TimeSlot::of(later));
    }

    #[test]
    fn test_next_slot_is_one_minute_ahead() {
        let slot = TimeSlot::of(Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap());
        let next = slot.next();
        assert_eq!(next.timestamp() - slot.timestamp(), Duration::minutes(1));
    }

    #[test]
    fn test_slot_display_form() {
        let slot = TimeSlot::of(Utc.with_ymd_and_hms(2025, 1, 1, 10, 5, 30).unwrap());
        assert_eq!(slot.to_string(), "2025-01-01T10:05");
    }

    #[test]
    fn test_slot_serializes_as_minute_string() {
        let slot = TimeSlot::of(Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 42).unwrap());
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, "\"2025-01-01T10:00\"");
    }
}
