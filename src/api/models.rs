//! Wire models for the HTTP boundary.

use crate::types::{DrawSummary, TimeSlot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inbound registration request.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub numbers: Vec<u32>,
    /// Target drawing time; sub-minute precision is truncated server-side.
    pub timestamp: DateTime<Utc>,
}

/// Outcome of a registration request: `{statusCode, message}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub status: u16,
    pub message: String,
}

/// Inbound historical query range, `[start, end)`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalDataQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Historical report: one summary per drawn slot, keyed by slot, ascending.
#[derive(Debug, Clone, Serialize)]
pub struct HistoricalDataResponse {
    pub status: u16,
    pub message: String,
    // Wire name kept camelCase for compatibility with existing clients.
    #[serde(rename = "historicalData")]
    pub historical_data: BTreeMap<TimeSlot, DrawSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn summary(drawn: u32) -> DrawSummary {
        DrawSummary {
            drawn: Some(drawn),
            winner_count: 1,
            pool: 100.0,
        }
    }

    #[test]
    fn test_history_response_is_an_ordered_camel_case_map() {
        let mut historical_data = BTreeMap::new();
        // Inserted newest-first; serialization must still come out ascending.
        for minute in [1u32, 0] {
            let slot = TimeSlot::of(Utc.with_ymd_and_hms(2025, 1, 1, 10, minute, 0).unwrap());
            historical_data.insert(slot, summary(minute + 5));
        }
        let response = HistoricalDataResponse {
            status: 200,
            message: "OK".to_string(),
            historical_data,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"historicalData\""));
        assert!(!json.contains("historical_data"));

        let first = json.find("2025-01-01T10:00").unwrap();
        let second = json.find("2025-01-01T10:01").unwrap();
        assert!(first < second);
    }
}
