//! Request handlers for the lottery API.

use super::models::*;
use crate::query::HistoricalQueryService;
use crate::registration::RegistrationService;
use crate::types::TimeSlot;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub registration: Arc<RegistrationService>,
    pub query: Arc<HistoricalQueryService>,
}

/// Health check handler.
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Running".to_string(),
    })
}

/// Registration handler.
/// POST /register
///
/// Maps the validation outcome onto the wire contract: 200 on success, 400
/// with the rejection message otherwise.
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegistrationRequest>,
) -> (StatusCode, Json<RegistrationResponse>) {
    let numbers: BTreeSet<u32> = request.numbers.iter().copied().collect();

    match state
        .registration
        .register(&request.email, &numbers, request.timestamp)
    {
        Ok(_) => (
            StatusCode::OK,
            Json(RegistrationResponse {
                status: 200,
                message: "Registration successful".to_string(),
            }),
        ),
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(RegistrationResponse {
                status: 400,
                message: rejection.to_string(),
            }),
        ),
    }
}

/// Historical data handler.
/// GET /history?start={rfc3339}&end={rfc3339}
pub async fn history_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoricalDataQuery>,
) -> Json<HistoricalDataResponse> {
    let start = TimeSlot::of(params.start);
    let end = TimeSlot::of(params.end);

    let historical_data: BTreeMap<_, _> = state.query.query(start, end).into_iter().collect();

    Json(HistoricalDataResponse {
        status: 200,
        message: "OK".to_string(),
        historical_data,
    })
}
