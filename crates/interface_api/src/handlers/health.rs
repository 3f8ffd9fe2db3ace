//! Health check handlers

use axum::{extract::State, Json};
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub current_time: NaiveDateTime,
    pub contracts: usize,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check; succeeds once the insurer lock can be read
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let company = state.company.read().await;
    Json(ReadinessResponse {
        status: "ready".to_string(),
        current_time: company.current_time(),
        contracts: company.contracts().len(),
    })
}
