//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use hostmap_shared::TableStats;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub hosts: usize,
    pub tenants: usize,
    pub redirect_table: TableStats,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            hosts: state.classifier.directory().len(),
            tenants: state.classifier.directory().tenants().len(),
            redirect_table: state.classifier.redirects().stats(),
        }),
    )
}

/// Liveness probe (just returns 200 if the server is running)
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe. The tables are validated before the listener binds,
/// so a running server is always ready.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}
