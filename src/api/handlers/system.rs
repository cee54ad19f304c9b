//! System health and status handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
}

/// Liveness check. Not behind the access gate.
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
