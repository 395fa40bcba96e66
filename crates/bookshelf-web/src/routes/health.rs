//! Health check endpoint for the catalogue server.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response for the catalogue server.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Serving status.
    pub status: String,
    /// Name of the serving crate.
    pub service: String,
    /// Catalogue server version.
    pub version: String,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
