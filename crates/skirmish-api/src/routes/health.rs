//! Liveness probe for the menu pipeline service.

use axum::{Json, Router, routing::get};
use serde::Serialize;

/// Body of GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Name of the crate serving the pipeline.
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the router for the liveness probe.
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
