//! Root-level service endpoints: health probe and service metadata.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Fixed service status; no dependency checks are performed.
    pub status: &'static str,
    pub message: &'static str,
}

/// Service metadata returned at the root path.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- liveness probe with a fixed payload.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "TodoApp API is running",
    })
}

/// GET / -- service metadata.
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "TodoApp API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount root-level routes (NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
