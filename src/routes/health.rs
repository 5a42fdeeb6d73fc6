//! Health check endpoint for container orchestration.
//!
//! Returns a fixed JSON payload whenever the process can answer HTTP.
//! Stateless and side-effect free: it does not touch the database, so it is
//! a liveness probe, not a readiness probe.

use axum::Json;

use crate::config::HEALTH_MESSAGE;

/// Health check handler.
///
/// Always responds 200 with the same JSON string, regardless of request
/// headers or body.
pub async fn health() -> Json<&'static str> {
    Json(HEALTH_MESSAGE)
}
