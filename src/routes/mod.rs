//! HTTP route handlers for the assignment API.
//!
//! Two routes exist: the health probe and assignment creation. Both carry
//! `Cache-Control: no-store` — one is a mutation, the other a liveness probe,
//! and intermediaries must cache neither.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod assignments;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes, response headers, and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/assignments", post(assignments::create))
        .route("/test", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
