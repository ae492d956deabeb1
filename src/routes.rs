//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Caller address lookup
//! - `GET /{ip}`    - Explicit address lookup
//! - `GET /health`  - Loaded resources summary
//!
//! # Middleware
//!
//! - **Panic recovery** - Handler panics become `500 {"error": "Error"}`
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::lookup_routes()
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
