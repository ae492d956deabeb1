//! API route configuration.

use crate::api::handlers::{health_handler, lookup_handler, lookup_self_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All lookup routes.
///
/// # Endpoints
///
/// - `GET /health` - Loaded database and directory details
/// - `GET /`       - Look up the caller's address
/// - `GET /{ip}`   - Look up an explicit address
///
/// `/health` is a static segment and takes precedence over `/{ip}`.
pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/", get(lookup_self_handler))
        .route("/{ip}", get(lookup_handler))
}
