//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::DateTime;

use crate::api::dto::health::{DatabaseStatus, HealthResponse, LocationsStatus};
use crate::state::AppState;

/// Returns service health with details of the loaded resources.
///
/// # Endpoint
///
/// `GET /health`
///
/// The database and directory are loaded before the listener binds, so a
/// serving process always reports `healthy`.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": {
///     "type": "ipinfo country_asn.mmdb",
///     "ipVersion": 6,
///     "buildDate": "2024-05-01T00:00:00+00:00"
///   },
///   "locations": { "entries": 320, "countries": 120 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = &state.enrichment_service;
    let info = service.resolver().database_info();
    let directory = service.directory();

    let build_date = i64::try_from(info.build_epoch)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.to_rfc3339());

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseStatus {
            database_type: info.database_type,
            ip_version: info.ip_version,
            build_date,
        },
        locations: LocationsStatus {
            entries: directory.len(),
            countries: directory.country_count(),
        },
    })
}
