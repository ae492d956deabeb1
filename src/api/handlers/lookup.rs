//! Handlers for address lookups.

use axum::{
    Json,
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
};
use std::net::SocketAddr;

use crate::api::dto::lookup::LookupResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::fallback_source;

/// Looks up an explicitly requested address.
///
/// # Endpoint
///
/// `GET /{ip}`
///
/// # Response Codes
///
/// - **200 OK**: Address looked up (fields the database lacks are omitted)
/// - **400 Bad Request**: `{"error": "Invalid IP address"}`
/// - **500 Internal Server Error**: `{"error": "Error"}`
///
/// # Response
///
/// ```json
/// {
///   "ip": "8.8.8.8",
///   "country": "United States",
///   "countryCode": "US",
///   "countryFlags": "🇺🇸",
///   "continent": "NA",
///   "continentName": "North America",
///   "asn": 15169,
///   "isp": "Google LLC",
///   "colo": "SJC",
///   "latitude": 37.3,
///   "longitude": -121.9,
///   "region": "California",
///   "city": "San Jose"
/// }
/// ```
pub async fn lookup_handler(
    Path(ip): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Json<LookupResponse>, AppError> {
    lookup(&state, Some(ip.as_str()), &headers, addr)
}

/// Looks up the caller's own address.
///
/// # Endpoint
///
/// `GET /`
///
/// The address comes from the first `X-Forwarded-For` entry when the service
/// runs behind a proxy, otherwise from the peer socket.
pub async fn lookup_self_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Json<LookupResponse>, AppError> {
    lookup(&state, None, &headers, addr)
}

fn lookup(
    state: &AppState,
    requested: Option<&str>,
    headers: &HeaderMap,
    peer: SocketAddr,
) -> Result<Json<LookupResponse>, AppError> {
    let fallback = fallback_source(headers, peer, state.behind_proxy);

    let result = state
        .enrichment_service
        .enrich(requested, Some(fallback.as_str()))?;

    Ok(Json(result.into()))
}
