//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response describing the loaded resources.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseStatus,
    pub locations: LocationsStatus,
}

/// Geo database details.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    #[serde(rename = "type")]
    pub database_type: String,
    pub ip_version: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,
}

/// Location directory size.
#[derive(Debug, Serialize)]
pub struct LocationsStatus {
    pub entries: usize,
    pub countries: usize,
}
