//! DTOs for the lookup endpoint.

use serde::Serialize;

use crate::domain::entities::EnrichedResult;

/// Response body for `GET /{ip}`.
///
/// `countryFlags` keeps the name existing clients read.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub ip: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_flags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl From<EnrichedResult> for LookupResponse {
    fn from(r: EnrichedResult) -> Self {
        Self {
            ip: r.ip,
            country: r.country,
            country_code: r.country_code,
            country_flags: r.country_flag,
            continent: r.continent,
            continent_name: r.continent_name,
            asn: r.asn,
            isp: r.isp,
            colo: r.colo,
            latitude: r.latitude,
            longitude: r.longitude,
            region: r.region,
            city: r.city,
        }
    }
}
