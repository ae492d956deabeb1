//! Merged lookup result.

use super::{GeoRecord, LocationEntry};

/// The result of enriching one address.
///
/// Geo fields come from the resolver, location fields from the single directory
/// entry matched by country code, and `country_flag` is derived from the code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedResult {
    pub ip: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub country_flag: Option<String>,
    pub continent: Option<String>,
    pub continent_name: Option<String>,
    pub asn: Option<u32>,
    pub isp: Option<String>,
    pub colo: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub region: Option<String>,
    pub city: Option<String>,
}

impl EnrichedResult {
    /// Merges a resolver record and an optional directory entry.
    pub fn new(
        ip: String,
        geo: GeoRecord,
        location: Option<&LocationEntry>,
        country_flag: Option<String>,
    ) -> Self {
        Self {
            ip,
            country: geo.country_name,
            country_code: geo.country_code,
            country_flag,
            continent: geo.continent_code,
            continent_name: geo.continent_name,
            asn: geo.asn,
            isp: geo.as_name,
            colo: location.map(|l| l.colo.clone()),
            latitude: location.map(|l| l.latitude),
            longitude: location.map(|l| l.longitude),
            region: location.map(|l| l.region.clone()),
            city: location.map(|l| l.city.clone()),
        }
    }
}
