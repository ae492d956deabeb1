//! Location metadata row keyed by country code.

use serde::Deserialize;

/// Per-country location metadata.
///
/// Deserializes from the colocation list layout:
///
/// ```json
/// {"iata": "SJC", "lat": 37.3, "lon": -121.9, "cca2": "US", "region": "North America", "city": "San Jose"}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationEntry {
    #[serde(rename = "cca2")]
    pub country_code: String,
    #[serde(rename = "iata")]
    pub colo: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub region: String,
    pub city: String,
}
