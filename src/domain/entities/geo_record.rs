//! Geolocation record produced by a database lookup.

/// Geolocation and ASN attributes of an address.
///
/// A record with every field `None` is equivalent to a lookup miss.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoRecord {
    pub country_name: Option<String>,
    /// ISO 3166-1 alpha-2 code, the join key into the location directory.
    pub country_code: Option<String>,
    pub continent_code: Option<String>,
    pub continent_name: Option<String>,
    pub asn: Option<u32>,
    pub as_name: Option<String>,
}

impl GeoRecord {
    /// Returns true if the database knew nothing about the address.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
