//! MaxMind DB implementation of the geo resolver.

use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use maxminddb::Reader;
use serde::{Deserialize, Deserializer, de};

use crate::domain::entities::GeoRecord;
use crate::domain::repositories::{DatabaseInfo, GeoResolver};
use crate::error::{LoadError, ResolveError};

/// Record layout of a country + ASN database.
///
/// ```json
/// {"country": "US", "country_name": "United States", "continent": "NA",
///  "continent_name": "North America", "asn": "AS15169", "as_name": "Google LLC"}
/// ```
#[derive(Debug, Deserialize)]
struct CountryAsnRecord {
    country: Option<String>,
    country_name: Option<String>,
    continent: Option<String>,
    continent_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_asn")]
    asn: Option<u32>,
    as_name: Option<String>,
}

impl From<CountryAsnRecord> for GeoRecord {
    fn from(r: CountryAsnRecord) -> Self {
        GeoRecord {
            country_name: r.country_name,
            country_code: r.country,
            continent_code: r.continent,
            continent_name: r.continent_name,
            asn: r.asn,
            as_name: r.as_name,
        }
    }
}

/// Accepts the ASN as an integer or as an `AS<digits>` string.
fn deserialize_asn<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AsnVisitor;

    impl de::Visitor<'_> for AsnVisitor {
        type Value = Option<u32>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an AS number or an \"AS<digits>\" string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            u32::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u32::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let digits = v
                .strip_prefix("AS")
                .or_else(|| v.strip_prefix("as"))
                .unwrap_or(v);
            if digits.is_empty() {
                return Ok(None);
            }
            digits.parse::<u32>().map(Some).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(AsnVisitor)
}

/// Geo resolver backed by a MaxMind DB file held in memory.
pub struct MaxmindResolver {
    reader: Reader<Vec<u8>>,
    path: PathBuf,
}

impl MaxmindResolver {
    /// Opens and validates the database file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DatabaseUnavailable`] if the file is missing,
    /// unreadable, or not a MaxMind DB.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let reader = Reader::open_readfile(&path).map_err(|source| {
            LoadError::DatabaseUnavailable {
                path: path.clone(),
                source,
            }
        })?;

        tracing::debug!(
            "Opened {} ({}, {} nodes)",
            path.display(),
            reader.metadata.database_type,
            reader.metadata.node_count
        );

        Ok(Self { reader, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for MaxmindResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxmindResolver")
            .field("path", &self.path)
            .field("database_type", &self.reader.metadata.database_type)
            .finish()
    }
}

impl GeoResolver for MaxmindResolver {
    fn resolve(&self, address: &str) -> Result<Option<GeoRecord>, ResolveError> {
        // Shape validation lets through strings such as "999.1.1.1"; the
        // database has nothing for them.
        let Ok(ip) = address.parse::<IpAddr>() else {
            tracing::debug!("{} is not a parseable IP literal, treating as miss", address);
            return Ok(None);
        };

        self.reader
            .lookup::<CountryAsnRecord>(ip)
            .map(|record| record.map(GeoRecord::from))
            .map_err(|e| ResolveError {
                address: address.to_string(),
                reason: e.to_string(),
            })
    }

    fn database_info(&self) -> DatabaseInfo {
        let metadata = &self.reader.metadata;
        DatabaseInfo {
            database_type: metadata.database_type.clone(),
            ip_version: metadata.ip_version,
            build_epoch: metadata.build_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn decode(value: serde_json::Value) -> CountryAsnRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_open_missing_file() {
        let result = MaxmindResolver::open("/nonexistent/country_asn.mmdb");

        assert!(matches!(
            result,
            Err(LoadError::DatabaseUnavailable { .. })
        ));
    }

    #[test]
    fn test_open_garbage_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a maxmind database").unwrap();

        let result = MaxmindResolver::open(file.path());

        match result {
            Err(LoadError::DatabaseUnavailable { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected DatabaseUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_asn_as_integer() {
        let record = decode(json!({"asn": 15169}));
        assert_eq!(record.asn, Some(15169));
    }

    #[test]
    fn test_asn_as_prefixed_string() {
        let record = decode(json!({"asn": "AS13335"}));
        assert_eq!(record.asn, Some(13335));
    }

    #[test]
    fn test_asn_missing() {
        let record = decode(json!({"country": "US"}));
        assert_eq!(record.asn, None);
    }

    #[test]
    fn test_asn_garbage_rejected() {
        let result = serde_json::from_value::<CountryAsnRecord>(json!({"asn": "ASxyz"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_record_conversion() {
        let record = decode(json!({
            "country": "US",
            "country_name": "United States",
            "continent": "NA",
            "continent_name": "North America",
            "asn": "AS15169",
            "as_name": "Google LLC",
            "as_domain": "google.com"
        }));

        let geo = GeoRecord::from(record);

        assert_eq!(geo.country_code.as_deref(), Some("US"));
        assert_eq!(geo.country_name.as_deref(), Some("United States"));
        assert_eq!(geo.continent_code.as_deref(), Some("NA"));
        assert_eq!(geo.continent_name.as_deref(), Some("North America"));
        assert_eq!(geo.asn, Some(15169));
        assert_eq!(geo.as_name.as_deref(), Some("Google LLC"));
    }
}
