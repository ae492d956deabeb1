//! Resolver trait for geolocation and ASN lookups.

use crate::domain::entities::GeoRecord;
use crate::error::ResolveError;

/// Descriptive metadata of the database behind a resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseInfo {
    pub database_type: String,
    pub ip_version: u16,
    /// Build time as seconds since the Unix epoch.
    pub build_epoch: u64,
}

/// Read-only lookup interface over an opaque geo/ASN database.
///
/// The database is opened once and shared across requests; lookups take
/// `&self` and never mutate.
///
/// # Implementations
///
/// - [`crate::infrastructure::geoip::MaxmindResolver`] - MaxMind DB file reader
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait GeoResolver: Send + Sync {
    /// Looks up an address that already passed shape validation.
    ///
    /// Returns `Ok(None)` when the database has no entry for the address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] only when the database itself is malformed.
    fn resolve(&self, address: &str) -> Result<Option<GeoRecord>, ResolveError>;

    /// Returns metadata describing the loaded database.
    fn database_info(&self) -> DatabaseInfo;
}
