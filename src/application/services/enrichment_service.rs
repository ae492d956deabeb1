//! Address validation and enrichment pipeline.

use std::sync::Arc;

use crate::domain::LocationDirectory;
use crate::domain::entities::EnrichedResult;
use crate::domain::repositories::GeoResolver;
use crate::error::AppError;
use crate::utils::client_ip::working_address;
use crate::utils::flag::flag_emoji;
use crate::utils::ip_validator::is_valid_ip;

/// Service that turns an address into an [`EnrichedResult`].
///
/// Holds the process-lifetime resources: the geo resolver and the location
/// directory. Both are read-only, so one instance is shared by every request.
pub struct EnrichmentService {
    resolver: Arc<dyn GeoResolver>,
    directory: Arc<LocationDirectory>,
}

impl EnrichmentService {
    /// Creates a new enrichment service.
    pub fn new(resolver: Arc<dyn GeoResolver>, directory: Arc<LocationDirectory>) -> Self {
        Self {
            resolver,
            directory,
        }
    }

    /// Enriches the requested address, or the fallback source if none was given.
    ///
    /// # Pipeline
    ///
    /// 1. Pick the working address (see [`working_address`])
    /// 2. Shape-validate it; nothing is looked up for invalid input
    /// 3. Resolve against the geo database; a miss leaves geo fields absent
    /// 4. Join the location directory on the resolved country code
    /// 5. Derive the flag emoji from the country code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the address fails shape validation.
    /// Returns [`AppError::Internal`] if the database is malformed.
    pub fn enrich(
        &self,
        requested: Option<&str>,
        fallback: Option<&str>,
    ) -> Result<EnrichedResult, AppError> {
        let address = working_address(requested, fallback);

        if !is_valid_ip(&address) {
            tracing::debug!("Rejected address {:?}", address);
            return Err(AppError::bad_request("Invalid IP address"));
        }

        let geo = self.resolver.resolve(&address)?.unwrap_or_default();
        if geo.is_empty() {
            tracing::debug!("No database entry for {}", address);
        }

        let country_code = geo.country_code.as_deref();
        let location = country_code.and_then(|code| self.directory.find_by_country_code(code));
        let flag = country_code.and_then(flag_emoji);

        Ok(EnrichedResult::new(address, geo, location, flag))
    }

    pub fn resolver(&self) -> &dyn GeoResolver {
        self.resolver.as_ref()
    }

    pub fn directory(&self) -> &LocationDirectory {
        &self.directory
    }
}
