//! # GeoIP API
//!
//! A fast offline IP geolocation and ASN lookup service built with Axum and
//! MaxMind DB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Lookup entities, resolver trait, location directory
//! - **Application Layer** ([`application`]) - The enrichment pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - MaxMind DB reader and JSON loader
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Lookup Flow
//!
//! 1. The address is taken from the path, or from `X-Forwarded-For` / the peer
//! 2. It is shape-validated ([`utils::ip_validator`])
//! 3. It is resolved against the geo database ([`domain::repositories::GeoResolver`])
//! 4. The country code joins the [`domain::LocationDirectory`]
//! 5. A flag emoji is derived from the country code ([`utils::flag`])
//!
//! ## Quick Start
//!
//! ```bash
//! export GEOIP_DATABASE_PATH="./country_asn.mmdb"
//! export LOCATIONS_PATH="./locations.json"
//!
//! cargo run
//! curl http://localhost:15787/8.8.8.8
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::EnrichmentService;
    pub use crate::domain::LocationDirectory;
    pub use crate::domain::entities::{EnrichedResult, GeoRecord, LocationEntry};
    pub use crate::domain::repositories::{DatabaseInfo, GeoResolver};
    pub use crate::error::{AppError, LoadError, ResolveError};
    pub use crate::state::AppState;
}
