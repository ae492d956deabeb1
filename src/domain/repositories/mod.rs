//! Data source trait definitions for the domain layer.
//!
//! Traits define the lookup contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Traits
//!
//! - [`GeoResolver`] - Address to geolocation/ASN lookups

pub mod geo_resolver;

pub use geo_resolver::{DatabaseInfo, GeoResolver};

#[cfg(test)]
pub use geo_resolver::MockGeoResolver;
