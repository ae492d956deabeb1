//! Core domain entities representing the lookup data model.
//!
//! Entities are plain data structures without I/O. Every field a data source
//! may lack is an `Option`; absence is never coerced to an empty string.
//!
//! # Entity Types
//!
//! - [`GeoRecord`] - Raw geolocation and network-ownership fields for one address
//! - [`LocationEntry`] - One row of per-country location metadata
//! - [`EnrichedResult`] - The merged record returned for a lookup

pub mod enriched;
pub mod geo_record;
pub mod location;

pub use enriched::EnrichedResult;
pub use geo_record::GeoRecord;
pub use location::LocationEntry;
