//! Infrastructure layer for external data sources.
//!
//! This layer implements interfaces defined by the domain layer and loads the
//! process-lifetime resources from disk.
//!
//! # Modules
//!
//! - [`geoip`] - MaxMind DB backed [`crate::domain::repositories::GeoResolver`]
//! - [`locations`] - Location directory loading from JSON

pub mod geoip;
pub mod locations;
