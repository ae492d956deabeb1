//! Domain layer containing lookup entities and data source contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Lookup trait definitions
//! - [`location_directory`] - In-memory country metadata table

pub mod entities;
pub mod location_directory;
pub mod repositories;

pub use location_directory::LocationDirectory;
