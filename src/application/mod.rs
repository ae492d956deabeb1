//! Application layer services implementing the lookup logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::enrichment_service::EnrichmentService`] - Validate, resolve, and enrich addresses

pub mod services;
