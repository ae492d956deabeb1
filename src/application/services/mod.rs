//! Business logic services for the application layer.

pub mod enrichment_service;

pub use enrichment_service::EnrichmentService;
