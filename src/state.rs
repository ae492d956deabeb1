//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::EnrichmentService;

/// Immutable per-process context.
///
/// Constructed once at startup after the database and location directory
/// have loaded; cloning only bumps the reference count.
#[derive(Clone)]
pub struct AppState {
    pub enrichment_service: Arc<EnrichmentService>,
    /// Trust `X-Forwarded-For` when deriving the caller's address.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(enrichment_service: Arc<EnrichmentService>, behind_proxy: bool) -> Self {
        Self {
            enrichment_service,
            behind_proxy,
        }
    }
}
