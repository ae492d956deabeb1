//! HTTP server initialization and runtime setup.
//!
//! Opens the geo database, loads the location directory, and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::EnrichmentService;
use crate::config::Config;
use crate::domain::repositories::GeoResolver;
use crate::infrastructure::geoip::MaxmindResolver;
use crate::infrastructure::locations::load_locations;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Loads the process-lifetime resources and builds the shared state.
///
/// # Errors
///
/// Returns [`crate::error::LoadError`] (wrapped) if the database or the
/// location file is missing or malformed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let resolver = MaxmindResolver::open(&config.database_path)?;
    let info = resolver.database_info();
    tracing::info!(
        "Geo database loaded: {} (IPv{}, built at epoch {})",
        info.database_type,
        info.ip_version,
        info.build_epoch
    );

    let directory = load_locations(&config.locations_path)?;
    tracing::info!(
        "Location directory loaded: {} entries, {} countries",
        directory.len(),
        directory.country_count()
    );

    let service = EnrichmentService::new(Arc::new(resolver), Arc::new(directory));

    Ok(AppState::new(Arc::new(service), config.behind_proxy))
}

/// Runs the HTTP server with the given configuration.
///
/// Startup completes (or fails) before the listener binds, so no request
/// ever observes a partially loaded service.
///
/// # Errors
///
/// Returns an error if:
/// - The geo database or location file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
