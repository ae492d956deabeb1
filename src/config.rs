//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the database
//! and location directory are opened.
//!
//! ```bash
//! export GEOIP_DATABASE_PATH="/var/lib/geoip/country_asn.mmdb"
//! export LOCATIONS_PATH="/var/lib/geoip/locations.json"
//! export LISTEN="0.0.0.0:15787"
//! ```
//!
//! ## Optional Variables
//!
//! - `GEOIP_DATABASE_PATH` - MaxMind DB file (default: `country_asn.mmdb`)
//! - `LOCATIONS_PATH` - Location metadata JSON (default: `locations.json`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:15787`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-For` for caller lookups (default: `true`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub locations_path: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, `GET /` reads the caller's address from `X-Forwarded-For`
    /// before falling back to the peer socket address.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this never fails on a bare environment.
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("GEOIP_DATABASE_PATH")
            .unwrap_or_else(|_| "country_asn.mmdb".to_string())
            .into();
        let locations_path = env::var("LOCATIONS_PATH")
            .unwrap_or_else(|_| "locations.json".to_string())
            .into();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:15787".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        Ok(Self {
            database_path,
            locations_path,
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - either data file path is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.database_path.as_os_str().is_empty() {
            anyhow::bail!("GEOIP_DATABASE_PATH must not be empty");
        }

        if self.locations_path.as_os_str().is_empty() {
            anyhow::bail!("LOCATIONS_PATH must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Geo database: {}", self.database_path.display());
        tracing::info!("  Locations: {}", self.locations_path.display());
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
