//! CLI administration tool for geoip-api.
//!
//! Runs lookups and inspects the configured data files without starting the
//! HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Enrich a single address
//! cargo run --bin admin -- lookup 8.8.8.8
//!
//! # Show geo database metadata
//! cargo run --bin admin -- db info
//!
//! # Inspect the location directory
//! cargo run --bin admin -- locations count
//! cargo run --bin admin -- locations find US
//! ```
//!
//! # Environment Variables
//!
//! - `GEOIP_DATABASE_PATH` - MaxMind DB file (default: `country_asn.mmdb`)
//! - `LOCATIONS_PATH` - Location metadata JSON (default: `locations.json`)

use geoip_api::api::dto::lookup::LookupResponse;
use geoip_api::config::{self, Config};
use geoip_api::domain::repositories::GeoResolver;
use geoip_api::infrastructure::geoip::MaxmindResolver;
use geoip_api::infrastructure::locations::load_locations;
use geoip_api::server::build_state;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for geoip-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Enrich an address and print the JSON record
    Lookup {
        /// IPv4 or IPv6 address
        ip: String,
    },

    /// Geo database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Location directory operations
    Locations {
        #[command(subcommand)]
        action: LocationsAction,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Show database metadata
    Info,
}

/// Location directory subcommands.
#[derive(Subcommand)]
enum LocationsAction {
    /// Show the number of rows and distinct countries
    Count,

    /// Show the entry used for a country code
    Find {
        /// Two-letter country code (case-sensitive, e.g. "US")
        code: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Lookup { ip } => handle_lookup(&config, &ip)?,
        Commands::Db { action } => handle_db_action(action, &config)?,
        Commands::Locations { action } => handle_locations_action(action, &config)?,
    }

    Ok(())
}

/// Runs the enrichment pipeline once and prints the wire JSON.
fn handle_lookup(config: &Config, ip: &str) -> Result<()> {
    let state = build_state(config)?;

    let result = state
        .enrichment_service
        .enrich(Some(ip), None)
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    let response = LookupResponse::from(result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Dispatches database commands.
fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Info => {
            let resolver = MaxmindResolver::open(&config.database_path)
                .context("Failed to open geo database")?;
            let info = resolver.database_info();

            let built = i64::try_from(info.build_epoch)
                .ok()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "unknown".to_string());

            println!("{}", "Geo database".bright_blue().bold());
            println!();
            println!("  Path:       {}", resolver.path().display().to_string().cyan());
            println!("  Type:       {}", info.database_type.bright_white());
            println!("  IP version: {}", info.ip_version.to_string().bright_white());
            println!("  Built:      {}", built.bright_black());
            println!();
        }
    }

    Ok(())
}

/// Dispatches location directory commands.
fn handle_locations_action(action: LocationsAction, config: &Config) -> Result<()> {
    let directory =
        load_locations(&config.locations_path).context("Failed to load location directory")?;

    match action {
        LocationsAction::Count => {
            println!("{}", "Location directory".bright_blue().bold());
            println!();
            println!(
                "  Entries:   {}",
                directory.len().to_string().bright_white().bold()
            );
            println!(
                "  Countries: {}",
                directory.country_count().to_string().bright_white().bold()
            );
            println!();
        }
        LocationsAction::Find { code } => match directory.find_by_country_code(&code) {
            Some(entry) => {
                println!("{}", format!("Location for {}", code).bright_blue().bold());
                println!();
                println!("  Colo:      {}", entry.colo.cyan());
                println!("  City:      {}", entry.city);
                println!("  Region:    {}", entry.region);
                println!("  Latitude:  {}", entry.latitude);
                println!("  Longitude: {}", entry.longitude);
                println!();
            }
            None => {
                println!("{}", format!("No location for {}", code).yellow());
            }
        },
    }

    Ok(())
}
