//! Command implementations for the RoadPulse CLI.
//!
//! Provides subcommands for listing road reports and stats, marking a
//! report as repaired, and watching the map headlessly in a terminal.

use clap::{Args, Subcommand, ValueEnum};
use rp_core::{HttpRoadApi, LatLon};
use rp_render::Locale;
use std::time::Duration;

pub mod query;
pub mod repair;
pub mod scheduler;
pub mod terminal;
pub mod watch;

/// How to reach the backend. Shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Backend origin, e.g. http://localhost:5000
    #[arg(long, env = "ROADPULSE_URL", default_value = "http://localhost:5000", global = true)]
    pub base_url: String,

    /// Raw Cookie header with a logged-in session (needed for repair)
    #[arg(long, env = "ROADPULSE_COOKIE", hide_env_values = true, global = true)]
    pub cookie: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Label language: en or it
    #[arg(long, default_value = "en", global = true)]
    pub locale: Locale,
}

impl Connection {
    pub fn api(&self) -> anyhow::Result<HttpRoadApi> {
        let mut builder = HttpRoadApi::builder(&self.base_url);
        if let Some(cookie) = &self.cookie {
            builder = builder.cookie(cookie.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the current road reports
    Points {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show summary counters
    Stats,

    /// Mark a report as repaired (requires an admin session cookie)
    Repair {
        /// Report id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Follow the map in the terminal, refreshing on an interval until Ctrl-C
    Watch {
        /// Refresh period in seconds (default: 600)
        #[arg(short, long)]
        interval_secs: Option<u64>,

        /// Render popups as an administrator would see them
        #[arg(long)]
        admin: bool,

        /// Pretend the user is at LAT,LON
        #[arg(long, value_parser = parse_lat_lon)]
        home: Option<LatLon>,
    },
}

/// Parse `"44.65,10.92"` into a coordinate.
pub fn parse_lat_lon(s: &str) -> Result<LatLon, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("longitude: {e}"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("coordinate out of range: {lat},{lon}"));
    }
    Ok(LatLon::new(lat, lon))
}

pub async fn run(connection: Connection, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Points { format } => query::run_points(&connection, format).await,
        Command::Stats => query::run_stats(&connection).await,
        Command::Repair { id, yes } => repair::run_repair(&connection, id, yes).await,
        Command::Watch {
            interval_secs,
            admin,
            home,
        } => watch::run_watch(&connection, interval_secs, admin, home).await,
    }
}
