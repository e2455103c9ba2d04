//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::*;
use crate::error_handling::InputError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Where the GPU location specification comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSource {
    /// Passed directly with `--gpu-locations`
    Inline(String),
    /// Read from the file given with `--gpu-config-file`
    File(PathBuf),
}

/// Command-line options and library configuration.
///
/// Every option has a default, so the struct can also be built
/// programmatically with `..Default::default()`.
///
/// # Examples
///
/// ```bash
/// # Print the generated config without touching /etc/smokeping
/// smokepeer --gpu-locations LPT-US,LPT-DE --dry-run
///
/// # Read locations from a file and write the targets file
/// smokepeer --gpu-config-file /etc/smokepeer/locations.txt
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smokepeer",
    about = "Smokeping configuration updater for Livepeer nodes."
)]
pub struct Config {
    /// Comma-separated GPU server locations in the format 'LABEL-ISO_COUNTRY_CODE'
    #[arg(long, value_name = "LABEL-CODE,...")]
    pub gpu_locations: Option<String>,

    /// Path to a flat file containing GPU server locations
    #[arg(long, value_name = "PATH")]
    pub gpu_config_file: Option<PathBuf>,

    /// DNS name resolving to the orchestrator nodes
    #[arg(long = "lptdns", env = "SMOKEPEER_DNS_NAME", default_value = DEFAULT_DNS_NAME)]
    pub dns_name: String,

    /// Print the generated Smokeping config instead of writing it
    #[arg(long, visible_alias = "print-config")]
    pub dry_run: bool,

    /// Smokeping targets file to overwrite
    #[arg(long, env = "SMOKEPEER_TARGETS_PATH", default_value = DEFAULT_TARGETS_PATH)]
    pub output: PathBuf,

    /// Database path (SQLite file)
    #[arg(long, env = "SMOKEPEER_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// MaxMind GeoLite2-City database (.mmdb)
    #[arg(long, env = "SMOKEPEER_GEOIP_DB", default_value = DEFAULT_GEOIP_DB_PATH)]
    pub geoip_db: PathBuf,

    /// ISO 3166 country code CSV
    #[arg(long, env = "SMOKEPEER_ISO_CSV", default_value = DEFAULT_ISO_CSV_PATH)]
    pub iso_csv: PathBuf,

    /// Airport code CSV
    #[arg(long, env = "SMOKEPEER_AIRPORT_CSV", default_value = DEFAULT_AIRPORT_CSV_PATH)]
    pub airport_csv: PathBuf,

    /// Echo requests sent to each node before it counts as reachable
    #[arg(long, default_value_t = DEFAULT_PING_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
    pub ping_count: u32,

    /// Ping utility used for liveness probes
    #[arg(long, default_value = DEFAULT_PING_BINARY)]
    pub ping_binary: PathBuf,

    /// Owner line of the Smokeping General section
    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Contact line of the Smokeping General section
    #[arg(long, default_value = DEFAULT_CONTACT)]
    pub contact: String,

    /// Exterior URL of the Smokeping CGI
    #[arg(long, default_value = DEFAULT_CGI_URL)]
    pub cgi_url: String,

    /// fping binary referenced by the FPing probe
    #[arg(long, default_value = DEFAULT_FPING_BINARY)]
    pub fping_binary: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gpu_locations: None,
            gpu_config_file: None,
            dns_name: DEFAULT_DNS_NAME.to_string(),
            dry_run: false,
            output: PathBuf::from(DEFAULT_TARGETS_PATH),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            geoip_db: PathBuf::from(DEFAULT_GEOIP_DB_PATH),
            iso_csv: PathBuf::from(DEFAULT_ISO_CSV_PATH),
            airport_csv: PathBuf::from(DEFAULT_AIRPORT_CSV_PATH),
            ping_count: DEFAULT_PING_COUNT,
            ping_binary: PathBuf::from(DEFAULT_PING_BINARY),
            owner: DEFAULT_OWNER.to_string(),
            contact: DEFAULT_CONTACT.to_string(),
            cgi_url: DEFAULT_CGI_URL.to_string(),
            fping_binary: DEFAULT_FPING_BINARY.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Picks the single location source the operator supplied.
    ///
    /// An inline spec that is blank counts as absent.
    ///
    /// # Errors
    ///
    /// `MissingLocationSource` when neither flag is set and
    /// `ConflictingLocationSources` when both are.
    pub fn location_source(&self) -> Result<LocationSource, InputError> {
        let inline = self
            .gpu_locations
            .as_deref()
            .filter(|spec| !spec.trim().is_empty());

        match (inline, &self.gpu_config_file) {
            (Some(_), Some(_)) => Err(InputError::ConflictingLocationSources),
            (Some(spec), None) => Ok(LocationSource::Inline(spec.to_string())),
            (None, Some(path)) => Ok(LocationSource::File(path.clone())),
            (None, None) => Err(InputError::MissingLocationSource),
        }
    }
}
