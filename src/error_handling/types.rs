//! Error type definitions.
//!
//! This module defines the error types of every pipeline stage and the
//! `RunError` that aggregates them.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal problems with the command-line input, detected before any work starts.
#[derive(Error, Debug)]
pub enum InputError {
    /// Neither `--gpu-locations` nor `--gpu-config-file` was given.
    #[error("Either --gpu-locations or --gpu-config-file must be provided")]
    MissingLocationSource,

    /// Both location flags were given.
    #[error("--gpu-locations and --gpu-config-file are mutually exclusive; pass only one")]
    ConflictingLocationSources,

    /// The location config file does not exist.
    #[error("Config file {} does not exist", .0.display())]
    ConfigFileNotFound(PathBuf),

    /// The location config file exists but could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced while parsing a `LABEL-CODE,...` location specification.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    /// A token is not of the form `LABEL-CODE`.
    #[error("Malformed location '{0}': expected LABEL-CODE, e.g. LPT-US")]
    MalformedToken(String),

    /// The trailing code is not a known ISO alpha-2 or alpha-3 code.
    #[error("Unknown ISO country code '{code}' in location '{token}'")]
    UnknownCountryCode { token: String, code: String },

    /// The same label appears more than once.
    #[error("Duplicate location label '{0}'")]
    DuplicateLabel(String),

    /// The specification contains no locations.
    #[error("No GPU locations given")]
    Empty,
}

/// Errors loading the ISO country and airport reference CSVs.
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    /// The CSV could not be opened or a row could not be decoded.
    #[error("Failed to load reference data from {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing the airport table failed.
    #[error("Failed to store reference data: {0}")]
    Storage(#[from] DatabaseError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Errors opening the MaxMind geo database.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// The database file could not be read.
    #[error("Failed to read GeoIP database from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid MaxMind database.
    #[error("Failed to parse GeoIP database from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: maxminddb::MaxMindDBError,
    },
}

/// Errors persisting the generated Smokeping config.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The targets file could not be written.
    #[error("Failed to write Smokeping config to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any fatal error that ends a smokepeer run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    GeoIp(#[from] GeoIpError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
