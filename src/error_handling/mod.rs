//! Error handling and exit statuses.
//!
//! This module provides:
//! - Error type definitions per pipeline stage
//! - The aggregate `RunError`
//! - The mapping from errors to distinct process exit statuses
//!
//! Errors fall into two groups:
//! - **Fatal**: bad input, unreadable reference data, database or output
//!   failures. These end the run and carry an exit status.
//! - **Expected misses**: empty DNS answers, geolocation misses, reverse DNS
//!   misses and unreachable nodes. These never surface as errors; the
//!   pipeline logs and skips them.

mod exit_status;
mod types;

// Re-export public API
pub use exit_status::ExitStatus;
pub use types::{
    DatabaseError, GeoIpError, InitializationError, InputError, LocationError, OutputError,
    ReferenceDataError, RunError,
};
