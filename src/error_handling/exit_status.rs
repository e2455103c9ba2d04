//! Process exit statuses.
//!
//! Every fatal error class maps to its own exit status so wrapper scripts
//! and systemd units can tell failures apart without parsing output.

use strum_macros::EnumIter;

use super::types::{InputError, LocationError, ReferenceDataError, RunError};

/// Exit status of the `smokepeer` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ExitStatus {
    Success,
    /// Unexpected failure outside the pipeline (logger setup etc.)
    Failure,
    /// Command-line usage error reported by clap
    Usage,
    MissingLocationSource,
    ConflictingLocationSources,
    ConfigFileNotFound,
    ConfigFileUnreadable,
    MalformedLocation,
    UnknownCountryCode,
    DuplicateLabel,
    EmptyLocationSpec,
    ReferenceData,
    Database,
    GeoIp,
    Output,
}

impl ExitStatus {
    /// Numeric process exit code.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Usage => 2,
            ExitStatus::MissingLocationSource => 3,
            ExitStatus::ConflictingLocationSources => 4,
            ExitStatus::ConfigFileNotFound => 5,
            ExitStatus::ConfigFileUnreadable => 6,
            ExitStatus::MalformedLocation => 7,
            ExitStatus::UnknownCountryCode => 8,
            ExitStatus::DuplicateLabel => 9,
            ExitStatus::EmptyLocationSpec => 10,
            ExitStatus::ReferenceData => 11,
            ExitStatus::Database => 12,
            ExitStatus::GeoIp => 13,
            ExitStatus::Output => 14,
        }
    }
}

impl RunError {
    /// Exit status the binary reports for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunError::Input(e) => match e {
                InputError::MissingLocationSource => ExitStatus::MissingLocationSource,
                InputError::ConflictingLocationSources => ExitStatus::ConflictingLocationSources,
                InputError::ConfigFileNotFound(_) => ExitStatus::ConfigFileNotFound,
                InputError::ConfigFileUnreadable { .. } => ExitStatus::ConfigFileUnreadable,
            },
            RunError::Location(e) => match e {
                LocationError::MalformedToken(_) => ExitStatus::MalformedLocation,
                LocationError::UnknownCountryCode { .. } => ExitStatus::UnknownCountryCode,
                LocationError::DuplicateLabel(_) => ExitStatus::DuplicateLabel,
                LocationError::Empty => ExitStatus::EmptyLocationSpec,
            },
            RunError::ReferenceData(ReferenceDataError::Storage(_)) => ExitStatus::Database,
            RunError::ReferenceData(_) => ExitStatus::ReferenceData,
            RunError::Database(_) => ExitStatus::Database,
            RunError::GeoIp(_) => ExitStatus::GeoIp,
            RunError::Output(_) => ExitStatus::Output,
        }
    }
}
