//! GeoIP data structures.
//!
//! This module defines the data structures used for GeoIP lookups and metadata.

use std::path::PathBuf;

/// Metadata about the loaded GeoIP database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoIpMetadata {
    /// Path the database was read from
    pub source: PathBuf,
    /// Database edition, e.g. `GeoLite2-City`
    pub database_type: String,
    /// Build time in seconds since the Unix epoch
    pub build_epoch: u64,
}

impl GeoIpMetadata {
    /// Build date as `YYYY-MM-DD`, or the raw epoch if it is out of range.
    pub fn build_date(&self) -> String {
        i64::try_from(self.build_epoch)
            .ok()
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("epoch {}", self.build_epoch))
    }
}

/// Where a node is, according to the geo database.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoInfo {
    /// English country name
    pub country: String,
    /// ISO alpha-2 country code, when the database carries one
    pub country_code: Option<String>,
    /// English city name; missing for addresses only known to country level
    pub city: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoInfo {
    /// City name for display, `Unknown` when absent.
    pub fn city_or_unknown(&self) -> &str {
        self.city.as_deref().unwrap_or("Unknown")
    }
}
