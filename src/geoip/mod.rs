//! GeoIP lookup using a MaxMind GeoLite2-City database.
//!
//! The database is read from a local `.mmdb` file once per run into a
//! `GeoIpReader` owned by the caller.

mod lookup;
mod reader;
mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export public API
pub use reader::GeoIpReader;
pub use types::{GeoInfo, GeoIpMetadata};
