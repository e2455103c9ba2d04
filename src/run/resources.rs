//! Run resources and per-run results.
//!
//! `RunResources` owns everything acquired once per run: the SQLite pool,
//! the airport table snapshot, the GeoIP reader, the DNS resolver and the
//! parsed target locations. All of it is released when the run returns.

use std::net::IpAddr;
use std::path::PathBuf;

use hickory_resolver::TokioAsyncResolver;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::geoip::GeoIpReader;
use crate::locations::TargetLocations;
use crate::reference::AirportRecord;
use crate::smokeping::LocationAssignments;

/// All resources initialized for a run.
pub struct RunResources {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Airports in table order, used for the nearest-airport scan
    pub airports: Vec<AirportRecord>,
    /// GeoLite2-City reader
    pub geoip: GeoIpReader,
    /// DNS resolver for forward and reverse lookups
    pub resolver: TokioAsyncResolver,
    /// Declared monitoring locations
    pub locations: TargetLocations,
    /// Original configuration
    pub config: Config,
}

/// One node matched to one declared location.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedNode {
    /// Location label the node serves
    pub location: String,
    /// City name from the geo database, `Unknown` when absent
    pub city: String,
    /// Node address
    pub ip: IpAddr,
    /// IATA code of the closest airport, `None` when the airport table is empty
    pub airport: Option<String>,
}

/// What the probe loop found across all resolved addresses.
#[derive(Debug, Default)]
pub struct ProbeSummary {
    /// Match lines in discovery order
    pub matches: Vec<MatchedNode>,
    /// Location -> node IPs for config generation
    pub assignments: LocationAssignments,
    /// Addresses returned by DNS
    pub resolved: usize,
    /// Addresses that answered the ping probe
    pub reachable: usize,
}

/// Results of a smokepeer run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Every (location, node) match, in discovery order
    pub matches: Vec<MatchedNode>,
    /// Number of addresses the DNS name resolved to
    pub resolved: usize,
    /// Number of addresses that answered the ping probe
    pub reachable: usize,
    /// Number of stanzas in the generated config
    pub targets: usize,
    /// The rendered config, when it was printed instead of written
    pub document: Option<String>,
    /// Where the config was written, when it was written
    pub written_to: Option<PathBuf>,
}
