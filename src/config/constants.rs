//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: input
//! and output paths, probe parameters, and network timeouts.

/// DNS name that round-robins across the orchestrator nodes
pub const DEFAULT_DNS_NAME: &str = "livepeer.multiorch.com";

/// SQLite database holding the airport table and IP/location associations
pub const DEFAULT_DB_PATH: &str = "./smokepeer.db";

/// MaxMind GeoLite2-City database
/// Download from https://github.com/P3TERX/GeoLite.mmdb or via geoipupdate
pub const DEFAULT_GEOIP_DB_PATH: &str = "/usr/share/GeoIP/GeoLite2-City.mmdb";

/// ISO 3166 country code CSV (`name`, `alpha-2`, `alpha-3` columns)
pub const DEFAULT_ISO_CSV_PATH: &str = "./data/iso_country_codes.csv";

/// Airport code CSV (`iata_code`, `latitude`, `longitude` columns)
pub const DEFAULT_AIRPORT_CSV_PATH: &str = "./data/airport_codes.csv";

/// SmokePing targets file that is overwritten on every non-dry run
pub const DEFAULT_TARGETS_PATH: &str = "/etc/smokeping/config.d/Targets";

// Liveness probing
/// ICMP echo requests sent per candidate node
pub const DEFAULT_PING_COUNT: u32 = 3;
/// External ping utility, resolved through `PATH`
pub const DEFAULT_PING_BINARY: &str = "ping";

// SmokePing preamble defaults
pub const DEFAULT_OWNER: &str = "Smokepeer";
pub const DEFAULT_CONTACT: &str = "root@localhost";
pub const DEFAULT_CGI_URL: &str = "http://localhost/smokeping/smokeping.fcgi";
pub const DEFAULT_FPING_BINARY: &str = "/usr/bin/fping";

/// Hostname written into a stanza when reverse DNS yields nothing
pub const UNKNOWN_HOSTNAME: &str = "Unknown";

// Network operation timeouts
/// DNS query timeout in seconds
/// Forward and PTR lookups both go through the same resolver
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// DNS attempts per query before the lookup is treated as a miss
pub const DNS_ATTEMPTS: usize = 2;

/// Mean Earth radius used for haversine distances, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;
