//! Shared test helpers for run module tests.

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use super::resources::RunResources;
use crate::config::Config;
use crate::geoip::test_helpers::{write_city_db, CityEntry};
use crate::geoip::GeoIpReader;
use crate::locations::parse_locations;
use crate::reference::{Country, CountryCodes};
use crate::storage::test_helpers::{airport, create_test_pool};

/// Chicago, in the fixture GeoIP database.
pub const US_NODE: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 10));
/// Frankfurt, in the fixture GeoIP database.
pub const DE_NODE: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 11));
/// Not in the fixture GeoIP database.
pub const UNLOCATED_NODE: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 99));

fn country_codes() -> CountryCodes {
    CountryCodes::from_countries([
        Country {
            name: "United States".to_string(),
            alpha2: "US".to_string(),
            alpha3: "USA".to_string(),
        },
        Country {
            name: "Germany".to_string(),
            alpha2: "DE".to_string(),
            alpha3: "DEU".to_string(),
        },
    ])
}

/// Resolver with short timeouts; documentation addresses have no PTR records.
pub fn test_resolver() -> TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(1);
    opts.attempts = 1;
    TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}

/// Builds run resources around an in-memory pool and a fixture GeoIP database
/// written into `dir`.
///
/// `ping_binary` is `true` or `false` to make every node reachable or not.
pub async fn test_resources(
    dir: &Path,
    locations: &str,
    ping_binary: &str,
    dry_run: bool,
) -> RunResources {
    let geoip_path = write_city_db(
        dir,
        &[
            CityEntry::new(Ipv4Addr::new(203, 0, 113, 10), "United States", "US")
                .city("Chicago")
                .at(41.88, -87.63),
            CityEntry::new(Ipv4Addr::new(203, 0, 113, 11), "Germany", "DE")
                .city("Frankfurt am Main")
                .at(50.11, 8.68),
        ],
    );

    let config = Config {
        gpu_locations: Some(locations.to_string()),
        ping_binary: ping_binary.into(),
        ping_count: 1,
        dry_run,
        geoip_db: geoip_path.clone(),
        output: dir.join("Targets"),
        ..Default::default()
    };

    RunResources {
        pool: create_test_pool().await,
        airports: vec![
            airport("JFK", 40.6413, -73.7781),
            airport("ORD", 41.9742, -87.9073),
            airport("FRA", 50.0379, 8.5622),
        ],
        geoip: GeoIpReader::open(&geoip_path).await.unwrap(),
        resolver: test_resolver(),
        locations: parse_locations(locations, &country_codes()).unwrap(),
        config,
    }
}
