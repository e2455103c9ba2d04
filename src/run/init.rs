//! Run resource initialization.
//!
//! This module contains the `init_run_resources` function which handles
//! all setup before any node is probed.

use log::info;

use crate::config::Config;
use crate::error_handling::RunError;
use crate::geoip::GeoIpReader;
use crate::initialization::init_resolver;
use crate::locations::{parse_locations, read_location_spec};
use crate::reference::{reload_airports, CountryCodes};
use crate::storage::{init_db_pool_with_path, load_airports};

use super::resources::RunResources;

/// Initialize all resources needed for a run.
///
/// This function performs the following steps, stopping at the first failure:
/// 1. Read the location specification (inline or file)
/// 2. Load ISO country codes and parse the target locations
/// 3. Open the database and reload the airport table
/// 4. Open the GeoIP database
/// 5. Build the DNS resolver
///
/// Location input is validated before the database is touched, so a bad
/// specification leaves the stored state unchanged.
///
/// # Errors
///
/// Returns the `RunError` of the failing step; each maps to its own exit status.
pub async fn init_run_resources(config: Config) -> Result<RunResources, RunError> {
    let source = config.location_source()?;
    let spec = read_location_spec(&source).await?;

    let codes = CountryCodes::load(&config.iso_csv)?;
    info!(
        "Loaded {} country codes from {}",
        codes.len(),
        config.iso_csv.display()
    );

    let locations = parse_locations(&spec, &codes)?;
    info!(
        "Monitoring {} location{}: {}",
        locations.len(),
        if locations.len() == 1 { "" } else { "s" },
        locations
            .iter()
            .map(|l| format!("{} ({})", l.label, l.country.name))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let pool = init_db_pool_with_path(&config.db_path).await?;
    reload_airports(&pool, &config.airport_csv).await?;
    let airports = load_airports(&pool).await?;
    if airports.is_empty() {
        log::warn!("Airport table is empty; matches will have no closest airport");
    }

    let geoip = GeoIpReader::open(&config.geoip_db).await?;
    let metadata = geoip.metadata();
    info!(
        "GeoIP database: {} ({}, built {})",
        metadata.source.display(),
        metadata.database_type,
        metadata.build_date()
    );

    let resolver = init_resolver();

    Ok(RunResources {
        pool,
        airports,
        geoip,
        resolver,
        locations,
        config,
    })
}
