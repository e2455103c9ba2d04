//! Airport reference data.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use sqlx::{FromRow, SqlitePool};

use crate::error_handling::ReferenceDataError;
use crate::storage::replace_airports;

/// An airport with coordinates, keyed by IATA code.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AirportRecord {
    pub iata_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Row shape of the airport CSV; most public datasets leave the IATA code or
/// coordinates blank for heliports and closed fields.
#[derive(Debug, Deserialize)]
struct AirportCsvRow {
    iata_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl AirportCsvRow {
    fn into_record(self) -> Option<AirportRecord> {
        let iata_code = self.iata_code?.trim().to_uppercase();
        if iata_code.is_empty() {
            return None;
        }
        let latitude = self.latitude.filter(|lat| (-90.0..=90.0).contains(lat))?;
        let longitude = self.longitude.filter(|lon| (-180.0..=180.0).contains(lon))?;
        Some(AirportRecord {
            iata_code,
            latitude,
            longitude,
        })
    }
}

/// Reads airports from a CSV with `iata_code`, `latitude` and `longitude` columns.
///
/// Rows without an IATA code or with missing or out-of-range coordinates are
/// skipped. Row order is preserved.
pub fn read_airport_csv(path: &Path) -> Result<Vec<AirportRecord>, ReferenceDataError> {
    let to_error = |source| ReferenceDataError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let reader = csv::Reader::from_path(path).map_err(to_error)?;
    parse_airports(reader).map_err(to_error)
}

fn parse_airports<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<AirportRecord>, csv::Error> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<AirportCsvRow>() {
        match row?.into_record() {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("Skipped {skipped} airport rows without IATA code or coordinates");
    }
    Ok(records)
}

/// Reloads the airport table from `path`: delete everything, then insert every row.
///
/// Returns the number of airports stored.
pub async fn reload_airports(pool: &SqlitePool, path: &Path) -> Result<u64, ReferenceDataError> {
    let records = read_airport_csv(path)?;
    let inserted = replace_airports(pool, &records).await?;
    log::info!("Loaded {inserted} airports from {}", path.display());
    Ok(inserted)
}
