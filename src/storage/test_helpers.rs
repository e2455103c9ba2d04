//! Shared test helpers for storage module tests.

#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::reference::AirportRecord;
#[cfg(test)]
use crate::storage::run_migrations;

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database with a single connection so every query sees
/// the same database.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Shorthand for an airport record.
#[cfg(test)]
pub fn airport(iata_code: &str, latitude: f64, longitude: f64) -> AirportRecord {
    AirportRecord {
        iata_code: iata_code.to_string(),
        latitude,
        longitude,
    }
}
