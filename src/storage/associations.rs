//! IP/location association upserts.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::storage::models::IpLocation;

/// Records that `ip` was last seen serving `location`.
///
/// Inserts a new row or overwrites the location and timestamp of the existing
/// row for the same IP. The timestamp is stored as UTC text with millisecond
/// precision, the format `CURRENT_TIMESTAMP` defaults use.
pub async fn upsert_ip_location(
    pool: &SqlitePool,
    ip: &str,
    location: &str,
    checked_at_ms: i64,
) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO ip_addresses (ip, location, last_checked)
         VALUES (?, ?, strftime('%Y-%m-%d %H:%M:%f', ? / 1000.0, 'unixepoch'))
         ON CONFLICT(ip) DO UPDATE SET
            location=excluded.location,
            last_checked=excluded.last_checked",
    )
    .bind(ip)
    .bind(location)
    .bind(checked_at_ms)
    .execute(pool)
    .await?;

    Ok(())
}

/// Lists every stored association, ordered by IP.
pub async fn list_ip_locations(pool: &SqlitePool) -> Result<Vec<IpLocation>, DatabaseError> {
    let rows = sqlx::query_as::<_, IpLocation>(
        "SELECT ip, location,
                CAST(ROUND((julianday(last_checked) - 2440587.5) * 86400000.0) AS INTEGER)
                    AS last_checked_ms
         FROM ip_addresses
         ORDER BY ip",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
