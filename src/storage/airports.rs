//! Airport table access.

use log::debug;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::reference::AirportRecord;

/// Replaces the contents of `airport_codes` with `records`.
///
/// Runs as one transaction: every existing row is deleted, then the records are
/// inserted in order. A repeated IATA code keeps the first occurrence.
///
/// Returns the number of rows inserted.
pub async fn replace_airports(
    pool: &SqlitePool,
    records: &[AirportRecord],
) -> Result<u64, DatabaseError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM airport_codes")
        .execute(&mut *tx)
        .await?;

    let mut inserted = 0u64;
    for record in records {
        let result = sqlx::query(
            "INSERT INTO airport_codes (iata_code, latitude, longitude)
             VALUES (?, ?, ?)
             ON CONFLICT(iata_code) DO NOTHING",
        )
        .bind(&record.iata_code)
        .bind(record.latitude)
        .bind(record.longitude)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            debug!("Skipping duplicate airport {}", record.iata_code);
        }
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Loads every airport in insertion order.
pub async fn load_airports(pool: &SqlitePool) -> Result<Vec<AirportRecord>, DatabaseError> {
    let records = sqlx::query_as::<_, AirportRecord>(
        "SELECT iata_code, latitude, longitude FROM airport_codes ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_helpers::{airport, create_test_pool};

    #[tokio::test]
    async fn test_replace_airports_inserts_in_order() {
        let pool = create_test_pool().await;
        let records = vec![
            airport("JFK", 40.6413, -73.7781),
            airport("FRA", 50.0379, 8.5622),
            airport("AMS", 52.3105, 4.7683),
        ];

        let inserted = replace_airports(&pool, &records).await.unwrap();
        assert_eq!(inserted, 3);

        let loaded = load_airports(&pool).await.unwrap();
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_replace_airports_clears_previous_rows() {
        let pool = create_test_pool().await;
        replace_airports(&pool, &[airport("JFK", 40.6413, -73.7781)])
            .await
            .unwrap();
        replace_airports(&pool, &[airport("FRA", 50.0379, 8.5622)])
            .await
            .unwrap();

        let loaded = load_airports(&pool).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].iata_code, "FRA");
    }

    #[tokio::test]
    async fn test_replace_airports_keeps_first_duplicate() {
        let pool = create_test_pool().await;
        let inserted = replace_airports(
            &pool,
            &[airport("AAA", 0.0, 0.0), airport("AAA", 10.0, 10.0)],
        )
        .await
        .unwrap();
        assert_eq!(inserted, 1);

        let loaded = load_airports(&pool).await.unwrap();
        assert_eq!(loaded, vec![airport("AAA", 0.0, 0.0)]);
    }

    #[tokio::test]
    async fn test_replace_airports_with_nothing_empties_table() {
        let pool = create_test_pool().await;
        replace_airports(&pool, &[airport("JFK", 40.6413, -73.7781)])
            .await
            .unwrap();
        let inserted = replace_airports(&pool, &[]).await.unwrap();
        assert_eq!(inserted, 0);
        assert!(load_airports(&pool).await.unwrap().is_empty());
    }
}
