// storage/migrations.rs
// Database migration management

use sqlx::{Pool, Sqlite};

use crate::error_handling::DatabaseError;

/// Runs the SQLx migrations embedded from the `migrations/` directory.
///
/// The schema only uses `CREATE TABLE IF NOT EXISTS` and keeps the column
/// layout of databases written by the earlier Python tool, so those files are
/// adopted as-is and keep their stored associations.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
