//! Row types read back from the database.

use sqlx::FromRow;

/// A node's most recent association with a declared GPU location.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct IpLocation {
    pub ip: String,
    pub location: String,
    /// `last_checked` as milliseconds since the Unix epoch
    pub last_checked_ms: i64,
}
