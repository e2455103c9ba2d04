// storage/mod.rs
// Database operations module

pub mod airports;
pub mod associations;
pub mod migrations;
pub mod models;
pub mod pool;
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use airports::{load_airports, replace_airports};
pub use associations::{list_ip_locations, upsert_ip_location};
pub use migrations::run_migrations;
pub use models::IpLocation;
pub use pool::init_db_pool_with_path;
