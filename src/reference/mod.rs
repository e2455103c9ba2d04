//! Reference data loaded once per run.
//!
//! - ISO 3166 country codes, kept in memory
//! - Airport coordinates, reloaded into SQLite and read back in CSV order

mod airports;
mod countries;

pub use airports::{read_airport_csv, reload_airports, AirportRecord};
pub use countries::{Country, CountryCodes};
