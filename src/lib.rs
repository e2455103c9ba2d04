//! smokepeer library: Smokeping target generation for Livepeer orchestrators
//!
//! This library resolves the orchestrator DNS name to every node address,
//! keeps the nodes that answer ping, geolocates them with a local GeoLite2-City
//! database and matches them against operator-declared monitoring locations.
//! The result is a Smokeping `Targets` config with one probe target per
//! (location, node) pair, plus the closest airport for each match.
//!
//! # Example
//!
//! ```no_run
//! use smokepeer::{run_smokepeer, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     gpu_locations: Some("LPT-US,FRA-DE".to_string()),
//!     dry_run: true,
//!     ..Default::default()
//! };
//!
//! let report = run_smokepeer(config).await?;
//! for node in &report.matches {
//!     println!("{} -- {} ({})", node.location, node.city, node.ip);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Every step is awaited in order;
//! nothing is spawned.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod locations;
pub mod nearest;
pub mod ping;
pub mod reference;
mod run;
pub mod smokeping;
pub mod storage;

// Re-export public API
pub use config::{Config, LocationSource, LogFormat, LogLevel};
pub use error_handling::{ExitStatus, RunError};
pub use run::{run_smokepeer, MatchedNode, RunReport};
