//! Smokeping `Targets` config generation.
//!
//! The document is a fixed preamble followed by one stanza per
//! (location, node) pair:
//!
//! ```text
//! ++ LPT-US (US)
//! menu = LPT-US
//! title = LPT-US / 203.0.113.10 / node10.example.net
//! host = 203.0.113.10
//! ```

mod preamble;
mod render;
mod targets;

pub use preamble::{render_preamble, PreambleSettings};
pub use render::{generate_config, render_config, save_config};
pub use targets::{build_entries, LocationAssignments, TargetEntry};
