//! DNS resolution.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Forward resolution of the orchestrator name to every node address
//! - Reverse (PTR) lookups used to label monitoring targets

mod resolution;

// Re-export public API
pub use resolution::{resolve_domain, reverse_dns_lookup};
