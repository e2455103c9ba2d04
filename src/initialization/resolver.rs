//! DNS resolver initialization.
//!
//! This module provides the function to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for forward and reverse lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf`) when it can be
/// read, falling back to hickory's default upstreams otherwise. Timeouts and
/// attempts are capped so a dead resolver cannot stall the run indefinitely.
pub fn init_resolver() -> TokioAsyncResolver {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = crate::config::DNS_ATTEMPTS;
    // Node names are always fully qualified; never append search domains
    opts.ndots = 0;

    TokioAsyncResolver::tokio(config, opts)
}
