//! IP address resolution and reverse DNS lookup.
//!
//! This module provides functions to resolve hostnames to every IP address
//! they advertise and perform reverse DNS lookups (PTR records).

use std::net::IpAddr;

use hickory_resolver::TokioAsyncResolver;

/// Resolves a hostname to all of its IP addresses (A and AAAA).
///
/// Addresses are deduplicated and returned in answer order. A failed or empty
/// resolution yields an empty vector; the failure is logged, not returned.
pub async fn resolve_domain(domain: &str, resolver: &TokioAsyncResolver) -> Vec<IpAddr> {
    match resolver.lookup_ip(domain).await {
        Ok(response) => {
            let mut ips: Vec<IpAddr> = Vec::new();
            for ip in response.iter() {
                if !ips.contains(&ip) {
                    ips.push(ip);
                }
            }
            log::debug!("{domain} resolved to {} address(es)", ips.len());
            ips
        }
        Err(e) => {
            log::warn!("Failed to resolve {domain}: {e}");
            Vec::new()
        }
    }
}

/// Performs a reverse DNS lookup (PTR record) for an IP address.
///
/// Returns the first PTR name without its trailing dot, or `None` if the
/// lookup fails or returns nothing.
pub async fn reverse_dns_lookup(ip: IpAddr, resolver: &TokioAsyncResolver) -> Option<String> {
    match resolver.reverse_lookup(ip).await {
        Ok(response) => response
            .iter()
            .next()
            .map(|name| strip_root(&name.to_utf8()).to_string()),
        Err(e) => {
            log::debug!("Reverse DNS lookup failed for {ip}: {e}");
            None
        }
    }
}

/// Drops the trailing root label dot from a fully qualified name.
pub(crate) fn strip_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
