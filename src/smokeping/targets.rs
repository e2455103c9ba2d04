//! Monitoring targets: which node IPs serve which declared location.

use std::net::IpAddr;

use hickory_resolver::TokioAsyncResolver;

use crate::config::UNKNOWN_HOSTNAME;
use crate::dns::reverse_dns_lookup;
use crate::locations::label_country_code;

/// Location label -> node IPs, both in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationAssignments {
    entries: Vec<(String, Vec<IpAddr>)>,
}

impl LocationAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `ip` to the list for `location`, creating the list on first use.
    pub fn push(&mut self, location: &str, ip: IpAddr) {
        match self.entries.iter_mut().find(|(label, _)| label == location) {
            Some((_, ips)) => ips.push(ip),
            None => self.entries.push((location.to_string(), vec![ip])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IpAddr])> {
        self.entries
            .iter()
            .map(|(label, ips)| (label.as_str(), ips.as_slice()))
    }

    /// Total number of (location, ip) pairs.
    pub fn target_count(&self) -> usize {
        self.entries.iter().map(|(_, ips)| ips.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One monitored host in the generated config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    pub location: String,
    pub country_code: String,
    pub ip: IpAddr,
    pub hostname: String,
}

impl TargetEntry {
    pub fn new(location: &str, ip: IpAddr, hostname: Option<String>) -> Self {
        Self {
            location: location.to_string(),
            country_code: label_country_code(location),
            ip,
            hostname: hostname.unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string()),
        }
    }
}

/// Reverse-resolves every assigned IP and returns the entries in emission order.
pub async fn build_entries(
    assignments: &LocationAssignments,
    resolver: &TokioAsyncResolver,
) -> Vec<TargetEntry> {
    let mut entries = Vec::with_capacity(assignments.target_count());
    for (location, ips) in assignments.iter() {
        for &ip in ips {
            let hostname = reverse_dns_lookup(ip, resolver).await;
            entries.push(TargetEntry::new(location, ip, hostname));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(203, 0, 113, last))
    }

    #[test]
    fn test_assignments_keep_insertion_order() {
        let mut assignments = LocationAssignments::new();
        assignments.push("LPT-US", ip(1));
        assignments.push("FRA-DE", ip(2));
        assignments.push("LPT-US", ip(3));

        let collected: Vec<(&str, Vec<IpAddr>)> = assignments
            .iter()
            .map(|(label, ips)| (label, ips.to_vec()))
            .collect();
        assert_eq!(
            collected,
            vec![("LPT-US", vec![ip(1), ip(3)]), ("FRA-DE", vec![ip(2)])]
        );
        assert_eq!(assignments.target_count(), 3);
    }

    #[test]
    fn test_empty_assignments() {
        let assignments = LocationAssignments::new();
        assert!(assignments.is_empty());
        assert_eq!(assignments.target_count(), 0);
    }

    #[test]
    fn test_target_entry_defaults_hostname() {
        let entry = TargetEntry::new("LPT-us", ip(9), None);
        assert_eq!(entry.hostname, "Unknown");
        assert_eq!(entry.country_code, "US");

        let named = TargetEntry::new("LPT-US", ip(9), Some("node9.example.net".into()));
        assert_eq!(named.hostname, "node9.example.net");
    }

    #[tokio::test]
    async fn test_build_entries_follows_assignment_order() {
        use hickory_resolver::config::{ResolverConfig, ResolverOpts};

        let mut opts = ResolverOpts::default();
        opts.timeout = std::time::Duration::from_secs(1);
        opts.attempts = 1;
        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), opts);

        let mut assignments = LocationAssignments::new();
        assignments.push("LPT-US", IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)));
        assignments.push("FRA-DE", IpAddr::V4(Ipv4Addr::new(192, 0, 2, 2)));

        let entries = build_entries(&assignments, &resolver).await;
        let locations: Vec<&str> = entries.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(locations, vec!["LPT-US", "FRA-DE"]);
        // Documentation addresses have no PTR records
        assert!(entries.iter().all(|e| e.hostname == "Unknown"));
    }
}
