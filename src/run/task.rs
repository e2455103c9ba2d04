//! Per-node probing.
//!
//! Each resolved address is pinged, geolocated and matched against every
//! declared location in its country, strictly one address at a time.

use std::net::IpAddr;

use chrono::Utc;
use log::{debug, info, warn};

use crate::error_handling::DatabaseError;
use crate::nearest::nearest_airport;
use crate::ping::is_reachable;
use crate::storage::upsert_ip_location;

use super::resources::{MatchedNode, ProbeSummary, RunResources};

/// What happened to a single resolved address.
#[derive(Debug)]
pub enum NodeOutcome {
    /// The ping probe failed
    Unreachable,
    /// Reachable, but the geo database has no record for it
    Unlocated,
    /// Reachable and located; one match per declared location in its country
    Located(Vec<MatchedNode>),
}

/// Probes one address and records every location it serves.
///
/// An association row is upserted for each matching location, so when an
/// address matches several locations the last one in declaration order is
/// what the table keeps.
///
/// # Errors
///
/// Only database failures are errors. Unreachable and unlocated nodes are
/// expected and reported through `NodeOutcome`.
pub async fn process_node(
    resources: &RunResources,
    ip: IpAddr,
) -> Result<NodeOutcome, DatabaseError> {
    let config = &resources.config;
    if !is_reachable(&config.ping_binary, ip, config.ping_count).await {
        return Ok(NodeOutcome::Unreachable);
    }

    let Some(geo) = resources.geoip.lookup(ip) else {
        debug!("{ip} has no GeoIP record, skipping");
        return Ok(NodeOutcome::Unlocated);
    };

    let mut matches = Vec::new();
    for location in resources.locations.matching(&geo) {
        let checked_at_ms = Utc::now().timestamp_millis();
        upsert_ip_location(&resources.pool, &ip.to_string(), &location.label, checked_at_ms)
            .await?;

        let airport = nearest_airport(&resources.airports, geo.latitude, geo.longitude)
            .map(|a| a.iata_code.clone());
        info!(
            "{ip} serves {} ({}, closest airport {})",
            location.label,
            geo.city_or_unknown(),
            airport.as_deref().unwrap_or("none")
        );

        matches.push(MatchedNode {
            location: location.label.clone(),
            city: geo.city_or_unknown().to_string(),
            ip,
            airport,
        });
    }

    if matches.is_empty() {
        debug!("{ip} is in {}, which no location targets", geo.country);
    }
    Ok(NodeOutcome::Located(matches))
}

/// Probes every address in resolution order and collects the matches.
///
/// # Errors
///
/// Stops at the first database failure; associations already upserted stay.
pub async fn probe_nodes(
    resources: &RunResources,
    ips: &[IpAddr],
) -> Result<ProbeSummary, DatabaseError> {
    let mut summary = ProbeSummary {
        resolved: ips.len(),
        ..Default::default()
    };

    for &ip in ips {
        match process_node(resources, ip).await? {
            NodeOutcome::Unreachable => {}
            NodeOutcome::Unlocated => summary.reachable += 1,
            NodeOutcome::Located(matches) => {
                summary.reachable += 1;
                for node in matches {
                    summary.assignments.push(&node.location, node.ip);
                    summary.matches.push(node);
                }
            }
        }
    }

    if summary.reachable < summary.resolved {
        warn!(
            "{} of {} addresses did not answer ping",
            summary.resolved - summary.reachable,
            summary.resolved
        );
    }
    Ok(summary)
}
