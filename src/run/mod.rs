//! Run orchestration.
//!
//! A run is strictly sequential: initialize resources, resolve the node name,
//! probe each address, then render and emit the Smokeping config.

mod finalize;
mod init;
mod resources;
mod task;
#[cfg(test)]
mod test_helpers;

use log::{info, warn};

use crate::config::Config;
use crate::dns::resolve_domain;
use crate::error_handling::RunError;

pub use resources::{MatchedNode, RunReport};

/// Runs the full pipeline with the provided configuration.
///
/// When the DNS name resolves to nothing the run ends early with an empty
/// report and the existing config file is left untouched.
///
/// # Errors
///
/// Returns the first fatal error. Use [`RunError::exit_status`] to map it to
/// the process exit code.
///
/// # Example
///
/// ```no_run
/// use smokepeer::{run_smokepeer, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     gpu_locations: Some("LPT-US,FRA-DE".to_string()),
///     dry_run: true,
///     ..Default::default()
/// };
/// let report = run_smokepeer(config).await?;
/// println!("{} matches", report.matches.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_smokepeer(config: Config) -> Result<RunReport, RunError> {
    let resources = init::init_run_resources(config).await?;

    let dns_name = resources.config.dns_name.clone();
    let ips = resolve_domain(&dns_name, &resources.resolver).await;
    if ips.is_empty() {
        warn!("{dns_name} resolved to no addresses; leaving the Smokeping config unchanged");
        resources.pool.close().await;
        return Ok(RunReport {
            matches: Vec::new(),
            resolved: 0,
            reachable: 0,
            targets: 0,
            document: None,
            written_to: None,
        });
    }
    info!("{dns_name} resolved to {} address(es)", ips.len());

    let summary = match task::probe_nodes(&resources, &ips).await {
        Ok(summary) => summary,
        Err(e) => {
            resources.pool.close().await;
            return Err(e.into());
        }
    };

    finalize::finalize_run(resources, summary).await
}
