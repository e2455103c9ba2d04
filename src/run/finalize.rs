//! Run finalization.
//!
//! Renders the Smokeping config from the probe results, then prints or writes
//! it and releases the run resources.

use log::info;

use crate::error_handling::RunError;
use crate::smokeping::{generate_config, save_config, PreambleSettings};

use super::resources::{ProbeSummary, RunReport, RunResources};

/// Finalize a run and produce the report.
///
/// 1. Render the whole document in memory (reverse DNS per target)
/// 2. Keep it for printing when dry-running, otherwise overwrite the output file
/// 3. Close the database pool
///
/// # Errors
///
/// Returns `RunError::Output` when the config file cannot be written. The
/// pool is closed either way.
pub async fn finalize_run(
    resources: RunResources,
    summary: ProbeSummary,
) -> Result<RunReport, RunError> {
    let settings = PreambleSettings::from(&resources.config);
    let document = generate_config(&settings, &summary.assignments, &resources.resolver).await;
    let targets = summary.assignments.target_count();
    info!("Rendered Smokeping config with {targets} target(s)");

    let written = if resources.config.dry_run {
        Ok(None)
    } else {
        save_config(&document, &resources.config.output)
            .await
            .map(|()| Some(resources.config.output.clone()))
    };

    resources.pool.close().await;
    let written_to = written?;

    Ok(RunReport {
        matches: summary.matches,
        resolved: summary.resolved,
        reachable: summary.reachable,
        targets,
        document: written_to.is_none().then_some(document),
        written_to,
    })
}
