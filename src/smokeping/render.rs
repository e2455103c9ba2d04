//! Smokeping config rendering and persistence.

use std::fmt::Write as _;
use std::path::Path;

use hickory_resolver::TokioAsyncResolver;

use super::preamble::{render_preamble, PreambleSettings};
use super::targets::{build_entries, LocationAssignments, TargetEntry};
use crate::error_handling::OutputError;

/// Renders the full config document: preamble, then one stanza per entry.
///
/// Pure function of its inputs; identical entries give byte-identical output.
pub fn render_config(settings: &PreambleSettings, entries: &[TargetEntry]) -> String {
    let mut output = render_preamble(settings);
    for entry in entries {
        // Writing to a String cannot fail
        let _ = write!(
            output,
            "++ {location} ({code})\n\
             menu = {location}\n\
             title = {location} / {ip} / {hostname}\n\
             host = {ip}\n\n",
            location = entry.location,
            code = entry.country_code,
            ip = entry.ip,
            hostname = entry.hostname,
        );
    }
    output
}

/// Reverse-resolves every assigned node and renders the document.
///
/// The whole document is built in memory; nothing is written here.
pub async fn generate_config(
    settings: &PreambleSettings,
    assignments: &LocationAssignments,
    resolver: &TokioAsyncResolver,
) -> String {
    let entries = build_entries(assignments, resolver).await;
    render_config(settings, &entries)
}

/// Overwrites `path` with `document`.
///
/// The write is not atomic; an interrupted write can leave a truncated file,
/// which the next run replaces.
pub async fn save_config(document: &str, path: &Path) -> Result<(), OutputError> {
    tokio::fs::write(path, document)
        .await
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Smokeping config written to {}", path.display());
    Ok(())
}
