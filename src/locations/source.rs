//! Reading the location specification from its source.

use std::io::ErrorKind;

use crate::config::LocationSource;
use crate::error_handling::InputError;

/// Returns the raw `LABEL-CODE,...` specification for `source`.
///
/// File sources may spread locations over several lines; blank lines and lines
/// starting with `#` are ignored, and line breaks count as separators.
pub async fn read_location_spec(source: &LocationSource) -> Result<String, InputError> {
    match source {
        LocationSource::Inline(spec) => Ok(spec.trim().to_string()),
        LocationSource::File(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    InputError::ConfigFileNotFound(path.clone())
                } else {
                    InputError::ConfigFileUnreadable {
                        path: path.clone(),
                        source: e,
                    }
                }
            })?;
            Ok(flatten_spec_file(&content))
        }
    }
}

fn flatten_spec_file(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join(",")
}
