//! GPU location specification parsing.
//!
//! Operators declare where their GPUs are hosted as `LABEL-CODE` tokens, e.g.
//! `LPT-US,FRA-DE,SIN-SGP`. The label is the whole token; the code after the
//! last hyphen is an ISO alpha-2 or alpha-3 country code.

mod source;

pub use source::read_location_spec;

use crate::error_handling::LocationError;
use crate::geoip::GeoInfo;
use crate::reference::{Country, CountryCodes};

/// A declared GPU hosting location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    /// Full token as given, e.g. `LPT-US`
    pub label: String,
    pub country: Country,
}

impl TargetLocation {
    /// Upper-cased country code suffix of the label (`LPT-us` -> `US`).
    pub fn country_code(&self) -> String {
        label_country_code(&self.label)
    }

    /// Whether a geolocated node lies in this location's country.
    ///
    /// Compares the GeoIP English country name, or the ISO code when the
    /// database provides one, since name spellings differ between data sets.
    pub fn matches(&self, geo: &GeoInfo) -> bool {
        if geo.country == self.country.name {
            return true;
        }
        geo.country_code
            .as_deref()
            .is_some_and(|code| code.eq_ignore_ascii_case(&self.country.alpha2))
    }
}

/// Upper-cased segment after the last hyphen of a location label.
pub fn label_country_code(label: &str) -> String {
    label
        .rsplit_once('-')
        .map(|(_, code)| code)
        .unwrap_or(label)
        .to_uppercase()
}

/// Declared locations in first-seen order, labels unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetLocations {
    locations: Vec<TargetLocation>,
}

impl TargetLocations {
    pub fn iter(&self) -> impl Iterator<Item = &TargetLocation> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&TargetLocation> {
        self.locations.iter().find(|l| l.label == label)
    }

    /// Every declared location in the given node's country.
    pub fn matching<'a>(&'a self, geo: &'a GeoInfo) -> impl Iterator<Item = &'a TargetLocation> {
        self.locations.iter().filter(move |l| l.matches(geo))
    }
}

/// Parses a comma-separated `LABEL-CODE` list into target locations.
///
/// Whitespace around tokens is trimmed and empty tokens are ignored. Parsing
/// stops at the first bad token; no partial result is returned.
///
/// # Errors
///
/// - `MalformedToken` when a token has no hyphen, or an empty label or code
/// - `UnknownCountryCode` when the code is not in `codes`
/// - `DuplicateLabel` when a label repeats
/// - `Empty` when there are no tokens at all
pub fn parse_locations(
    spec: &str,
    codes: &CountryCodes,
) -> Result<TargetLocations, LocationError> {
    let mut locations: Vec<TargetLocation> = Vec::new();

    for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (prefix, code) = token
            .rsplit_once('-')
            .ok_or_else(|| LocationError::MalformedToken(token.to_string()))?;
        if prefix.trim().is_empty() || code.trim().is_empty() {
            return Err(LocationError::MalformedToken(token.to_string()));
        }

        let country = codes
            .get(code)
            .ok_or_else(|| LocationError::UnknownCountryCode {
                token: token.to_string(),
                code: code.to_string(),
            })?;

        if locations.iter().any(|l| l.label == token) {
            return Err(LocationError::DuplicateLabel(token.to_string()));
        }

        locations.push(TargetLocation {
            label: token.to_string(),
            country: country.clone(),
        });
    }

    if locations.is_empty() {
        return Err(LocationError::Empty);
    }

    Ok(TargetLocations { locations })
}
