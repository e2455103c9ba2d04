//! ISO 3166 country code lookup.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::ReferenceDataError;

/// One country from the ISO code table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// Full English name, compared against the GeoIP country name
    pub name: String,
    #[serde(rename = "alpha-2")]
    pub alpha2: String,
    #[serde(rename = "alpha-3")]
    pub alpha3: String,
}

/// Case-insensitive lookup from alpha-2 and alpha-3 codes to countries.
#[derive(Debug, Clone, Default)]
pub struct CountryCodes {
    by_code: HashMap<String, Country>,
}

impl CountryCodes {
    /// Loads the ISO code table from a CSV with `name`, `alpha-2` and `alpha-3` columns.
    pub fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let reader = csv::Reader::from_path(path).map_err(|source| ReferenceDataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(reader).map_err(|source| ReferenceDataError::Csv {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, csv::Error> {
        let mut codes = CountryCodes::default();
        for row in reader.deserialize::<Country>() {
            codes.insert(row?);
        }
        log::debug!("Loaded {} ISO country codes", codes.by_code.len());
        Ok(codes)
    }

    /// Builds a lookup from already-parsed countries.
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut codes = CountryCodes::default();
        for country in countries {
            codes.insert(country);
        }
        codes
    }

    fn insert(&mut self, country: Country) {
        for code in [&country.alpha2, &country.alpha3] {
            let code = code.trim();
            if !code.is_empty() {
                self.by_code.insert(code.to_uppercase(), country.clone());
            }
        }
    }

    /// Looks up a country by alpha-2 or alpha-3 code, ignoring case.
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.by_code.get(&code.trim().to_uppercase())
    }

    /// Number of distinct codes (alpha-2 and alpha-3 counted separately).
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether no codes were loaded.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
