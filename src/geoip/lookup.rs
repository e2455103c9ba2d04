//! IP address lookup.

use std::net::IpAddr;

use maxminddb::{geoip2, MaxMindDBError};

use super::reader::GeoIpReader;
use super::types::GeoInfo;

impl GeoIpReader {
    /// Looks up an IP address in the City database.
    ///
    /// Returns `None` when the address is not in the database (private and
    /// reserved ranges never are) or the record lacks a country name or
    /// coordinates.
    pub fn lookup(&self, ip: IpAddr) -> Option<GeoInfo> {
        let city: geoip2::City = match self.reader.lookup(ip) {
            Ok(city) => city,
            Err(MaxMindDBError::AddressNotFoundError(_)) => {
                log::debug!("{ip} not found in GeoIP database");
                return None;
            }
            Err(e) => {
                log::warn!("GeoIP lookup failed for {ip}: {e}");
                return None;
            }
        };

        let country = city.country.as_ref();
        let location = city.location.as_ref();
        geo_info_from_parts(
            country.and_then(|c| english_name(&c.names)),
            country.and_then(|c| c.iso_code),
            city.city.as_ref().and_then(|c| english_name(&c.names)),
            location.and_then(|l| l.latitude),
            location.and_then(|l| l.longitude),
        )
    }
}

fn english_name<'a>(
    names: &Option<std::collections::BTreeMap<&'a str, &'a str>>,
) -> Option<&'a str> {
    names.as_ref().and_then(|n| n.get("en")).copied()
}

/// Assembles a `GeoInfo` from the fields of a City record.
fn geo_info_from_parts(
    country: Option<&str>,
    country_code: Option<&str>,
    city: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<GeoInfo> {
    Some(GeoInfo {
        country: country?.to_string(),
        country_code: country_code.map(str::to_string),
        city: city.map(str::to_string),
        latitude: latitude?,
        longitude: longitude?,
    })
}
