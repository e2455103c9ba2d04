//! Nearest-airport search by great-circle distance.

use crate::config::EARTH_RADIUS_KM;
use crate::reference::AirportRecord;

/// Great-circle distance in kilometres between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Returns the airport closest to `(lat, lon)`.
///
/// Scans every record; on equal distances the earliest record wins. A NaN
/// distance never beats a real one, and NaN against NaN counts as a tie, so a
/// NaN coordinate still yields the first record. `None` only when `airports`
/// is empty.
pub fn nearest_airport(airports: &[AirportRecord], lat: f64, lon: f64) -> Option<&AirportRecord> {
    let mut best: Option<(&AirportRecord, f64)> = None;
    for airport in airports {
        let distance = haversine_km(lat, lon, airport.latitude, airport.longitude);
        let closer = match best {
            None => true,
            Some((_, min)) => distance < min || (min.is_nan() && !distance.is_nan()),
        };
        if closer {
            best = Some((airport, distance));
        }
    }
    best.map(|(airport, _)| airport)
}
