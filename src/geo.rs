//! Great-circle distance and nearest-candidate selection.
//!
//! All geofence evaluations in the engine go through these two functions.
//! Distances are in statute miles on a spherical-earth approximation,
//! which is accurate to well under a percent at city scale.

/// Earth radius in miles used by the haversine formula.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Returns the great-circle distance in miles between two coordinates.
///
/// Implements the haversine formula. The result is symmetric
/// (`distance_miles(a, b) == distance_miles(b, a)`), zero for identical
/// coordinates and finite for any finite inputs.
///
/// # Examples
///
/// ```
/// use matchday::geo::distance_miles;
///
/// // Downtown Kansas City to Arrowhead Stadium is under seven miles.
/// let d = distance_miles(39.0997, -94.5786, 39.0489, -94.4839);
/// assert!(d < 7.0);
/// ```
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Returns the candidate closest to `(lat, lon)`, or `None` for an empty set.
///
/// `position` extracts the coordinate of a candidate. The scan is linear and
/// stable: when two candidates are equidistant the first one encountered in
/// input order wins. Which one that is carries no meaning, callers must not
/// rely on a particular tie outcome beyond determinism.
pub fn nearest<'a, T>(
    lat: f64,
    lon: f64,
    candidates: &'a [T],
    position: impl Fn(&T) -> (f64, f64),
) -> Option<&'a T> {
    let mut best: Option<&T> = None;
    let mut best_distance = f64::INFINITY;

    for candidate in candidates {
        let (c_lat, c_lon) = position(candidate);
        let distance = distance_miles(lat, lon, c_lat, c_lon);
        if distance < best_distance {
            best_distance = distance;
            best = Some(candidate);
        }
    }

    best
}
