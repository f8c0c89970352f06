//! # Distance
//!
//! Planar distance between two (latitude, longitude) points.
//!
//! Coordinates are treated as plain Cartesian units: no great-circle or
//! geodesic correction is applied.

use crate::NEARBY_RADIUS;

/// Straight Euclidean distance between two coordinate pairs.
///
/// `sqrt((lat1 - lat2)^2 + (lon1 - lon2)^2)`
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat1 - lat2;
    let dlon = lon1 - lon2;
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Returns true if the point (lat2, lon2) lies strictly within
/// [`NEARBY_RADIUS`] of (lat1, lon1).
pub fn is_nearby(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> bool {
    calculate_distance(lat1, lon1, lat2, lon2) < NEARBY_RADIUS
}
