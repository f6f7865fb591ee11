//! Haversine great-circle distance.
//!
//! Treats the Earth as a sphere of mean radius. Error versus an ellipsoidal
//! geodesic stays under 0.5%, well inside any tap proximity threshold.

use crate::traits::{DistanceMetric, GeoPoint};

/// Mean Earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine distance metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_m(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        haversine_m(from, to)
    }
}

/// Calculate haversine distance between two points in meters.
pub fn haversine_m(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}
