//! Polyline representation for route geometries.
//!
//! Routes arrive from the routing backend already decoded into coordinate
//! sequences. The map surface only needs the points and their extent.

use serde::{Deserialize, Serialize};

use crate::traits::GeoPoint;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest latitude/longitude box containing every point.
    ///
    /// Returns `None` for an empty polyline.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = *self.points.first()?;
        let bounds = self.points[1..].iter().fold(
            BoundingBox { min: first, max: first },
            |bounds, point| BoundingBox {
                min: GeoPoint::new(bounds.min.lat.min(point.lat), bounds.min.lng.min(point.lng)),
                max: GeoPoint::new(bounds.max.lat.max(point.lat), bounds.max.lng.max(point.lng)),
            },
        );
        Some(bounds)
    }
}

/// Axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// South-west corner.
    pub min: GeoPoint,
    /// North-east corner.
    pub max: GeoPoint,
}

impl BoundingBox {
    /// Grow the box by `margin_deg` on every side, clamping latitude to the poles.
    pub fn padded(self, margin_deg: f64) -> Self {
        Self {
            min: GeoPoint::new((self.min.lat - margin_deg).max(-90.0), self.min.lng - margin_deg),
            max: GeoPoint::new((self.max.lat + margin_deg).min(90.0), self.max.lng + margin_deg),
        }
    }

    /// Square box of `half_span_deg` on each side of `center`.
    pub fn around(center: GeoPoint, half_span_deg: f64) -> Self {
        Self { min: center, max: center }.padded(half_span_deg)
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min.lat..=self.max.lat).contains(&point.lat)
            && (self.min.lng..=self.max.lng).contains(&point.lng)
    }
}

/// A drivable route returned by a [`RouteService`](crate::traits::RouteService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub geometry: Polyline,
    /// Total length in meters.
    pub distance_m: f64,
    /// Expected travel time in seconds.
    pub duration_s: f64,
}
