//! Core domain types and collaborator traits for the map session.
//!
//! The host map toolkit implements these for its own location manager,
//! map view and directions backend.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::haversine;
use crate::polyline::{BoundingBox, Route};
use crate::tracker::Vertex;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        haversine::haversine_m(*self, *other)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lng)
    }
}

/// Distance between two coordinates, in meters.
///
/// Proximity tests and distance-from-user must share one metric.
pub trait DistanceMetric {
    fn distance_m(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Source of the user's most recent position.
///
/// Returns `None` until the first fix arrives.
pub trait LocationProvider {
    fn current_user_position(&self) -> Option<GeoPoint>;
}

/// Write side of a location provider, fed by the host's location callback.
pub trait LocationSink {
    fn record_position(&self, point: GeoPoint);
}

impl LocationProvider for Option<GeoPoint> {
    fn current_user_position(&self) -> Option<GeoPoint> {
        *self
    }
}

impl LocationProvider for GeoPoint {
    fn current_user_position(&self) -> Option<GeoPoint> {
        Some(*self)
    }
}

impl<L: LocationProvider + ?Sized> LocationProvider for &L {
    fn current_user_position(&self) -> Option<GeoPoint> {
        (**self).current_user_position()
    }
}

/// The map view that displays markers and overlays.
pub trait MapSurface {
    /// Replace the vertex markers with `vertices`, in label order.
    fn render_vertices(&mut self, vertices: &[Vertex]);

    /// Draw the polygon/polyline through a complete triangle.
    fn draw_connecting_shape(&mut self, vertices: &[Vertex]);

    /// Remove every overlay (shapes and routes). Markers stay.
    fn clear_overlays(&mut self);

    /// Draw a route overlay.
    fn draw_route(&mut self, route: &Route);

    /// Move the visible region so `bounds` is in view.
    fn fit_to(&mut self, bounds: BoundingBox);

    /// Drop a titled marker that is not part of the triangle.
    fn add_marker(&mut self, title: &str, position: GeoPoint);
}

/// Computes a travel path between two points for display.
pub trait RouteService {
    fn request_route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route, RouteError>;
}
