//! Map session: routes surface events through the tracker and back out.

use crate::error::SessionError;
use crate::haversine::Haversine;
use crate::polyline::{BoundingBox, Route};
use crate::tracker::{TapEvent, TapOutcome, TrackerOptions, TriangleTracker};
use crate::traits::{
    DistanceMetric, GeoPoint, LocationProvider, LocationSink, MapSurface, RouteService,
};

/// Marker title for long-press pins.
pub const FAVORITE_TITLE: &str = "my favorite";

/// Marker title for the user's own position.
pub const MY_LOCATION_TITLE: &str = "my location";

/// Visible span around the user after a location update, in degrees.
pub const USER_REGION_SPAN_DEG: f64 = 0.05;

/// Padding around a drawn route when fitting the visible region, in degrees.
const ROUTE_FIT_MARGIN_DEG: f64 = 0.01;

/// One map screen's worth of state and collaborators.
#[derive(Debug)]
pub struct MapSession<L, S, R, M = Haversine> {
    tracker: TriangleTracker<M>,
    location: L,
    surface: S,
    routes: R,
    route_enabled: bool,
}

impl<L, S, R> MapSession<L, S, R>
where
    L: LocationProvider,
    S: MapSurface,
    R: RouteService,
{
    pub fn new(location: L, surface: S, routes: R, options: TrackerOptions) -> Self {
        Self::with_tracker(TriangleTracker::new(options), location, surface, routes)
    }
}

impl<L, S, R, M> MapSession<L, S, R, M>
where
    L: LocationProvider,
    S: MapSurface,
    R: RouteService,
    M: DistanceMetric,
{
    pub fn with_tracker(tracker: TriangleTracker<M>, location: L, surface: S, routes: R) -> Self {
        Self {
            tracker,
            location,
            surface,
            routes,
            route_enabled: false,
        }
    }

    /// Handle a pin-drop tap and bring the surface in line with the tracker.
    pub fn on_tap(&mut self, point: GeoPoint) -> TapOutcome {
        let outcome = self.tracker.handle_tap(point, &self.location);

        let shape_invalidated = outcome
            .events
            .iter()
            .any(|event| matches!(event, TapEvent::VertexRemoved(_) | TapEvent::AllCleared));
        if shape_invalidated {
            self.surface.clear_overlays();
        }

        self.surface.render_vertices(self.tracker.vertices());

        if outcome.contains(TapEvent::TriangleComplete) {
            self.surface.draw_connecting_shape(self.tracker.vertices());
        }

        self.route_enabled = outcome.route_enabled;
        outcome
    }

    /// Drop a favorite marker. Favorites never become vertices.
    pub fn on_long_press(&mut self, point: GeoPoint) {
        tracing::debug!(lat = point.lat, lng = point.lng, "adding favorite marker");
        self.surface.add_marker(FAVORITE_TITLE, point);
    }

    /// Request a route from the user to the last tapped point and draw it.
    ///
    /// On failure the surface is left untouched.
    pub fn draw_route(&mut self) -> Result<Route, SessionError> {
        let from = self
            .location
            .current_user_position()
            .ok_or(SessionError::PositionUnavailable)?;
        let to = self.tracker.destination().ok_or(SessionError::NoDestination)?;

        let route = self.routes.request_route(from, to).map_err(|err| {
            tracing::warn!(error = %err, "route unavailable, nothing drawn");
            SessionError::from(err)
        })?;

        self.surface.clear_overlays();
        self.surface.draw_route(&route);
        if let Some(bounds) = route.geometry.bounding_box() {
            self.surface.fit_to(bounds.padded(ROUTE_FIT_MARGIN_DEG));
        }
        tracing::info!(distance_m = route.distance_m, duration_s = route.duration_s, "route drawn");

        Ok(route)
    }

    /// Discard the triangle and its overlays.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.surface.clear_overlays();
        self.surface.render_vertices(self.tracker.vertices());
    }

    /// Whether the route control should be shown.
    pub fn route_enabled(&self) -> bool {
        self.route_enabled
    }

    pub fn tracker(&self) -> &TriangleTracker<M> {
        &self.tracker
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<L, S, R, M> MapSession<L, S, R, M>
where
    L: LocationProvider + LocationSink,
    S: MapSurface,
    R: RouteService,
    M: DistanceMetric,
{
    /// Host entry point for a new location fix.
    ///
    /// Records the fix for later taps, marks it on the surface and centers
    /// the visible region on it.
    pub fn on_location_update(&mut self, point: GeoPoint) {
        self.location.record_position(point);
        self.surface.add_marker(MY_LOCATION_TITLE, point);
        self.surface.fit_to(BoundingBox::around(point, USER_REGION_SPAN_DEG / 2.0));
    }
}
