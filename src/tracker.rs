//! Triangle vertex tracker.
//!
//! Turns map taps into at most three labeled vertices. While fewer than three
//! exist, taps append. Once the triangle is complete, a tap near a vertex
//! removes it and a tap far from all of them starts over.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::haversine::Haversine;
use crate::traits::{DistanceMetric, GeoPoint, LocationProvider};

/// Maximum number of vertices held at once.
pub const VERTEX_CAPACITY: usize = 3;

/// Default distance under which a tap hits an existing vertex.
pub const DEFAULT_PROXIMITY_THRESHOLD_M: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct TrackerOptions {
    /// A tap at most this many meters from a vertex counts as hitting it.
    pub proximity_threshold_m: f64,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            proximity_threshold_m: DEFAULT_PROXIMITY_THRESHOLD_M,
        }
    }
}

/// Vertex label, fixed by position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VertexLabel {
    A,
    B,
    C,
}

impl VertexLabel {
    pub const ALL: [VertexLabel; VERTEX_CAPACITY] =
        [VertexLabel::A, VertexLabel::B, VertexLabel::C];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VertexLabel::A => "A",
            VertexLabel::B => "B",
            VertexLabel::C => "C",
        }
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One corner of the triangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub label: VertexLabel,
    pub position: GeoPoint,
    /// Distance from the user when the vertex was placed. `None` if no fix
    /// was available at that moment.
    pub distance_from_user_m: Option<f64>,
}

impl Vertex {
    /// Marker subtitle describing how far the vertex is from the user.
    pub fn subtitle(&self) -> String {
        match self.distance_from_user_m {
            Some(distance) => format!("Point is {:.2} m away from you", distance),
            None => "Distance from you is unknown".to_string(),
        }
    }
}

/// Side signals produced by a tap, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapEvent {
    VertexAdded(VertexLabel),
    /// The third vertex was placed; the connecting shape should be drawn.
    TriangleComplete,
    /// Carries the label the vertex had before it was removed.
    VertexRemoved(VertexLabel),
    AllCleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TapOutcome {
    pub events: Vec<TapEvent>,
    /// The tapped point, usable as a route destination.
    pub destination: GeoPoint,
    /// Route drawing controls should be enabled after any tap.
    pub route_enabled: bool,
}

impl TapOutcome {
    pub fn contains(&self, event: TapEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Owns the ordered vertex sequence for one map session.
#[derive(Debug, Clone)]
pub struct TriangleTracker<M = Haversine> {
    vertices: Vec<Vertex>,
    options: TrackerOptions,
    metric: M,
    destination: Option<GeoPoint>,
}

impl Default for TriangleTracker {
    fn default() -> Self {
        Self::new(TrackerOptions::default())
    }
}

impl TriangleTracker {
    pub fn new(options: TrackerOptions) -> Self {
        Self::with_metric(options, Haversine)
    }
}

impl<M: DistanceMetric> TriangleTracker<M> {
    pub fn with_metric(options: TrackerOptions, metric: M) -> Self {
        Self {
            vertices: Vec::with_capacity(VERTEX_CAPACITY),
            options,
            metric,
            destination: None,
        }
    }

    /// Apply a tap at `point`, reading the user's position from `location`.
    pub fn handle_tap<L>(&mut self, point: GeoPoint, location: &L) -> TapOutcome
    where
        L: LocationProvider + ?Sized,
    {
        let user = location.current_user_position();
        if user.is_none() {
            tracing::debug!("no user position yet, vertex distance will be unknown");
        }

        let mut events = Vec::new();

        if self.vertices.len() < VERTEX_CAPACITY {
            let label = self.push_vertex(point, user);
            events.push(TapEvent::VertexAdded(label));
            if self.is_complete() {
                tracing::debug!("triangle complete");
                events.push(TapEvent::TriangleComplete);
            }
        } else if let Some(index) = self.closest_hit(point) {
            let removed = self.vertices.remove(index);
            self.relabel();
            tracing::info!(label = %removed.label, "removed vertex near tap");
            events.push(TapEvent::VertexRemoved(removed.label));
        } else {
            self.vertices.clear();
            tracing::info!("tap far from every vertex, cleared triangle");
            events.push(TapEvent::AllCleared);
            let label = self.push_vertex(point, user);
            events.push(TapEvent::VertexAdded(label));
        }

        self.destination = Some(point);

        TapOutcome {
            events,
            destination: point,
            route_enabled: true,
        }
    }

    /// True iff `p1` and `p2` are within the proximity threshold.
    pub fn is_close(&self, p1: GeoPoint, p2: GeoPoint) -> bool {
        let distance = self.metric.distance_m(p1, p2);
        tracing::trace!(distance, "proximity check");
        distance.abs() <= self.options.proximity_threshold_m
    }

    /// Drop every vertex.
    pub fn reset(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, label: VertexLabel) -> Option<&Vertex> {
        self.vertices.get(label.index())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.vertices.len() == VERTEX_CAPACITY
    }

    /// Last tapped point, kept across resets.
    pub fn destination(&self) -> Option<GeoPoint> {
        self.destination
    }

    /// Corner positions in label order, once all three exist.
    pub fn triangle(&self) -> Option<[GeoPoint; 3]> {
        match self.vertices.as_slice() {
            [a, b, c] => Some([a.position, b.position, c.position]),
            _ => None,
        }
    }

    /// Side lengths AB, BC and CA in meters.
    pub fn side_lengths_m(&self) -> Option<[f64; 3]> {
        let [a, b, c] = self.triangle()?;
        Some([
            self.metric.distance_m(a, b),
            self.metric.distance_m(b, c),
            self.metric.distance_m(c, a),
        ])
    }

    pub fn perimeter_m(&self) -> Option<f64> {
        self.side_lengths_m().map(|sides| sides.iter().sum())
    }

    fn push_vertex(&mut self, point: GeoPoint, user: Option<GeoPoint>) -> VertexLabel {
        let index = self.vertices.len();
        // Callers only push below capacity.
        let label = VertexLabel::ALL[index];
        let distance_from_user_m = user.map(|user| self.metric.distance_m(user, point));
        tracing::debug!(
            %label,
            lat = point.lat,
            lng = point.lng,
            ?distance_from_user_m,
            "added vertex"
        );
        self.vertices.push(Vertex {
            label,
            position: point,
            distance_from_user_m,
        });
        label
    }

    /// Index of the first vertex within the threshold of `point`.
    fn closest_hit(&self, point: GeoPoint) -> Option<usize> {
        self.vertices
            .iter()
            .position(|vertex| self.is_close(point, vertex.position))
    }

    fn relabel(&mut self) {
        for (vertex, label) in self.vertices.iter_mut().zip(VertexLabel::ALL) {
            vertex.label = label;
        }
    }
}
