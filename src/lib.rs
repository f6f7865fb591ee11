//! triangle-pins map session core
//!
//! Tap-to-vertex tracking for a three-point triangle overlay, plus the
//! location, surface and routing seams a host map toolkit plugs into.

pub mod error;
pub mod haversine;
pub mod location;
pub mod osrm;
pub mod polyline;
pub mod session;
pub mod tracker;
pub mod traits;

pub use traits::GeoPoint;
pub use tracker::{TapEvent, TapOutcome, TrackerOptions, TriangleTracker, Vertex, VertexLabel};
