//! Test fixtures for triangle-pins.
//!
//! Provides:
//! - Real Toronto locations (from OpenStreetMap)
//! - A recording map surface and canned route services

#![allow(dead_code)]

use std::cell::Cell;

use triangle_pins::error::RouteError;
use triangle_pins::polyline::{BoundingBox, Polyline, Route};
use triangle_pins::traits::{GeoPoint, MapSurface, RouteService};
use triangle_pins::tracker::Vertex;

pub const UNION_STATION: GeoPoint = GeoPoint::new(43.6453, -79.3806);
pub const CN_TOWER: GeoPoint = GeoPoint::new(43.6426, -79.3871);
pub const ST_LAWRENCE_MARKET: GeoPoint = GeoPoint::new(43.6487, -79.3716);
pub const CASA_LOMA: GeoPoint = GeoPoint::new(43.6780, -79.4094);
pub const HIGH_PARK: GeoPoint = GeoPoint::new(43.6465, -79.4637);

/// Everything the session asked the surface to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    RenderVertices(Vec<Vertex>),
    DrawConnectingShape(Vec<GeoPoint>),
    ClearOverlays,
    DrawRoute(Route),
    FitTo(BoundingBox),
    AddMarker(String, GeoPoint),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn take(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn rendered_labels(&self) -> Option<Vec<String>> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::RenderVertices(vertices) => {
                Some(vertices.iter().map(|v| v.label.to_string()).collect())
            }
            _ => None,
        })
    }
}

impl MapSurface for RecordingSurface {
    fn render_vertices(&mut self, vertices: &[Vertex]) {
        self.calls.push(SurfaceCall::RenderVertices(vertices.to_vec()));
    }

    fn draw_connecting_shape(&mut self, vertices: &[Vertex]) {
        self.calls.push(SurfaceCall::DrawConnectingShape(
            vertices.iter().map(|v| v.position).collect(),
        ));
    }

    fn clear_overlays(&mut self) {
        self.calls.push(SurfaceCall::ClearOverlays);
    }

    fn draw_route(&mut self, route: &Route) {
        self.calls.push(SurfaceCall::DrawRoute(route.clone()));
    }

    fn fit_to(&mut self, bounds: BoundingBox) {
        self.calls.push(SurfaceCall::FitTo(bounds));
    }

    fn add_marker(&mut self, title: &str, position: GeoPoint) {
        self.calls.push(SurfaceCall::AddMarker(title.to_string(), position));
    }
}

/// Returns a straight two-point route and counts requests.
#[derive(Debug, Default)]
pub struct StraightLineRoutes {
    pub requests: Cell<usize>,
}

impl RouteService for StraightLineRoutes {
    fn request_route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route, RouteError> {
        self.requests.set(self.requests.get() + 1);
        Ok(Route {
            geometry: Polyline::new(vec![from, to]),
            distance_m: from.distance_m(&to),
            duration_s: 60.0,
        })
    }
}

/// Always answers that no route exists.
#[derive(Debug, Default)]
pub struct NoRoutes;

impl RouteService for NoRoutes {
    fn request_route(&self, _from: GeoPoint, _to: GeoPoint) -> Result<Route, RouteError> {
        Err(RouteError::NoRoute("NoRoute".to_string()))
    }
}
