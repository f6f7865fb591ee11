//! Last-value-wins user position cell.
//!
//! The host's location callback calls [`LatestPosition::update`] from
//! whatever thread it runs on; the session reads the newest fix on each tap.

use std::sync::{Arc, PoisonError, RwLock};

use crate::traits::{GeoPoint, LocationProvider, LocationSink};

#[derive(Debug, Clone, Default)]
pub struct LatestPosition {
    inner: Arc<RwLock<Option<GeoPoint>>>,
}

impl LatestPosition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new fix, replacing any previous one.
    pub fn update(&self, point: GeoPoint) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(point);
        tracing::trace!(lat = point.lat, lng = point.lng, "user position updated");
    }

    /// Forget the current fix, e.g. when location access is revoked.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl LocationProvider for LatestPosition {
    fn current_user_position(&self) -> Option<GeoPoint> {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocationSink for LatestPosition {
    fn record_position(&self, point: GeoPoint) {
        self.update(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_first_fix() {
        let position = LatestPosition::new();
        assert_eq!(position.current_user_position(), None);
    }

    #[test]
    fn test_last_value_wins() {
        let position = LatestPosition::new();
        position.update(GeoPoint::new(1.0, 1.0));
        position.update(GeoPoint::new(2.0, 2.0));
        assert_eq!(position.current_user_position(), Some(GeoPoint::new(2.0, 2.0)));
    }

    #[test]
    fn test_clones_share_state() {
        let position = LatestPosition::new();
        let writer = position.clone();
        std::thread::spawn(move || writer.update(GeoPoint::new(43.0, -79.0)))
            .join()
            .unwrap();
        assert_eq!(position.current_user_position(), Some(GeoPoint::new(43.0, -79.0)));

        position.clear();
        assert_eq!(position.current_user_position(), None);
    }

    #[test]
    fn test_sink_writes_through() {
        let position = LatestPosition::new();
        position.record_position(GeoPoint::new(5.0, 6.0));
        assert_eq!(position.current_user_position(), Some(GeoPoint::new(5.0, 6.0)));
    }
}
