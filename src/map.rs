use crate::errors::{Error, Result};
use crate::model::{Coordinates, Workout};

/// Zoom used whenever the view re-centers on a position.
pub const DEFAULT_ZOOM: u8 = 13;

/// One marker request: where to pin it and what its popup says.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub popup: String,
}

impl Marker {
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            coordinates: workout.coordinates,
            popup: format!("{}{}", workout.kind.emoji(), workout.description),
        }
    }
}

/// Rendering seam. The widget that draws tiles and pins is somebody else's
/// problem; the controller only emits marker and re-center requests.
pub trait MapView {
    fn place_marker(&mut self, marker: Marker);
    fn recenter(&mut self, center: Coordinates, zoom: u8);
}

/// Map stand-in that renders requests as log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMap;

impl MapView for LogMap {
    fn place_marker(&mut self, marker: Marker) {
        tracing::info!(
            lat = marker.coordinates.lat(),
            lng = marker.coordinates.lng(),
            popup = %marker.popup,
            "marker"
        );
    }

    fn recenter(&mut self, center: Coordinates, zoom: u8) {
        tracing::info!(lat = center.lat(), lng = center.lng(), zoom, "recenter");
    }
}

/// A single "where are we" query, answered once per session.
pub trait PositionProvider {
    fn current_position(&self) -> Result<Coordinates>;
}

/// Position handed in up front (e.g. from CLI flags); `None` is the
/// provider-failed case and simply disables map features downstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPosition(pub Option<Coordinates>);

impl PositionProvider for FixedPosition {
    fn current_position(&self) -> Result<Coordinates> {
        self.0.ok_or(Error::GeolocationUnavailable)
    }
}
