//! Bounding regions and camera fit requests

use crate::map::surface::RenderSurface;

/// Padding applied around a fitted track, in screen pixels.
pub const FIT_PADDING_PX: f64 = 100.0;
/// Camera transition duration for a fit, in milliseconds.
pub const FIT_DURATION_MS: u64 = 2000;

/// Axis-aligned lon/lat bounding region.
///
/// A single coordinate yields a degenerate (zero-area) but valid region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLatBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl LonLatBounds {
    pub fn new(coordinate: [f64; 2]) -> Self {
        Self {
            west: coordinate[0],
            south: coordinate[1],
            east: coordinate[0],
            north: coordinate[1],
        }
    }

    /// Minimal region covering all given coordinates; `None` when empty.
    pub fn from_coordinates(coordinates: impl IntoIterator<Item = [f64; 2]>) -> Option<Self> {
        let mut iter = coordinates.into_iter();
        let mut bounds = Self::new(iter.next()?);
        for coordinate in iter {
            bounds.extend(coordinate);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, coordinate: [f64; 2]) {
        self.west = self.west.min(coordinate[0]);
        self.east = self.east.max(coordinate[0]);
        self.south = self.south.min(coordinate[1]);
        self.north = self.north.max(coordinate[1]);
    }

    pub fn center(&self) -> [f64; 2] {
        [(self.west + self.east) / 2.0, (self.south + self.north) / 2.0]
    }
}

/// Fit the camera to the given coordinates; a no-op when there are none.
pub fn fit_to_coordinates<S: RenderSurface>(
    surface: &mut S,
    coordinates: impl IntoIterator<Item = [f64; 2]>,
) {
    if let Some(bounds) = LonLatBounds::from_coordinates(coordinates) {
        surface.fit_bounds(bounds, FIT_PADDING_PX, FIT_DURATION_MS);
    }
}
