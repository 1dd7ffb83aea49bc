//! Vessel track data types

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A single position report, immutable once built.
///
/// Coordinates are `[longitude, latitude]` in degrees, matching the GeoJSON
/// wire order. `sog` is speed over ground in knots.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselPoint {
    pub timestamp: Option<DateTime<Utc>>,
    pub coordinate: [f64; 2],
    pub sog: f64,
}

/// A normalized, time-ordered track for one vessel.
///
/// `points` is kept private so the sorted-ascending-by-timestamp invariant
/// cannot be broken from outside; coordinate/timestamp/speed sequences are
/// projections over `points`, never separately stored arrays.
#[derive(Debug, Clone)]
pub struct Vessel {
    pub mmsi: String,
    pub name: String,
    pub ship_type: String,
    pub callsign: String,
    pub country: String,
    pub duration: String,
    pub distance: Option<f64>,
    pub(crate) points: Vec<VesselPoint>,
}

impl Vessel {
    /// Position reports sorted ascending by timestamp.
    pub fn points(&self) -> &[VesselPoint] {
        &self.points
    }

    /// Coordinate sequence, positionally aligned with `points()`.
    pub fn coordinates(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points.iter().map(|p| p.coordinate)
    }

    /// Timestamp sequence, positionally aligned with `points()`.
    pub fn timestamps(&self) -> impl Iterator<Item = Option<DateTime<Utc>>> + '_ {
        self.points.iter().map(|p| p.timestamp)
    }

    /// Speed-over-ground sequence, positionally aligned with `points()`.
    pub fn sog(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.sog)
    }

    pub fn first_coordinate(&self) -> Option<[f64; 2]> {
        self.points.first().map(|p| p.coordinate)
    }

    pub fn last_coordinate(&self) -> Option<[f64; 2]> {
        self.points.last().map(|p| p.coordinate)
    }
}

/// Entity map built fresh on each load, keyed by MMSI.
///
/// A `BTreeMap` keeps iteration order deterministic so derived label lists
/// and bulk map operations are stable across runs.
pub type VesselData = BTreeMap<String, Vessel>;
