//! Render surface abstraction
//!
//! The map backend is an external collaborator; the core only talks to this
//! trait. Geometry and paint payloads mirror the GeoJSON source / layer
//! paint shapes a Mapbox-style surface expects.

use crate::map::viewport::LonLatBounds;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

/// Marker start color (purple) and end color (green); fixed and distinct
/// from any category color so endpoints stay recognizable.
pub const START_MARKER_COLOR: &str = "#9c27b0";
pub const END_MARKER_COLOR: &str = "#4caf50";
const MARKER_STROKE_COLOR: &str = "#ffffff";

/// Drawable resource kind on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Line,
    Circle,
}

/// One point of a point-cloud resource, with its inspectable attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    pub coordinate: [f64; 2],
    pub timestamp: Option<DateTime<Utc>>,
    pub sog: f64,
}

/// Geometry payload handed to the render surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Ordered coordinate path (a LineString).
    Path(Vec<[f64; 2]>),
    /// A single marker position.
    Point([f64; 2]),
    /// One feature per position report, attributes attached.
    PointSeries(Vec<PointFeature>),
}

impl Geometry {
    pub fn to_geojson(&self) -> Value {
        match self {
            Geometry::Path(coordinates) => json!({
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "LineString", "coordinates": coordinates },
            }),
            Geometry::Point(coordinate) => json!({
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": coordinate },
            }),
            Geometry::PointSeries(features) => json!({
                "type": "FeatureCollection",
                "features": features
                    .iter()
                    .map(|f| json!({
                        "type": "Feature",
                        "properties": {
                            "timestamp": f.timestamp.map(|t| t.to_rfc3339()),
                            "sog": f.sog,
                        },
                        "geometry": { "type": "Point", "coordinates": f.coordinate },
                    }))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

/// Layer paint parameters, in the surface's native vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintSpec {
    Line {
        color: String,
        width: f64,
        opacity: f64,
    },
    Circle {
        radius: f64,
        color: String,
        opacity: f64,
        stroke_width: f64,
        stroke_color: Option<String>,
    },
}

impl PaintSpec {
    pub fn vessel_path(color: &str) -> Self {
        PaintSpec::Line {
            color: color.to_string(),
            width: 2.0,
            opacity: 0.8,
        }
    }

    pub fn start_marker() -> Self {
        PaintSpec::Circle {
            radius: 8.0,
            color: START_MARKER_COLOR.to_string(),
            opacity: 1.0,
            stroke_width: 2.0,
            stroke_color: Some(MARKER_STROKE_COLOR.to_string()),
        }
    }

    pub fn end_marker() -> Self {
        PaintSpec::Circle {
            radius: 8.0,
            color: END_MARKER_COLOR.to_string(),
            opacity: 1.0,
            stroke_width: 2.0,
            stroke_color: Some(MARKER_STROKE_COLOR.to_string()),
        }
    }

    pub fn vessel_points(color: &str) -> Self {
        PaintSpec::Circle {
            radius: 3.0,
            color: color.to_string(),
            opacity: 0.7,
            stroke_width: 0.0,
            stroke_color: None,
        }
    }

    pub fn vessel_points_highlight(color: &str) -> Self {
        PaintSpec::Circle {
            radius: 4.0,
            color: color.to_string(),
            opacity: 0.9,
            stroke_width: 0.0,
            stroke_color: None,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            PaintSpec::Line { color, .. } => color,
            PaintSpec::Circle { color, .. } => color,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            PaintSpec::Line {
                color,
                width,
                opacity,
            } => json!({
                "line-color": color,
                "line-width": width,
                "line-opacity": opacity,
            }),
            PaintSpec::Circle {
                radius,
                color,
                opacity,
                stroke_width,
                stroke_color,
            } => {
                let mut paint = json!({
                    "circle-radius": radius,
                    "circle-color": color,
                    "circle-opacity": opacity,
                });
                if let Some(stroke) = stroke_color {
                    paint["circle-stroke-width"] = json!(stroke_width);
                    paint["circle-stroke-color"] = json!(stroke);
                }
                paint
            }
        }
    }
}

/// Handle to the map backend. Passed explicitly to the lifecycle manager;
/// there is no global surface instance.
pub trait RenderSurface {
    fn add_resource(&mut self, name: &str, kind: ResourceKind, geometry: Geometry, paint: PaintSpec);

    /// Remove a named resource; removing an absent one is a no-op and
    /// returns `false`.
    fn remove_resource(&mut self, name: &str) -> bool;

    fn has_resource(&self, name: &str) -> bool;

    fn fit_bounds(&mut self, bounds: LonLatBounds, padding_px: f64, duration_ms: u64);
}
