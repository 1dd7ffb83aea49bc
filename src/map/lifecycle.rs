//! Render resource lifecycle management
//!
//! Owns the mapping between vessels and their named render resources, the
//! visibility set and the single selection. Invariants: at most one live
//! resource set per vessel, no resources for hidden vessels, and the
//! selection always names a visible vessel.

use crate::color::CountryColorMap;
use crate::map::resources::VesselResource;
use crate::map::surface::{Geometry, PaintSpec, PointFeature, RenderSurface, ResourceKind};
use crate::map::viewport::fit_to_coordinates;
use crate::vessel::Vessel;
use std::collections::BTreeSet;
use tracing::debug;

pub struct VesselLayerManager<S: RenderSurface> {
    surface: S,
    visible: BTreeSet<String>,
    selected: Option<String>,
}

impl<S: RenderSurface> VesselLayerManager<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            visible: BTreeSet::new(),
            selected: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// MMSIs currently rendered on the surface.
    pub fn visible_vessels(&self) -> &BTreeSet<String> {
        &self.visible
    }

    pub fn is_visible(&self, mmsi: &str) -> bool {
        self.visible.contains(mmsi)
    }

    /// The vessel currently highlighted for detail inspection, if any.
    pub fn selected_vessel(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Render a vessel's track: path, start/end markers, point cloud and its
    /// highlight layer.
    ///
    /// Always removes any existing resources for the vessel first, so calling
    /// this twice leaves exactly one resource set. A track with zero points
    /// creates nothing and leaves the vessel hidden.
    pub fn show_vessel(&mut self, vessel: &Vessel, colors: &CountryColorMap, fly_to: bool) {
        self.remove_vessel_resources(&vessel.mmsi);

        if vessel.points().is_empty() {
            self.visible.remove(&vessel.mmsi);
            if self.selected.as_deref() == Some(vessel.mmsi.as_str()) {
                self.selected = None;
            }
            return;
        }

        let color = colors.color_for(&vessel.country);
        let coordinates: Vec<[f64; 2]> = vessel.coordinates().collect();
        let point_features: Vec<PointFeature> = vessel
            .points()
            .iter()
            .map(|p| PointFeature {
                coordinate: p.coordinate,
                timestamp: p.timestamp,
                sog: p.sog,
            })
            .collect();

        self.surface.add_resource(
            &VesselResource::Path.name(&vessel.mmsi),
            ResourceKind::Line,
            Geometry::Path(coordinates.clone()),
            PaintSpec::vessel_path(color),
        );
        self.surface.add_resource(
            &VesselResource::StartPoint.name(&vessel.mmsi),
            ResourceKind::Circle,
            Geometry::Point(coordinates[0]),
            PaintSpec::start_marker(),
        );
        self.surface.add_resource(
            &VesselResource::EndPoint.name(&vessel.mmsi),
            ResourceKind::Circle,
            Geometry::Point(*coordinates.last().unwrap()),
            PaintSpec::end_marker(),
        );
        self.surface.add_resource(
            &VesselResource::Points.name(&vessel.mmsi),
            ResourceKind::Circle,
            Geometry::PointSeries(point_features.clone()),
            PaintSpec::vessel_points(color),
        );
        self.surface.add_resource(
            &VesselResource::PointsHighlight.name(&vessel.mmsi),
            ResourceKind::Circle,
            Geometry::PointSeries(point_features),
            PaintSpec::vessel_points_highlight(color),
        );

        self.visible.insert(vessel.mmsi.clone());
        debug!(mmsi = %vessel.mmsi, points = vessel.points().len(), "vessel shown");

        if fly_to {
            fit_to_coordinates(&mut self.surface, coordinates);
        }
    }

    /// Remove a vessel's resources and drop it from the visibility set.
    /// Hiding a vessel that is not shown is a silent no-op; hiding the
    /// selected vessel clears the selection.
    pub fn hide_vessel(&mut self, mmsi: &str) {
        self.remove_vessel_resources(mmsi);
        self.visible.remove(mmsi);
        if self.selected.as_deref() == Some(mmsi) {
            self.selected = None;
        }
        debug!(mmsi, "vessel hidden");
    }

    /// Toggle selection. Selecting an unselected vessel shows it (with a
    /// camera fit) and marks it selected; selecting the already-selected
    /// vessel hides it and clears the selection. Other visible vessels are
    /// left alone either way.
    pub fn select_vessel(&mut self, vessel: &Vessel, colors: &CountryColorMap) {
        if self.selected.as_deref() == Some(vessel.mmsi.as_str()) {
            self.hide_vessel(&vessel.mmsi);
        } else {
            self.show_vessel(vessel, colors, true);
            if self.is_visible(&vessel.mmsi) {
                self.selected = Some(vessel.mmsi.clone());
            }
        }
    }

    /// Replace whatever is visible with exactly the given vessels, without
    /// recentering the camera.
    pub fn show_all<'a>(
        &mut self,
        vessels: impl IntoIterator<Item = &'a Vessel>,
        colors: &CountryColorMap,
    ) {
        self.clear_all();
        for vessel in vessels {
            self.show_vessel(vessel, colors, false);
        }
    }

    /// Remove every visible vessel's resources and reset to the initial
    /// state: empty visibility set, no selection.
    pub fn clear_all(&mut self) {
        let visible: Vec<String> = self.visible.iter().cloned().collect();
        for mmsi in visible {
            self.remove_vessel_resources(&mmsi);
        }
        self.visible.clear();
        self.selected = None;
    }

    fn remove_vessel_resources(&mut self, mmsi: &str) {
        for kind in VesselResource::ALL {
            self.surface.remove_resource(&kind.name(mmsi));
        }
    }
}
