//! End-to-end pipeline: raw features -> tracks -> filter -> colors -> map.

use std::collections::HashMap;

use vessel_map::color::CountryColorMap;
use vessel_map::fetch::types::{Feature, FeatureCollection, FeatureProperties, PointGeometry};
use vessel_map::filter::{VesselFilters, count_vessels_by_country, filter_vessels};
use vessel_map::map::{
    Geometry, LonLatBounds, PaintSpec, RenderSurface, ResourceKind, VesselLayerManager,
    VesselResource,
};
use vessel_map::vessel::process_vessel_data;

#[derive(Default)]
struct FakeMap {
    resources: HashMap<String, ResourceKind>,
    fits: usize,
}

impl RenderSurface for FakeMap {
    fn add_resource(&mut self, name: &str, kind: ResourceKind, _: Geometry, _: PaintSpec) {
        self.resources.insert(name.to_string(), kind);
    }

    fn remove_resource(&mut self, name: &str) -> bool {
        self.resources.remove(name).is_some()
    }

    fn has_resource(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    fn fit_bounds(&mut self, _: LonLatBounds, _: f64, _: u64) {
        self.fits += 1;
    }
}

fn report(
    mmsi: &str,
    name: &str,
    country: &str,
    shiptype: &str,
    timestamp: &str,
    lon: f64,
    lat: f64,
    sog: f64,
) -> Feature {
    Feature {
        properties: FeatureProperties {
            mmsi: Some(mmsi.to_string()),
            name: Some(name.to_string()),
            country: Some(country.to_string()),
            shiptype: Some(shiptype.to_string()),
            timestamp: Some(timestamp.to_string()),
            sog: Some(sog),
            ..FeatureProperties::default()
        },
        geometry: Some(PointGeometry {
            coordinates: vec![lon, lat],
        }),
    }
}

fn sample_collection() -> FeatureCollection {
    FeatureCollection {
        features: vec![
            // Vessel 100: reports arrive out of order.
            report("100", "Nordic Star", "Norway", "Cargo", "2024-03-01 02:00:00", 10.0, 58.0, 5.0),
            report("100", "Nordic Star", "Norway", "Cargo", "2024-03-01 01:00:00", 9.0, 57.0, 3.0),
            report("100", "Nordic Star", "Norway", "Cargo", "2024-03-01 03:00:00", 11.0, 59.0, 7.0),
            report("200", "Baltic Queen", "Denmark", "Passenger", "2024-03-01 01:30:00", 12.0, 55.0, 14.0),
            report("300", "North Wind", "Norway", "Tanker", "2024-03-01 02:30:00", 5.0, 60.0, 9.0),
        ],
    }
}

#[test]
fn normalize_filter_color_and_render() {
    let data = process_vessel_data(&sample_collection());
    assert_eq!(data.len(), 3);

    // Out-of-order reports come back time-sorted with aligned speeds.
    let nordic = data.get("100").unwrap();
    let sogs: Vec<f64> = nordic.sog().collect();
    assert_eq!(sogs, vec![3.0, 5.0, 7.0]);

    // Per-country counts partition the full entity set.
    let counts = count_vessels_by_country(&data);
    assert_eq!(counts.values().sum::<usize>(), data.len());

    // Filtering is conjunctive and only narrows.
    let filters = VesselFilters {
        search_term: "nordic".to_string(),
        countries: vec!["Norway".to_string()],
        ship_types: Vec::new(),
    };
    let filtered = filter_vessels(&data, &filters);
    assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["100"]);

    // Colors follow the country label order deterministically.
    let labels: Vec<String> = counts.keys().cloned().collect();
    let colors = CountryColorMap::generate(&labels);
    assert_eq!(colors.len(), 2);

    // Show the filtered vessel, then hide it: no resources survive.
    let mut manager = VesselLayerManager::new(FakeMap::default());
    let vessel = filtered.get("100").unwrap();
    manager.show_vessel(vessel, &colors, true);
    assert_eq!(manager.surface().fits, 1);
    for kind in VesselResource::ALL {
        assert!(manager.surface().has_resource(&kind.name("100")));
    }

    manager.hide_vessel("100");
    for kind in VesselResource::ALL {
        assert!(!manager.surface().has_resource(&kind.name("100")));
    }
    assert!(manager.visible_vessels().is_empty());
}

#[test]
fn show_all_matches_filtered_view_exactly() {
    let data = process_vessel_data(&sample_collection());
    let labels: Vec<String> = count_vessels_by_country(&data).keys().cloned().collect();
    let colors = CountryColorMap::generate(&labels);

    let mut manager = VesselLayerManager::new(FakeMap::default());
    manager.show_vessel(data.get("200").unwrap(), &colors, false);

    let filters = VesselFilters {
        countries: vec!["Norway".to_string()],
        ..VesselFilters::default()
    };
    let filtered = filter_vessels(&data, &filters);
    manager.show_all(filtered.values(), &colors);

    let visible: Vec<&str> = manager.visible_vessels().iter().map(String::as_str).collect();
    assert_eq!(visible, vec!["100", "300"]);
    assert!(!manager.surface().has_resource(&VesselResource::Path.name("200")));
    // Bulk show never recenters.
    assert_eq!(manager.surface().fits, 0);
}

#[test]
fn reload_clears_stale_resources_before_new_data() {
    let data = process_vessel_data(&sample_collection());
    let labels: Vec<String> = count_vessels_by_country(&data).keys().cloned().collect();
    let colors = CountryColorMap::generate(&labels);

    let mut manager = VesselLayerManager::new(FakeMap::default());
    manager.show_all(data.values(), &colors);
    assert_eq!(manager.visible_vessels().len(), 3);

    // A fresh load replaces the entity set; the map is cleared first so no
    // resource can reference stale data.
    manager.clear_all();
    assert!(manager.visible_vessels().is_empty());
    assert_eq!(manager.selected_vessel(), None);

    let reloaded = process_vessel_data(&FeatureCollection {
        features: vec![report(
            "400", "New Dawn", "Sweden", "Cargo", "2024-04-01 00:00:00", 18.0, 59.0, 2.0,
        )],
    });
    let labels: Vec<String> = count_vessels_by_country(&reloaded).keys().cloned().collect();
    let colors = CountryColorMap::generate(&labels);
    manager.show_all(reloaded.values(), &colors);

    let visible: Vec<&str> = manager.visible_vessels().iter().map(String::as_str).collect();
    assert_eq!(visible, vec!["400"]);
    assert_eq!(manager.surface().resources.len(), 5);
}
