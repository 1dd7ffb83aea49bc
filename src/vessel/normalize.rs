//! Raw feature collection -> per-vessel ordered tracks

use crate::fetch::types::FeatureCollection;
use crate::vessel::types::{Vessel, VesselData, VesselPoint};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Group raw position features by MMSI and build time-ordered tracks.
///
/// Features without a valid 2-element coordinate (or without an MMSI) are
/// dropped silently; a vessel that ends up with zero valid points is not
/// created at all. Display fields come from the first feature seen for an
/// MMSI, with deterministic placeholders for anything missing.
pub fn process_vessel_data(collection: &FeatureCollection) -> VesselData {
    let mut data = VesselData::new();

    for feature in &collection.features {
        let props = &feature.properties;
        let Some(mmsi) = props.mmsi.as_deref().filter(|m| !m.is_empty()) else {
            continue;
        };
        let Some(coordinate) = feature.coordinate() else {
            continue;
        };

        let vessel = data.entry(mmsi.to_string()).or_insert_with(|| Vessel {
            mmsi: mmsi.to_string(),
            name: props
                .name
                .clone()
                .unwrap_or_else(|| format!("Vessel {}", mmsi)),
            ship_type: props
                .shiptype
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            callsign: props.callsign.clone().unwrap_or_else(|| "N/A".to_string()),
            country: props.country.clone().unwrap_or_else(|| "Unknown".to_string()),
            duration: props.duration.clone().unwrap_or_else(|| "N/A".to_string()),
            distance: props.distance.as_deref().and_then(|d| d.parse::<f64>().ok()),
            points: Vec::new(),
        });

        vessel.points.push(VesselPoint {
            timestamp: props.timestamp.as_deref().and_then(parse_timestamp),
            coordinate,
            sog: props.sog.unwrap_or(0.0),
        });
    }

    // Stable sort: equal or missing timestamps keep their input order.
    for vessel in data.values_mut() {
        vessel
            .points
            .sort_by_key(|p| p.timestamp.unwrap_or(DateTime::<Utc>::MIN_UTC));
    }

    data.retain(|_, vessel| !vessel.points.is_empty());
    data
}

/// Sorted, deduplicated country labels present in the data.
pub fn unique_countries(data: &VesselData) -> Vec<String> {
    let mut countries: Vec<String> = data.values().map(|v| v.country.clone()).collect();
    countries.sort();
    countries.dedup();
    countries
}

/// Sorted, deduplicated ship type labels present in the data.
pub fn unique_ship_types(data: &VesselData) -> Vec<String> {
    let mut types: Vec<String> = data.values().map(|v| v.ship_type.clone()).collect();
    types.sort();
    types.dedup();
    types
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() || value == "null" {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    None
}
