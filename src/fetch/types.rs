//! Wire types and worker channel messages for vessel data fetching

use serde::Deserialize;
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

/// GeoJSON point-feature collection returned by `GET /vessels`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
}

impl Feature {
    /// The feature's coordinate, if the geometry carries exactly two elements.
    pub fn coordinate(&self) -> Option<[f64; 2]> {
        let coords = &self.geometry.as_ref()?.coordinates;
        if coords.len() == 2 {
            Some([coords[0], coords[1]])
        } else {
            None
        }
    }
}

/// Per-report properties; everything but the MMSI is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    pub mmsi: Option<String>,
    pub name: Option<String>,
    pub shiptype: Option<String>,
    pub callsign: Option<String>,
    pub country: Option<String>,
    pub duration: Option<String>,
    pub distance: Option<String>,
    pub timestamp: Option<String>,
    pub sog: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Commands for the vessel fetcher worker thread.
#[derive(Debug)]
pub enum FetchCommand {
    Load {
        request_id: u64,
        start_date: String,
        end_date: String,
    },
}

/// Results from the vessel fetcher worker thread, tagged with the request
/// they answer so superseded responses can be discarded.
#[derive(Debug)]
pub enum FetchResultMsg {
    Loaded {
        request_id: u64,
        collection: FeatureCollection,
    },
    Failed {
        request_id: u64,
        error: String,
    },
}

/// Channels for communicating with the fetcher worker thread.
pub struct FetchChannels {
    pub cmd_tx: Sender<FetchCommand>,
    pub res_rx: Arc<Mutex<Receiver<FetchResultMsg>>>,
}
