//! Vessel track data model and normalization
//!
//! This module turns raw position-report feature collections into per-vessel
//! time-ordered tracks and exposes the label helpers derived from them.

pub mod normalize;
pub mod types;

pub use normalize::{process_vessel_data, unique_countries, unique_ship_types};
pub use types::{Vessel, VesselData, VesselPoint};
