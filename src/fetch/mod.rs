//! Vessel data source collaborator
//!
//! This module handles fetching position-report feature collections from the
//! vessel API on a background worker thread, plus the load lifecycle that
//! keeps stale responses from overwriting fresher state.

pub mod fetcher;
pub mod loader;
pub mod types;

pub use fetcher::start_vessel_worker;
pub use loader::{VesselLoader, validate_date_range};
pub use types::{FeatureCollection, FetchChannels, FetchCommand, FetchResultMsg};
