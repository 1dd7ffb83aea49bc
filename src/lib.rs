//! Core for an interactive vessel track map.
//!
//! Normalizes raw position-report collections into per-vessel time-ordered
//! tracks, filters and aggregates them, assigns deterministic per-country
//! colors, and keeps a render surface's drawable resources consistent with
//! the currently visible vessel set.
//!
//! Everything runs on a single event-loop thread; the only asynchronous part
//! is the vessel data fetch, which lives on a background worker thread and
//! reports back over channels (see [`fetch`]).

pub mod chart;
pub mod color;
pub mod fetch;
pub mod filter;
pub mod map;
pub mod store;
pub mod vessel;

pub use chart::{CountryChartData, country_chart_data};
pub use color::{CHART_COLORS, CountryColorMap, DEFAULT_VESSEL_COLOR};
pub use fetch::{VesselLoader, start_vessel_worker, validate_date_range};
pub use filter::{VesselFilters, count_vessels_by_country, filter_vessels};
pub use map::{RenderSurface, VesselLayerManager, VesselResource};
pub use store::{StoreEvent, VesselStore};
pub use vessel::{Vessel, VesselData, VesselPoint, process_vessel_data};
