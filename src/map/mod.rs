//! Map rendering core
//!
//! Render-surface abstraction, deterministic resource naming, the vessel
//! layer lifecycle manager, viewport fitting and interaction events.

pub mod events;
pub mod lifecycle;
pub mod resources;
pub mod surface;
pub mod viewport;

pub use events::{EventDispatcher, MapEvent, PositionPopup, unwrap_longitude};
pub use lifecycle::VesselLayerManager;
pub use resources::VesselResource;
pub use surface::{Geometry, PaintSpec, PointFeature, RenderSurface, ResourceKind};
pub use viewport::{FIT_DURATION_MS, FIT_PADDING_PX, LonLatBounds, fit_to_coordinates};
