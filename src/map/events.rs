//! Map interaction events and popup derivation
//!
//! The render surface reports clicks and hover transitions keyed by resource
//! name; handlers are registered per resource and dispatched synchronously
//! on the event-loop thread.

use crate::map::surface::PointFeature;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A point feature was clicked; `lng_lat` is the pointer position.
    Click {
        lng_lat: [f64; 2],
        feature: PointFeature,
    },
    MouseEnter,
    MouseLeave,
}

type Handler = Box<dyn FnMut(&MapEvent)>;

/// Synchronous event dispatch keyed by resource name.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Handler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for events on a named resource.
    pub fn on(&mut self, resource_name: &str, handler: impl FnMut(&MapEvent) + 'static) {
        self.handlers
            .entry(resource_name.to_string())
            .or_default()
            .push(Box::new(handler));
    }

    /// Invoke every handler registered for the resource; returns how many
    /// ran. Events for resources without handlers are dropped silently.
    pub fn dispatch(&mut self, resource_name: &str, event: &MapEvent) -> usize {
        let Some(handlers) = self.handlers.get_mut(resource_name) else {
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(event);
        }
        handlers.len()
    }
}

/// Shift a longitude by whole world copies until it lies within 180 degrees
/// of `reference`, so a popup opens on the world copy the user clicked.
pub fn unwrap_longitude(mut lon: f64, reference: f64) -> f64 {
    while (reference - lon).abs() > 180.0 {
        lon += if reference > lon { 360.0 } else { -360.0 };
    }
    lon
}

/// Popup content for a clicked position report.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionPopup {
    pub lng_lat: [f64; 2],
    pub time_label: String,
    pub sog: f64,
}

impl PositionPopup {
    /// Place a popup at the feature's coordinate, unwrapped toward the click
    /// longitude.
    pub fn for_feature(feature: &PointFeature, click_lng: f64) -> Self {
        let lng = unwrap_longitude(feature.coordinate[0], click_lng);
        Self {
            lng_lat: [lng, feature.coordinate[1]],
            time_label: feature
                .timestamp
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            sog: feature.sog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn feature(lon: f64, lat: f64, sog: f64) -> PointFeature {
        PointFeature {
            coordinate: [lon, lat],
            timestamp: None,
            sog,
        }
    }

    #[test]
    fn test_dispatch_reaches_registered_handler() {
        let clicks: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&clicks);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.on("vessel-points-100", move |event| {
            if let MapEvent::Click { feature, .. } = event {
                seen.borrow_mut().push(feature.sog);
            }
        });

        let ran = dispatcher.dispatch(
            "vessel-points-100",
            &MapEvent::Click {
                lng_lat: [10.0, 55.0],
                feature: feature(10.0, 55.0, 7.0),
            },
        );
        assert_eq!(ran, 1);
        assert_eq!(*clicks.borrow(), vec![7.0]);
    }

    #[test]
    fn test_dispatch_without_handler_is_silent() {
        let mut dispatcher = EventDispatcher::new();
        assert_eq!(dispatcher.dispatch("vessel-points-999", &MapEvent::MouseEnter), 0);
    }

    #[test]
    fn test_events_keyed_by_resource_name() {
        let count: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&count);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.on("vessel-points-100", move |_| *seen.borrow_mut() += 1);

        dispatcher.dispatch("vessel-points-200", &MapEvent::MouseEnter);
        assert_eq!(*count.borrow(), 0);
        dispatcher.dispatch("vessel-points-100", &MapEvent::MouseLeave);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unwrap_longitude_steps_by_world_copies() {
        assert_eq!(unwrap_longitude(170.0, -170.0), -190.0);
        assert_eq!(unwrap_longitude(-170.0, 170.0), 190.0);
        assert_eq!(unwrap_longitude(10.0, 15.0), 10.0);
        // Clicked on the next world copy eastward.
        assert_eq!(unwrap_longitude(0.0, 350.0), 360.0);
    }

    #[test]
    fn test_popup_uses_unwrapped_coordinate_and_labels() {
        let popup = PositionPopup::for_feature(&feature(170.0, 55.0, 3.2), -170.0);
        assert_eq!(popup.lng_lat, [-190.0, 55.0]);
        assert_eq!(popup.time_label, "N/A");
        assert_eq!(popup.sog, 3.2);
    }
}
