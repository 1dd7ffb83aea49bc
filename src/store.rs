//! Observable application state container
//!
//! Holds the current entity map plus the labels and flags derived from it.
//! Mutations go through explicit apply methods that emit a [`StoreEvent`] to
//! registered observers; nothing is recomputed implicitly.

use crate::vessel::{VesselData, unique_countries, unique_ship_types};

/// Notification emitted after a store mutation has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    LoadingChanged(bool),
    DataLoaded { vessels: usize },
    LoadFailed { message: String },
    Cleared,
}

type Observer = Box<dyn FnMut(&StoreEvent)>;

#[derive(Default)]
pub struct VesselStore {
    data: VesselData,
    countries: Vec<String>,
    ship_types: Vec<String>,
    loading: bool,
    error: Option<String>,
    observers: Vec<Observer>,
}

impl VesselStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &VesselData {
        &self.data
    }

    /// Sorted country labels present in the current data.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Sorted ship type labels present in the current data.
    pub fn ship_types(&self) -> &[String] {
        &self.ship_types
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Register an observer; it is called synchronously after every apply.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Mark a load as started: loading flag set, previous error cleared,
    /// previous data left in place.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
        self.emit(StoreEvent::LoadingChanged(true));
    }

    /// Replace the entity map with a freshly normalized one.
    pub fn apply_loaded(&mut self, data: VesselData) {
        self.countries = unique_countries(&data);
        self.ship_types = unique_ship_types(&data);
        let vessels = data.len();
        self.data = data;
        self.loading = false;
        self.error = None;
        self.emit(StoreEvent::DataLoaded { vessels });
        self.emit(StoreEvent::LoadingChanged(false));
    }

    /// Record a failed load; the previous entity map is kept untouched.
    pub fn apply_load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message.clone());
        self.emit(StoreEvent::LoadFailed { message });
        self.emit(StoreEvent::LoadingChanged(false));
    }

    /// Drop all loaded data and derived labels.
    pub fn clear(&mut self) {
        self.data.clear();
        self.countries.clear();
        self.ship_types.clear();
        self.error = None;
        self.emit(StoreEvent::Cleared);
    }

    fn emit(&mut self, event: StoreEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}
