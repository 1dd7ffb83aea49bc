//! Load lifecycle: request ids, stale-response discard, store updates

use crate::fetch::types::{FetchChannels, FetchCommand, FetchResultMsg};
use crate::store::VesselStore;
use crate::vessel::process_vessel_data;
use chrono::NaiveDate;
use tracing::debug;

/// Drives vessel loads through the fetch worker and applies results to a
/// [`VesselStore`].
///
/// Every load gets a monotonically increasing request id; only results for
/// the most recent request are applied, so a stale response that arrives
/// after a newer load started can never overwrite fresher state.
pub struct VesselLoader {
    channels: FetchChannels,
    next_request_id: u64,
    in_flight: Option<u64>,
}

impl VesselLoader {
    pub fn new(channels: FetchChannels) -> Self {
        Self {
            channels,
            next_request_id: 0,
            in_flight: None,
        }
    }

    /// Request a load for the given date range.
    ///
    /// An invalid range produces a user-visible message and no fetch; the
    /// store is left untouched. On success the store's loading flag is set
    /// and the previous data stays in place until a result is applied.
    pub fn request_load(
        &mut self,
        store: &mut VesselStore,
        start_date: &str,
        end_date: &str,
    ) -> Result<u64, String> {
        validate_date_range(start_date, end_date)?;

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);

        store.begin_loading();
        let _ = self.channels.cmd_tx.send(FetchCommand::Load {
            request_id,
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        });
        Ok(request_id)
    }

    /// True while a requested load has not yet been resolved.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Drain worker results and apply the one answering the latest request.
    ///
    /// Results for superseded requests are discarded without touching the
    /// store.
    pub fn poll(&mut self, store: &mut VesselStore) {
        let Ok(rx) = self.channels.res_rx.lock() else {
            return;
        };
        let mut resolved: Vec<FetchResultMsg> = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            resolved.push(msg);
        }
        drop(rx);

        for msg in resolved {
            let request_id = match &msg {
                FetchResultMsg::Loaded { request_id, .. } => *request_id,
                FetchResultMsg::Failed { request_id, .. } => *request_id,
            };
            if self.in_flight != Some(request_id) {
                debug!(request_id, "discarding stale fetch result");
                continue;
            }
            self.in_flight = None;

            match msg {
                FetchResultMsg::Loaded { collection, .. } => {
                    store.apply_loaded(process_vessel_data(&collection));
                }
                FetchResultMsg::Failed { error, .. } => {
                    store.apply_load_failed(error);
                }
            }
        }
    }
}

/// Check a `YYYY-MM-DD` date range before issuing a fetch.
pub fn validate_date_range(start_date: &str, end_date: &str) -> Result<(), String> {
    if start_date.is_empty() || end_date.is_empty() {
        return Err("Please select both start and end dates".to_string());
    }
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d");
    let end = NaiveDate::parse_from_str(end_date, "%Y-%m-%d");
    match (start, end) {
        (Ok(start), Ok(end)) if start <= end => Ok(()),
        _ => Err("End date must be after start date".to_string()),
    }
}
