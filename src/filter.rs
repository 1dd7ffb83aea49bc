//! Vessel filtering and per-country aggregation

use crate::vessel::{Vessel, VesselData};
use std::collections::BTreeMap;

/// Active filter predicates.
///
/// All predicates are conjunctive; an empty restriction list means "match
/// all" for that predicate.
#[derive(Debug, Clone, Default)]
pub struct VesselFilters {
    /// Case-insensitive substring match against vessel name or MMSI.
    pub search_term: String,
    pub countries: Vec<String>,
    pub ship_types: Vec<String>,
}

impl VesselFilters {
    pub fn matches(&self, vessel: &Vessel) -> bool {
        let search = self.search_term.to_lowercase();
        let matches_search = search.is_empty()
            || vessel.name.to_lowercase().contains(&search)
            || vessel.mmsi.contains(&search);

        let matches_country =
            self.countries.is_empty() || self.countries.contains(&vessel.country);

        let matches_type =
            self.ship_types.is_empty() || self.ship_types.contains(&vessel.ship_type);

        matches_search && matches_country && matches_type
    }

    /// Number of filter groups currently restricting the view.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search_term.is_empty())
            + usize::from(!self.countries.is_empty())
            + usize::from(!self.ship_types.is_empty())
    }

    pub fn reset(&mut self) {
        self.search_term.clear();
        self.countries.clear();
        self.ship_types.clear();
    }
}

/// Subset of `data` matching all active predicates. Keys are preserved; no
/// new entries are introduced.
pub fn filter_vessels(data: &VesselData, filters: &VesselFilters) -> VesselData {
    data.iter()
        .filter(|(_, vessel)| filters.matches(vessel))
        .map(|(mmsi, vessel)| (mmsi.clone(), vessel.clone()))
        .collect()
}

/// Vessel count per country label. Counts always sum to `data.len()`.
pub fn count_vessels_by_country(data: &VesselData) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for vessel in data.values() {
        *counts.entry(vessel.country.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::VesselPoint;

    fn vessel(mmsi: &str, name: &str, country: &str, ship_type: &str) -> Vessel {
        Vessel {
            mmsi: mmsi.to_string(),
            name: name.to_string(),
            ship_type: ship_type.to_string(),
            callsign: "N/A".to_string(),
            country: country.to_string(),
            duration: "N/A".to_string(),
            distance: None,
            points: vec![VesselPoint {
                timestamp: None,
                coordinate: [0.0, 0.0],
                sog: 0.0,
            }],
        }
    }

    fn fixture() -> VesselData {
        [
            vessel("100", "Nordic Star", "Norway", "Cargo"),
            vessel("200", "Baltic Queen", "Denmark", "Passenger"),
            vessel("300", "North Wind", "Norway", "Tanker"),
        ]
        .into_iter()
        .map(|v| (v.mmsi.clone(), v))
        .collect()
    }

    #[test]
    fn test_empty_filters_match_all() {
        let data = fixture();
        let filtered = filter_vessels(&data, &VesselFilters::default());
        assert_eq!(filtered.len(), data.len());
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let data = fixture();
        let filters = VesselFilters {
            search_term: "north".to_string(),
            ..VesselFilters::default()
        };
        let filtered = filter_vessels(&data, &filters);
        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["300"]);
    }

    #[test]
    fn test_search_matches_mmsi_substring() {
        let data = fixture();
        let filters = VesselFilters {
            search_term: "20".to_string(),
            ..VesselFilters::default()
        };
        let filtered = filter_vessels(&data, &filters);
        assert!(filtered.contains_key("200"));
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let data = fixture();
        // "Norway" alone matches two vessels; adding a ship type narrows to one.
        let filters = VesselFilters {
            search_term: String::new(),
            countries: vec!["Norway".to_string()],
            ship_types: vec!["Tanker".to_string()],
        };
        let filtered = filter_vessels(&data, &filters);
        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["300"]);
    }

    #[test]
    fn test_adding_restrictions_never_grows_result() {
        let data = fixture();
        let unrestricted = filter_vessels(&data, &VesselFilters::default());

        let with_search = filter_vessels(
            &data,
            &VesselFilters {
                search_term: "star".to_string(),
                ..VesselFilters::default()
            },
        );
        assert!(with_search.len() <= unrestricted.len());
        for mmsi in with_search.keys() {
            assert!(unrestricted.contains_key(mmsi));
        }

        let with_country = filter_vessels(
            &data,
            &VesselFilters {
                search_term: "star".to_string(),
                countries: vec!["Denmark".to_string()],
                ..VesselFilters::default()
            },
        );
        assert!(with_country.len() <= with_search.len());
    }

    #[test]
    fn test_counts_sum_to_total() {
        let data = fixture();
        let counts = count_vessels_by_country(&data);
        assert_eq!(counts.values().sum::<usize>(), data.len());
        assert_eq!(counts.get("Norway"), Some(&2));
        assert_eq!(counts.get("Denmark"), Some(&1));
    }

    #[test]
    fn test_active_filter_count_and_reset() {
        let mut filters = VesselFilters {
            search_term: "star".to_string(),
            countries: vec!["Norway".to_string()],
            ship_types: Vec::new(),
        };
        assert_eq!(filters.active_filter_count(), 2);

        filters.reset();
        assert_eq!(filters.active_filter_count(), 0);
        assert_eq!(filter_vessels(&fixture(), &filters).len(), 3);
    }
}
