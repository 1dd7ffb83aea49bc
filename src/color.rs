//! Deterministic country-to-color assignment
//!
//! Countries are assigned colors from a fixed 12-color palette, cycling when
//! there are more labels than palette entries. The same ordered label list
//! always produces the same map.

use std::collections::HashMap;

/// Chart colors used for vessels by country.
pub const CHART_COLORS: [&str; 12] = [
    "#ff6384", "#36a2eb", "#ffce56", "#4bc0c0",
    "#9966ff", "#ff9f40", "#8ac249", "#d45087",
    "#f95d6a", "#2f4b7c", "#665191", "#a05195",
];

/// Neutral fallback for vessels whose country has no assigned color.
pub const DEFAULT_VESSEL_COLOR: &str = "#888";

/// Country label -> palette color, assigned by label position.
#[derive(Debug, Clone, Default)]
pub struct CountryColorMap {
    colors: HashMap<String, &'static str>,
}

impl CountryColorMap {
    /// Assign `CHART_COLORS[i % 12]` to the label at position `i`.
    pub fn generate(countries: &[String]) -> Self {
        let colors = countries
            .iter()
            .enumerate()
            .map(|(index, country)| {
                (country.clone(), CHART_COLORS[index % CHART_COLORS.len()])
            })
            .collect();
        Self { colors }
    }

    pub fn get(&self, country: &str) -> Option<&'static str> {
        self.colors.get(country).copied()
    }

    /// Assigned color, or [`DEFAULT_VESSEL_COLOR`] for unknown labels.
    pub fn color_for(&self, country: &str) -> &'static str {
        self.get(country).unwrap_or(DEFAULT_VESSEL_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
