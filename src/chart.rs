//! Country chart dataset derivation

use crate::color::CountryColorMap;
use crate::filter::count_vessels_by_country;
use crate::vessel::VesselData;

/// Positionally aligned labels, counts and colors for the country chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryChartData {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub colors: Vec<&'static str>,
}

/// Build the per-country chart dataset from the current entity map.
pub fn country_chart_data(data: &VesselData, colors: &CountryColorMap) -> CountryChartData {
    let counts = count_vessels_by_country(data);
    let labels: Vec<String> = counts.keys().cloned().collect();
    let values: Vec<usize> = counts.values().copied().collect();
    let colors = labels.iter().map(|label| colors.color_for(label)).collect();
    CountryChartData {
        labels,
        counts: values,
        colors,
    }
}
