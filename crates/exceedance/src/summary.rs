//! Descriptive statistics over the valid values of a window.

use std::collections::BTreeMap;

use crate::series::WindowedSeries;

/// Percentile levels reported for every window.
pub const PERCENTILE_LEVELS: [u8; 5] = [10, 25, 50, 75, 90];

/// Location and spread of the windowed values.
///
/// All fields are `None` (and `percentiles` empty) when the window holds no
/// valid value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation; needs at least two values.
    pub sd: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Level (percent) to type-7 quantile.
    pub percentiles: BTreeMap<u8, f64>,
}

/// Summarizes the same valid-value subset the exceedance count uses.
pub fn summarize(windowed: &WindowedSeries) -> Summary {
    let values = windowed.valid_values();
    let sorted = wxprob_stats::sorted_finite(&values);

    let percentiles = PERCENTILE_LEVELS
        .iter()
        .filter_map(|&level| {
            wxprob_stats::quantile_type7(&sorted, f64::from(level) / 100.0).map(|q| (level, q))
        })
        .collect();

    Summary {
        mean: wxprob_stats::mean(&sorted),
        median: wxprob_stats::median(&sorted),
        sd: wxprob_stats::sd(&sorted),
        min: sorted.first().copied(),
        max: sorted.last().copied(),
        percentiles,
    }
}
