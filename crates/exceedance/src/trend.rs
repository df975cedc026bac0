//! Linear trend of the yearly exceedance fraction.
//!
//! The fit is an ordinary least-squares line through one point per year.
//! It indicates the direction of change in exceedance frequency over the
//! record; it is not a model of the underlying climate signal and must not
//! be read as a forecast.

use std::collections::BTreeMap;

use tracing::debug;

use crate::query::Direction;
use crate::series::WindowedSeries;

/// Fewest years with valid data needed for a fit.
pub const MIN_TREND_YEARS: usize = 2;

/// Attached to every reported trend.
pub const TREND_INTERPRETATION: &str = "Least-squares line of the yearly exceedance fraction \
     against year. A directional diagnostic of change over the record, not a forecast.";

/// Exceedance fraction for one calendar year of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyFraction {
    pub year: i32,
    /// Valid samples in this year's window.
    pub n: usize,
    /// Share of valid samples satisfying the comparison; NaN when `n == 0`.
    pub fraction: f64,
}

/// Fitted trend line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    /// Change in exceedance probability per calendar year.
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation between year and fraction.
    pub correlation: f64,
    /// Two-sided p-value for `slope = 0`.
    pub p_value: f64,
    pub slope_stderr: f64,
    /// Years that entered the fit.
    pub n_years: usize,
}

/// One record per distinct year present in `windowed`, in year order.
///
/// Years whose window holds only missing values are kept with a NaN
/// fraction so the caller can see the gap.
pub fn yearly_fractions(
    windowed: &WindowedSeries,
    threshold: f64,
    direction: Direction,
) -> Vec<YearlyFraction> {
    let mut tallies: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for (date, value) in windowed.iter() {
        let tally = tallies.entry(date.year()).or_default();
        if let Some(v) = value.filter(|v| v.is_finite()) {
            tally.0 += 1;
            tally.1 += usize::from(direction.compare(v, threshold));
        }
    }

    tallies
        .into_iter()
        .map(|(year, (n, k))| YearlyFraction {
            year,
            n,
            fraction: if n == 0 { f64::NAN } else { k as f64 / n as f64 },
        })
        .collect()
}

/// Fits fraction against year over the years with valid data.
///
/// Returns `None` when fewer than [`MIN_TREND_YEARS`] years qualify.
pub fn fit_yearly(fractions: &[YearlyFraction]) -> Option<TrendLine> {
    let (years, values): (Vec<f64>, Vec<f64>) = fractions
        .iter()
        .filter(|yf| yf.n > 0 && yf.fraction.is_finite())
        .map(|yf| (f64::from(yf.year), yf.fraction))
        .unzip();

    if years.len() < MIN_TREND_YEARS {
        debug!(n_years = years.len(), "too few years for a trend fit");
        return None;
    }

    let fit = wxprob_stats::linear_regression(&years, &values)?;
    Some(TrendLine {
        slope: fit.slope,
        intercept: fit.intercept,
        correlation: fit.r,
        p_value: fit.p_value,
        slope_stderr: fit.slope_stderr,
        n_years: fit.n,
    })
}

/// Groups `windowed` by year and fits the yearly fractions.
pub fn fit_trend(
    windowed: &WindowedSeries,
    threshold: f64,
    direction: Direction,
) -> Option<TrendLine> {
    fit_yearly(&yearly_fractions(windowed, threshold, direction))
}
