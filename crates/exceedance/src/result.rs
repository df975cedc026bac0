//! Result assembly and JSON output.
//!
//! This is the single place where raw `f64` statistics become output
//! fields. Every number leaving the crate is either finite or `None`
//! (serialized as `null`).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::confidence::ConfidenceInterval;
use crate::error::EstimateError;
use crate::exceedance::ExceedanceOutcome;
use crate::query::{Direction, ExceedanceQuery};
use crate::summary::Summary;
use crate::trend::{TREND_INTERPRETATION, TrendLine, YearlyFraction};

/// Complete answer to one exceedance query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityResult {
    pub n: usize,
    pub k: usize,
    pub probability: Option<f64>,
    /// Wilson bounds `[lower, upper]`, both `null` when `n == 0`.
    pub ci_95: [Option<f64>; 2],
    /// Standard-normal quantile the bounds were computed at.
    pub z_score: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub sd: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Keys "10", "25", "50", "75", "90".
    pub percentiles: BTreeMap<String, f64>,
    pub trend: Option<TrendOutput>,
    pub yearly_fractions: Vec<YearlyFractionOutput>,
    pub variable: String,
    pub threshold: Option<f64>,
    pub operator: Direction,
    pub month: u8,
    pub day: u8,
    pub window_days: u32,
}

/// Trend block of the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendOutput {
    pub slope_per_year: Option<f64>,
    pub intercept: Option<f64>,
    pub r_value: Option<f64>,
    pub p_value: Option<f64>,
    pub slope_stderr: Option<f64>,
    pub n_years: usize,
    pub interpretation: &'static str,
}

/// One year of the trend input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyFractionOutput {
    pub year: i32,
    pub n: usize,
    pub fraction: Option<f64>,
}

/// Maps NaN and infinities to `None`.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn finite_opt(value: Option<f64>) -> Option<f64> {
    value.and_then(finite)
}

/// Composes the pipeline outputs into a [`ProbabilityResult`].
///
/// Pure composition apart from sanitization: non-finite numbers become
/// `None`, and percentiles without a finite value are left out of the map.
pub fn assemble(
    outcome: &ExceedanceOutcome,
    interval: Option<ConfidenceInterval>,
    z: f64,
    summary: &Summary,
    yearly: &[YearlyFraction],
    trend: Option<TrendLine>,
    query: &ExceedanceQuery,
) -> ProbabilityResult {
    let ci_95 = [
        interval.and_then(|ci| finite(ci.lower)),
        interval.and_then(|ci| finite(ci.upper)),
    ];

    let percentiles = summary
        .percentiles
        .iter()
        .filter_map(|(level, &v)| finite(v).map(|v| (level.to_string(), v)))
        .collect();

    let trend = trend.map(|t| TrendOutput {
        slope_per_year: finite(t.slope),
        intercept: finite(t.intercept),
        r_value: finite(t.correlation),
        p_value: finite(t.p_value),
        slope_stderr: finite(t.slope_stderr),
        n_years: t.n_years,
        interpretation: TREND_INTERPRETATION,
    });

    let yearly_fractions = yearly
        .iter()
        .map(|yf| YearlyFractionOutput {
            year: yf.year,
            n: yf.n,
            fraction: finite(yf.fraction),
        })
        .collect();

    ProbabilityResult {
        n: outcome.n,
        k: outcome.k,
        probability: if outcome.n == 0 {
            None
        } else {
            finite(outcome.probability)
        },
        ci_95,
        z_score: finite(z),
        mean: finite_opt(summary.mean),
        median: finite_opt(summary.median),
        sd: finite_opt(summary.sd),
        min: finite_opt(summary.min),
        max: finite_opt(summary.max),
        percentiles,
        trend,
        yearly_fractions,
        variable: query.variable().to_string(),
        threshold: finite(query.threshold()),
        operator: query.direction(),
        month: query.month(),
        day: query.day(),
        window_days: query.window_days(),
    }
}

/// Serialize a result to pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(output: &T) -> Result<String, EstimateError> {
    serde_json::to_string_pretty(output).map_err(|e| EstimateError::Serialization {
        reason: e.to_string(),
    })
}
