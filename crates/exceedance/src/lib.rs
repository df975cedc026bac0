//! Day-window exceedance probability for daily climate series.
//!
//! Given a multi-year daily series, a calendar day, a window half-width and a
//! threshold comparison, this crate estimates how often the variable exceeds
//! (or falls below) the threshold around that day of the year, with a Wilson
//! confidence interval, descriptive statistics and a linear trend of the
//! yearly exceedance fraction.
//!
//! # Quick start
//!
//! ```
//! use wxprob_calendar::{GregorianDate, date_range};
//! use wxprob_exceedance::{DailySeries, Direction, EstimateConfig, ExceedanceQuery, estimate};
//!
//! let start = GregorianDate::new(2000, 1, 1).unwrap();
//! let end = GregorianDate::new(2009, 12, 31).unwrap();
//! let series: DailySeries = date_range(start, end)
//!     .into_iter()
//!     .map(|d| (d, f64::from(d.day())))
//!     .collect();
//!
//! let query = ExceedanceQuery::new("T2M_MAX", 7, 15, 15.0, Direction::Greater);
//! let result = estimate(&series, &query, &EstimateConfig::default()).unwrap();
//!
//! // Jul 12..=18 in each of ten years; days 16, 17, 18 exceed.
//! assert_eq!(result.n, 70);
//! assert_eq!(result.k, 30);
//! ```
//!
//! # Architecture
//!
//! ```text
//! estimate()
//!   ├─ EstimateConfig::validate / ExceedanceQuery::validate
//!   ├─ select_window()        (window.rs)
//!   ├─ count_exceedances()    (exceedance.rs)
//!   ├─ wilson_interval()      (confidence.rs)
//!   ├─ summarize()            (summary.rs)
//!   ├─ yearly_fractions()     (trend.rs)
//!   ├─ fit_yearly()           (trend.rs)
//!   └─ assemble()             (result.rs)
//! ```
//!
//! Every stage is a pure function of its inputs. Only [`assemble`] turns
//! non-finite numbers into `null`.

pub mod confidence;
pub mod config;
pub mod error;
pub mod exceedance;
pub mod query;
pub mod result;
pub mod series;
pub mod summary;
pub mod trend;
pub mod window;

pub(crate) mod validate;

pub use confidence::{ConfidenceInterval, DEFAULT_Z, wilson_interval};
pub use config::EstimateConfig;
pub use error::EstimateError;
pub use exceedance::{ExceedanceOutcome, count_exceedances};
pub use query::{DEFAULT_WINDOW_DAYS, Direction, ExceedanceQuery};
pub use result::{ProbabilityResult, TrendOutput, YearlyFractionOutput, assemble, to_json};
pub use series::{DailySeries, WindowedSeries};
pub use summary::{PERCENTILE_LEVELS, Summary, summarize};
pub use trend::{TrendLine, YearlyFraction, fit_trend, fit_yearly, yearly_fractions};
pub use window::{anchor_distance, in_window, select_window};

use tracing::debug;

/// Runs the full estimation pipeline for one query.
///
/// # Errors
///
/// - [`EstimateError::Validation`] if the configuration or query is invalid.
/// - [`EstimateError::EmptySample`] if the window holds no valid value.
#[tracing::instrument(
    skip(series, query, config),
    fields(
        variable = query.variable(),
        month = query.month(),
        day = query.day(),
        threshold = query.threshold(),
    )
)]
pub fn estimate(
    series: &DailySeries,
    query: &ExceedanceQuery,
    config: &EstimateConfig,
) -> Result<ProbabilityResult, EstimateError> {
    config.validate()?;
    let anchor = query.validate()?;

    let windowed = select_window(series, anchor, query.window_days());
    let outcome = count_exceedances(&windowed, query.threshold(), query.direction())?;
    let interval = wilson_interval(outcome.k, outcome.n, config.z_score());
    let summary = summarize(&windowed);
    let yearly = yearly_fractions(&windowed, query.threshold(), query.direction());
    let trend = fit_yearly(&yearly);

    debug!(
        n = outcome.n,
        k = outcome.k,
        n_years = yearly.len(),
        has_trend = trend.is_some(),
        "estimate complete"
    );

    Ok(assemble(
        &outcome,
        interval,
        config.z_score(),
        &summary,
        &yearly,
        trend,
        query,
    ))
}
