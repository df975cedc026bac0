//! Batch command: several thresholds against one series, in parallel.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use rayon::prelude::*;
use tracing::{info, info_span};

use wxprob_exceedance::{
    DailySeries, EstimateConfig, EstimateError, ExceedanceQuery, ProbabilityResult, estimate,
    to_json,
};

use crate::cli::BatchArgs;
use crate::config::WxprobConfig;
use crate::convert;
use crate::output;

/// Evaluates every threshold against `series`, keeping threshold order.
pub fn estimate_thresholds(
    series: &DailySeries,
    base: &ExceedanceQuery,
    thresholds: &[f64],
    config: &EstimateConfig,
) -> Result<Vec<ProbabilityResult>, EstimateError> {
    thresholds
        .par_iter()
        .map(|&t| estimate(series, &base.clone().with_threshold(t), config))
        .collect()
}

/// Run the multi-threshold pipeline.
pub fn run(args: BatchArgs) -> Result<()> {
    let _cmd = info_span!("batch").entered();
    if args.thresholds.is_empty() {
        bail!("no thresholds given");
    }
    let config = WxprobConfig::load(args.source.config.as_deref())?;

    let base = convert::build_query(&args.query, &config.query, args.thresholds[0])?;
    for &t in &args.thresholds {
        base.clone()
            .with_threshold(t)
            .validate()
            .context("invalid query")?;
    }
    let estimate_config = convert::build_estimate_config(&config.query);
    let request = convert::build_series_request(
        &args.source,
        &config,
        &args.query.variable,
        Utc::now(),
    );

    let source = convert::open_source(&args.source, &config)?;
    let series = source
        .fetch(&request)
        .context("failed to retrieve daily series")?;
    info!(
        n_days = series.len(),
        n_thresholds = args.thresholds.len(),
        "series loaded"
    );

    let results = estimate_thresholds(&series, &base, &args.thresholds, &estimate_config)?;
    info!(n_results = results.len(), "batch complete");

    output::emit(&to_json(&results)?, args.output.as_deref())
}
