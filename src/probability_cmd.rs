//! Probability command: one threshold against one series.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span};

use wxprob_exceedance::{estimate, to_json};

use crate::cli::ProbabilityArgs;
use crate::config::WxprobConfig;
use crate::convert;
use crate::output;

/// Run the single-threshold pipeline.
pub fn run(args: ProbabilityArgs) -> Result<()> {
    let _cmd = info_span!("probability").entered();
    let config = WxprobConfig::load(args.source.config.as_deref())?;

    // Reject bad input before any retrieval.
    let query = convert::build_query(&args.query, &config.query, args.threshold)?;
    query.validate().context("invalid query")?;
    let estimate_config = convert::build_estimate_config(&config.query);
    let request = convert::build_series_request(
        &args.source,
        &config,
        &args.query.variable,
        Utc::now(),
    );

    let source = convert::open_source(&args.source, &config)?;
    info!(
        variable = request.parameter(),
        start_year = request.start_year(),
        end_year = request.end_year(),
        "retrieving series"
    );
    let series = source
        .fetch(&request)
        .context("failed to retrieve daily series")?;
    info!(n_days = series.len(), "series loaded");

    let result = estimate(&series, &query, &estimate_config)?;
    info!(n = result.n, k = result.k, "estimate complete");

    output::emit(&to_json(&result)?, args.output.as_deref())
}
