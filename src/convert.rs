//! Pure conversion functions: CLI arguments and TOML config -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Datelike, Utc};

use wxprob_exceedance::{Direction, EstimateConfig, ExceedanceQuery};
use wxprob_io::{FileSource, PowerClient, PowerConfig, SeriesRequest, SeriesSource};

use crate::cli::{QueryArgs, SourceArgs};
use crate::config::{QueryToml, SourceToml, WxprobConfig};

/// Parses a comparison operator, rejecting anything but `>`/`<` forms.
pub fn parse_direction(s: &str) -> Result<Direction> {
    s.parse::<Direction>().context("invalid --operator")
}

/// The last complete calendar year as of `now`.
pub fn default_end_year(now: DateTime<Utc>) -> i32 {
    now.year() - 1
}

/// Builds a [`PowerConfig`] from the TOML source configuration.
pub fn build_power_config(source: &SourceToml) -> PowerConfig {
    PowerConfig::default()
        .with_base_url(&source.base_url)
        .with_timeout_secs(source.timeout_secs)
}

/// Builds an [`EstimateConfig`] from the TOML query configuration.
pub fn build_estimate_config(query: &QueryToml) -> EstimateConfig {
    EstimateConfig::default().with_z_score(query.z_score)
}

/// Builds an [`ExceedanceQuery`]; CLI flags override config defaults.
pub fn build_query(args: &QueryArgs, defaults: &QueryToml, threshold: f64) -> Result<ExceedanceQuery> {
    let direction = parse_direction(&args.operator)?;
    Ok(
        ExceedanceQuery::new(&args.variable, args.month, args.day, threshold, direction)
            .with_window_days(args.window.unwrap_or(defaults.window_days)),
    )
}

/// Builds a [`SeriesRequest`] for `variable`; CLI flags override config
/// defaults, and the end year falls back to the year before `now`.
pub fn build_series_request(
    args: &SourceArgs,
    config: &WxprobConfig,
    variable: &str,
    now: DateTime<Utc>,
) -> SeriesRequest {
    let start_year = args.start_year.unwrap_or(config.query.start_year);
    let end_year = args.end_year.unwrap_or_else(|| default_end_year(now));
    let community = args
        .community
        .clone()
        .unwrap_or_else(|| config.source.community.clone());

    let mut request = SeriesRequest::new(variable, start_year, end_year).with_community(community);
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        request = request.with_location(lat, lon);
    }
    request
}

/// Chooses the file or API source from the CLI arguments.
pub fn open_source(args: &SourceArgs, config: &WxprobConfig) -> Result<Box<dyn SeriesSource>> {
    if let Some(path) = &args.input {
        return Ok(Box::new(FileSource::new(path)));
    }
    if args.lat.is_none() || args.lon.is_none() {
        bail!("no data source: pass --lat and --lon, or --input <file>");
    }
    let client = PowerClient::new(build_power_config(&config.source))
        .context("failed to build POWER client")?;
    Ok(Box::new(client))
}
