use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Day-window exceedance probabilities from daily climate records.
#[derive(Parser)]
#[command(
    name = "wxprob",
    version,
    about = "Day-window exceedance probabilities from daily climate records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate the probability for one threshold.
    Probability(ProbabilityArgs),
    /// Estimate probabilities for several thresholds against one series.
    Batch(BatchArgs),
}

/// Where the daily series comes from.
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Latitude in decimal degrees (POWER retrieval).
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees (POWER retrieval).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Saved POWER response or flat date map to read instead of the API.
    #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
    pub input: Option<PathBuf>,

    /// First year of the record (default from config, else 1990).
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year of the record (default: last complete calendar year).
    #[arg(long)]
    pub end_year: Option<i32>,

    /// POWER user community (default from config, else AG).
    #[arg(long)]
    pub community: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// What to estimate, apart from the threshold.
#[derive(clap::Args)]
pub struct QueryArgs {
    /// POWER parameter, e.g. T2M_MAX or PRECTOTCORR.
    #[arg(long)]
    pub variable: String,

    /// Target month (1-12).
    #[arg(long)]
    pub month: u8,

    /// Target day of month (1-31).
    #[arg(long)]
    pub day: u8,

    /// Comparison: '>' / gt / greater or '<' / lt / less.
    #[arg(long, default_value = ">")]
    pub operator: String,

    /// Window half-width in days (default from config, else 3).
    #[arg(short, long)]
    pub window: Option<u32>,
}

/// Arguments for the `probability` subcommand.
#[derive(clap::Args)]
pub struct ProbabilityArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Threshold, in the variable's units.
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Write the result JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Comma-separated thresholds, e.g. 30,35,40.
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        required = true,
        allow_negative_numbers = true
    )]
    pub thresholds: Vec<f64>,

    /// Write the result JSON array here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
