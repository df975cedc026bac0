//! TOML configuration file: `[source]` and `[query]` tables with defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level wxprob configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WxprobConfig {
    /// Data source settings.
    #[serde(default)]
    pub source: SourceToml,

    /// Query defaults.
    #[serde(default)]
    pub query: QueryToml,
}

impl WxprobConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceToml {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_community")]
    pub community: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceToml {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            community: default_community(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    wxprob_io::DEFAULT_BASE_URL.to_string()
}
fn default_community() -> String {
    wxprob_io::DEFAULT_COMMUNITY.to_string()
}
fn default_timeout_secs() -> u64 {
    wxprob_io::DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryToml {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_z_score")]
    pub z_score: f64,
}

impl Default for QueryToml {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            start_year: default_start_year(),
            z_score: default_z_score(),
        }
    }
}

fn default_window_days() -> u32 {
    wxprob_exceedance::DEFAULT_WINDOW_DAYS
}
fn default_start_year() -> i32 {
    1990
}
fn default_z_score() -> f64 {
    wxprob_exceedance::DEFAULT_Z
}
