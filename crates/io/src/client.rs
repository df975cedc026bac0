//! Blocking HTTP client for the NASA POWER daily point endpoint.

use std::time::Duration;

use tracing::{debug, info};
use wxprob_exceedance::DailySeries;

use crate::error::IoError;
use crate::power::parse_power_response;
use crate::request::SeriesRequest;
use crate::validate::ValidationCollector;

/// Public POWER service.
pub const DEFAULT_BASE_URL: &str = "https://power.larc.nasa.gov";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const DAILY_POINT_PATH: &str = "/api/temporal/daily/point";

/// Endpoint and timeout for [`PowerClient`].
#[derive(Debug, Clone)]
pub struct PowerConfig {
    base_url: String,
    timeout_secs: u64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PowerConfig {
    /// Set the service root, without the API path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the whole-request timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Full URL of the daily point endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{DAILY_POINT_PATH}", self.base_url.trim_end_matches('/'))
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the base URL is not http(s) or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        c.check(
            self.base_url.starts_with("http://") || self.base_url.starts_with("https://"),
            || format!("base_url '{}' is not an http(s) URL", self.base_url),
        );
        c.check(self.timeout_secs > 0, || {
            "timeout_secs must be positive".to_string()
        });
        c.finish()
    }
}

/// Query string for a daily point request.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the request has no location.
pub fn query_pairs(request: &SeriesRequest) -> Result<Vec<(&'static str, String)>, IoError> {
    let Some((latitude, longitude)) = request.location() else {
        return Err(IoError::Validation {
            count: 1,
            details: "a latitude/longitude location is required".to_string(),
        });
    };
    Ok(vec![
        ("parameters", request.parameter().to_string()),
        ("community", request.community().to_string()),
        ("longitude", longitude.to_string()),
        ("latitude", latitude.to_string()),
        ("start", format!("{:04}0101", request.start_year())),
        ("end", format!("{:04}1231", request.end_year())),
        ("format", "JSON".to_string()),
    ])
}

/// Fetches daily series from the POWER API.
#[derive(Debug, Clone)]
pub struct PowerClient {
    config: PowerConfig,
    http: reqwest::blocking::Client,
}

impl PowerClient {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] for an invalid config, or
    /// [`IoError::Http`] if the TLS backend cannot be initialised.
    pub fn new(config: PowerConfig) -> Result<Self, IoError> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    /// Downloads and parses the series for `request`.
    ///
    /// # Errors
    ///
    /// - [`IoError::Validation`] for an invalid request or missing location.
    /// - [`IoError::Http`] on transport failure or timeout.
    /// - [`IoError::Status`] on a non-success response.
    /// - Any parse error of [`parse_power_response`].
    #[tracing::instrument(skip(self), fields(parameter = request.parameter()))]
    pub fn fetch_series(&self, request: &SeriesRequest) -> Result<DailySeries, IoError> {
        request.validate()?;
        let query = query_pairs(request)?;
        let url = self.config.endpoint();

        info!(
            start_year = request.start_year(),
            end_year = request.end_year(),
            "requesting POWER daily series"
        );
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(&query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(IoError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text()?;
        debug!(bytes = body.len(), "POWER response received");
        parse_power_response(&body, request.parameter())
    }
}
