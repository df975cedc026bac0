//! NASA POWER daily point responses.
//!
//! A POWER response is a GeoJSON feature whose
//! `properties.parameter.<PARAM>` object maps `YYYYMMDD` keys to numbers.
//! Missing days carry the fill value announced in `header.fill_value`.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;
use wxprob_calendar::GregorianDate;
use wxprob_exceedance::DailySeries;

use crate::error::IoError;

/// POWER's fill value when the header does not state one.
pub const DEFAULT_FILL_VALUE: f64 = -999.0;

type DateValues = BTreeMap<String, Option<f64>>;

#[derive(Debug, Deserialize)]
struct PowerResponse {
    #[serde(default)]
    header: PowerHeader,
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerHeader {
    #[serde(default = "default_fill_value")]
    fill_value: f64,
}

impl Default for PowerHeader {
    fn default() -> Self {
        Self {
            fill_value: DEFAULT_FILL_VALUE,
        }
    }
}

fn default_fill_value() -> f64 {
    DEFAULT_FILL_VALUE
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: BTreeMap<String, DateValues>,
}

/// Either a full POWER response or a bare `{"YYYYMMDD": value}` map.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeriesDocument {
    Power(PowerResponse),
    Flat(DateValues),
}

/// Parses a POWER daily point response and extracts `parameter`.
///
/// Fill values, `null` and non-finite numbers become missing days.
///
/// # Errors
///
/// - [`IoError::Json`] if `body` is not a POWER response.
/// - [`IoError::MissingParameter`] if the response lacks `parameter`.
/// - [`IoError::InvalidDate`] if a key is not a valid `YYYYMMDD` date.
pub fn parse_power_response(body: &str, parameter: &str) -> Result<DailySeries, IoError> {
    let response: PowerResponse = serde_json::from_str(body)?;
    extract_parameter(response, parameter)
}

/// Parses either a POWER response or a flat `{"YYYYMMDD": value}` map.
///
/// `parameter` is only consulted for POWER responses. Flat maps use
/// [`DEFAULT_FILL_VALUE`].
///
/// # Errors
///
/// As [`parse_power_response`].
pub fn parse_series_json(body: &str, parameter: &str) -> Result<DailySeries, IoError> {
    match serde_json::from_str::<SeriesDocument>(body)? {
        SeriesDocument::Power(response) => extract_parameter(response, parameter),
        SeriesDocument::Flat(values) => build_series(values, DEFAULT_FILL_VALUE),
    }
}

fn extract_parameter(mut response: PowerResponse, parameter: &str) -> Result<DailySeries, IoError> {
    let fill_value = response.header.fill_value;
    let Some(values) = response.properties.parameter.remove(parameter) else {
        let available: Vec<&str> = response
            .properties
            .parameter
            .keys()
            .map(String::as_str)
            .collect();
        return Err(IoError::MissingParameter {
            name: parameter.to_string(),
            available: available.join(", "),
        });
    };
    build_series(values, fill_value)
}

fn build_series(values: DateValues, fill_value: f64) -> Result<DailySeries, IoError> {
    let mut series = DailySeries::new();
    let mut n_missing = 0usize;
    for (key, value) in values {
        let date = GregorianDate::parse_compact(&key).map_err(|e| IoError::InvalidDate {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        let value = value.filter(|v| v.is_finite() && *v != fill_value);
        n_missing += usize::from(value.is_none());
        series.insert(date, value);
    }
    debug!(n_days = series.len(), n_missing, "parsed daily series");
    Ok(series)
}
