//! Series sources behind a common trait.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wxprob_exceedance::DailySeries;

use crate::client::PowerClient;
use crate::error::IoError;
use crate::power::parse_series_json;
use crate::request::SeriesRequest;

/// Something that can produce a daily series for a request.
pub trait SeriesSource {
    /// Returns the series for `request`, restricted to its year range.
    ///
    /// # Errors
    ///
    /// Returns an [`IoError`] describing why the series is unavailable.
    fn fetch(&self, request: &SeriesRequest) -> Result<DailySeries, IoError>;
}

impl SeriesSource for PowerClient {
    fn fetch(&self, request: &SeriesRequest) -> Result<DailySeries, IoError> {
        self.fetch_series(request)
    }
}

/// Reads a saved POWER response, or a flat `{"YYYYMMDD": value}` map, from
/// disk.
///
/// The request's location is ignored; only its parameter and year range
/// apply.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for FileSource {
    #[tracing::instrument(skip(self, request), fields(path = %self.path.display()))]
    fn fetch(&self, request: &SeriesRequest) -> Result<DailySeries, IoError> {
        request.validate()?;
        let series = read_series_json(&self.path, request.parameter())?;
        let total = series.len();
        let series: DailySeries = series
            .iter()
            .filter(|(date, _)| request.covers_year(date.year()))
            .collect();
        debug!(total, kept = series.len(), "restricted to requested years");
        Ok(series)
    }
}

/// Reads and parses a series file.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Read`] if it cannot be read.
/// - Any parse error of [`parse_series_json`].
pub fn read_series_json(path: &Path, parameter: &str) -> Result<DailySeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let body = std::fs::read_to_string(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let series = parse_series_json(&body, parameter)?;
    info!(path = %path.display(), n_days = series.len(), "series file read");
    Ok(series)
}
