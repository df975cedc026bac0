//! What series to retrieve.

use crate::error::IoError;
use crate::validate::{ValidationCollector, check_in_range};

/// POWER user community when none is given.
pub const DEFAULT_COMMUNITY: &str = "AG";

/// A daily series request: one parameter, an inclusive year range, and an
/// optional point location.
///
/// The location is required by the POWER API and ignored by file sources.
///
/// # Example
///
/// ```
/// use wxprob_io::SeriesRequest;
///
/// let request = SeriesRequest::new("T2M_MAX", 1990, 2023).with_location(46.8, 8.2);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.community(), "AG");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    parameter: String,
    start_year: i32,
    end_year: i32,
    location: Option<(f64, f64)>,
    community: String,
}

impl SeriesRequest {
    /// Creates a request without a location.
    pub fn new(parameter: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            parameter: parameter.into(),
            start_year,
            end_year,
            location: None,
            community: DEFAULT_COMMUNITY.to_string(),
        }
    }

    /// Sets the point location in decimal degrees.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some((latitude, longitude));
        self
    }

    /// Sets the POWER community (`AG`, `RE` or `SB`).
    pub fn with_community(mut self, community: impl Into<String>) -> Self {
        self.community = community.into();
        self
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns `(latitude, longitude)` if set.
    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    pub fn community(&self) -> &str {
        &self.community
    }

    /// Returns `true` if `year` is inside the requested range.
    pub fn covers_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every failure: an empty
    /// parameter, `start_year > end_year`, a latitude outside [-90, 90], or
    /// a longitude outside [-180, 180].
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        c.check(!self.parameter.trim().is_empty(), || {
            "parameter is empty".to_string()
        });
        c.check(self.start_year <= self.end_year, || {
            format!(
                "start_year {} is after end_year {}",
                self.start_year, self.end_year
            )
        });
        if let Some((lat, lon)) = self.location {
            check_in_range(&mut c, "latitude", lat, -90.0, 90.0);
            check_in_range(&mut c, "longitude", lon, -180.0, 180.0);
        }
        c.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let r = SeriesRequest::new("T2M", 2000, 2001);
        assert_eq!(r.community(), DEFAULT_COMMUNITY);
        assert_eq!(r.location(), None);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn single_year_range_is_valid() {
        assert!(SeriesRequest::new("T2M", 2005, 2005).validate().is_ok());
    }

    #[test]
    fn covers_year_is_inclusive() {
        let r = SeriesRequest::new("T2M", 2000, 2002);
        assert!(r.covers_year(2000));
        assert!(r.covers_year(2002));
        assert!(!r.covers_year(1999));
        assert!(!r.covers_year(2003));
    }

    #[test]
    fn validate_accumulates_all_failures() {
        let r = SeriesRequest::new("", 2010, 2000).with_location(95.0, -200.0);
        match r.validate().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 4);
                assert!(details.contains("parameter is empty"));
                assert!(details.contains("start_year 2010 is after end_year 2000"));
                assert!(details.contains("latitude 95"));
                assert!(details.contains("longitude -200"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
