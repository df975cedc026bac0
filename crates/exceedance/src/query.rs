//! Query parameters for an exceedance estimate.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use wxprob_calendar::MonthDay;

use crate::error::EstimateError;
use crate::validate::ValidationCollector;

/// Half-width of the day-window when none is given.
pub const DEFAULT_WINDOW_DAYS: u32 = 3;

/// Comparison applied between each daily value and the threshold.
///
/// Both comparisons are strict: a value equal to the threshold never counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `value > threshold`
    Greater,
    /// `value < threshold`
    Less,
}

impl Direction {
    /// Returns `true` if `value` satisfies the comparison.
    pub fn compare(self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::Greater => value > threshold,
            Direction::Less => value < threshold,
        }
    }

    /// Operator symbol, `">"` or `"<"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Greater => ">",
            Direction::Less => "<",
        }
    }
}

impl FromStr for Direction {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            ">" | "gt" | "greater" => Ok(Direction::Greater),
            "<" | "lt" | "less" => Ok(Direction::Less),
            _ => Err(EstimateError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// What to estimate: the variable, the calendar anchor, the window
/// half-width, and the threshold comparison.
///
/// # Example
///
/// ```
/// use wxprob_exceedance::{Direction, ExceedanceQuery};
///
/// let query = ExceedanceQuery::new("T2M_MAX", 7, 15, 35.0, Direction::Greater)
///     .with_window_days(5);
///
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExceedanceQuery {
    variable: String,
    month: u8,
    day: u8,
    window_days: u32,
    threshold: f64,
    direction: Direction,
}

impl ExceedanceQuery {
    /// Creates a query with the default window of [`DEFAULT_WINDOW_DAYS`].
    pub fn new(
        variable: impl Into<String>,
        month: u8,
        day: u8,
        threshold: f64,
        direction: Direction,
    ) -> Self {
        Self {
            variable: variable.into(),
            month,
            day,
            window_days: DEFAULT_WINDOW_DAYS,
            threshold,
            direction,
        }
    }

    /// Sets the window half-width in days.
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    /// Replaces the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the variable identifier.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the target month.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the target day.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the window half-width in days.
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the comparison direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Validates the query and returns its calendar anchor.
    ///
    /// All failures are reported together.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Validation`] if the month is outside 1..=12,
    /// the day is outside 1..=31, the threshold is not finite, or the
    /// variable name is empty.
    pub fn validate(&self) -> Result<MonthDay, EstimateError> {
        let mut c = ValidationCollector::new();
        c.check((1..=12).contains(&self.month), || {
            format!("month {} not in 1..=12", self.month)
        });
        c.check((1..=31).contains(&self.day), || {
            format!("day {} not in 1..=31", self.day)
        });
        c.check(self.threshold.is_finite(), || {
            format!("threshold {} is not finite", self.threshold)
        });
        c.check(!self.variable.trim().is_empty(), || {
            "variable name is empty".to_string()
        });
        c.finish()?;

        MonthDay::new(self.month, self.day).map_err(|e| EstimateError::Validation {
            count: 1,
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_symbols_and_words() {
        assert_eq!(">".parse::<Direction>().unwrap(), Direction::Greater);
        assert_eq!("<".parse::<Direction>().unwrap(), Direction::Less);
        assert_eq!("GT".parse::<Direction>().unwrap(), Direction::Greater);
        assert_eq!(" less ".parse::<Direction>().unwrap(), Direction::Less);
    }

    #[test]
    fn direction_rejects_unknown() {
        for raw in [">=", "<=", "==", "", "above"] {
            assert!(
                matches!(
                    raw.parse::<Direction>(),
                    Err(EstimateError::InvalidDirection { .. })
                ),
                "expected rejection of {raw:?}"
            );
        }
    }

    #[test]
    fn direction_compare_is_strict() {
        assert!(Direction::Greater.compare(30.1, 30.0));
        assert!(!Direction::Greater.compare(30.0, 30.0));
        assert!(Direction::Less.compare(29.9, 30.0));
        assert!(!Direction::Less.compare(30.0, 30.0));
    }

    #[test]
    fn direction_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Direction::Greater).unwrap(), "\">\"");
        assert_eq!(serde_json::to_string(&Direction::Less).unwrap(), "\"<\"");
        assert_eq!(Direction::Less.to_string(), "<");
    }

    #[test]
    fn query_defaults() {
        let q = ExceedanceQuery::new("T2M", 1, 1, 0.0, Direction::Less);
        assert_eq!(q.window_days(), DEFAULT_WINDOW_DAYS);
        assert_eq!(q.variable(), "T2M");
    }

    #[test]
    fn query_validate_returns_anchor() {
        let q = ExceedanceQuery::new("PRECTOTCORR", 2, 29, 10.0, Direction::Greater);
        let anchor = q.validate().unwrap();
        assert_eq!((anchor.month(), anchor.day()), (2, 29));
    }

    #[test]
    fn query_validate_accumulates() {
        let q = ExceedanceQuery::new(" ", 13, 0, f64::NAN, Direction::Greater);
        match q.validate().unwrap_err() {
            EstimateError::Validation { count, details } => {
                assert_eq!(count, 4);
                assert!(details.contains("month 13"));
                assert!(details.contains("day 0"));
                assert!(details.contains("not finite"));
                assert!(details.contains("variable name is empty"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn query_builder_chaining() {
        let q = ExceedanceQuery::new("T2M_MAX", 7, 15, 35.0, Direction::Greater)
            .with_window_days(0)
            .with_threshold(40.0);
        assert_eq!(q.window_days(), 0);
        assert_eq!(q.threshold(), 40.0);
    }
}
