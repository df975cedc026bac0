//! Month/day anchors resolved against a specific year.
//!
//! A target such as "February 29" or "April 31" does not exist in every
//! year. Resolution follows one fixed policy: when the requested day is not
//! valid for the month in that year, the reference falls back to
//! [`FALLBACK_DAY`] of the same month. The policy applies to each year
//! independently.

use crate::date::GregorianDate;
use crate::error::CalendarError;

/// Day substituted when an anchor does not exist in a given year.
pub const FALLBACK_DAY: u8 = 28;

/// A calendar month/day pair without a year.
///
/// `day` may exceed the length of `month` (for example Feb 29 or Feb 30);
/// such anchors resolve through the fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a new anchor.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
    /// [`CalendarError::InvalidAnchorDay`] if `day` is not in 1..=31.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidAnchorDay { day });
        }
        Ok(Self { month, day })
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the requested day (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Resolves the anchor to a concrete date in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if `year` cannot be represented.
    pub fn in_year(self, year: i32) -> Result<GregorianDate, CalendarError> {
        match GregorianDate::new(year, self.month, self.day) {
            Err(CalendarError::InvalidDay { .. }) => {
                GregorianDate::new(year, self.month, FALLBACK_DAY)
            }
            other => other,
        }
    }

    /// Returns `true` if resolving in `year` uses the fallback day.
    pub fn is_substituted(self, year: i32) -> bool {
        matches!(
            GregorianDate::new(year, self.month, self.day),
            Err(CalendarError::InvalidDay { .. })
        )
    }
}
