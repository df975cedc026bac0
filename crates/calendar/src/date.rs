//! Gregorian date with year context.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::month::days_in_month;

/// A validated date in the proleptic Gregorian calendar.
///
/// Ordering is chronological, so the type can key an ordered map of daily
/// observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// if the month or day does not exist in `year`, and
    /// [`CalendarError::OutOfRange`] if the year cannot be represented.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::OutOfRange { year })
    }

    /// Parses the compact `YYYYMMDD` form used by daily point APIs.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidFormat`] if `raw` is not exactly eight
    /// ASCII digits, or any error from [`GregorianDate::new`] if the digits
    /// do not name a real date.
    pub fn parse_compact(raw: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidFormat {
            raw: raw.to_string(),
        };
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = raw[0..4].parse().map_err(|_| invalid())?;
        let month: u8 = raw[4..6].parse().map_err(|_| invalid())?;
        let day: u8 = raw[6..8].parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }

    /// Returns the underlying chrono date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the day of the year (1..=366).
    pub fn ordinal(self) -> u16 {
        self.0.ordinal() as u16
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month(), self.day())
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(self, other: Self) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// Absolute number of days between `self` and `other`.
    pub fn distance_days(self, other: Self) -> u64 {
        self.days_since(other).unsigned_abs()
    }

    /// Returns the following day, or `None` at the end of the representable range.
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = GregorianDate::new(2000, 1, 1).unwrap();
        assert_eq!(date.year(), 2000);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
        assert_eq!(date.ordinal(), 1);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            GregorianDate::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn feb_29_leap_and_common() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            GregorianDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_invalid_day_zero() {
        assert!(matches!(
            GregorianDate::new(2023, 5, 0),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn out_of_range_year() {
        assert_eq!(
            GregorianDate::new(i32::MAX, 1, 1).unwrap_err(),
            CalendarError::OutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn parse_compact_valid() {
        let date = GregorianDate::parse_compact("20240229").unwrap();
        assert_eq!(date, GregorianDate::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_compact_rejects_malformed() {
        for raw in ["2024-01-01", "2024011", "2024O101", "", "202401011"] {
            assert!(
                matches!(
                    GregorianDate::parse_compact(raw),
                    Err(CalendarError::InvalidFormat { .. })
                ),
                "expected InvalidFormat for {raw:?}"
            );
        }
    }

    #[test]
    fn parse_compact_rejects_impossible_date() {
        assert!(matches!(
            GregorianDate::parse_compact("20230229"),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn ordinal_after_leap_day() {
        assert_eq!(GregorianDate::new(2024, 3, 1).unwrap().ordinal(), 61);
        assert_eq!(GregorianDate::new(2023, 3, 1).unwrap().ordinal(), 60);
    }

    #[test]
    fn distance_across_year_boundary() {
        let dec30 = GregorianDate::new(2000, 12, 30).unwrap();
        let jan2 = GregorianDate::new(2001, 1, 2).unwrap();
        assert_eq!(jan2.days_since(dec30), 3);
        assert_eq!(dec30.days_since(jan2), -3);
        assert_eq!(dec30.distance_days(jan2), 3);
    }

    #[test]
    fn next_dec_31_year_wrap() {
        let date = GregorianDate::new(2000, 12, 31).unwrap();
        let next = date.next().unwrap();
        assert_eq!(next.year(), 2001);
        assert_eq!(next.month_day(), (1, 1));
    }

    #[test]
    fn next_feb_28_leap() {
        let date = GregorianDate::new(2024, 2, 28).unwrap();
        assert_eq!(date.next().unwrap().month_day(), (2, 29));
        let date = GregorianDate::new(2023, 2, 28).unwrap();
        assert_eq!(date.next().unwrap().month_day(), (3, 1));
    }

    #[test]
    fn ord_different_years() {
        let dec31 = GregorianDate::new(1999, 12, 31).unwrap();
        let jan1 = GregorianDate::new(2000, 1, 1).unwrap();
        assert!(dec31 < jan1);
    }

    #[test]
    fn display_iso() {
        let date = GregorianDate::new(2001, 7, 4).unwrap();
        assert_eq!(date.to_string(), "2001-07-04");
    }

    #[test]
    fn copy_and_hash() {
        fn assert_impl<T: Copy + std::hash::Hash>() {}
        assert_impl::<GregorianDate>();
    }
}
