//! Error types for the wxprob-calendar crate.

/// Error type for all fallible operations in the wxprob-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values, years outside the representable range, and malformed date
/// strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year the month was evaluated in.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a month/day anchor names a day outside 1..=31.
    #[error("invalid anchor day: {day} (must be 1..=31)")]
    InvalidAnchorDay {
        /// The invalid day number that was provided.
        day: u8,
    },

    /// Returned when a year cannot be represented.
    #[error("year out of range: {year}")]
    OutOfRange {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned when a date string is not in `YYYYMMDD` form.
    #[error("invalid date string: '{raw}' (expected YYYYMMDD)")]
    InvalidFormat {
        /// The string that failed to parse.
        raw: String,
    },
}
