//! Date sequence generation.

use crate::date::GregorianDate;

/// Generates a contiguous sequence of Gregorian dates.
///
/// Starting from `start`, produces up to `n_days` consecutive dates. Year
/// boundaries and leap days are handled by the underlying calendar. The
/// sequence stops early only at the end of the representable range.
///
/// # Example
///
/// ```ignore
/// let start = GregorianDate::new(2000, 12, 30).unwrap();
/// let dates = daily_sequence(start, 4);
/// // Dec 30, Dec 31, Jan 1 (2001), Jan 2 (2001)
/// ```
pub fn daily_sequence(start: GregorianDate, n_days: usize) -> Vec<GregorianDate> {
    let mut dates = Vec::with_capacity(n_days);
    let mut current = Some(start);
    while dates.len() < n_days {
        match current {
            Some(d) => {
                dates.push(d);
                current = d.next();
            }
            None => break,
        }
    }
    dates
}

/// Every date from `start` to `end`, both inclusive.
///
/// Returns an empty vector when `end < start`.
pub fn date_range(start: GregorianDate, end: GregorianDate) -> Vec<GregorianDate> {
    let span = end.days_since(start);
    if span < 0 {
        return Vec::new();
    }
    daily_sequence(start, span as usize + 1)
}
