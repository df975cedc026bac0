//! Date-indexed daily series.

use std::collections::BTreeMap;

use wxprob_calendar::GregorianDate;

/// Daily observations of one variable at one location.
///
/// Each date maps to a value or `None` for a missing day. Dates that were
/// never inserted are simply absent. Non-finite values are kept as given but
/// every consumer treats them as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    values: BTreeMap<GregorianDate, Option<f64>>,
}

/// A day-window subset of a [`DailySeries`]; same representation, owned
/// independently of its source.
pub type WindowedSeries = DailySeries;

impl DailySeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the value for `date`, returning the previous entry.
    pub fn insert(&mut self, date: GregorianDate, value: Option<f64>) -> Option<Option<f64>> {
        self.values.insert(date, value)
    }

    /// Returns the entry for `date`: `None` if the date is absent,
    /// `Some(None)` if present but missing.
    pub fn get(&self, date: GregorianDate) -> Option<Option<f64>> {
        self.values.get(&date).copied()
    }

    /// Number of dates present, including missing ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no dates are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over every entry in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (GregorianDate, Option<f64>)> + '_ {
        self.values.iter().map(|(&d, &v)| (d, v))
    }

    /// Iterates over entries holding a finite value.
    pub fn valid(&self) -> impl Iterator<Item = (GregorianDate, f64)> + '_ {
        self.iter()
            .filter_map(|(d, v)| v.filter(|x| x.is_finite()).map(|x| (d, x)))
    }

    /// Collects the finite values in chronological order.
    pub fn valid_values(&self) -> Vec<f64> {
        self.valid().map(|(_, v)| v).collect()
    }

    /// First and last date present.
    pub fn span(&self) -> Option<(GregorianDate, GregorianDate)> {
        let first = self.values.keys().next()?;
        let last = self.values.keys().next_back()?;
        Some((*first, *last))
    }
}

impl FromIterator<(GregorianDate, Option<f64>)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (GregorianDate, Option<f64>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(GregorianDate, f64)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (GregorianDate, f64)>>(iter: I) -> Self {
        iter.into_iter().map(|(d, v)| (d, Some(v))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn insert_and_get() {
        let mut s = DailySeries::new();
        assert!(s.insert(date(2000, 1, 1), Some(1.0)).is_none());
        s.insert(date(2000, 1, 2), None);
        assert_eq!(s.get(date(2000, 1, 1)), Some(Some(1.0)));
        assert_eq!(s.get(date(2000, 1, 2)), Some(None));
        assert_eq!(s.get(date(2000, 1, 3)), None);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn duplicate_date_replaces() {
        let mut s = DailySeries::new();
        s.insert(date(2000, 1, 1), Some(1.0));
        let prev = s.insert(date(2000, 1, 1), Some(2.0));
        assert_eq!(prev, Some(Some(1.0)));
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(date(2000, 1, 1)), Some(Some(2.0)));
    }

    #[test]
    fn valid_skips_missing_and_non_finite() {
        let s: DailySeries = vec![
            (date(2000, 1, 1), Some(1.0)),
            (date(2000, 1, 2), None),
            (date(2000, 1, 3), Some(f64::NAN)),
            (date(2000, 1, 4), Some(f64::INFINITY)),
            (date(2000, 1, 5), Some(5.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(s.len(), 5);
        assert_eq!(s.valid_values(), vec![1.0, 5.0]);
    }

    #[test]
    fn iteration_is_chronological() {
        let s: DailySeries = vec![
            (date(2001, 1, 1), 3.0),
            (date(1999, 6, 1), 1.0),
            (date(2000, 3, 1), 2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(s.valid_values(), vec![1.0, 2.0, 3.0]);
        assert_eq!(s.span(), Some((date(1999, 6, 1), date(2001, 1, 1))));
    }

    #[test]
    fn empty_series() {
        let s = DailySeries::new();
        assert!(s.is_empty());
        assert!(s.span().is_none());
        assert!(s.valid_values().is_empty());
    }
}
