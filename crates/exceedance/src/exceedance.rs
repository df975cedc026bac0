//! Exceedance counting over a windowed series.

use crate::error::EstimateError;
use crate::query::Direction;
use crate::series::WindowedSeries;

/// Counts from a single threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExceedanceOutcome {
    /// Number of valid samples.
    pub n: usize,
    /// Number of samples satisfying the comparison (`k <= n`).
    pub k: usize,
    /// `k / n`.
    pub probability: f64,
}

/// Counts valid values in `windowed` and how many satisfy `direction`
/// against `threshold`.
///
/// Missing and non-finite values are dropped before counting.
///
/// # Errors
///
/// Returns [`EstimateError::EmptySample`] if no valid value remains.
pub fn count_exceedances(
    windowed: &WindowedSeries,
    threshold: f64,
    direction: Direction,
) -> Result<ExceedanceOutcome, EstimateError> {
    let (n, k) = windowed.valid().fold((0usize, 0usize), |(n, k), (_, v)| {
        (n + 1, k + usize::from(direction.compare(v, threshold)))
    });

    if n == 0 {
        return Err(EstimateError::EmptySample {
            selected_days: windowed.len(),
        });
    }

    Ok(ExceedanceOutcome {
        n,
        k,
        probability: k as f64 / n as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DailySeries;
    use wxprob_calendar::{GregorianDate, daily_sequence};

    fn series(values: &[Option<f64>]) -> DailySeries {
        let start = GregorianDate::new(2000, 1, 1).unwrap();
        daily_sequence(start, values.len())
            .into_iter()
            .zip(values.iter().copied())
            .collect()
    }

    #[test]
    fn strict_greater_excludes_equal() {
        let s = series(&[Some(29.0), Some(30.0), Some(31.0), Some(32.0)]);
        let out = count_exceedances(&s, 30.0, Direction::Greater).unwrap();
        assert_eq!((out.n, out.k), (4, 2));
        assert_eq!(out.probability, 0.5);
    }

    #[test]
    fn strict_less_excludes_equal() {
        let s = series(&[Some(29.0), Some(30.0), Some(31.0), Some(32.0)]);
        let out = count_exceedances(&s, 30.0, Direction::Less).unwrap();
        assert_eq!((out.n, out.k), (4, 1));
    }

    #[test]
    fn missing_values_are_dropped() {
        let s = series(&[Some(31.0), None, Some(f64::NAN), Some(29.0)]);
        let out = count_exceedances(&s, 30.0, Direction::Greater).unwrap();
        assert_eq!((out.n, out.k), (2, 1));
    }

    #[test]
    fn all_missing_is_empty_sample() {
        let s = series(&[None, None, Some(f64::NAN)]);
        assert_eq!(
            count_exceedances(&s, 30.0, Direction::Greater).unwrap_err(),
            EstimateError::EmptySample { selected_days: 3 }
        );
    }

    #[test]
    fn empty_window_is_empty_sample() {
        let s = DailySeries::new();
        assert_eq!(
            count_exceedances(&s, 0.0, Direction::Less).unwrap_err(),
            EstimateError::EmptySample { selected_days: 0 }
        );
    }
}
