//! Property checks over the estimation stages.

use approx::assert_relative_eq;
use wxprob_calendar::{GregorianDate, MonthDay, date_range};
use wxprob_exceedance::{
    DEFAULT_Z, DailySeries, Direction, EstimateConfig, EstimateError, ExceedanceQuery,
    YearlyFraction, estimate, fit_yearly, select_window, to_json, wilson_interval,
};

fn date(y: i32, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn anchor(m: u8, d: u8) -> MonthDay {
    MonthDay::new(m, d).unwrap()
}

/// Every day from 2000-01-01 to 2004-12-31 with value 1.0.
fn five_years() -> DailySeries {
    date_range(date(2000, 1, 1), date(2004, 12, 31))
        .into_iter()
        .map(|d| (d, 1.0))
        .collect()
}

#[test]
fn wilson_interval_bounds_hold_for_all_counts() {
    for n in 1..=50usize {
        for k in 0..=n {
            let ci = wilson_interval(k, n, DEFAULT_Z).unwrap();
            let p = k as f64 / n as f64;
            assert!(
                0.0 <= ci.lower && ci.lower <= ci.upper && ci.upper <= 1.0,
                "k={k} n={n}: {ci:?} not ordered inside [0, 1]"
            );
            assert!(
                ci.lower <= p && p <= ci.upper,
                "k={k} n={n}: {ci:?} does not contain {p}"
            );
        }
    }
}

#[test]
fn wilson_interval_zero_trials() {
    assert!(wilson_interval(0, 0, DEFAULT_Z).is_none());
}

#[test]
fn zero_width_window_keeps_matching_days() {
    let w = select_window(&five_years(), anchor(7, 15), 0);
    assert_eq!(w.len(), 5);
    assert!(w.iter().all(|(d, _)| d.month_day() == (7, 15)));
}

#[test]
fn zero_width_leap_day_window_substitutes_feb_28() {
    let w = select_window(&five_years(), anchor(2, 29), 0);
    let days: Vec<GregorianDate> = w.iter().map(|(d, _)| d).collect();
    assert_eq!(
        days,
        vec![
            date(2000, 2, 29),
            date(2001, 2, 28),
            date(2002, 2, 28),
            date(2003, 2, 28),
            date(2004, 2, 29),
        ]
    );
}

#[test]
fn nonexistent_anchor_day_falls_back_to_28() {
    // Feb 30 resolves to Feb 28 in every year; one day either side.
    let w = select_window(&five_years(), anchor(2, 30), 1);
    assert_eq!(w.len(), 15);
    assert!(w.get(date(2001, 3, 1)).is_some());
    assert!(w.get(date(2004, 2, 29)).is_some());
    assert!(w.get(date(2004, 3, 1)).is_none());
}

#[test]
fn year_end_window_crosses_into_january() {
    let series: DailySeries = date_range(date(2000, 12, 1), date(2001, 1, 31))
        .into_iter()
        .map(|d| (d, 0.0))
        .collect();
    let w = select_window(&series, anchor(12, 30), 5);
    assert!(w.get(date(2001, 1, 2)).is_some());
    assert!(w.get(date(2001, 1, 4)).is_some());
    assert!(w.get(date(2001, 1, 5)).is_none());
    assert!(w.get(date(2000, 12, 20)).is_none());
    assert!(w.get(date(2000, 12, 25)).is_some());
    assert_eq!(w.len(), 11);
}

#[test]
fn wide_windows_keep_each_date_once() {
    let series = five_years();
    for (window, expected) in [(20u32, 205usize), (40, 405)] {
        // Year-boundary anchor: the first Jan 1 only reaches forward and the
        // Jan 1 after the record only reaches back into December.
        let w = select_window(&series, anchor(1, 1), window);
        assert_eq!(w.len(), expected, "Jan 1 +/- {window}");

        let w = select_window(&series, anchor(7, 1), window);
        assert_eq!(w.len(), 5 * (2 * window as usize + 1), "Jul 1 +/- {window}");
    }
}

#[test]
fn counts_are_strict() {
    let series: DailySeries = [29.0, 30.0, 31.0, 32.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| (date(2000, 6, 14 + i as u8), v))
        .collect();
    let query = ExceedanceQuery::new("T2M", 6, 15, 30.0, Direction::Greater);
    let r = estimate(&series, &query, &EstimateConfig::default()).unwrap();
    assert_eq!((r.n, r.k), (4, 2));
    assert_eq!(r.probability, Some(0.5));
}

#[test]
fn one_to_ten_percentiles() {
    let series: DailySeries = (1..=10u8)
        .map(|i| (date(2000, 7, 9 + i), f64::from(i)))
        .collect();
    let query = ExceedanceQuery::new("T2M", 7, 15, 0.0, Direction::Greater).with_window_days(5);
    let r = estimate(&series, &query, &EstimateConfig::default()).unwrap();
    assert_eq!(r.n, 10);
    assert_relative_eq!(r.percentiles["50"], 5.5, epsilon = 1e-12);
    assert_relative_eq!(r.percentiles["10"], 1.9, epsilon = 1e-12);
    assert_relative_eq!(r.median.unwrap(), 5.5, epsilon = 1e-12);
}

#[test]
fn trend_on_three_perfect_years() {
    let yf = |year, fraction| YearlyFraction {
        year,
        n: 10,
        fraction,
    };
    let line = fit_yearly(&[yf(2000, 0.0), yf(2001, 0.5), yf(2002, 1.0)]).unwrap();
    assert_relative_eq!(line.slope, 0.5, epsilon = 1e-10);
    assert_relative_eq!(line.correlation, 1.0, epsilon = 1e-10);
    assert!(line.p_value < 0.05);
}

#[test]
fn trend_needs_two_years() {
    let one = [YearlyFraction {
        year: 2000,
        n: 5,
        fraction: 0.2,
    }];
    assert!(fit_yearly(&one).is_none());
}

#[test]
fn all_missing_window_is_empty_sample() {
    let series: DailySeries = date_range(date(2000, 7, 10), date(2000, 7, 20))
        .into_iter()
        .map(|d| (d, None::<f64>))
        .collect();
    let query = ExceedanceQuery::new("T2M", 7, 15, 0.0, Direction::Greater);
    let err = estimate(&series, &query, &EstimateConfig::default()).unwrap_err();
    assert_eq!(err, EstimateError::EmptySample { selected_days: 7 });
    assert!(err.to_string().contains("increasing the window"));
}

#[test]
fn json_never_contains_non_finite_numbers() {
    // One valid value: sd and trend are undefined, infinities are missing.
    let series: DailySeries = vec![
        (date(2000, 7, 14), Some(f64::INFINITY)),
        (date(2000, 7, 15), Some(12.0)),
        (date(2000, 7, 16), Some(f64::NAN)),
        (date(2001, 7, 15), None),
    ]
    .into_iter()
    .collect();
    let query = ExceedanceQuery::new("T2M", 7, 15, 10.0, Direction::Greater);
    let r = estimate(&series, &query, &EstimateConfig::default()).unwrap();
    assert_eq!((r.n, r.k), (1, 1));
    assert!(r.sd.is_none());
    assert!(r.trend.is_none());
    assert_eq!(r.yearly_fractions.len(), 2);
    assert!(r.yearly_fractions[1].fraction.is_none());

    let json = to_json(&r).unwrap();
    for bad in ["NaN", "Infinity", "inf"] {
        assert!(!json.contains(bad), "found {bad} in {json}");
    }
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["trend"].is_null());
    assert!(value["yearly_fractions"][1]["fraction"].is_null());
}
