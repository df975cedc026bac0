//! Day-window selection across years.
//!
//! Each observation is compared against the anchor resolved in its own
//! year and in the two neighbouring years, so a window around late December
//! also reaches early January of the following year (and vice versa). The
//! decision is made once per date, which means a date is kept at most once
//! however wide the window is.

use tracing::debug;
use wxprob_calendar::{GregorianDate, MonthDay};

use crate::series::{DailySeries, WindowedSeries};

/// Distance in days from `date` to the nearest resolution of `anchor` in
/// the previous, same, or following year.
///
/// Anchors that do not exist in a year (such as Feb 29 in a common year)
/// resolve through the calendar's day-28 fallback for that year only.
/// Returns `None` only when none of the three years can be represented.
pub fn anchor_distance(date: GregorianDate, anchor: MonthDay) -> Option<u64> {
    (-1..=1)
        .filter_map(|offset| date.year().checked_add(offset))
        .filter_map(|year| anchor.in_year(year).ok())
        .map(|reference| date.distance_days(reference))
        .min()
}

/// Returns `true` if `date` lies within `window_days` of `anchor`.
pub fn in_window(date: GregorianDate, anchor: MonthDay, window_days: u32) -> bool {
    anchor_distance(date, anchor).is_some_and(|d| d <= u64::from(window_days))
}

/// Selects every observation within `window_days` of `anchor` in any year.
///
/// Missing values inside the window are kept as missing. An empty result is
/// valid output; the caller reports it as an insufficient sample.
#[tracing::instrument(skip(series), fields(n_input = series.len()))]
pub fn select_window(series: &DailySeries, anchor: MonthDay, window_days: u32) -> WindowedSeries {
    let windowed: WindowedSeries = series
        .iter()
        .filter(|&(date, _)| in_window(date, anchor, window_days))
        .collect();
    debug!(n_selected = windowed.len(), "day-window selected");
    windowed
}
