//! # wxprob-io
//!
//! Daily climate series retrieval. Fetches point series from the NASA POWER
//! API or reads saved responses from disk, and hands them to the estimator
//! as a [`DailySeries`](wxprob_exceedance::DailySeries).
//!
//! | Source | Type |
//! |--------|------|
//! | POWER daily point API | [`PowerClient`] |
//! | Saved POWER response or flat date map | [`FileSource`] |
//!
//! Both implement [`SeriesSource`].

mod client;
mod error;
mod power;
mod request;
mod source;
mod validate;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, PowerClient, PowerConfig, query_pairs};
pub use error::IoError;
pub use power::{DEFAULT_FILL_VALUE, parse_power_response, parse_series_json};
pub use request::{DEFAULT_COMMUNITY, SeriesRequest};
pub use source::{FileSource, SeriesSource, read_series_json};
