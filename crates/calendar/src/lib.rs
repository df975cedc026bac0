//! # wxprob-calendar
//!
//! Gregorian date arithmetic for daily climate series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"GregorianDate::new()"| B["GregorianDate"]
//!     C["YYYYMMDD"] -->|"GregorianDate::parse_compact()"| B
//!     B -->|".next()"| B
//!     B -->|"daily_sequence()"| D["Vec of GregorianDate"]
//!     E["MonthDay"] -->|".in_year()"| B
//!     B -->|".distance_days()"| F["|d1 - d2| in days"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use wxprob_calendar::{GregorianDate, MonthDay, daily_sequence};
//!
//! let date = GregorianDate::new(2024, 2, 29).unwrap();
//! assert_eq!(date.ordinal(), 60);
//!
//! // Feb 29 in a non-leap year resolves to Feb 28.
//! let anchor = MonthDay::new(2, 29).unwrap();
//! let reference = anchor.in_year(2023).unwrap();
//! assert_eq!(reference.month_day(), (2, 28));
//!
//! let days = daily_sequence(date, 3);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month lengths and leap-year rule |
//! | `date` | Gregorian date with year context |
//! | `reference` | Month/day anchor resolved per year |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod reference;
mod sequence;

pub use date::GregorianDate;
pub use error::CalendarError;
pub use month::{days_in_month, is_leap_year};
pub use reference::{FALLBACK_DAY, MonthDay};
pub use sequence::{daily_sequence, date_range};
