//! Next-birthday search for the family timeline.
//!
//! Given a reference date and a set of birth dates, [`find_next`] returns the
//! one whose next anniversary comes first, and [`Banner`] phrases it as
//! "today", "in 1 day" or "in N days".
//!
//! # Quick start
//!
//! ```ignore
//! use kinline_calendar::{LeapDayPolicy, NaiveDate};
//! use kinline_upcoming::{Banner, find_next};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap();
//! let births = [NaiveDate::from_ymd_opt(1990, 5, 1).unwrap()];
//! let next = find_next(today, &births, LeapDayPolicy::default()).unwrap();
//! assert_eq!(Banner::new("Ada", &next).to_string(), "🎉 Ada in 1 day (2026-05-01)");
//! ```

mod banner;
mod error;
mod finder;
mod result;

pub use banner::Banner;
pub use error::UpcomingError;
pub use finder::find_next;
pub use result::Upcoming;
