//! # kinline-calendar
//!
//! Pure Gregorian date arithmetic for the birthday timeline.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["raw string"] -->|"parse_birth_date()"| B["NaiveDate"]
//!     B -->|"year_position()"| C["fractional year (f64)"]
//!     B -->|"next_occurrence()"| D["next anniversary"]
//!     D -->|"days_between()"| E["day count"]
//!     B -->|"format_iso() / format_card_date()"| F["display text"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kinline_calendar::{LeapDayPolicy, days_between, next_occurrence, parse_birth_date};
//!
//! let birth = parse_birth_date("1990/05/01").unwrap();
//! let today = parse_birth_date("2026-04-30").unwrap();
//! let next = next_occurrence(birth, today, LeapDayPolicy::default());
//! assert_eq!(days_between(today, next), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Parsing, leap years, fractional year position |
//! | `occurrence` | Anniversary placement and leap-day policy |
//! | `format` | ISO and card labels |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod occurrence;

pub use chrono::NaiveDate;
pub use date::{days_in_year, is_leap_year, parse_birth_date, year_position};
pub use error::CalendarError;
pub use format::{format_card_date, format_iso};
pub use occurrence::{LeapDayPolicy, anniversary_in, days_between, next_occurrence};
