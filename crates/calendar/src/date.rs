//! Birth date parsing and fractional year positions.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Parses an ISO-like `year-month-day` string into a calendar date.
///
/// Surrounding whitespace is ignored and `/` is accepted in place of `-`,
/// so `"1990/05/01"` and `"1990-05-01"` yield the same date. Month and day
/// may omit their leading zero.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] carrying the original text when the
/// string is not a date or names a date that does not exist (month 13,
/// April 31, February 29 of a common year).
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, CalendarError> {
    let normalized = raw.trim().replace('/', "-");
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate {
        raw: raw.to_string(),
    })
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the date as a fractional year.
///
/// The integer part is the calendar year; the fraction is the share of the
/// year elapsed at midnight of `date`, so Jan 1 maps to exactly `year` and
/// Dec 31 stays strictly below `year + 1`. Ordering by this value is the same
/// as ordering by date.
pub fn year_position(date: NaiveDate) -> f64 {
    let year = date.year();
    let elapsed = f64::from(date.ordinal0());
    f64::from(year) + elapsed / f64::from(days_in_year(year))
}
