//! Annual anniversary arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::date::is_leap_year;
use crate::error::CalendarError;

/// Where a February 29 birthday falls in a common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeapDayPolicy {
    /// Celebrate on March 1.
    #[default]
    MarchFirst,
    /// Celebrate on February 28.
    FebruaryTwentyEighth,
}

impl LeapDayPolicy {
    /// Returns the config name of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarchFirst => "mar1",
            Self::FebruaryTwentyEighth => "feb28",
        }
    }
}

impl fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeapDayPolicy {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mar1" => Ok(Self::MarchFirst),
            "feb28" => Ok(Self::FebruaryTwentyEighth),
            _ => Err(CalendarError::UnknownLeapDayPolicy {
                name: s.to_string(),
            }),
        }
    }
}

/// Places the (month, day) of `birth` in `year`.
///
/// Every date except February 29 exists in every year. February 29 is kept
/// in leap years and mapped according to `policy` otherwise.
pub fn anniversary_in(birth: NaiveDate, year: i32, policy: LeapDayPolicy) -> NaiveDate {
    let (month, day) = match (birth.month(), birth.day()) {
        (2, 29) if !is_leap_year(year) => match policy {
            LeapDayPolicy::MarchFirst => (3, 1),
            LeapDayPolicy::FebruaryTwentyEighth => (2, 28),
        },
        md => md,
    };
    // (month, day) was taken from a valid date and Feb 29 is only kept in
    // leap years, so the date exists unless `year` is outside chrono's range.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

/// Returns the first anniversary of `birth` on or after `today`.
pub fn next_occurrence(birth: NaiveDate, today: NaiveDate, policy: LeapDayPolicy) -> NaiveDate {
    let this_year = anniversary_in(birth, today.year(), policy);
    if this_year >= today {
        this_year
    } else {
        anniversary_in(birth, today.year() + 1, policy)
    }
}

/// Returns the number of whole days from `from` to `to` (negative if `to`
/// is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn policy_parse_and_display() {
        assert_eq!("mar1".parse::<LeapDayPolicy>().unwrap(), LeapDayPolicy::MarchFirst);
        assert_eq!(
            "FEB28".parse::<LeapDayPolicy>().unwrap(),
            LeapDayPolicy::FebruaryTwentyEighth
        );
        assert_eq!(LeapDayPolicy::FebruaryTwentyEighth.to_string(), "feb28");
        assert!(matches!(
            "skip".parse::<LeapDayPolicy>(),
            Err(CalendarError::UnknownLeapDayPolicy { .. })
        ));
    }

    #[test]
    fn policy_default_is_march_first() {
        assert_eq!(LeapDayPolicy::default(), LeapDayPolicy::MarchFirst);
    }

    #[test]
    fn anniversary_regular_date() {
        let birth = ymd(1990, 5, 1);
        assert_eq!(anniversary_in(birth, 2026, LeapDayPolicy::default()), ymd(2026, 5, 1));
    }

    #[test]
    fn anniversary_leap_day_in_leap_year() {
        let birth = ymd(1992, 2, 29);
        for policy in [LeapDayPolicy::MarchFirst, LeapDayPolicy::FebruaryTwentyEighth] {
            assert_eq!(anniversary_in(birth, 2028, policy), ymd(2028, 2, 29));
        }
    }

    #[test]
    fn anniversary_leap_day_in_common_year() {
        let birth = ymd(1992, 2, 29);
        assert_eq!(
            anniversary_in(birth, 2026, LeapDayPolicy::MarchFirst),
            ymd(2026, 3, 1)
        );
        assert_eq!(
            anniversary_in(birth, 2026, LeapDayPolicy::FebruaryTwentyEighth),
            ymd(2026, 2, 28)
        );
    }

    #[test]
    fn next_occurrence_later_this_year() {
        let today = ymd(2026, 3, 10);
        assert_eq!(
            next_occurrence(ymd(1980, 7, 4), today, LeapDayPolicy::default()),
            ymd(2026, 7, 4)
        );
    }

    #[test]
    fn next_occurrence_today_counts_as_this_year() {
        let today = ymd(2026, 7, 4);
        assert_eq!(
            next_occurrence(ymd(1980, 7, 4), today, LeapDayPolicy::default()),
            today
        );
    }

    #[test]
    fn next_occurrence_rolls_to_next_year() {
        let today = ymd(2026, 7, 5);
        assert_eq!(
            next_occurrence(ymd(1980, 7, 4), today, LeapDayPolicy::default()),
            ymd(2027, 7, 4)
        );
    }

    #[test]
    fn next_occurrence_dec_31_to_jan_1() {
        let today = ymd(2026, 12, 31);
        assert_eq!(
            next_occurrence(ymd(2001, 1, 1), today, LeapDayPolicy::default()),
            ymd(2027, 1, 1)
        );
    }

    #[test]
    fn next_occurrence_leap_day_policies_differ() {
        let birth = ymd(2000, 2, 29);
        let today = ymd(2026, 2, 28);
        assert_eq!(
            next_occurrence(birth, today, LeapDayPolicy::FebruaryTwentyEighth),
            today
        );
        assert_eq!(
            next_occurrence(birth, today, LeapDayPolicy::MarchFirst),
            ymd(2026, 3, 1)
        );
    }

    #[test]
    fn days_between_spans_year_and_leap_day() {
        assert_eq!(days_between(ymd(2026, 1, 1), ymd(2026, 1, 1)), 0);
        assert_eq!(days_between(ymd(2026, 12, 31), ymd(2027, 1, 1)), 1);
        assert_eq!(days_between(ymd(2028, 2, 28), ymd(2028, 3, 1)), 2);
        assert_eq!(days_between(ymd(2026, 3, 1), ymd(2026, 2, 28)), -1);
    }
}
