//! Output type for the next-birthday search.

use kinline_calendar::NaiveDate;

/// The soonest upcoming anniversary among a set of birth dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upcoming {
    /// Index of the winning birth date in the input slice.
    index: usize,
    /// Date of the next anniversary.
    next_date: NaiveDate,
    /// Whole days from the reference date to `next_date`.
    days: i64,
}

impl Upcoming {
    /// Creates a new `Upcoming`.
    pub(crate) fn new(index: usize, next_date: NaiveDate, days: i64) -> Self {
        Self {
            index,
            next_date,
            days,
        }
    }

    /// Returns the index into the searched slice.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the date of the next anniversary.
    pub fn next_date(&self) -> NaiveDate {
        self.next_date
    }

    /// Returns the number of days until the anniversary (0 for today).
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Returns `true` when the anniversary is on the reference date.
    pub fn is_today(&self) -> bool {
        self.days == 0
    }
}
