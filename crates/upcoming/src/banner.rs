//! Human-readable next-birthday banner.

use std::fmt;

use kinline_calendar::{NaiveDate, format_iso};

use crate::result::Upcoming;

/// Banner text for the next birthday, in one of three phrasings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// The birthday is today.
    Today {
        /// Person's display name.
        name: String,
    },
    /// The birthday is tomorrow.
    Tomorrow {
        /// Person's display name.
        name: String,
        /// Date of the birthday.
        date: NaiveDate,
    },
    /// The birthday is two or more days away.
    InDays {
        /// Person's display name.
        name: String,
        /// Days until the birthday.
        days: i64,
        /// Date of the birthday.
        date: NaiveDate,
    },
}

impl Banner {
    /// Phrases `upcoming` for the person called `name`.
    pub fn new(name: impl Into<String>, upcoming: &Upcoming) -> Self {
        let name = name.into();
        match upcoming.days() {
            0 => Self::Today { name },
            1 => Self::Tomorrow {
                name,
                date: upcoming.next_date(),
            },
            days => Self::InDays {
                name,
                days,
                date: upcoming.next_date(),
            },
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today { name } => write!(f, "🎂 Today is {name}'s birthday!"),
            Self::Tomorrow { name, date } => {
                write!(f, "🎉 {name} in 1 day ({})", format_iso(*date))
            }
            Self::InDays { name, days, date } => {
                write!(f, "🎉 {name} in {days} days ({})", format_iso(*date))
            }
        }
    }
}
