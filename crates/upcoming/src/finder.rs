//! Soonest next anniversary among many birth dates.

use tracing::debug;

use kinline_calendar::{LeapDayPolicy, NaiveDate, days_between, next_occurrence};

use crate::error::UpcomingError;
use crate::result::Upcoming;

/// Finds the birth date whose next anniversary on or after `today` comes
/// first.
///
/// When several anniversaries fall on the same day the earliest index wins,
/// so a slice sorted by birth date favours the oldest person.
///
/// # Errors
///
/// Returns [`UpcomingError::EmptyData`] if `birth_dates` is empty.
#[tracing::instrument(skip(birth_dates), fields(n = birth_dates.len()))]
pub fn find_next(
    today: NaiveDate,
    birth_dates: &[NaiveDate],
    policy: LeapDayPolicy,
) -> Result<Upcoming, UpcomingError> {
    let mut best: Option<Upcoming> = None;
    for (index, &birth) in birth_dates.iter().enumerate() {
        let next = next_occurrence(birth, today, policy);
        let days = days_between(today, next);
        if best.is_none_or(|b| days < b.days()) {
            best = Some(Upcoming::new(index, next, days));
        }
    }
    let best = best.ok_or(UpcomingError::EmptyData)?;
    debug!(index = best.index(), days = best.days(), "next birthday found");
    Ok(best)
}
