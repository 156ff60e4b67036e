//! Banner command: print the next-birthday line.

use anyhow::Result;
use tracing::{info_span, warn};

use kinline_calendar::{LeapDayPolicy, NaiveDate};
use kinline_roster::Roster;
use kinline_upcoming::{Banner, find_next};

use crate::cli::BannerArgs;
use crate::pipeline::{self, Settings};

/// Print the banner for the soonest birthday.
pub fn run(args: BannerArgs) -> Result<()> {
    let _cmd = info_span!("banner").entered();
    let config = pipeline::load_config(args.source.config.as_deref())?;
    let settings = Settings::resolve(&config, &args.source, None, None)?;
    let today = pipeline::resolve_today(args.today.as_deref())?;

    let roster = pipeline::load_roster(&settings)?;
    match banner_text(&roster, today, settings.leap_day)? {
        Some(text) => println!("{text}"),
        None => warn!("roster is empty, no banner to show"),
    }
    Ok(())
}

/// Returns the banner line, or `None` for an empty roster.
fn banner_text(roster: &Roster, today: NaiveDate, leap_day: LeapDayPolicy) -> Result<Option<String>> {
    if roster.is_empty() {
        return Ok(None);
    }
    let upcoming = find_next(today, &roster.birth_dates(), leap_day)?;
    Ok(roster
        .get(upcoming.index())
        .map(|person| Banner::new(person.name(), &upcoming).to_string()))
}
