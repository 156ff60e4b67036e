//! The positioned timeline document handed to a renderer.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use kinline_calendar::{LeapDayPolicy, NaiveDate, format_card_date, format_iso};
use kinline_layout::{
    LayoutConfig, Orientation, Side, Tick, canvas_extent, centered_scroll, compute_layout,
    year_ticks,
};
use kinline_roster::Roster;
use kinline_upcoming::{Banner, find_next};

/// Viewport size and the width below which the timeline turns vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    mobile_breakpoint: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, mobile_breakpoint: f64) -> Self {
        Self {
            width,
            height,
            mobile_breakpoint,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::for_viewport_width(self.width, self.mobile_breakpoint)
    }

    /// Viewport length along the time axis.
    pub fn extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width(),
            Orientation::Vertical => self.height(),
        }
    }
}

/// Everything a renderer needs to draw one frame of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineDocument {
    pub reference_date: String,
    pub orientation: &'static str,
    pub px_per_year: f64,
    pub canvas_extent: f64,
    pub scroll_position: f64,
    pub min_year: Option<f64>,
    pub max_year: Option<f64>,
    pub content_extent: f64,
    pub ticks: Vec<TickEntry>,
    pub people: Vec<PersonEntry>,
    pub banner: Option<BannerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickEntry {
    pub year: i32,
    pub offset: f64,
}

impl From<Tick> for TickEntry {
    fn from(tick: Tick) -> Self {
        Self {
            year: tick.year,
            offset: tick.offset,
        }
    }
}

/// One positioned person card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonEntry {
    pub id: String,
    pub name: String,
    pub initials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub birth_date: String,
    pub label: String,
    pub offset: f64,
    pub side: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerEntry {
    pub text: String,
    pub person_id: String,
    pub date: String,
    pub days: i64,
    pub is_today: bool,
}

/// Lays out `roster` and finds the next birthday relative to `today`.
///
/// An empty roster yields a document with no people, ticks or banner.
#[tracing::instrument(skip_all, fields(n_people = roster.len(), today = %today))]
pub fn build_document(
    roster: &Roster,
    layout: &LayoutConfig,
    viewport: Viewport,
    leap_day: LeapDayPolicy,
    today: NaiveDate,
) -> Result<TimelineDocument> {
    let orientation = viewport.orientation();
    let viewport_extent = viewport.extent(orientation);
    debug!(%orientation, viewport_extent, "viewport resolved");

    if roster.is_empty() {
        warn!("roster is empty, nothing to lay out");
        let canvas = canvas_extent(0.0, viewport_extent, orientation);
        return Ok(TimelineDocument {
            reference_date: format_iso(today),
            orientation: orientation.as_str(),
            px_per_year: layout.px_per_year(),
            canvas_extent: canvas,
            scroll_position: centered_scroll(canvas, viewport_extent),
            min_year: None,
            max_year: None,
            content_extent: 0.0,
            ticks: Vec::new(),
            people: Vec::new(),
            banner: None,
        });
    }

    let timeline =
        compute_layout(&roster.year_positions(), layout).context("failed to lay out timeline")?;

    let ticks = match orientation {
        Orientation::Horizontal => {
            year_ticks(timeline.min_year(), timeline.max_year(), layout.px_per_year())
                .into_iter()
                .map(TickEntry::from)
                .collect()
        }
        Orientation::Vertical => Vec::new(),
    };

    let people = roster
        .iter()
        .zip(timeline.offsets())
        .enumerate()
        .map(|(i, (person, &offset))| PersonEntry {
            id: person.id().to_string(),
            name: person.name().to_string(),
            initials: person.initials(),
            photo: person.photo().map(str::to_string),
            birth_date: format_iso(person.birth_date()),
            label: format_card_date(person.birth_date()),
            offset,
            side: Side::for_index(i, orientation).as_str(),
        })
        .collect();

    let upcoming = find_next(today, &roster.birth_dates(), leap_day)
        .context("failed to find the next birthday")?;
    let banner = roster.get(upcoming.index()).map(|person| BannerEntry {
        text: Banner::new(person.name(), &upcoming).to_string(),
        person_id: person.id().to_string(),
        date: format_iso(upcoming.next_date()),
        days: upcoming.days(),
        is_today: upcoming.is_today(),
    });

    let canvas = canvas_extent(timeline.content_extent(), viewport_extent, orientation);
    Ok(TimelineDocument {
        reference_date: format_iso(today),
        orientation: orientation.as_str(),
        px_per_year: layout.px_per_year(),
        canvas_extent: canvas,
        scroll_position: centered_scroll(canvas, viewport_extent),
        min_year: Some(timeline.min_year()),
        max_year: Some(timeline.max_year()),
        content_extent: timeline.content_extent(),
        ticks,
        people,
        banner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kinline_roster::parse_roster;

    const FAMILY: &str = r#"[
        {"id": "c", "name": "Cleo", "birthdate": "1992/01/01", "photo": "cleo.jpg"},
        {"id": "a", "name": "Ada Byron", "birthdate": "1990-05-01"},
        {"id": "b", "name": "Bo", "birthdate": "1990-05-01", "photo": ""}
    ]"#;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wide() -> Viewport {
        Viewport::new(1200.0, 800.0, 520.0)
    }

    fn gap50() -> LayoutConfig {
        LayoutConfig::new().with_px_per_year(20.0).with_min_gap(50.0)
    }

    #[test]
    fn twins_are_pushed_apart() {
        let roster = parse_roster(FAMILY).unwrap();
        let doc = build_document(&roster, &gap50(), wide(), LeapDayPolicy::default(), ymd(2026, 4, 30))
            .unwrap();

        let ids: Vec<_> = doc.people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_relative_eq!(doc.people[0].offset, 0.0);
        assert_relative_eq!(doc.people[1].offset, 50.0);
        assert_relative_eq!(doc.people[2].offset, 100.0);
        assert_relative_eq!(doc.content_extent, 420.0);
        assert_eq!(doc.people[0].label, "May 01, 1990 · 1990");
        assert_eq!(doc.people[0].initials, "AB");
        assert_eq!(doc.people[2].photo.as_deref(), Some("cleo.jpg"));
        assert!(doc.people[1].photo.is_none());
    }

    #[test]
    fn horizontal_canvas_ticks_and_sides() {
        let roster = parse_roster(FAMILY).unwrap();
        let doc = build_document(&roster, &gap50(), wide(), LeapDayPolicy::default(), ymd(2026, 4, 30))
            .unwrap();

        assert_eq!(doc.orientation, "horizontal");
        assert_relative_eq!(doc.canvas_extent, 1280.0);
        assert_relative_eq!(doc.scroll_position, 40.0);
        let years: Vec<_> = doc.ticks.iter().map(|t| t.year).collect();
        assert_eq!(years, [1990, 1992]);
        assert!(doc.ticks[0].offset < 0.0);
        let sides: Vec<_> = doc.people.iter().map(|p| p.side).collect();
        assert_eq!(sides, ["above", "below", "above"]);
    }

    #[test]
    fn narrow_viewport_is_vertical_without_ticks() {
        let roster = parse_roster(FAMILY).unwrap();
        let narrow = Viewport::new(520.0, 700.0, 520.0);
        let doc = build_document(&roster, &gap50(), narrow, LeapDayPolicy::default(), ymd(2026, 4, 30))
            .unwrap();

        assert_eq!(doc.orientation, "vertical");
        assert!(doc.ticks.is_empty());
        assert_relative_eq!(doc.canvas_extent, 700.0);
        assert_relative_eq!(doc.scroll_position, 0.0);
        assert_eq!(doc.people[0].side, "left");
        assert_eq!(doc.people[1].side, "right");
    }

    #[test]
    fn banner_names_first_of_tied_birthdays() {
        let roster = parse_roster(FAMILY).unwrap();
        let doc = build_document(&roster, &gap50(), wide(), LeapDayPolicy::default(), ymd(2026, 4, 30))
            .unwrap();

        let banner = doc.banner.unwrap();
        assert_eq!(banner.text, "🎉 Ada Byron in 1 day (2026-05-01)");
        assert_eq!(banner.person_id, "a");
        assert_eq!(banner.days, 1);
        assert!(!banner.is_today);
    }

    #[test]
    fn empty_roster_is_a_blank_document() {
        let roster = parse_roster("[]").unwrap();
        let doc = build_document(&roster, &LayoutConfig::new(), wide(), LeapDayPolicy::default(), ymd(2026, 1, 1))
            .unwrap();

        assert!(doc.people.is_empty());
        assert!(doc.ticks.is_empty());
        assert!(doc.banner.is_none());
        assert!(doc.min_year.is_none());
        assert_relative_eq!(doc.canvas_extent, 1280.0);
    }

    #[test]
    fn serializes_to_json() {
        let roster = parse_roster(FAMILY).unwrap();
        let doc = build_document(&roster, &gap50(), wide(), LeapDayPolicy::default(), ymd(2026, 5, 1))
            .unwrap();
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["orientation"], "horizontal");
        assert_eq!(value["reference_date"], "2026-05-01");
        assert_eq!(value["people"].as_array().unwrap().len(), 3);
        assert!(value["people"][0].get("photo").is_none());
        assert_eq!(value["people"][2]["photo"], "cleo.jpg");
        assert_eq!(value["banner"]["text"], "🎂 Today is Ada Byron's birthday!");
        assert_eq!(value["banner"]["is_today"], true);
    }
}
