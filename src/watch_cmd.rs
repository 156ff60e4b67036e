//! Watch command: reload the roster on a fixed interval.

use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{debug, error, info, info_span};

use crate::cli::WatchArgs;
use crate::convert;
use crate::document::TimelineDocument;
use crate::pipeline::{self, Settings};
use crate::refresh::{Generation, Ticket};

/// Result of one background load, tagged with the cycle that started it.
struct Loaded {
    ticket: Ticket,
    result: Result<TimelineDocument>,
}

/// What happened to a finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// A newer cycle has started; the result was dropped.
    Stale,
    /// The document was replaced and written.
    Updated,
    /// The load or write failed; the previous document stays.
    Failed,
}

/// Reload the roster periodically until the cycle limit is reached.
pub fn run(args: WatchArgs) -> Result<()> {
    let _cmd = info_span!("watch").entered();
    let config = pipeline::load_config(args.source.config.as_deref())?;
    let settings = Settings::resolve(&config, &args.source, None, None)?;
    let interval = convert::build_refresh_interval(&config.refresh, args.interval)?;
    info!(
        path = %settings.input.display(),
        interval_secs = interval.as_secs(),
        cycles = ?args.cycles,
        "watching roster"
    );

    let (tx, rx) = mpsc::channel();
    let mut generation = Generation::default();
    let mut current: Option<TimelineDocument> = None;
    let mut cycle: u64 = 0;

    loop {
        cycle += 1;
        let ticket = generation.begin();
        spawn_load(ticket, settings.clone(), tx.clone());
        let last = args.cycles.is_some_and(|n| cycle >= n);

        let deadline = Instant::now() + interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok(loaded) => {
                    let is_latest = generation.is_current(loaded.ticket);
                    apply(&generation, loaded, &mut current, args.output.as_deref());
                    if last && is_latest {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => bail!("reload channel closed"),
            }
        }

        if last {
            info!(cycles = cycle, "watch finished");
            return Ok(());
        }
    }
}

fn spawn_load(ticket: Ticket, settings: Settings, tx: Sender<Loaded>) {
    thread::spawn(move || {
        let result = pipeline::resolve_today(None)
            .and_then(|today| pipeline::load_document(&settings, today));
        // The receiver is gone only once the command has returned.
        let _ = tx.send(Loaded { ticket, result });
    });
}

fn apply(
    generation: &Generation,
    loaded: Loaded,
    current: &mut Option<TimelineDocument>,
    output: Option<&Path>,
) -> Outcome {
    if !generation.is_current(loaded.ticket) {
        debug!(ticket = loaded.ticket.get(), "discarding stale reload");
        return Outcome::Stale;
    }
    let doc = match loaded.result {
        Ok(doc) => doc,
        Err(e) => {
            error!(
                ticket = loaded.ticket.get(),
                kept_previous = current.is_some(),
                "reload failed: {e:#}"
            );
            return Outcome::Failed;
        }
    };
    if let Err(e) = pipeline::write_document(&doc, output) {
        error!(ticket = loaded.ticket.get(), "reload failed: {e:#}");
        return Outcome::Failed;
    }
    info!(
        ticket = loaded.ticket.get(),
        n_people = doc.people.len(),
        "timeline refreshed"
    );
    *current = Some(doc);
    Outcome::Updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use kinline_calendar::{LeapDayPolicy, NaiveDate};
    use kinline_layout::LayoutConfig;
    use kinline_roster::parse_roster;

    use crate::document::{Viewport, build_document};

    fn document(json: &str) -> TimelineDocument {
        let roster = parse_roster(json).unwrap();
        build_document(
            &roster,
            &LayoutConfig::new(),
            Viewport::new(1200.0, 800.0, 520.0),
            LeapDayPolicy::default(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn stale_result_never_overwrites_newer() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("timeline.json");
        let mut generation = Generation::default();
        let mut current = None;

        let old = generation.begin();
        let new = generation.begin();

        let fresh = Loaded {
            ticket: new,
            result: Ok(document(r#"[{"name": "New", "birthdate": "2001-01-01"}]"#)),
        };
        assert_eq!(apply(&generation, fresh, &mut current, Some(&out)), Outcome::Updated);

        let slow = Loaded {
            ticket: old,
            result: Ok(document(r#"[{"name": "Old", "birthdate": "1950-01-01"}]"#)),
        };
        assert_eq!(apply(&generation, slow, &mut current, Some(&out)), Outcome::Stale);

        assert_eq!(current.unwrap().people[0].name, "New");
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("\"New\""));
        assert!(!written.contains("\"Old\""));
    }

    #[test]
    fn failed_cycle_keeps_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("timeline.json");
        let mut generation = Generation::default();
        let mut current = None;

        let first = Loaded {
            ticket: generation.begin(),
            result: Ok(document(r#"[{"name": "Ada", "birthdate": "1990-05-01"}]"#)),
        };
        assert_eq!(apply(&generation, first, &mut current, Some(&out)), Outcome::Updated);

        let broken = Loaded {
            ticket: generation.begin(),
            result: Err(anyhow!("invalid birthdate at index 0")),
        };
        assert_eq!(apply(&generation, broken, &mut current, Some(&out)), Outcome::Failed);
        assert_eq!(current.as_ref().unwrap().people[0].name, "Ada");
        assert!(std::fs::read_to_string(&out).unwrap().contains("\"Ada\""));
    }

    #[test]
    fn worker_reports_with_its_ticket() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("family.json");
        std::fs::write(&input, r#"[{"name": "Ada", "birthdate": "1990-05-01"}]"#).unwrap();
        let settings = Settings {
            input,
            layout: LayoutConfig::new(),
            viewport: Viewport::new(1200.0, 800.0, 520.0),
            leap_day: LeapDayPolicy::default(),
        };

        let (tx, rx) = mpsc::channel();
        let mut generation = Generation::default();
        let ticket = generation.begin();
        spawn_load(ticket, settings, tx);

        let loaded = rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
        assert_eq!(loaded.ticket, ticket);
        assert_eq!(loaded.result.unwrap().people.len(), 1);
    }
}
