//! Shared loading steps for every subcommand.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info};

use kinline_calendar::{LeapDayPolicy, NaiveDate, parse_birth_date};
use kinline_layout::LayoutConfig;
use kinline_roster::{Roster, read_roster};

use crate::cli::SourceArgs;
use crate::config::KinlineConfig;
use crate::convert;
use crate::document::{TimelineDocument, Viewport, build_document};

/// Config file picked up from the working directory when `-c` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "kinline.toml";

/// Resolved inputs for building a document.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub layout: LayoutConfig,
    pub viewport: Viewport,
    pub leap_day: LeapDayPolicy,
}

impl Settings {
    /// Resolves settings from config with command-line overrides applied.
    pub fn resolve(
        config: &KinlineConfig,
        source: &SourceArgs,
        scale: Option<f64>,
        width: Option<f64>,
    ) -> Result<Self> {
        Ok(Self {
            input: source
                .input
                .clone()
                .unwrap_or_else(|| config.data.path.clone()),
            layout: convert::build_layout_config(&config.layout, scale)?,
            viewport: convert::build_viewport(&config.view, width)?,
            leap_day: convert::build_leap_day(&config.calendar)?,
        })
    }
}

/// Loads the TOML configuration.
///
/// An explicit path must exist. Without one, `kinline.toml` in the working
/// directory is used if present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<KinlineConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
        None => {
            debug!("no config file, using defaults");
            return Ok(KinlineConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: KinlineConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Parses `--today`, falling back to the local calendar date.
pub fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => parse_birth_date(raw).context("invalid --today"),
        None => Ok(Local::now().date_naive()),
    }
}

/// Reads the roster named by `settings`.
pub fn load_roster(settings: &Settings) -> Result<Roster> {
    read_roster(&settings.input)
        .with_context(|| format!("failed to load roster: {}", settings.input.display()))
}

/// Reads the roster and builds the document in one step.
pub fn load_document(settings: &Settings, today: NaiveDate) -> Result<TimelineDocument> {
    let roster = load_roster(settings)?;
    build_document(
        &roster,
        &settings.layout,
        settings.viewport,
        settings.leap_day,
        today,
    )
}

/// Writes the document as pretty JSON to `output`, or to stdout.
pub fn write_document(doc: &TimelineDocument, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(doc).context("failed to serialize document")?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("failed to write document: {}", path.display()))?;
            info!(path = %path.display(), n_people = doc.people.len(), "document written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
