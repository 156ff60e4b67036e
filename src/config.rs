use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Kinline configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KinlineConfig {
    /// Roster source settings.
    #[serde(default)]
    pub data: DataConfig,

    /// Layout engine settings.
    #[serde(default)]
    pub layout: LayoutToml,

    /// Viewport settings.
    #[serde(default)]
    pub view: ViewToml,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Periodic refresh settings.
    #[serde(default)]
    pub refresh: RefreshToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("family.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    #[serde(default = "default_px_per_year")]
    pub px_per_year: f64,
    #[serde(default = "default_min_gap")]
    pub min_gap: f64,
    #[serde(default = "default_trailing_margin")]
    pub trailing_margin: f64,
}

impl Default for LayoutToml {
    fn default() -> Self {
        Self {
            px_per_year: default_px_per_year(),
            min_gap: default_min_gap(),
            trailing_margin: default_trailing_margin(),
        }
    }
}

fn default_px_per_year() -> f64 {
    kinline_layout::DEFAULT_PX_PER_YEAR
}
fn default_min_gap() -> f64 {
    kinline_layout::DEFAULT_MIN_GAP
}
fn default_trailing_margin() -> f64 {
    kinline_layout::DEFAULT_TRAILING_MARGIN
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewToml {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,
}

impl Default for ViewToml {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

fn default_width() -> f64 {
    1200.0
}
fn default_height() -> f64 {
    800.0
}
fn default_mobile_breakpoint() -> f64 {
    kinline_layout::DEFAULT_MOBILE_BREAKPOINT
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_leap_day")]
    pub leap_day: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            leap_day: default_leap_day(),
        }
    }
}

fn default_leap_day() -> String {
    "mar1".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshToml {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for RefreshToml {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    60
}
