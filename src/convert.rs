//! Pure conversion functions: TOML config structs -> crate API config types.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use kinline_calendar::LeapDayPolicy;
use kinline_layout::LayoutConfig;

use crate::config::{CalendarToml, LayoutToml, RefreshToml, ViewToml};
use crate::document::Viewport;

/// Parses a leap-day policy name (`"mar1"` or `"feb28"`).
pub fn parse_leap_day(s: &str) -> Result<LeapDayPolicy> {
    s.parse::<LeapDayPolicy>()
        .with_context(|| format!("invalid [calendar].leap_day: {s:?}"))
}

/// Builds a validated [`LayoutConfig`] from the TOML layout configuration.
///
/// `scale` replaces `px_per_year` when given on the command line.
pub fn build_layout_config(layout: &LayoutToml, scale: Option<f64>) -> Result<LayoutConfig> {
    let cfg = LayoutConfig::new()
        .with_px_per_year(scale.unwrap_or(layout.px_per_year))
        .with_min_gap(layout.min_gap)
        .with_trailing_margin(layout.trailing_margin);
    cfg.validate().context("invalid layout configuration")?;
    Ok(cfg)
}

/// Builds a [`Viewport`] from the TOML view configuration.
///
/// `width` replaces the configured width when given on the command line.
pub fn build_viewport(view: &ViewToml, width: Option<f64>) -> Result<Viewport> {
    let width = width.unwrap_or(view.width);
    for (name, value) in [
        ("width", width),
        ("height", view.height),
        ("mobile_breakpoint", view.mobile_breakpoint),
    ] {
        if !value.is_finite() || value < 0.0 {
            bail!("[view].{name} must be finite and >= 0, got {value}");
        }
    }
    Ok(Viewport::new(width, view.height, view.mobile_breakpoint))
}

/// Resolves the leap-day policy from the TOML calendar configuration.
pub fn build_leap_day(calendar: &CalendarToml) -> Result<LeapDayPolicy> {
    parse_leap_day(&calendar.leap_day)
}

/// Resolves the refresh interval; `interval_secs` overrides the config.
pub fn build_refresh_interval(refresh: &RefreshToml, interval_secs: Option<u64>) -> Result<Duration> {
    let secs = interval_secs.unwrap_or(refresh.interval_secs);
    if secs == 0 {
        bail!("refresh interval must be at least 1 second");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_day_names() {
        assert_eq!(parse_leap_day("mar1").unwrap(), LeapDayPolicy::MarchFirst);
        assert_eq!(
            parse_leap_day("FEB28").unwrap(),
            LeapDayPolicy::FebruaryTwentyEighth
        );
        let err = parse_leap_day("feb29").unwrap_err();
        assert!(format!("{err:#}").contains("feb29"));
    }

    #[test]
    fn scale_overrides_px_per_year() {
        let cfg = build_layout_config(&LayoutToml::default(), Some(35.0)).unwrap();
        assert_eq!(cfg.px_per_year(), 35.0);
        assert_eq!(cfg.min_gap(), 120.0);
        assert_eq!(cfg.trailing_margin(), 320.0);
    }

    #[test]
    fn invalid_layout_is_rejected() {
        assert!(build_layout_config(&LayoutToml::default(), Some(0.0)).is_err());
        let layout = LayoutToml {
            min_gap: -4.0,
            ..LayoutToml::default()
        };
        assert!(build_layout_config(&layout, None).is_err());
    }

    #[test]
    fn width_override_and_validation() {
        let vp = build_viewport(&ViewToml::default(), Some(400.0)).unwrap();
        assert_eq!(vp.width(), 400.0);
        assert_eq!(vp.height(), 800.0);
        assert!(build_viewport(&ViewToml::default(), Some(f64::NAN)).is_err());
    }

    #[test]
    fn refresh_interval() {
        let d = build_refresh_interval(&RefreshToml::default(), None).unwrap();
        assert_eq!(d, Duration::from_secs(60));
        let d = build_refresh_interval(&RefreshToml::default(), Some(5)).unwrap();
        assert_eq!(d, Duration::from_secs(5));
        assert!(build_refresh_interval(&RefreshToml::default(), Some(0)).is_err());
    }
}
