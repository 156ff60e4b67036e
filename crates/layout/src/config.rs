//! Configuration for timeline layout.

use crate::error::LayoutError;

/// Default horizontal scale in pixels per year.
pub const DEFAULT_PX_PER_YEAR: f64 = 20.0;
/// Default minimum distance between adjacent cards in pixels.
pub const DEFAULT_MIN_GAP: f64 = 120.0;
/// Default room left after the last card so it is never clipped.
pub const DEFAULT_TRAILING_MARGIN: f64 = 320.0;

/// Scale and spacing parameters for [`compute_layout`](crate::compute_layout).
///
/// # Example
///
/// ```
/// use kinline_layout::LayoutConfig;
///
/// let config = LayoutConfig::new().with_px_per_year(32.0).with_min_gap(90.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Pixels per year of the linear time axis.
    px_per_year: f64,
    /// Minimum pixel gap between adjacent offsets.
    min_gap: f64,
    /// Pixels added after the last offset to form the content extent.
    trailing_margin: f64,
}

impl LayoutConfig {
    /// Creates a configuration with the defaults: 20 px/yr, 120 px gap,
    /// 320 px trailing margin.
    pub fn new() -> Self {
        Self {
            px_per_year: DEFAULT_PX_PER_YEAR,
            min_gap: DEFAULT_MIN_GAP,
            trailing_margin: DEFAULT_TRAILING_MARGIN,
        }
    }

    /// Sets the scale in pixels per year.
    pub fn with_px_per_year(mut self, px_per_year: f64) -> Self {
        self.px_per_year = px_per_year;
        self
    }

    /// Sets the minimum gap between adjacent offsets.
    pub fn with_min_gap(mut self, min_gap: f64) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Sets the trailing margin.
    pub fn with_trailing_margin(mut self, trailing_margin: f64) -> Self {
        self.trailing_margin = trailing_margin;
        self
    }

    /// Returns the scale in pixels per year.
    pub fn px_per_year(&self) -> f64 {
        self.px_per_year
    }

    /// Returns the minimum gap.
    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    /// Returns the trailing margin.
    pub fn trailing_margin(&self) -> f64 {
        self.trailing_margin
    }

    /// Validates this configuration.
    ///
    /// Every parameter must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("px_per_year", self.px_per_year),
            ("min_gap", self.min_gap),
            ("trailing_margin", self.trailing_margin),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig {
                    reason: format!("{name} must be finite and > 0, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}
