//! Orientation, canvas sizing and card placement.

use std::fmt;

/// Viewport width at or below which the timeline runs vertically.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 520.0;

/// Extra room a horizontal canvas keeps beyond the viewport so it can
/// always scroll a little.
pub const HORIZONTAL_CANVAS_SLACK: f64 = 80.0;

/// Direction the time axis runs on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Left to right; used on wide viewports.
    #[default]
    Horizontal,
    /// Top to bottom; used on narrow viewports.
    Vertical,
}

impl Orientation {
    /// Picks the orientation for a viewport width.
    pub fn for_viewport_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Returns the lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the axis a card hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above a horizontal axis.
    Above,
    /// Below a horizontal axis.
    Below,
    /// Left of a vertical axis.
    Left,
    /// Right of a vertical axis.
    Right,
}

impl Side {
    /// Alternates sides by index so neighbouring cards do not overlap.
    pub fn for_index(index: usize, orientation: Orientation) -> Self {
        let even = index % 2 == 0;
        match (orientation, even) {
            (Orientation::Horizontal, true) => Self::Above,
            (Orientation::Horizontal, false) => Self::Below,
            (Orientation::Vertical, true) => Self::Left,
            (Orientation::Vertical, false) => Self::Right,
        }
    }

    /// Returns the lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the canvas length along the time axis.
///
/// A vertical canvas fills at least the viewport; a horizontal one is at
/// least [`HORIZONTAL_CANVAS_SLACK`] longer than the viewport.
pub fn canvas_extent(content_extent: f64, viewport_extent: f64, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Horizontal => content_extent.max(viewport_extent + HORIZONTAL_CANVAS_SLACK),
        Orientation::Vertical => content_extent.max(viewport_extent),
    }
}

/// Returns the scroll position that centres the canvas in the viewport.
pub fn centered_scroll(canvas_extent: f64, viewport_extent: f64) -> f64 {
    ((canvas_extent - viewport_extent) / 2.0).max(0.0)
}
