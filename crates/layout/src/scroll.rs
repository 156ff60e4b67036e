//! Drag and wheel scrolling state for a timeline viewport.
//!
//! ## Usage
//!
//! 1) Create a [`ScrollState`] for the current orientation and call
//!    [`ScrollState::set_extents`] whenever the canvas or viewport changes.
//! 2) Forward pointer events to [`ScrollState::pointer_down`],
//!    [`ScrollState::pointer_move`] and [`ScrollState::pointer_up`]; apply the
//!    returned scroll position to the viewport.
//! 3) Forward wheel events to [`ScrollState::wheel`].
//!
//! ```
//! use kinline_layout::{Orientation, ScrollState};
//!
//! let mut scroll = ScrollState::new(Orientation::Horizontal);
//! scroll.set_extents(3000.0, 1000.0);
//! scroll.scroll_to(500.0);
//!
//! scroll.pointer_down(100.0, 40.0);
//! // Dragging right by 60 px moves the content with the pointer.
//! assert_eq!(scroll.pointer_move(160.0, 40.0), Some(440.0));
//! scroll.pointer_up();
//! assert!(!scroll.is_dragging());
//! ```

use crate::view::{Orientation, centered_scroll};

/// Pointer position and scroll position captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    x: f64,
    y: f64,
    position: f64,
}

/// Scroll position and in-progress drag for one viewport.
///
/// The position is measured along the time axis (`scrollLeft` for a
/// horizontal timeline, `scrollTop` for a vertical one) and is kept within
/// `0..=canvas_extent - viewport_extent`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    orientation: Orientation,
    position: f64,
    canvas_extent: f64,
    viewport_extent: f64,
    drag: Option<DragAnchor>,
}

impl ScrollState {
    /// Creates an idle state at position zero with no scrollable range.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            position: 0.0,
            canvas_extent: 0.0,
            viewport_extent: 0.0,
            drag: None,
        }
    }

    /// Returns the current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switches orientation, cancelling any drag and resetting the position.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.drag = None;
            self.position = 0.0;
        }
    }

    /// Updates the canvas and viewport lengths along the time axis and
    /// re-clamps the position.
    pub fn set_extents(&mut self, canvas_extent: f64, viewport_extent: f64) {
        self.canvas_extent = canvas_extent;
        self.viewport_extent = viewport_extent;
        self.position = self.clamp(self.position);
    }

    /// Returns the current scroll position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the largest reachable scroll position.
    pub fn max_position(&self) -> f64 {
        (self.canvas_extent - self.viewport_extent).max(0.0)
    }

    /// Scrolls to `position`, clamped to the valid range, and returns the
    /// applied position.
    pub fn scroll_to(&mut self, position: f64) -> f64 {
        self.position = self.clamp(position);
        self.position
    }

    /// Scrolls so the canvas is centred in the viewport.
    pub fn center(&mut self) -> f64 {
        self.scroll_to(centered_scroll(self.canvas_extent, self.viewport_extent))
    }

    /// Starts a drag at the given pointer position.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag = Some(DragAnchor {
            x,
            y,
            position: self.position,
        });
    }

    /// Moves an active drag and returns the new scroll position, or `None`
    /// when no drag is in progress.
    ///
    /// Only the pointer movement along the time axis counts; the content
    /// follows the pointer, so the scroll position moves the other way.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<f64> {
        let anchor = self.drag?;
        let delta = match self.orientation {
            Orientation::Horizontal => x - anchor.x,
            Orientation::Vertical => y - anchor.y,
        };
        Some(self.scroll_to(anchor.position - delta))
    }

    /// Ends the current drag.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Cancels the current drag, keeping the position reached so far.
    pub fn pointer_cancel(&mut self) {
        self.drag = None;
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Applies a wheel event and returns the new scroll position.
    ///
    /// A horizontal timeline turns the dominant wheel axis into horizontal
    /// scrolling so a plain vertical wheel still moves through time. A
    /// vertical timeline returns `None` and leaves native scrolling alone.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) -> Option<f64> {
        if self.orientation == Orientation::Vertical {
            return None;
        }
        let delta = if delta_x.abs() > delta_y.abs() {
            delta_x
        } else {
            delta_y
        };
        Some(self.scroll_to(self.position + delta))
    }

    fn clamp(&self, position: f64) -> f64 {
        position.clamp(0.0, self.max_position())
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}
