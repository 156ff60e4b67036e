//! Timeline layout for dated entries.
//!
//! This crate maps sorted fractional-year positions to pixel offsets on a
//! linear time axis and keeps neighbouring cards at least a minimum gap
//! apart. Around that core it provides the pieces a renderer needs to draw
//! the timeline:
//!
//! | Piece | Purpose |
//! |-------|---------|
//! | [`compute_layout`] | Collision-free offsets and content extent |
//! | [`year_ticks`] | Year markers spaced by scale |
//! | [`Orientation`], [`Side`] | Axis direction and card placement |
//! | [`canvas_extent`], [`centered_scroll`] | Canvas sizing and centring |
//! | [`ScrollState`] | Drag and wheel interaction state |
//!
//! # Quick start
//!
//! ```
//! use kinline_layout::{LayoutConfig, compute_layout};
//!
//! let positions = [1990.33, 1990.33, 1992.0];
//! let config = LayoutConfig::new().with_px_per_year(20.0).with_min_gap(50.0);
//!
//! let layout = compute_layout(&positions, &config).unwrap();
//! assert_eq!(layout.offsets()[1] - layout.offsets()[0], 50.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! compute_layout()
//!   ├─ validate config and positions
//!   ├─ linear map: (pos - min_year) * px_per_year
//!   ├─ forward collision pass (min_gap)
//!   └─ content_extent = last + trailing_margin
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod scroll;
pub mod ticks;
pub mod view;

pub(crate) mod engine;

pub use config::{DEFAULT_MIN_GAP, DEFAULT_PX_PER_YEAR, DEFAULT_TRAILING_MARGIN, LayoutConfig};
pub use engine::compute_layout;
pub use error::LayoutError;
pub use result::TimelineLayout;
pub use scroll::ScrollState;
pub use ticks::{Tick, tick_step, year_ticks};
pub use view::{
    DEFAULT_MOBILE_BREAKPOINT, HORIZONTAL_CANVAS_SLACK, Orientation, Side, canvas_extent,
    centered_scroll,
};
