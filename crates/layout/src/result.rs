//! Output type for timeline layout.

/// Pixel placement of every entry along the timeline axis.
///
/// Offsets are in input order and measured from the earliest entry, which
/// always sits at `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    /// Final, collision-resolved offset per entry.
    offsets: Vec<f64>,
    /// Smallest year position in the input.
    min_year: f64,
    /// Largest year position in the input.
    max_year: f64,
    /// Pixel span needed to show every entry, including the trailing margin.
    content_extent: f64,
}

impl TimelineLayout {
    /// Creates a new `TimelineLayout`.
    pub(crate) fn new(offsets: Vec<f64>, min_year: f64, max_year: f64, content_extent: f64) -> Self {
        Self {
            offsets,
            min_year,
            max_year,
            content_extent,
        }
    }

    /// Returns the offsets, one per entry.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Returns the smallest year position.
    pub fn min_year(&self) -> f64 {
        self.min_year
    }

    /// Returns the largest year position.
    pub fn max_year(&self) -> f64 {
        self.max_year
    }

    /// Returns the total pixel span of the content.
    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Returns the number of laid-out entries.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if no entries were laid out.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
