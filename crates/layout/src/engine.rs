//! Year positions to collision-free pixel offsets.

use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::result::TimelineLayout;

/// Maps sorted fractional-year positions to pixel offsets along the axis.
///
/// Each offset starts as `(position - min_year) * px_per_year`. A single
/// left-to-right pass then pushes any offset closer than `min_gap` to its
/// predecessor forward to exactly `min_gap` past it. Pushes cascade to later
/// entries and never move an earlier one, so the result is non-decreasing
/// with every adjacent gap at least `min_gap`.
///
/// # Errors
///
/// - [`LayoutError::InvalidConfig`] if `config` fails validation.
/// - [`LayoutError::EmptyData`] if `year_positions` is empty.
/// - [`LayoutError::NonFinitePosition`] for a NaN or infinite position.
/// - [`LayoutError::Unsorted`] if positions are not ascending.
#[tracing::instrument(skip(year_positions, config), fields(n = year_positions.len()))]
pub fn compute_layout(
    year_positions: &[f64],
    config: &LayoutConfig,
) -> Result<TimelineLayout, LayoutError> {
    config.validate()?;
    validate_positions(year_positions)?;

    // Sorted, so the extremes are the ends.
    let min_year = year_positions[0];
    let max_year = year_positions[year_positions.len() - 1];
    let px_per_year = config.px_per_year();
    let min_gap = config.min_gap();

    let mut offsets: Vec<f64> = year_positions
        .iter()
        .map(|&y| (y - min_year) * px_per_year)
        .collect();

    let mut n_pushed = 0usize;
    for i in 1..offsets.len() {
        if offsets[i] - offsets[i - 1] < min_gap {
            offsets[i] = offsets[i - 1] + min_gap;
            n_pushed += 1;
        }
    }

    let last = offsets[offsets.len() - 1];
    let content_extent = last + config.trailing_margin();
    debug!(n_pushed, content_extent, "layout computed");

    Ok(TimelineLayout::new(offsets, min_year, max_year, content_extent))
}

fn validate_positions(year_positions: &[f64]) -> Result<(), LayoutError> {
    if year_positions.is_empty() {
        return Err(LayoutError::EmptyData);
    }
    for (index, y) in year_positions.iter().enumerate() {
        if !y.is_finite() {
            return Err(LayoutError::NonFinitePosition { index });
        }
    }
    for (i, pair) in year_positions.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(LayoutError::Unsorted { index: i + 1 });
        }
    }
    Ok(())
}
