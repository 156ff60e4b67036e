//! Year tick marks along the time axis.

/// A year marker on the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Calendar year labelled by this tick.
    pub year: i32,
    /// Pixel offset on the same axis as the layout offsets. The first tick
    /// may be negative when the earliest entry is not on Jan 1.
    pub offset: f64,
}

/// Returns the number of years between ticks for a given scale.
///
/// Dense scales label every year; sparser ones every second or fifth year
/// so labels do not overlap.
pub fn tick_step(px_per_year: f64) -> i32 {
    if px_per_year >= 28.0 {
        1
    } else if px_per_year >= 16.0 {
        2
    } else {
        5
    }
}

/// Generates ticks from `floor(min_year)` through `ceil(max_year)`.
///
/// Ticks are placed with the raw linear mapping; they are not affected by
/// collision resolution. Returns an empty list for a non-positive or
/// non-finite scale.
pub fn year_ticks(min_year: f64, max_year: f64, px_per_year: f64) -> Vec<Tick> {
    if !px_per_year.is_finite() || px_per_year <= 0.0 || !min_year.is_finite() || !max_year.is_finite()
    {
        return Vec::new();
    }
    let start = min_year.floor() as i32;
    let end = max_year.ceil() as i32;
    let step = tick_step(px_per_year);

    let mut ticks = Vec::new();
    let mut year = start;
    while year <= end {
        ticks.push(Tick {
            year,
            offset: (f64::from(year) - min_year) * px_per_year,
        });
        year += step;
    }
    ticks
}
