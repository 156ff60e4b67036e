//! Error types for the kinline-calendar crate.

/// Error type for all fallible operations in the kinline-calendar crate.
///
/// This enum covers unparsable or semantically invalid birth date strings
/// and unknown leap-day policy names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string is not a valid `year-month-day` calendar date.
    #[error("invalid date: {raw:?} (use YYYY-MM-DD)")]
    InvalidDate {
        /// The text exactly as it was provided.
        raw: String,
    },

    /// Returned when a leap-day policy name is not recognised.
    #[error("unknown leap-day policy: {name:?} (expected \"mar1\" or \"feb28\")")]
    UnknownLeapDayPolicy {
        /// The unrecognised policy name.
        name: String,
    },
}
