//! Error types for the kinline-upcoming crate.

/// Error type for all fallible operations in the kinline-upcoming crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpcomingError {
    /// Returned when there are no birth dates to search.
    #[error("no birth dates provided")]
    EmptyData,
}
