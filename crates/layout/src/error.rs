//! Error types for the kinline-layout crate.

/// Error type for all fallible operations in the kinline-layout crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Returned when there are no positions to lay out.
    #[error("no positions provided")]
    EmptyData,

    /// Returned when a layout parameter is out of range.
    #[error("invalid layout configuration: {reason}")]
    InvalidConfig {
        /// Description of the offending parameter.
        reason: String,
    },

    /// Returned when a year position is NaN or infinite.
    #[error("year position at index {index} is not finite")]
    NonFinitePosition {
        /// Index of the offending position.
        index: usize,
    },

    /// Returned when positions are not sorted ascending.
    #[error("year positions must be sorted ascending: index {index} is before its predecessor")]
    Unsorted {
        /// Index of the first position smaller than the one before it.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty() {
        assert_eq!(LayoutError::EmptyData.to_string(), "no positions provided");
    }

    #[test]
    fn display_invalid_config() {
        let err = LayoutError::InvalidConfig {
            reason: "px_per_year must be finite and > 0, got 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid layout configuration: px_per_year must be finite and > 0, got 0"
        );
    }

    #[test]
    fn display_unsorted() {
        let err = LayoutError::Unsorted { index: 3 };
        assert_eq!(
            err.to_string(),
            "year positions must be sorted ascending: index 3 is before its predecessor"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<LayoutError>();
    }
}
