//! Error types for statistical operations.

/// Errors that can occur during statistical operations.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Not enough observations.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Invalid period count.
    #[error("invalid period count: {0} (must be positive)")]
    InvalidPeriods(f64),
}
