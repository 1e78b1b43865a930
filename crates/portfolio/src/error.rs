//! Error types for portfolio construction and analytics.

use basket_primitives::Date;
use basket_stats::StatsError;
use polars::prelude::PolarsError;

/// Errors that can occur while building or analyzing a portfolio.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// Basket has no positions.
    #[error("basket has no positions")]
    EmptyBasket,

    /// Analysis window is empty or inverted.
    #[error("invalid window: start {start} is not before end {end}")]
    InvalidWindow {
        /// Window start.
        start: Date,
        /// Window end.
        end: Date,
    },

    /// No price history supplied for a held symbol.
    #[error("missing price history for {0}")]
    MissingHistory(String),

    /// Symbol not held in the basket.
    #[error("symbol {0} is not held in the basket")]
    UnknownSymbol(String),

    /// Series length differs from the benchmark series.
    #[error("length mismatch for {symbol}: expected {expected} observations, got {actual}")]
    LengthMismatch {
        /// Symbol whose series mismatches.
        symbol: String,
        /// Expected observation count.
        expected: usize,
        /// Actual observation count.
        actual: usize,
    },

    /// Trading dates differ from the benchmark series.
    #[error("date mismatch for {symbol}: series is not aligned with the benchmark dates")]
    DateMismatch {
        /// Symbol whose series mismatches.
        symbol: String,
    },

    /// Not enough aligned observations.
    #[error("insufficient history: need at least {required} observations, got {actual}")]
    InsufficientHistory {
        /// Required observation count.
        required: usize,
        /// Actual observation count.
        actual: usize,
    },

    /// Statistics error.
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] PolarsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PortfolioError::MissingHistory("AAPL".to_string());
        assert!(err.to_string().contains("AAPL"));

        let err =
            PortfolioError::LengthMismatch { symbol: "MSFT".to_string(), expected: 10, actual: 7 };
        assert!(err.to_string().contains("10") && err.to_string().contains('7'));
    }
}
