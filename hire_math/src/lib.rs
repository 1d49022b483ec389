//! # Hire Math
//!
//! Arithmetic behind the hiring dashboard's summary cards.
//! This crate works on plain hire counts so it can be shared by the series
//! generator, the forecaster and any presentation layer.

use thiserror::Error;

pub mod aggregation;
pub mod statistics;

pub use aggregation::{average, format_average, total};
pub use statistics::{summarize, HiresSummary};

/// Errors that can occur in hiring-series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),
}

/// Result type for hiring math operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = MathError::InsufficientData("empty series".to_string());
        assert_eq!(
            err.to_string(),
            "Insufficient data for calculation: empty series"
        );
    }
}
