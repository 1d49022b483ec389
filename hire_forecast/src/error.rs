//! Error types for the hire_forecast crate

use thiserror::Error;

/// Custom error types for the hire_forecast crate
#[derive(Debug, Error)]
pub enum HireForecastError {
    /// Error related to series construction or validation
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from configuration lookup
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from aggregation and statistics
    #[error("Math error: {0}")]
    MathError(#[from] hire_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from parsing a TOML config file
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from CSV serialization
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from parsing a calendar date
    #[error("Date parse error: {0}")]
    DateParseError(#[from] chrono::ParseError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, HireForecastError>;
