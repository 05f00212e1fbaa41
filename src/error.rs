//! Error types
//!
//! A single error enum shared by loaders, analysis and reporting.

use thiserror::Error;

/// Analysis error types
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Protein density asked for a food with zero calories
    #[error("Protein density undefined for '{identifier}': kcal is 0")]
    DivisionUndefined { identifier: String },

    /// A food entry that cannot become a FoodRecord
    #[error("Invalid food record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// A malformed row in a yearly name file
    #[error("Invalid name row in {year} at line {line}: {reason}")]
    InvalidNameRow { year: u16, line: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
