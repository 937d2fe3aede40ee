//! Error types for flatcheck configurations.
//!
//! This module defines the errors raised while loading a configuration and
//! the problems reported when checking its rule definitions.

use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Pattern does not compile
    #[error("Invalid pattern for column '{column}': {error}")]
    InvalidPattern {
        /// Column display name
        column: String,
        /// Regex compiler message
        error: String,
    },

    /// Date format contains unknown specifiers
    #[error("Invalid date format for column '{column}': {format}")]
    InvalidDateFormat {
        /// Column display name
        column: String,
        /// Offending format string
        format: String,
    },

    /// Conditional requirement refers to a column outside the row
    #[error("Column '{column}' refers to column {reference} but rows have {size} fields")]
    ReferenceOutOfRange {
        /// Column display name
        column: String,
        /// Referenced column index
        reference: usize,
        /// Configured row size
        size: usize,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
