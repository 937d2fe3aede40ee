//! Error types for validation operations.
//!
//! Rule violations are not errors; they are reported as
//! [`Violation`](flatcheck_core::Violation)s. The errors here are
//! configuration defects that make a run meaningless and stop it.

use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that abort validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Invalid regex pattern
    #[error("Invalid regex pattern for field '{field}': {pattern} ({error})")]
    InvalidRegex {
        field: String,
        pattern: String,
        error: String,
    },

    /// Date format with unknown specifiers
    #[error("Invalid date format for field '{field}': {format}")]
    InvalidDateFormat { field: String, format: String },

    /// Conditional requirement refers past the end of the record
    #[error(
        "Field '{field}' refers to column {reference} but the record has {size} fields"
    )]
    ColumnOutOfRange {
        field: String,
        reference: usize,
        size: usize,
    },
}

impl ValidationError {
    /// Creates a new invalid regex error.
    pub fn invalid_regex(
        field: impl Into<String>,
        pattern: impl Into<String>,
        error: impl ToString,
    ) -> Self {
        Self::InvalidRegex {
            field: field.into(),
            pattern: pattern.into(),
            error: error.to_string(),
        }
    }

    /// Creates a new invalid date format error.
    pub fn invalid_date_format(field: impl Into<String>, format: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            field: field.into(),
            format: format.into(),
        }
    }

    /// Creates a new out-of-range reference error.
    pub fn column_out_of_range(field: impl Into<String>, reference: usize, size: usize) -> Self {
        Self::ColumnOutOfRange {
            field: field.into(),
            reference,
            size,
        }
    }
}
