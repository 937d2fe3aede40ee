//! Violation and report types.
//!
//! A [`Violation`] describes one failed rule on one record. A
//! [`ValidationReport`] summarizes a whole validation run.

use serde::Serialize;
use std::fmt;

/// The rule a value failed, with the constraint it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Record has the wrong number of fields
    RowSize { actual: usize, expected: usize },
    /// Required field is blank
    Missing,
    /// Required field is blank while another column is blank
    MissingIfEmpty { other: String },
    /// Required field is blank while another column is filled
    MissingIfFilled { other: String },
    /// Raw value longer than allowed
    TooLong { length: usize, max: usize },
    /// Trimmed value shorter than allowed
    TooShort { length: usize, min: usize },
    /// Value is not one of the accepted values
    UnexpectedValue { allowed: Vec<String> },
    /// Value does not match the pattern
    PatternMismatch { pattern: String },
    /// Value is not made of digits only
    NotInteger,
    /// Value does not round-trip through the date format
    InvalidDate { format: String },
}

impl ViolationKind {
    /// Short identifier of the failed rule.
    pub fn rule(&self) -> &'static str {
        match self {
            ViolationKind::RowSize { .. } => "size",
            ViolationKind::Missing => "required",
            ViolationKind::MissingIfEmpty { .. } => "requiredIfEmpty",
            ViolationKind::MissingIfFilled { .. } => "requiredIfFilled",
            ViolationKind::TooLong { .. } => "maxLength",
            ViolationKind::TooShort { .. } => "minLength",
            ViolationKind::UnexpectedValue { .. } => "values",
            ViolationKind::PatternMismatch { .. } => "pattern",
            ViolationKind::NotInteger => "integer",
            ViolationKind::InvalidDate { .. } => "date",
        }
    }
}

/// One failed check.
///
/// Row-size violations carry no field; every other violation names the field
/// and the raw value that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Display name of the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Position of the field in the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Raw value that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Failed rule and its constraint
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    /// Creates a field-level violation.
    pub fn field(
        field: impl Into<String>,
        index: usize,
        value: impl Into<String>,
        kind: ViolationKind,
    ) -> Self {
        Self {
            field: Some(field.into()),
            index: Some(index),
            value: Some(value.into()),
            kind,
        }
    }

    /// Creates a record-level size violation.
    pub fn row_size(actual: usize, expected: usize) -> Self {
        Self {
            field: None,
            index: None,
            value: None,
            kind: ViolationKind::RowSize { actual, expected },
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_deref().unwrap_or_default();
        let value = self.value.as_deref().unwrap_or_default();

        match &self.kind {
            ViolationKind::RowSize { actual, expected } => {
                write!(f, "Incorrect row size: {} (expected: {})", actual, expected)
            }
            ViolationKind::Missing => {
                write!(f, "Missing {} field: '{}' (expected: non-blank value)", field, value)
            }
            ViolationKind::MissingIfEmpty { other } => write!(
                f,
                "Missing {} field: '{}' (expected: non-blank value when {} is empty)",
                field, value, other
            ),
            ViolationKind::MissingIfFilled { other } => write!(
                f,
                "Missing {} field: '{}' (expected: non-blank value when {} is filled)",
                field, value, other
            ),
            ViolationKind::TooLong { length, max } => write!(
                f,
                "Too long {} field: '{}' has length {} (expected max length: {})",
                field, value, length, max
            ),
            ViolationKind::TooShort { length, min } => write!(
                f,
                "Too short {} field: '{}' has length {} (expected min length: {})",
                field, value, length, min
            ),
            ViolationKind::UnexpectedValue { allowed } => write!(
                f,
                "Unexpected {} value: '{}' (acceptable values: [{}])",
                field,
                value,
                allowed.join(", ")
            ),
            ViolationKind::PatternMismatch { pattern } => write!(
                f,
                "{} value doesn't match pattern: '{}' (pattern: {})",
                field, value, pattern
            ),
            ViolationKind::NotInteger => write!(
                f,
                "Incorrect {} integer value: '{}' (expected: ^[0-9]+$)",
                field, value
            ),
            ViolationKind::InvalidDate { format } => write!(
                f,
                "Incorrect {} date: '{}' (expected format: {})",
                field, value, format
            ),
        }
    }
}

/// Report of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether every record passed every check
    pub passed: bool,

    /// Validation statistics
    pub stats: ValidationStats,
}

/// Statistics about validation execution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationStats {
    /// Number of records validated
    pub records_validated: usize,

    /// Number of records with at least one violation
    pub records_failed: usize,

    /// Number of fields checked
    pub fields_checked: usize,

    /// Number of violations found
    pub violations: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Creates a report for a run that has not seen any record yet.
    pub fn success() -> Self {
        Self {
            passed: true,
            stats: ValidationStats::default(),
        }
    }

    /// Accounts for one validated record.
    pub fn add_record(&mut self, fields: usize, violations: usize) {
        self.stats.records_validated += 1;
        self.stats.fields_checked += fields;
        self.stats.violations += violations;
        if violations > 0 {
            self.stats.records_failed += 1;
            self.passed = false;
        }
    }
}
