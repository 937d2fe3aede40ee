//! Configuration types for flat-file validation.
//!
//! This module contains the types describing the expected shape of a record
//! and the per-column rules each field is checked against.

use crate::{ConfigError, Result};
use chrono::format::{Item, StrftimeItems};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default field separator.
pub const DEFAULT_DELIMITER: char = '|';

static UNCONSTRAINED: ColumnDefinition = ColumnDefinition {
    name: None,
    required: false,
    max_length: None,
    min_length: None,
    values: None,
    pattern: None,
    integer: false,
    date: None,
    required_if_empty: None,
    required_if_filled: None,
};

/// Validation configuration for one flat file.
///
/// A `Configuration` describes the delimiter used to split rows, how many
/// fields each row is expected to have, and the rules for every column.
///
/// # Example
///
/// ```rust
/// use flatcheck_core::Configuration;
///
/// let json = r#"{
///     "delimiter": "|",
///     "size": 2,
///     "columns": [
///         { "name": "code", "required": true, "pattern": "^[A-Z]+$" },
///         { "name": "amount", "integer": true }
///     ]
/// }"#;
///
/// let configuration = Configuration::from_json(json).unwrap();
/// assert_eq!(configuration.size, 2);
/// assert_eq!(configuration.column(1).name.as_deref(), Some("amount"));
/// assert!(!configuration.column(7).required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Field separator
    pub delimiter: char,

    /// Expected number of fields per record
    pub size: usize,

    /// Column rule definitions, index-aligned with field positions
    pub columns: Vec<ColumnDefinition>,

    /// How `pattern` rules are anchored against field values
    pub pattern_match: PatternMatch,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            size: 0,
            columns: Vec::new(),
            pattern_match: PatternMatch::default(),
        }
    }
}

impl Configuration {
    /// Parses a configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Returns the rule definition for the column at `index`.
    ///
    /// Columns past the configured ones get an unconstrained definition.
    pub fn column(&self, index: usize) -> &ColumnDefinition {
        self.columns.get(index).unwrap_or(&UNCONSTRAINED)
    }

    /// Checks the rule definitions without any data.
    ///
    /// Returns every problem found: patterns that do not compile, date
    /// formats with unknown specifiers, and cross-field references that
    /// point past the configured row size. An empty list means the
    /// configuration is usable.
    pub fn check(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();

        for (index, column) in self.columns.iter().enumerate() {
            let name = column.display_name(index);

            if let Some(pattern) = column.pattern.as_deref().filter(|p| !p.is_empty()) {
                if let Err(e) = Regex::new(&self.pattern_match.anchor(pattern)) {
                    problems.push(ConfigError::InvalidPattern {
                        column: name.clone(),
                        error: e.to_string(),
                    });
                }
            }

            if let Some(format) = column.date.as_deref() {
                if !is_valid_date_format(format) {
                    problems.push(ConfigError::InvalidDateFormat {
                        column: name.clone(),
                        format: format.to_string(),
                    });
                }
            }

            for reference in column.conditional_references() {
                if reference >= self.size {
                    problems.push(ConfigError::ReferenceOutOfRange {
                        column: name.clone(),
                        reference,
                        size: self.size,
                    });
                }
            }
        }

        problems
    }
}

/// Returns true if every specifier in `format` is understood by chrono.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Anchoring applied to `pattern` rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMatch {
    /// The whole value must match the pattern
    #[default]
    Full,
    /// The pattern must match at the start of the value
    Prefix,
}

impl PatternMatch {
    /// Wraps `pattern` so that a plain regex search honours this anchoring.
    pub fn anchor(self, pattern: &str) -> String {
        match self {
            PatternMatch::Full => format!("^(?:{})$", pattern),
            PatternMatch::Prefix => format!("^(?:{})", pattern),
        }
    }
}

/// Rules for a single column.
///
/// Every rule is optional; an absent rule never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDefinition {
    /// Display label used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Field must be non-blank after trimming
    pub required: bool,

    /// Maximum raw length; zero disables the rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Minimum trimmed length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Accepted values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,

    /// Regular expression the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Value must consist of ASCII digits only
    pub integer: bool,

    /// strftime-style format the value must round-trip through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Field is required when the referenced column is blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_if_empty: Option<usize>,

    /// Field is required when the referenced column is filled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_if_filled: Option<usize>,
}

impl ColumnDefinition {
    /// Resolves the label for a column at `index`.
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("<Field #{}>", index),
        }
    }

    /// Column indexes referenced by conditional requirements.
    pub fn conditional_references(&self) -> impl Iterator<Item = usize> {
        self.required_if_empty.into_iter().chain(self.required_if_filled)
    }

    /// Returns true if no rule is configured.
    pub fn is_unconstrained(&self) -> bool {
        let named_only = ColumnDefinition {
            name: self.name.clone(),
            ..Default::default()
        };
        *self == named_only
    }
}
