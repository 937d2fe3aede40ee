//! Builder pattern for creating configurations.
//!
//! This module provides ergonomic builders for constructing configurations
//! and column definitions with a fluent API.

use crate::{ColumnDefinition, Configuration, PatternMatch};

/// Builder for creating a `Configuration`.
///
/// # Example
///
/// ```rust
/// use flatcheck_core::{ColumnBuilder, ConfigurationBuilder};
///
/// let configuration = ConfigurationBuilder::new()
///     .delimiter(';')
///     .column(ColumnBuilder::new("code").required(true).pattern("^[A-Z]+$").build())
///     .column(ColumnBuilder::new("amount").integer(true).build())
///     .build();
///
/// assert_eq!(configuration.size, 2);
/// assert_eq!(configuration.delimiter, ';');
/// ```
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    delimiter: Option<char>,
    size: Option<usize>,
    columns: Vec<ColumnDefinition>,
    pattern_match: PatternMatch,
}

impl ConfigurationBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the expected field count.
    ///
    /// Defaults to the number of columns added.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Adds a column definition.
    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds multiple column definitions.
    pub fn columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Sets pattern anchoring.
    pub fn pattern_match(mut self, pattern_match: PatternMatch) -> Self {
        self.pattern_match = pattern_match;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Configuration {
        Configuration {
            delimiter: self.delimiter.unwrap_or(crate::DEFAULT_DELIMITER),
            size: self.size.unwrap_or(self.columns.len()),
            columns: self.columns,
            pattern_match: self.pattern_match,
        }
    }
}

/// Builder for creating a `ColumnDefinition`.
///
/// # Example
///
/// ```rust
/// use flatcheck_core::ColumnBuilder;
///
/// let column = ColumnBuilder::new("status")
///     .required(true)
///     .values(vec!["active", "inactive"])
///     .build();
///
/// assert_eq!(column.name.as_deref(), Some("status"));
/// assert!(column.required);
/// ```
#[derive(Debug, Default)]
pub struct ColumnBuilder {
    column: ColumnDefinition,
}

impl ColumnBuilder {
    /// Creates a builder for a named column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            column: ColumnDefinition {
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }

    /// Creates a builder for a column shown by its position.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Sets whether the field must be non-blank.
    pub fn required(mut self, required: bool) -> Self {
        self.column.required = required;
        self
    }

    /// Sets the maximum raw length.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.column.max_length = Some(max_length);
        self
    }

    /// Sets the minimum trimmed length.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.column.min_length = Some(min_length);
        self
    }

    /// Sets the accepted values.
    pub fn values<S: Into<String>>(mut self, values: Vec<S>) -> Self {
        self.column.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.column.pattern = Some(pattern.into());
        self
    }

    /// Sets whether the value must be digits only.
    pub fn integer(mut self, integer: bool) -> Self {
        self.column.integer = integer;
        self
    }

    /// Sets the date format.
    pub fn date(mut self, format: impl Into<String>) -> Self {
        self.column.date = Some(format.into());
        self
    }

    /// Requires this field when the column at `index` is blank.
    pub fn required_if_empty(mut self, index: usize) -> Self {
        self.column.required_if_empty = Some(index);
        self
    }

    /// Requires this field when the column at `index` is filled.
    pub fn required_if_filled(mut self, index: usize) -> Self {
        self.column.required_if_filled = Some(index);
        self
    }

    /// Builds the column definition.
    pub fn build(self) -> ColumnDefinition {
        self.column
    }
}
