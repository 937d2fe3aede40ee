//! Record representation for validation.
//!
//! Rows are split into [`Field`]s paired with their column rules, grouped into
//! a [`Record`], and produced lazily by a [`Dataset`].

use crate::{ColumnDefinition, Configuration};
use std::borrow::Cow;

/// A single delimited value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    value: String,
    index: usize,
    meta: &'a ColumnDefinition,
}

impl<'a> Field<'a> {
    /// Creates a field at `index` with its column rules.
    pub fn new(value: impl Into<String>, index: usize, meta: &'a ColumnDefinition) -> Self {
        Self {
            value: value.into(),
            index,
            meta,
        }
    }

    /// Returns the raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Returns true if the value is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Returns the position of this field in its record.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the column rules for this field.
    pub fn meta(&self) -> &'a ColumnDefinition {
        self.meta
    }

    /// Returns the configured name or a positional placeholder.
    pub fn name(&self) -> Cow<'a, str> {
        match &self.meta.name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("<Field #{}>", self.index)),
        }
    }
}

/// One parsed row.
///
/// The number of fields may differ from the expected size; that mismatch is
/// reported by validation, not by parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    fields: Vec<Field<'a>>,
    expected_size: usize,
}

impl<'a> Record<'a> {
    /// Splits `row` on the configured delimiter, keeping empty values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flatcheck_core::{Configuration, Record};
    ///
    /// let configuration = Configuration::default();
    /// let record = Record::parse("a||c", &configuration);
    ///
    /// let values: Vec<&str> = record.fields().iter().map(|f| f.value()).collect();
    /// assert_eq!(values, vec!["a", "", "c"]);
    /// ```
    pub fn parse(row: &str, configuration: &'a Configuration) -> Self {
        let fields = row
            .split(configuration.delimiter)
            .enumerate()
            .map(|(index, value)| Field::new(value, index, configuration.column(index)))
            .collect();

        Self {
            fields,
            expected_size: configuration.size,
        }
    }

    /// Returns the fields in positional order.
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Gets the field at `index`.
    pub fn field(&self, index: usize) -> Option<&Field<'a>> {
        self.fields.get(index)
    }

    /// Returns the number of fields actually present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the configured field count.
    pub fn expected_size(&self) -> usize {
        self.expected_size
    }
}

/// A lazily parsed sequence of records.
///
/// Rows are pulled from the source one at a time; nothing is cached, so a
/// dataset can be traversed once per source.
#[derive(Debug, Clone)]
pub struct Dataset<'a, I> {
    rows: I,
    configuration: &'a Configuration,
}

impl<'a, I, S> Dataset<'a, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Creates a dataset over `rows`.
    pub fn new<R>(rows: R, configuration: &'a Configuration) -> Self
    where
        R: IntoIterator<Item = S, IntoIter = I>,
    {
        Self {
            rows: rows.into_iter(),
            configuration,
        }
    }

    /// Returns the configuration records are parsed with.
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }
}

impl<'a, I, S> Iterator for Dataset<'a, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(Record::parse(row.as_ref(), self.configuration))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}
