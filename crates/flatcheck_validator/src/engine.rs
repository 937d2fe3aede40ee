//! Main validation engine.
//!
//! This module provides the `DatasetValidator` that walks a dataset record by
//! record and aggregates the verdict.

use crate::{DiagnosticSink, RecordValidator, Result};
use flatcheck_core::{Configuration, Dataset, ValidationReport};
use std::time::Instant;
use tracing::debug;

/// Validation engine for flat-file datasets.
///
/// Records are pulled from the dataset one at a time and never retained, so
/// memory does not grow with the input. A failed record does not stop the
/// run; the report fails if any record failed.
///
/// # Example
///
/// ```rust
/// use flatcheck_core::{ColumnBuilder, ConfigurationBuilder, Dataset};
/// use flatcheck_validator::{DatasetValidator, DiagnosticLog};
///
/// let configuration = ConfigurationBuilder::new()
///     .column(ColumnBuilder::new("code").pattern("^[A-Z]+$").required(true).build())
///     .column(ColumnBuilder::new("amount").integer(true).required(true).build())
///     .build();
///
/// let rows = ["ABC|1234", " |5678"];
/// let mut log = DiagnosticLog::new();
/// let mut validator = DatasetValidator::new();
///
/// let report = validator
///     .validate_data(Dataset::new(rows, &configuration), &mut log)
///     .unwrap();
///
/// assert!(!report.passed);
/// for message in log.messages() {
///     println!("{}", message);
/// }
/// ```
#[derive(Default)]
pub struct DatasetValidator {
    record_validator: RecordValidator,
}

impl DatasetValidator {
    /// Creates a new dataset validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every record of `dataset`.
    ///
    /// A banner is sent to `sink` before each record, followed by that
    /// record's violations.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as a column definition turns out to be
    /// unusable; diagnostics already sent stay in the sink.
    pub fn validate_data<I, S, K>(
        &mut self,
        dataset: Dataset<'_, I>,
        mut sink: K,
    ) -> Result<ValidationReport>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
        K: DiagnosticSink,
    {
        let start = Instant::now();
        let mut report = ValidationReport::success();

        self.record_validator
            .engine_mut()
            .set_pattern_match(dataset.configuration().pattern_match);

        for (position, record) in dataset.enumerate() {
            let ordinal = position + 1;
            sink.record_started(ordinal);

            let outcome = self.record_validator.validate_record(&record)?;
            for violation in outcome.violations() {
                sink.violation(ordinal, violation);
            }

            let passed = outcome.passed();
            debug!(record = ordinal, passed, fields = record.len(), "Record validated");
            sink.record_finished(ordinal, passed);
            report.add_record(record.len(), outcome.violation_count());
        }

        report.stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok(report)
    }

    /// Validates `rows` parsed with `configuration`.
    pub fn validate_rows<R, K>(
        &mut self,
        rows: R,
        configuration: &Configuration,
        sink: K,
    ) -> Result<ValidationReport>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        K: DiagnosticSink,
    {
        self.validate_data(Dataset::new(rows, configuration), sink)
    }
}
