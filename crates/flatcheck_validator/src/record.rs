//! Record validation logic.
//!
//! This module checks a record's field count and evaluates every field. A
//! wrong field count does not stop field evaluation.

use crate::{FieldOutcome, FieldRuleEngine, Result};
use flatcheck_core::{PatternMatch, Record, Violation};

/// Result of validating one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// Set when the field count differs from the expected size
    pub size_violation: Option<Violation>,

    /// One outcome per field, in positional order
    pub fields: Vec<FieldOutcome>,
}

impl RecordOutcome {
    /// Returns true if the size check and every field passed.
    pub fn passed(&self) -> bool {
        self.size_violation.is_none() && self.fields.iter().all(FieldOutcome::passed)
    }

    /// Iterates over every violation, the size violation first.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.size_violation
            .iter()
            .chain(self.fields.iter().flat_map(|f| f.violations.iter()))
    }

    /// Returns the number of violations.
    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }
}

/// Validates records against their configuration.
#[derive(Default)]
pub struct RecordValidator {
    engine: FieldRuleEngine,
}

impl RecordValidator {
    /// Creates a new record validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record validator with the given pattern anchoring.
    pub fn with_pattern_match(pattern_match: PatternMatch) -> Self {
        Self {
            engine: FieldRuleEngine::with_pattern_match(pattern_match),
        }
    }

    /// Returns the field rule engine.
    pub fn engine_mut(&mut self) -> &mut FieldRuleEngine {
        &mut self.engine
    }

    /// Validates a single record.
    ///
    /// Every field is evaluated even after a failure, so the outcome lists
    /// every violation in the record.
    ///
    /// # Errors
    ///
    /// Returns an error if a column definition is unusable for this record.
    pub fn validate_record(&mut self, record: &Record<'_>) -> Result<RecordOutcome> {
        let size_violation = self.validate_record_size(record);

        let fields = record
            .fields()
            .iter()
            .map(|field| self.engine.evaluate(field, record))
            .collect::<Result<Vec<_>>>()?;

        Ok(RecordOutcome {
            size_violation,
            fields,
        })
    }

    fn validate_record_size(&self, record: &Record<'_>) -> Option<Violation> {
        let expected = record.expected_size();
        let actual = record.len();

        (actual != expected).then(|| Violation::row_size(actual, expected))
    }
}
