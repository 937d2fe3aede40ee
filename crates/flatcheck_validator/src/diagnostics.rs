//! Diagnostic sinks.
//!
//! Validation produces structured [`Violation`]s; a [`DiagnosticSink`] decides
//! what to do with them. [`TracingSink`] renders them as log lines,
//! [`DiagnosticLog`] keeps them for a report.

use flatcheck_core::Violation;
use serde::Serialize;
use tracing::{error, info};

/// Receives the diagnostic stream of a dataset validation.
///
/// Ordinals are 1-based record positions.
pub trait DiagnosticSink {
    /// Called before a record is validated.
    fn record_started(&mut self, ordinal: usize);

    /// Called once per violation found in the record.
    fn violation(&mut self, ordinal: usize, violation: &Violation);

    /// Called after a record is validated.
    fn record_finished(&mut self, _ordinal: usize, _passed: bool) {}
}

/// Renders diagnostics through `tracing`.
///
/// Each record gets an `info` banner; each violation is logged at `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record_started(&mut self, ordinal: usize) {
        info!(
            "****************** Record #{} validation ******************",
            ordinal
        );
    }

    fn violation(&mut self, ordinal: usize, violation: &Violation) {
        error!(record = ordinal, rule = violation.kind.rule(), "{}", violation);
    }
}

/// A violation tagged with the record it was found in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// 1-based record position
    pub record: usize,

    /// The violation
    #[serde(flatten)]
    pub violation: Violation,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record #{}: {}", self.record, self.violation)
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticLog {
    records_seen: usize,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of record banners received.
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Returns the collected diagnostics in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns true if no violation was collected.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Renders every diagnostic as one line.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn record_started(&mut self, _ordinal: usize) {
        self.records_seen += 1;
    }

    fn violation(&mut self, ordinal: usize, violation: &Violation) {
        self.diagnostics.push(Diagnostic {
            record: ordinal,
            violation: violation.clone(),
        });
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record_started(&mut self, ordinal: usize) {
        (**self).record_started(ordinal);
    }

    fn violation(&mut self, ordinal: usize, violation: &Violation) {
        (**self).violation(ordinal, violation);
    }

    fn record_finished(&mut self, ordinal: usize, passed: bool) {
        (**self).record_finished(ordinal, passed);
    }
}
