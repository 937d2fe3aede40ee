//! Tests to verify consistent handling of blank fields across all rules.
//!
//! Blank means empty after trimming whitespace. The policy is:
//! - `required` fails on blank values
//! - `minLength`, `values`, `pattern` and `date` skip optional blank fields
//! - `maxLength` always measures the raw value, whitespace included
//! - `integer` never skips, blank fails
//!
//! These tests pin the policy so that an optional column left empty is not
//! mistaken for bad data, and a required one is never let through.

use flatcheck_core::{ColumnBuilder, Configuration, ConfigurationBuilder, Record, ViolationKind};
use flatcheck_validator::{DatasetValidator, DiagnosticLog, RecordValidator};

fn single(column: flatcheck_core::ColumnDefinition) -> Configuration {
    ConfigurationBuilder::new().column(column).build()
}

fn violations(configuration: &Configuration, row: &str) -> Vec<ViolationKind> {
    let record = Record::parse(row, configuration);
    RecordValidator::new()
        .validate_record(&record)
        .unwrap()
        .violations()
        .map(|v| v.kind.clone())
        .collect()
}

#[test]
fn test_blank_in_required_field_fails() {
    let configuration = single(ColumnBuilder::new("id").required(true).build());

    for row in ["", " ", "\t", "   "] {
        assert_eq!(
            violations(&configuration, row),
            vec![ViolationKind::Missing],
            "Blank value {:?} should fail required",
            row
        );
    }
}

#[test]
fn test_non_blank_passes_required_regardless_of_padding() {
    let configuration = single(ColumnBuilder::new("id").required(true).build());

    assert!(violations(&configuration, " x ").is_empty());
}

#[test]
fn test_blank_optional_field_skips_gated_rules() {
    let configuration = single(
        ColumnBuilder::new("note")
            .min_length(6)
            .values(vec!["alpha", "beta"])
            .pattern("^[a-z]+$")
            .date("%Y%m%d")
            .build(),
    );

    assert!(
        violations(&configuration, "  ").is_empty(),
        "Blank optional field should skip gated rules"
    );
}

#[test]
fn test_non_blank_optional_field_is_checked() {
    let configuration = single(
        ColumnBuilder::new("note")
            .min_length(6)
            .values(vec!["alpha", "beta"])
            .pattern("^[a-z]+$")
            .date("%Y%m%d")
            .build(),
    );

    let kinds = violations(&configuration, "Q");
    assert_eq!(kinds.len(), 4, "Got {:?}", kinds);
    assert!(matches!(kinds[0], ViolationKind::TooShort { length: 1, min: 6 }));
    assert!(matches!(kinds[1], ViolationKind::UnexpectedValue { .. }));
    assert!(matches!(kinds[2], ViolationKind::PatternMismatch { .. }));
    assert!(matches!(kinds[3], ViolationKind::InvalidDate { .. }));
}

#[test]
fn test_blank_required_field_runs_gated_rules() {
    let configuration = single(
        ColumnBuilder::new("code")
            .required(true)
            .values(vec!["A", "B"])
            .build(),
    );

    let kinds = violations(&configuration, " ");
    assert_eq!(kinds.len(), 2);
    assert_eq!(kinds[0], ViolationKind::Missing);
    assert!(matches!(kinds[1], ViolationKind::UnexpectedValue { .. }));
}

#[test]
fn test_max_length_counts_whitespace() {
    let configuration = single(ColumnBuilder::new("code").max_length(2).build());

    assert!(violations(&configuration, "  ").is_empty());
    assert_eq!(
        violations(&configuration, "   "),
        vec![ViolationKind::TooLong { length: 3, max: 2 }]
    );
}

#[test]
fn test_blank_integer_field_fails() {
    let configuration = single(ColumnBuilder::new("amount").integer(true).build());

    assert_eq!(violations(&configuration, " "), vec![ViolationKind::NotInteger]);
    assert_eq!(violations(&configuration, ""), vec![ViolationKind::NotInteger]);
}

#[test]
fn test_empty_value_set_never_constrains_required_fields() {
    let configuration = single(
        ColumnBuilder::new("status")
            .required(true)
            .values(Vec::<String>::new())
            .build(),
    );

    assert!(
        violations(&configuration, "anything").is_empty(),
        "An empty value set never constrains"
    );
}

#[test]
fn test_row_of_only_delimiters() {
    let configuration = ConfigurationBuilder::new()
        .column(ColumnBuilder::new("a").build())
        .column(ColumnBuilder::new("b").min_length(3).build())
        .column(ColumnBuilder::new("c").required(true).build())
        .build();
    let mut log = DiagnosticLog::new();

    let report = DatasetValidator::new()
        .validate_rows(["||"], &configuration, &mut log)
        .unwrap();

    assert!(!report.passed);
    assert_eq!(log.diagnostics().len(), 1);
    assert_eq!(log.diagnostics()[0].violation.field.as_deref(), Some("c"));
}
