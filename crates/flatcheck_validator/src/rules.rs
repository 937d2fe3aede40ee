//! Field rule evaluation.
//!
//! This module checks one field against its column definition. Rules are
//! evaluated in a fixed order and all of them run, so a field reports every
//! rule it breaks:
//!
//! 1. `required` (including `requiredIfEmpty` / `requiredIfFilled`)
//! 2. `maxLength`
//! 3. `minLength`
//! 4. `values`
//! 5. `pattern`
//! 6. `integer`
//! 7. `date`
//!
//! `minLength`, `values`, `pattern` and `date` skip optional fields left blank.

use crate::{Result, ValidationError};
use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use flatcheck_core::{Field, PatternMatch, Record, Violation, ViolationKind, is_valid_date_format};
use regex::Regex;
use std::collections::HashMap;
use std::fmt::{Display, Write};
use tracing::warn;

/// Result of evaluating one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    /// Position of the field in its record
    pub index: usize,

    /// One entry per failed rule
    pub violations: Vec<Violation>,
}

impl FieldOutcome {
    /// Returns true if every rule passed.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Why a field is required, if it is.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Requirement {
    Always,
    IfEmpty(String),
    IfFilled(String),
}

/// Decides whether a gated rule applies to a field.
///
/// Required fields are always checked; optional fields only when they hold a
/// non-blank value. `condition` is the rule's own precondition (a non-empty
/// value set, a non-empty pattern, a configured date format).
pub fn should_be_validated(is_required: bool, non_blank: bool, condition: bool) -> bool {
    (is_required || non_blank) && condition
}

/// Evaluates fields against their column rules.
pub struct FieldRuleEngine {
    pattern_match: PatternMatch,
    /// Compiled patterns keyed by their anchored source
    regex_cache: HashMap<String, Regex>,
}

impl FieldRuleEngine {
    /// Creates an engine with full-match pattern anchoring.
    pub fn new() -> Self {
        Self::with_pattern_match(PatternMatch::default())
    }

    /// Creates an engine with the given pattern anchoring.
    pub fn with_pattern_match(pattern_match: PatternMatch) -> Self {
        Self {
            pattern_match,
            regex_cache: HashMap::new(),
        }
    }

    /// Returns the pattern anchoring in use.
    pub fn pattern_match(&self) -> PatternMatch {
        self.pattern_match
    }

    /// Changes the pattern anchoring for subsequent evaluations.
    pub fn set_pattern_match(&mut self, pattern_match: PatternMatch) {
        self.pattern_match = pattern_match;
    }

    /// Evaluates every rule of `field`.
    ///
    /// `record` is the record the field belongs to; it is consulted by the
    /// conditional requirements.
    ///
    /// # Errors
    ///
    /// Returns an error if the column definition is unusable: a pattern that
    /// does not compile, a date format with unknown specifiers, or a
    /// conditional requirement that refers past the end of `record`.
    pub fn evaluate(&mut self, field: &Field<'_>, record: &Record<'_>) -> Result<FieldOutcome> {
        let requirement = self.requirement(field, record)?;
        let required = requirement.is_some();

        let mut violations = Vec::new();
        violations.extend(self.validate_required(field, requirement));
        violations.extend(self.validate_max_length(field));
        violations.extend(self.validate_min_length(field, required));
        violations.extend(self.validate_values(field, required));
        violations.extend(self.validate_pattern(field, required)?);
        violations.extend(self.validate_integer(field));
        violations.extend(self.validate_date(field, required)?);

        Ok(FieldOutcome {
            index: field.index(),
            violations,
        })
    }

    /// Resolves whether the field is required in this record.
    ///
    /// References are checked even when `required` is already set, so a
    /// definition written for a wider row fails on every record.
    fn requirement(&self, field: &Field<'_>, record: &Record<'_>) -> Result<Option<Requirement>> {
        let meta = field.meta();
        let mut requirement = meta.required.then_some(Requirement::Always);

        if let Some(reference) = meta.required_if_empty {
            let other = referenced_field(field, record, reference)?;
            if requirement.is_none() && other.is_blank() {
                requirement = Some(Requirement::IfEmpty(other.name().into_owned()));
            }
        }

        if let Some(reference) = meta.required_if_filled {
            let other = referenced_field(field, record, reference)?;
            if requirement.is_none() && !other.is_blank() {
                requirement = Some(Requirement::IfFilled(other.name().into_owned()));
            }
        }

        Ok(requirement)
    }

    fn validate_required(
        &self,
        field: &Field<'_>,
        requirement: Option<Requirement>,
    ) -> Option<Violation> {
        let requirement = requirement?;
        if !field.is_blank() {
            return None;
        }

        let kind = match requirement {
            Requirement::Always => ViolationKind::Missing,
            Requirement::IfEmpty(other) => ViolationKind::MissingIfEmpty { other },
            Requirement::IfFilled(other) => ViolationKind::MissingIfFilled { other },
        };
        Some(violation(field, kind))
    }

    fn validate_max_length(&self, field: &Field<'_>) -> Option<Violation> {
        let max = field.meta().max_length.filter(|max| *max > 0)?;
        let length = field.value().chars().count();

        (length > max).then(|| violation(field, ViolationKind::TooLong { length, max }))
    }

    fn validate_min_length(&self, field: &Field<'_>, required: bool) -> Option<Violation> {
        let min = field.meta().min_length?;
        if !should_be_validated(required, !field.is_blank(), true) {
            return None;
        }

        let length = field.trimmed().chars().count();
        (length < min).then(|| violation(field, ViolationKind::TooShort { length, min }))
    }

    fn validate_values(&self, field: &Field<'_>, required: bool) -> Option<Violation> {
        let allowed = field.meta().values.as_ref()?;
        if !should_be_validated(required, !field.is_blank(), !allowed.is_empty()) {
            return None;
        }

        if allowed.iter().any(|a| a == field.value()) {
            return None;
        }

        Some(violation(
            field,
            ViolationKind::UnexpectedValue {
                allowed: allowed.clone(),
            },
        ))
    }

    fn validate_pattern(&mut self, field: &Field<'_>, required: bool) -> Result<Option<Violation>> {
        let Some(pattern) = field.meta().pattern.as_deref() else {
            return Ok(None);
        };
        if !should_be_validated(required, !field.is_blank(), !pattern.is_empty()) {
            return Ok(None);
        }

        let regex = self
            .get_or_compile_regex(pattern)
            .map_err(|e| ValidationError::invalid_regex(field.name(), pattern, e))?;

        if regex.is_match(field.value()) {
            return Ok(None);
        }

        Ok(Some(violation(
            field,
            ViolationKind::PatternMismatch {
                pattern: pattern.to_string(),
            },
        )))
    }

    fn validate_integer(&self, field: &Field<'_>) -> Option<Violation> {
        if !field.meta().integer {
            return None;
        }

        let value = field.value();
        let digits_only = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
        (!digits_only).then(|| violation(field, ViolationKind::NotInteger))
    }

    fn validate_date(&self, field: &Field<'_>, required: bool) -> Result<Option<Violation>> {
        let Some(format) = field.meta().date.as_deref() else {
            return Ok(None);
        };
        if !should_be_validated(required, !field.is_blank(), !format.is_empty()) {
            return Ok(None);
        }

        if !is_valid_date_format(format) {
            return Err(ValidationError::invalid_date_format(field.name(), format));
        }

        if round_trips(field.value(), format) {
            return Ok(None);
        }

        Ok(Some(violation(
            field,
            ViolationKind::InvalidDate {
                format: format.to_string(),
            },
        )))
    }

    /// Gets a compiled regex from cache or compiles and caches it.
    fn get_or_compile_regex(&mut self, pattern: &str) -> std::result::Result<&Regex, regex::Error> {
        let anchored = self.pattern_match.anchor(pattern);

        if !self.regex_cache.contains_key(&anchored) {
            let regex = Regex::new(&anchored)?;
            for warning in suspicious_delimiters(pattern, self.pattern_match) {
                warn!("{}: {}", warning, pattern);
            }
            self.regex_cache.insert(anchored.clone(), regex);
        }

        Ok(&self.regex_cache[&anchored])
    }
}

impl Default for FieldRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn violation(field: &Field<'_>, kind: ViolationKind) -> Violation {
    Violation::field(field.name(), field.index(), field.value(), kind)
}

fn referenced_field<'r, 'a>(
    field: &Field<'_>,
    record: &'r Record<'a>,
    reference: usize,
) -> Result<&'r Field<'a>> {
    record
        .field(reference)
        .ok_or_else(|| ValidationError::column_out_of_range(field.name(), reference, record.len()))
}

/// Lists the delimiter mistakes `pattern` seems to contain.
///
/// Missing `^`/`$` only matters under prefix anchoring; full anchoring adds
/// both.
fn suspicious_delimiters(pattern: &str, pattern_match: PatternMatch) -> Vec<&'static str> {
    let mut warnings = Vec::new();

    if pattern.len() > 1 && pattern.starts_with('/') && pattern.ends_with('/') {
        warnings.push("Unexpected regex delimiters");
    }
    if pattern_match == PatternMatch::Prefix && !(pattern.starts_with('^') && pattern.ends_with('$'))
    {
        warnings.push("Missing ^$ delimiters for regex");
    }

    warnings
}

/// Parses `value` with `format` and checks that rendering it back gives the
/// same text.
///
/// Components the format leaves out default to 1900-01-01 00:00:00, so
/// formats such as `%Y%m` or `%H:%M` work.
fn round_trips(value: &str, format: &str) -> bool {
    let mut parsed = Parsed::new();
    if parse(&mut parsed, value, StrftimeItems::new(format)).is_err() {
        return false;
    }

    let Some(datetime) = complete(&parsed) else {
        return false;
    };

    render(datetime.format(format)).as_deref() == Some(value)
}

/// Resolves parsed components into a date and time, filling in the ones the
/// format did not provide.
///
/// Setters keep a value that was already parsed, so only missing components
/// get the default.
fn complete(parsed: &Parsed) -> Option<NaiveDateTime> {
    let date = resolve_date(parsed)?;

    let mut parsed = parsed.clone();
    let _ = parsed.set_hour(0);
    let _ = parsed.set_minute(0);
    let _ = parsed.set_second(0);
    let time: NaiveTime = parsed.to_naive_time().ok()?;

    Some(NaiveDateTime::new(date, time))
}

fn resolve_date(parsed: &Parsed) -> Option<NaiveDate> {
    // (default year, default month and day); a two-digit year conflicts with
    // a default year, an ordinal day with a default month
    const FILLS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

    FILLS.iter().find_map(|&(year, month_day)| {
        let mut parsed = parsed.clone();
        if year {
            let _ = parsed.set_year(1900);
        }
        if month_day {
            let _ = parsed.set_month(1);
            let _ = parsed.set_day(1);
        }
        parsed.to_naive_date().ok()
    })
}

fn render(formatted: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatcheck_core::{ColumnBuilder, Configuration, ConfigurationBuilder};
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn single(column: flatcheck_core::ColumnDefinition) -> Configuration {
        ConfigurationBuilder::new().column(column).build()
    }

    fn rules_failed(configuration: &Configuration, row: &str) -> Vec<&'static str> {
        let record = Record::parse(row, configuration);
        let mut engine = FieldRuleEngine::with_pattern_match(configuration.pattern_match);
        record
            .fields()
            .iter()
            .flat_map(|field| engine.evaluate(field, &record).unwrap().violations)
            .map(|v| v.kind.rule())
            .collect()
    }

    #[test]
    fn test_should_be_validated() {
        assert!(should_be_validated(true, false, true));
        assert!(should_be_validated(false, true, true));
        assert!(!should_be_validated(false, false, true));
        assert!(!should_be_validated(true, true, false));
    }

    #[test]
    fn test_required() {
        let configuration = single(ColumnBuilder::new("code").required(true).build());

        assert!(rules_failed(&configuration, "x").is_empty());
        assert_eq!(rules_failed(&configuration, ""), vec!["required"]);
        assert_eq!(rules_failed(&configuration, " \t "), vec!["required"]);
    }

    #[test]
    fn test_max_length_counts_raw_value() {
        let configuration = single(ColumnBuilder::unnamed().max_length(4).build());

        assert!(rules_failed(&configuration, "test").is_empty());
        assert_eq!(rules_failed(&configuration, "test1"), vec!["maxLength"]);
        assert_eq!(rules_failed(&configuration, " te "), Vec::<&str>::new());
        assert_eq!(rules_failed(&configuration, "  te "), vec!["maxLength"]);
    }

    #[test]
    fn test_max_length_zero_disables_rule() {
        let configuration = single(ColumnBuilder::unnamed().max_length(0).build());
        assert!(rules_failed(&configuration, "anything at all").is_empty());
    }

    #[test]
    fn test_max_length_counts_characters() {
        let configuration = single(ColumnBuilder::unnamed().max_length(4).build());
        assert!(rules_failed(&configuration, "ÄÖÜß").is_empty());
    }

    #[test]
    fn test_min_length_gating() {
        let optional = single(ColumnBuilder::unnamed().min_length(6).build());
        assert!(rules_failed(&optional, "  ").is_empty());
        assert_eq!(rules_failed(&optional, "test"), vec!["minLength"]);
        assert!(rules_failed(&optional, "testtest").is_empty());

        let required = single(ColumnBuilder::unnamed().min_length(2).required(true).build());
        assert_eq!(rules_failed(&required, " "), vec!["required", "minLength"]);
        assert_eq!(rules_failed(&required, " t "), vec!["minLength"]);
    }

    #[test]
    fn test_values() {
        let required = single(
            ColumnBuilder::unnamed()
                .values(vec!["test", "test2"])
                .required(true)
                .build(),
        );
        assert!(rules_failed(&required, "test2").is_empty());
        assert_eq!(rules_failed(&required, "test3"), vec!["values"]);

        let optional = single(ColumnBuilder::unnamed().values(vec!["test", "test2"]).build());
        assert!(rules_failed(&optional, " ").is_empty());
        assert_eq!(rules_failed(&optional, "test3"), vec!["values"]);
    }

    #[test]
    fn test_empty_values_set_is_skipped_for_optional_fields() {
        let configuration = single(ColumnBuilder::unnamed().values(Vec::<String>::new()).build());
        assert!(rules_failed(&configuration, "anything").is_empty());
    }

    #[test]
    fn test_pattern() {
        let configuration = single(ColumnBuilder::unnamed().pattern("^[0-9]+$").build());

        assert!(rules_failed(&configuration, "1234").is_empty());
        assert_eq!(rules_failed(&configuration, "1234a"), vec!["pattern"]);
        assert!(rules_failed(&configuration, " ").is_empty());
    }

    #[test]
    fn test_unanchored_pattern_full_vs_prefix() {
        let full = single(ColumnBuilder::unnamed().pattern("[0-9]+").build());
        assert_eq!(rules_failed(&full, "12ab"), vec!["pattern"]);

        let prefix = ConfigurationBuilder::new()
            .column(ColumnBuilder::unnamed().pattern("[0-9]+").build())
            .pattern_match(PatternMatch::Prefix)
            .build();
        assert!(rules_failed(&prefix, "12ab").is_empty());
        assert_eq!(rules_failed(&prefix, "ab12"), vec!["pattern"]);
    }

    #[test]
    fn test_integer_is_unconditional() {
        let configuration = single(ColumnBuilder::unnamed().integer(true).build());

        assert!(rules_failed(&configuration, "1234").is_empty());
        assert_eq!(rules_failed(&configuration, "123H"), vec!["integer"]);
        assert_eq!(rules_failed(&configuration, ""), vec!["integer"]);
        assert_eq!(rules_failed(&configuration, " "), vec!["integer"]);
        assert_eq!(rules_failed(&configuration, "-12"), vec!["integer"]);
    }

    #[test]
    fn test_date_round_trip() {
        let configuration = single(ColumnBuilder::unnamed().date("%Y%m%d").build());

        assert!(rules_failed(&configuration, "20131012").is_empty());
        assert_eq!(rules_failed(&configuration, "20131312"), vec!["date"]);
        assert_eq!(rules_failed(&configuration, "20131032"), vec!["date"]);
        assert_eq!(rules_failed(&configuration, "2013101"), vec!["date"]);
        assert_eq!(rules_failed(&configuration, "ABC"), vec!["date"]);
        assert!(rules_failed(&configuration, "  ").is_empty());
    }

    #[test]
    fn test_date_rejects_non_canonical_values() {
        let configuration = single(ColumnBuilder::unnamed().date("%Y-%m-%d").build());

        assert!(rules_failed(&configuration, "2013-01-01").is_empty());
        assert_eq!(rules_failed(&configuration, "2013-1-1"), vec!["date"]);
    }

    #[test]
    fn test_datetime_and_time_formats() {
        let datetime = single(ColumnBuilder::unnamed().date("%Y-%m-%d %H:%M").build());
        assert!(rules_failed(&datetime, "2013-10-12 08:30").is_empty());
        assert_eq!(rules_failed(&datetime, "2013-10-12 25:30"), vec!["date"]);

        let time = single(ColumnBuilder::unnamed().date("%H:%M:%S").build());
        assert!(rules_failed(&time, "23:59:01").is_empty());
    }

    #[test]
    fn test_partial_date_formats_default_missing_components() {
        let cases = [
            ("%Y%m", "201310", "201313"),
            ("%Y-%m", "2013-10", "2013-1"),
            ("%Y", "2013", "13"),
            ("%m/%Y", "10/2013", "13/2013"),
            ("%Y%m%d%H", "2013101208", "2013101225"),
            ("%H:%M", "08:30", "8:30"),
            ("%d", "31", "32"),
        ];

        for (format, valid, invalid) in cases {
            let configuration = single(ColumnBuilder::unnamed().date(format).build());
            assert!(
                rules_failed(&configuration, valid).is_empty(),
                "{:?} should accept {:?}",
                format,
                valid
            );
            assert_eq!(
                rules_failed(&configuration, invalid),
                vec!["date"],
                "{:?} should reject {:?}",
                format,
                invalid
            );
        }
    }

    #[test]
    fn test_empty_date_format_never_constrains() {
        let optional = single(ColumnBuilder::unnamed().date("").build());
        assert!(rules_failed(&optional, "ABC").is_empty());

        let required = single(ColumnBuilder::unnamed().date("").required(true).build());
        assert!(rules_failed(&required, "ABC").is_empty());
    }

    #[test]
    fn test_all_rules_evaluated_without_short_circuit() {
        let configuration = single(
            ColumnBuilder::new("code")
                .max_length(3)
                .min_length(2)
                .values(vec!["AB"])
                .pattern("^[A-Z]+$")
                .integer(true)
                .build(),
        );

        assert_eq!(
            rules_failed(&configuration, "abcd"),
            vec!["maxLength", "values", "pattern", "integer"]
        );
    }

    #[test]
    fn test_required_if_empty() {
        let configuration = ConfigurationBuilder::new()
            .column(ColumnBuilder::unnamed().build())
            .column(ColumnBuilder::unnamed().required_if_empty(0).build())
            .build();

        assert!(rules_failed(&configuration, "1|2").is_empty());
        assert!(rules_failed(&configuration, "1|  ").is_empty());
        assert!(rules_failed(&configuration, " |2").is_empty());
        assert_eq!(rules_failed(&configuration, "|  "), vec!["requiredIfEmpty"]);
    }

    #[test]
    fn test_required_if_filled() {
        let configuration = ConfigurationBuilder::new()
            .column(ColumnBuilder::unnamed().build())
            .column(ColumnBuilder::unnamed().required_if_filled(0).build())
            .build();

        assert!(rules_failed(&configuration, "1|2").is_empty());
        assert_eq!(rules_failed(&configuration, "1|  "), vec!["requiredIfFilled"]);
        assert!(rules_failed(&configuration, " |2").is_empty());
        assert!(rules_failed(&configuration, "|  ").is_empty());
    }

    #[test]
    fn test_conditional_requirement_enables_gated_rules() {
        let configuration = ConfigurationBuilder::new()
            .column(ColumnBuilder::new("kind").build())
            .column(
                ColumnBuilder::new("detail")
                    .required_if_filled(0)
                    .min_length(3)
                    .build(),
            )
            .build();

        assert_eq!(
            rules_failed(&configuration, "A| "),
            vec!["requiredIfFilled", "minLength"]
        );
        assert!(rules_failed(&configuration, " | ").is_empty());
    }

    #[test]
    fn test_reference_out_of_range() {
        let configuration = ConfigurationBuilder::new()
            .column(ColumnBuilder::new("first").required_if_empty(2).build())
            .column(ColumnBuilder::unnamed().build())
            .build();
        let record = Record::parse("1|2", &configuration);
        let mut engine = FieldRuleEngine::new();

        let result = engine.evaluate(&record.fields()[0], &record);
        assert!(matches!(
            result,
            Err(ValidationError::ColumnOutOfRange {
                reference: 2,
                size: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_regex() {
        let configuration = single(ColumnBuilder::new("code").pattern("[invalid(regex").build());
        let record = Record::parse("value", &configuration);
        let mut engine = FieldRuleEngine::new();

        let result = engine.evaluate(&record.fields()[0], &record);
        assert!(matches!(result, Err(ValidationError::InvalidRegex { .. })));
    }

    #[test]
    fn test_invalid_date_format() {
        let configuration = single(ColumnBuilder::new("when").date("%Y-%Q").build());
        let record = Record::parse("2013", &configuration);
        let mut engine = FieldRuleEngine::new();

        let result = engine.evaluate(&record.fields()[0], &record);
        assert!(matches!(result, Err(ValidationError::InvalidDateFormat { .. })));
    }

    #[test]
    fn test_malformed_rules_skipped_for_blank_optional_fields() {
        let configuration = single(ColumnBuilder::unnamed().pattern("[invalid").build());
        assert!(rules_failed(&configuration, " ").is_empty());
    }

    #[test]
    fn test_violation_details() {
        let configuration = single(ColumnBuilder::new("amount").max_length(2).build());
        let record = Record::parse("12345", &configuration);
        let mut engine = FieldRuleEngine::new();

        let outcome = engine.evaluate(&record.fields()[0], &record).unwrap();
        assert!(!outcome.passed());
        assert_eq!(
            outcome.violations,
            vec![Violation::field(
                "amount",
                0,
                "12345",
                ViolationKind::TooLong { length: 5, max: 2 }
            )]
        );
    }

    #[test]
    fn test_suspicious_delimiters() {
        assert!(suspicious_delimiters("[0-9]+", PatternMatch::Full).is_empty());
        assert!(suspicious_delimiters("^[0-9]+$", PatternMatch::Prefix).is_empty());
        assert_eq!(
            suspicious_delimiters("[0-9]+", PatternMatch::Prefix),
            vec!["Missing ^$ delimiters for regex"]
        );
        assert_eq!(
            suspicious_delimiters("/[0-9]+/", PatternMatch::Full),
            vec!["Unexpected regex delimiters"]
        );
        assert_eq!(
            suspicious_delimiters("/[0-9]+/", PatternMatch::Prefix).len(),
            2
        );
    }

    /// Collects formatted log output.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_logs(run: impl FnOnce()) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, run);
        capture.contents()
    }

    #[test]
    fn test_delimiter_warning_logged_once_per_pattern() {
        let configuration = single(ColumnBuilder::unnamed().pattern("/[a-z]+/").build());

        let logs = capture_logs(|| {
            let mut engine = FieldRuleEngine::new();
            for row in ["/abc/", "/def/", "ghi"] {
                let record = Record::parse(row, &configuration);
                engine.evaluate(&record.fields()[0], &record).unwrap();
            }
        });

        assert_eq!(logs.matches("Unexpected regex delimiters").count(), 1, "{}", logs);
    }

    #[test]
    fn test_no_delimiter_warning_for_pattern_that_fails_to_compile() {
        let configuration = single(ColumnBuilder::unnamed().pattern("/[a-z/").build());

        let logs = capture_logs(|| {
            let mut engine = FieldRuleEngine::new();
            for _ in 0..2 {
                let record = Record::parse("abc", &configuration);
                let result = engine.evaluate(&record.fields()[0], &record);
                assert!(matches!(result, Err(ValidationError::InvalidRegex { .. })));
            }
        });

        assert!(!logs.contains("Unexpected regex delimiters"), "{}", logs);
    }

    #[test]
    fn test_regex_cache_reused() {
        let configuration = single(ColumnBuilder::unnamed().pattern("^[a-z]+$").build());
        let mut engine = FieldRuleEngine::new();

        for row in ["abc", "def", "GHI"] {
            let record = Record::parse(row, &configuration);
            engine.evaluate(&record.fields()[0], &record).unwrap();
        }
        assert_eq!(engine.regex_cache.len(), 1);

        engine.set_pattern_match(PatternMatch::Prefix);
        let record = Record::parse("abc", &configuration);
        engine.evaluate(&record.fields()[0], &record).unwrap();
        assert_eq!(engine.regex_cache.len(), 2);
    }
}
