//! Rule-chain evaluator -- pure logic, no I/O.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use validator::ValidateEmail;

use super::rules::{Check, FieldRules, FieldViolation};
use crate::submission::Service;

/// Evaluate every field's rule chain against a raw input record.
///
/// Rules within a chain short-circuit: the first violated rule wins and the
/// rest of that field's chain is skipped, so at most one violation is
/// reported per field. The record is never mutated, and `today` is injected
/// so evaluation stays deterministic.
pub fn evaluate(
    rule_set: &[FieldRules],
    record: &serde_json::Map<String, Value>,
    today: NaiveDate,
) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    for field_rules in rule_set {
        let value = record.get(field_rules.field);
        for rule in field_rules.rules {
            if violated(&rule.check, value, today) {
                violations.push(FieldViolation {
                    field: field_rules.field.to_string(),
                    rule: rule.check.kind().to_string(),
                    message: rule.message.to_string(),
                });
                break;
            }
        }
    }

    violations
}

fn violated(check: &Check, value: Option<&Value>, today: NaiveDate) -> bool {
    match check {
        Check::Required => is_missing(value),
        Check::MinLength(min) => str_check(value, |s| s.chars().count() < *min),
        Check::MaxLength(max) => str_check(value, |s| s.chars().count() > *max),
        Check::Pattern(pattern) => str_check(value, |s| !matches_pattern(pattern, s)),
        Check::Email => str_check(value, |s| !s.validate_email()),
        Check::AtLeastOne => value
            .and_then(Value::as_array)
            .is_none_or(|a| a.is_empty()),
        Check::KnownService => value.and_then(Value::as_array).is_some_and(|a| {
            a.iter()
                .any(|v| v.as_str().and_then(Service::from_label).is_none())
        }),
        Check::Integer => present(value).is_some_and(|v| v.as_i64().is_none()),
        Check::MinValue(min) => int_value(value).is_some_and(|n| n < *min),
        Check::MaxValue(max) => int_value(value).is_some_and(|n| n > *max),
        Check::DateNotPast => str_check(value, |s| !is_today_or_later(s, today)),
        Check::MustBeTrue => value.and_then(Value::as_bool) != Some(true),
    }
}

// ---- value helpers ----

/// The value, unless it is absent or JSON null.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn int_value(value: Option<&Value>) -> Option<i64> {
    present(value).and_then(Value::as_i64)
}

/// Absent, null, or the empty string.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Apply a string predicate (`true` = violated). A present non-string value
/// is always a violation; an absent value never is.
fn str_check(value: Option<&Value>, is_violated: impl Fn(&str) -> bool) -> bool {
    match present(value) {
        None => false,
        Some(v) => v.as_str().is_none_or(is_violated),
    }
}

fn matches_pattern(pattern: &str, s: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(s),
        // An unparseable pattern passes rather than blocking the field.
        Err(_) => true,
    }
}

fn is_today_or_later(raw: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok_and(|d| d >= today)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
