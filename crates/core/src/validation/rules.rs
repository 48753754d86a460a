//! Rule, violation, and failure types for the validation schema.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single predicate applied to one field of a raw input record.
///
/// String checks (`MinLength`, `MaxLength`, `Pattern`, `Email`,
/// `DateNotPast`) treat a present non-string value as a violation; absent
/// values are the `Required` rule's concern. Numeric checks skip absent
/// values entirely, which is what makes a field optional.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Present, non-null, and (for strings) non-empty.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// The entire value matches the pattern.
    Pattern(&'static str),
    /// Syntactically valid email address.
    Email,
    /// An array with at least one element.
    AtLeastOne,
    /// Every array element is a known service label.
    KnownService,
    /// A JSON integer.
    Integer,
    MinValue(i64),
    MaxValue(i64),
    /// Parses as a calendar date (`YYYY-MM-DD`) that is today or later.
    DateNotPast,
    /// Boolean `true`.
    MustBeTrue,
}

impl Check {
    /// Short machine-readable kind label carried on violations.
    pub fn kind(&self) -> &'static str {
        match self {
            Check::Required => "required",
            Check::MinLength(_) => "min_length",
            Check::MaxLength(_) => "max_length",
            Check::Pattern(_) => "pattern",
            Check::Email => "email",
            Check::AtLeastOne => "at_least_one",
            Check::KnownService => "known_service",
            Check::Integer => "integer",
            Check::MinValue(_) => "min_value",
            Check::MaxValue(_) => "max_value",
            Check::DateNotPast => "date_not_past",
            Check::MustBeTrue => "must_be_true",
        }
    }
}

/// One check paired with the message surfaced when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

/// The ordered rule chain for a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// JSON field name the violated rule belongs to.
    pub field: String,
    /// Kind label of the violated rule (see [`Check::kind`]).
    pub rule: String,
    /// Human-readable message for inline display.
    pub message: String,
}

/// Returned when a raw record fails validation.
#[derive(Debug, Clone, thiserror::Error)]
#[error("validation failed for {} field(s)", violations.len())]
pub struct ValidationFailure {
    /// At most one violation per field, in schema field order.
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// Field → message map for the presentation layer.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        self.violations
            .iter()
            .map(|v| (v.field.clone(), v.message.clone()))
            .collect()
    }
}
