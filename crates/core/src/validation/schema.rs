//! The onboarding form's rule chains and typed-record construction.

use chrono::{Local, NaiveDate};
use serde_json::Value;

use super::evaluator::evaluate;
use super::rules::{Check, FieldRules, FieldViolation, Rule, ValidationFailure};
use crate::submission::{OnboardingSubmission, Service};

/// Letters, spaces, apostrophes, and hyphens.
const FULL_NAME_PATTERN: &str = "^[A-Za-z '\\-]+$";

const FULL_NAME_RULES: &[Rule] = &[
    Rule {
        check: Check::Required,
        message: "Full name is required",
    },
    Rule {
        check: Check::MinLength(2),
        message: "Full name must be at least 2 characters",
    },
    Rule {
        check: Check::MaxLength(80),
        message: "Full name must be no more than 80 characters",
    },
    Rule {
        check: Check::Pattern(FULL_NAME_PATTERN),
        message: "Full name can only contain letters, spaces, apostrophes, and hyphens",
    },
];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: Check::Required,
        message: "Email is required",
    },
    Rule {
        check: Check::Email,
        message: "Please enter a valid email address",
    },
];

const COMPANY_NAME_RULES: &[Rule] = &[
    Rule {
        check: Check::Required,
        message: "Company name is required",
    },
    Rule {
        check: Check::MinLength(2),
        message: "Company name must be at least 2 characters",
    },
    Rule {
        check: Check::MaxLength(100),
        message: "Company name must be no more than 100 characters",
    },
];

const SERVICES_RULES: &[Rule] = &[
    Rule {
        check: Check::AtLeastOne,
        message: "Please select at least one service",
    },
    Rule {
        check: Check::KnownService,
        message: "Please select a valid service",
    },
];

const BUDGET_RULES: &[Rule] = &[
    Rule {
        check: Check::Integer,
        message: "Budget must be a whole number",
    },
    Rule {
        check: Check::MinValue(100),
        message: "Budget must be at least $100",
    },
    Rule {
        check: Check::MaxValue(1_000_000),
        message: "Budget must be no more than $1,000,000",
    },
];

const START_DATE_RULES: &[Rule] = &[
    Rule {
        check: Check::Required,
        message: "Project start date is required",
    },
    Rule {
        check: Check::DateNotPast,
        message: "Project start date must be today or later",
    },
];

const ACCEPT_TERMS_RULES: &[Rule] = &[Rule {
    check: Check::MustBeTrue,
    message: "You must accept the terms and conditions",
}];

/// The full onboarding schema, in the order violations surface.
pub const ONBOARDING_RULES: &[FieldRules] = &[
    FieldRules {
        field: "fullName",
        rules: FULL_NAME_RULES,
    },
    FieldRules {
        field: "email",
        rules: EMAIL_RULES,
    },
    FieldRules {
        field: "companyName",
        rules: COMPANY_NAME_RULES,
    },
    FieldRules {
        field: "services",
        rules: SERVICES_RULES,
    },
    FieldRules {
        field: "budgetUsd",
        rules: BUDGET_RULES,
    },
    FieldRules {
        field: "projectStartDate",
        rules: START_DATE_RULES,
    },
    FieldRules {
        field: "acceptTerms",
        rules: ACCEPT_TERMS_RULES,
    },
];

/// Validate a raw input record against the onboarding schema, producing the
/// typed record on success.
///
/// `today` is the caller's local calendar date; time-of-day is ignored on
/// both sides of the start-date comparison, so same-day submissions are
/// always valid. The record is never mutated.
pub fn parse_submission(
    record: &serde_json::Map<String, Value>,
    today: NaiveDate,
) -> Result<OnboardingSubmission, ValidationFailure> {
    let violations = evaluate(ONBOARDING_RULES, record, today);
    if !violations.is_empty() {
        return Err(ValidationFailure { violations });
    }

    coerce(record).map_err(|violation| ValidationFailure {
        violations: vec![violation],
    })
}

/// Validate using the caller's current local date.
pub fn validate_submission(
    record: &serde_json::Map<String, Value>,
) -> Result<OnboardingSubmission, ValidationFailure> {
    parse_submission(record, Local::now().date_naive())
}

/// Build the typed record from a rule-clean input.
///
/// A failure here means a value slipped past its rule chain, so it surfaces
/// as a violation on the offending field rather than a panic.
fn coerce(record: &serde_json::Map<String, Value>) -> Result<OnboardingSubmission, FieldViolation> {
    let full_name = required_str(record, "fullName")?;
    let email = required_str(record, "email")?;
    let company_name = required_str(record, "companyName")?;

    let raw_services = record
        .get("services")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("services"))?;
    // Duplicates collapse, preserving first occurrence: the record models
    // a set of selected services.
    let mut services = Vec::new();
    for raw in raw_services {
        let service = raw
            .as_str()
            .and_then(Service::from_label)
            .ok_or_else(|| invalid("services"))?;
        if !services.contains(&service) {
            services.push(service);
        }
    }

    let budget_usd = match record.get("budgetUsd") {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.as_i64().ok_or_else(|| invalid("budgetUsd"))?),
    };

    let raw_date = required_str(record, "projectStartDate")?;
    let project_start_date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| invalid("projectStartDate"))?;

    let accept_terms = record
        .get("acceptTerms")
        .and_then(Value::as_bool)
        .ok_or_else(|| invalid("acceptTerms"))?;

    Ok(OnboardingSubmission {
        full_name,
        email,
        company_name,
        services,
        budget_usd,
        project_start_date,
        accept_terms,
    })
}

fn required_str(
    record: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, FieldViolation> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| invalid(field))
}

fn invalid(field: &'static str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        rule: "invalid".to_string(),
        message: format!("{field} has an invalid value"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
