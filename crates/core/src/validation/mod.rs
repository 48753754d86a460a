//! Declarative validation schema for onboarding submissions.
//!
//! The schema is data: each field carries an ordered rule chain
//! ([`schema::ONBOARDING_RULES`]), evaluated short-circuit per field by the
//! [`evaluator`], so at most one [`FieldViolation`] is reported per field
//! and the first violated rule wins.

mod evaluator;
mod rules;
mod schema;

pub use evaluator::evaluate;
pub use rules::{Check, FieldRules, FieldViolation, Rule, ValidationFailure};
pub use schema::{parse_submission, validate_submission, ONBOARDING_RULES};
