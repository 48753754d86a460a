//! Core domain types and validation for the client onboarding intake form.
//!
//! Pure logic only: the data model ([`submission`]) and the declarative
//! validation schema ([`validation`]). No I/O, no network, no clock access
//! beyond the "today" value callers inject.

pub mod submission;
pub mod validation;

pub use submission::{OnboardingSubmission, Service};
pub use validation::{parse_submission, validate_submission, FieldViolation, ValidationFailure};
