//! Form controller for the client onboarding intake form.
//!
//! Holds the raw field values and the submit/reset state machine the
//! presentation layer renders from, orchestrating the validator
//! (`intake-core`) and the submission client (`intake-client`).

pub mod controller;
pub mod fields;

pub use controller::{FormController, SubmitOutcome, SubmitState};
pub use fields::FormFields;
