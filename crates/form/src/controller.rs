//! The form controller: transient submission state and orchestration of
//! the validator and submission client.

use std::collections::BTreeMap;

use chrono::Local;

use intake_client::OnboardingApi;
use intake_core::{parse_submission, OnboardingSubmission, Service};

use crate::fields::FormFields;

/// Submission state. Exactly one variant at a time, so illegal
/// combinations (submitting and failed simultaneously) are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    /// No submission in progress; also the state after a validation
    /// rejection or a reset.
    Idle,
    /// A network call is in flight.
    Submitting,
    /// The last submission was accepted; holds the submitted snapshot.
    Succeeded(OnboardingSubmission),
    /// The last submission failed; holds the user-safe message.
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// The snapshot captured at the moment of successful submission.
    pub fn snapshot(&self) -> Option<&OnboardingSubmission> {
        match self {
            SubmitState::Succeeded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// The user-safe message of the last failure.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Outcome of a [`FormController::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; this call did nothing.
    AlreadyInFlight,
    /// Validation rejected the input; no network call was made.
    Invalid,
    /// The submission ran to completion (the state holds the result).
    Completed,
}

/// Orchestrates the validator and submission client for one onboarding
/// form, holding the transient state the presentation layer renders from.
///
/// Session-local and single-threaded: state changes only inside [`submit`]
/// and [`reset`], and at most one network call is in flight at a time --
/// a submit arriving while one is running is ignored, independent of any
/// presentation-layer disabling.
///
/// [`submit`]: FormController::submit
/// [`reset`]: FormController::reset
pub struct FormController {
    api: OnboardingApi,
    fields: FormFields,
    field_errors: BTreeMap<String, String>,
    state: SubmitState,
}

impl FormController {
    /// Create an idle controller with an empty form.
    pub fn new(api: OnboardingApi) -> Self {
        Self {
            api,
            fields: FormFields::default(),
            field_errors: BTreeMap::new(),
            state: SubmitState::Idle,
        }
    }

    /// Preselect a service from an external query parameter.
    ///
    /// Only an exact label match seeds the selection; anything else is
    /// ignored without error.
    pub fn seed_service(&mut self, raw: &str) {
        match Service::from_label(raw) {
            Some(service) => {
                self.fields.services = vec![service.label().to_string()];
                tracing::debug!(service = service.label(), "Seeded preselected service");
            }
            None => {
                tracing::debug!(value = raw, "Ignoring unknown service seed");
            }
        }
    }

    // ---- presentation boundary ----

    /// Current raw field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutable access for raw field edits.
    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Field → message map from the last validation rejection.
    pub fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.field_errors
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// The last successful submission, until reset.
    pub fn snapshot(&self) -> Option<&OnboardingSubmission> {
        self.state.snapshot()
    }

    /// The last submission error message, if the last attempt failed.
    pub fn last_error(&self) -> Option<&str> {
        self.state.error_message()
    }

    // ---- actions ----

    /// Run the submit action: validate the current fields and, when valid,
    /// perform exactly one submission call.
    ///
    /// On success the editable fields are cleared and the snapshot is
    /// retained; on failure the fields are preserved so the user can retry
    /// without re-entering data.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_submitting() {
            tracing::debug!("Submit ignored: a submission is already in flight");
            return SubmitOutcome::AlreadyInFlight;
        }

        let record = self.fields.to_record();
        let submission = match parse_submission(&record, Local::now().date_naive()) {
            Ok(submission) => submission,
            Err(failure) => {
                tracing::debug!(
                    violations = failure.violations.len(),
                    "Validation rejected submission"
                );
                self.field_errors = failure.field_errors();
                self.state = SubmitState::Idle;
                return SubmitOutcome::Invalid;
            }
        };

        self.field_errors.clear();
        self.state = SubmitState::Submitting;

        match self.api.submit(&submission).await {
            Ok(_) => {
                tracing::info!("Onboarding submission succeeded");
                self.fields = FormFields::default();
                self.state = SubmitState::Succeeded(submission);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Onboarding submission failed");
                self.state = SubmitState::Failed(err.to_string());
            }
        }

        SubmitOutcome::Completed
    }

    /// Return to Idle: empty fields, no errors, no snapshot. Idempotent
    /// from any state.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.field_errors.clear();
        self.state = SubmitState::Idle;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
