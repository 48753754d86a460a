//! End-to-end controller tests: validator, submission client, and state
//! machine together, with an in-process HTTP server standing in for the
//! remote endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Local;
use serde_json::{json, Value};

use intake_client::OnboardingApi;
use intake_core::{OnboardingSubmission, Service};
use intake_form::{FormController, FormFields, SubmitOutcome, SubmitState};

/// Mock endpoint whose response status can be changed between submits.
#[derive(Clone)]
struct Endpoint {
    status: Arc<Mutex<StatusCode>>,
    hits: Arc<AtomicUsize>,
}

impl Endpoint {
    fn new(status: StatusCode) -> Self {
        Self {
            status: Arc::new(Mutex::new(status)),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn set_status(&self, status: StatusCode) {
        *self.status.lock().unwrap() = status;
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn respond(State(endpoint): State<Endpoint>) -> (StatusCode, Json<Value>) {
    endpoint.hits.fetch_add(1, Ordering::SeqCst);
    let status = *endpoint.status.lock().unwrap();
    (status, Json(json!({})))
}

async fn spawn_endpoint(endpoint: Endpoint) -> String {
    let app = Router::new()
        .route("/onboard", post(respond))
        .with_state(endpoint);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/onboard")
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

/// Fill the form with the reference valid input, dated today.
fn fill_valid(fields: &mut FormFields) {
    fields.full_name = "Ada Lovelace".to_string();
    fields.email = "ada@example.com".to_string();
    fields.company_name = "Analytical Engines Ltd".to_string();
    fields.services = vec!["UI/UX".to_string(), "Web Dev".to_string()];
    fields.budget_usd = "50000".to_string();
    fields.project_start_date = today_string();
    fields.accept_terms = true;
}

fn expected_snapshot() -> OnboardingSubmission {
    OnboardingSubmission {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        company_name: "Analytical Engines Ltd".to_string(),
        services: vec![Service::UiUx, Service::WebDev],
        budget_usd: Some(50_000),
        project_start_date: Local::now().date_naive(),
        accept_terms: true,
    }
}

// ---------------------------------------------------------------------------
// Scenario A: valid input against a 200 endpoint ends in Succeeded
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_submission_succeeds_and_clears_fields() {
    let endpoint = Endpoint::new(StatusCode::OK);
    let url = spawn_endpoint(endpoint.clone()).await;
    let mut controller = FormController::new(OnboardingApi::new(Some(url)));
    fill_valid(controller.fields_mut());

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(controller.snapshot(), Some(&expected_snapshot()));
    assert_eq!(controller.fields(), &FormFields::default());
    assert!(controller.field_errors().is_empty());
    assert_eq!(controller.last_error(), None);
    assert_eq!(endpoint.hits(), 1);
}

// ---------------------------------------------------------------------------
// Scenario B: a 500 response ends in Failed with fields preserved
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_fails_and_preserves_fields() {
    let endpoint = Endpoint::new(StatusCode::INTERNAL_SERVER_ERROR);
    let url = spawn_endpoint(endpoint.clone()).await;
    let mut controller = FormController::new(OnboardingApi::new(Some(url)));
    fill_valid(controller.fields_mut());
    let filled = controller.fields().clone();

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_matches!(controller.state(), SubmitState::Failed(_));
    let message = controller.last_error().expect("controller must be Failed");
    assert!(message.contains("500"), "message was: {message}");
    assert_eq!(controller.fields(), &filled);
    assert_eq!(controller.snapshot(), None);
    assert_eq!(endpoint.hits(), 1);
}

// ---------------------------------------------------------------------------
// Scenario C: missing endpoint fails without any network call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_endpoint_fails_without_network_call() {
    let mut controller = FormController::new(OnboardingApi::new(None));
    fill_valid(controller.fields_mut());

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(
        controller.last_error(),
        Some("Submission endpoint is not configured")
    );
    assert_eq!(controller.fields().full_name, "Ada Lovelace");
}

// ---------------------------------------------------------------------------
// Failed --submit--> Submitting is re-entrant
// ---------------------------------------------------------------------------

#[tokio::test]
async fn manual_retry_after_failure_can_succeed() {
    let endpoint = Endpoint::new(StatusCode::INTERNAL_SERVER_ERROR);
    let url = spawn_endpoint(endpoint.clone()).await;
    let mut controller = FormController::new(OnboardingApi::new(Some(url)));
    fill_valid(controller.fields_mut());

    controller.submit().await;
    assert!(controller.last_error().is_some());

    endpoint.set_status(StatusCode::OK);
    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(controller.snapshot(), Some(&expected_snapshot()));
    assert_eq!(controller.last_error(), None);
    assert_eq!(endpoint.hits(), 2);
}

// ---------------------------------------------------------------------------
// Invalid input never reaches the network
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_makes_no_network_call() {
    let endpoint = Endpoint::new(StatusCode::OK);
    let url = spawn_endpoint(endpoint.clone()).await;
    let mut controller = FormController::new(OnboardingApi::new(Some(url)));
    // Leave the form empty.

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(controller.state(), &SubmitState::Idle);
    assert!(!controller.field_errors().is_empty());
    assert_eq!(endpoint.hits(), 0);
}

// ---------------------------------------------------------------------------
// Reset returns to Idle from any state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_after_success_returns_to_an_empty_idle_form() {
    let endpoint = Endpoint::new(StatusCode::OK);
    let url = spawn_endpoint(endpoint.clone()).await;
    let mut controller = FormController::new(OnboardingApi::new(Some(url)));
    fill_valid(controller.fields_mut());
    controller.submit().await;
    assert!(controller.snapshot().is_some());

    controller.reset();

    assert_eq!(controller.state(), &SubmitState::Idle);
    assert_eq!(controller.fields(), &FormFields::default());
    assert!(controller.field_errors().is_empty());
    assert_eq!(controller.snapshot(), None);
    assert_eq!(controller.last_error(), None);

    // Reset is idempotent.
    controller.reset();
    assert_eq!(controller.state(), &SubmitState::Idle);
}
