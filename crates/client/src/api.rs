//! HTTP client for the onboarding submission endpoint.
//!
//! Wraps the single outbound call this system makes using [`reqwest`]: the
//! validated submission is serialized as the JSON body of one POST, and
//! every failure mode maps onto a [`SubmitError`] variant with a user-safe
//! message.

use intake_core::OnboardingSubmission;
use serde_json::Value;

use crate::config::ClientConfig;

/// HTTP client for the configured onboarding endpoint.
pub struct OnboardingApi {
    client: reqwest::Client,
    endpoint: Option<String>,
}

/// Successful submission result wrapping the endpoint's response payload.
///
/// The payload shape is opaque to this system: it is parsed best-effort
/// and never validated. An empty or non-JSON body yields `Value::Null`.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub payload: Value,
}

/// Errors from the submission client.
///
/// Every variant's display text is safe to show to the user; retry is
/// manual (the user re-submits).
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// No endpoint URL is configured. No network attempt was made.
    #[error("Submission endpoint is not configured")]
    NotConfigured,

    /// The request itself failed (DNS, connection refused, timeout). The
    /// source error is kept for diagnostics; the display text stays
    /// generic.
    #[error("Network error: unable to submit the form. Please check your connection.")]
    Transport(#[source] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Server error: {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },
}

impl OnboardingApi {
    /// Create a client for the given endpoint.
    ///
    /// `None` is accepted so the configuration error can surface at submit
    /// time rather than at startup.
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Create a client configured from the `ONBOARD_URL` environment
    /// variable.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env().endpoint)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling).
    pub fn with_client(client: reqwest::Client, endpoint: Option<String>) -> Self {
        Self { client, endpoint }
    }

    /// The configured endpoint URL, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Submit a validated onboarding record.
    ///
    /// Exactly one network call per invocation: a `POST` to the configured
    /// endpoint with `Content-Type: application/json` and the serialized
    /// record as the body. No retries, no idempotency key, no timeout
    /// beyond the transport default.
    pub async fn submit(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<SubmitReceipt, SubmitError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            tracing::warn!("Submission endpoint is not configured");
            return Err(SubmitError::NotConfigured);
        };

        let response = self
            .client
            .post(endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Submission request failed");
                SubmitError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Submission rejected by server");
            return Err(SubmitError::Server {
                status: status.as_u16(),
            });
        }

        // Best-effort parse; the payload is opaque and an empty body is fine.
        let payload = response.json::<Value>().await.unwrap_or(Value::Null);

        tracing::info!(endpoint, "Onboarding submission accepted");

        Ok(SubmitReceipt { payload })
    }
}
