//! Submission client for the onboarding intake form.
//!
//! Wraps the configured remote endpoint behind [`api::OnboardingApi`]: one
//! JSON POST per submission, with missing configuration, transport
//! failures, and non-2xx responses translated into a typed error.

pub mod api;
pub mod config;

pub use api::{OnboardingApi, SubmitError, SubmitReceipt};
pub use config::ClientConfig;
