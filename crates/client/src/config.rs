//! Endpoint configuration loaded from environment variables.

/// Environment variable naming the submission endpoint URL.
pub const ENDPOINT_ENV: &str = "ONBOARD_URL";

/// Client configuration loaded from the environment.
///
/// A missing endpoint is not an error at load time; it becomes
/// [`SubmitError::NotConfigured`](crate::api::SubmitError::NotConfigured)
/// on the first submit attempt.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Submission endpoint URL, if configured.
    pub endpoint: Option<String>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var       | Default |
    /// |---------------|---------|
    /// | `ONBOARD_URL` | unset   |
    ///
    /// A blank value counts as unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self { endpoint }
    }
}
