//! The validated onboarding record and the fixed service option set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the four services a client can request.
///
/// Serialized with the exact labels the submission endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// All offered services, in display order.
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    /// The wire/display label for this service.
    pub fn label(&self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }

    /// Look up a service by its exact label.
    ///
    /// Returns `None` for anything that is not one of the four known
    /// labels; there is no trimming or case folding.
    pub fn from_label(label: &str) -> Option<Service> {
        Service::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// A fully validated onboarding submission.
///
/// Instances exist only in fully-valid form: they are produced exclusively
/// by [`crate::validation::parse_submission`], so a partially valid record
/// is never observable downstream. Serializes to the exact JSON body the
/// submission endpoint expects: camelCase field names, literal service
/// labels, `budgetUsd` omitted when absent, and the start date as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSubmission {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    /// Selected services, deduplicated, in selection order.
    pub services: Vec<Service>,
    /// Requested budget in USD, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<i64>,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_round_trip_through_from_label() {
        for service in Service::ALL {
            assert_eq!(Service::from_label(service.label()), Some(service));
        }
    }

    #[test]
    fn from_label_requires_exact_match() {
        assert_eq!(Service::from_label("ui/ux"), None);
        assert_eq!(Service::from_label("Web Dev "), None);
        assert_eq!(Service::from_label("SEO"), None);
        assert_eq!(Service::from_label(""), None);
    }

    #[test]
    fn submission_serializes_to_wire_shape() {
        let submission = OnboardingSubmission {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company_name: "Analytical Engines Ltd".to_string(),
            services: vec![Service::UiUx, Service::WebDev],
            budget_usd: Some(50_000),
            project_start_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            accept_terms: true,
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "companyName": "Analytical Engines Ltd",
                "services": ["UI/UX", "Web Dev"],
                "budgetUsd": 50_000,
                "projectStartDate": "2030-01-15",
                "acceptTerms": true,
            })
        );
    }

    #[test]
    fn absent_budget_is_omitted_from_the_body() {
        let submission = OnboardingSubmission {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company_name: "Analytical Engines Ltd".to_string(),
            services: vec![Service::Branding],
            budget_usd: None,
            project_start_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            accept_terms: true,
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert!(value.get("budgetUsd").is_none());
    }
}
