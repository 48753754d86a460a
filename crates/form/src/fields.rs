//! Raw editable field values, as a presentation layer holds them.

use serde_json::{Map, Number, Value};

/// The form's raw field values before validation.
///
/// Everything is kept exactly as entered: text inputs as strings (budget
/// included), selected services as their labels, the terms checkbox as a
/// bool. [`Default`] is the empty form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    /// Selected service labels. Unknown labels are allowed here and
    /// rejected by validation.
    pub services: Vec<String>,
    /// Budget as entered. Empty means "not provided".
    pub budget_usd: String,
    /// Start date as entered, `YYYY-MM-DD`.
    pub project_start_date: String,
    pub accept_terms: bool,
}

impl FormFields {
    /// Convert to the untyped record the validator consumes.
    ///
    /// The budget text is mapped so the integer rule, not this conversion,
    /// decides validity: empty is omitted, integer text becomes a JSON
    /// integer, decimal text a JSON float, and anything else stays a
    /// string.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("fullName".to_string(), Value::String(self.full_name.clone()));
        record.insert("email".to_string(), Value::String(self.email.clone()));
        record.insert(
            "companyName".to_string(),
            Value::String(self.company_name.clone()),
        );
        record.insert(
            "services".to_string(),
            Value::Array(self.services.iter().cloned().map(Value::String).collect()),
        );
        if let Some(budget) = budget_value(self.budget_usd.trim()) {
            record.insert("budgetUsd".to_string(), budget);
        }
        record.insert(
            "projectStartDate".to_string(),
            Value::String(self.project_start_date.trim().to_string()),
        );
        record.insert("acceptTerms".to_string(), Value::Bool(self.accept_terms));
        record
    }
}

fn budget_value(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::Number(Number::from(n)));
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Some(Value::Number(n));
        }
    }
    Some(Value::String(raw.to_string()))
}
