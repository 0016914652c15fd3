use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use loan_screen::scoring::{
    CreditHistory, Dependents, Education, Employment, Gender, MaritalStatus, PropertyArea,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim() {
        "Male" => Ok(Gender::Male),
        "Female" => Ok(Gender::Female),
        other => Err(format!("expected Male or Female, got '{other}'")),
    }
}

pub(crate) fn parse_married(raw: &str) -> Result<MaritalStatus, String> {
    match raw.trim() {
        "Yes" => Ok(MaritalStatus::Married),
        "No" => Ok(MaritalStatus::Single),
        other => Err(format!("expected Yes or No, got '{other}'")),
    }
}

pub(crate) fn parse_education(raw: &str) -> Result<Education, String> {
    match raw.trim() {
        "Graduate" => Ok(Education::Graduate),
        "Not Graduate" => Ok(Education::NotGraduate),
        other => Err(format!("expected Graduate or 'Not Graduate', got '{other}'")),
    }
}

pub(crate) fn parse_employment(raw: &str) -> Result<Employment, String> {
    match raw.trim() {
        "Yes" => Ok(Employment::SelfEmployed),
        "No" => Ok(Employment::Salaried),
        other => Err(format!("expected Yes or No, got '{other}'")),
    }
}

pub(crate) fn parse_dependents(raw: &str) -> Result<Dependents, String> {
    Dependents::from_str(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_credit_history(raw: &str) -> Result<CreditHistory, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("expected 1.0 or 0.0, got '{raw}'"))?;
    CreditHistory::try_from(value).map_err(|err| err.to_string())
}

pub(crate) fn parse_property_area(raw: &str) -> Result<PropertyArea, String> {
    match raw.trim() {
        "Urban" => Ok(PropertyArea::Urban),
        "Semiurban" => Ok(PropertyArea::Semiurban),
        "Rural" => Ok(PropertyArea::Rural),
        other => Err(format!(
            "expected Urban, Semiurban, or Rural, got '{other}'"
        )),
    }
}
