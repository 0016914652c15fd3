//! Categorical encoding and feature-vector assembly.
//!
//! Codes and ordering must match what the scaler and classifier were fitted
//! on; the canonical order is published through [`FEATURE_ORDER`] and checked
//! against the artifact schemas at load time.

use super::domain::{
    Education, Employment, Gender, LoanApplication, MaritalStatus, PropertyArea,
};

pub const FEATURE_COUNT: usize = 11;

/// Canonical feature order the artifacts were fitted on.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "gender",
    "married",
    "dependents",
    "education",
    "self_employed",
    "applicant_income",
    "coapplicant_income",
    "loan_amount",
    "loan_term",
    "credit_history",
    "property_area",
];

/// Validation errors raised while turning form values into numeric features.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    #[error("dependents must be \"3+\" or a whole number, got '{value}'")]
    InvalidDependents { value: String },
    #[error("credit history must be 1.0 or 0.0, got {value}")]
    InvalidCreditHistory { value: f64 },
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },
}

pub(crate) fn encode_gender(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 1.0,
        Gender::Female => 0.0,
    }
}

pub(crate) fn encode_married(married: MaritalStatus) -> f64 {
    match married {
        MaritalStatus::Married => 1.0,
        MaritalStatus::Single => 0.0,
    }
}

pub(crate) fn encode_education(education: Education) -> f64 {
    match education {
        Education::Graduate => 1.0,
        Education::NotGraduate => 0.0,
    }
}

pub(crate) fn encode_employment(employment: Employment) -> f64 {
    match employment {
        Employment::SelfEmployed => 1.0,
        Employment::Salaried => 0.0,
    }
}

pub(crate) fn encode_property_area(area: PropertyArea) -> f64 {
    match area {
        PropertyArea::Urban => 2.0,
        PropertyArea::Semiurban => 1.0,
        PropertyArea::Rural => 0.0,
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, EncodeError> {
    if value < 0.0 {
        return Err(EncodeError::NegativeAmount { field, value });
    }
    Ok(value)
}

/// Assemble the ordered feature vector for one application.
///
/// Order and values follow [`FEATURE_ORDER`] exactly; numeric inputs pass
/// through unchanged apart from the non-negativity check the intake form
/// used to enforce.
pub fn feature_vector(application: &LoanApplication) -> Result<Vec<f64>, EncodeError> {
    let mut features = Vec::with_capacity(FEATURE_COUNT);

    features.push(encode_gender(application.gender));
    features.push(encode_married(application.married));
    features.push(f64::from(application.dependents.count()));
    features.push(encode_education(application.education));
    features.push(encode_employment(application.self_employed));
    features.push(non_negative(
        "applicant income",
        application.applicant_income,
    )?);
    features.push(non_negative(
        "coapplicant income",
        application.coapplicant_income,
    )?);
    features.push(non_negative("loan amount", application.loan_amount)?);
    features.push(non_negative("loan term", application.loan_term)?);
    features.push(f64::from(application.credit_history));
    features.push(encode_property_area(application.property_area));

    Ok(features)
}
