//! Field checks applied to dialog drafts before they are submitted.
//!
//! These mirror the form's own required-field rules. The on-chain module
//! remains the authority on everything else (duplicate ids, unknown
//! patients).

use thiserror::Error;

/// Oldest age the patient form accepts
pub const MAX_PATIENT_AGE: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Age must be a whole number, got '{0}'")]
    InvalidAge(String),
    #[error("Age must be between 0 and {}, got {0}", MAX_PATIENT_AGE)]
    AgeOutOfRange(u64),
    #[error("No patient selected")]
    NoPatientSelected,
}

/// Reject empty or whitespace-only values
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Parse the age input into the integer the `add_patient` entry point takes
pub fn parse_age(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("Age"));
    }
    let age = trimmed
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidAge(trimmed.to_string()))?;
    if age > MAX_PATIENT_AGE {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(age)
}
