//! Domain Errors
//!
//! Error types for diagnosis input validation.

use thiserror::Error;

/// Diagnosis validation errors
///
/// Every variant carries the form field it refers to, so callers can report
/// exactly one actionable message per failed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosisError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be in Roman characters (A-Z, a-z)")]
    InvalidName { field: &'static str },

    #[error("birthDate has an invalid format: {input:?}")]
    InvalidDate { input: String },
}

impl DiagnosisError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_name(field: &'static str) -> Self {
        Self::InvalidName { field }
    }

    pub fn invalid_date<T: AsRef<str>>(input: T) -> Self {
        Self::InvalidDate {
            input: input.as_ref().to_string(),
        }
    }

    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidName { field } => field,
            Self::InvalidDate { .. } => "birthDate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(DiagnosisError::missing("lastName").field(), "lastName");
        assert_eq!(DiagnosisError::invalid_name("firstName").field(), "firstName");
        assert_eq!(DiagnosisError::invalid_date("soon").field(), "birthDate");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DiagnosisError::missing("birthRegion").to_string(),
            "birthRegion is required"
        );
        assert_eq!(
            DiagnosisError::invalid_date("1990-13-01").to_string(),
            "birthDate has an invalid format: \"1990-13-01\""
        );
    }
}
