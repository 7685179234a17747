//! RomanName - A name written in ASCII letters only

use serde::Serialize;

use crate::domain::errors::DiagnosisError;

/// Non-empty name matching `^[A-Za-z]+$`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RomanName(String);

impl RomanName {
    /// Validate `value` for the form field `field`
    pub fn parse(field: &'static str, value: &str) -> Result<Self, DiagnosisError> {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(value.to_string()))
        } else {
            Err(DiagnosisError::invalid_name(field))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RomanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
