//! Diagnosis input - raw form and validated input

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DiagnosisError;
use crate::domain::services::calendar;
use crate::domain::value_objects::{Element, RomanName};

/// Raw diagnosis form as submitted by a client
///
/// Every field is optional here; [`DiagnosisForm::validate`] decides what is
/// missing. The aliases accept the field names used by the older
/// `getDiagnosis` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, alias = "birthPrefecture", skip_serializing_if = "Option::is_none")]
    pub birth_region: Option<String>,
    #[serde(default, alias = "currentPrefecture", skip_serializing_if = "Option::is_none")]
    pub current_region: Option<String>,
    /// Question 1 answer (element symbol)
    #[serde(default, alias = "question1", skip_serializing_if = "Option::is_none")]
    pub work_pattern: Option<String>,
    /// Question 2 answer
    #[serde(default, alias = "question2", skip_serializing_if = "Option::is_none")]
    pub relationship_style: Option<String>,
    /// Question 3 answer
    #[serde(default, alias = "question3", skip_serializing_if = "Option::is_none")]
    pub stress_handling: Option<String>,
    /// Question 4 answer
    #[serde(default, alias = "question4", skip_serializing_if = "Option::is_none")]
    pub lifestyle_preference: Option<String>,
}

/// Validated diagnosis input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisInput {
    pub birth_date: NaiveDate,
    pub first_name: RomanName,
    pub last_name: RomanName,
    pub birth_region: String,
    pub current_region: String,
    /// Quiz answers; `None` is a non-vote
    pub answers: [Option<Element>; 4],
}

impl DiagnosisForm {
    /// Validate the form into a [`DiagnosisInput`]
    ///
    /// Checks run in a fixed order and stop at the first failure: required
    /// fields (in declaration order), first name pattern, last name pattern,
    /// then the birth date format.
    pub fn validate(&self) -> Result<DiagnosisInput, DiagnosisError> {
        let birth_date = required(&self.birth_date, "birthDate")?;
        let first_name = required(&self.first_name, "firstName")?;
        let last_name = required(&self.last_name, "lastName")?;
        let birth_region = required(&self.birth_region, "birthRegion")?;
        let current_region = required(&self.current_region, "currentRegion")?;
        let answers = [
            required(&self.work_pattern, "workPattern")?,
            required(&self.relationship_style, "relationshipStyle")?,
            required(&self.stress_handling, "stressHandling")?,
            required(&self.lifestyle_preference, "lifestylePreference")?,
        ];

        let first_name = RomanName::parse("firstName", first_name)?;
        let last_name = RomanName::parse("lastName", last_name)?;
        let birth_date = calendar::parse_birth_date(birth_date)?;

        Ok(DiagnosisInput {
            birth_date,
            first_name,
            last_name,
            birth_region: birth_region.trim().to_string(),
            current_region: current_region.trim().to_string(),
            answers: answers.map(|a| a.parse::<Element>().ok()),
        })
    }
}

/// Presence check: only a missing or empty value counts as absent
///
/// Whitespace-only values are present; names and dates reject them later,
/// regions resolve to the default element and answers become non-votes.
fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, DiagnosisError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DiagnosisError::missing(field)),
    }
}
