//! Diagnosis request/response DTOs

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use en_shindan::{DiagnosisForm, DiagnosisProfile};

/// Diagnosis request
///
/// Answers are element symbols (木/火/土/金/水); anything else counts as no vote.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseRequest {
    #[schema(example = "1990-06-15")]
    pub birth_date: Option<String>,
    #[schema(example = "Hanako")]
    pub first_name: Option<String>,
    #[schema(example = "Yamada")]
    pub last_name: Option<String>,
    #[serde(alias = "birthPrefecture")]
    #[schema(example = "東京都")]
    pub birth_region: Option<String>,
    #[serde(alias = "currentPrefecture")]
    #[schema(example = "大阪府")]
    pub current_region: Option<String>,
    #[serde(alias = "question1")]
    #[schema(example = "木")]
    pub work_pattern: Option<String>,
    #[serde(alias = "question2")]
    pub relationship_style: Option<String>,
    #[serde(alias = "question3")]
    pub stress_handling: Option<String>,
    #[serde(alias = "question4")]
    pub lifestyle_preference: Option<String>,
}

impl From<DiagnoseRequest> for DiagnosisForm {
    fn from(req: DiagnoseRequest) -> Self {
        DiagnosisForm {
            birth_date: req.birth_date,
            first_name: req.first_name,
            last_name: req.last_name,
            birth_region: req.birth_region,
            current_region: req.current_region,
            work_pattern: req.work_pattern,
            relationship_style: req.relationship_style,
            stress_handling: req.stress_handling,
            lifestyle_preference: req.lifestyle_preference,
        }
    }
}

/// Successful diagnosis payload
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisData {
    #[schema(value_type = Object)]
    pub user_profile: DiagnosisProfile,
    #[schema(value_type = String, example = "2024-06-15T10:00:00+09:00")]
    pub calculated_at: DateTime<FixedOffset>,
}

/// Response envelope: `data` on success, `error` otherwise
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnoseResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DiagnosisData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiagnoseResponse {
    pub fn ok(profile: DiagnosisProfile) -> Self {
        Self {
            success: true,
            data: Some(DiagnosisData {
                calculated_at: profile.calculated_at,
                user_profile: profile,
            }),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
