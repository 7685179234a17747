//! En-Shindan API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;

use en_shindan::{DiagnosisForm, DiagnosisProfile};

/// API Client for En-Shindan
pub struct ShindanClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
struct DiagnoseResponse {
    success: bool,
    data: Option<DiagnosisData>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagnosisData {
    user_profile: DiagnosisProfile,
}

impl ShindanClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Run a diagnosis on the server
    pub async fn diagnose(&self, form: &DiagnosisForm) -> Result<DiagnosisProfile> {
        let url = format!("{}/diagnosis", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = resp.status();
        let body: DiagnoseResponse = resp
            .json()
            .await
            .with_context(|| format!("Unexpected response from server ({})", status))?;

        match body {
            DiagnoseResponse {
                success: true,
                data: Some(data),
                ..
            } => Ok(data.user_profile),
            DiagnoseResponse { error, .. } => bail!(
                "Diagnosis failed ({}): {}",
                status,
                error.unwrap_or_else(|| "unknown error".to_string())
            ),
        }
    }
}
