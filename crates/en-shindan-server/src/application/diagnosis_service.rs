//! Diagnosis Application Service (Use Case)
//!
//! Supplies the reference clock to the pure diagnosis engine.

use chrono::{DateTime, FixedOffset, Utc};

use en_shindan::{DiagnosisError, DiagnosisForm, DiagnosisProfile};

/// Application service for diagnosis requests
pub struct DiagnosisService {
    offset: FixedOffset,
}

impl DiagnosisService {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Current time in the configured offset
    pub fn reference_now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Diagnose a form as of now
    pub fn run(&self, form: &DiagnosisForm) -> Result<DiagnosisProfile, DiagnosisError> {
        self.run_at(form, self.reference_now())
    }

    /// Diagnose a form as of `reference`
    pub fn run_at(
        &self,
        form: &DiagnosisForm,
        reference: DateTime<FixedOffset>,
    ) -> Result<DiagnosisProfile, DiagnosisError> {
        match en_shindan::diagnose(form, reference) {
            Ok(profile) => {
                tracing::info!(
                    natural_type = %profile.natural_type.natural_type,
                    name_type = %profile.name.bond_type,
                    "Diagnosis completed"
                );
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!(field = e.field(), "Diagnosis rejected: {}", e);
                Err(e)
            }
        }
    }
}
