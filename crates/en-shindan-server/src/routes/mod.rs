//! En-Shindan API Routes
//!
//! - /diagnosis - Diagnosis (縁診断)
//! - /getDiagnosis - Same handler under the earlier cloud function name

pub mod diagnosis;
pub mod swagger;
