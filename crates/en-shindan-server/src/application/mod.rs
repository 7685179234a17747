//! Application Layer (Use Cases)
//!
//! Coordinates the diagnosis engine with runtime concerns (clock, logging).

mod diagnosis_service;

pub use diagnosis_service::DiagnosisService;
