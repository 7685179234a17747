//! En-Shindan API Models
//!
//! - Diagnosis: request form and response envelope

mod diagnosis;

pub use diagnosis::*;
