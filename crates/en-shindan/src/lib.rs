//! En-Shindan Domain Library
//!
//! Core diagnosis engine for the En-Shindan (縁診断) system.
//!
//! # Architecture
//!
//! Everything in this crate is pure: no I/O, no clock, no randomness.
//! The server and CLI crates call into it rather than re-implementing
//! any of the classification logic.
//!
//! - **Domain Layer** (`domain/`)
//!   - `value_objects/`: Immutable symbolic types (Element, Phenomenon, BiorhythmPhase, ...)
//!   - `entities/`: Diagnosis input and the assembled profile
//!   - `services/`: The five classifiers and the orchestrator
//!   - `errors/`: Validation error types
//!
//! # Usage
//!
//! ```rust,ignore
//! use en_shindan::{diagnose, DiagnosisForm};
//!
//! let profile = diagnose(&form, chrono::Local::now().fixed_offset())?;
//! println!("{}", profile.natural_type.natural_type);
//! ```

pub mod domain;

// Re-export commonly used types
pub use domain::services::{attraction, biorhythm, calendar, diagnosis, name_acoustics, region};
pub use domain::{
    Area, AttractionType, BiorhythmPhase, BiorhythmState, BondScores, DiagnosisError,
    DiagnosisForm, DiagnosisInput, DiagnosisProfile, Element, ElementCounts, NameAnalysis,
    NameBondType, NameDetails, NaturalClassification, Phenomenon, RegionEnergy, RegionEnergyPair,
    RomanName,
};
pub use domain::services::diagnosis::{compute, diagnose, LOGIC_VERSION};
