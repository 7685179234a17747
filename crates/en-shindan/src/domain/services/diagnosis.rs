//! Diagnosis Orchestrator
//!
//! Validates a raw form, runs the five classifiers independently and
//! assembles one [`DiagnosisProfile`]. Validation is all-or-nothing: no
//! classifier runs until the whole form has passed.

use chrono::{DateTime, FixedOffset};

use super::{attraction, biorhythm, calendar, name_acoustics, region};
use crate::domain::entities::{DiagnosisForm, DiagnosisInput, DiagnosisProfile};
use crate::domain::errors::DiagnosisError;

/// Version of the diagnosis logic, attached to every profile
pub const LOGIC_VERSION: &str = "1.0.0";

/// Validate `form` and diagnose it as of `reference`
///
/// `reference` is both the biorhythm "today" (its local calendar date) and
/// the `calculatedAt` stamp of the profile. Passing the same form and
/// reference always yields the same profile.
pub fn diagnose(
    form: &DiagnosisForm,
    reference: DateTime<FixedOffset>,
) -> Result<DiagnosisProfile, DiagnosisError> {
    let input = form.validate().inspect_err(|e| {
        tracing::debug!(field = e.field(), error = %e, "Diagnosis form rejected");
    })?;

    Ok(compute(&input, reference))
}

/// Diagnose already-validated input
pub fn compute(input: &DiagnosisInput, reference: DateTime<FixedOffset>) -> DiagnosisProfile {
    let natural_type = calendar::classify(input.birth_date);
    let name = name_acoustics::analyze(input.first_name.as_str(), input.last_name.as_str());
    let attraction = attraction::classify(input.answers);
    let biorhythm = biorhythm::phase_at(input.birth_date, reference.date_naive());
    let region_energy = region::resolve_pair(&input.birth_region, &input.current_region);

    tracing::debug!(
        natural_type = %natural_type.natural_type,
        name_type = %name.bond_type,
        attraction_type = %attraction.attraction_type,
        phase = %biorhythm.phase,
        "Diagnosis computed"
    );

    DiagnosisProfile {
        natural_type,
        name,
        attraction,
        biorhythm,
        region_energy,
        calculated_at: reference,
        version: LOGIC_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Area, BiorhythmPhase, Element, NameBondType};

    fn reference() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-15T10:00:00+09:00").unwrap()
    }

    fn form() -> DiagnosisForm {
        DiagnosisForm {
            birth_date: Some("1990-06-15".to_string()),
            first_name: Some("Anna".to_string()),
            last_name: Some("Lee".to_string()),
            birth_region: Some("東京都".to_string()),
            current_region: Some("京都府".to_string()),
            work_pattern: Some("木".to_string()),
            relationship_style: Some("木".to_string()),
            stress_handling: Some("火".to_string()),
            lifestyle_preference: Some("水".to_string()),
        }
    }

    #[test]
    fn test_full_profile() {
        let profile = diagnose(&form(), reference()).unwrap();

        assert_eq!(profile.natural_type.natural_type, "木の夏雨");
        assert_eq!(profile.name.bond_type, NameBondType::Shinen);
        assert_eq!(profile.attraction.attraction_type, "木縁型");
        assert_eq!(profile.biorhythm.phase, BiorhythmPhase::Shinsei);
        assert_eq!(profile.biorhythm.days_into_phase, 24);
        assert_eq!(profile.region_energy.birth.element, Element::Fire);
        assert_eq!(profile.region_energy.current.element, Element::Metal);
        assert_eq!(profile.region_energy.current.area, Some(Area::Kansai));
        assert_eq!(profile.calculated_at, reference());
        assert_eq!(profile.version, LOGIC_VERSION);
    }

    #[test]
    fn test_reference_local_date_drives_biorhythm() {
        // 2024-06-15 in Tokyo is still 2024-06-14 in UTC
        let late_utc = DateTime::parse_from_rfc3339("2024-06-14T20:00:00+00:00").unwrap();
        let tokyo = late_utc.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());

        let in_utc = diagnose(&form(), late_utc).unwrap();
        let in_tokyo = diagnose(&form(), tokyo).unwrap();
        assert_eq!(in_utc.biorhythm.day_in_cycle, 23);
        assert_eq!(in_tokyo.biorhythm.day_in_cycle, 24);
    }

    #[test]
    fn test_validation_error_stops_everything() {
        let mut bad = form();
        bad.last_name = Some("Lee-Smith".to_string());
        assert_eq!(
            diagnose(&bad, reference()),
            Err(DiagnosisError::invalid_name("lastName"))
        );
    }

    #[test]
    fn test_blank_region_and_answer_fall_back() {
        let mut blank = form();
        blank.birth_region = Some("  ".to_string());
        blank.work_pattern = Some(" ".to_string());

        let profile = diagnose(&blank, reference()).unwrap();
        assert_eq!(profile.region_energy.birth.element, Element::Earth);
        assert_eq!(profile.region_energy.birth.area, None);
        assert_eq!(profile.attraction.element_counts.get(Element::Wood), 1);
        assert_eq!(profile.attraction.element_counts.get(Element::Fire), 1);
        assert_eq!(profile.attraction.element_counts.get(Element::Water), 1);
    }

    #[test]
    fn test_output_is_byte_identical() {
        let a = serde_json::to_string(&diagnose(&form(), reference()).unwrap()).unwrap();
        let b = serde_json::to_string(&diagnose(&form(), reference()).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_shape() {
        let profile = diagnose(&form(), reference()).unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["naturalType"]["naturalType"], "木の夏雨");
        assert_eq!(json["naturalType"]["phenomenon"], "夏雨");
        assert_eq!(json["naturalType"]["fileName"], "wood-natsuame");
        assert_eq!(json["name"]["type"], "深縁");
        assert_eq!(json["name"]["scores"]["広縁"], 4);
        assert_eq!(json["attraction"]["attractionType"], "木縁型");
        assert_eq!(json["attraction"]["elementCounts"]["木"], 2);
        assert_eq!(json["biorhythm"]["phase"], "新生期");
        assert_eq!(json["biorhythm"]["energy"], "始まり");
        assert_eq!(json["regionEnergy"]["birth"]["area"], "関東");
        assert_eq!(json["calculatedAt"], "2024-06-15T10:00:00+09:00");
        assert_eq!(json["version"], "1.0.0");

        let back: DiagnosisProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back.natural_type, profile.natural_type);
        assert_eq!(back.biorhythm, profile.biorhythm);
    }
}
