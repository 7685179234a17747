//! Diagnosis profile - the assembled result of one diagnosis
//!
//! All types serialize to camelCase JSON with no maps, so identical inputs
//! always produce byte-identical output.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Area, BiorhythmPhase, Element, NameBondType, Phenomenon};

/// 60-way natural classification (生まれ持った縁)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalClassification {
    /// Display label, e.g. "火の朧月"
    pub natural_type: String,
    pub element: Element,
    pub phenomenon: Phenomenon,
    /// Position on the twelve-position wheel (1-12)
    pub position: u8,
    pub phenomenon_index: usize,
    pub element_index: usize,
    pub days_since_epoch: i64,
    /// Result page folder, e.g. "fire"
    pub folder: String,
    /// Result page file stem, e.g. "fire-oborozuki"
    pub file_name: String,
}

impl NaturalClassification {
    /// Site-relative path of the static result page
    pub fn result_path(&self) -> String {
        format!("/results/{}/{}.html", self.folder, self.file_name)
    }
}

/// Per-type scores of the name-acoustic analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondScores {
    #[serde(rename = "結縁")]
    pub ketsuen: u32,
    #[serde(rename = "深縁")]
    pub shinen: u32,
    #[serde(rename = "広縁")]
    pub kouen: u32,
}

impl BondScores {
    pub fn get(&self, bond: NameBondType) -> u32 {
        match bond {
            NameBondType::Ketsuen => self.ketsuen,
            NameBondType::Shinen => self.shinen,
            NameBondType::Kouen => self.kouen,
        }
    }

    pub fn add(&mut self, bond: NameBondType, points: u32) {
        match bond {
            NameBondType::Ketsuen => self.ketsuen += points,
            NameBondType::Shinen => self.shinen += points,
            NameBondType::Kouen => self.kouen += points,
        }
    }

    pub fn max(&self) -> u32 {
        self.ketsuen.max(self.shinen).max(self.kouen)
    }
}

/// Extracted phonetic features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameDetails {
    pub vowel_count: usize,
    pub consonant_count: usize,
    /// Number of ASCII letters in the full name
    pub name_length: usize,
    /// Vowel ratio rounded to two decimals
    pub vowel_ratio: f64,
    pub unique_consonants: usize,
    pub has_repeat: bool,
    pub starts_with_vowel: bool,
}

/// Name-acoustic analysis (名前の縁)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameAnalysis {
    #[serde(rename = "type")]
    pub bond_type: NameBondType,
    pub scores: BondScores,
    pub details: NameDetails,
}

/// Answer tally per element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts {
    #[serde(rename = "木")]
    pub wood: u8,
    #[serde(rename = "火")]
    pub fire: u8,
    #[serde(rename = "土")]
    pub earth: u8,
    #[serde(rename = "金")]
    pub metal: u8,
    #[serde(rename = "水")]
    pub water: u8,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn increment(&mut self, element: Element) {
        match element {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
    }
}

/// Element attraction type (引き寄せてきた縁)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionType {
    /// e.g. "木縁型"
    pub attraction_type: String,
    pub dominant_element: Element,
    pub element_counts: ElementCounts,
}

/// Position within the biorhythm cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiorhythmState {
    pub phase: BiorhythmPhase,
    pub energy: String,
    /// Percent of the phase elapsed (0-99)
    pub progress: u8,
    pub days_into_phase: u32,
    pub phase_duration: u32,
    pub day_in_cycle: u32,
}

/// Element energy of a single region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionEnergy {
    pub region: String,
    pub element: Element,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
}

/// Birth and current region energies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEnergyPair {
    pub birth: RegionEnergy,
    pub current: RegionEnergy,
}

/// Complete diagnosis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisProfile {
    pub natural_type: NaturalClassification,
    pub name: NameAnalysis,
    pub attraction: AttractionType,
    pub biorhythm: BiorhythmState,
    pub region_energy: RegionEnergyPair,
    /// Reference timestamp the diagnosis was computed for
    pub calculated_at: DateTime<FixedOffset>,
    /// Version of the diagnosis logic
    pub version: String,
}
