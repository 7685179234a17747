//! BiorhythmPhase - The ten states of the biorhythm cycle

use serde::{Deserialize, Serialize};

/// Declared length of one full biorhythm cycle, in days
pub const CYCLE_LENGTH: u32 = 335;

/// One of the ten fixed-length phases of the biorhythm cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiorhythmPhase {
    #[serde(rename = "新生期")]
    Shinsei,
    #[serde(rename = "発展期")]
    Hatten,
    #[serde(rename = "充実期")]
    Juujitsu,
    #[serde(rename = "安定期")]
    Antei,
    #[serde(rename = "転換期")]
    Tenkan,
    #[serde(rename = "調整期")]
    Chousei,
    #[serde(rename = "深化期")]
    Shinka,
    #[serde(rename = "収束期")]
    Shuusoku,
    #[serde(rename = "沈静期")]
    Chinsei,
    #[serde(rename = "準備期")]
    Junbi,
}

impl BiorhythmPhase {
    /// All phases in cycle order
    pub const ALL: [BiorhythmPhase; 10] = [
        BiorhythmPhase::Shinsei,
        BiorhythmPhase::Hatten,
        BiorhythmPhase::Juujitsu,
        BiorhythmPhase::Antei,
        BiorhythmPhase::Tenkan,
        BiorhythmPhase::Chousei,
        BiorhythmPhase::Shinka,
        BiorhythmPhase::Shuusoku,
        BiorhythmPhase::Chinsei,
        BiorhythmPhase::Junbi,
    ];

    /// Length of this phase in days
    pub const fn duration(self) -> u32 {
        match self {
            BiorhythmPhase::Shinsei => 32,
            BiorhythmPhase::Hatten => 35,
            BiorhythmPhase::Juujitsu => 38,
            BiorhythmPhase::Antei => 33,
            BiorhythmPhase::Tenkan => 29,
            BiorhythmPhase::Chousei => 31,
            BiorhythmPhase::Shinka => 36,
            BiorhythmPhase::Shuusoku => 34,
            BiorhythmPhase::Chinsei => 30,
            BiorhythmPhase::Junbi => 37,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BiorhythmPhase::Shinsei => "新生期",
            BiorhythmPhase::Hatten => "発展期",
            BiorhythmPhase::Juujitsu => "充実期",
            BiorhythmPhase::Antei => "安定期",
            BiorhythmPhase::Tenkan => "転換期",
            BiorhythmPhase::Chousei => "調整期",
            BiorhythmPhase::Shinka => "深化期",
            BiorhythmPhase::Shuusoku => "収束期",
            BiorhythmPhase::Chinsei => "沈静期",
            BiorhythmPhase::Junbi => "準備期",
        }
    }

    /// Energy label of the phase
    pub fn energy(self) -> &'static str {
        match self {
            BiorhythmPhase::Shinsei => "始まり",
            BiorhythmPhase::Hatten => "拡張",
            BiorhythmPhase::Juujitsu => "最大",
            BiorhythmPhase::Antei => "安定",
            BiorhythmPhase::Tenkan => "変化",
            BiorhythmPhase::Chousei => "調整",
            BiorhythmPhase::Shinka => "深化",
            BiorhythmPhase::Shuusoku => "収束",
            BiorhythmPhase::Chinsei => "静寂",
            BiorhythmPhase::Junbi => "準備",
        }
    }

    /// Sum of all phase durations
    pub const fn total_duration() -> u32 {
        let mut total = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            total += Self::ALL[i].duration();
            i += 1;
        }
        total
    }
}

// The phase table must tile the declared cycle exactly.
const _: () = assert!(BiorhythmPhase::total_duration() == CYCLE_LENGTH);

impl std::fmt::Display for BiorhythmPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
