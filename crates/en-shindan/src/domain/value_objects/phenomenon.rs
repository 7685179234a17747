//! Phenomenon (自然現象) - The twelve natural phenomena

use serde::{Deserialize, Serialize};

/// One of the twelve natural phenomena of the 60-way classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phenomenon {
    #[serde(rename = "春霞")]
    Harugasumi,
    #[serde(rename = "夏雨")]
    Natsuame,
    #[serde(rename = "彩雲")]
    Saiun,
    #[serde(rename = "朝日")]
    Asahi,
    #[serde(rename = "夕陽")]
    Yuhi,
    #[serde(rename = "秋風")]
    Akikaze,
    #[serde(rename = "冬陽")]
    Fuyuhi,
    #[serde(rename = "朧月")]
    Oborozuki,
    #[serde(rename = "霜夜")]
    Shimoya,
    #[serde(rename = "氷刃")]
    Hyojin,
    #[serde(rename = "春雷")]
    Shunrai,
    #[serde(rename = "豊穣")]
    Houjo,
}

impl Phenomenon {
    /// All phenomena, indexed by their day-count residue (0-11)
    pub const ALL: [Phenomenon; 12] = [
        Phenomenon::Harugasumi,
        Phenomenon::Natsuame,
        Phenomenon::Saiun,
        Phenomenon::Asahi,
        Phenomenon::Yuhi,
        Phenomenon::Akikaze,
        Phenomenon::Fuyuhi,
        Phenomenon::Oborozuki,
        Phenomenon::Shimoya,
        Phenomenon::Hyojin,
        Phenomenon::Shunrai,
        Phenomenon::Houjo,
    ];

    /// Phenomenon at a cyclic index (wraps modulo 12)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Position on the twelve-position wheel (1-12)
    pub fn position(self) -> u8 {
        self as u8 + 1
    }

    /// Kanji name
    pub fn name(self) -> &'static str {
        match self {
            Phenomenon::Harugasumi => "春霞",
            Phenomenon::Natsuame => "夏雨",
            Phenomenon::Saiun => "彩雲",
            Phenomenon::Asahi => "朝日",
            Phenomenon::Yuhi => "夕陽",
            Phenomenon::Akikaze => "秋風",
            Phenomenon::Fuyuhi => "冬陽",
            Phenomenon::Oborozuki => "朧月",
            Phenomenon::Shimoya => "霜夜",
            Phenomenon::Hyojin => "氷刃",
            Phenomenon::Shunrai => "春雷",
            Phenomenon::Houjo => "豊穣",
        }
    }

    /// Romanized key used in result page file names
    pub fn key(self) -> &'static str {
        match self {
            Phenomenon::Harugasumi => "harugasumi",
            Phenomenon::Natsuame => "natsuame",
            Phenomenon::Saiun => "saiun",
            Phenomenon::Asahi => "asahi",
            Phenomenon::Yuhi => "yuhi",
            Phenomenon::Akikaze => "akikaze",
            Phenomenon::Fuyuhi => "fuyuhi",
            Phenomenon::Oborozuki => "oborozuki",
            Phenomenon::Shimoya => "shimoya",
            Phenomenon::Hyojin => "hyojin",
            Phenomenon::Shunrai => "shunrai",
            Phenomenon::Houjo => "houjo",
        }
    }
}

impl std::fmt::Display for Phenomenon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
