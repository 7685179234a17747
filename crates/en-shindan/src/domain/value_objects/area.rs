//! Area - Macro regions grouping the prefectures

use serde::{Deserialize, Serialize};

/// Macro region (地方) a prefecture belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "北海道")]
    Hokkaido,
    #[serde(rename = "東北")]
    Tohoku,
    #[serde(rename = "関東")]
    Kanto,
    #[serde(rename = "中部")]
    Chubu,
    #[serde(rename = "関西")]
    Kansai,
    #[serde(rename = "中国")]
    Chugoku,
    #[serde(rename = "四国")]
    Shikoku,
    #[serde(rename = "九州")]
    Kyushu,
    #[serde(rename = "沖縄")]
    Okinawa,
}

impl Area {
    pub fn name(self) -> &'static str {
        match self {
            Area::Hokkaido => "北海道",
            Area::Tohoku => "東北",
            Area::Kanto => "関東",
            Area::Chubu => "中部",
            Area::Kansai => "関西",
            Area::Chugoku => "中国",
            Area::Shikoku => "四国",
            Area::Kyushu => "九州",
            Area::Okinawa => "沖縄",
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
