//! NameBondType - Name-acoustic bond categories (名前の縁)

use serde::{Deserialize, Serialize};

/// Bond type derived from the sound of a romanized name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameBondType {
    /// 結縁 - binding ties
    #[serde(rename = "結縁")]
    Ketsuen,
    /// 深縁 - deep ties
    #[serde(rename = "深縁")]
    Shinen,
    /// 広縁 - wide ties
    #[serde(rename = "広縁")]
    Kouen,
}

impl NameBondType {
    pub fn name(self) -> &'static str {
        match self {
            NameBondType::Ketsuen => "結縁",
            NameBondType::Shinen => "深縁",
            NameBondType::Kouen => "広縁",
        }
    }
}

impl std::fmt::Display for NameBondType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
