//! Element (五行) - The five symbolic categories

use serde::{Deserialize, Serialize};

/// Five-element category
///
/// Declaration order is the canonical priority order used for every
/// tie-break: 木 > 火 > 土 > 金 > 水.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// All elements in canonical order
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Element at a cyclic index (wraps modulo 5)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position in canonical order (0-4)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kanji symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// English key used for result page folders
    pub fn folder(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "木" | "wood" => Ok(Element::Wood),
            "火" | "fire" => Ok(Element::Fire),
            "土" | "earth" => Ok(Element::Earth),
            "金" | "metal" => Ok(Element::Metal),
            "水" | "water" => Ok(Element::Water),
            _ => Err(format!("Unknown element: {}", s)),
        }
    }
}
