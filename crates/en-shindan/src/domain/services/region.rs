//! Region Energy Resolver - element energy of a prefecture
//!
//! Static lookup over the 47 prefectures. Unknown names fall back to
//! [`DEFAULT_ELEMENT`] instead of failing.

use crate::domain::entities::{RegionEnergy, RegionEnergyPair};
use crate::domain::value_objects::Area::{self, *};
use crate::domain::value_objects::Element::{self, *};

/// Element for regions not in the table
pub const DEFAULT_ELEMENT: Element = Earth;

struct Prefecture {
    name: &'static str,
    element: Element,
    area: Area,
}

const fn pref(name: &'static str, element: Element, area: Area) -> Prefecture {
    Prefecture {
        name,
        element,
        area,
    }
}

static PREFECTURE_TABLE: [Prefecture; 47] = [
    pref("北海道", Water, Hokkaido),
    pref("青森県", Water, Tohoku),
    pref("岩手県", Wood, Tohoku),
    pref("宮城県", Water, Tohoku),
    pref("秋田県", Water, Tohoku),
    pref("山形県", Wood, Tohoku),
    pref("福島県", Wood, Tohoku),
    pref("茨城県", Wood, Kanto),
    pref("栃木県", Wood, Kanto),
    pref("群馬県", Fire, Kanto),
    pref("埼玉県", Earth, Kanto),
    pref("千葉県", Wood, Kanto),
    pref("東京都", Fire, Kanto),
    pref("神奈川県", Water, Kanto),
    pref("新潟県", Water, Chubu),
    pref("富山県", Water, Chubu),
    pref("石川県", Metal, Chubu),
    pref("福井県", Water, Chubu),
    pref("山梨県", Fire, Chubu),
    pref("長野県", Wood, Chubu),
    pref("岐阜県", Wood, Chubu),
    pref("静岡県", Fire, Chubu),
    pref("愛知県", Fire, Chubu),
    pref("三重県", Water, Kansai),
    pref("滋賀県", Water, Kansai),
    pref("京都府", Metal, Kansai),
    pref("大阪府", Fire, Kansai),
    pref("兵庫県", Water, Kansai),
    pref("奈良県", Earth, Kansai),
    pref("和歌山県", Wood, Kansai),
    pref("鳥取県", Earth, Chugoku),
    pref("島根県", Water, Chugoku),
    pref("岡山県", Earth, Chugoku),
    pref("広島県", Fire, Chugoku),
    pref("山口県", Water, Chugoku),
    pref("徳島県", Wood, Shikoku),
    pref("香川県", Metal, Shikoku),
    pref("愛媛県", Water, Shikoku),
    pref("高知県", Water, Shikoku),
    pref("福岡県", Fire, Kyushu),
    pref("佐賀県", Earth, Kyushu),
    pref("長崎県", Water, Kyushu),
    pref("熊本県", Fire, Kyushu),
    pref("大分県", Fire, Kyushu),
    pref("宮崎県", Wood, Kyushu),
    pref("鹿児島県", Fire, Kyushu),
    pref("沖縄県", Water, Okinawa),
];

/// All prefecture names, north to south
pub fn prefectures() -> impl Iterator<Item = &'static str> {
    PREFECTURE_TABLE.iter().map(|p| p.name)
}

fn lookup(region: &str) -> Option<&'static Prefecture> {
    let region = region.trim();
    PREFECTURE_TABLE.iter().find(|p| p.name == region)
}

/// Element of a region, [`DEFAULT_ELEMENT`] when unknown
pub fn element_of(region: &str) -> Element {
    lookup(region).map_or(DEFAULT_ELEMENT, |p| p.element)
}

/// Macro area of a region, if known
pub fn area_of(region: &str) -> Option<Area> {
    lookup(region).map(|p| p.area)
}

pub fn resolve(region: &str) -> RegionEnergy {
    RegionEnergy {
        region: region.trim().to_string(),
        element: element_of(region),
        area: area_of(region),
    }
}

pub fn resolve_pair(birth_region: &str, current_region: &str) -> RegionEnergyPair {
    RegionEnergyPair {
        birth: resolve(birth_region),
        current: resolve(current_region),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefectures() {
        assert_eq!(element_of("東京都"), Element::Fire);
        assert_eq!(element_of("京都府"), Element::Metal);
        assert_eq!(element_of("北海道"), Element::Water);
        assert_eq!(element_of("奈良県"), Element::Earth);
        assert_eq!(element_of("岩手県"), Element::Wood);
        assert_eq!(element_of(" 香川県 "), Element::Metal);
    }

    #[test]
    fn test_unknown_region_defaults_to_earth() {
        for unknown in ["", "東京", "Tokyo", "未選択", "Atlantis"] {
            assert_eq!(element_of(unknown), DEFAULT_ELEMENT);
            assert_eq!(area_of(unknown), None);
        }
    }

    #[test]
    fn test_areas() {
        assert_eq!(area_of("三重県"), Some(Area::Kansai));
        assert_eq!(area_of("沖縄県"), Some(Area::Okinawa));
        assert_eq!(area_of("山梨県"), Some(Area::Chubu));
    }

    #[test]
    fn test_prefecture_list() {
        let names: Vec<_> = prefectures().collect();
        assert_eq!(names.len(), 47);
        assert_eq!(names[0], "北海道");
        assert_eq!(names[46], "沖縄県");
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 47);
    }

    #[test]
    fn test_resolve_pair() {
        let pair = resolve_pair("大阪府", "どこか");
        assert_eq!(pair.birth.element, Element::Fire);
        assert_eq!(pair.birth.area, Some(Area::Kansai));
        assert_eq!(pair.current.region, "どこか");
        assert_eq!(pair.current.element, Element::Earth);
        assert_eq!(pair.current.area, None);
    }
}
