//! Name Acoustic Analyzer - bond type from the sound of a romanized name
//!
//! Five additive rules score the three bond types; the highest total wins.

use std::collections::BTreeSet;

use crate::domain::entities::{BondScores, NameAnalysis, NameDetails};
use crate::domain::value_objects::NameBondType;

/// Tie-break candidates, checked in order against the max score.
/// 結縁 is the fallback when neither reaches it.
const TIE_BREAK_ORDER: [NameBondType; 2] = [NameBondType::Shinen, NameBondType::Kouen];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Analyze a romanized full name
///
/// Only ASCII letters take part; anything else is ignored. An empty name is
/// valid and yields a vowel ratio of 0.
pub fn analyze(first_name: &str, last_name: &str) -> NameAnalysis {
    let letters: Vec<char> = first_name
        .chars()
        .chain(last_name.chars())
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let name_length = letters.len();
    let vowel_count = letters.iter().filter(|c| is_vowel(**c)).count();
    let consonant_count = name_length - vowel_count;
    let unique_consonants = letters
        .iter()
        .filter(|c| !is_vowel(**c))
        .collect::<BTreeSet<_>>()
        .len();
    let has_repeat = letters.windows(2).any(|w| w[0] == w[1]);
    let starts_with_vowel = letters.first().is_some_and(|c| is_vowel(*c));
    let vowel_ratio = if name_length > 0 {
        vowel_count as f64 / name_length as f64
    } else {
        0.0
    };

    let mut scores = BondScores::default();

    // 1: vowel ratio
    if vowel_ratio > 0.5 {
        scores.add(NameBondType::Kouen, 3);
    } else if vowel_ratio > 0.35 {
        scores.add(NameBondType::Ketsuen, 2);
    } else {
        scores.add(NameBondType::Shinen, 3);
    }

    // 2: consonant variety
    if unique_consonants > 5 {
        scores.add(NameBondType::Kouen, 2);
    } else if unique_consonants > 3 {
        scores.add(NameBondType::Ketsuen, 2);
    } else {
        scores.add(NameBondType::Shinen, 2);
    }

    // 3: length
    if name_length > 10 {
        scores.add(NameBondType::Kouen, 2);
    } else if name_length > 6 {
        scores.add(NameBondType::Ketsuen, 2);
    } else {
        scores.add(NameBondType::Shinen, 2);
    }

    // 4: repeated sound
    if has_repeat {
        scores.add(NameBondType::Shinen, 2);
    }

    // 5: opening vowel
    if starts_with_vowel {
        scores.add(NameBondType::Kouen, 1);
    }

    NameAnalysis {
        bond_type: resolve(&scores),
        scores,
        details: NameDetails {
            vowel_count,
            consonant_count,
            name_length,
            vowel_ratio: (vowel_ratio * 100.0).round() / 100.0,
            unique_consonants,
            has_repeat,
            starts_with_vowel,
        },
    }
}

/// Pick the winning bond type: first candidate in [`TIE_BREAK_ORDER`] whose
/// score equals the max, else 結縁.
pub fn resolve(scores: &BondScores) -> NameBondType {
    let max = scores.max();
    TIE_BREAK_ORDER
        .into_iter()
        .find(|bond| scores.get(*bond) == max)
        .unwrap_or(NameBondType::Ketsuen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(ketsuen: u32, shinen: u32, kouen: u32) -> BondScores {
        BondScores {
            ketsuen,
            shinen,
            kouen,
        }
    }

    #[test]
    fn test_anna_lee() {
        let result = analyze("Anna", "Lee");
        assert_eq!(result.scores, scores(2, 4, 4));
        assert_eq!(result.bond_type, NameBondType::Shinen);
        assert_eq!(result.details.name_length, 7);
        assert_eq!(result.details.vowel_count, 4);
        assert_eq!(result.details.consonant_count, 3);
        assert_eq!(result.details.unique_consonants, 2);
        assert_eq!(result.details.vowel_ratio, 0.57);
        assert!(result.details.has_repeat);
        assert!(result.details.starts_with_vowel);
    }

    #[test]
    fn test_ketsuen_wins_outright() {
        // "kenjisato": ratio 4/9, consonants {k,n,j,s,t}, length 9
        let result = analyze("Kenji", "Sato");
        assert_eq!(result.scores, scores(6, 0, 0));
        assert_eq!(result.bond_type, NameBondType::Ketsuen);
    }

    #[test]
    fn test_kouen_wins_outright() {
        // "aikoueda": ratio 6/8, consonants {k,d}, length 8, vowel start
        let result = analyze("Aiko", "Ueda");
        assert_eq!(result.scores, scores(2, 2, 4));
        assert_eq!(result.bond_type, NameBondType::Kouen);
    }

    #[test]
    fn test_ketsuen_shinen_tie_goes_to_shinen() {
        // "nannanan": ratio 3/8, consonants {n}, length 8, repeat
        let result = analyze("Nanna", "Nan");
        assert_eq!(result.scores, scores(4, 4, 0));
        assert_eq!(result.bond_type, NameBondType::Shinen);
    }

    #[test]
    fn test_long_name_scores_kouen() {
        // "christopherbrown": 11+ letters, 7 distinct consonants
        let result = analyze("Christopher", "Brown");
        assert_eq!(result.details.name_length, 16);
        assert_eq!(result.scores.kouen, 4);
        assert_eq!(result.scores.shinen, 3);
        assert_eq!(result.bond_type, NameBondType::Kouen);
    }

    #[test]
    fn test_empty_name() {
        let result = analyze("", "");
        assert_eq!(result.details.vowel_ratio, 0.0);
        assert_eq!(result.details.name_length, 0);
        assert!(!result.details.starts_with_vowel);
        assert_eq!(result.scores, scores(0, 7, 0));
        assert_eq!(result.bond_type, NameBondType::Shinen);
    }

    #[test]
    fn test_case_and_non_letters_ignored() {
        assert_eq!(analyze("ANNA", "lee"), analyze("anna", "LEE"));
        assert_eq!(analyze("An-na", "Lee!"), analyze("Anna", "Lee"));
    }

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(resolve(&scores(3, 3, 3)), NameBondType::Shinen);
        assert_eq!(resolve(&scores(3, 1, 3)), NameBondType::Kouen);
        assert_eq!(resolve(&scores(3, 1, 2)), NameBondType::Ketsuen);
        assert_eq!(resolve(&scores(0, 0, 0)), NameBondType::Shinen);
    }
}
