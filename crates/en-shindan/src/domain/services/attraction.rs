//! Element Attraction Classifier - dominant element of the four quiz answers

use crate::domain::entities::{AttractionType, ElementCounts};
use crate::domain::value_objects::Element;

/// Suffix appended to the dominant element
pub const ATTRACTION_SUFFIX: &str = "縁型";

/// Classify four answers into an attraction type
///
/// The leader starts as (木, 0) and is replaced only by a strictly greater
/// count while scanning in canonical order, so ties go to the earlier
/// element and an all-empty tally yields 木.
pub fn classify(answers: [Option<Element>; 4]) -> AttractionType {
    let mut counts = ElementCounts::default();
    for element in answers.into_iter().flatten() {
        counts.increment(element);
    }

    let mut dominant = Element::ALL[0];
    let mut max_count = 0;
    for element in Element::ALL {
        let count = counts.get(element);
        if count > max_count {
            max_count = count;
            dominant = element;
        }
    }

    AttractionType {
        attraction_type: format!("{}{}", dominant.symbol(), ATTRACTION_SUFFIX),
        dominant_element: dominant,
        element_counts: counts,
    }
}

/// Classify raw answer strings; unrecognized values are non-votes
pub fn classify_answers(answers: [&str; 4]) -> AttractionType {
    classify(answers.map(|a| a.parse::<Element>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_majority_wins() {
        let result = classify_answers(["木", "木", "火", "水"]);
        assert_eq!(result.attraction_type, "木縁型");
        assert_eq!(result.dominant_element, Element::Wood);
        assert_eq!(
            result.element_counts,
            ElementCounts {
                wood: 2,
                fire: 1,
                earth: 0,
                metal: 0,
                water: 1
            }
        );
    }

    #[test]
    fn test_later_element_can_win() {
        let result = classify_answers(["水", "金", "水", "木"]);
        assert_eq!(result.attraction_type, "水縁型");
    }

    #[test]
    fn test_tie_goes_to_canonical_order() {
        assert_eq!(classify_answers(["水", "土", "水", "土"]).attraction_type, "土縁型");
        assert_eq!(classify_answers(["金", "火", "水", "土"]).attraction_type, "火縁型");
    }

    #[test]
    fn test_no_votes() {
        assert_eq!(classify([None; 4]).attraction_type, "木縁型");
        let result = classify_answers(["", "風", "wood?", "?"]);
        assert_eq!(result.attraction_type, "木縁型");
        assert_eq!(result.element_counts, ElementCounts::default());
    }

    #[test]
    fn test_partial_votes() {
        let result = classify([None, Some(Element::Metal), None, None]);
        assert_eq!(result.dominant_element, Element::Metal);
        assert_eq!(result.element_counts.metal, 1);
    }

    fn any_answer() -> impl Strategy<Value = Option<Element>> {
        prop_oneof![
            Just(None),
            (0usize..5).prop_map(|i| Some(Element::from_index(i))),
        ]
    }

    proptest! {
        #[test]
        fn prop_dominant_has_max_count_and_earliest_on_tie(
            answers in [any_answer(), any_answer(), any_answer(), any_answer()]
        ) {
            let result = classify(answers);
            let counts = result.element_counts;
            let max = Element::ALL.iter().map(|e| counts.get(*e)).max().unwrap_or(0);
            let expected = Element::ALL
                .into_iter()
                .find(|e| counts.get(*e) == max)
                .unwrap_or(Element::Wood);
            prop_assert_eq!(result.dominant_element, expected);
            let voted = answers.iter().flatten().count() as u8;
            let tallied: u8 = Element::ALL.iter().map(|e| counts.get(*e)).sum();
            prop_assert_eq!(voted, tallied);
        }
    }
}
