//! Calendar Classifier - 60-way natural classification from a birth date
//!
//! Two independent projections of the same day count: the phenomenon cycles
//! every day with period 12, the element advances once per 60-day block and
//! cycles with period 5. Together they span 12 x 5 = 60 types.

use chrono::{DateTime, NaiveDate};

use crate::domain::entities::NaturalClassification;
use crate::domain::errors::DiagnosisError;
use crate::domain::value_objects::{Element, Phenomenon};

/// Day zero of the classification
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Days per element block
pub const ELEMENT_BLOCK_DAYS: i64 = 60;

const PHENOMENON_COUNT: i64 = Phenomenon::ALL.len() as i64;
const ELEMENT_COUNT: i64 = Element::ALL.len() as i64;

/// Parse a birth date as a pure calendar date
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and RFC 3339 timestamps. A timestamp
/// contributes the calendar date in its own offset; no timezone conversion
/// is applied.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, DiagnosisError> {
    let trimmed = input.trim();

    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| DiagnosisError::invalid_date(input))
}

/// Whole calendar days from [`EPOCH`] to `date` (negative before the epoch)
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH).num_days()
}

/// Classify a birth date
///
/// Dates before the epoch use Euclidean division, so every date maps to a
/// valid phenomenon and element.
pub fn classify(birth_date: NaiveDate) -> NaturalClassification {
    let days = days_since_epoch(birth_date);

    let phenomenon_index = days.rem_euclid(PHENOMENON_COUNT) as usize;
    let element_index = days
        .div_euclid(ELEMENT_BLOCK_DAYS)
        .rem_euclid(ELEMENT_COUNT) as usize;

    let phenomenon = Phenomenon::from_index(phenomenon_index);
    let element = Element::from_index(element_index);

    NaturalClassification {
        natural_type: format!("{}の{}", element.symbol(), phenomenon.name()),
        element,
        phenomenon,
        position: phenomenon.position(),
        phenomenon_index,
        element_index,
        days_since_epoch: days,
        folder: element.folder().to_string(),
        file_name: format!("{}-{}", element.folder(), phenomenon.key()),
    }
}
