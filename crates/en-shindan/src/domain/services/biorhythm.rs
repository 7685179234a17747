//! Biorhythm Engine - position within the 10-phase cycle
//!
//! The cycle is a run-length encoded ring of [`BiorhythmPhase::ALL`]; a day
//! count since birth is reduced modulo [`CYCLE_LENGTH`] and located in it.

use chrono::NaiveDate;

use crate::domain::entities::BiorhythmState;
use crate::domain::value_objects::{BiorhythmPhase, CYCLE_LENGTH};

/// Biorhythm state on `reference` for someone born on `birth_date`
///
/// A reference date before the birth date still lands inside the cycle.
pub fn phase_at(birth_date: NaiveDate, reference: NaiveDate) -> BiorhythmState {
    let total_days = reference.signed_duration_since(birth_date).num_days();
    let day_in_cycle = total_days.rem_euclid(i64::from(CYCLE_LENGTH)) as u32;
    state_for_day(day_in_cycle)
}

/// Locate a day within the cycle (`day_in_cycle` is taken modulo the cycle length)
///
/// A day equal to the cumulative length through phase k belongs to phase
/// k + 1 with zero days elapsed.
pub fn state_for_day(day_in_cycle: u32) -> BiorhythmState {
    let day_in_cycle = day_in_cycle % CYCLE_LENGTH;
    let mut accumulated = 0;

    for phase in BiorhythmPhase::ALL {
        let duration = phase.duration();
        if day_in_cycle < accumulated + duration {
            let days_into_phase = day_in_cycle - accumulated;
            return BiorhythmState {
                phase,
                energy: phase.energy().to_string(),
                progress: (days_into_phase * 100 / duration) as u8,
                days_into_phase,
                phase_duration: duration,
                day_in_cycle,
            };
        }
        accumulated += duration;
    }

    panic!(
        "biorhythm cycle accounting mismatch: day {} not covered by phases totalling {}",
        day_in_cycle, accumulated
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_is_start_of_cycle() {
        let state = phase_at(date(1990, 6, 15), date(1990, 6, 15));
        assert_eq!(state.phase, BiorhythmPhase::Shinsei);
        assert_eq!(state.energy, "始まり");
        assert_eq!(state.days_into_phase, 0);
        assert_eq!(state.progress, 0);
        assert_eq!(state.phase_duration, 32);
    }

    #[test]
    fn test_pinned_reference_date() {
        // 12419 days later, 12419 mod 335 = 24
        let state = phase_at(date(1990, 6, 15), date(2024, 6, 15));
        assert_eq!(state.day_in_cycle, 24);
        assert_eq!(state.phase, BiorhythmPhase::Shinsei);
        assert_eq!(state.days_into_phase, 24);
        assert_eq!(state.progress, 75);
    }

    #[test]
    fn test_boundary_belongs_to_next_phase() {
        let last_of_first = state_for_day(31);
        assert_eq!(last_of_first.phase, BiorhythmPhase::Shinsei);
        assert_eq!(last_of_first.days_into_phase, 31);
        assert_eq!(last_of_first.progress, 96);

        let boundary = phase_at(date(2000, 1, 1), date(2000, 2, 2));
        assert_eq!(boundary.day_in_cycle, 32);
        assert_eq!(boundary.phase, BiorhythmPhase::Hatten);
        assert_eq!(boundary.days_into_phase, 0);
    }

    #[test]
    fn test_every_boundary() {
        let mut accumulated = 0;
        for (i, phase) in BiorhythmPhase::ALL.iter().enumerate() {
            let state = state_for_day(accumulated);
            assert_eq!(state.phase, *phase, "boundary {}", i);
            assert_eq!(state.days_into_phase, 0);
            accumulated += phase.duration();
        }
        assert_eq!(accumulated, CYCLE_LENGTH);
    }

    #[test]
    fn test_last_day_of_cycle() {
        let state = state_for_day(CYCLE_LENGTH - 1);
        assert_eq!(state.phase, BiorhythmPhase::Junbi);
        assert_eq!(state.days_into_phase, 36);
        assert_eq!(state.progress, 97);
        assert_eq!(state_for_day(CYCLE_LENGTH).phase, BiorhythmPhase::Shinsei);
    }

    #[test]
    fn test_reference_before_birth_wraps() {
        let state = phase_at(date(2000, 1, 2), date(2000, 1, 1));
        assert_eq!(state.day_in_cycle, 334);
        assert_eq!(state.phase, BiorhythmPhase::Junbi);
    }

    proptest! {
        #[test]
        fn prop_state_is_consistent(day in 0u32..CYCLE_LENGTH) {
            let state = state_for_day(day);
            prop_assert_eq!(state.day_in_cycle, day);
            prop_assert!(state.days_into_phase < state.phase_duration);
            prop_assert!(state.progress < 100);
            prop_assert_eq!(state.phase_duration, state.phase.duration());
        }

        #[test]
        fn prop_cycle_repeats(offset in -50_000i64..50_000) {
            let birth = date(1980, 1, 1);
            let reference = birth + Duration::days(offset);
            let later = reference + Duration::days(i64::from(CYCLE_LENGTH));
            prop_assert_eq!(phase_at(birth, reference), phase_at(birth, later));
        }
    }
}
