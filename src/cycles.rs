use crate::models::{CycleObservation, PeriodInterval};

/// Output of cycle derivation. `dropped` counts adjacent pairs whose
/// computed length was non-positive (duplicate or out-of-order start dates);
/// those pairs produce no observation but the count is surfaced so the
/// caller can warn about suspect data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleDerivation {
    pub observations: Vec<CycleObservation>,
    pub dropped: usize,
}

/// Convert a from-sorted period log into cycle-length observations: one per
/// adjacent pair of periods, measuring start-to-start. Fewer than two
/// periods yields no observations. Input is not mutated.
pub fn derive_cycles(intervals: &[PeriodInterval]) -> CycleDerivation {
    let mut derivation = CycleDerivation::default();

    for pair in intervals.windows(2) {
        let cycle_length = (pair[1].from - pair[0].from).num_days();
        if cycle_length > 0 {
            derivation.observations.push(CycleObservation {
                start_date: pair[0].from,
                cycle_length,
            });
        } else {
            derivation.dropped += 1;
        }
    }

    derivation
}
