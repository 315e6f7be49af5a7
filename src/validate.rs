use crate::error::OverlapError;
use crate::models::PeriodInterval;

/// Check a candidate period against already-recorded ones. A candidate is
/// rejected when its range intersects any existing record in any way:
/// either of its endpoints falls inside an existing record, or an existing
/// record's start falls inside the candidate. Adjacent ranges sharing a day
/// count as overlapping.
///
/// Pure check; insertion into the sorted collection is the caller's job.
pub fn validate(
    candidate: &PeriodInterval,
    existing: &[PeriodInterval],
) -> Result<(), OverlapError> {
    debug_assert!(candidate.from <= candidate.to);

    for recorded in existing {
        let overlaps = (candidate.from >= recorded.from && candidate.from <= recorded.to)
            || (candidate.to >= recorded.from && candidate.to <= recorded.to)
            || (recorded.from >= candidate.from && recorded.from <= candidate.to);
        if overlaps {
            return Err(OverlapError {
                candidate: candidate.clone(),
                existing: recorded.clone(),
            });
        }
    }
    Ok(())
}
