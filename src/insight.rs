use crate::error::InsufficientDataError;
use crate::models::{CycleObservation, InsightRequest, SymptomLogEntry};

/// Assemble the normalized payload for the external insight generator.
///
/// Requires at least one cycle observation or one symptom log; an empty
/// request is rejected rather than dispatched. Observations are sorted
/// ascending by start date and logs most-recent-first, the order the
/// generator expects. Additional symptoms text passes through unmodified.
/// Pure assembly; no network call happens here.
pub fn build(
    cycles: &[CycleObservation],
    logs: &[SymptomLogEntry],
    additional_symptoms_text: Option<String>,
) -> Result<InsightRequest, InsufficientDataError> {
    if cycles.is_empty() && logs.is_empty() {
        return Err(InsufficientDataError);
    }

    let mut cycle_observations = cycles.to_vec();
    cycle_observations.sort_by_key(|c| c.start_date);

    let mut symptom_logs = logs.to_vec();
    symptom_logs.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(InsightRequest {
        cycle_observations,
        symptom_logs,
        additional_symptoms_text,
    })
}
