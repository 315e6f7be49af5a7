use chrono::NaiveDate;

use crate::models::PeriodInterval;

/// A candidate period conflicts with an already-recorded one. Recoverable:
/// surfaced to the caller so the user can correct the range. Never merged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "period {} to {} overlaps recorded period {} to {}",
    candidate.from, candidate.to, existing.from, existing.to
)]
pub struct OverlapError {
    pub candidate: PeriodInterval,
    pub existing: PeriodInterval,
}

/// A non-positive cycle length reached the classifier. Derivation filters
/// these, so this signals an upstream bug; fatal to the operation, no retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("non-positive cycle length {cycle_length} for cycle starting {start_date}")]
pub struct DataIntegrityError {
    pub start_date: NaiveDate,
    pub cycle_length: i64,
}

/// Not enough data to build a meaningful insight request. Expected in normal
/// use for first-time users; surfaced as a "log more data" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("at least one cycle observation or symptom log is required")]
pub struct InsufficientDataError;

/// Any failure of the full analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),
    #[error(transparent)]
    InsufficientData(#[from] InsufficientDataError),
}
