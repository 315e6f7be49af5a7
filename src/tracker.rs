use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cycles;
use crate::error::{AnalysisError, OverlapError};
use crate::insight;
use crate::models::{InsightRequest, PeriodInterval, RegularityAssessment, SymptomLogEntry, TrendSummary};
use crate::regularity;
use crate::symptoms;
use crate::validate::validate;

/// Everything derived from one analysis request over the current data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub assessment: RegularityAssessment,
    pub trends: Vec<TrendSummary>,
    pub request: InsightRequest,
    /// Adjacent period pairs whose cycle length came out non-positive and
    /// were excluded from the observations.
    pub dropped_observations: usize,
}

/// The raw collections the UI layer owns: recorded periods kept sorted
/// ascending by start date, and symptom logs kept most-recent-first.
/// Derived data is never stored here; every analysis recomputes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerData {
    pub periods: Vec<PeriodInterval>,
    pub symptom_logs: Vec<SymptomLogEntry>,
}

impl TrackerData {
    /// Record a new period. Rejected when it overlaps an existing record;
    /// otherwise inserted keeping the collection sorted by start date.
    pub fn add_period(&mut self, period: PeriodInterval) -> Result<(), OverlapError> {
        validate(&period, &self.periods)?;
        let at = self.periods.partition_point(|p| p.from < period.from);
        self.periods.insert(at, period);
        Ok(())
    }

    /// Delete a recorded period by id. Returns the removed record, or
    /// `None` when no record has that id.
    pub fn remove_period(&mut self, id: Uuid) -> Option<PeriodInterval> {
        let at = self.periods.iter().position(|p| p.id == id)?;
        Some(self.periods.remove(at))
    }

    /// Append a symptom log entry. Multiple entries may share a date; the
    /// collection stays sorted most-recent-first.
    pub fn add_log(&mut self, entry: SymptomLogEntry) {
        let at = self.symptom_logs.partition_point(|l| l.date >= entry.date);
        self.symptom_logs.insert(at, entry);
    }

    /// Run the full pipeline: derive cycles from the period log, classify
    /// regularity, aggregate symptom trends, and assemble the insight
    /// request. Fails when there is no data at all to analyze.
    pub fn analyze(&self, additional_symptoms_text: Option<String>) -> Result<Analysis, AnalysisError> {
        let derivation = cycles::derive_cycles(&self.periods);
        let assessment = regularity::classify(&derivation.observations)?;
        let trends = symptoms::aggregate(&self.symptom_logs, &self.periods);
        let request = insight::build(
            &derivation.observations,
            &self.symptom_logs,
            additional_symptoms_text,
        )?;

        Ok(Analysis {
            assessment,
            trends,
            request,
            dropped_observations: derivation.dropped,
        })
    }
}
