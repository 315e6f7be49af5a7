use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded menstrual period. Dates are calendar dates only (no
/// time-of-day, no timezone), so day-granularity comparison is structural.
///
/// Invariant: `to >= from`. The form layer rejects reversed ranges before a
/// record is created; [`PeriodInterval::new`] enforces it here as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodInterval {
    pub id: Uuid,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl PeriodInterval {
    /// Create a period record. Returns `None` when `to` precedes `from`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        if to < from {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            from,
            to,
        })
    }
}

/// One observed cycle: the start of a period and the number of days until
/// the next period started. Derived, never user-entered.
///
/// Invariant: `cycle_length > 0`. Derivation drops non-positive lengths
/// before they reach any consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CycleObservation {
    pub start_date: NaiveDate,
    pub cycle_length: i64,
}

/// A daily symptom log entry. All symptom fields are free text; an absent
/// field means the user recorded nothing for that category that day.
/// Multiple entries may share a date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomLogEntry {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_growth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_text: Option<String>,
}

/// Symptom categories tracked by the aggregator, in fixed priority order.
/// The enum order is the tie-break order for trend summaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymptomCategory {
    Mood,
    Skin,
    Pain,
    Discharge,
    HairGrowth,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 5] = [
        SymptomCategory::Mood,
        SymptomCategory::Skin,
        SymptomCategory::Pain,
        SymptomCategory::Discharge,
        SymptomCategory::HairGrowth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SymptomCategory::Mood => "mood",
            SymptomCategory::Skin => "skin",
            SymptomCategory::Pain => "pain",
            SymptomCategory::Discharge => "discharge",
            SymptomCategory::HairGrowth => "hair growth",
        }
    }
}

/// Per-category trend produced by the symptom aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendSummary {
    pub category: SymptomCategory,
    /// Number of log entries mentioning this category.
    pub occurrences: usize,
    /// Distinct days on which this category was logged.
    pub days_logged: usize,
    /// Of those days, how many fall in the week before a recorded period start.
    pub premenstrual_days: usize,
    pub note: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Predicted start of the next period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NextPeriod {
    Date(NaiveDate),
    Range {
        earliest: NaiveDate,
        latest: NaiveDate,
    },
    /// Not enough observations to predict.
    Unknown,
}

/// Result of classifying a cycle history. Recomputed on every analysis
/// request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegularityAssessment {
    pub is_regular: bool,
    pub summary: String,
    pub next_expected: NextPeriod,
    pub confidence: Confidence,
}

/// The normalized payload handed to the external insight generator.
/// Field names on the wire are `cycleObservations`, `symptomLogs` and
/// `additionalSymptomsText`; dates serialize as ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub cycle_observations: Vec<CycleObservation>,
    pub symptom_logs: Vec<SymptomLogEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_symptoms_text: Option<String>,
}
