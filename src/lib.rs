//! Cycle analytics engine for a PCOS wellness tracker.
//!
//! Pure, deterministic analysis of recorded menstrual periods and symptom
//! logs: overlap validation, cycle-length derivation, regularity
//! classification with next-period prediction, symptom trend aggregation,
//! and assembly of the normalized request handed to the external insight
//! generator. The engine holds no state; every derived value is recomputed
//! from the in-memory collections on each call. Persistence is a thin
//! storage port kept outside the analytics path.

pub mod cycles;
pub mod error;
pub mod insight;
pub mod models;
pub mod regularity;
pub mod storage;
pub mod symptoms;
pub mod tracker;
pub mod validate;

pub use cycles::{derive_cycles, CycleDerivation};
pub use error::{AnalysisError, DataIntegrityError, InsufficientDataError, OverlapError};
pub use insight::build;
pub use models::{
    Confidence, CycleObservation, InsightRequest, NextPeriod, PeriodInterval,
    RegularityAssessment, SymptomCategory, SymptomLogEntry, TrendSummary,
};
pub use regularity::classify;
pub use storage::{JsonFileStore, StoreError, TrackerStore};
pub use symptoms::aggregate;
pub use tracker::{Analysis, TrackerData};
pub use validate::validate;
