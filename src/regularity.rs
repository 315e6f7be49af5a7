use chrono::Duration;

use crate::error::DataIntegrityError;
use crate::models::{Confidence, CycleObservation, NextPeriod, RegularityAssessment};

/// Physiologically normal cycle length range, in days.
const MIN_REGULAR_LENGTH: i64 = 21;
const MAX_REGULAR_LENGTH: i64 = 35;
/// Maximum spread between the shortest and longest cycle for a history to
/// still count as regular.
const MAX_REGULAR_SPREAD: i64 = 7;
/// Below this many observations the confidence is always Low.
const MIN_OBSERVATIONS_FOR_CONFIDENCE: usize = 3;

/// Classify a cycle history as regular or irregular and predict the next
/// period start. Pure and idempotent; recomputed from scratch each call.
///
/// A non-positive length here means derivation was bypassed, which is a bug
/// in the caller, so this fails fast instead of classifying around it.
pub fn classify(cycles: &[CycleObservation]) -> Result<RegularityAssessment, DataIntegrityError> {
    if let Some(bad) = cycles.iter().find(|c| c.cycle_length <= 0) {
        return Err(DataIntegrityError {
            start_date: bad.start_date,
            cycle_length: bad.cycle_length,
        });
    }

    if cycles.is_empty() {
        return Ok(RegularityAssessment {
            is_regular: false,
            summary: "No complete cycles recorded yet, so regularity cannot be assessed. \
                      Log at least two periods to begin cycle analysis."
                .to_string(),
            next_expected: NextPeriod::Unknown,
            confidence: Confidence::Low,
        });
    }

    let lengths: Vec<i64> = cycles.iter().map(|c| c.cycle_length).collect();
    let min = *lengths.iter().min().unwrap();
    let max = *lengths.iter().max().unwrap();
    let spread = max - min;
    let in_range = lengths
        .iter()
        .all(|&len| (MIN_REGULAR_LENGTH..=MAX_REGULAR_LENGTH).contains(&len));
    let is_regular = in_range && spread <= MAX_REGULAR_SPREAD;

    // The most recent recorded period started one cycle after the last
    // observation's start; predictions are anchored there.
    let last = cycles.last().unwrap();
    let anchor = last.start_date + Duration::days(last.cycle_length);

    let next_expected = if spread <= MAX_REGULAR_SPREAD {
        NextPeriod::Date(anchor + Duration::days(median(&lengths)))
    } else {
        NextPeriod::Range {
            earliest: anchor + Duration::days(min),
            latest: anchor + Duration::days(max),
        }
    };

    let confidence = if cycles.len() < MIN_OBSERVATIONS_FOR_CONFIDENCE {
        Confidence::Low
    } else if is_regular {
        Confidence::High
    } else {
        Confidence::Medium
    };

    let mut summary = if is_regular {
        format!(
            "Your cycles appear regular: lengths between {min} and {max} days, \
             varying by {spread} day(s)."
        )
    } else if !in_range {
        format!(
            "Your cycles show irregularity: lengths between {min} and {max} days \
             fall outside the typical {MIN_REGULAR_LENGTH}-{MAX_REGULAR_LENGTH} day range."
        )
    } else {
        format!(
            "Your cycles show irregularity: lengths vary by {spread} days, \
             more than the typical {MAX_REGULAR_SPREAD}-day variation."
        )
    };
    if cycles.len() < MIN_OBSERVATIONS_FOR_CONFIDENCE {
        summary.push_str(&format!(
            " With only {} recorded cycle(s), regularity is hard to assess; \
             this is a best-effort reading.",
            cycles.len()
        ));
    }

    Ok(RegularityAssessment {
        is_regular,
        summary,
        next_expected,
        confidence,
    })
}

/// Median of a non-empty set of cycle lengths. For an even count, the mean
/// of the middle pair rounded to the nearest whole day.
fn median(lengths: &[i64]) -> i64 {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        ((sorted[mid - 1] + sorted[mid]) as f64 / 2.0).round() as i64
    }
}
