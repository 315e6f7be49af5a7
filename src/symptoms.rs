use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{PeriodInterval, SymptomCategory, SymptomLogEntry, TrendSummary};

/// Days before a period start that count as premenstrual.
const PREMENSTRUAL_WINDOW_DAYS: i64 = 7;

/// Fold a symptom log history into per-category trend summaries.
///
/// Each category gets an occurrence count, a distinct-day count and a note
/// describing whether the symptom clusters in the week before recorded
/// period starts. Entries whose field is absent or blank are excluded from
/// that category, not counted as negative evidence. Output is sorted by
/// descending occurrences, ties broken by the fixed category priority order.
pub fn aggregate(logs: &[SymptomLogEntry], periods: &[PeriodInterval]) -> Vec<TrendSummary> {
    let total_days: BTreeSet<NaiveDate> = logs.iter().map(|log| log.date).collect();

    let mut period_starts: Vec<NaiveDate> = periods.iter().map(|p| p.from).collect();
    period_starts.sort_unstable();

    let mut trends: Vec<TrendSummary> = SymptomCategory::ALL
        .iter()
        .map(|&category| summarize(category, logs, &period_starts, total_days.len()))
        .collect();

    trends.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then(a.category.cmp(&b.category))
    });
    trends
}

fn summarize(
    category: SymptomCategory,
    logs: &[SymptomLogEntry],
    period_starts: &[NaiveDate],
    total_days: usize,
) -> TrendSummary {
    let mut occurrences = 0;
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    for log in logs {
        if field_for(log, category).is_some_and(|text| !text.trim().is_empty()) {
            occurrences += 1;
            days.insert(log.date);
        }
    }

    let premenstrual_days = days
        .iter()
        .filter(|&&day| is_premenstrual(day, period_starts))
        .count();

    let note = if days.is_empty() {
        format!("{} was not logged in this history", category.label())
    } else {
        let base = format!(
            "{} logged on {} of {} days",
            category.label(),
            days.len(),
            total_days
        );
        if period_starts.is_empty() {
            format!("{base}; no period data to correlate against")
        } else if premenstrual_days * 2 > days.len() {
            format!("{base}, concentrated in the week preceding recorded period starts")
        } else {
            format!("{base}, spread across the cycle")
        }
    };

    TrendSummary {
        category,
        occurrences,
        days_logged: days.len(),
        premenstrual_days,
        note,
    }
}

fn field_for(log: &SymptomLogEntry, category: SymptomCategory) -> Option<&str> {
    match category {
        SymptomCategory::Mood => log.mood.as_deref(),
        SymptomCategory::Skin => log.skin.as_deref(),
        SymptomCategory::Pain => log.pain.as_deref(),
        SymptomCategory::Discharge => log.discharge.as_deref(),
        SymptomCategory::HairGrowth => log.hair_growth.as_deref(),
    }
}

/// A day is premenstrual when some recorded period starts 1 to 7 days after it.
fn is_premenstrual(day: NaiveDate, sorted_starts: &[NaiveDate]) -> bool {
    let next = sorted_starts.partition_point(|&start| start <= day);
    sorted_starts
        .get(next)
        .is_some_and(|&start| (start - day).num_days() <= PREMENSTRUAL_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(day: &str) -> SymptomLogEntry {
        SymptomLogEntry {
            date: date(day),
            ..Default::default()
        }
    }

    fn interval(from: &str, to: &str) -> PeriodInterval {
        PeriodInterval::new(date(from), date(to)).unwrap()
    }

    #[test]
    fn counts_only_present_fields() {
        let logs = vec![
            SymptomLogEntry {
                mood: Some("low".into()),
                pain: Some("cramps".into()),
                ..entry("2024-03-01")
            },
            SymptomLogEntry {
                mood: Some("irritable".into()),
                skin: Some("  ".into()),
                ..entry("2024-03-02")
            },
        ];
        let trends = aggregate(&logs, &[]);

        let mood = trends.iter().find(|t| t.category == SymptomCategory::Mood);
        assert_eq!(mood.unwrap().occurrences, 2);
        let pain = trends.iter().find(|t| t.category == SymptomCategory::Pain);
        assert_eq!(pain.unwrap().occurrences, 1);
        // Blank text counts as missing.
        let skin = trends.iter().find(|t| t.category == SymptomCategory::Skin);
        assert_eq!(skin.unwrap().occurrences, 0);
    }

    #[test]
    fn all_categories_present_and_sorted_by_frequency_then_priority() {
        let logs = vec![
            SymptomLogEntry {
                pain: Some("cramps".into()),
                hair_growth: Some("noticed more".into()),
                ..entry("2024-03-01")
            },
            SymptomLogEntry {
                pain: Some("headache".into()),
                ..entry("2024-03-02")
            },
        ];
        let trends = aggregate(&logs, &[]);
        assert_eq!(trends.len(), 5);

        let order: Vec<SymptomCategory> = trends.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![
                SymptomCategory::Pain,
                SymptomCategory::HairGrowth,
                SymptomCategory::Mood,
                SymptomCategory::Skin,
                SymptomCategory::Discharge,
            ]
        );
    }

    #[test]
    fn duplicate_day_entries_count_once_toward_days_logged() {
        let logs = vec![
            SymptomLogEntry {
                mood: Some("low".into()),
                ..entry("2024-03-01")
            },
            SymptomLogEntry {
                mood: Some("better later".into()),
                ..entry("2024-03-01")
            },
        ];
        let trends = aggregate(&logs, &[]);
        let mood = trends
            .iter()
            .find(|t| t.category == SymptomCategory::Mood)
            .unwrap();
        assert_eq!(mood.occurrences, 2);
        assert_eq!(mood.days_logged, 1);
    }

    #[test]
    fn premenstrual_clustering_noted() {
        let periods = vec![interval("2024-03-10", "2024-03-14")];
        let logs = vec![
            SymptomLogEntry {
                mood: Some("low".into()),
                ..entry("2024-03-04")
            },
            SymptomLogEntry {
                mood: Some("tense".into()),
                ..entry("2024-03-07")
            },
            SymptomLogEntry {
                mood: Some("fine".into()),
                ..entry("2024-03-20")
            },
        ];
        let trends = aggregate(&logs, &periods);
        let mood = trends
            .iter()
            .find(|t| t.category == SymptomCategory::Mood)
            .unwrap();
        assert_eq!(mood.premenstrual_days, 2);
        assert!(mood.note.contains("week preceding"));
    }

    #[test]
    fn day_of_period_start_is_not_premenstrual() {
        let starts = vec![date("2024-03-10")];
        assert!(is_premenstrual(date("2024-03-03"), &starts));
        assert!(is_premenstrual(date("2024-03-09"), &starts));
        assert!(!is_premenstrual(date("2024-03-10"), &starts));
        assert!(!is_premenstrual(date("2024-03-02"), &starts));
    }

    #[test]
    fn no_period_data_notes_missing_correlation() {
        let logs = vec![SymptomLogEntry {
            skin: Some("acne".into()),
            ..entry("2024-03-01")
        }];
        let trends = aggregate(&logs, &[]);
        let skin = trends
            .iter()
            .find(|t| t.category == SymptomCategory::Skin)
            .unwrap();
        assert!(skin.note.contains("no period data"));
    }
}
