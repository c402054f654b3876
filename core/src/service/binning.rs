use tracing::warn;

use crate::model::bins::{BinnedDay, DailyBins};
use crate::model::daily_log::{DailyLog, WindowedLog};

pub const BREAK_CATEGORY: &str = "break";

pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Sums hours and collects descriptions per normalized category. Breaks are
/// dropped entirely.
pub fn bin_hours(day: &DailyLog) -> DailyBins {
    let mut bins = DailyBins::new();
    for entry in &day.entries {
        let category = normalize_category(&entry.category);
        if category == BREAK_CATEGORY {
            continue;
        }
        let hours = entry.elapsed_hours();
        if hours <= 0.0 {
            warn!(
                date = %day.date,
                start = %entry.start,
                end = %entry.end,
                category = %category,
                "entry has no positive duration"
            );
        }
        let bin = bins.entry(category).or_default();
        bin.total_hours += hours;
        bin.descriptions.push(entry.description.clone());
    }
    bins
}

pub fn build_hours_from_date(window: &WindowedLog<'_>) -> Vec<BinnedDay> {
    window
        .days()
        .iter()
        .map(|day| BinnedDay {
            date: day.date,
            bins: bin_hours(day),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_line;
    use chrono::NaiveDate;

    fn day(lines: &[&str]) -> DailyLog {
        DailyLog::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            lines.iter().map(|l| parse_line(l).unwrap()).collect(),
        )
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Code "), "code");
        assert_eq!(normalize_category("CODE"), "code");
        assert_eq!(normalize_category("code"), "code");
        assert_eq!(normalize_category(&normalize_category(" MeetingS ")), "meetings");
    }

    #[test]
    fn test_bin_hours_merges_case_variants() {
        let bins = bin_hours(&day(&[
            "0900--1000 Code parser",
            "1000--1030 CODE",
            "1030--1200 code tests",
        ]));
        assert_eq!(bins.len(), 1);
        assert_eq!(bins["code"].total_hours, 3.0);
        assert_eq!(bins["code"].descriptions, vec!["parser", "", "tests"]);
    }

    #[test]
    fn test_bin_hours_skips_breaks() {
        let bins = bin_hours(&day(&[
            "0900--1000 code",
            "1000--1030 Break coffee",
            "1030--1100 BREAK ",
            "1100--1200 admin email",
        ]));
        assert!(!bins.contains_key("break"));
        assert_eq!(bins["code"].total_hours, 1.0);
        assert_eq!(bins["admin"].total_hours, 1.0);
        assert_eq!(bins["admin"].descriptions, vec!["email"]);
    }

    #[test]
    fn test_bin_hours_keeps_negative_durations() {
        let bins = bin_hours(&day(&["0900--1000 code", "1300--1200 code typo"]));
        assert_eq!(bins["code"].total_hours, 0.0);
    }

    #[test]
    fn test_bin_totals_match_raw_durations() {
        let log = day(&[
            "0815--0900 admin",
            "0900--1045 code review",
            "1045--1100 break",
            "1100--1230 meetings sprint",
            "1330--1710 code",
        ]);
        let binned: f64 = bin_hours(&log).values().map(|b| b.total_hours).sum();
        let raw: f64 = log
            .entries
            .iter()
            .filter(|e| normalize_category(&e.category) != BREAK_CATEGORY)
            .map(|e| e.elapsed_hours())
            .sum();
        assert!((binned - raw).abs() < 1e-9);
    }
}
