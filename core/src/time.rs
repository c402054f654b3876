use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, Duration, NaiveDate};

use crate::error::FormatError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parses a document key such as `2024-01-01 (Monday)`. The weekday must be a
/// full name (any case) but is not checked against the date.
pub fn parse_date_label(label: &str) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::DateLabel(label.to_string());
    let (date, weekday) = label
        .trim()
        .strip_suffix(')')
        .and_then(|s| s.split_once(" ("))
        .ok_or_else(invalid)?;
    if !WEEKDAY_NAMES.iter().any(|name| name.eq_ignore_ascii_case(weekday)) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(date, ISO_DATE_FORMAT).map_err(|_| invalid())
}

pub fn parse_iso_date(input: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).map_err(|_| FormatError::Date(input.to_string()))
}

/// Half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.format(ISO_DATE_FORMAT), self.end.format(ISO_DATE_FORMAT))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeWindow {
    LastWeek,
    Week,
    Yesterday,
    Today,
}

impl FromStr for RelativeWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "last_week" => Ok(RelativeWindow::LastWeek),
            "week" => Ok(RelativeWindow::Week),
            "yesterday" => Ok(RelativeWindow::Yesterday),
            "today" => Ok(RelativeWindow::Today),
            _ => Err(anyhow!(
                "Unknown window '{}': expected one of last_week, week, yesterday, today",
                s
            )),
        }
    }
}

impl RelativeWindow {
    pub fn resolve(self, today: NaiveDate) -> DateWindow {
        match self {
            RelativeWindow::LastWeek => last_week(today),
            RelativeWindow::Week => this_week(today),
            RelativeWindow::Yesterday => yesterday(today),
            RelativeWindow::Today => self::today(today),
        }
    }
}

/// The Sunday strictly before `today`: a Sunday maps to the Sunday a week earlier.
pub fn last_sunday(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_monday() as i64 + 1)
}

pub fn this_week(today: NaiveDate) -> DateWindow {
    DateWindow::new(last_sunday(today), today + Duration::days(1))
}

pub fn last_week(today: NaiveDate) -> DateWindow {
    let sunday = last_sunday(today);
    DateWindow::new(sunday - Duration::days(7), sunday)
}

pub fn yesterday(today: NaiveDate) -> DateWindow {
    DateWindow::new(today - Duration::days(1), today)
}

pub fn today(today: NaiveDate) -> DateWindow {
    DateWindow::new(today, today + Duration::days(1))
}

/// Turns the positional window arguments into a date range.
///
/// - no argument: the current week
/// - one argument: a named window (`last_week`, `week`, `yesterday`, `today`)
/// - two arguments: explicit `YYYY-MM-DD` start and end
pub fn resolve_window<S: AsRef<str>>(args: &[S], today: NaiveDate) -> Result<DateWindow> {
    match args {
        [] => Ok(this_week(today)),
        [name] => Ok(name.as_ref().parse::<RelativeWindow>()?.resolve(today)),
        [start, end] => Ok(DateWindow::new(
            parse_iso_date(start.as_ref())?,
            parse_iso_date(end.as_ref())?,
        )),
        _ => bail!("Expected at most 2 window arguments, got {}", args.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_label() {
        assert_eq!(parse_date_label("2024-01-01 (Monday)").unwrap(), date(2024, 1, 1));
        assert_eq!(parse_date_label("2024-02-29 (Thursday)").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date_label("2024-01-01 (monday)").unwrap(), date(2024, 1, 1));
        assert!(parse_date_label("2024-01-01").is_err());
        assert!(parse_date_label("01/01/2024 (Monday)").is_err());
        assert!(parse_date_label("2024-02-30 (Friday)").is_err());
    }

    #[test]
    fn test_parse_date_label_ignores_weekday_mismatch() {
        // 2024-01-01 is a Monday
        assert_eq!(parse_date_label("2024-01-01 (Tuesday)").unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn test_parse_date_label_rejects_abbreviated_weekday() {
        assert_eq!(
            parse_date_label("2024-01-01 (Mon)").unwrap_err(),
            FormatError::DateLabel("2024-01-01 (Mon)".to_string())
        );
        assert!(parse_date_label("2024-01-01 (Funday)").is_err());
        assert!(parse_date_label("2024-01-01 Monday").is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-01-15").unwrap(), date(2024, 1, 15));
        assert_eq!(parse_iso_date("tomorrow").unwrap_err(), FormatError::Date("tomorrow".to_string()));
    }

    #[test]
    fn test_last_sunday() {
        // 2024-01-10 is a Wednesday
        assert_eq!(last_sunday(date(2024, 1, 10)), date(2024, 1, 7));
        assert_eq!(last_sunday(date(2024, 1, 8)), date(2024, 1, 7));
        // on a Sunday, the previous one
        assert_eq!(last_sunday(date(2024, 1, 14)), date(2024, 1, 7));
    }

    #[test]
    fn test_relative_windows() {
        let wed = date(2024, 1, 10);
        assert_eq!(this_week(wed), DateWindow::new(date(2024, 1, 7), date(2024, 1, 11)));
        assert_eq!(last_week(wed), DateWindow::new(date(2023, 12, 31), date(2024, 1, 7)));
        assert_eq!(yesterday(wed), DateWindow::new(date(2024, 1, 9), wed));
        assert_eq!(today(wed), DateWindow::new(wed, date(2024, 1, 11)));
    }

    #[test]
    fn test_resolve_window() {
        let wed = date(2024, 1, 10);
        let none: [&str; 0] = [];
        assert_eq!(resolve_window(&none, wed).unwrap(), this_week(wed));
        assert_eq!(resolve_window(&["yesterday"], wed).unwrap(), yesterday(wed));
        assert_eq!(resolve_window(&["last_week"], wed).unwrap(), last_week(wed));
        assert_eq!(
            resolve_window(&["2024-01-01", "2024-01-15"], wed).unwrap(),
            DateWindow::new(date(2024, 1, 1), date(2024, 1, 15))
        );

        assert!(resolve_window(&["fortnight"], wed).is_err());
        assert!(resolve_window(&["2024-01-01", "soon"], wed).is_err());
        assert!(resolve_window(&["a", "b", "c"], wed).is_err());
    }

    #[test]
    fn test_window_display() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 15));
        assert_eq!(window.to_string(), "[2024-01-01, 2024-01-15)");
    }
}
