use chrono::NaiveDate;
use thiserror::Error;

/// Malformed input: a date label, an entry line, or a time range that does not
/// match the log format.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Invalid date label '{0}': expected 'YYYY-MM-DD (Weekday)'")]
    DateLabel(String),
    #[error("Invalid date '{0}': expected 'YYYY-MM-DD'")]
    Date(String),
    #[error("Missing category in line '{0}'")]
    MissingCategory(String),
    #[error("Invalid time range '{range}' in line '{line}': expected 'HHMM--HHMM'")]
    TimeRange { line: String, range: String },
    #[error("Invalid time '{time}' in line '{line}': expected 'HHMM'")]
    ClockTime { line: String, time: String },
    #[error("Date {0} appears more than once in the log")]
    DuplicateDate(NaiveDate),
}

/// The requested window has no matching boundary date in the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("No logged date on or after start date {0}")]
    StartAfterLastDate(NaiveDate),
    #[error("No logged date before end date {0}")]
    EndNotAfterFirstDate(NaiveDate),
}
