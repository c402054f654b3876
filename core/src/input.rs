use crate::error::FormatError;
use crate::model::daily_log::{DailyLog, LogDocument};
use crate::model::entry::{ClockTime, LogEntry};
use crate::time::parse_date_label;

const RANGE_SEPARATOR: &str = "--";

/// Splits a line into time range, category and description. The description
/// is everything after the category, leading whitespace removed.
pub fn line_split(line: &str) -> Result<(&str, &str, &str), FormatError> {
    let missing = || FormatError::MissingCategory(line.to_string());
    let (time_range, rest) = next_token(line).ok_or_else(missing)?;
    let (category, description) = next_token(rest).ok_or_else(missing)?;
    Ok((time_range, category, description))
}

fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(i) => Some((&s[..i], s[i..].trim_start())),
        None => Some((s, "")),
    }
}

/// Splits `HHMM--HHMM` into its start and end strings.
pub fn parse_time_range<'a>(line: &str, time_range: &'a str) -> Result<(&'a str, &'a str), FormatError> {
    match time_range.split_once(RANGE_SEPARATOR) {
        Some((start, end)) if !end.contains(RANGE_SEPARATOR) => Ok((start, end)),
        _ => Err(FormatError::TimeRange {
            line: line.to_string(),
            range: time_range.to_string(),
        }),
    }
}

fn parse_clock(line: &str, time: &str) -> Result<ClockTime, FormatError> {
    time.parse().map_err(|_| FormatError::ClockTime {
        line: line.to_string(),
        time: time.to_string(),
    })
}

pub fn parse_line(line: &str) -> Result<LogEntry, FormatError> {
    let (time_range, category, description) = line_split(line)?;
    let (start, end) = parse_time_range(line, time_range)?;
    Ok(LogEntry {
        start: parse_clock(line, start)?,
        end: parse_clock(line, end)?,
        category: category.to_string(),
        description: description.to_string(),
    })
}

pub fn parse_day<S: AsRef<str>>(label: &str, lines: &[S]) -> Result<DailyLog, FormatError> {
    let date = parse_date_label(label)?;
    let entries = lines
        .iter()
        .map(|l| parse_line(l.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DailyLog::new(date, entries))
}

/// Validates a decoded `label -> lines` mapping into a date-sorted document.
pub fn parse_document<I, S>(raw: I) -> Result<LogDocument, FormatError>
where
    I: IntoIterator<Item = (String, Vec<S>)>,
    S: AsRef<str>,
{
    let days = raw
        .into_iter()
        .map(|(label, lines)| parse_day(&label, &lines))
        .collect::<Result<Vec<_>, _>>()?;
    LogDocument::from_days(days)
}
