use chrono::NaiveDate;

use crate::error::FormatError;
use crate::model::entry::LogEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub entries: Vec<LogEntry>,
}

impl DailyLog {
    pub fn new(date: NaiveDate, entries: Vec<LogEntry>) -> Self {
        Self { date, entries }
    }
}

/// Every logged day, ordered by strictly increasing date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogDocument {
    days: Vec<DailyLog>,
}

impl LogDocument {
    /// Sorts the days by date. Two days on the same date are rejected.
    pub fn from_days(mut days: Vec<DailyLog>) -> Result<Self, FormatError> {
        days.sort_by_key(|d| d.date);
        if let Some(pair) = days.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(FormatError::DuplicateDate(pair[0].date));
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> &[DailyLog] {
        &self.days
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|d| d.date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// A contiguous run of days borrowed from a [LogDocument].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowedLog<'a> {
    days: &'a [DailyLog],
}

impl<'a> WindowedLog<'a> {
    pub fn new(days: &'a [DailyLog]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &'a [DailyLog] {
        self.days
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + 'a {
        self.days.iter().map(|d| d.date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
