use std::fmt;
use std::str::FromStr;

/// A wall-clock time written as `HHMM`, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(u32);

impl ClockTime {
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        let hours: u32 = s[..2].parse().map_err(|_| ())?;
        let minutes: u32 = s[2..].parse().map_err(|_| ())?;
        Ok(Self(60 * hours + minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.0 / 60, self.0 % 60)
    }
}

/// One line of a daily log: `<start>--<end> <category> [description...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub start: ClockTime,
    pub end: ClockTime,
    /// Raw category as written; normalized only when binning.
    pub category: String,
    pub description: String,
}

impl LogEntry {
    /// Elapsed hours between start and end. Not clamped: an end before the
    /// start yields a negative value.
    pub fn elapsed_hours(&self) -> f64 {
        (self.end.minutes() as f64 - self.start.minutes() as f64) / 60.0
    }
}
