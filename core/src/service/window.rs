use chrono::NaiveDate;
use tracing::debug;

use crate::error::RangeError;
use crate::model::daily_log::{LogDocument, WindowedLog};
use crate::time::DateWindow;

/// Index of the leftmost date `>= start`. Errors when every date is earlier.
pub fn find_leftmost_index(dates: &[NaiveDate], start: NaiveDate) -> Result<usize, RangeError> {
    let i = dates.partition_point(|d| *d < start);
    if i != dates.len() {
        Ok(i)
    } else {
        Err(RangeError::StartAfterLastDate(start))
    }
}

/// One past the rightmost date `< end`. Errors when no date precedes `end`.
pub fn find_rightmost_index(dates: &[NaiveDate], end: NaiveDate) -> Result<usize, RangeError> {
    let i = dates.partition_point(|d| *d < end);
    if i != 0 {
        Ok(i)
    } else {
        Err(RangeError::EndNotAfterFirstDate(end))
    }
}

/// Selects the days of `doc` inside `[window.start, window.end)`.
///
/// Both boundaries must match a logged date: a start past the last date, or an
/// end on or before the first date, is a [RangeError] rather than an empty
/// window. A start after the end, with both boundaries matched, yields an
/// empty window.
pub fn select_window(doc: &LogDocument, window: DateWindow) -> Result<WindowedLog<'_>, RangeError> {
    let dates: Vec<NaiveDate> = doc.dates().collect();
    let start = find_leftmost_index(&dates, window.start)?;
    let stop = find_rightmost_index(&dates, window.end)?;
    debug!(%window, start, stop, "selected window");

    let days = doc.days();
    Ok(WindowedLog::new(if start < stop { &days[start..stop] } else { &days[..0] }))
}
