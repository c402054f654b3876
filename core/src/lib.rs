pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::{FormatError, RangeError};
pub use input::{parse_document, parse_line};
pub use model::bins::{BinnedDay, CategoryBin, CategoryTotals, DailyBins, DescriptionsByCategory};
pub use model::daily_log::{DailyLog, LogDocument, WindowedLog};
pub use model::entry::{ClockTime, LogEntry};
pub use repository::{LogRepository, YamlLogRepository, DEFAULT_LOG_FILE};
pub use time::{resolve_window, DateWindow, RelativeWindow};
pub use usecase::summary::{Summary, SummaryUseCase};
