use anyhow::Result;
use tracing::{debug, instrument};

use crate::model::bins::{BinnedDay, CategoryTotals, DescriptionsByCategory};
use crate::repository::LogRepository;
use crate::service::aggregate::{all_categories, build_desc_from_category, build_hours_from_category};
use crate::service::binning::build_hours_from_date;
use crate::service::window::select_window;
use crate::time::DateWindow;

/// Everything the reports need for one window.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub window: DateWindow,
    pub days: Vec<BinnedDay>,
    pub hours_from_category: CategoryTotals,
    pub desc_from_category: DescriptionsByCategory,
}

impl Summary {
    pub fn from_days(window: DateWindow, days: Vec<BinnedDay>) -> Self {
        let hours_from_category = build_hours_from_category(&days);
        let desc_from_category = build_desc_from_category(&days);
        Self {
            window,
            days,
            hours_from_category,
            desc_from_category,
        }
    }

    pub fn categories(&self) -> Vec<String> {
        all_categories(&self.days)
    }

    pub fn grand_total(&self) -> f64 {
        self.days.iter().map(|d| d.total_hours()).sum()
    }
}

pub struct SummaryUseCase<'a, R: LogRepository> {
    repo: &'a R,
}

impl<'a, R: LogRepository> SummaryUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    #[instrument(skip_all, fields(window = %window))]
    pub fn summarize(&self, window: DateWindow) -> Result<Summary> {
        let doc = self.repo.load()?;
        let windowed = select_window(&doc, window)?;
        let days = build_hours_from_date(&windowed);
        let summary = Summary::from_days(window, days);
        debug!(
            days = summary.days.len(),
            categories = summary.hours_from_category.len(),
            "summarized window"
        );
        Ok(summary)
    }
}
