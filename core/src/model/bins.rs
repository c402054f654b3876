use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Hours and descriptions for one category on one date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBin {
    pub total_hours: f64,
    pub descriptions: Vec<String>,
}

/// Category name to bin, for a single date. Keys iterate in sorted order.
pub type DailyBins = BTreeMap<String, CategoryBin>;

/// Accumulated hours per category across a window.
pub type CategoryTotals = BTreeMap<String, f64>;

/// Every description per category across a window, in date then entry order.
pub type DescriptionsByCategory = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq)]
pub struct BinnedDay {
    pub date: NaiveDate,
    pub bins: DailyBins,
}

impl BinnedDay {
    /// Hours across all categories of the day.
    pub fn total_hours(&self) -> f64 {
        self.bins.values().map(|b| b.total_hours).sum()
    }

    /// Hours for `category`, zero when the category was not logged that day.
    pub fn hours_for(&self, category: &str) -> f64 {
        self.bins.get(category).map(|b| b.total_hours).unwrap_or(0.0)
    }
}
