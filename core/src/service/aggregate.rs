use std::collections::BTreeSet;

use crate::model::bins::{BinnedDay, CategoryTotals, DescriptionsByCategory};

pub fn build_hours_from_category(days: &[BinnedDay]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for day in days {
        for (category, bin) in &day.bins {
            *totals.entry(category.clone()).or_insert(0.0) += bin.total_hours;
        }
    }
    totals
}

pub fn build_desc_from_category(days: &[BinnedDay]) -> DescriptionsByCategory {
    let mut descriptions = DescriptionsByCategory::new();
    for day in days {
        for (category, bin) in &day.bins {
            descriptions
                .entry(category.clone())
                .or_default()
                .extend(bin.descriptions.iter().cloned());
        }
    }
    descriptions
}

/// Every category logged on any of the days, sorted.
pub fn all_categories(days: &[BinnedDay]) -> Vec<String> {
    days.iter()
        .flat_map(|d| d.bins.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
