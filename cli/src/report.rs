use std::fmt::{self, Write};

use hoursum_core::service::aggregate::all_categories;
use hoursum_core::{BinnedDay, CategoryTotals, DescriptionsByCategory, Summary};

const INDENT: &str = "    ";
const CATEGORY_WIDTH: usize = 22;
const CELL_RULE: &str = "-----";

/// Dates across, categories down, with a total column and a total row.
pub fn write_hours_table(out: &mut impl Write, days: &[BinnedDay], totals: &CategoryTotals) -> fmt::Result {
    let margin = " ".repeat(CATEGORY_WIDTH + 2);

    write!(out, "{}", margin)?;
    for day in days {
        write!(out, "{} ", day.date.format("%m-%d"))?;
    }
    writeln!(out, "Total")?;

    write!(out, "{}", margin)?;
    for _ in days {
        write!(out, "{} ", CELL_RULE)?;
    }
    writeln!(out, "{}", CELL_RULE)?;

    for category in all_categories(days) {
        write!(out, "{:<width$}: ", category, width = CATEGORY_WIDTH)?;
        for day in days {
            write!(out, "{:5.2} ", day.hours_for(&category))?;
        }
        writeln!(out, "{:5.2}", totals.get(&category).copied().unwrap_or(0.0))?;
    }

    write!(out, "{:<width$}: ", "Total", width = CATEGORY_WIDTH)?;
    let mut grand_total = 0.0;
    for day in days {
        let total = day.total_hours();
        grand_total += total;
        write!(out, "{:5.2} ", total)?;
    }
    writeln!(out, "{:5.2}", grand_total)
}

/// Each category followed by its non-blank descriptions.
pub fn write_descriptions(out: &mut impl Write, descriptions: &DescriptionsByCategory) -> fmt::Result {
    for (category, lines) in descriptions {
        writeln!(out)?;
        writeln!(out, "{}", category)?;
        for line in lines.iter().filter(|l| !l.trim().is_empty()) {
            writeln!(out, "- {}", line)?;
        }
    }
    Ok(())
}

pub fn write_daily_listing(out: &mut impl Write, days: &[BinnedDay]) -> fmt::Result {
    for day in days {
        writeln!(out, "{}", day.date.format("%Y-%m-%d (%A):"))?;
        for (category, bin) in &day.bins {
            writeln!(out, "{}{:5.2} {}", INDENT, bin.total_hours, category)?;
        }
    }
    Ok(())
}

pub fn write_projects(out: &mut impl Write, descriptions: &DescriptionsByCategory) -> fmt::Result {
    writeln!(out, "Projects billed:")?;
    for category in descriptions.keys() {
        writeln!(out, "{}{}", INDENT, category)?;
    }
    Ok(())
}

/// Blank line, hours table, then descriptions.
pub fn write_full_report(out: &mut impl Write, summary: &Summary) -> fmt::Result {
    writeln!(out)?;
    write_hours_table(out, &summary.days, &summary.hours_from_category)?;
    write_descriptions(out, &summary.desc_from_category)
}
