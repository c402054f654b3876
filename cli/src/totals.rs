use hoursum_core::CategoryTotals;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TotalsRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Hours")]
    hours: String,
}

/// One row per category plus a closing total, hours right-aligned.
pub fn render_totals(totals: &CategoryTotals) -> String {
    let mut rows: Vec<TotalsRow> = totals
        .iter()
        .map(|(category, hours)| TotalsRow {
            category: category.clone(),
            hours: format!("{:.2}", hours),
        })
        .collect();
    rows.push(TotalsRow {
        category: "Total".to_string(),
        hours: format!("{:.2}", totals.values().sum::<f64>()),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::one(1)).with(Alignment::right()));

    format!("{}\n", table)
}
