mod logging;
mod report;
mod totals;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use hoursum_core::time::parse_iso_date;
use hoursum_core::{resolve_window, Summary, SummaryUseCase, YamlLogRepository, DEFAULT_LOG_FILE};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hoursum", version)]
#[command(about = "Summarize billed hours recorded in a YAML log", long_about = None)]
struct Cli {
    /// YAML log mapping "YYYY-MM-DD (Weekday)" labels to "HHMM--HHMM category description" lines
    #[arg(default_value = DEFAULT_LOG_FILE)]
    path: PathBuf,
    /// START END as YYYY-MM-DD (END excluded), or one of last_week, week, yesterday, today.
    /// Defaults to the current week
    #[arg(num_args = 1..=2, value_name = "WINDOW")]
    window: Vec<String>,
    /// Report to print
    #[arg(long, value_enum, default_value_t = ReportKind::Table)]
    report: ReportKind,
    /// Date used as "today" when resolving named windows
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_iso_date)]
    as_of: Option<NaiveDate>,
    #[arg(long, help = "Enable logging")]
    log: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Hours table followed by descriptions per category
    Table,
    /// Hours per category for each day
    Daily,
    /// Total hours per category
    Totals,
    /// Categories billed in the window
    Projects,
}

fn render(kind: ReportKind, summary: &Summary) -> Result<String> {
    let mut out = String::new();
    match kind {
        ReportKind::Table => report::write_full_report(&mut out, summary)?,
        ReportKind::Daily => report::write_daily_listing(&mut out, &summary.days)?,
        ReportKind::Totals => out = totals::render_totals(&summary.hours_from_category),
        ReportKind::Projects => report::write_projects(&mut out, &summary.desc_from_category)?,
    }
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::enable_logging(cli.log)?;

    let today = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    let window = resolve_window(&cli.window, today)?;
    info!(path = %cli.path.display(), %window, "summarizing");

    let repo = YamlLogRepository::new(&cli.path);
    let summary = SummaryUseCase::new(&repo).summarize(window)?;

    print!("{}", render(cli.report, &summary)?);
    Ok(())
}
