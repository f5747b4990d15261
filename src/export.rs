//! CSV export of generated reports.
//!
//! Empty reports are rejected before anything is written.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs::File;
use tracing::info;

use crate::csv_utils::{write_csv, write_csv_async};
use crate::report::{Report, ReportKind};
use crate::Error;

/// File name a report is saved under, e.g. `customers-report-2025-01-31.csv`.
pub fn report_filename(kind: ReportKind, date: NaiveDate) -> String {
    format!("{}-report-{}.csv", kind, date.format("%Y-%m-%d"))
}

/// Writes the report as CSV: a header row of column names, then one line per row.
///
/// # Errors
/// Returns an error if:
/// * The report has no rows; nothing is written
/// * Writing to the output fails
pub fn export<W: Write>(report: &Report, writer: W) -> Result<(), Error> {
    if report.is_empty() {
        return Err(Error::EmptyReport(report.kind()));
    }
    match report {
        Report::Customers(rows) => write_csv(writer, rows.iter())?,
        Report::Transactions(rows) => write_csv(writer, rows.iter())?,
        Report::Salaries(rows) => write_csv(writer, rows.iter())?,
    }
    Ok(())
}

/// Saves the report into `dir` under [`report_filename`] for `date`.
/// Returns the path of the written file.
///
/// # Errors
/// Returns an error if:
/// * The report has no rows; no file is created
/// * The file cannot be created or written
pub async fn export_to_file(
    report: &Report,
    dir: impl AsRef<Path>,
    date: NaiveDate,
) -> Result<PathBuf, Error> {
    if report.is_empty() {
        return Err(Error::EmptyReport(report.kind()));
    }

    let path = dir.as_ref().join(report_filename(report.kind(), date));
    let file = File::create(&path).await?;
    match report {
        Report::Customers(rows) => write_csv_async(file, rows.iter()).await?,
        Report::Transactions(rows) => write_csv_async(file, rows.iter()).await?,
        Report::Salaries(rows) => write_csv_async(file, rows.iter()).await?,
    }

    info!(kind = %report.kind(), rows = report.len(), path = %path.display(), "report exported");
    Ok(path)
}
