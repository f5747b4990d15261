//! Errors raised by report generation and export.
//!
//! Store mutations never fail: updating or deleting a missing id is a silent
//! no-op and a failed login is reported as `false`. What remains are the
//! export failures:
//! - nothing to export (empty report)
//! - CSV or I/O errors from the underlying writer
//! - an unrecognised report kind name

use crate::report::ReportKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No data to export for the {0} report")]
    EmptyReport(ReportKind),
    #[error("unknown report type '{0}', expected customers, transactions or salaries")]
    UnknownReportKind(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    AsyncCsv(#[from] csv_async::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
