mod csv_utils;
mod error;
mod export;
mod metrics;
mod model;
pub mod notifications;
pub mod payroll;
mod report;
mod seed;
mod store;
mod stores;

pub use error::Error;
pub use export::{export, export_to_file, report_filename};
pub use metrics::Metrics;
pub use model::{
    Admin, Customer, Employee, EmployeeStatus, Record, SalaryPayment, Transaction,
    TransactionStatus, CURRENCY,
};
pub use report::{
    CustomerReportRow, DateRange, Report, ReportKind, SalaryReportRow, TransactionReportRow,
};
pub use seed::Seed;
pub use store::{ChangeKind, CollectionKind, DataStore, StoreEvent, UNKNOWN_NAME};
pub use stores::Collection;
