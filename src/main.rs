use std::env;
use std::error::Error;
use std::io;
use std::process;

use chrono::{NaiveDate, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use laundry_ledger::{export, export_to_file, DataStore, DateRange, Report, ReportKind, CURRENCY};

const USAGE: &str = "Usage: laundry-ledger <customers|transactions|salaries> [FROM TO] [--stdout]";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let to_stdout = match args.iter().position(|arg| arg == "--stdout") {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };

    let (kind, range) = match args.as_slice() {
        [kind] => (kind.parse::<ReportKind>()?, DateRange::unbounded()),
        [kind, from, to] => (
            kind.parse::<ReportKind>()?,
            DateRange::new(from.parse::<NaiveDate>()?, to.parse::<NaiveDate>()?),
        ),
        _ => return Err(USAGE.into()),
    };

    let store = DataStore::seeded();
    let metrics = store.metrics();
    info!(
        employees = metrics.total_employees,
        customers = metrics.total_customers,
        transactions = metrics.total_transactions,
        pending = metrics.pending_transactions,
        income = %format!("{} {}", metrics.total_income, CURRENCY),
        "store loaded"
    );

    let report = Report::generate(&store, kind, range);
    if to_stdout {
        export(&report, io::stdout())?;
    } else {
        let today = Utc::now().date_naive();
        let path = export_to_file(&report, ".", today).await?;
        println!("{}", path.display());
    }
    Ok(())
}
