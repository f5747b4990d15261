//! CSV serialization utilities.
//!
//! Provides generic functions for writing serde records as CSV, blocking and
//! async. The header row is taken from the field names of the first record.
//! Fields holding a comma or quote are quoted.

use serde::Serialize;
use std::io::Write;
use tokio::io::AsyncWrite;

/// Writes an iterator of records to a CSV writer.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Async counterpart of [`write_csv`] for tokio writers such as files.
pub async fn write_csv_async<T, W>(
    writer: W,
    records: impl Iterator<Item = T>,
) -> Result<(), csv_async::Error>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let mut wtr = csv_async::AsyncSerializer::from_writer(writer);
    for record in records {
        wtr.serialize(record).await?;
    }
    wtr.flush().await?;
    Ok(())
}
