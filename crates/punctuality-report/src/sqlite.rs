//! SQLite store for accepted records.
//!
//! Each run replaces the `public_transport_data` table. Dates and times are
//! stored as `DD.MM.YYYY` / `HH:MM` text and metrics as `[-]MM:SS` text.

use std::fs;
use std::path::Path;

use punctuality_model::EnrichedRecord;
use rusqlite::{Connection, params};
use tracing::info;

use crate::common::AcceptedRow;
use crate::error::{ReportError, Result};

pub const TABLE_NAME: &str = "public_transport_data";

const CREATE_TABLE_SQL: &str = "DROP TABLE IF EXISTS public_transport_data;
CREATE TABLE public_transport_data (
    stop_number INTEGER,
    line_number INTEGER,
    vehicle_number INTEGER,
    date TEXT,
    time TEXT,
    real_time TEXT,
    real_departure_time TEXT,
    delay TEXT,
    layover TEXT
);";

const INSERT_SQL: &str = "INSERT INTO public_transport_data
    (stop_number, line_number, vehicle_number, date, time, real_time, real_departure_time, delay, layover)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

/// Recreate the table on `conn` and insert `records` in one transaction.
///
/// Returns the number of inserted rows.
pub fn store_records(conn: &mut Connection, records: &[EnrichedRecord]) -> Result<usize> {
    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_TABLE_SQL)?;
    {
        let mut insert = tx.prepare(INSERT_SQL)?;
        for record in records {
            let row = AcceptedRow::from(record);
            insert.execute(params![
                row.stop_id,
                row.line_id,
                row.vehicle_id,
                row.date,
                row.scheduled_time,
                row.actual_arrival_time,
                row.actual_departure_time,
                row.delay,
                row.layover,
            ])?;
        }
    }
    tx.commit()?;
    Ok(records.len())
}

/// Open (or create) the database at `path` and store `records`.
pub fn write_sqlite_store(path: &Path, records: &[EnrichedRecord]) -> Result<usize> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ReportError::write(path, e))?;
    }
    let mut conn = Connection::open(path)?;
    let rows = store_records(&mut conn, records)?;
    info!(path = %path.display(), table = TABLE_NAME, rows, "wrote sqlite store");
    Ok(rows)
}
