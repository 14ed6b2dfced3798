//! Tests for the SQLite store.

mod common;

use punctuality_report::{TABLE_NAME, store_records, write_sqlite_store};
use rusqlite::Connection;

use common::sample_records;

type Row = (u32, u32, u32, String, String, String, String, String, String);

fn read_rows(conn: &Connection) -> Vec<Row> {
    let mut stmt = conn
        .prepare(
            "SELECT stop_number, line_number, vehicle_number, date, time, real_time,
                    real_departure_time, delay, layover
             FROM public_transport_data ORDER BY rowid",
        )
        .expect("prepare select");
    stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
            row.get(8)?,
        ))
    })
    .expect("query rows")
    .collect::<Result<Vec<_>, _>>()
    .expect("read rows")
}

#[test]
fn stores_rendered_rows() {
    let mut conn = Connection::open_in_memory().expect("open memory db");

    let inserted = store_records(&mut conn, &sample_records()).expect("store records");

    assert_eq!(inserted, 3);
    let rows = read_rows(&conn);
    assert_eq!(
        rows[0],
        (
            5,
            102,
            201,
            "01.01.2023".to_string(),
            "08:00".to_string(),
            "08:05".to_string(),
            "08:06".to_string(),
            "05:00".to_string(),
            "01:00".to_string()
        )
    );
    assert_eq!(rows[1].7, "-05:00");
    assert_eq!(rows[2].7, "125:00");
    assert_eq!(rows[2].8, "-01:00");
}

#[test]
fn each_run_replaces_the_table() {
    let mut conn = Connection::open_in_memory().expect("open memory db");

    store_records(&mut conn, &sample_records()).expect("first run");
    store_records(&mut conn, &sample_records()[..1]).expect("second run");

    assert_eq!(read_rows(&conn).len(), 1);
}

#[test]
fn writes_database_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("db/punctuality.sqlite");

    let rows = write_sqlite_store(&path, &sample_records()).expect("write store");

    assert_eq!(rows, 3);
    let conn = Connection::open(&path).expect("reopen db");
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {TABLE_NAME}"), [], |row| {
            row.get(0)
        })
        .expect("count rows");
    assert_eq!(count, 3);
}
