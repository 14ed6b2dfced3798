//! Punctuality output generation.
//!
//! This crate provides the output sinks of the pipeline:
//!
//! - **Accepted CSV**: canonical records plus `delay;layover`
//! - **Rejected lines**: input header plus each rejected line verbatim
//! - **SQLite store**: the `public_transport_data` table
//! - **Rejection report**: JSON counts of rejections by kind

mod common;
mod csv_text;
mod error;
mod rejection_report;
mod sqlite;

// Re-export public types and functions
pub use csv_text::{
    ACCEPTED_HEADER, write_accepted, write_accepted_csv, write_rejected, write_rejected_csv,
};
pub use error::{ReportError, Result};
pub use rejection_report::{REPORT_SCHEMA, REPORT_SCHEMA_VERSION, write_rejection_report_json};
pub use sqlite::{TABLE_NAME, store_records, write_sqlite_store};
