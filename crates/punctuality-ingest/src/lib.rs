//! Punctuality data ingestion.
//!
//! # Features
//!
//! - **Line source**: read an input file, split off the header, number lines
//! - **Record parser**: split a line into seven fields and convert the ids
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use punctuality_ingest::{parse_fields, read_raw_lines};
//!
//! let input = read_raw_lines(Path::new("data/punctuality.csv"))?;
//! for line in &input.lines {
//!     let fields = parse_fields(&line.text);
//! }
//! ```

mod error;
mod parser;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Line Source ===
pub use reader::{RawInput, read_raw_lines, read_raw_lines_from};

// === Record Parser ===
pub use parser::{FIELD_COUNT, FIELD_DELIMITER, INPUT_HEADER, RecordFields, parse_fields};
