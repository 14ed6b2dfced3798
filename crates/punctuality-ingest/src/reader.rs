//! Line source: reads a punctuality file into numbered raw lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use punctuality_model::RawLine;

use crate::error::{IngestError, Result};

/// Contents of an input file after the header has been split off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    /// The first line of the file, if the file was not empty.
    pub header: Option<String>,
    /// Remaining non-blank lines, trimmed, with their 1-based line numbers.
    pub lines: Vec<RawLine>,
}

/// Read an input file from disk.
///
/// A missing file is [`IngestError::FileNotFound`]; any other I/O failure,
/// including invalid UTF-8, is [`IngestError::FileRead`].
pub fn read_raw_lines(path: &Path) -> Result<RawInput> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    read_raw_lines_from(BufReader::new(file), path)
}

/// Read input from any buffered reader; `path` is only used for errors.
///
/// The first line is the header. Every other line is trimmed of leading and
/// trailing whitespace, and lines that are blank after trimming are skipped.
pub fn read_raw_lines_from<R: BufRead>(reader: R, path: &Path) -> Result<RawInput> {
    let mut input = RawInput::default();
    let mut skipped_blank = 0usize;

    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| IngestError::from_io(path, e))?;
        if index == 0 {
            input.header = Some(line.trim().trim_start_matches('\u{feff}').to_string());
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            skipped_blank += 1;
            continue;
        }
        input.lines.push(RawLine::new(index + 1, trimmed));
    }

    tracing::debug!(
        path = %path.display(),
        lines = input.lines.len(),
        skipped_blank,
        has_header = input.header.is_some(),
        "read input lines"
    );
    Ok(input)
}
