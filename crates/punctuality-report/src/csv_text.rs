//! Semicolon-delimited text outputs.
//!
//! - Accepted records: input columns in canonical form plus `delay;layover`
//! - Rejected lines: the input header and each rejected line verbatim

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use punctuality_model::{EnrichedRecord, RejectedLine};
use tracing::info;

use crate::common::{AcceptedRow, create_output_file};
use crate::error::{ReportError, Result};

/// Header of the accepted-records output.
pub const ACCEPTED_HEADER: &str = "stop_id;line_id;vehicle_id;date;scheduled_time;actual_arrival_time;actual_departure_time;delay;layover";

/// Write accepted records with a header line to `writer`.
pub fn write_accepted<W: Write>(writer: W, records: &[EnrichedRecord]) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(writer);
    if records.is_empty() {
        // Serialization only emits the header with the first row.
        csv.write_record(ACCEPTED_HEADER.split(';'))?;
    }
    for record in records {
        csv.serialize(AcceptedRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write accepted records to a file, creating parent directories.
pub fn write_accepted_csv(path: &Path, records: &[EnrichedRecord]) -> Result<()> {
    let file = create_output_file(path)?;
    write_accepted(file, records)?;
    info!(path = %path.display(), records = records.len(), "wrote accepted records");
    Ok(())
}

/// Write `header` followed by every rejected raw line, unmodified.
pub fn write_rejected<W: Write>(mut writer: W, header: &str, rejected: &[RejectedLine]) -> Result<()> {
    writeln!(writer, "{header}")?;
    for line in rejected {
        writeln!(writer, "{}", line.raw)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rejected lines to a file, creating parent directories.
pub fn write_rejected_csv(path: &Path, header: &str, rejected: &[RejectedLine]) -> Result<()> {
    let file = create_output_file(path)?;
    write_rejected(file, header, rejected).map_err(|error| match error {
        ReportError::Io(source) => ReportError::write(path, source),
        other => other,
    })?;
    info!(path = %path.display(), lines = rejected.len(), "wrote rejected lines");
    Ok(())
}
