use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use punctuality_model::EnrichedRecord;
use punctuality_transform::normalization::{format_date, format_mmss, format_time};
use serde::Serialize;

use crate::error::{ReportError, Result};

/// An accepted record rendered to its textual output form.
///
/// Field order and names are the accepted CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct AcceptedRow {
    pub stop_id: u32,
    pub line_id: u32,
    pub vehicle_id: u32,
    pub date: String,
    pub scheduled_time: String,
    pub actual_arrival_time: String,
    pub actual_departure_time: String,
    pub delay: String,
    pub layover: String,
}

impl From<&EnrichedRecord> for AcceptedRow {
    fn from(enriched: &EnrichedRecord) -> Self {
        let record = &enriched.record;
        Self {
            stop_id: record.stop_id.get(),
            line_id: record.line_id.get(),
            vehicle_id: record.vehicle_id.get(),
            date: format_date(record.scheduled_date),
            scheduled_time: format_time(record.scheduled_time),
            actual_arrival_time: format_time(record.actual_arrival_time),
            actual_departure_time: format_time(record.actual_departure_time),
            delay: format_mmss(enriched.delay_seconds),
            layover: format_mmss(enriched.layover_seconds),
        }
    }
}

/// Create `path` (and its parent directories) for buffered writing.
pub(crate) fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ReportError::write(path, e))?;
    }
    let file = File::create(path).map_err(|e| ReportError::write(path, e))?;
    Ok(BufWriter::new(file))
}
