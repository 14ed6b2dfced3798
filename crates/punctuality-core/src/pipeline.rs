//! Record processing pipeline.
//!
//! Each line goes through these stages in order:
//! 1. **Parse**: split into seven fields, convert the three ids
//! 2. **Normalize**: repair separators and parse date and times
//! 3. **Validate**: check stop → line → vehicle membership
//! 4. **Enrich**: derive delay and layover
//!
//! The first failing stage rejects the line. Lines are independent: a
//! rejection never affects another line, and nothing is shared between
//! lines except the read-only topology.

use punctuality_ingest::parse_fields;
use punctuality_model::{
    BatchOutcome, ParsedRecord, RawLine, RecordError, ReferenceTopology, RejectedLine,
};
use punctuality_transform::{RawTemporal, enrich, normalize_temporal};
use punctuality_validate::validate_membership;
use tracing::{debug, info};

/// Parse, normalize and validate one raw line.
///
/// # Errors
///
/// The [`RecordError`] of the first stage that fails.
pub fn process_line(line: &str, topology: &ReferenceTopology) -> Result<ParsedRecord, RecordError> {
    let fields = parse_fields(line)?;

    let temporal = normalize_temporal(RawTemporal {
        date: fields.date,
        scheduled_time: fields.scheduled_time,
        actual_arrival_time: fields.actual_arrival_time,
        actual_departure_time: fields.actual_departure_time,
    })?;

    validate_membership(topology, fields.stop_id, fields.line_id, fields.vehicle_id)?;

    Ok(ParsedRecord {
        stop_id: fields.stop_id,
        line_id: fields.line_id,
        vehicle_id: fields.vehicle_id,
        scheduled_date: temporal.scheduled_date,
        scheduled_time: temporal.scheduled_time,
        actual_arrival_time: temporal.actual_arrival_time,
        actual_departure_time: temporal.actual_departure_time,
    })
}

/// Partition a batch into enriched records and rejected lines.
///
/// Both outputs keep input order. Rejected lines keep their raw text
/// unchanged.
pub fn process_batch<I>(lines: I, topology: &ReferenceTopology) -> BatchOutcome
where
    I: IntoIterator<Item = RawLine>,
{
    let mut outcome = BatchOutcome::default();

    for line in lines {
        match process_line(&line.text, topology) {
            Ok(record) => outcome.accepted.push(enrich(record)),
            Err(error) => {
                debug!(
                    line_number = line.number,
                    kind = %error.kind(),
                    error = %error,
                    "line rejected"
                );
                outcome.rejected.push(RejectedLine::new(line, error));
            }
        }
    }

    info!(
        total = outcome.total(),
        accepted = outcome.accepted.len(),
        rejected = outcome.rejected.len(),
        "batch processed"
    );
    outcome
}
