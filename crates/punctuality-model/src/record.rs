use chrono::{NaiveDate, NaiveTime};

use crate::error::RecordError;
use crate::ids::{LineId, StopId, VehicleId};

/// One raw input line with its 1-based position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

impl RawLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Number in-memory lines 1, 2, 3, ... in iteration order.
    pub fn numbered<I, S>(lines: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, text)| Self::new(index + 1, text))
            .collect()
    }
}

/// A record whose identifiers and temporal fields all parsed and whose
/// identifiers are members of the reference topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub stop_id: StopId,
    pub line_id: LineId,
    pub vehicle_id: VehicleId,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub actual_arrival_time: NaiveTime,
    pub actual_departure_time: NaiveTime,
}

/// A [`ParsedRecord`] with its derived punctuality metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub record: ParsedRecord,
    /// Actual arrival minus scheduled time. Negative means early.
    pub delay_seconds: i64,
    /// Actual departure minus actual arrival. Negative values are kept as-is.
    pub layover_seconds: i64,
}

/// A rejected input line, kept verbatim for operator inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub raw: String,
    pub error: RecordError,
}

impl RejectedLine {
    pub fn new(line: RawLine, error: RecordError) -> Self {
        Self {
            line_number: line.number,
            raw: line.text,
            error,
        }
    }
}

/// The two partitions of a processed batch, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub accepted: Vec<EnrichedRecord>,
    pub rejected: Vec<RejectedLine>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }

    /// Rejected raw lines in input order.
    pub fn rejected_lines(&self) -> impl Iterator<Item = &str> {
        self.rejected.iter().map(|rejected| rejected.raw.as_str())
    }
}
