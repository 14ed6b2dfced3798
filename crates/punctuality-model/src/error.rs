//! Per-line rejection taxonomy.
//!
//! Every failure a single input line can hit is a [`RecordError`]. None of
//! them is fatal: the orchestrator turns each one into a rejected line and
//! keeps going.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{LineId, StopId, VehicleId};

/// Which identifier column a record error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdField {
    Stop,
    Line,
    Vehicle,
}

impl IdField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop_id",
            Self::Line => "line_id",
            Self::Vehicle => "vehicle_id",
        }
    }
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which time-of-day column a record error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    Scheduled,
    ActualArrival,
    ActualDeparture,
}

impl TimeField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled_time",
            Self::ActualArrival => "actual_arrival_time",
            Self::ActualDeparture => "actual_departure_time",
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a raw line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    // === Structure ===
    /// The line did not split into exactly seven fields.
    #[error("expected 7 fields, found {found}")]
    MalformedFieldCount { found: usize },

    /// An identifier column holds something other than decimal digits.
    #[error("{field} is not numeric: '{value}'")]
    NonNumericIdentifier { field: IdField, value: String },

    /// An identifier column is all digits but too large to be a known id.
    #[error("{field} is out of range: '{value}'")]
    IdentifierOutOfRange { field: IdField, value: String },

    // === Topology ===
    #[error("unknown stop {stop}")]
    UnknownStop { stop: StopId },

    #[error("line {line} does not serve stop {stop}")]
    UnknownLine { stop: StopId, line: LineId },

    #[error("vehicle {vehicle} is not registered for line {line} at stop {stop}")]
    UnknownVehicle {
        stop: StopId,
        line: LineId,
        vehicle: VehicleId,
    },

    // === Temporal fields ===
    /// The date column could not be parsed after separator repair.
    #[error("unparseable date '{value}'")]
    UnparseableDate { value: String },

    /// A time-of-day column could not be parsed after separator repair.
    #[error("unparseable {field} '{value}'")]
    UnparseableTime { field: TimeField, value: String },
}

impl RecordError {
    pub fn kind(&self) -> RejectKind {
        match self {
            Self::MalformedFieldCount { .. } => RejectKind::MalformedFieldCount,
            Self::NonNumericIdentifier { .. } => RejectKind::NonNumericIdentifier,
            Self::IdentifierOutOfRange { .. } => RejectKind::IdentifierOutOfRange,
            Self::UnknownStop { .. } => RejectKind::UnknownStop,
            Self::UnknownLine { .. } => RejectKind::UnknownLine,
            Self::UnknownVehicle { .. } => RejectKind::UnknownVehicle,
            Self::UnparseableDate { .. } => RejectKind::UnparseableDate,
            Self::UnparseableTime { .. } => RejectKind::UnparseableTime,
        }
    }
}

/// Stable, field-free classification of a [`RecordError`].
///
/// Used as the grouping key for rejection summaries and as the `kind` value
/// in the JSON rejection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectKind {
    MalformedFieldCount,
    NonNumericIdentifier,
    IdentifierOutOfRange,
    UnknownStop,
    UnknownLine,
    UnknownVehicle,
    UnparseableDate,
    UnparseableTime,
}

impl RejectKind {
    pub const ALL: [RejectKind; 8] = [
        Self::MalformedFieldCount,
        Self::NonNumericIdentifier,
        Self::IdentifierOutOfRange,
        Self::UnknownStop,
        Self::UnknownLine,
        Self::UnknownVehicle,
        Self::UnparseableDate,
        Self::UnparseableTime,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::MalformedFieldCount => "malformed_field_count",
            Self::NonNumericIdentifier => "non_numeric_identifier",
            Self::IdentifierOutOfRange => "identifier_out_of_range",
            Self::UnknownStop => "unknown_stop",
            Self::UnknownLine => "unknown_line",
            Self::UnknownVehicle => "unknown_vehicle",
            Self::UnparseableDate => "unparseable_date",
            Self::UnparseableTime => "unparseable_time",
        }
    }

    /// Short human-readable description for summaries.
    pub fn description(self) -> &'static str {
        match self {
            Self::MalformedFieldCount => "Line does not have exactly 7 fields",
            Self::NonNumericIdentifier => "Stop, line or vehicle id is not numeric",
            Self::IdentifierOutOfRange => "Stop, line or vehicle id is out of range",
            Self::UnknownStop => "Stop is not in the reference topology",
            Self::UnknownLine => "Line does not serve the stop",
            Self::UnknownVehicle => "Vehicle is not registered for the line at the stop",
            Self::UnparseableDate => "Date could not be parsed as DD.MM.YYYY",
            Self::UnparseableTime => "Time could not be parsed as HH:MM",
        }
    }
}

impl fmt::Display for RejectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::UnknownVehicle {
            stop: StopId::new(5),
            line: LineId::new(102),
            vehicle: VehicleId::new(999),
        };
        assert_eq!(
            err.to_string(),
            "vehicle 999 is not registered for line 102 at stop 5"
        );

        let err = RecordError::UnparseableTime {
            field: TimeField::ActualArrival,
            value: "8h05".to_string(),
        };
        assert_eq!(err.to_string(), "unparseable actual_arrival_time '8h05'");
    }

    #[test]
    fn test_error_kind() {
        let err = RecordError::NonNumericIdentifier {
            field: IdField::Stop,
            value: "A".to_string(),
        };
        assert_eq!(err.kind(), RejectKind::NonNumericIdentifier);
        assert_eq!(err.kind().code(), "non_numeric_identifier");
    }

    #[test]
    fn test_kind_codes_are_unique() {
        let mut codes: Vec<&str> = RejectKind::ALL.iter().map(|kind| kind.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), RejectKind::ALL.len());
    }
}
