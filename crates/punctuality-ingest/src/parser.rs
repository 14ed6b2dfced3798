//! Record parser: splits a raw line into its seven fields.
//!
//! Only structure and identifier syntax are checked here. Date/time text is
//! handed on untouched for the normalizer, and topology membership is left
//! to the validator.

use punctuality_model::{IdField, LineId, RecordError, StopId, VehicleId};

/// Field delimiter of the input format.
pub const FIELD_DELIMITER: char = ';';

/// Number of fields in every input line.
pub const FIELD_COUNT: usize = 7;

/// Header of the input format.
pub const INPUT_HEADER: &str = "stop_id;line_id;vehicle_id;date;scheduled_time;actual_arrival_time;actual_departure_time";

/// The fields of one line, identifiers already converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields<'a> {
    pub stop_id: StopId,
    pub line_id: LineId,
    pub vehicle_id: VehicleId,
    pub date: &'a str,
    pub scheduled_time: &'a str,
    pub actual_arrival_time: &'a str,
    pub actual_departure_time: &'a str,
}

/// Split `line` on `;` and convert the three identifier fields.
///
/// # Errors
///
/// - [`RecordError::MalformedFieldCount`] unless there are exactly 7 fields
/// - [`RecordError::NonNumericIdentifier`] if an id is empty or contains
///   anything other than ASCII digits (signs and whitespace included)
/// - [`RecordError::IdentifierOutOfRange`] if an id does not fit in `u32`
pub fn parse_fields(line: &str) -> Result<RecordFields<'_>, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let [stop, route, vehicle, date, scheduled, arrival, departure] = fields[..] else {
        return Err(RecordError::MalformedFieldCount {
            found: fields.len(),
        });
    };

    // All three ids must be digit-only before any of them is converted.
    for (field, value) in [
        (IdField::Stop, stop),
        (IdField::Line, route),
        (IdField::Vehicle, vehicle),
    ] {
        if !is_decimal(value) {
            return Err(RecordError::NonNumericIdentifier {
                field,
                value: value.to_string(),
            });
        }
    }

    Ok(RecordFields {
        stop_id: StopId::new(parse_id(IdField::Stop, stop)?),
        line_id: LineId::new(parse_id(IdField::Line, route)?),
        vehicle_id: VehicleId::new(parse_id(IdField::Vehicle, vehicle)?),
        date,
        scheduled_time: scheduled,
        actual_arrival_time: arrival,
        actual_departure_time: departure,
    })
}

fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_id(field: IdField, value: &str) -> Result<u32, RecordError> {
    value
        .parse::<u32>()
        .map_err(|_| RecordError::IdentifierOutOfRange {
            field,
            value: value.to_string(),
        })
}
