//! Normalization of the four temporal fields of one record.

use chrono::{NaiveDate, NaiveTime};
use punctuality_model::{RecordError, TimeField};
use tracing::trace;

use crate::normalization::datetime::{
    normalize_date_separators, normalize_time_separators, parse_date, parse_time,
};

/// Raw temporal text of one record, as split by the record parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTemporal<'a> {
    pub date: &'a str,
    pub scheduled_time: &'a str,
    pub actual_arrival_time: &'a str,
    pub actual_departure_time: &'a str,
}

/// Parsed temporal fields of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalFields {
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub actual_arrival_time: NaiveTime,
    pub actual_departure_time: NaiveTime,
}

/// Parse date, scheduled, arrival and departure in that order.
///
/// The first failing field rejects the record.
pub fn normalize_temporal(raw: RawTemporal<'_>) -> Result<TemporalFields, RecordError> {
    let scheduled_date = parse_date(raw.date)?;
    trace_repair("date", raw.date, &normalize_date_separators(raw.date));

    Ok(TemporalFields {
        scheduled_date,
        scheduled_time: time_field(TimeField::Scheduled, raw.scheduled_time)?,
        actual_arrival_time: time_field(TimeField::ActualArrival, raw.actual_arrival_time)?,
        actual_departure_time: time_field(TimeField::ActualDeparture, raw.actual_departure_time)?,
    })
}

fn time_field(field: TimeField, value: &str) -> Result<NaiveTime, RecordError> {
    let parsed = parse_time(field, value)?;
    trace_repair(field.as_str(), value, &normalize_time_separators(value));
    Ok(parsed)
}

fn trace_repair(field: &str, original: &str, repaired: &str) {
    if original != repaired {
        trace!(field, original, repaired, "repaired separators");
    }
}
