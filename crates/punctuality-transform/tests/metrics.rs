//! Tests for delay and layover derivation.

use chrono::{NaiveDate, NaiveTime};
use punctuality_model::{LineId, ParsedRecord, StopId, VehicleId};
use punctuality_transform::normalization::format_mmss;
use punctuality_transform::{delay_seconds, enrich, layover_seconds};

fn parsed(scheduled: &str, arrival: &str, departure: &str) -> ParsedRecord {
    let at = |value: &str| NaiveTime::parse_from_str(value, "%H:%M").unwrap();
    ParsedRecord {
        stop_id: StopId::new(10),
        line_id: LineId::new(147),
        vehicle_id: VehicleId::new(864),
        scheduled_date: NaiveDate::from_ymd_opt(2023, 3, 14).unwrap(),
        scheduled_time: at(scheduled),
        actual_arrival_time: at(arrival),
        actual_departure_time: at(departure),
    }
}

#[test]
fn metrics_are_exact_second_differences() {
    let record = parsed("12:00", "14:05", "14:07");
    assert_eq!(delay_seconds(&record), 7500);
    assert_eq!(layover_seconds(&record), 120);
}

#[test]
fn enriched_metrics_render() {
    let enriched = enrich(parsed("08:00", "08:05", "08:06"));
    assert_eq!(format_mmss(enriched.delay_seconds), "05:00");
    assert_eq!(format_mmss(enriched.layover_seconds), "01:00");

    let early = enrich(parsed("08:10", "08:05", "08:06"));
    assert_eq!(format_mmss(early.delay_seconds), "-05:00");
}

#[test]
fn large_delay_renders_unbounded_minutes() {
    let enriched = enrich(parsed("06:00", "08:05", "08:05"));
    assert_eq!(enriched.delay_seconds, 7500);
    assert_eq!(format_mmss(enriched.delay_seconds), "125:00");
}
