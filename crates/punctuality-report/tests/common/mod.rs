use chrono::{NaiveDate, NaiveTime};
use punctuality_model::{EnrichedRecord, LineId, ParsedRecord, StopId, VehicleId};

fn at(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap()
}

pub fn enriched(
    ids: (u32, u32, u32),
    date: (i32, u32, u32),
    times: [&str; 3],
    delay_seconds: i64,
    layover_seconds: i64,
) -> EnrichedRecord {
    EnrichedRecord {
        record: ParsedRecord {
            stop_id: StopId::new(ids.0),
            line_id: LineId::new(ids.1),
            vehicle_id: VehicleId::new(ids.2),
            scheduled_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            scheduled_time: at(times[0]),
            actual_arrival_time: at(times[1]),
            actual_departure_time: at(times[2]),
        },
        delay_seconds,
        layover_seconds,
    }
}

pub fn sample_records() -> Vec<EnrichedRecord> {
    vec![
        enriched((5, 102, 201), (2023, 1, 1), ["08:00", "08:05", "08:06"], 300, 60),
        enriched((5, 102, 201), (2023, 1, 1), ["08:10", "08:05", "08:06"], -300, 60),
        enriched((25, 22, 6532), (2023, 11, 9), ["06:00", "08:05", "08:04"], 7500, -60),
    ]
}
