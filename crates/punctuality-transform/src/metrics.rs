//! Delay and layover derivation.
//!
//! Both metrics are plain signed differences between same-day times of day.
//! Temporal ordering is not checked: a departure logged before the arrival
//! gives a negative layover and is kept as such.

use chrono::NaiveTime;
use punctuality_model::{EnrichedRecord, ParsedRecord};

/// `later - earlier` in whole seconds, truncated toward zero.
fn seconds_between(later: NaiveTime, earlier: NaiveTime) -> i64 {
    later.signed_duration_since(earlier).num_seconds()
}

/// Actual arrival minus scheduled time. Negative means the vehicle was early.
pub fn delay_seconds(record: &ParsedRecord) -> i64 {
    seconds_between(record.actual_arrival_time, record.scheduled_time)
}

/// Actual departure minus actual arrival.
pub fn layover_seconds(record: &ParsedRecord) -> i64 {
    seconds_between(record.actual_departure_time, record.actual_arrival_time)
}

/// Attach delay and layover to an accepted record.
pub fn enrich(record: ParsedRecord) -> EnrichedRecord {
    let delay_seconds = delay_seconds(&record);
    let layover_seconds = layover_seconds(&record);
    EnrichedRecord {
        record,
        delay_seconds,
        layover_seconds,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use punctuality_model::{LineId, StopId, VehicleId};

    use super::*;

    fn record(scheduled: (u32, u32), arrival: (u32, u32), departure: (u32, u32)) -> ParsedRecord {
        let at = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        ParsedRecord {
            stop_id: StopId::new(5),
            line_id: LineId::new(102),
            vehicle_id: VehicleId::new(201),
            scheduled_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            scheduled_time: at(scheduled),
            actual_arrival_time: at(arrival),
            actual_departure_time: at(departure),
        }
    }

    #[test]
    fn late_arrival() {
        let enriched = enrich(record((8, 0), (8, 5), (8, 6)));
        assert_eq!(enriched.delay_seconds, 300);
        assert_eq!(enriched.layover_seconds, 60);
    }

    #[test]
    fn early_arrival_is_negative() {
        let enriched = enrich(record((8, 10), (8, 5), (8, 6)));
        assert_eq!(enriched.delay_seconds, -300);
        assert_eq!(enriched.layover_seconds, 60);
    }

    #[test]
    fn departure_before_arrival_is_kept() {
        let enriched = enrich(record((8, 0), (8, 5), (8, 1)));
        assert_eq!(enriched.layover_seconds, -240);
    }

    #[test]
    fn times_do_not_wrap_midnight() {
        let enriched = enrich(record((23, 59), (0, 1), (0, 2)));
        assert_eq!(enriched.delay_seconds, -(23 * 3600 + 58 * 60));
        assert_eq!(enriched.layover_seconds, 60);
    }

    #[test]
    fn enrich_keeps_record() {
        let parsed = record((8, 0), (8, 0), (8, 0));
        let enriched = enrich(parsed.clone());
        assert_eq!(enriched.record, parsed);
        assert_eq!(enriched.delay_seconds, 0);
        assert_eq!(enriched.layover_seconds, 0);
    }
}
