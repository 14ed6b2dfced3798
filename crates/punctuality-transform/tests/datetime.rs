//! Tests for date/time normalization.

use chrono::{NaiveDate, NaiveTime};
use punctuality_model::{RecordError, TimeField};
use punctuality_transform::normalization::{
    format_date, format_mmss, format_time, normalize_date_separators, normalize_time_separators,
    parse_date, parse_mmss, parse_time,
};

#[test]
fn date_separators_become_dots() {
    assert_eq!(normalize_date_separators("01-02/2023"), "01.02.2023");
    assert_eq!(normalize_date_separators("01*02,2023"), "01.02.2023");
    assert_eq!(normalize_date_separators("01.02.2023"), "01.02.2023");
}

#[test]
fn time_separators_become_colons() {
    assert_eq!(normalize_time_separators("08.05"), "08:05");
    assert_eq!(normalize_time_separators("08'05"), "08:05");
    assert_eq!(normalize_time_separators("08-05"), "08:05");
    assert_eq!(normalize_time_separators("08:05"), "08:05");
}

#[test]
fn date_separators_do_not_apply_to_times() {
    // '/' and ',' are date-only separators.
    assert!(parse_time(TimeField::Scheduled, "08/05").is_err());
    assert!(parse_time(TimeField::Scheduled, "08,05").is_err());
}

#[test]
fn parse_date_complete() {
    assert_eq!(
        parse_date("25/12/2023"),
        Ok(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap())
    );
}

#[test]
fn parse_date_keeps_original_text_in_error() {
    assert_eq!(
        parse_date("2023-12-25"),
        Err(RecordError::UnparseableDate {
            value: "2023-12-25".to_string()
        })
    );
}

#[test]
fn round_trip_through_canonical_text() {
    let date = parse_date("5,1,2023").unwrap();
    let time = parse_time(TimeField::ActualArrival, "7'3").unwrap();
    assert_eq!(format_date(date), "05.01.2023");
    assert_eq!(format_time(time), "07:03");
    assert_eq!(time, NaiveTime::from_hms_opt(7, 3, 0).unwrap());
}

#[test]
fn durations_render_and_parse() {
    assert_eq!(format_mmss(300), "05:00");
    assert_eq!(format_mmss(60), "01:00");
    assert_eq!(format_mmss(-300), "-05:00");
    assert_eq!(parse_mmss("-05:00"), Ok(-300));
    assert!(parse_mmss("5 min").is_err());
}
