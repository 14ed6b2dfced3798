//! Date and time-of-day normalization.
//!
//! Feeds corrupt separators inconsistently (`01-01-2023`, `01/01/2023`,
//! `08.05`, `08'05`). Repair is a plain character substitution followed by a
//! strict parse:
//!
//! - Dates: `.` `,` `*` `-` `/` become `.`, then `D.M.YYYY`
//! - Times: `.` `-` `'` become `:`, then `H:M` (24-hour)
//!
//! Day and month (and hour and minute) may be one or two digits; the year is
//! exactly four. No other repair is attempted: an ambiguous date such as
//! `2023.01.01` is rejected, never reordered.

use chrono::{NaiveDate, NaiveTime};
use punctuality_model::{RecordError, TimeField};

/// Characters accepted as date separators.
pub const DATE_SEPARATORS: [char; 5] = ['.', ',', '*', '-', '/'];

/// Characters accepted as time separators.
pub const TIME_SEPARATORS: [char; 3] = ['.', '-', '\''];

const CANONICAL_DATE_SEPARATOR: char = '.';
const CANONICAL_TIME_SEPARATOR: char = ':';

/// Replace every date separator with `.`.
pub fn normalize_date_separators(value: &str) -> String {
    value.replace(DATE_SEPARATORS, ".")
}

/// Replace every time separator with `:`.
pub fn normalize_time_separators(value: &str) -> String {
    value.replace(TIME_SEPARATORS, ":")
}

/// Repair and parse a date field.
///
/// # Errors
///
/// [`RecordError::UnparseableDate`] carrying the original, unrepaired text.
pub fn parse_date(value: &str) -> Result<NaiveDate, RecordError> {
    parse_normalized_date(&normalize_date_separators(value)).ok_or_else(|| {
        RecordError::UnparseableDate {
            value: value.to_string(),
        }
    })
}

/// Repair and parse one of the three time-of-day fields.
///
/// # Errors
///
/// [`RecordError::UnparseableTime`] naming `field` and carrying the original text.
pub fn parse_time(field: TimeField, value: &str) -> Result<NaiveTime, RecordError> {
    parse_normalized_time(&normalize_time_separators(value)).ok_or_else(|| {
        RecordError::UnparseableTime {
            field,
            value: value.to_string(),
        }
    })
}

/// Render a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Render a time as `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn parse_normalized_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split(CANONICAL_DATE_SEPARATOR);
    let day = parse_digits(parts.next()?, 1, 2)?;
    let month = parse_digits(parts.next()?, 1, 2)?;
    let year = parse_digits(parts.next()?, 4, 4)?;
    if parts.next().is_some() || year == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_normalized_time(value: &str) -> Option<NaiveTime> {
    let (hour, minute) = value.split_once(CANONICAL_TIME_SEPARATOR)?;
    let hour = parse_digits(hour, 1, 2)?;
    let minute = parse_digits(minute, 1, 2)?;
    // Out-of-range hour or minute yields None here.
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse an all-ASCII-digit component of `min..=max` digits.
fn parse_digits(value: &str, min: usize, max: usize) -> Option<u32> {
    if !(min..=max).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn canonical_date()(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28  // Safe for all months
        ) -> String {
            format!("{:02}.{:02}.{:04}", day, month, year)
        }
    }

    prop_compose! {
        fn canonical_time()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    proptest! {
        /// Canonical dates pass through separator repair unchanged
        #[test]
        fn date_normalization_is_identity_on_canonical(raw in canonical_date()) {
            prop_assert_eq!(normalize_date_separators(&raw), raw.clone());
            let parsed = parse_date(&raw).unwrap();
            prop_assert_eq!(format_date(parsed), raw);
        }

        /// Canonical times pass through separator repair unchanged
        #[test]
        fn time_normalization_is_identity_on_canonical(raw in canonical_time()) {
            prop_assert_eq!(normalize_time_separators(&raw), raw.clone());
            let parsed = parse_time(TimeField::Scheduled, &raw).unwrap();
            prop_assert_eq!(format_time(parsed), raw);
        }

        /// Repair is idempotent
        #[test]
        fn normalization_is_idempotent(raw in "[0-9.,*/'-]{0,12}") {
            let date_once = normalize_date_separators(&raw);
            prop_assert_eq!(normalize_date_separators(&date_once), date_once);
            let time_once = normalize_time_separators(&raw);
            prop_assert_eq!(normalize_time_separators(&time_once), time_once);
        }

        /// Any accepted separator yields the same date
        #[test]
        fn separator_choice_does_not_change_value(
            raw in canonical_date(),
            first in prop::sample::select(DATE_SEPARATORS.to_vec()),
            second in prop::sample::select(DATE_SEPARATORS.to_vec()),
        ) {
            let mut parts = raw.split('.');
            let (d, m, y) = (parts.next().unwrap(), parts.next().unwrap(), parts.next().unwrap());
            let corrupted = format!("{d}{first}{m}{second}{y}");
            prop_assert_eq!(parse_date(&corrupted), parse_date(&raw));
        }
    }
}
