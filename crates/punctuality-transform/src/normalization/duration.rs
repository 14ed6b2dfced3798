//! Signed `[-]MM:SS` durations.
//!
//! Minutes are zero-padded to two digits but otherwise unbounded, so a delay
//! of 7 507 seconds renders as `125:07`. A leading `-` marks a negative
//! duration.

use crate::error::TransformError;

/// Format signed seconds as `[-]MM:SS`.
///
/// # Examples
///
/// ```
/// use punctuality_transform::normalization::format_mmss;
///
/// assert_eq!(format_mmss(300), "05:00");
/// assert_eq!(format_mmss(-300), "-05:00");
/// assert_eq!(format_mmss(7507), "125:07");
/// ```
pub fn format_mmss(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();
    format!("{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
}

/// Parse `[-]MM:SS` back into signed seconds.
///
/// Accepts one or more minute digits and exactly two second digits below 60.
pub fn parse_mmss(value: &str) -> Result<i64, TransformError> {
    let invalid = || TransformError::InvalidDuration {
        value: value.to_string(),
    };
    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let (minutes, seconds) = body.split_once(':').ok_or_else(invalid)?;
    if minutes.is_empty()
        || !minutes.bytes().all(|b| b.is_ascii_digit())
        || seconds.len() != 2
        || !seconds.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: i64 = seconds.parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }
    let total = minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)?;
    Ok(if negative { -total } else { total })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rendering then parsing recovers the original value
        #[test]
        fn format_parse_roundtrip(seconds in -10_000_000i64..10_000_000) {
            prop_assert_eq!(parse_mmss(&format_mmss(seconds)), Ok(seconds));
        }

        /// Rendered minutes and seconds always recover the magnitude
        #[test]
        fn components_recover_magnitude(seconds in -86_340i64..=86_340) {
            let rendered = format_mmss(seconds);
            prop_assert_eq!(rendered.starts_with('-'), seconds < 0);
            let (minutes, secs) = rendered.trim_start_matches('-').split_once(':').unwrap();
            prop_assert!(minutes.len() >= 2);
            prop_assert_eq!(secs.len(), 2);
            let magnitude = minutes.parse::<i64>().unwrap() * 60 + secs.parse::<i64>().unwrap();
            prop_assert_eq!(magnitude, seconds.abs());
        }
    }
}
