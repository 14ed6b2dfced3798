//! Normalization functions for punctuality records.
//!
//! This module provides:
//! - **datetime**: separator repair and strict parsing of dates and times
//! - **duration**: `[-]MM:SS` rendering and parsing of signed second counts

pub mod datetime;
pub mod duration;

// Re-export commonly used items
pub use datetime::{
    DATE_SEPARATORS, TIME_SEPARATORS, format_date, format_time, normalize_date_separators,
    normalize_time_separators, parse_date, parse_time,
};
pub use duration::{format_mmss, parse_mmss};
