//! Punctuality record transformation.
//!
//! - **normalization**: separator repair, strict date/time parsing and
//!   `[-]MM:SS` duration rendering
//! - **temporal**: parsing the four temporal fields of a record together
//! - **metrics**: delay and layover derivation for accepted records
//!
//! Every function here is pure: no I/O and no shared state.

mod error;
mod metrics;
mod temporal;

pub mod normalization;

// Error type
pub use error::TransformError;

// Record-level normalization
pub use temporal::{RawTemporal, TemporalFields, normalize_temporal};

// Metrics
pub use metrics::{delay_seconds, enrich, layover_seconds};
