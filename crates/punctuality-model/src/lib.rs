//! Shared types for the transit punctuality pipeline.
//!
//! - **ids**: stop, line and vehicle identifiers
//! - **record**: raw lines, parsed and enriched records, batch outcomes
//! - **error**: per-line rejection taxonomy
//! - **topology**: the immutable stop → line → vehicle reference table
//! - **rejection**: rejection counts grouped by kind

pub mod error;
pub mod ids;
pub mod record;
pub mod rejection;
pub mod topology;

pub use error::{IdField, RecordError, RejectKind, TimeField};
pub use ids::{LineId, StopId, VehicleId};
pub use record::{BatchOutcome, EnrichedRecord, ParsedRecord, RawLine, RejectedLine};
pub use rejection::{MAX_EXAMPLES, RejectionEntry, RejectionSummary};
pub use topology::{ReferenceTopology, TopologyEntry};
