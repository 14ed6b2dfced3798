//! JSON rejection report.

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use punctuality_model::{BatchOutcome, RejectionEntry, RejectionSummary};
use serde::Serialize;
use tracing::info;

use crate::common::create_output_file;
use crate::error::{ReportError, Result};

pub const REPORT_SCHEMA: &str = "punctuality-rejections";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct RejectionReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    input: String,
    total_lines: usize,
    accepted: usize,
    rejected: usize,
    rejections: &'a [RejectionEntry],
}

/// Write the rejection report for `outcome` read from `input` to `path`.
pub fn write_rejection_report_json(
    path: &Path,
    input: &Path,
    outcome: &BatchOutcome,
) -> Result<RejectionSummary> {
    let summary = RejectionSummary::from_rejected(&outcome.rejected);
    let payload = RejectionReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        input: input.display().to_string(),
        total_lines: outcome.total(),
        accepted: outcome.accepted.len(),
        rejected: outcome.rejected.len(),
        rejections: &summary.entries,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    let mut file = create_output_file(path)?;
    writeln!(file, "{json}")
        .and_then(|()| file.flush())
        .map_err(|e| ReportError::write(path, e))?;
    info!(path = %path.display(), kinds = summary.entries.len(), "wrote rejection report");
    Ok(summary)
}
