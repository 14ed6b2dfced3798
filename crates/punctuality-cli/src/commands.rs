use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{CellAlignment, Table};
use tracing::{info, info_span};

use punctuality_core::process_batch;
use punctuality_ingest::{INPUT_HEADER, read_raw_lines};
use punctuality_model::{BatchOutcome, ReferenceTopology, RejectionSummary};
use punctuality_report::{
    write_accepted_csv, write_rejected_csv, write_rejection_report_json, write_sqlite_store,
};

use crate::cli::ProcessArgs;
use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::{OutputPaths, ProcessResult};

pub fn run_topology() -> Result<()> {
    let topology = ReferenceTopology::builtin();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stop"),
        header_cell("Line"),
        header_cell("Vehicles"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for (stop, line, vehicles) in topology.sorted_rows() {
        let vehicles = vehicles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![stop.to_string(), line.to_string(), vehicles]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let input = &args.input;
    let run_span = info_span!("process_file", input = %input.display());
    let _run_guard = run_span.enter();
    let topology = ReferenceTopology::builtin();

    // =========================================================================
    // Stage 1: Ingest - read and number the raw lines
    // =========================================================================
    let ingest_start = Instant::now();
    let raw = info_span!("ingest")
        .in_scope(|| read_raw_lines(input))
        .with_context(|| format!("read input {}", input.display()))?;
    info!(
        lines = raw.lines.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    let header = raw
        .header
        .clone()
        .unwrap_or_else(|| INPUT_HEADER.to_string());

    // =========================================================================
    // Stage 2: Process - parse, normalize, validate, enrich
    // =========================================================================
    let process_start = Instant::now();
    let outcome = info_span!("process").in_scope(|| process_batch(raw.lines, &topology));
    info!(
        accepted = outcome.accepted.len(),
        rejected = outcome.rejected.len(),
        duration_ms = process_start.elapsed().as_millis(),
        "process complete"
    );

    // =========================================================================
    // Stage 3: Output - write sinks unless this is a dry run
    // =========================================================================
    let (outputs, sqlite_rows) = if args.dry_run {
        info!("dry run, skipping outputs");
        (None, None)
    } else {
        let paths = OutputPaths::resolve(args);
        let output_start = Instant::now();
        let sqlite_rows =
            info_span!("output").in_scope(|| write_outputs(args, &header, &outcome, &paths))?;
        info!(
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        (Some(paths), sqlite_rows)
    };

    Ok(ProcessResult {
        input: input.clone(),
        total_lines: outcome.total(),
        accepted: outcome.accepted.len(),
        rejected: outcome.rejected.len(),
        rejections: RejectionSummary::from_rejected(&outcome.rejected),
        outputs,
        sqlite_rows,
    })
}

/// Write every enabled sink; returns the SQLite row count when enabled.
fn write_outputs(
    args: &ProcessArgs,
    header: &str,
    outcome: &BatchOutcome,
    paths: &OutputPaths,
) -> Result<Option<usize>> {
    write_accepted_csv(&paths.accepted_csv, &outcome.accepted).with_context(|| {
        format!("write accepted records {}", paths.accepted_csv.display())
    })?;
    write_rejected_csv(&paths.rejected_csv, header, &outcome.rejected)
        .with_context(|| format!("write rejected lines {}", paths.rejected_csv.display()))?;
    write_rejection_report_json(&paths.report_json, &args.input, outcome).with_context(|| {
        format!("write rejection report {}", paths.report_json.display())
    })?;
    let sqlite_rows = match &paths.sqlite {
        Some(path) => Some(
            write_sqlite_store(path, &outcome.accepted)
                .with_context(|| format!("write sqlite store {}", path.display()))?,
        ),
        None => None,
    };
    Ok(sqlite_rows)
}
