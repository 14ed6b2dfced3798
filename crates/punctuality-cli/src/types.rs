use std::path::{Path, PathBuf};

use punctuality_model::RejectionSummary;

use crate::cli::ProcessArgs;

/// Resolved output locations for one `process` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub accepted_csv: PathBuf,
    pub rejected_csv: PathBuf,
    /// `None` when the SQLite store is disabled.
    pub sqlite: Option<PathBuf>,
    pub report_json: PathBuf,
}

impl OutputPaths {
    /// Explicit paths win; the rest land in the output directory.
    pub fn resolve(args: &ProcessArgs) -> Self {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.input));
        let sqlite = if args.no_sqlite {
            None
        } else {
            Some(
                args.sqlite
                    .clone()
                    .unwrap_or_else(|| dir.join("punctuality.sqlite")),
            )
        };
        Self {
            accepted_csv: args
                .accepted_csv
                .clone()
                .unwrap_or_else(|| dir.join("accepted.csv")),
            rejected_csv: args
                .rejected_csv
                .clone()
                .unwrap_or_else(|| dir.join("rejected.csv")),
            sqlite,
            report_json: args
                .report_json
                .clone()
                .unwrap_or_else(|| dir.join("rejections.json")),
        }
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    pub total_lines: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub rejections: RejectionSummary,
    /// `None` for dry runs.
    pub outputs: Option<OutputPaths>,
    pub sqlite_rows: Option<usize>,
}
