use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RejectKind;
use crate::record::RejectedLine;

/// Maximum example line numbers kept per rejection kind.
pub const MAX_EXAMPLES: usize = 3;

/// Rejections of one kind within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionEntry {
    pub kind: RejectKind,
    /// Human-readable description of the kind.
    pub message: String,
    pub count: u64,
    /// First few source line numbers with this kind.
    pub example_lines: Vec<usize>,
}

/// Rejections of a batch grouped by kind, in [`RejectKind`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionSummary {
    pub entries: Vec<RejectionEntry>,
}

impl RejectionSummary {
    pub fn from_rejected(rejected: &[RejectedLine]) -> Self {
        let mut grouped: BTreeMap<RejectKind, (u64, Vec<usize>)> = BTreeMap::new();
        for line in rejected {
            let (count, examples) = grouped.entry(line.error.kind()).or_default();
            *count += 1;
            if examples.len() < MAX_EXAMPLES {
                examples.push(line.line_number);
            }
        }
        let entries = grouped
            .into_iter()
            .map(|(kind, (count, example_lines))| RejectionEntry {
                kind,
                message: kind.description().to_string(),
                count,
                example_lines,
            })
            .collect();
        Self { entries }
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn count_for(&self, kind: RejectKind) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map_or(0, |entry| entry.count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
