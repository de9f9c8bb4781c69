//! Public output types for renumber command responses.
//!
//! These are produced by the renamer and serialized by the CLI.

use serde::Serialize;

use crate::naming::DigitPolicy;

/// What happened (or would happen) to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameStatus {
    /// Name already canonical.
    Unchanged,
    /// Rename computed but not applied (dry run).
    Pending,
    /// Renamed on disk.
    Renamed,
}

/// Outcome for a single markdown entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryOutcome {
    pub sequence: usize,
    pub from: String,
    pub to: String,
    pub status: RenameStatus,
}

/// Warning about a rename that may collide with another entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameWarning {
    pub kind: String,
    pub from: String,
    pub to: String,
    pub message: String,
}

/// Counts across all entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub renamed: usize,
    pub pending: usize,
    pub unchanged: usize,
}

impl RunSummary {
    pub fn from_entries(entries: &[EntryOutcome]) -> Self {
        let mut summary = RunSummary {
            total: entries.len(),
            ..Default::default()
        };
        for entry in entries {
            match entry.status {
                RenameStatus::Unchanged => summary.unchanged += 1,
                RenameStatus::Pending => summary.pending += 1,
                RenameStatus::Renamed => summary.renamed += 1,
            }
        }
        summary
    }
}

/// Full report of one renumber run.
#[derive(Debug, Clone, Serialize)]
pub struct RenumberResult {
    pub dir: String,
    pub slug_digits: DigitPolicy,
    pub dry_run: bool,
    pub entries: Vec<EntryOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RenameWarning>,
    pub summary: RunSummary,
    /// Whether changes were written to disk.
    pub applied: bool,
}
