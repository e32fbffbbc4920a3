//! Structured outcome of one retention walk.

use serde::{Deserialize, Serialize};

/// A delete/move that failed at the repository-service boundary.
///
/// Recorded per candidate; never aborts sibling processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFailure {
    pub path: String,
    pub operation: String,
    pub reason: String,
}

/// Counters and failures accumulated over a walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkReport {
    /// Tree nodes visited, intermediate and leaf alike.
    pub nodes_visited: usize,
    /// Leaf version groups evaluated against the policy.
    pub leaf_groups: usize,
    /// Candidates deleted.
    pub deleted: usize,
    /// Candidates relocated to the archive repository.
    pub archived: usize,
    /// Archive candidates left in place because no child crossed the age
    /// cutoff.
    pub age_gate_skipped: usize,
    /// Decisions recorded but not executed (dry-run mode).
    pub planned: usize,
    /// Per-candidate service failures.
    pub failures: Vec<CandidateFailure>,
}

impl WalkReport {
    /// Total mutations performed.
    pub fn acted(&self) -> usize {
        self.deleted + self.archived
    }

    /// Whether the walk completed without any candidate failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record_failure(
        &mut self,
        path: impl ToString,
        operation: &str,
        reason: impl ToString,
    ) {
        self.failures.push(CandidateFailure {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        });
    }
}
