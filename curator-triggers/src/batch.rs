//! Operator-initiated batch cleanup.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use curator_core::batch_span;
use curator_core::model::{RepoPath, RetentionAction};
use curator_core::{CuratorConfig, IRepositoryService};
use curator_policy::{RetentionEngine, WalkReport};

/// Per-repository outcome of a batch invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RepoOutcome {
    /// The walk ran; the report may still carry per-candidate failures.
    Processed {
        repo: String,
        action: RetentionAction,
        report: WalkReport,
    },
    /// The key is neither a release nor a snapshot repository.
    Skipped { repo: String, reason: String },
    /// The walk itself failed (configuration or lookup error).
    Failed { repo: String, message: String },
}

/// Run the retention policy over a list of repository keys.
///
/// Release repositories are walked with [`RetentionAction::Archive`],
/// snapshot repositories with [`RetentionAction::Delete`]. Unrecognized
/// keys are logged and skipped; one repository's failure never stops the
/// rest.
pub fn run_batch(
    repo_keys: &[String],
    config: &CuratorConfig,
    service: &dyn IRepositoryService,
) -> Vec<RepoOutcome> {
    let span = batch_span!(repo_keys.len());
    let _guard = span.enter();

    repo_keys
        .iter()
        .map(|key| run_one(key, config, service))
        .collect()
}

fn run_one(key: &str, config: &CuratorConfig, service: &dyn IRepositoryService) -> RepoOutcome {
    let action = if config.repos.is_release(key) {
        RetentionAction::Archive
    } else if config.repos.is_snapshot(key) {
        RetentionAction::Delete
    } else {
        warn!(repo = key, "repository is neither release nor snapshot, skipping");
        return RepoOutcome::Skipped {
            repo: key.to_string(),
            reason: "not a configured release or snapshot repository".to_string(),
        };
    };

    let engine = RetentionEngine::new(service, config);
    match engine.process(&RepoPath::root(key), action) {
        Ok(report) => {
            info!(repo = key, %action, acted = report.acted(), "batch walk finished");
            RepoOutcome::Processed {
                repo: key.to_string(),
                action,
                report,
            }
        }
        Err(e) => {
            warn!(repo = key, error = %e, "batch walk failed");
            RepoOutcome::Failed {
                repo: key.to_string(),
                message: e.to_string(),
            }
        }
    }
}
