//! RetentionEngine: the recursive keep/delete/archive walk.
//!
//! Depth-first and sequential. Each node's children are fetched from the
//! repository service, sorted ascending by last-modified (a defensive sort;
//! ascending service order is a documented precondition, not a trusted one),
//! and classified by the typed kind of the newest child: a folder means an
//! intermediate node to recurse through, an artifact means a leaf version
//! group subject to the keep-latest window.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use curator_core::walk_span;
use curator_core::{CuratorConfig, CuratorError, CuratorResult, IRepositoryService};
use curator_core::model::{ItemInfo, RepoPath, RetentionAction};

use crate::age;
use crate::filter;
use crate::report::WalkReport;

/// The retention policy engine. Stateless across invocations: holds only
/// the injected service, the immutable config, and the walk mode.
pub struct RetentionEngine<'a> {
    service: &'a dyn IRepositoryService,
    config: &'a CuratorConfig,
    /// Record decisions without executing them.
    dry_run: bool,
    /// Fixed clock for tests; `None` means `Utc::now()` at walk start.
    now: Option<DateTime<Utc>>,
}

impl<'a> RetentionEngine<'a> {
    pub fn new(service: &'a dyn IRepositoryService, config: &'a CuratorConfig) -> Self {
        Self {
            service,
            config,
            dry_run: false,
            now: None,
        }
    }

    /// Evaluate the policy without mutating anything; decisions land in
    /// `WalkReport::planned`.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Pin the clock used for the age cutoff.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Walk the subtree rooted at `root`, applying `action` to every
    /// out-of-retention candidate in project-selected leaf groups.
    ///
    /// Individual delete/move failures are recorded in the report and do
    /// not stop the walk; only service lookup errors propagate.
    pub fn process(
        &self,
        root: &RepoPath,
        action: RetentionAction,
    ) -> CuratorResult<WalkReport> {
        if action == RetentionAction::Archive && self.config.repos.archive.trim().is_empty() {
            return Err(CuratorError::configuration(
                "archive walk requested but no archive repository configured",
            ));
        }

        let span = walk_span!(root, action);
        let _guard = span.enter();

        let now = self.now.unwrap_or_else(Utc::now);
        let mut report = WalkReport::default();
        self.walk(root, action, now, &mut report)?;

        info!(
            nodes = report.nodes_visited,
            leaf_groups = report.leaf_groups,
            deleted = report.deleted,
            archived = report.archived,
            skipped = report.age_gate_skipped,
            planned = report.planned,
            failures = report.failures.len(),
            "retention walk complete"
        );
        Ok(report)
    }

    fn walk(
        &self,
        path: &RepoPath,
        action: RetentionAction,
        now: DateTime<Utc>,
        report: &mut WalkReport,
    ) -> CuratorResult<()> {
        report.nodes_visited += 1;

        let mut children = self.service.get_children(path)?;
        if children.is_empty() {
            debug!(node = %path, "no children, nothing to do");
            return Ok(());
        }

        // Precondition says ascending already; sorting an ordered vec is
        // cheap and makes candidate selection independent of service order.
        children.sort_by_key(|c| c.last_modified);

        let newest_is_folder = children.last().is_some_and(|c| c.is_folder());
        if newest_is_folder {
            for child in &children {
                if child.is_folder() {
                    self.walk(&child.path, action, now, report)?;
                } else {
                    warn!(item = %child.path, "artifact among folder siblings, skipping");
                }
            }
            return Ok(());
        }

        self.evaluate_leaf_group(path, &children, action, now, report);
        Ok(())
    }

    /// Apply the keep-latest window to one leaf version group.
    fn evaluate_leaf_group(
        &self,
        path: &RepoPath,
        children: &[ItemInfo],
        action: RetentionAction,
        now: DateTime<Utc>,
        report: &mut WalkReport,
    ) {
        report.leaf_groups += 1;

        let window = self.config.retention.keep_latest as usize + 1;
        if children.len() <= window {
            debug!(node = %path, count = children.len(), "within retention window");
            return;
        }
        if !filter::is_selected(path.rel_path(), &self.config.retention.select_projects) {
            debug!(node = %path, "project not selected, leaving group untouched");
            return;
        }

        let excess = children.len() - window;
        debug!(node = %path, excess, %action, "leaf group over retention window");
        for candidate in &children[..excess] {
            self.apply(candidate, action, now, report);
        }
    }

    fn apply(
        &self,
        candidate: &ItemInfo,
        action: RetentionAction,
        now: DateTime<Utc>,
        report: &mut WalkReport,
    ) {
        match action {
            RetentionAction::Delete => {
                if self.dry_run {
                    report.planned += 1;
                    return;
                }
                match self.service.delete(&candidate.path) {
                    Ok(()) => {
                        info!(item = %candidate.path, "deleted out-of-retention item");
                        report.deleted += 1;
                    }
                    Err(e) => {
                        warn!(item = %candidate.path, error = %e, "delete failed, continuing");
                        report.record_failure(&candidate.path, "delete", e);
                    }
                }
            }
            RetentionAction::Archive => {
                // Age gate looks at the candidate's own subtree, not its
                // siblings.
                let grandchildren = match self.service.get_children(&candidate.path) {
                    Ok(items) => items,
                    Err(e) => {
                        warn!(item = %candidate.path, error = %e, "age probe failed, continuing");
                        report.record_failure(&candidate.path, "get_children", e);
                        return;
                    }
                };
                if !age::has_older_than(&grandchildren, self.config.retention.keep_days, now) {
                    debug!(item = %candidate.path, "inside age window, not archived");
                    report.age_gate_skipped += 1;
                    return;
                }
                if self.dry_run {
                    report.planned += 1;
                    return;
                }
                let dest = candidate.path.with_repo(self.config.repos.archive.clone());
                match self.service.move_item(&candidate.path, &dest) {
                    Ok(()) => {
                        info!(item = %candidate.path, %dest, "archived out-of-retention item");
                        report.archived += 1;
                    }
                    Err(e) => {
                        warn!(item = %candidate.path, error = %e, "move failed, continuing");
                        report.record_failure(&candidate.path, "move", e);
                    }
                }
            }
        }
    }
}
