//! Event hooks for the host's notification adapter.

use tracing::{debug, info};

use curator_core::model::{ItemInfo, RepoPath, RetentionAction};
use curator_core::{CuratorConfig, CuratorResult, IRepositoryService};
use curator_policy::{snapshot, RetentionEngine, WalkReport};
use curator_policy::filter::is_selected;

/// Handle an "item created" notification.
///
/// For a folder created in a configured release repository whose path
/// passes the project filter: delete the matching snapshot, then run an
/// archive walk over the item's parent. Everything else is ignored.
/// Returns the walk report when the item triggered processing.
pub fn on_item_created(
    item: &ItemInfo,
    config: &CuratorConfig,
    service: &dyn IRepositoryService,
) -> CuratorResult<Option<WalkReport>> {
    if !config.repos.is_release(item.path.repo()) {
        debug!(item = %item.path, "created outside release repositories, ignoring");
        return Ok(None);
    }
    if !item.is_folder() {
        debug!(item = %item.path, "created item is not a folder, ignoring");
        return Ok(None);
    }
    if !is_selected(item.path.rel_path(), &config.retention.select_projects) {
        debug!(item = %item.path, "created item is not a selected project, ignoring");
        return Ok(None);
    }

    let snapshots =
        snapshot::delete_matching_snapshot(item, &config.repos.snapshot, service)?;
    info!(item = %item.path, snapshots, "release published, snapshot coupling done");

    let parent = item
        .parent()
        .unwrap_or_else(|| RepoPath::root(item.path.repo()));
    let report =
        RetentionEngine::new(service, config).process(&parent, RetentionAction::Archive)?;
    Ok(Some(report))
}

/// Handle an "item about to be deleted" notification.
///
/// Logging only for now; kept as an explicit extension point.
pub fn on_before_delete(item: &ItemInfo) {
    debug!(item = %item.path, "item about to be deleted");
}
