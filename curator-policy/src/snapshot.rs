//! Release/snapshot coupling: publishing a release retires its snapshot.

use tracing::{debug, info};

use curator_core::constants::SNAPSHOT_SUFFIX;
use curator_core::coupling_span;
use curator_core::model::{ItemInfo, RepoPath};
use curator_core::{CuratorResult, IRepositoryService};

/// Delete the snapshot matching a newly created release item.
///
/// The expected snapshot relative path is the release path with
/// `-SNAPSHOT` appended. Every configured snapshot repository is checked;
/// absence in a repository is a no-op for that repository, so the call is
/// idempotent. Returns the number of snapshots actually deleted.
pub fn delete_matching_snapshot(
    release: &ItemInfo,
    snapshot_repos: &[String],
    service: &dyn IRepositoryService,
) -> CuratorResult<usize> {
    let span = coupling_span!(release.path);
    let _guard = span.enter();

    let snapshot_rel = format!("{}{}", release.path.rel_path(), SNAPSHOT_SUFFIX);
    let mut deleted = 0;

    for repo in snapshot_repos {
        let candidate = RepoPath::new(repo.clone(), &snapshot_rel);
        if service.exists(&candidate)? {
            service.delete(&candidate)?;
            info!(snapshot = %candidate, "deleted snapshot for published release");
            deleted += 1;
        } else {
            debug!(snapshot = %candidate, "no matching snapshot in repository");
        }
    }
    Ok(deleted)
}
