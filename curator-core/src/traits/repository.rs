use crate::errors::CuratorResult;
use crate::model::{ItemInfo, RepoPath};

/// Seam to the host repository manager's storage layer.
///
/// Each call is assumed correct and atomic on the host side; the engine
/// never retries. Preconditions the engine documents rather than enforces:
///
/// - `get_children` SHOULD return items in ascending recency order. The
///   engine sorts defensively by `last_modified`, so a service that cannot
///   guarantee ordering is still handled correctly.
/// - `get_children` on a missing or empty path returns an empty vec, not an
///   error — "nothing there" is a normal answer during a walk.
pub trait IRepositoryService: Send + Sync {
    /// Direct children of a path.
    fn get_children(&self, path: &RepoPath) -> CuratorResult<Vec<ItemInfo>>;

    /// Whether an item exists at the path.
    fn exists(&self, path: &RepoPath) -> CuratorResult<bool>;

    /// Delete the item and its subtree. Irreversible.
    fn delete(&self, path: &RepoPath) -> CuratorResult<()>;

    /// Relocate the item and its subtree to another repository path.
    fn move_item(&self, from: &RepoPath, to: &RepoPath) -> CuratorResult<()>;
}
