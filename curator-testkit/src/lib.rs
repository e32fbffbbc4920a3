//! In-memory [`IRepositoryService`] for tests across the workspace.
//!
//! Items are held in insertion order so tests can exercise both the
//! documented ascending-order precondition and unordered services. Delete
//! and move can be armed to fail on specific paths to test failure
//! isolation.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use curator_core::model::{ItemInfo, ItemKind, RepoPath};
use curator_core::{CuratorError, CuratorResult, IRepositoryService};

/// Timestamp `days` days before now. Fixture convenience.
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

#[derive(Default)]
struct Inner {
    items: Vec<ItemInfo>,
    fail_delete: Vec<RepoPath>,
    fail_move: Vec<RepoPath>,
}

/// In-memory repository tree.
#[derive(Default)]
pub struct MemoryRepositoryService {
    inner: Mutex<Inner>,
}

impl MemoryRepositoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a folder node.
    pub fn add_folder(&self, repo: &str, rel: &str, last_modified: DateTime<Utc>) {
        self.add(repo, rel, ItemKind::Folder, last_modified);
    }

    /// Insert an artifact node.
    pub fn add_artifact(&self, repo: &str, rel: &str, last_modified: DateTime<Utc>) {
        self.add(repo, rel, ItemKind::Artifact, last_modified);
    }

    fn add(&self, repo: &str, rel: &str, kind: ItemKind, last_modified: DateTime<Utc>) {
        let path = RepoPath::new(repo, rel);
        let item = ItemInfo::new(path, kind, last_modified);
        self.lock().items.push(item);
    }

    /// Arm a delete failure for one path.
    pub fn fail_delete_on(&self, repo: &str, rel: &str) {
        self.lock().fail_delete.push(RepoPath::new(repo, rel));
    }

    /// Arm a move failure for one path.
    pub fn fail_move_on(&self, repo: &str, rel: &str) {
        self.lock().fail_move.push(RepoPath::new(repo, rel));
    }

    /// Whether an item exists at `repo:rel`.
    pub fn contains(&self, repo: &str, rel: &str) -> bool {
        let path = RepoPath::new(repo, rel);
        self.lock().items.iter().any(|i| i.path == path)
    }

    /// All relative paths in a repository, sorted. Assertion helper.
    pub fn rel_paths(&self, repo: &str) -> Vec<String> {
        let mut paths: Vec<String> = self
            .lock()
            .items
            .iter()
            .filter(|i| i.path.repo() == repo)
            .map(|i| i.path.rel_path().to_string())
            .collect();
        paths.sort();
        paths
    }

    /// Total item count across all repositories.
    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("testkit mutex poisoned")
    }
}

fn in_subtree(item: &ItemInfo, root: &RepoPath) -> bool {
    item.path.repo() == root.repo()
        && (item.path == *root
            || item
                .path
                .rel_path()
                .starts_with(&format!("{}/", root.rel_path()))
            || root.is_root())
}

impl IRepositoryService for MemoryRepositoryService {
    fn get_children(&self, path: &RepoPath) -> CuratorResult<Vec<ItemInfo>> {
        let inner = self.lock();
        let children = inner
            .items
            .iter()
            .filter(|i| i.path.repo() == path.repo() && i.parent().as_ref() == Some(path))
            .cloned()
            .collect();
        Ok(children)
    }

    fn exists(&self, path: &RepoPath) -> CuratorResult<bool> {
        Ok(self.lock().items.iter().any(|i| i.path == *path))
    }

    fn delete(&self, path: &RepoPath) -> CuratorResult<()> {
        let mut inner = self.lock();
        if inner.fail_delete.contains(path) {
            return Err(CuratorError::service_operation(
                "delete",
                path,
                "injected failure",
            ));
        }
        if !inner.items.iter().any(|i| i.path == *path) {
            return Err(CuratorError::Lookup {
                path: path.to_string(),
            });
        }
        inner.items.retain(|i| !in_subtree(i, path));
        Ok(())
    }

    fn move_item(&self, from: &RepoPath, to: &RepoPath) -> CuratorResult<()> {
        let mut inner = self.lock();
        if inner.fail_move.contains(from) {
            return Err(CuratorError::service_operation(
                "move",
                from,
                "injected failure",
            ));
        }
        if !inner.items.iter().any(|i| i.path == *from) {
            return Err(CuratorError::Lookup {
                path: from.to_string(),
            });
        }
        for item in inner.items.iter_mut().filter(|i| in_subtree(i, from)) {
            let suffix = item.path.rel_path()[from.rel_path().len()..].to_string();
            let new_rel = format!("{}{}", to.rel_path(), suffix);
            item.path = RepoPath::new(to.repo(), new_rel);
            item.name = item.path.name().to_string();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_come_back_in_insertion_order() {
        let service = MemoryRepositoryService::new();
        service.add_artifact("r", "app/b", days_ago(1));
        service.add_artifact("r", "app/a", days_ago(2));
        service.add_folder("r", "app", days_ago(3));

        let children = service
            .get_children(&RepoPath::new("r", "app"))
            .unwrap();
        let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn delete_removes_whole_subtree() {
        let service = MemoryRepositoryService::new();
        service.add_folder("r", "app", days_ago(3));
        service.add_artifact("r", "app/v1", days_ago(2));
        service.add_artifact("r", "app/v1/lib.jar", days_ago(2));

        service.delete(&RepoPath::new("r", "app/v1")).unwrap();
        assert!(!service.contains("r", "app/v1"));
        assert!(!service.contains("r", "app/v1/lib.jar"));
        assert!(service.contains("r", "app"));
    }

    #[test]
    fn move_rewrites_repo_and_prefix() {
        let service = MemoryRepositoryService::new();
        service.add_artifact("r", "app/v1", days_ago(2));
        service.add_artifact("r", "app/v1/lib.jar", days_ago(2));

        service
            .move_item(&RepoPath::new("r", "app/v1"), &RepoPath::new("a", "app/v1"))
            .unwrap();
        assert!(!service.contains("r", "app/v1"));
        assert!(service.contains("a", "app/v1"));
        assert!(service.contains("a", "app/v1/lib.jar"));
    }

    #[test]
    fn missing_path_has_no_children() {
        let service = MemoryRepositoryService::new();
        let children = service
            .get_children(&RepoPath::new("r", "not/there"))
            .unwrap();
        assert!(children.is_empty());
    }
}
