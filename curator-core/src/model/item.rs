use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::path::RepoPath;

/// Typed folder/artifact distinction, supplied by the repository service.
///
/// This replaces the source system's inference of node structure from the
/// type of the last sibling: the service tells us what each item is.
/// An `Artifact` is a retention unit (a version entry or concrete build
/// output); the host may still expose metadata children beneath it, which
/// the age gate consults but the walk never descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Folder,
    Artifact,
}

/// Read-only view of a repository tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInfo {
    /// Last path segment.
    pub name: String,
    /// Full location of this item.
    pub path: RepoPath,
    /// Folder or artifact, per the repository service.
    pub kind: ItemKind,
    /// Last-modified timestamp, used for ordering and the age cutoff.
    pub last_modified: DateTime<Utc>,
}

impl ItemInfo {
    pub fn new(path: RepoPath, kind: ItemKind, last_modified: DateTime<Utc>) -> Self {
        Self {
            name: path.name().to_string(),
            path,
            kind,
            last_modified,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    /// Parent path, or `None` if the item sits at the repository root.
    pub fn parent(&self) -> Option<RepoPath> {
        self.path.parent()
    }
}
