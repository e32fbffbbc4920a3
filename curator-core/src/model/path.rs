use std::fmt;

use serde::{Deserialize, Serialize};

/// Repository key + slash-separated relative path.
///
/// Immutable value used as the unit of lookup, delete, and move operations.
/// The root of a repository is the empty relative path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RepoPath {
    repo: String,
    rel: String,
}

impl RepoPath {
    /// Create a path, normalizing away leading/trailing slashes.
    pub fn new(repo: impl Into<String>, rel: impl AsRef<str>) -> Self {
        Self {
            repo: repo.into(),
            rel: rel.as_ref().trim_matches('/').to_string(),
        }
    }

    /// The root path of a repository.
    pub fn root(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            rel: String::new(),
        }
    }

    /// Repository key.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Relative path within the repository. Empty for the root.
    pub fn rel_path(&self) -> &str {
        &self.rel
    }

    /// Last path segment, or empty for the root.
    pub fn name(&self) -> &str {
        self.rel.rsplit('/').next().unwrap_or("")
    }

    /// Whether this is the repository root.
    pub fn is_root(&self) -> bool {
        self.rel.is_empty()
    }

    /// Child path under this one.
    pub fn child(&self, name: &str) -> Self {
        let rel = if self.rel.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.rel, name)
        };
        Self::new(self.repo.clone(), rel)
    }

    /// Parent path, or `None` for the repository root.
    pub fn parent(&self) -> Option<Self> {
        if self.rel.is_empty() {
            return None;
        }
        match self.rel.rfind('/') {
            Some(idx) => Some(Self::new(self.repo.clone(), &self.rel[..idx])),
            None => Some(Self::root(self.repo.clone())),
        }
    }

    /// Same relative path in another repository. Used to derive archive
    /// destinations and snapshot lookups.
    pub fn with_repo(&self, repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            rel: self.rel.clone(),
        }
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repo, self.rel)
    }
}
