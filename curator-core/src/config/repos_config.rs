use serde::{Deserialize, Serialize};

/// Repository-role configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReposConfig {
    /// Repository keys that receive finalized, versioned builds.
    pub release: Vec<String>,
    /// Repository keys searched for matching `-SNAPSHOT` builds.
    pub snapshot: Vec<String>,
    /// Destination repository for archived artifacts.
    pub archive: String,
}

impl ReposConfig {
    pub fn is_release(&self, key: &str) -> bool {
        self.release.iter().any(|r| r == key)
    }

    pub fn is_snapshot(&self, key: &str) -> bool {
        self.snapshot.iter().any(|r| r == key)
    }
}
