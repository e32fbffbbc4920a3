use serde::{Deserialize, Serialize};

use super::defaults;

/// Retention policy parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Number of most-recent leaf entries always retained. The retention
    /// window is `keep_latest + 1` entries: 0 keeps only the newest.
    pub keep_latest: u32,
    /// Minimum age in days before an out-of-window entry may be archived.
    /// Converted to whole calendar months by truncating division by 30.
    pub keep_days: u32,
    /// Ordered list of path substrings selecting projects, or `["*"]` for
    /// all projects. Empty selects nothing.
    pub select_projects: Vec<String>,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            keep_latest: defaults::DEFAULT_KEEP_LATEST,
            keep_days: defaults::DEFAULT_KEEP_DAYS,
            select_projects: defaults::default_select_projects(),
        }
    }
}
