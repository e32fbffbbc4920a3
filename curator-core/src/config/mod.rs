//! Policy configuration.
//!
//! Constructed once by the host and passed by reference into every
//! component — an immutable value, never a process-wide global.

pub mod repos_config;
pub mod retention_config;

use serde::{Deserialize, Serialize};

use crate::constants::WILDCARD_TOKEN;
use crate::errors::{CuratorError, CuratorResult};

pub use repos_config::ReposConfig;
pub use retention_config::RetentionConfig;

/// Default values shared by the section `Default` impls and tests.
pub mod defaults {
    /// Most-recent entries always retained per leaf version group.
    pub const DEFAULT_KEEP_LATEST: u32 = 2;
    /// Minimum age (days, month-truncated) before an out-of-window entry
    /// may be archived.
    pub const DEFAULT_KEEP_DAYS: u32 = 90;

    pub fn default_select_projects() -> Vec<String> {
        vec![crate::constants::WILDCARD_TOKEN.to_string()]
    }
}

/// Root configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    pub repos: ReposConfig,
    pub retention: RetentionConfig,
}

impl CuratorConfig {
    /// Parse from a TOML string. Missing sections and fields fall back to
    /// defaults.
    pub fn from_toml(input: &str) -> CuratorResult<Self> {
        toml::from_str(input).map_err(|e| CuratorError::configuration(e.to_string()))
    }

    /// Sanity-check the loaded configuration.
    ///
    /// - An archive destination is required once any release repository is
    ///   configured (release walks archive, never delete).
    /// - A repository key cannot be both release and snapshot.
    /// - A wildcard that is not the first `select_projects` entry is legal
    ///   but inert (the filter only honors it in first position); warn.
    pub fn validate(&self) -> CuratorResult<()> {
        if !self.repos.release.is_empty() && self.repos.archive.trim().is_empty() {
            return Err(CuratorError::configuration(
                "release repositories configured but no archive repository set",
            ));
        }
        for key in &self.repos.release {
            if self.repos.snapshot.contains(key) {
                return Err(CuratorError::configuration(format!(
                    "repository '{key}' listed as both release and snapshot"
                )));
            }
        }
        let projects = &self.retention.select_projects;
        if projects.iter().skip(1).any(|p| p == WILDCARD_TOKEN) {
            tracing::warn!("wildcard in select_projects is only honored as the first entry");
        }
        Ok(())
    }
}
