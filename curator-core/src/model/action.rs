use std::fmt;

use serde::{Deserialize, Serialize};

/// Policy outcome applied to out-of-retention candidates.
///
/// Chosen once per walk by the caller, not per item. Closed enum with
/// exhaustive matching — there is no "unrecognized action" path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionAction {
    /// Remove the candidate outright. Irreversible.
    Delete,
    /// Relocate the candidate to the archive repository, subject to the
    /// age gate. Never destroys data.
    Archive,
}

impl fmt::Display for RetentionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete => write!(f, "delete"),
            Self::Archive => write!(f, "archive"),
        }
    }
}
