//! Error taxonomy for the retention engine.
//!
//! `UnrecognizedAction` from the source taxonomy has no variant here: the
//! closed [`crate::model::RetentionAction`] enum makes it unrepresentable.

/// Errors surfaced by the retention engine and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    /// Missing or malformed policy configuration. Fatal at load time.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// A path was expected to exist but does not. The engine itself treats
    /// missing children as "nothing to process"; this variant is for
    /// callers that require the path.
    #[error("path not found: {path}")]
    Lookup { path: String },

    /// A delete/move call failed at the repository-service boundary.
    /// Per-candidate: recorded and skipped, never aborts sibling processing.
    #[error("{operation} failed for {path}: {reason}")]
    ServiceOperation {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CuratorError {
    /// Shorthand for a configuration error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Shorthand for a service-operation error.
    pub fn service_operation(
        operation: impl Into<String>,
        path: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::ServiceOperation {
            operation: operation.into(),
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

pub type CuratorResult<T> = Result<T, CuratorError>;
