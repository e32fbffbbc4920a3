//! Span definitions per operation: walk, batch trigger, snapshot coupling.
//!
//! Each span carries its key parameters via the `tracing` crate.

/// Create a span for one retention walk.
#[macro_export]
macro_rules! walk_span {
    ($root:expr, $action:expr) => {
        tracing::info_span!("curator.walk", root = %$root, action = %$action)
    };
}

/// Create a span for a batch trigger invocation.
#[macro_export]
macro_rules! batch_span {
    ($repo_count:expr) => {
        tracing::info_span!("curator.batch", repo_count = $repo_count)
    };
}

/// Create a span for release/snapshot coupling.
#[macro_export]
macro_rules! coupling_span {
    ($release:expr) => {
        tracing::info_span!("curator.coupling", release = %$release)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const WALK: &str = "curator.walk";
    pub const BATCH: &str = "curator.batch";
    pub const COUPLING: &str = "curator.coupling";
}
