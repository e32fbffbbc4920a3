//! # curator-core
//!
//! Foundation crate for the curator retention engine.
//! Defines the repository model, the host-service trait, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod spans;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CuratorConfig;
pub use errors::{CuratorError, CuratorResult};
pub use model::{ItemInfo, ItemKind, RepoPath, RetentionAction};
pub use traits::IRepositoryService;
