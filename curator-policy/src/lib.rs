//! # curator-policy
//!
//! The retention-and-archival decision engine: the recursive tree walk that
//! identifies retention candidates, the age/count policy deciding delete vs.
//! archive vs. keep, and the release/snapshot coupling.
//!
//! All repository access goes through the injected
//! [`curator_core::IRepositoryService`]; the engine holds no state across
//! invocations.

pub mod age;
pub mod engine;
pub mod filter;
pub mod report;
pub mod snapshot;

pub use engine::RetentionEngine;
pub use report::{CandidateFailure, WalkReport};
