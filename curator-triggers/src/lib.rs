//! # curator-triggers
//!
//! The two entry points that invoke the retention engine: an operator
//! batch trigger over named repositories, and the event hooks the host's
//! notification adapter calls on item creation/deletion.

pub mod batch;
pub mod events;

pub use batch::{run_batch, RepoOutcome};
pub use events::{on_before_delete, on_item_created};
