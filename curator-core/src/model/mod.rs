pub mod action;
pub mod item;
pub mod path;

pub use action::RetentionAction;
pub use item::{ItemInfo, ItemKind};
pub use path::RepoPath;
