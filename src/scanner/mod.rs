mod directory;
mod filter;
mod types;

pub use directory::{TreeWalker, Walk};
pub use filter::{EntryFilter, NameFilter};
pub use types::{CancelToken, EntryKind, WalkEntry, WalkEvent};
