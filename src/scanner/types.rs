use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One (path, kind, size) triple produced by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Path relative to the walk root, `/`-separated on every platform.
    pub relative: String,
    pub kind: EntryKind,
    /// File length in bytes; 0 for directories.
    pub size: u64,
    /// Depth below the root (root children = 1).
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    Entry(WalkEntry),
    /// An entry that could not be stat'ed or read. The walk continues past it.
    Unreadable { relative: String, reason: String },
    /// The walk stopped because its `CancelToken` fired. Always the last event.
    Cancelled,
}

/// Shared flag a caller flips to stop a running walk at the next entry.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
