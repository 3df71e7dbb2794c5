use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{CancelToken, EntryFilter, EntryKind, WalkEntry, WalkEvent};

/// Depth-first directory walker.
///
/// Entries are yielded lazily in a fixed order: a directory is followed by its
/// contents, and siblings come in byte-wise lexical order of their names.
/// Excluded names are neither yielded nor entered. When links are followed,
/// real directories are always walked; a directory symlink is skipped when its
/// target lies inside the root or was already reached through another link,
/// so every directory contributes entries exactly once under its real path.
/// Symlink loops are skipped silently.
pub struct TreeWalker<F: EntryFilter> {
    filter: F,
    follow_links: bool,
    cancel: Option<CancelToken>,
}

impl<F: EntryFilter> TreeWalker<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            follow_links: false,
            cancel: None,
        }
    }

    #[must_use]
    pub const fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Start walking `root`. The root itself is not yielded.
    pub fn walk(&self, root: &Path) -> Walk<'_, F> {
        let inner = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter();

        let canonical_root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

        Walk {
            walker: self,
            inner,
            root: root.to_path_buf(),
            canonical_root,
            linked_targets: HashSet::new(),
            done: false,
        }
    }
}

/// Streaming iterator over a tree; holds only the current directory stack.
pub struct Walk<'a, F: EntryFilter> {
    walker: &'a TreeWalker<F>,
    inner: walkdir::IntoIter,
    root: PathBuf,
    canonical_root: PathBuf,
    /// Outside-the-root directories already entered through a symlink.
    linked_targets: HashSet<PathBuf>,
    done: bool,
}

impl<F: EntryFilter> Walk<'_, F> {
    fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn is_duplicate_link(&mut self, link: &Path) -> bool {
        let Ok(target) = dunce::canonicalize(link) else {
            return true;
        };
        target.starts_with(&self.canonical_root) || !self.linked_targets.insert(target)
    }

    fn on_error(&self, err: &walkdir::Error) -> Option<WalkEvent> {
        if err.loop_ancestor().is_some() {
            return None;
        }
        let relative = err
            .path()
            .map_or_else(String::new, |p| self.relative(p));
        let reason = err
            .io_error()
            .map_or_else(|| err.to_string(), ToString::to_string);
        Some(WalkEvent::Unreadable { relative, reason })
    }

    fn on_entry(&mut self, entry: &walkdir::DirEntry) -> Option<WalkEvent> {
        if entry.depth() == 0 {
            return None;
        }

        let is_dir = entry.file_type().is_dir();
        if self.walker.filter.is_excluded(entry.file_name(), is_dir) {
            if is_dir {
                self.inner.skip_current_dir();
            }
            return None;
        }

        let relative = self.relative(entry.path());

        if entry.file_type().is_dir() {
            if entry.path_is_symlink() && self.is_duplicate_link(entry.path()) {
                self.inner.skip_current_dir();
                return None;
            }
            return Some(WalkEvent::Entry(WalkEntry {
                path: entry.path().to_path_buf(),
                relative,
                kind: EntryKind::Directory,
                size: 0,
                depth: entry.depth(),
            }));
        }

        if !entry.file_type().is_file() {
            // Unfollowed symlinks and special files.
            return None;
        }

        match entry.metadata() {
            Ok(meta) => Some(WalkEvent::Entry(WalkEntry {
                path: entry.path().to_path_buf(),
                relative,
                kind: EntryKind::File,
                size: meta.len(),
                depth: entry.depth(),
            })),
            Err(err) => Some(WalkEvent::Unreadable {
                relative,
                reason: err.to_string(),
            }),
        }
    }
}

impl<F: EntryFilter> Iterator for Walk<'_, F> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if self
                .walker
                .cancel
                .as_ref()
                .is_some_and(CancelToken::is_cancelled)
            {
                self.done = true;
                return Some(WalkEvent::Cancelled);
            }

            let event = match self.inner.next()? {
                Ok(entry) => self.on_entry(&entry),
                Err(err) => self.on_error(&err),
            };

            if event.is_some() {
                return event;
            }
        }
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
