use std::ffi::OsStr;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{GuardError, Result};

/// Decides which entries the walker never yields (nor descends into).
pub trait EntryFilter {
    fn is_excluded(&self, name: &OsStr, is_dir: bool) -> bool;
}

/// Matches entry names (not full paths) against glob patterns such as
/// `*.log` or `*.egg-info`.
///
/// A trailing `/` restricts a pattern to directories, so `build/` skips a
/// `build` directory but keeps a file named `build`.
pub struct NameFilter {
    any: GlobSet,
    dirs_only: GlobSet,
}

impl NameFilter {
    /// Create a filter from exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut any = GlobSetBuilder::new();
        let mut dirs_only = GlobSetBuilder::new();
        for pattern in patterns {
            let (builder, glob) = match pattern.strip_suffix('/') {
                Some(dir_pattern) => (&mut dirs_only, dir_pattern),
                None => (&mut any, pattern.as_str()),
            };
            let glob = Glob::new(glob).map_err(|e| GuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }

        Ok(Self {
            any: build_set(&any)?,
            dirs_only: build_set(&dirs_only)?,
        })
    }
}

fn build_set(builder: &GlobSetBuilder) -> Result<GlobSet> {
    builder.build().map_err(|e| GuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

impl EntryFilter for NameFilter {
    fn is_excluded(&self, name: &OsStr, is_dir: bool) -> bool {
        self.any.is_match(name) || (is_dir && self.dirs_only.is_match(name))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
