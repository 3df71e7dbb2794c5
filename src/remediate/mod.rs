//! Applies the safe subset of fixes: case-convention renames, scaffolding of
//! missing files and directories, and a delegated formatter run.
//!
//! Fixes are applied one at a time and are not transactional: a failure is
//! recorded and the remaining fixes still run. Two remediation passes over the
//! same root must not run concurrently; no locking is done here.

mod formatter;
mod templates;

pub use formatter::{FormatCommand, FormatResult, ProcessFormatter};
pub use templates::{readme, render};

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::Serialize;

use crate::analyzer::ProjectSnapshot;
use crate::checker::{Category, Issue, Remedy};
use crate::error::{GuardError, Result};
use crate::standards::StandardsModel;

/// Which fix families to apply. Everything is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixOptions {
    pub auto_rename_naming: bool,
    pub scaffold_missing_files: bool,
    pub invoke_formatter: bool,
}

impl FixOptions {
    #[must_use]
    pub const fn any(&self) -> bool {
        self.auto_rename_naming || self.scaffold_missing_files || self.invoke_formatter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixKind {
    Rename,
    CreateFile,
    CreateDirectory,
    Format,
}

impl FixKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::CreateFile => "create-file",
            Self::CreateDirectory => "create-directory",
            Self::Format => "format",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum FixOutcome {
    Applied,
    Failed(String),
    Skipped(String),
}

/// Record of one attempted fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFix {
    pub kind: FixKind,
    /// Path relative to the project root (`from -> to` for renames).
    pub target: String,
    pub outcome: FixOutcome,
}

impl AppliedFix {
    fn from_result(kind: FixKind, target: String, result: Result<FixOutcome>) -> Self {
        let outcome = result.unwrap_or_else(|e| FixOutcome::Failed(e.to_string()));
        Self {
            kind,
            target,
            outcome,
        }
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self.outcome, FixOutcome::Applied)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, FixOutcome::Failed(_))
    }
}

pub struct Remediator<'a, C: FormatCommand = ProcessFormatter> {
    standards: &'a StandardsModel,
    formatter: C,
    options: FixOptions,
}

impl<'a, C: FormatCommand> Remediator<'a, C> {
    #[must_use]
    pub const fn new(standards: &'a StandardsModel, formatter: C, options: FixOptions) -> Self {
        Self {
            standards,
            formatter,
            options,
        }
    }

    /// Applies the enabled fixes for `issues` under `snapshot.root_path`.
    ///
    /// Order: file renames, directory renames (deepest first), scaffolding in
    /// issue order, then a single formatter run.
    pub fn apply(&self, snapshot: &ProjectSnapshot, issues: &[Issue]) -> Vec<AppliedFix> {
        let root = snapshot.root_path.as_path();
        let mut fixes = Vec::new();

        if self.options.auto_rename_naming {
            for (from, to) in rename_plan(snapshot, issues) {
                let result = rename(root, &from, &to);
                fixes.push(AppliedFix::from_result(
                    FixKind::Rename,
                    format!("{from} -> {to}"),
                    result,
                ));
            }
        }

        if self.options.scaffold_missing_files {
            let mut seen = IndexSet::new();
            for remedy in issues
                .iter()
                .filter(|i| matches!(i.category, Category::Structure | Category::Documentation))
                .filter_map(|i| i.remedy.as_ref())
            {
                if !seen.insert(remedy.clone()) {
                    continue;
                }
                match remedy {
                    Remedy::CreateFile { path } => {
                        let content = render(path, &snapshot.name, self.standards);
                        fixes.push(AppliedFix::from_result(
                            FixKind::CreateFile,
                            path.clone(),
                            create_file(root, path, &content),
                        ));
                    }
                    Remedy::CreateDirectory { path } => fixes.push(AppliedFix::from_result(
                        FixKind::CreateDirectory,
                        path.clone(),
                        create_directory(root, path),
                    )),
                    Remedy::Rename { .. } | Remedy::Reformat { .. } => {}
                }
            }
        }

        if self.options.invoke_formatter {
            let result = self.formatter.run(root).map(|r| {
                if r.succeeded() {
                    FixOutcome::Applied
                } else {
                    FixOutcome::Failed(format!("formatter exited with status {}", r.exit_code))
                }
            });
            fixes.push(AppliedFix::from_result(
                FixKind::Format,
                ".".to_string(),
                result,
            ));
        }

        fixes
    }
}

/// Naming renames with files first, then directories deepest first, so that
/// every planned source path is still valid when its turn comes.
fn rename_plan(snapshot: &ProjectSnapshot, issues: &[Issue]) -> Vec<(String, String)> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    for issue in issues.iter().filter(|i| i.category == Category::Naming) {
        let Some(Remedy::Rename { from, to }) = &issue.remedy else {
            continue;
        };
        if snapshot.has_directory(from) {
            dirs.push((from.clone(), to.clone()));
        } else {
            files.push((from.clone(), to.clone()));
        }
    }

    dirs.sort_by_key(|(from, _)| std::cmp::Reverse(from.matches('/').count()));
    files.extend(dirs);
    files
}

const MAX_TEMP_ATTEMPTS: u32 = 100;

fn rename(root: &Path, from: &str, to: &str) -> Result<FixOutcome> {
    let source = root.join(from);
    let dest = root.join(to);
    let failure = |reason: String| GuardError::FixApplication {
        path: source.clone(),
        reason,
    };

    if fs::symlink_metadata(&source).is_err() {
        return Err(failure("source no longer exists".to_string()));
    }

    let case_only = from != to && from.eq_ignore_ascii_case(to);
    if destination_taken(&dest, case_only) {
        return Err(failure(format!("destination `{to}` already exists")));
    }

    // `dest` resolving without an exact-name entry means the filesystem is
    // case-insensitive and both names are one entry.
    if case_only && fs::symlink_metadata(&dest).is_ok() {
        let temp = free_temp_path(&source)
            .ok_or_else(|| failure("no free temporary name for case-only rename".to_string()))?;
        fs::rename(&source, &temp).map_err(|e| failure(e.to_string()))?;
        fs::rename(&temp, &dest).map_err(|e| failure(e.to_string()))?;
    } else {
        fs::rename(&source, &dest).map_err(|e| failure(e.to_string()))?;
    }

    Ok(FixOutcome::Applied)
}

/// A sibling of `source` that does not exist yet, for two-step renames.
fn free_temp_path(source: &Path) -> Option<PathBuf> {
    (0..MAX_TEMP_ATTEMPTS).find_map(|attempt| {
        let mut name = source.as_os_str().to_os_string();
        name.push(".rename-tmp");
        if attempt > 0 {
            name.push(format!("-{attempt}"));
        }
        let candidate = PathBuf::from(name);
        fs::symlink_metadata(&candidate).is_err().then_some(candidate)
    })
}

fn destination_taken(dest: &Path, case_only: bool) -> bool {
    if fs::symlink_metadata(dest).is_err() {
        return false;
    }
    if !case_only {
        return true;
    }
    // `dest` may resolve to the source itself; only an exact name match is a conflict.
    let (Some(parent), Some(name)) = (dest.parent(), dest.file_name()) else {
        return true;
    };
    let Ok(entries) = fs::read_dir(parent) else {
        return true;
    };
    entries.flatten().any(|entry| entry.file_name() == name)
}

fn create_file(root: &Path, relative: &str, content: &str) -> Result<FixOutcome> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(FixOutcome::Skipped("already exists".to_string()));
        }
        Err(e) => {
            return Err(GuardError::FixApplication {
                path,
                reason: e.to_string(),
            });
        }
    };
    file.write_all(content.as_bytes())?;
    Ok(FixOutcome::Applied)
}

fn create_directory(root: &Path, relative: &str) -> Result<FixOutcome> {
    let path = root.join(relative);
    if path.is_dir() {
        return Ok(FixOutcome::Skipped("already exists".to_string()));
    }
    fs::create_dir_all(&path).map_err(|e| GuardError::FixApplication {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(FixOutcome::Applied)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
