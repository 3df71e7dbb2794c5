mod file_types;
pub mod manifest;
mod project_type;
mod types;

pub use file_types::{FileType, extension_of};
pub use project_type::{TypeSignals, infer};
pub use types::{
    ConfigFileState, Dependencies, ProjectSnapshot, ProjectType, ReadmeDoc, UnreadableEntry,
};

use std::fs;
use std::path::Path;

use indexmap::IndexSet;

use crate::error::{GuardError, Result};
use crate::output::ScanProgress;
use crate::scanner::{CancelToken, EntryKind, NameFilter, TreeWalker, WalkEntry, WalkEvent};
use crate::standards::Settings;

use manifest::{CARGO_TOML, Manifest, PACKAGE_JSON, PYPROJECT_TOML, REQUIREMENTS_TXT};

/// Source files larger than this are not loaded for style checks.
pub const MAX_SOURCE_BYTES: u64 = 1024 * 1024;

/// Builds `ProjectSnapshot`s. Read-only: analysis never touches the tree it inspects.
pub struct ProjectAnalyzer {
    walker: TreeWalker<NameFilter>,
    tracked_configs: IndexSet<String>,
    style_extensions: IndexSet<String>,
    progress: Option<ScanProgress>,
}

impl ProjectAnalyzer {
    /// Create an analyzer for the given scanner settings and standards.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn new(settings: &Settings) -> Result<Self> {
        let filter = NameFilter::new(&settings.scanner.exclude)?;
        let walker = TreeWalker::new(filter).follow_links(settings.scanner.follow_links);

        Ok(Self {
            walker,
            tracked_configs: settings
                .standards
                .config_rules
                .per_file
                .keys()
                .cloned()
                .collect(),
            style_extensions: settings
                .standards
                .style_rules
                .extensions
                .iter()
                .map(|e| e.to_ascii_lowercase())
                .collect(),
            progress: None,
        })
    }

    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.walker = self.walker.with_cancel(token);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Walk `root` and describe it.
    ///
    /// # Errors
    /// Returns `PathNotFound` if `root` is not an existing directory, and
    /// `Interrupted` if the cancel token fired mid-walk. Unreadable entries and
    /// malformed config files are recorded in the snapshot instead.
    pub fn analyze(&self, root: &Path) -> Result<ProjectSnapshot> {
        if !root.is_dir() {
            return Err(GuardError::PathNotFound(root.to_path_buf()));
        }

        let mut snapshot = ProjectSnapshot::empty(dunce::canonicalize(root)?);

        for event in self.walker.walk(root) {
            if let Some(progress) = &self.progress {
                progress.inc();
            }
            match event {
                WalkEvent::Entry(entry) => self.record_entry(&mut snapshot, entry),
                WalkEvent::Unreadable { relative, reason } => {
                    snapshot.unreadable.push(UnreadableEntry {
                        path: relative,
                        reason,
                    });
                }
                WalkEvent::Cancelled => return Err(GuardError::Interrupted),
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish();
        }

        self.read_config_files(root, &mut snapshot);
        read_manifests(root, &mut snapshot);
        read_readme(root, &mut snapshot);
        snapshot.project_type = infer(&TypeSignals {
            dependencies: snapshot.dependencies.as_ref(),
            has_manifest: snapshot.has_file(PACKAGE_JSON) || snapshot.has_file(CARGO_TOML),
            has_python_requirements: snapshot.has_file(REQUIREMENTS_TXT)
                || snapshot.has_file(PYPROJECT_TOML),
            has_assets_dir: snapshot.has_directory("Assets"),
            has_contracts_dir: snapshot.has_directory("contracts"),
        });

        Ok(snapshot)
    }

    fn record_entry(&self, snapshot: &mut ProjectSnapshot, entry: WalkEntry) {
        snapshot.max_depth = snapshot.max_depth.max(entry.depth);

        if entry.kind == EntryKind::Directory {
            snapshot.directories.push(entry.relative);
            return;
        }

        snapshot.total_size += entry.size;
        let ext = extension_of(&entry.relative);
        let file_type = ext
            .as_deref()
            .map_or(FileType::Unknown, FileType::from_extension);

        if let Some(ext) = &ext {
            snapshot
                .files_by_extension
                .entry(ext.clone())
                .or_default()
                .push(entry.relative.clone());

            if self.style_extensions.contains(ext) {
                load_source(snapshot, &entry);
            }
        }

        snapshot
            .files_by_type
            .entry(file_type)
            .or_default()
            .push(entry.relative.clone());
        snapshot.files.push(entry.relative);
    }

    fn read_config_files(&self, root: &Path, snapshot: &mut ProjectSnapshot) {
        for name in &self.tracked_configs {
            if !snapshot.has_file(name) {
                continue;
            }
            let state = match fs::read_to_string(root.join(name)) {
                Ok(content) => parse_json_config(&content),
                Err(e) => ConfigFileState::Invalid(e.to_string()),
            };
            snapshot.config_files.insert(name.clone(), state);
        }
    }
}

fn load_source(snapshot: &mut ProjectSnapshot, entry: &WalkEntry) {
    if entry.size > MAX_SOURCE_BYTES {
        return;
    }
    match fs::read(&entry.path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            snapshot.sources.insert(entry.relative.clone(), text);
        }
        Err(e) => snapshot.unreadable.push(UnreadableEntry {
            path: entry.relative.clone(),
            reason: e.to_string(),
        }),
    }
}

/// Parses a JSON config file, tolerating whole-line `//` comments as found in
/// `tsconfig.json` and friends.
#[must_use]
pub fn parse_json_config(content: &str) -> ConfigFileState {
    let stripped: String = content
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");

    match serde_json::from_str(&stripped) {
        Ok(value) => ConfigFileState::Parsed(value),
        Err(e) => ConfigFileState::Invalid(e.to_string()),
    }
}

fn read_manifests(root: &Path, snapshot: &mut ProjectSnapshot) {
    let mut manifests: Vec<Manifest> = Vec::new();

    if snapshot.has_file(PACKAGE_JSON) {
        let parsed = match snapshot.config_files.get(PACKAGE_JSON) {
            Some(ConfigFileState::Parsed(value)) => Some(manifest::parse_package_json(value)),
            Some(ConfigFileState::Invalid(_)) => None,
            None => fs::read_to_string(root.join(PACKAGE_JSON))
                .ok()
                .and_then(|c| serde_json::from_str(&c).ok())
                .map(|v| manifest::parse_package_json(&v)),
        };
        manifests.extend(parsed);
    }

    if snapshot.has_file(CARGO_TOML)
        && let Ok(content) = fs::read_to_string(root.join(CARGO_TOML))
    {
        manifests.extend(manifest::parse_cargo_toml(&content));
    }

    if snapshot.has_file(REQUIREMENTS_TXT)
        && let Ok(content) = fs::read_to_string(root.join(REQUIREMENTS_TXT))
    {
        manifests.push(manifest::parse_requirements(&content));
    }

    if manifests.is_empty() {
        return;
    }

    let mut dependencies = Dependencies::default();
    let mut named = false;
    for m in manifests {
        if !named && let Some(name) = m.name {
            snapshot.name = name;
            named = true;
        }
        dependencies.production.extend(m.dependencies.production);
        dependencies.development.extend(m.dependencies.development);
    }
    snapshot.dependencies = Some(dependencies);
}

fn read_readme(root: &Path, snapshot: &mut ProjectSnapshot) {
    let Some(path) = snapshot
        .files
        .iter()
        .find(|f| {
            !f.contains('/')
                && crate::checker::casing::split_stem(f)
                    .0
                    .eq_ignore_ascii_case("readme")
        })
        .cloned()
    else {
        return;
    };

    if let Ok(bytes) = fs::read(root.join(&path)) {
        snapshot.readme = Some(ReadmeDoc {
            path,
            content: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
