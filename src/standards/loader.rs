use std::path::{Path, PathBuf};

use crate::error::{GuardError, Result};
use crate::scanner::NameFilter;

use super::Settings;
use super::merge::{merge_toml_values, strip_reset_markers};
use super::presets;

/// Result of loading standards, with where they came from so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub settings: Settings,
    /// Document the settings were read from; `None` for built-in defaults or a bare preset.
    pub source: Option<PathBuf>,
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the platform-specific configuration directory for consistency-guard.
    ///
    /// - Windows: `%APPDATA%\consistency-guard`
    /// - macOS: `~/Library/Application Support/consistency-guard`
    /// - Linux: `~/.config/consistency-guard` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "consistency-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

pub const LOCAL_CONFIG_NAMES: &[&str] = &[".consistency.toml", ".consistency.json"];
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads the standards model for a project.
///
/// Search order:
/// 1. `.consistency.toml`, then `.consistency.json`, in the project root
/// 2. `config.toml` in the platform config directory
/// 3. The built-in model
#[derive(Debug, Default)]
pub struct StandardsLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    preset: Option<String>,
}

impl StandardsLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fs: RealFileSystem,
            preset: None,
        }
    }
}

impl<F: FileSystem> StandardsLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs, preset: None }
    }

    /// Preset applied underneath whatever document is found. A `preset` key in
    /// the document itself takes precedence.
    #[must_use]
    pub fn with_preset(mut self, preset: Option<String>) -> Self {
        self.preset = preset;
        self
    }

    /// Discover and load standards for the project at `project_root`.
    ///
    /// # Errors
    /// Returns an error if a discovered document cannot be read or parsed.
    pub fn load(&self, project_root: &Path) -> Result<LoadResult> {
        let local = LOCAL_CONFIG_NAMES
            .iter()
            .map(|name| project_root.join(name))
            .find(|path| self.fs.exists(path));

        let user = self
            .fs
            .config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME))
            .filter(|path| self.fs.exists(path));

        match local.or(user) {
            Some(path) => self.load_from_path(&path),
            None => self.load_defaults(),
        }
    }

    /// Load standards from an explicit document.
    ///
    /// # Errors
    /// Returns an error if the file does not exist, cannot be read, or is malformed.
    pub fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        if !self.fs.exists(path) {
            return Err(GuardError::Config(format!(
                "Standards file not found: {}",
                path.display()
            )));
        }

        let content = self.fs.read_to_string(path)?;
        let document = parse_document(path, &content)?;
        let settings = self.resolve(document)?;

        Ok(LoadResult {
            settings,
            source: Some(path.to_path_buf()),
        })
    }

    /// The built-in model, or the configured preset on its own.
    ///
    /// # Errors
    /// Returns an error if the configured preset is unknown.
    pub fn load_defaults(&self) -> Result<LoadResult> {
        let settings = self.resolve(toml::Value::Table(toml::Table::new()))?;
        Ok(LoadResult {
            settings,
            source: None,
        })
    }

    fn resolve(&self, document: toml::Value) -> Result<Settings> {
        reject_unknown_sections(&document)?;

        let preset = document
            .get("preset")
            .and_then(toml::Value::as_str)
            .map(str::to_string)
            .or_else(|| self.preset.clone());

        let value = match preset.as_deref() {
            Some(name) => merge_toml_values(presets::load_preset(name)?, document),
            None => strip_reset_markers(document),
        };

        let mut settings = value.try_into::<Settings>()?;
        settings.preset = preset;
        validate_settings(&settings)?;
        Ok(settings)
    }
}

/// Top-level keys a standards document may carry.
const DOCUMENT_KEYS: &[&str] = &[
    "preset",
    "namingRules",
    "structureRules",
    "styleRules",
    "docRules",
    "configRules",
    "scanner",
    "formatter",
];

/// Rejects top-level keys `Settings` would otherwise drop through `flatten`.
fn reject_unknown_sections(document: &toml::Value) -> Result<()> {
    let Some(table) = document.as_table() else {
        return Err(GuardError::Config(
            "Standards document must be a table".to_string(),
        ));
    };

    match table.keys().find(|key| !DOCUMENT_KEYS.contains(&key.as_str())) {
        Some(key) => Err(GuardError::Config(format!(
            "Unknown standards section '{key}'. Expected one of: {}",
            DOCUMENT_KEYS.join(", ")
        ))),
        None => Ok(()),
    }
}

fn parse_document(path: &Path, content: &str) -> Result<toml::Value> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let json: serde_json::Value = serde_json::from_str(content)?;
        toml::Value::try_from(json).map_err(|e| {
            GuardError::Config(format!(
                "Unsupported value in {}: {e}",
                path.display()
            ))
        })
    } else {
        Ok(toml::from_str(content)?)
    }
}

/// Semantic checks serde cannot express.
///
/// # Errors
/// Returns an error for a zero indent width or an invalid scanner glob.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.standards.style_rules.indent_width == 0 {
        return Err(GuardError::Config(
            "styleRules.indentWidth must be at least 1".to_string(),
        ));
    }

    NameFilter::new(&settings.scanner.exclude)?;

    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
