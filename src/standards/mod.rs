mod loader;
mod merge;
mod model;
pub mod presets;

pub use loader::{FileSystem, LoadResult, RealFileSystem, StandardsLoader};
pub use model::{
    Casing, ConfigFileRule, ConfigRules, DocRules, NamingRules, QuoteStyle, StandardsModel,
    StructureRules, StyleRules,
};

use serde::{Deserialize, Serialize};

/// Everything a standards document can carry: the rule catalog itself plus
/// the knobs of the tools that enforce it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Built-in preset this document builds on. Resolved by the loader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(flatten)]
    pub standards: StandardsModel,

    #[serde(default)]
    pub scanner: ScannerSettings,

    #[serde(default)]
    pub formatter: FormatterSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScannerSettings {
    /// Glob patterns matched against entry names at any depth; matching
    /// directories are never entered. A trailing `/` (`build/`) matches
    /// directories only, otherwise files with the same name are excluded too.
    pub exclude: Vec<String>,
    /// Follow symbolic links. Cycles are detected and skipped either way.
    pub follow_links: bool,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            exclude: [
                ".git/",
                ".svn/",
                ".hg/",
                "node_modules/",
                "target/",
                "dist/",
                "build/",
                "vendor/",
                "__pycache__/",
                ".venv/",
                "venv/",
                ".next/",
                "coverage/",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormatterSettings {
    /// Program and arguments, run with the project root as working directory.
    pub command: Vec<String>,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
