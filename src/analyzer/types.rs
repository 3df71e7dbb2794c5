use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::FileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Web,
    Api,
    Mobile,
    Desktop,
    Library,
    AiMl,
    Game,
    Blockchain,
    Unknown,
}

impl ProjectType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Library => "library",
            Self::AiMl => "ai-ml",
            Self::Game => "game",
            Self::Blockchain => "blockchain",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared dependencies merged across every manifest found at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dependencies {
    pub production: BTreeMap<String, String>,
    pub development: BTreeMap<String, String>,
}

impl Dependencies {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.production.contains_key(name) || self.development.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.production.is_empty() && self.development.is_empty()
    }
}

/// Outcome of reading a tracked configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFileState {
    Parsed(serde_json::Value),
    /// The file exists but is not valid JSON; carries the parser message.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableEntry {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeDoc {
    pub path: String,
    pub content: String,
}

/// Point-in-time description of a project tree.
///
/// Built once by `ProjectAnalyzer::analyze` and only ever shared by reference
/// afterwards; re-analysis produces a fresh value. All paths are relative to
/// `root_path`, `/`-separated, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub root_path: PathBuf,
    pub name: String,
    pub project_type: ProjectType,
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub max_depth: usize,
    pub total_size: u64,
    /// Lowercase extension (without the dot) to files; files without one are not listed.
    pub files_by_extension: BTreeMap<String, Vec<String>>,
    pub files_by_type: BTreeMap<FileType, Vec<String>>,
    pub dependencies: Option<Dependencies>,
    /// Tracked configuration files present at the root.
    pub config_files: BTreeMap<String, ConfigFileState>,
    pub unreadable: Vec<UnreadableEntry>,
    /// Text of the files subject to style checks, so rule evaluation needs no I/O.
    pub sources: BTreeMap<String, String>,
    pub readme: Option<ReadmeDoc>,
}

impl ProjectSnapshot {
    /// An empty snapshot rooted at `root_path`; the starting point for analysis and tests.
    #[must_use]
    pub fn empty(root_path: impl Into<PathBuf>) -> Self {
        let root_path = root_path.into();
        let name = root_path
            .file_name()
            .map_or_else(|| "project".to_string(), |n| n.to_string_lossy().into_owned());
        Self {
            root_path,
            name,
            project_type: ProjectType::Unknown,
            directories: Vec::new(),
            files: Vec::new(),
            max_depth: 0,
            total_size: 0,
            files_by_extension: BTreeMap::new(),
            files_by_type: BTreeMap::new(),
            dependencies: None,
            config_files: BTreeMap::new(),
            unreadable: Vec::new(),
            sources: BTreeMap::new(),
            readme: None,
        }
    }

    #[must_use]
    pub fn has_file(&self, relative: &str) -> bool {
        self.files.iter().any(|f| f == relative)
    }

    #[must_use]
    pub fn has_directory(&self, relative: &str) -> bool {
        let relative = relative.trim_end_matches('/');
        self.directories.iter().any(|d| d == relative)
    }
}
