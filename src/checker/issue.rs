use std::fmt;

use serde::{Deserialize, Serialize};

/// Rule family an issue belongs to. Declaration order is evaluation and report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Structure,
    Naming,
    CodeStyle,
    Documentation,
    Configuration,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Structure,
        Self::Naming,
        Self::CodeStyle,
        Self::Documentation,
        Self::Configuration,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Naming => "naming",
            Self::CodeStyle => "code-style",
            Self::Documentation => "documentation",
            Self::Configuration => "configuration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Urgency rank used for recommendation priority (higher = more urgent).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Error => 3,
            Self::Warning => 2,
            Self::Info => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-applicable fix attached to an issue. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Remedy {
    Rename { from: String, to: String },
    CreateFile { path: String },
    CreateDirectory { path: String },
    Reformat { path: String },
}

impl Remedy {
    /// Human-readable form of the fix, used as the issue suggestion.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Rename { from, to } => format!("rename `{from}` to `{to}`"),
            Self::CreateFile { path } => format!("create `{path}` from the built-in template"),
            Self::CreateDirectory { path } => format!("create directory `{path}/`"),
            Self::Reformat { path } => format!("run the configured formatter on `{path}`"),
        }
    }
}

/// A single deviation from the standards model. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip)]
    pub remedy: Option<Remedy>,
}

impl Issue {
    #[must_use]
    pub fn new(category: Category, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            target_path: None,
            suggestion: None,
            remedy: None,
        }
    }

    #[must_use]
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    /// Free-form suggestion for issues without a structured remedy.
    #[must_use]
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attaches a remedy; the suggestion text is derived from it.
    #[must_use]
    pub fn with_remedy(mut self, remedy: Remedy) -> Self {
        self.suggestion = Some(remedy.describe());
        self.remedy = Some(remedy);
        self
    }
}
