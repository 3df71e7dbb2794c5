use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Path not found or not a directory: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Cannot read entry {}: {reason}", path.display())]
    UnreadableEntry { path: PathBuf, reason: String },

    #[error("Malformed JSON in {file}: {message}")]
    ConfigParse { file: String, message: String },

    #[error("Cannot apply fix to {}: {reason}", path.display())]
    FixApplication { path: PathBuf, reason: String },

    #[error("Formatter failed: {0}")]
    FormatterInvocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Analysis interrupted")]
    Interrupted,

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl GuardError {
    /// Short, stable name of the error kind used as the heading of CLI diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PathNotFound(_) => "PathNotFound",
            Self::UnreadableEntry { .. } => "UnreadableEntry",
            Self::ConfigParse { .. } => "ConfigParse",
            Self::FixApplication { .. } => "FixApplication",
            Self::FormatterInvocation(_) => "FormatterInvocation",
            Self::Config(_) => "Config",
            Self::Interrupted => "Interrupted",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Actionable hint printed under the error, when one exists.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::PathNotFound(_) => {
                Some("Pass an existing project directory as the path argument".to_string())
            }
            Self::Config(_) | Self::TomlParse(_) => Some(
                "Check the standards file format; `consistency-guard init` writes a valid template"
                    .to_string(),
            ),
            Self::InvalidPattern { .. } => {
                Some("Use glob syntax such as `node_modules/` or `*.egg-info`".to_string())
            }
            Self::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Some("Check file permissions".to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
