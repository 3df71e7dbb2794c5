use std::fs;
use std::path::Path;

use serde::Serialize;
use time::OffsetDateTime;

use crate::analyzer::ProjectType;
use crate::checker::Issue;
use crate::error::Result;
use crate::recommend::Recommendation;
use crate::validation::ValidationResult;

/// Structured report of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub project: ProjectInfo,
    pub analysis: AnalysisInfo,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
    #[serde(with = "time::serde::rfc3339")]
    pub generated: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisInfo {
    pub files: usize,
    pub directories: usize,
    /// Total file size, human readable (`12.4 KB`).
    pub size: String,
}

/// Builds reports. The clock is read once per `emit`; everything else comes
/// from the validation result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportEmitter;

impl ReportEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn emit(&self, result: &ValidationResult) -> Report {
        self.emit_at(result, OffsetDateTime::now_utc())
    }

    #[must_use]
    pub fn emit_at(&self, result: &ValidationResult, generated: OffsetDateTime) -> Report {
        let snapshot = &result.snapshot;
        Report {
            project: ProjectInfo {
                name: snapshot.name.clone(),
                path: snapshot.root_path.display().to_string(),
                project_type: snapshot.project_type,
                score: result.score,
            },
            analysis: AnalysisInfo {
                files: snapshot.files.len(),
                directories: snapshot.directories.len(),
                size: human_size(snapshot.total_size),
            },
            issues: result.issues.clone(),
            recommendations: result.recommendations.clone(),
            generated,
        }
    }
}

/// Formats a byte count with binary units and one decimal (`1.5 MB`).
#[must_use]
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Serializes `report` as pretty JSON to `path`, replacing any previous report.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
