use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::ProjectSnapshot;
use crate::standards::StandardsModel;

use super::{Category, Issue, Remedy, Severity};

/// ATX heading of any level; captures the heading text without closing hashes.
static HEADING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^ {0,3}#{1,6}[ \t]+(.+?)[ \t#]*$").ok());

pub fn check(snapshot: &ProjectSnapshot, standards: &StandardsModel) -> Vec<Issue> {
    let rules = &standards.doc_rules;
    let mut issues = Vec::new();

    for file in &rules.required_files {
        // Already reported as a missing structure file.
        if standards.structure_rules.required_files.contains(file) {
            continue;
        }
        if !snapshot.has_file(file) {
            issues.push(
                Issue::new(
                    Category::Documentation,
                    Severity::Warning,
                    format!("Missing documentation file `{file}`"),
                )
                .at(file.as_str())
                .with_remedy(Remedy::CreateFile { path: file.clone() }),
            );
        }
    }

    let Some(readme) = &snapshot.readme else {
        return issues;
    };

    let headings = headings(&readme.content);
    for section in &rules.required_readme_sections {
        let present = headings
            .iter()
            .any(|h| h.eq_ignore_ascii_case(section.trim()));
        if !present {
            issues.push(
                Issue::new(
                    Category::Documentation,
                    Severity::Info,
                    format!("`{}` has no \"{section}\" section", readme.path),
                )
                .at(readme.path.as_str())
                .suggest(format!("add a `## {section}` heading to `{}`", readme.path)),
            );
        }
    }

    issues
}

/// Heading texts of a Markdown document, skipping fenced code blocks.
pub fn headings(markdown: &str) -> Vec<String> {
    let Some(re) = HEADING.as_ref() else {
        return Vec::new();
    };

    let mut in_fence = false;
    let mut out = Vec::new();
    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = re.captures(line)
            && let Some(text) = caps.get(1)
        {
            out.push(text.as_str().trim().to_string());
        }
    }
    out
}

#[cfg(test)]
#[path = "documentation_tests.rs"]
mod tests;
