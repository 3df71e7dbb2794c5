use crate::analyzer::ProjectSnapshot;
use crate::standards::StandardsModel;

use super::{Category, Issue, Remedy, Severity};

pub fn check(snapshot: &ProjectSnapshot, standards: &StandardsModel) -> Vec<Issue> {
    let rules = &standards.structure_rules;
    let mut issues = Vec::new();

    for (dir, purpose) in &rules.required_directories {
        let dir = dir.trim_end_matches('/');
        if !snapshot.has_directory(dir) {
            let message = if purpose.is_empty() {
                format!("Missing required directory `{dir}/`")
            } else {
                format!("Missing required directory `{dir}/` ({purpose})")
            };
            issues.push(
                Issue::new(Category::Structure, Severity::Warning, message)
                    .at(dir)
                    .with_remedy(Remedy::CreateDirectory {
                        path: dir.to_string(),
                    }),
            );
        }
    }

    for file in &rules.required_files {
        if !snapshot.has_file(file) {
            issues.push(
                Issue::new(
                    Category::Structure,
                    Severity::Error,
                    format!("Missing required file `{file}`"),
                )
                .at(file.as_str())
                .with_remedy(Remedy::CreateFile { path: file.clone() }),
            );
        }
    }

    for file in &rules.recommended_files {
        if !snapshot.has_file(file) {
            issues.push(
                Issue::new(
                    Category::Structure,
                    Severity::Info,
                    format!("Recommended file `{file}` is missing"),
                )
                .at(file.as_str())
                .with_remedy(Remedy::CreateFile { path: file.clone() }),
            );
        }
    }

    if snapshot.max_depth > rules.max_depth {
        let deepest = deepest_entry(snapshot);
        let mut issue = Issue::new(
            Category::Structure,
            Severity::Warning,
            format!(
                "Directory nesting reaches depth {}, deeper than the allowed {}",
                snapshot.max_depth, rules.max_depth
            ),
        )
        .suggest(format!(
            "move entries nested deeper than {} levels closer to the root",
            rules.max_depth
        ));
        if let Some(path) = deepest {
            issue = issue.at(path);
        }
        issues.push(issue);
    }

    for entry in &snapshot.unreadable {
        issues.push(
            Issue::new(
                Category::Structure,
                Severity::Warning,
                format!("Could not read `{}`: {}", entry.path, entry.reason),
            )
            .at(entry.path.as_str()),
        );
    }

    issues
}

/// First entry, in traversal order, sitting at the snapshot's maximum depth.
fn deepest_entry(snapshot: &ProjectSnapshot) -> Option<&str> {
    let depth = |p: &str| p.split('/').count();
    snapshot
        .directories
        .iter()
        .chain(&snapshot.files)
        .find(|p| depth(p) == snapshot.max_depth)
        .map(String::as_str)
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
