use crate::analyzer::ProjectSnapshot;
use crate::standards::{Casing, StandardsModel};

use super::casing::{convert, is_compliant, split_stem};
use super::{Category, Issue, Remedy, Severity};

pub fn check(snapshot: &ProjectSnapshot, standards: &StandardsModel) -> Vec<Issue> {
    let rules = &standards.naming_rules;
    let is_exempt = |name: &str| name.starts_with('.') || rules.exempt_names.contains(name);

    let mut issues = Vec::new();

    for dir in &snapshot.directories {
        let (parent, name) = split_parent(dir);
        if is_exempt(name) || is_compliant(name, rules.directory_casing) {
            continue;
        }
        let renamed = convert(name, rules.directory_casing);
        issues.push(violation(
            "Directory",
            dir,
            parent,
            name,
            &renamed,
            rules.directory_casing,
        ));
    }

    for file in &snapshot.files {
        let (parent, name) = split_parent(file);
        if is_exempt(name) {
            continue;
        }
        let (stem, extensions) = split_stem(name);
        if is_compliant(stem, rules.file_casing) {
            continue;
        }
        let renamed = format!("{}{extensions}", convert(stem, rules.file_casing));
        issues.push(violation(
            "File", file, parent, name, &renamed, rules.file_casing,
        ));
    }

    issues
}

fn violation(
    kind: &str,
    path: &str,
    parent: Option<&str>,
    name: &str,
    renamed: &str,
    casing: Casing,
) -> Issue {
    let issue = Issue::new(
        Category::Naming,
        Severity::Warning,
        format!("{kind} name `{name}` does not follow {}", casing.as_str()),
    )
    .at(path);

    if renamed == name {
        // Nothing alphanumeric to rebuild the name from.
        return issue;
    }

    let to = parent.map_or_else(|| renamed.to_string(), |p| format!("{p}/{renamed}"));
    issue.with_remedy(Remedy::Rename {
        from: path.to_string(),
        to,
    })
}

fn split_parent(relative: &str) -> (Option<&str>, &str) {
    relative
        .rsplit_once('/')
        .map_or((None, relative), |(parent, name)| (Some(parent), name))
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
