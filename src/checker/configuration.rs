use serde_json::Value;

use crate::analyzer::{ConfigFileState, ProjectSnapshot};
use crate::standards::StandardsModel;

use super::{Category, Issue, Severity};

pub fn check(snapshot: &ProjectSnapshot, standards: &StandardsModel) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (file, rule) in &standards.config_rules.per_file {
        let Some(state) = snapshot.config_files.get(file) else {
            continue;
        };

        match state {
            ConfigFileState::Invalid(reason) => issues.push(
                Issue::new(
                    Category::Configuration,
                    Severity::Error,
                    format!("`{file}` is not valid JSON: {reason}"),
                )
                .at(file.as_str())
                .suggest(format!("fix the JSON syntax of `{file}`")),
            ),
            ConfigFileState::Parsed(value) => {
                for key in &rule.required_keys {
                    if lookup(value, key).is_none() {
                        issues.push(
                            Issue::new(
                                Category::Configuration,
                                rule.missing_key_severity,
                                format!("`{file}` is missing required key `{key}`"),
                            )
                            .at(file.as_str())
                            .suggest(format!("add `{key}` to `{file}`")),
                        );
                    }
                }
            }
        }
    }

    issues
}

/// Resolves a dotted key path (`compilerOptions.strict`) inside a JSON object.
fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;
