//! Built-in content for scaffolded files.

use crate::checker::casing::{convert, split_stem};
use crate::standards::{Casing, StandardsModel};

const GITIGNORE: &str = "\
# Dependencies
node_modules/
.venv/

# Build output
dist/
build/
target/
coverage/

# Environment
.env
.env.local

# Logs and editor files
*.log
.DS_Store
.idea/
.vscode/
";

const ENV_EXAMPLE: &str = "\
# Copy this file to .env and fill in the values.
# Never commit the real .env file.
";

const CHANGELOG: &str = "\
# Changelog

All notable changes to this project are documented in this file.

## [Unreleased]
";

/// Content for a scaffolded file at `relative`. Names without a template get a
/// minimal placeholder.
#[must_use]
pub fn render(relative: &str, project_name: &str, standards: &StandardsModel) -> String {
    let name = relative.rsplit('/').next().unwrap_or(relative);

    if split_stem(name).0.eq_ignore_ascii_case("readme") {
        return readme(
            project_name,
            standards
                .doc_rules
                .required_readme_sections
                .iter()
                .map(String::as_str),
        );
    }

    match name {
        ".gitignore" => GITIGNORE.to_string(),
        ".env.example" => ENV_EXAMPLE.to_string(),
        "CHANGELOG.md" => CHANGELOG.to_string(),
        "package.json" => package_json(project_name),
        _ => placeholder(name),
    }
}

/// README with a title and one stub per required section, in configured order.
#[must_use]
pub fn readme<'a>(project_name: &str, sections: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = format!("# {project_name}\n");
    for section in sections {
        out.push_str(&format!(
            "\n## {section}\n\n_Describe {} here._\n",
            section.to_lowercase()
        ));
    }
    out
}

fn package_json(project_name: &str) -> String {
    let manifest = serde_json::json!({
        "name": convert(project_name, Casing::Kebab),
        "version": "0.1.0",
        "private": true,
    });
    let mut out = serde_json::to_string_pretty(&manifest).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

fn placeholder(name: &str) -> String {
    let (stem, ext) = split_stem(name);
    match ext.rsplit('.').next() {
        Some("md" | "markdown") if !stem.is_empty() => format!("# {stem}\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod tests;
