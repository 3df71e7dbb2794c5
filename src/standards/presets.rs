use crate::error::{GuardError, Result};
use toml::Value;

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &["default", "strict", "node", "python"];

/// Load a built-in preset by name as a TOML value, ready to be layered under a document.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn load_preset(name: &str) -> Result<Value> {
    let content = match name {
        "default" => PRESET_DEFAULT,
        "strict" => PRESET_STRICT,
        "node" => PRESET_NODE,
        "python" => PRESET_PYTHON,
        _ => {
            return Err(GuardError::Config(format!(
                "Unknown preset: '{}'. Available presets: {}",
                name,
                AVAILABLE_PRESETS.join(", ")
            )));
        }
    };

    toml::from_str(content)
        .map_err(|e| GuardError::Config(format!("Failed to parse preset '{name}': {e}")))
}

// The built-in model; kept empty so every key falls back to the `Default` impls.
const PRESET_DEFAULT: &str = "";

const PRESET_STRICT: &str = r#"
[structureRules]
requiredFiles = ["README.md", "package.json", ".gitignore", "LICENSE"]
recommendedFiles = [".env.example", "CHANGELOG.md"]
maxDepth = 6

[structureRules.requiredDirectories]
src = "Source code"
tests = "Automated tests"
docs = "Project documentation"

[styleRules]
requireTrailingComma = true

[docRules]
requiredFiles = ["README.md", "CHANGELOG.md"]
requiredReadmeSections = ["Installation", "Usage", "Contributing", "License"]
"#;

const PRESET_NODE: &str = r#"
[structureRules]
requiredFiles = ["README.md", "package.json", ".gitignore"]

[structureRules.requiredDirectories]
src = "Source code"

[configRules.perFile]
"package.json" = ["name", "version", "scripts"]
"tsconfig.json" = { requiredKeys = ["compilerOptions"], missingKeySeverity = "error" }
".eslintrc.json" = ["rules"]
".prettierrc.json" = []

[formatter]
command = ["npx", "prettier", "--write", "."]
"#;

const PRESET_PYTHON: &str = r#"
[namingRules]
fileCasing = "snake"
directoryCasing = "snake"
variableCasing = "snake"

[structureRules]
requiredFiles = ["README.md", "requirements.txt"]

[styleRules]
indentWidth = 4
extensions = ["py"]
quoteExtensions = []

[configRules.perFile]

[formatter]
command = ["black", "."]
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
