use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::{GuardError, Result};
use crate::standards::presets;
use crate::EXIT_SUCCESS;

use super::context::report_failure;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli.preset.as_deref()) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created standards file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => report_failure(cli, &e),
    }
}

/// Writes a standards template to `args.output`.
///
/// # Errors
/// Returns an error if the file already exists (without --force), the preset
/// is unknown, or the file cannot be written.
pub fn run_init_impl(args: &InitArgs, preset: Option<&str>) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(GuardError::Config(format!(
            "Standards file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(name) = preset {
        presets::load_preset(name)?;
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_standards_template(preset))?;
    Ok(())
}

#[must_use]
pub fn generate_standards_template(preset: Option<&str>) -> String {
    let preset_line = preset.map_or_else(
        || format!("# preset = \"strict\"  # one of: {}", presets::AVAILABLE_PRESETS.join(", ")),
        |name| format!("preset = \"{name}\""),
    );

    format!(
        r#"# consistency-guard standards
# Keys left out fall back to the built-in defaults (or the preset below).

{preset_line}

[namingRules]
fileCasing = "kebab-case"
directoryCasing = "kebab-case"
# Names that keep their conventional spelling
# exemptNames = ["README.md", "LICENSE", "Dockerfile", "Makefile"]

[structureRules]
requiredFiles = ["README.md"]
# recommendedFiles = [".gitignore", ".env.example"]
maxDepth = 10

# [structureRules.requiredDirectories]
# src = "Source code"
# tests = "Automated tests"

[styleRules]
indentWidth = 2
quoteStyle = "single"
requireTrailingComma = false

[docRules]
requiredFiles = ["README.md"]
requiredReadmeSections = ["Installation", "Usage", "License"]

# Required keys per tracked JSON configuration file. Dotted keys reach into objects.
[configRules.perFile]
"package.json" = ["name", "version"]
# "tsconfig.json" = {{ requiredKeys = ["compilerOptions"], missingKeySeverity = "error" }}

[scanner]
exclude = [".git/", "node_modules/", "target/", "dist/", "build/", "__pycache__/", ".venv/"]
followLinks = true

# Command run in the project root by `fix --format-code`
[formatter]
# command = ["npx", "prettier", "--write", "."]
"#
    )
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
