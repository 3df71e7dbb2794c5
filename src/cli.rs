use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "consistency-guard")]
#[command(author, version, about = "Validate and fix project consistency against declarative standards")]
#[command(long_about = "Inspects a project tree for structure, naming, code style, documentation \
    and configuration consistency, scores it from 0 to 100 and can apply safe automated fixes.\n\n\
    Exit codes:\n  \
    0 - Run completed (issues, if any, are reported)\n  \
    2 - Invalid path or configuration error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to a standards file (overrides discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Built-in preset to layer underneath the standards file
    #[arg(long, global = true)]
    pub preset: Option<String>,

    /// Skip loading any standards file and use the built-in model
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a project and list consistency issues
    Validate(ValidateArgs),

    /// Validate, then apply the selected automated fixes
    Fix(FixArgs),

    /// Validate and write a JSON report file
    Report(ReportArgs),

    /// Generate a standards configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Project root to validate
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct FixArgs {
    /// Project root to fix
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Rename files and directories that break the naming rules
    #[arg(long)]
    pub auto_fix: bool,

    /// Create missing required files and directories from templates
    #[arg(long)]
    pub create_missing: bool,

    /// Run the configured code formatter in the project root
    #[arg(long)]
    pub format_code: bool,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Project root to report on
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report file to write
    #[arg(short, long, default_value = "consistency-report.json")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the standards file
    #[arg(short, long, default_value = ".consistency.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
