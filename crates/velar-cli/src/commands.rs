//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ColorChoice;

/// Velador: CLI for Velar - selector-discipline linter for UI tests
#[derive(Parser, Debug)]
#[command(name = "velador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check sources for forbidden element-lookup selectors
    ///
    /// Flags every `find_element`/`find_elements` call (wrapped in `By::css`)
    /// and every `find_element_by_css_selector`/`find_elements_by_css_selector`
    /// call whose selector is not a single attribute selector on the
    /// designated test-hook attribute.
    Check(CheckArgs),

    /// Explain the selector-hook rule
    Explain(ExplainArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: CheckOutputFormat,

    /// Test-hook attribute that selectors must be restricted to
    #[arg(long, default_value = velar::DATA_SELENIUM)]
    pub attribute: String,

    /// Stop at the first path with violations
    #[arg(long)]
    pub fail_fast: bool,
}

/// Check output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckOutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Arguments for the explain command
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Rule identifier to explain
    #[arg(default_value = velar::RULE_SELECTOR_HOOK)]
    pub rule: String,
}

/// Color output argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
