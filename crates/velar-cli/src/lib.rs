//! Velador CLI Library
//!
//! Command-line interface for the Velar selector-discipline linter.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
mod output;

pub use commands::{CheckArgs, CheckOutputFormat, Cli, ColorArg, Commands, ExplainArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::DiagnosticPrinter;
