//! Command-line argument definitions for the Adascope CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the input source, the error
//! recovery policy, the output format, configuration file selection,
//! and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Adascope analyzer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Ada source file, or `-` for stdin
    #[arg(help = "Path to the input file, or `-` for stdin")]
    pub input: String,

    /// Halt at the first syntax error
    #[arg(long)]
    pub stop_on_error: bool,

    /// Skip to a synchronization token after a syntax error and keep parsing
    #[arg(long)]
    pub panic_recover: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include the token dump in text output
    #[arg(long)]
    pub tokens: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// How the analysis results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered parse tree plus diagnostics
    Text,
    /// The full analysis report as JSON
    Json,
}
