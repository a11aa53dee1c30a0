//! CLI logic for the Adascope analyzer.
//!
//! [`run`] does everything except process exit and report rendering,
//! so the whole pipeline is testable: it returns the text that would
//! be printed and whether the analysis succeeded.

mod args;
mod config;

pub use args::{Args, OutputFormat};
pub use config::{AppConfig, ConfigError};

use std::{fs, io};

use log::info;
use miette::Diagnostic;
use thiserror::Error;

use adascope::report::AnalysisReport;
use adascope::{render, Analysis, AnalysisOptions, LexerOptions, ParserOptions, TokenKind};

/// Presentation-boundary failures. Problems in the analyzed source are
/// not errors; they are diagnostics inside the analysis output.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read input `{path}`")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize analysis report")]
    Serialize(#[from] serde_json::Error),
}

/// What [`run`] hands back to `main` for printing.
#[derive(Debug)]
pub struct RunOutput {
    /// The formatted analysis, ready to print.
    pub rendered: String,
    /// False if any error-severity diagnostic was produced.
    pub success: bool,
}

/// Run the Adascope CLI application
///
/// Loads configuration, reads the input, analyzes it with the
/// effective options, and formats the result.
///
/// # Errors
///
/// Returns `CliError` for file I/O, configuration, and report
/// serialization failures.
pub fn run(args: &Args) -> Result<RunOutput, CliError> {
    info!(input_path = args.input; "Analyzing source");

    let app_config = config::load_config(args.config.as_ref())?;
    let source = read_source(&args.input)?;
    let options = build_options(args, &app_config);

    let analysis = adascope::analyze(&source, &options);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&analysis, args.tokens),
        OutputFormat::Json => AnalysisReport::from(&analysis).to_json()?,
    };

    info!(
        diagnostics = analysis.diagnostics.len(),
        success = analysis.succeeded();
        "Analysis complete"
    );

    Ok(RunOutput {
        rendered,
        success: analysis.succeeded(),
    })
}

fn read_source(input: &str) -> Result<String, CliError> {
    let result = if input == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    };
    result.map_err(|source| CliError::Read {
        path: input.to_string(),
        source,
    })
}

/// Merge configuration-file defaults with command-line flags. Flags
/// win: if either recovery flag is given, the file's recovery settings
/// are ignored entirely.
fn build_options(args: &Args, config: &AppConfig) -> AnalysisOptions {
    let mut lexer = LexerOptions::default();
    if let Some(limit) = config.max_identifier_length {
        lexer.max_identifier_length = limit;
    }

    let parser = if args.stop_on_error || args.panic_recover {
        ParserOptions {
            stop_on_error: args.stop_on_error,
            panic_mode_recover: args.panic_recover,
        }
    } else {
        ParserOptions {
            stop_on_error: config.stop_on_error.unwrap_or(false),
            panic_mode_recover: config.panic_mode_recover.unwrap_or(false),
        }
    };

    AnalysisOptions { lexer, parser }
}

fn render_text(analysis: &Analysis, include_tokens: bool) -> String {
    let mut out = String::new();

    if include_tokens {
        for token in &analysis.tokens {
            if token.kind() == TokenKind::Eof {
                continue;
            }
            let position = token.position().to_string();
            out.push_str(&format!("{position:>8}  {token}\n"));
        }
        out.push('\n');
    }

    out.push_str(&render::render_tree(&analysis.tree));

    if !analysis.diagnostics.is_empty() {
        out.push('\n');
        for diagnostic in &analysis.diagnostics {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
    }

    out
}
