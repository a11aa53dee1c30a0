//! # Adascope
//!
//! Lexical and syntax analysis for a subset of Ada: one call scans the
//! source text, parses the token sequence, and collects every problem
//! found along the way into a single ordered diagnostic log.
//!
//! ```
//! use adascope::{analyze, AnalysisOptions};
//!
//! let analysis = analyze("procedure Main is begin end Main;", &AnalysisOptions::default());
//! assert!(analysis.succeeded());
//! println!("{}", adascope::render::render_tree(&analysis.tree));
//! ```
//!
//! The same input and options always produce the same tokens, tree,
//! and diagnostics. Nothing is shared between calls.

pub mod render;
pub mod report;

pub use adascope_core::{
    Diagnostic, DiagnosticLog, ParseNode, Phase, Position, Severity, Token, TokenKind,
};
pub use adascope_parser::{LexerOptions, ParserOptions};

use log::debug;

/// Options for both analysis passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOptions {
    pub lexer: LexerOptions,
    pub parser: ParserOptions,
}

/// Everything one analysis produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub tree: ParseNode,
    pub diagnostics: DiagnosticLog,
}

impl Analysis {
    /// Whether the source was analyzed without any error-severity
    /// diagnostic. Warnings do not count against success.
    pub fn succeeded(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Scan and parse `source`, collecting all diagnostics in one log.
pub fn analyze(source: &str, options: &AnalysisOptions) -> Analysis {
    let mut diagnostics = DiagnosticLog::new();
    let tokens = adascope_parser::tokenize(source, &options.lexer, &mut diagnostics);
    let tree = adascope_parser::parse(&tokens, &options.parser, &mut diagnostics);
    debug!(
        tokens = tokens.len(),
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count();
        "analysis finished"
    );
    Analysis {
        tokens,
        tree,
        diagnostics,
    }
}
