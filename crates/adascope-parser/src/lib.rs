//! # Adascope Parser
//!
//! The analysis core: a hand-written lexical analyzer and a
//! recursive-descent parser with configurable error recovery for a
//! subset of Ada.
//!
//! Both passes are infallible over arbitrary input. Problems in the
//! source text become [`Diagnostic`](adascope_core::Diagnostic) records
//! in a caller-supplied log, and each pass still returns its
//! best-effort artifact: [`tokenize`] a token sequence ending in one
//! end-of-input token, [`parse`] a (possibly partial) tree.
//!
//! ```
//! use adascope_core::DiagnosticLog;
//! use adascope_parser::{parse, tokenize, LexerOptions, ParserOptions};
//!
//! let mut log = DiagnosticLog::new();
//! let tokens = tokenize(
//!     "procedure Main is begin end Main;",
//!     &LexerOptions::default(),
//!     &mut log,
//! );
//! let tree = parse(&tokens, &ParserOptions::default(), &mut log);
//! assert!(!log.has_errors());
//! assert_eq!(tree.name(), Some("Program"));
//! ```

pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod stream;

pub use lexer::{tokenize, LexerOptions};
pub use parser::{parse, ParserOptions, MAX_DEPTH};
pub use stream::TokenStream;
