//! # Adascope Core
//!
//! Core types and definitions shared by the Adascope analysis pipeline:
//! tokens and source positions, the reserved-word table, the parse tree,
//! and the diagnostics model.
//!
//! These types are pure data. All scanning and parsing logic lives in the
//! `adascope-parser` crate; rendering and serialization live in the
//! `adascope` facade crate.

pub mod diagnostics;
pub mod reserved;
pub mod token;
pub mod tree;

pub use diagnostics::{Diagnostic, DiagnosticLog, Phase, Severity};
pub use token::{Position, Token, TokenKind};
pub use tree::ParseNode;
