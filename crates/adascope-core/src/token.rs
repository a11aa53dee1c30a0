//! Tokens and source positions.
//!
//! A [`Token`] is the smallest classified lexical unit of source text:
//! a [`TokenKind`], the exact source substring that produced it (the
//! lexeme), and the [`Position`] where it starts. Tokens are produced
//! once by the lexical analyzer and never mutated afterwards.

use std::fmt;

use serde::Serialize;

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source text.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The lexical category of a token.
///
/// This is a closed enumeration: parser procedures match exhaustively
/// over it, so adding a category is a compile-time-checked change.
/// Keyword and operator identity is carried by the token's lexeme
/// (keywords are compared case-insensitively, per Ada convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A word from the fixed reserved-word table (see [`crate::reserved`]).
    ReservedWord,
    /// A user-defined name: a letter followed by letters, digits, underscores.
    Identifier,
    /// A whole-number literal such as `42`.
    IntegerLiteral,
    /// A literal with a fractional part such as `3.14`.
    RealLiteral,
    /// A double-quoted string literal.
    StringLiteral,
    /// A single-quoted character literal.
    CharacterLiteral,
    /// An operator such as `:=`, `<=`, `+`, `&`.
    Operator,
    /// A delimiter such as `(`, `;`, `,`.
    Delimiter,
    /// The synthetic end-of-input marker appended by the lexer.
    Eof,
}

impl TokenKind {
    /// A short human-readable name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "reserved word",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::RealLiteral => "real literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::CharacterLiteral => "character literal",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable lexical token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    position: Position,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Create the synthetic end-of-input token.
    ///
    /// The lexeme is empty so that concatenating all token lexemes
    /// reproduces the scanned input exactly.
    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }

    /// The lexical category of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source substring that produced this token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The position of the first character of the lexeme.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether this token is the given reserved word (case-insensitive).
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::ReservedWord && self.lexeme.eq_ignore_ascii_case(word)
    }

    /// Whether this token is the given operator lexeme.
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == symbol
    }

    /// Whether this token is the given delimiter lexeme.
    pub fn is_delimiter(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.lexeme == symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "{} `{}`", self.kind, self.lexeme)
        }
    }
}
