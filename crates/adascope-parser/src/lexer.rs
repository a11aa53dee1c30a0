//! The lexical analyzer.
//!
//! A single left-to-right scan over the source text with one character
//! of lookahead (two where operators need disambiguation). Whitespace
//! and `--` line comments produce no tokens. Every other character is
//! either consumed into a token's lexeme or flagged by a diagnostic and
//! skipped, so the scan accounts for the whole input.
//!
//! Scanning never fails: malformed input becomes a diagnostic plus a
//! best-effort token wherever one can be synthesized, and the returned
//! sequence always ends with exactly one end-of-input token.

use adascope_core::diagnostics::{Diagnostic, DiagnosticLog, Phase};
use adascope_core::reserved::is_reserved;
use adascope_core::token::{Position, Token, TokenKind};
use log::debug;

/// Tunable scanner limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Identifiers longer than this draw a warning. The token keeps
    /// its full lexeme either way.
    pub max_identifier_length: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            max_identifier_length: 17,
        }
    }
}

/// Two-character operators, checked before the single-character table.
const COMPOUND_OPERATORS: &[&str] = &[":=", "<=", ">=", "/="];

const SINGLE_OPERATORS: &[char] = &['<', '>', '=', '+', '-', '*', '/', '&'];

const DELIMITERS: &[char] = &['(', ')', ',', ':', ';', '.'];

/// Scan `source` into a token sequence terminated by one `Eof` token.
pub fn tokenize(source: &str, options: &LexerOptions, log: &mut DiagnosticLog) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.run(options, log);
    debug!(tokens = tokens.len(), diagnostics = log.len(); "scan finished");
    tokens
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn run(&mut self, options: &LexerOptions, log: &mut DiagnosticLog) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia();
            let Some(c) = self.peek() else {
                break;
            };
            let start = self.position();
            if c.is_ascii_alphabetic() {
                tokens.push(self.scan_word(start, options, log));
            } else if c.is_ascii_digit() {
                tokens.push(self.scan_number(start, log));
            } else if c == '"' {
                tokens.push(self.scan_string(start, log));
            } else if c == '\'' {
                tokens.push(self.scan_character(start, log));
            } else if let Some(token) = self.scan_symbol(start) {
                tokens.push(token);
            } else {
                log.emit(Diagnostic::error(
                    Phase::Lexical,
                    format!("unrecognized character `{c}`"),
                    start,
                ));
                self.advance();
            }
        }
        tokens.push(Token::eof(self.position()));
        tokens
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skip whitespace and `--` line comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('-') if self.peek_next() == Some('-') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_word(
        &mut self,
        start: Position,
        options: &LexerOptions,
        log: &mut DiagnosticLog,
    ) -> Token {
        let mut lexeme = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if is_reserved(&lexeme) {
            return Token::new(TokenKind::ReservedWord, lexeme, start);
        }
        if lexeme.len() > options.max_identifier_length {
            log.emit(Diagnostic::warning(
                Phase::Lexical,
                format!(
                    "identifier `{lexeme}` is longer than {} characters",
                    options.max_identifier_length
                ),
                start,
            ));
        }
        Token::new(TokenKind::Identifier, lexeme, start)
    }

    fn scan_number(&mut self, start: Position, log: &mut DiagnosticLog) -> Token {
        let mut lexeme = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if self.peek() == Some('.') {
            match self.peek_next() {
                Some(c) if c.is_ascii_digit() => {
                    lexeme.push('.');
                    self.advance();
                    while let Some(c) = self.peek() {
                        if c.is_ascii_digit() {
                            lexeme.push(c);
                            self.advance();
                        } else {
                            break;
                        }
                    }
                    return Token::new(TokenKind::RealLiteral, lexeme, start);
                }
                // A second `.` or any other character belongs to the
                // delimiter table (ranges like `1..10`).
                Some(_) => {}
                None => {
                    lexeme.push('.');
                    self.advance();
                    log.emit(Diagnostic::error(
                        Phase::Lexical,
                        format!("real literal `{lexeme}` has no digits after the point"),
                        start,
                    ));
                    return Token::new(TokenKind::RealLiteral, lexeme, start);
                }
            }
        }
        Token::new(TokenKind::IntegerLiteral, lexeme, start)
    }

    /// Scan a `"..."` literal. A doubled `""` is an embedded quote.
    fn scan_string(&mut self, start: Position, log: &mut DiagnosticLog) -> Token {
        let mut lexeme = String::new();
        lexeme.push(self.advance().unwrap_or('"'));
        loop {
            match self.peek() {
                None | Some('\n') => {
                    log.emit(Diagnostic::error(
                        Phase::Lexical,
                        "unterminated string literal".to_string(),
                        start,
                    ));
                    break;
                }
                Some('"') => {
                    lexeme.push('"');
                    self.advance();
                    if self.peek() == Some('"') {
                        lexeme.push('"');
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => {
                    lexeme.push(c);
                    self.advance();
                }
            }
        }
        Token::new(TokenKind::StringLiteral, lexeme, start)
    }

    /// Scan a `'x'` literal. A doubled `''` is an embedded quote, and
    /// the content must be exactly one character.
    fn scan_character(&mut self, start: Position, log: &mut DiagnosticLog) -> Token {
        let mut lexeme = String::new();
        lexeme.push(self.advance().unwrap_or('\''));
        let mut content = 0usize;
        let mut terminated = false;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    log.emit(Diagnostic::error(
                        Phase::Lexical,
                        "unterminated character literal".to_string(),
                        start,
                    ));
                    break;
                }
                Some('\'') => {
                    lexeme.push('\'');
                    self.advance();
                    if self.peek() == Some('\'') {
                        lexeme.push('\'');
                        self.advance();
                        content += 1;
                    } else {
                        terminated = true;
                        break;
                    }
                }
                Some(c) => {
                    lexeme.push(c);
                    self.advance();
                    content += 1;
                }
            }
        }
        if terminated && content > 1 {
            log.emit(Diagnostic::error(
                Phase::Lexical,
                format!("character literal {lexeme} holds more than one character"),
                start,
            ));
        }
        Token::new(TokenKind::CharacterLiteral, lexeme, start)
    }

    /// Longest-match operator and delimiter scan.
    fn scan_symbol(&mut self, start: Position) -> Option<Token> {
        let first = self.peek()?;
        if let Some(second) = self.peek_next() {
            let pair: String = [first, second].iter().collect();
            if COMPOUND_OPERATORS.contains(&pair.as_str()) {
                self.advance();
                self.advance();
                return Some(Token::new(TokenKind::Operator, pair, start));
            }
        }
        if SINGLE_OPERATORS.contains(&first) {
            self.advance();
            return Some(Token::new(TokenKind::Operator, first, start));
        }
        if DELIMITERS.contains(&first) {
            self.advance();
            return Some(Token::new(TokenKind::Delimiter, first, start));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adascope_core::diagnostics::Severity;

    fn scan(source: &str) -> (Vec<Token>, DiagnosticLog) {
        let mut log = DiagnosticLog::new();
        let tokens = tokenize(source, &LexerOptions::default(), &mut log);
        (tokens, log)
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_empty_input_yields_only_eof() {
        let (tokens, log) = scan("");
        assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let (tokens, log) = scan("procedure Main is");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::ReservedWord,
                TokenKind::Identifier,
                TokenKind::ReservedWord,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].lexeme(), "Main");
        assert!(log.is_empty());
    }

    #[test]
    fn test_positions_track_lines_and_columns() {
        let (tokens, _) = scan("begin\n  x := 1;");
        assert_eq!(tokens[0].position(), Position::new(1, 1));
        assert_eq!(tokens[1].position(), Position::new(2, 3)); // x
        assert_eq!(tokens[2].position(), Position::new(2, 5)); // :=
        assert_eq!(tokens[3].position(), Position::new(2, 8)); // 1
    }

    #[test]
    fn test_comment_produces_no_tokens() {
        let (tokens, log) = scan("-- a comment\nx");
        assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(tokens[0].position(), Position::new(2, 1));
        assert!(log.is_empty());
    }

    #[test]
    fn test_minus_alone_is_an_operator() {
        let (tokens, _) = scan("a - b");
        assert!(tokens[1].is_operator("-"));
    }

    #[test]
    fn test_compound_operators_take_longest_match() {
        let (tokens, log) = scan(":= <= >= /= < = :");
        let lexemes: Vec<_> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec![":=", "<=", ">=", "/=", "<", "=", ":", ""]);
        assert!(tokens[6].is_delimiter(":"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_numeric_literals() {
        let (tokens, log) = scan("42 3.14");
        assert_eq!(tokens[0].kind(), TokenKind::IntegerLiteral);
        assert_eq!(tokens[1].kind(), TokenKind::RealLiteral);
        assert_eq!(tokens[1].lexeme(), "3.14");
        assert!(log.is_empty());
    }

    #[test]
    fn test_range_dots_stay_delimiters() {
        let (tokens, log) = scan("1..10");
        let lexemes: Vec<_> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["1", ".", ".", "10", ""]);
        assert_eq!(tokens[0].kind(), TokenKind::IntegerLiteral);
        assert!(log.is_empty());
    }

    #[test]
    fn test_trailing_point_at_end_of_input() {
        let (tokens, log) = scan("3.");
        assert_eq!(tokens[0].kind(), TokenKind::RealLiteral);
        assert_eq!(tokens[0].lexeme(), "3.");
        assert_eq!(log.error_count(), 1);
    }

    #[test]
    fn test_string_literal_with_doubled_quote() {
        let (tokens, log) = scan(r#""say ""hi""""#);
        assert_eq!(tokens[0].kind(), TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme(), r#""say ""hi""""#);
        assert!(log.is_empty());
    }

    #[test]
    fn test_unterminated_string_literal() {
        let (tokens, log) = scan("\"oops\nx");
        assert_eq!(tokens[0].kind(), TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme(), "\"oops");
        assert_eq!(log.error_count(), 1);
        assert_eq!(tokens[1].lexeme(), "x");
    }

    #[test]
    fn test_character_literal() {
        let (tokens, log) = scan("'a' ''''");
        assert_eq!(tokens[0].kind(), TokenKind::CharacterLiteral);
        assert_eq!(tokens[0].lexeme(), "'a'");
        assert_eq!(tokens[1].kind(), TokenKind::CharacterLiteral);
        assert_eq!(tokens[1].lexeme(), "''''");
        assert!(log.is_empty());
    }

    #[test]
    fn test_multi_character_literal_is_an_error() {
        let (tokens, log) = scan("'abc'");
        assert_eq!(tokens[0].kind(), TokenKind::CharacterLiteral);
        assert_eq!(tokens[0].lexeme(), "'abc'");
        assert_eq!(log.error_count(), 1);
        assert!(log.iter().next().unwrap().message().contains("one character"));
    }

    #[test]
    fn test_identifier_at_limit_is_silent() {
        let name = "a".repeat(17);
        let (tokens, log) = scan(&name);
        assert_eq!(tokens[0].lexeme(), name);
        assert!(log.is_empty());
    }

    #[test]
    fn test_identifier_over_limit_warns_once_and_keeps_lexeme() {
        let name = "a".repeat(18);
        let (tokens, log) = scan(&name);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme(), name);
        assert_eq!(log.warning_count(), 1);
        assert_eq!(log.error_count(), 0);
        assert_eq!(log.iter().next().unwrap().severity(), Severity::Warning);
    }

    #[test]
    fn test_unrecognized_character_is_skipped_with_error() {
        let (tokens, log) = scan("x # y");
        let lexemes: Vec<_> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["x", "y", ""]);
        assert_eq!(log.error_count(), 1);
    }

    #[test]
    fn test_reserved_lookup_is_case_insensitive() {
        let (tokens, _) = scan("BEGIN Begin begin");
        for token in &tokens[..3] {
            assert_eq!(token.kind(), TokenKind::ReservedWord);
        }
    }
}
