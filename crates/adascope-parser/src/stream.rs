//! A peekable cursor over a scanned token sequence.

use adascope_core::token::{Position, Token, TokenKind};

/// Read-only cursor over a token slice.
///
/// The cursor only moves forward. The lexer always appends one `Eof`
/// token, but the cursor synthesizes its own if asked to read past the
/// end, so a caller can never run off the slice.
#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    cursor: usize,
    eof: Token,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof_position = tokens
            .last()
            .map(Token::position)
            .unwrap_or(Position::START);
        Self {
            tokens,
            cursor: 0,
            eof: Token::eof(eof_position),
        }
    }

    /// The current token, without consuming it.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.eof)
    }

    /// Consume and return the current token. `Eof` is never consumed.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind() != TokenKind::Eof {
            self.cursor += 1;
        }
        token
    }

    /// The position of the current token.
    pub fn position(&self) -> Position {
        self.peek().position()
    }

    pub fn at_eof(&self) -> bool {
        self.peek().kind() == TokenKind::Eof
    }
}
