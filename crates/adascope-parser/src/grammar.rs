//! The analyzed grammar as data.
//!
//! The parser's procedures are grammar-specific, but its dispatch and
//! recovery decisions are driven entirely by the tables here: FIRST
//! sets for choosing a production and per-nonterminal synchronization
//! sets for panic-mode recovery. The productions:
//!
//! ```text
//! Program         -> procedure id Args is DeclarativePart Procedures
//!                    begin SeqOfStatements end id ;
//! Args            -> ( ArgList ) | ε
//! ArgList         -> Mode IdentifierList : TypeMark MoreArgs
//! MoreArgs        -> ; ArgList | ε
//! Mode            -> in | out | inout | ε
//! DeclarativePart -> IdentifierList : TypeMark ; DeclarativePart | ε
//! IdentifierList  -> id ( , id )*
//! TypeMark        -> integer | real | char | float | constant := Value
//! Value           -> integer-literal | real-literal
//! Procedures      -> Program Procedures | ε
//! SeqOfStatements -> Statement ; SeqOfStatements | ε
//! Statement       -> AssignStat | IoStat
//! AssignStat      -> id := Expr
//! IoStat          -> get ( id ) | put ( Expr )
//! Expr            -> Term ( addop Term )*
//! Term            -> Factor ( mulop Factor )*
//! Factor          -> id | literal | ( Expr ) | not Factor | - Factor
//! ```

use adascope_core::token::{Token, TokenKind};

/// The nonterminals of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    Program,
    Args,
    ArgList,
    MoreArgs,
    Mode,
    DeclarativePart,
    IdentifierList,
    TypeMark,
    Value,
    Procedures,
    SeqOfStatements,
    Statement,
    AssignStat,
    IoStat,
    Expr,
    Term,
    Factor,
}

impl Nonterminal {
    /// The name used for branch nodes and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Nonterminal::Program => "Program",
            Nonterminal::Args => "Args",
            Nonterminal::ArgList => "ArgList",
            Nonterminal::MoreArgs => "MoreArgs",
            Nonterminal::Mode => "Mode",
            Nonterminal::DeclarativePart => "DeclarativePart",
            Nonterminal::IdentifierList => "IdentifierList",
            Nonterminal::TypeMark => "TypeMark",
            Nonterminal::Value => "Value",
            Nonterminal::Procedures => "Procedures",
            Nonterminal::SeqOfStatements => "SeqOfStatements",
            Nonterminal::Statement => "Statement",
            Nonterminal::AssignStat => "AssignStat",
            Nonterminal::IoStat => "IoStat",
            Nonterminal::Expr => "Expr",
            Nonterminal::Term => "Term",
            Nonterminal::Factor => "Factor",
        }
    }
}

/// A terminal pattern a token can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Any token of the given kind.
    Kind(TokenKind),
    /// A specific reserved word (case-insensitive).
    Keyword(&'static str),
    /// A specific operator lexeme.
    Operator(&'static str),
    /// A specific delimiter lexeme.
    Delimiter(&'static str),
}

impl Terminal {
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Terminal::Kind(kind) => token.kind() == *kind,
            Terminal::Keyword(word) => token.is_keyword(word),
            Terminal::Operator(symbol) => token.is_operator(symbol),
            Terminal::Delimiter(symbol) => token.is_delimiter(symbol),
        }
    }

    /// How this terminal is named in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Terminal::Kind(kind) => kind.to_string(),
            Terminal::Keyword(word) => format!("`{word}`"),
            Terminal::Operator(symbol) | Terminal::Delimiter(symbol) => format!("`{symbol}`"),
        }
    }
}

/// Whether any terminal in `set` matches `token`.
pub fn matches_any(set: &[Terminal], token: &Token) -> bool {
    set.iter().any(|t| t.matches(token))
}

/// Additive operators (the weakest-binding expression level).
pub const ADDOPS: &[Terminal] = &[
    Terminal::Operator("+"),
    Terminal::Operator("-"),
    Terminal::Operator("&"),
    Terminal::Keyword("or"),
];

/// Multiplicative operators.
pub const MULOPS: &[Terminal] = &[
    Terminal::Operator("*"),
    Terminal::Operator("/"),
    Terminal::Keyword("mod"),
    Terminal::Keyword("rem"),
    Terminal::Keyword("and"),
];

const FIRST_EXPR: &[Terminal] = &[
    Terminal::Kind(TokenKind::Identifier),
    Terminal::Kind(TokenKind::IntegerLiteral),
    Terminal::Kind(TokenKind::RealLiteral),
    Terminal::Kind(TokenKind::CharacterLiteral),
    Terminal::Kind(TokenKind::StringLiteral),
    Terminal::Delimiter("("),
    Terminal::Keyword("not"),
    Terminal::Operator("-"),
];

const FIRST_STATEMENT: &[Terminal] = &[
    Terminal::Kind(TokenKind::Identifier),
    Terminal::Keyword("get"),
    Terminal::Keyword("put"),
];

/// FIRST set of each nonterminal (tokens that can begin it).
///
/// For nullable nonterminals this is the set that selects the
/// non-empty production; the parser takes ε on anything else.
pub fn first(nt: Nonterminal) -> &'static [Terminal] {
    match nt {
        Nonterminal::Program => &[Terminal::Keyword("procedure")],
        Nonterminal::Args => &[Terminal::Delimiter("(")],
        Nonterminal::ArgList => &[
            Terminal::Keyword("in"),
            Terminal::Keyword("out"),
            Terminal::Keyword("inout"),
            Terminal::Kind(TokenKind::Identifier),
        ],
        Nonterminal::MoreArgs => &[Terminal::Delimiter(";")],
        Nonterminal::Mode => &[
            Terminal::Keyword("in"),
            Terminal::Keyword("out"),
            Terminal::Keyword("inout"),
        ],
        Nonterminal::DeclarativePart => &[Terminal::Kind(TokenKind::Identifier)],
        Nonterminal::IdentifierList => &[Terminal::Kind(TokenKind::Identifier)],
        Nonterminal::TypeMark => &[
            Terminal::Keyword("integer"),
            Terminal::Keyword("real"),
            Terminal::Keyword("char"),
            Terminal::Keyword("float"),
            Terminal::Keyword("constant"),
        ],
        Nonterminal::Value => &[
            Terminal::Kind(TokenKind::IntegerLiteral),
            Terminal::Kind(TokenKind::RealLiteral),
        ],
        Nonterminal::Procedures => &[Terminal::Keyword("procedure")],
        Nonterminal::SeqOfStatements | Nonterminal::Statement => FIRST_STATEMENT,
        Nonterminal::AssignStat => &[Terminal::Kind(TokenKind::Identifier)],
        Nonterminal::IoStat => &[Terminal::Keyword("get"), Terminal::Keyword("put")],
        Nonterminal::Expr | Nonterminal::Term | Nonterminal::Factor => FIRST_EXPR,
    }
}

/// Synchronization set of each nonterminal for panic-mode recovery:
/// tokens at which a failed expansion gives up skipping and lets the
/// caller resume. `Eof` always synchronizes and is not listed.
pub fn sync_set(nt: Nonterminal) -> &'static [Terminal] {
    match nt {
        Nonterminal::Program => &[
            Terminal::Keyword("procedure"),
            Terminal::Keyword("begin"),
        ],
        Nonterminal::Args => &[Terminal::Keyword("is")],
        Nonterminal::ArgList | Nonterminal::MoreArgs => &[Terminal::Delimiter(")")],
        Nonterminal::Mode => &[Terminal::Kind(TokenKind::Identifier)],
        Nonterminal::DeclarativePart => &[
            Terminal::Keyword("begin"),
            Terminal::Keyword("procedure"),
        ],
        Nonterminal::IdentifierList => &[Terminal::Delimiter(":")],
        Nonterminal::TypeMark | Nonterminal::Value => &[
            Terminal::Delimiter(";"),
            Terminal::Delimiter(")"),
        ],
        Nonterminal::Procedures => &[Terminal::Keyword("begin")],
        Nonterminal::SeqOfStatements => &[Terminal::Keyword("end")],
        Nonterminal::Statement | Nonterminal::AssignStat | Nonterminal::IoStat => &[
            Terminal::Delimiter(";"),
            Terminal::Keyword("end"),
        ],
        Nonterminal::Expr | Nonterminal::Term | Nonterminal::Factor => &[
            Terminal::Delimiter(";"),
            Terminal::Delimiter(")"),
            Terminal::Keyword("end"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adascope_core::token::Position;

    fn keyword(word: &str) -> Token {
        Token::new(TokenKind::ReservedWord, word, Position::START)
    }

    #[test]
    fn test_terminal_matching() {
        let token = keyword("Begin");
        assert!(Terminal::Keyword("begin").matches(&token));
        assert!(Terminal::Kind(TokenKind::ReservedWord).matches(&token));
        assert!(!Terminal::Keyword("end").matches(&token));
        assert!(!Terminal::Kind(TokenKind::Identifier).matches(&token));

        let assign = Token::new(TokenKind::Operator, ":=", Position::START);
        assert!(Terminal::Operator(":=").matches(&assign));
        assert!(!Terminal::Delimiter(":=").matches(&assign));
    }

    #[test]
    fn test_statement_first_set() {
        assert!(matches_any(first(Nonterminal::Statement), &keyword("get")));
        assert!(matches_any(first(Nonterminal::Statement), &keyword("put")));
        assert!(!matches_any(first(Nonterminal::Statement), &keyword("end")));
    }

    #[test]
    fn test_operator_classes_are_disjoint() {
        let or = keyword("or");
        let and = keyword("and");
        assert!(matches_any(ADDOPS, &or));
        assert!(!matches_any(MULOPS, &or));
        assert!(matches_any(MULOPS, &and));
        assert!(!matches_any(ADDOPS, &and));
    }

    #[test]
    fn test_describe() {
        assert_eq!(Terminal::Keyword("is").describe(), "`is`");
        assert_eq!(Terminal::Delimiter(";").describe(), "`;`");
        assert_eq!(
            Terminal::Kind(TokenKind::Identifier).describe(),
            "identifier"
        );
    }
}
