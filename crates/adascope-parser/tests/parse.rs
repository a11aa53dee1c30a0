//! End-to-end scanning and parsing through the public API.

use adascope_core::{DiagnosticLog, TokenKind};
use adascope_parser::{parse, tokenize, LexerOptions, ParserOptions};

const PROGRAM: &str = "\
procedure Average (in count : integer; out result : real) is
    total, n : integer;
    scale : constant := 10;
begin
    get(total);
    n := total / scale;   -- integer division
    result := n + 0.5;
    put(result);
end Average;
";

#[test]
fn full_program_is_clean() {
    let mut log = DiagnosticLog::new();
    let tokens = tokenize(PROGRAM, &LexerOptions::default(), &mut log);
    let tree = parse(&tokens, &ParserOptions::default(), &mut log);

    assert!(log.is_empty(), "{log:?}");
    assert_eq!(tree.name(), Some("Program"));
    assert!(!tree.contains_error());
}

#[test]
fn reserved_words_and_identifiers_partition() {
    let mut log = DiagnosticLog::new();
    let tokens = tokenize(PROGRAM, &LexerOptions::default(), &mut log);

    for token in &tokens {
        match token.kind() {
            TokenKind::ReservedWord => {
                assert!(adascope_core::reserved::is_reserved(token.lexeme()));
            }
            TokenKind::Identifier => {
                assert!(!adascope_core::reserved::is_reserved(token.lexeme()));
            }
            _ => {}
        }
    }
}

#[test]
fn analysis_is_deterministic() {
    let run = || {
        let mut log = DiagnosticLog::new();
        let tokens = tokenize(PROGRAM, &LexerOptions::default(), &mut log);
        let tree = parse(&tokens, &ParserOptions::default(), &mut log);
        (tokens, tree, log)
    };
    assert_eq!(run(), run());
}
