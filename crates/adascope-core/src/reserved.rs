//! The fixed reserved-word table.
//!
//! The table holds the Ada 2022 reserved words plus the subset-specific
//! words used by the analyzed grammar (`GET`, `PUT`, `INOUT`, `MODULE`,
//! `FLOAT`, `CHAR`). Lookup is case-insensitive, per Ada convention:
//! `Begin`, `BEGIN` and `begin` all name the same reserved word.

/// All reserved words, uppercase, sorted for binary search.
pub const RESERVED_WORDS: &[&str] = &[
    "ABORT",
    "ABS",
    "ABSTRACT",
    "ACCEPT",
    "ACCESS",
    "ALIASED",
    "ALL",
    "AND",
    "ARRAY",
    "AT",
    "BEGIN",
    "BODY",
    "CASE",
    "CHAR",
    "CONSTANT",
    "DECLARE",
    "DELAY",
    "DELTA",
    "DIGITS",
    "DO",
    "ELSE",
    "ELSIF",
    "END",
    "ENTRY",
    "EXCEPTION",
    "EXIT",
    "FLOAT",
    "FOR",
    "FUNCTION",
    "GENERIC",
    "GET",
    "GOTO",
    "IF",
    "IN",
    "INOUT",
    "INTEGER",
    "INTERFACE",
    "IS",
    "LIMITED",
    "LOOP",
    "MOD",
    "MODULE",
    "NEW",
    "NOT",
    "NULL",
    "OF",
    "OR",
    "OTHERS",
    "OUT",
    "OVERRIDING",
    "PACKAGE",
    "PARALLEL",
    "PRAGMA",
    "PRIVATE",
    "PROCEDURE",
    "PROTECTED",
    "PUT",
    "RAISE",
    "RANGE",
    "REAL",
    "RECORD",
    "REM",
    "RENAMES",
    "REQUEUE",
    "RETURN",
    "REVERSE",
    "SELECT",
    "SEPARATE",
    "SOME",
    "SUBTYPE",
    "SYNCHRONIZED",
    "TAGGED",
    "TASK",
    "TERMINATE",
    "THEN",
    "TYPE",
    "UNTIL",
    "USE",
    "WHEN",
    "WHILE",
    "WITH",
    "XOR",
];

/// Whether `word` is a reserved word, compared case-insensitively.
pub fn is_reserved(word: &str) -> bool {
    let upper = word.to_ascii_uppercase();
    RESERVED_WORDS.binary_search(&upper.as_str()).is_ok()
}
