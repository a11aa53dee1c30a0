use serde::Serialize;

use crate::diagnostics::{Diagnostic, Severity};

/// An append-only, ordered collection of diagnostics.
///
/// One log is threaded by `&mut` through an entire analysis, so the
/// record reads in the order problems were found: lexical diagnostics
/// first, then syntax diagnostics in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic. Entries are never removed or reordered.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count()
    }

    /// Whether any error-severity diagnostic has been emitted.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }
}

impl<'a> IntoIterator for &'a DiagnosticLog {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Phase;
    use crate::token::Position;

    #[test]
    fn test_emit_preserves_order() {
        let mut log = DiagnosticLog::new();
        log.emit(Diagnostic::error(Phase::Lexical, "first", Position::new(1, 1)));
        log.emit(Diagnostic::error(Phase::Syntax, "second", Position::new(2, 1)));

        let messages: Vec<_> = log.iter().map(Diagnostic::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_counts() {
        let mut log = DiagnosticLog::new();
        assert!(log.is_empty());
        assert!(!log.has_errors());

        log.emit(Diagnostic::warning(Phase::Lexical, "long name", Position::START));
        assert_eq!(log.warning_count(), 1);
        assert_eq!(log.error_count(), 0);
        assert!(!log.has_errors());

        log.emit(Diagnostic::error(Phase::Syntax, "expected `;`", Position::START));
        assert_eq!(log.len(), 2);
        assert_eq!(log.error_count(), 1);
        assert!(log.has_errors());
    }
}
