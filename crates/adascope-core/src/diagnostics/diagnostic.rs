use std::fmt;

use serde::Serialize;

use crate::diagnostics::Severity;
use crate::token::Position;

/// Which analysis phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Lexical,
    Syntax,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Lexical => write!(f, "lexical"),
            Phase::Syntax => write!(f, "syntax"),
        }
    }
}

/// One problem found in the analyzed source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    phase: Phase,
    message: String,
    position: Position,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(phase: Phase, message: impl Into<String>, position: Position) -> Self {
        Self {
            severity: Severity::Error,
            phase,
            message: message.into(),
            position,
        }
    }

    /// Create a warning-severity diagnostic.
    pub fn warning(phase: Phase, message: impl Into<String>, position: Position) -> Self {
        Self {
            severity: Severity::Warning,
            phase,
            message: message.into(),
            position,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}: {}",
            self.phase, self.severity, self.position, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructor() {
        let d = Diagnostic::error(Phase::Syntax, "expected `;`", Position::new(3, 5));
        assert_eq!(d.severity(), Severity::Error);
        assert_eq!(d.phase(), Phase::Syntax);
        assert_eq!(d.message(), "expected `;`");
        assert_eq!(d.position(), Position::new(3, 5));
    }

    #[test]
    fn test_warning_constructor() {
        let d = Diagnostic::warning(Phase::Lexical, "identifier too long", Position::START);
        assert_eq!(d.severity(), Severity::Warning);
        assert_eq!(d.phase(), Phase::Lexical);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::error(Phase::Syntax, "expected `;`", Position::new(3, 5));
        assert_eq!(d.to_string(), "syntax error at 3:5: expected `;`");
    }
}
