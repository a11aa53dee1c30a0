//! A serializable view of an analysis, for transport.

use adascope_core::{DiagnosticLog, TokenKind};
use serde::Serialize;

use crate::render::render_tree;
use crate::Analysis;

/// Flat, serialization-friendly summary of an [`Analysis`]:
/// the classified tokens, the rendered tree, the diagnostics, and an
/// overall success flag. The synthetic end-of-input token is omitted
/// from the token list.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub tokens: Vec<(TokenKind, String)>,
    pub parse_tree: String,
    pub diagnostics: DiagnosticLog,
    pub success: bool,
}

impl From<&Analysis> for AnalysisReport {
    fn from(analysis: &Analysis) -> Self {
        Self {
            tokens: analysis
                .tokens
                .iter()
                .filter(|t| t.kind() != TokenKind::Eof)
                .map(|t| (t.kind(), t.lexeme().to_string()))
                .collect(),
            parse_tree: render_tree(&analysis.tree),
            diagnostics: analysis.diagnostics.clone(),
            success: analysis.succeeded(),
        }
    }
}

impl AnalysisReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, AnalysisOptions};

    #[test]
    fn test_report_contents() {
        let analysis = analyze("procedure Main is begin end Main;", &AnalysisOptions::default());
        let report = AnalysisReport::from(&analysis);

        assert!(report.success);
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.tokens.len(), 7);
        assert_eq!(
            report.tokens[0],
            (TokenKind::ReservedWord, "procedure".to_string())
        );
        assert!(report.parse_tree.contains("└── Program"));
    }

    #[test]
    fn test_report_json_shape() {
        let analysis = analyze("procedure P is begin x := ; end P;", &AnalysisOptions::default());
        let report = AnalysisReport::from(&analysis);
        assert!(!report.success);

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], serde_json::Value::Bool(false));
        assert!(value["tokens"].is_array());
        assert!(value["parse_tree"].is_string());
        assert_eq!(value["diagnostics"].as_array().unwrap().len(), 1);
        assert_eq!(value["diagnostics"][0]["severity"], "error");
        assert_eq!(value["diagnostics"][0]["phase"], "syntax");
    }
}
