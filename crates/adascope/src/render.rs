//! Plain-text rendering of a parse tree.

use adascope_core::ParseNode;

/// Render a tree as one line per node with box-drawing connectors.
///
/// Branches show the nonterminal name, leaves show the token category
/// and lexeme, ε expansions render as `ε`, and error sentinels as
/// `<error>`. The walk is stateless, so the output is a pure function
/// of the tree.
pub fn render_tree(root: &ParseNode) -> String {
    let mut out = String::new();
    render_node(root, "", true, &mut out);
    out
}

fn render_node(node: &ParseNode, prefix: &str, last: bool, out: &mut String) {
    out.push_str(prefix);
    out.push_str(if last { "└── " } else { "├── " });
    out.push_str(&label(node));
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    let children = node.children();
    for (index, child) in children.iter().enumerate() {
        render_node(child, &child_prefix, index + 1 == children.len(), out);
    }
}

fn label(node: &ParseNode) -> String {
    match node {
        ParseNode::Branch { name, .. } => (*name).to_string(),
        ParseNode::Leaf(token) => format!("{} ({})", token.kind(), token.lexeme()),
        ParseNode::Empty => "ε".to_string(),
        ParseNode::Error => "<error>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, AnalysisOptions};

    #[test]
    fn test_minimal_program_rendering() {
        let analysis = analyze("procedure Main is begin end Main;", &AnalysisOptions::default());
        let expected = "\
└── Program
    ├── reserved word (procedure)
    ├── identifier (Main)
    ├── Args
    │   └── ε
    ├── reserved word (is)
    ├── DeclarativePart
    │   └── ε
    ├── Procedures
    │   └── ε
    ├── reserved word (begin)
    ├── SeqOfStatements
    │   └── ε
    ├── reserved word (end)
    ├── identifier (Main)
    └── delimiter (;)
";
        assert_eq!(render_tree(&analysis.tree), expected);
    }

    #[test]
    fn test_error_sentinel_rendering() {
        let analysis = analyze("", &AnalysisOptions::default());
        let rendered = render_tree(&analysis.tree);
        assert_eq!(rendered, "└── Program\n    └── <error>\n");
    }
}
