//! The parse tree.
//!
//! A [`ParseNode`] mirrors the grammar derivation: every nonterminal
//! expansion becomes a branch whose children appear in production
//! order, every matched terminal becomes a leaf holding its token, and
//! an ε expansion is recorded explicitly so a completed branch always
//! has at least one child. The error sentinel marks the point where a
//! nonterminal failed or where recovery resumed.

use serde::Serialize;

use crate::token::Token;

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseNode {
    /// A nonterminal expansion. Children are in production order.
    Branch {
        name: &'static str,
        children: Vec<ParseNode>,
    },
    /// A matched terminal.
    Leaf(Token),
    /// An explicit ε expansion.
    Empty,
    /// The point where a nonterminal failed or where recovery resumed.
    Error,
}

impl ParseNode {
    /// Create an empty branch for the named nonterminal.
    pub fn branch(name: &'static str) -> Self {
        ParseNode::Branch {
            name,
            children: Vec::new(),
        }
    }

    /// Append a child to a branch.
    ///
    /// Has no effect on non-branch nodes; parser procedures only ever
    /// push into the branch they created on entry.
    pub fn push(&mut self, child: ParseNode) {
        if let ParseNode::Branch { children, .. } = self {
            children.push(child);
        }
    }

    /// The nonterminal name, if this node is a branch.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            ParseNode::Branch { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The children of this node. Non-branch nodes have none.
    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Branch { children, .. } => children,
            _ => &[],
        }
    }

    /// The token of this node, if it is a leaf.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseNode::Leaf(token) => Some(token),
            _ => None,
        }
    }

    /// The height of the tree rooted here. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ParseNode::Branch { children, .. } => {
                1 + children.iter().map(ParseNode::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Whether any node in this subtree is an error sentinel.
    pub fn contains_error(&self) -> bool {
        match self {
            ParseNode::Error => true,
            ParseNode::Branch { children, .. } => {
                children.iter().any(ParseNode::contains_error)
            }
            _ => false,
        }
    }
}
