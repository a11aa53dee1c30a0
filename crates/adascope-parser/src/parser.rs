//! The recursive-descent parser.
//!
//! One procedure per nonterminal, LL(1): each decision is made by
//! peeking at the current token without consuming it, and terminals
//! are matched strictly. Every procedure opens a branch node on entry
//! and appends a leaf per matched terminal and a subtree per
//! nonterminal call, so the tree records the derivation exactly.
//!
//! Malformed input is handled by one of two policies chosen in
//! [`ParserOptions`]. Under stop-on-error the first syntax error ends
//! the parse: the failing nonterminal gets an error sentinel child and
//! every ancestor keeps the children it had built so far. Under
//! panic-mode recovery the failing nonterminal discards tokens until
//! one of its synchronization tokens comes up, records the sentinel,
//! and lets its caller continue, so one malformed construct costs one
//! diagnostic and the rest of the input is still analyzed.

use adascope_core::diagnostics::{Diagnostic, DiagnosticLog, Phase};
use adascope_core::token::{Token, TokenKind};
use adascope_core::tree::ParseNode;
use log::{debug, trace};

use crate::grammar::{self, Nonterminal, Terminal};
use crate::stream::TokenStream;

/// Hard cap on grammar nesting (parenthesized expressions, nested
/// procedures). Exceeding it emits one syntax error and abandons the
/// parse with a partial tree.
pub const MAX_DEPTH: usize = 256;

/// Error-recovery policy flags.
///
/// `stop_on_error` wins when both are set, and both unset also means
/// stop-on-error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Halt at the first syntax error, returning the partial tree.
    pub stop_on_error: bool,
    /// Skip to a synchronization token and keep parsing.
    pub panic_mode_recover: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recovery {
    Stop,
    Panic,
}

impl ParserOptions {
    fn recovery(&self) -> Recovery {
        if self.stop_on_error || !self.panic_mode_recover {
            Recovery::Stop
        } else {
            Recovery::Panic
        }
    }
}

/// Parse a scanned token sequence into a tree rooted at `Program`.
///
/// Never fails: syntax errors become diagnostics in `log` and the
/// returned tree is as complete as the chosen recovery policy allows.
pub fn parse(tokens: &[Token], options: &ParserOptions, log: &mut DiagnosticLog) -> ParseNode {
    let mut parser = Parser {
        stream: TokenStream::new(tokens),
        recovery: options.recovery(),
        log,
        halted: false,
        error_marked: false,
        depth: 0,
    };
    let tree = parser.program();
    parser.check_trailing();
    debug!(errors = parser.log.error_count(); "parse finished");
    tree
}

/// Marker for an aborted production body. Carries no data: the
/// diagnostic was already emitted where the mismatch was seen.
struct Halt;

type Outcome = Result<(), Halt>;

struct Parser<'a, 'l> {
    stream: TokenStream<'a>,
    recovery: Recovery,
    log: &'l mut DiagnosticLog,
    /// Set on the first error under stop-on-error (and on depth
    /// overflow in either mode); suppresses all further matching and
    /// diagnostics.
    halted: bool,
    /// Whether the error sentinel for the halting failure has been
    /// placed, so unwinding ancestors do not add their own.
    error_marked: bool,
    depth: usize,
}

impl Parser<'_, '_> {
    // ---- machinery ----------------------------------------------------

    /// Run one production body inside a fresh branch node, handling
    /// depth accounting and recovery for the nonterminal.
    fn expand(
        &mut self,
        nt: Nonterminal,
        body: impl FnOnce(&mut Self, &mut ParseNode) -> Outcome,
    ) -> ParseNode {
        let mut node = ParseNode::branch(nt.name());
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            self.depth -= 1;
            if !self.halted {
                self.log.emit(Diagnostic::error(
                    Phase::Syntax,
                    format!("nesting exceeds {MAX_DEPTH} levels"),
                    self.stream.position(),
                ));
                self.halted = true;
            }
            self.recover(nt, &mut node);
            return node;
        }
        let outcome = body(self, &mut node);
        self.depth -= 1;
        if outcome.is_err() {
            self.recover(nt, &mut node);
        }
        node
    }

    fn recover(&mut self, nt: Nonterminal, node: &mut ParseNode) {
        if self.halted {
            if !self.error_marked {
                self.error_marked = true;
                node.push(ParseNode::Error);
            }
            return;
        }
        self.skip_to(grammar::sync_set(nt));
        node.push(ParseNode::Error);
    }

    /// Discard tokens until one in `set` (or end of input) comes up.
    fn skip_to(&mut self, set: &[Terminal]) {
        let mut skipped = 0usize;
        while !self.stream.at_eof() && !grammar::matches_any(set, self.stream.peek()) {
            self.stream.advance();
            skipped += 1;
        }
        trace!(skipped = skipped, at = self.stream.position().to_string(); "synchronized");
    }

    fn syntax_error(&mut self, message: String) {
        self.log.emit(Diagnostic::error(
            Phase::Syntax,
            message,
            self.stream.position(),
        ));
        if self.recovery == Recovery::Stop {
            self.halted = true;
        }
    }

    /// Report that the current token cannot begin `what`.
    fn fail_expecting(&mut self, what: &str) -> Halt {
        self.syntax_error(format!("expected {what}, found {}", self.stream.peek()));
        Halt
    }

    /// Match `terminal` strictly: on success the token becomes a leaf,
    /// on mismatch one diagnostic is emitted and the body aborts.
    fn expect(&mut self, terminal: Terminal, node: &mut ParseNode) -> Outcome {
        if self.halted {
            return Err(Halt);
        }
        if terminal.matches(self.stream.peek()) {
            node.push(ParseNode::Leaf(self.stream.advance()));
            Ok(())
        } else {
            self.syntax_error(format!(
                "expected {}, found {}",
                terminal.describe(),
                self.stream.peek()
            ));
            Err(Halt)
        }
    }

    fn check(&self, terminal: Terminal) -> bool {
        terminal.matches(self.stream.peek())
    }

    fn check_any(&self, set: &[Terminal]) -> bool {
        grammar::matches_any(set, self.stream.peek())
    }

    /// Consume the already-checked current token as a leaf.
    fn take(&mut self, node: &mut ParseNode) {
        node.push(ParseNode::Leaf(self.stream.advance()));
    }

    /// Expand a sub-nonterminal and attach its tree.
    fn child(&mut self, node: &mut ParseNode, f: fn(&mut Self) -> ParseNode) -> Outcome {
        if self.halted {
            return Err(Halt);
        }
        let subtree = f(self);
        node.push(subtree);
        if self.halted { Err(Halt) } else { Ok(()) }
    }

    /// One diagnostic for anything left over after the program.
    fn check_trailing(&mut self) {
        if !self.halted && !self.stream.at_eof() {
            self.syntax_error(format!(
                "expected end of input, found {}",
                self.stream.peek()
            ));
        }
    }

    // ---- productions ---------------------------------------------------

    fn program(&mut self) -> ParseNode {
        self.expand(Nonterminal::Program, |s, node| {
            s.expect(Terminal::Keyword("procedure"), node)?;
            s.expect(Terminal::Kind(TokenKind::Identifier), node)?;
            s.child(node, Self::args)?;
            s.expect(Terminal::Keyword("is"), node)?;
            s.child(node, Self::declarative_part)?;
            s.child(node, Self::procedures)?;
            s.expect(Terminal::Keyword("begin"), node)?;
            s.child(node, Self::seq_of_statements)?;
            s.expect(Terminal::Keyword("end"), node)?;
            s.expect(Terminal::Kind(TokenKind::Identifier), node)?;
            s.expect(Terminal::Delimiter(";"), node)
        })
    }

    fn args(&mut self) -> ParseNode {
        self.expand(Nonterminal::Args, |s, node| {
            if s.check(Terminal::Delimiter("(")) {
                s.take(node);
                s.child(node, Self::arg_list)?;
                s.expect(Terminal::Delimiter(")"), node)?;
            } else {
                node.push(ParseNode::Empty);
            }
            Ok(())
        })
    }

    fn arg_list(&mut self) -> ParseNode {
        self.expand(Nonterminal::ArgList, |s, node| {
            s.child(node, Self::mode)?;
            s.child(node, Self::identifier_list)?;
            s.expect(Terminal::Delimiter(":"), node)?;
            s.child(node, Self::type_mark)?;
            s.child(node, Self::more_args)
        })
    }

    fn more_args(&mut self) -> ParseNode {
        self.expand(Nonterminal::MoreArgs, |s, node| {
            if s.check(Terminal::Delimiter(";")) {
                s.take(node);
                s.child(node, Self::arg_list)?;
            } else {
                node.push(ParseNode::Empty);
            }
            Ok(())
        })
    }

    fn mode(&mut self) -> ParseNode {
        self.expand(Nonterminal::Mode, |s, node| {
            if s.check_any(grammar::first(Nonterminal::Mode)) {
                s.take(node);
            } else {
                node.push(ParseNode::Empty);
            }
            Ok(())
        })
    }

    fn declarative_part(&mut self) -> ParseNode {
        self.expand(Nonterminal::DeclarativePart, |s, node| {
            if !s.check(Terminal::Kind(TokenKind::Identifier)) {
                node.push(ParseNode::Empty);
                return Ok(());
            }
            while s.check(Terminal::Kind(TokenKind::Identifier)) {
                s.child(node, Self::identifier_list)?;
                s.expect(Terminal::Delimiter(":"), node)?;
                s.child(node, Self::type_mark)?;
                s.expect(Terminal::Delimiter(";"), node)?;
            }
            Ok(())
        })
    }

    fn identifier_list(&mut self) -> ParseNode {
        self.expand(Nonterminal::IdentifierList, |s, node| {
            s.expect(Terminal::Kind(TokenKind::Identifier), node)?;
            while s.check(Terminal::Delimiter(",")) {
                s.take(node);
                s.expect(Terminal::Kind(TokenKind::Identifier), node)?;
            }
            Ok(())
        })
    }

    fn type_mark(&mut self) -> ParseNode {
        self.expand(Nonterminal::TypeMark, |s, node| {
            if s.check(Terminal::Keyword("constant")) {
                s.take(node);
                s.expect(Terminal::Operator(":="), node)?;
                s.child(node, Self::value)?;
            } else if s.check_any(grammar::first(Nonterminal::TypeMark)) {
                s.take(node);
            } else {
                return Err(s.fail_expecting("a type mark"));
            }
            Ok(())
        })
    }

    fn value(&mut self) -> ParseNode {
        self.expand(Nonterminal::Value, |s, node| {
            if s.check_any(grammar::first(Nonterminal::Value)) {
                s.take(node);
                Ok(())
            } else {
                Err(s.fail_expecting("a numeric value"))
            }
        })
    }

    fn procedures(&mut self) -> ParseNode {
        self.expand(Nonterminal::Procedures, |s, node| {
            if !s.check(Terminal::Keyword("procedure")) {
                node.push(ParseNode::Empty);
                return Ok(());
            }
            while s.check(Terminal::Keyword("procedure")) {
                s.child(node, Self::program)?;
            }
            Ok(())
        })
    }

    /// Statements separated by `;`. A missing separator or a token
    /// that cannot begin a statement recovers locally under panic mode
    /// so the statements after it are still parsed.
    fn seq_of_statements(&mut self) -> ParseNode {
        self.expand(Nonterminal::SeqOfStatements, |s, node| {
            loop {
                if s.check(Terminal::Keyword("end")) || s.stream.at_eof() {
                    break;
                }
                if s.check_any(grammar::first(Nonterminal::Statement)) {
                    s.child(node, Self::statement)?;
                    if s.check(Terminal::Delimiter(";")) {
                        s.take(node);
                        continue;
                    }
                    s.syntax_error(format!("expected `;`, found {}", s.stream.peek()));
                } else {
                    s.syntax_error(format!("expected a statement, found {}", s.stream.peek()));
                }
                if s.halted {
                    return Err(Halt);
                }
                node.push(ParseNode::Error);
                s.skip_to_statement_boundary();
                if s.check(Terminal::Delimiter(";")) {
                    s.stream.advance();
                }
            }
            if node.children().is_empty() {
                node.push(ParseNode::Empty);
            }
            Ok(())
        })
    }

    /// Resynchronize after a bad statement separator: stop at the next
    /// `;`, the start of the next statement, or the enclosing `end`.
    fn skip_to_statement_boundary(&mut self) {
        while !self.stream.at_eof()
            && !self.check(Terminal::Delimiter(";"))
            && !self.check(Terminal::Keyword("end"))
            && !self.check_any(grammar::first(Nonterminal::Statement))
        {
            self.stream.advance();
        }
    }

    fn statement(&mut self) -> ParseNode {
        self.expand(Nonterminal::Statement, |s, node| {
            if s.check(Terminal::Kind(TokenKind::Identifier)) {
                s.child(node, Self::assign_stat)
            } else if s.check_any(grammar::first(Nonterminal::IoStat)) {
                s.child(node, Self::io_stat)
            } else {
                Err(s.fail_expecting("a statement"))
            }
        })
    }

    fn assign_stat(&mut self) -> ParseNode {
        self.expand(Nonterminal::AssignStat, |s, node| {
            s.expect(Terminal::Kind(TokenKind::Identifier), node)?;
            s.expect(Terminal::Operator(":="), node)?;
            s.child(node, Self::expr)
        })
    }

    fn io_stat(&mut self) -> ParseNode {
        self.expand(Nonterminal::IoStat, |s, node| {
            if s.check(Terminal::Keyword("get")) {
                s.take(node);
                s.expect(Terminal::Delimiter("("), node)?;
                s.expect(Terminal::Kind(TokenKind::Identifier), node)?;
                s.expect(Terminal::Delimiter(")"), node)
            } else {
                s.expect(Terminal::Keyword("put"), node)?;
                s.expect(Terminal::Delimiter("("), node)?;
                s.child(node, Self::expr)?;
                s.expect(Terminal::Delimiter(")"), node)
            }
        })
    }

    fn expr(&mut self) -> ParseNode {
        self.expand(Nonterminal::Expr, |s, node| {
            s.child(node, Self::term)?;
            while s.check_any(grammar::ADDOPS) {
                s.take(node);
                s.child(node, Self::term)?;
            }
            Ok(())
        })
    }

    fn term(&mut self) -> ParseNode {
        self.expand(Nonterminal::Term, |s, node| {
            s.child(node, Self::factor)?;
            while s.check_any(grammar::MULOPS) {
                s.take(node);
                s.child(node, Self::factor)?;
            }
            Ok(())
        })
    }

    fn factor(&mut self) -> ParseNode {
        self.expand(Nonterminal::Factor, |s, node| {
            if s.check(Terminal::Delimiter("(")) {
                s.take(node);
                s.child(node, Self::expr)?;
                s.expect(Terminal::Delimiter(")"), node)
            } else if s.check(Terminal::Keyword("not")) || s.check(Terminal::Operator("-")) {
                s.take(node);
                s.child(node, Self::factor)
            } else if matches!(
                s.stream.peek().kind(),
                TokenKind::Identifier
                    | TokenKind::IntegerLiteral
                    | TokenKind::RealLiteral
                    | TokenKind::CharacterLiteral
                    | TokenKind::StringLiteral
            ) {
                s.take(node);
                Ok(())
            } else {
                Err(s.fail_expecting("an expression"))
            }
        })
    }
}
