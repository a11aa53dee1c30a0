//! The diagnostics model.
//!
//! Every problem found in the analyzed source text becomes a
//! [`Diagnostic`] record in an append-only [`DiagnosticLog`]. Malformed
//! input is never an `Err`: the lexer and parser always produce
//! best-effort artifacts and report what went wrong here.

mod diagnostic;
mod log;
mod severity;

pub use diagnostic::{Diagnostic, Phase};
pub use log::DiagnosticLog;
pub use severity::Severity;
