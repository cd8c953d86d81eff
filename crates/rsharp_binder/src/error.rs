//! Errors raised by the expression variable finder.

use rsharp_ast::SyntaxKind;
use rsharp_core::text::TextPos;

/// Internal invariant violations detected while walking a tree.
///
/// These are never user diagnostics. A tree that triggers one was produced by
/// something other than the parser, or by a parser bug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    /// A declaration expression was found outside the argument list of an
    /// invocation, object creation, or `this`/`base` constructor initializer.
    /// `context` is the first node on the parent chain that breaks that shape,
    /// or `None` when the chain ends first.
    #[error("unexpected declaration expression context {context:?} at position {pos}")]
    UnexpectedDeclarationContext { context: Option<SyntaxKind>, pos: TextPos },
}
