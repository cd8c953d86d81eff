//! Shared helpers for binder integration tests.

#![allow(dead_code)]

use rsharp_ast::{Expression, NodeFactory, SyntaxKind, SyntaxNode, SyntaxTree, TypeSyntax};
use rsharp_binder::{find_expression_variables, FinderError, LocalSymbol, LocalSymbolFactory, ScopeId};
use rsharp_core::StringInterner;

pub const SCOPE: ScopeId = ScopeId(0);
pub const ENCLOSING: ScopeId = ScopeId(1);

/// Install a log subscriber honouring `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn int<'a>(f: &NodeFactory<'a>) -> TypeSyntax<'a> {
    f.predefined_type(SyntaxKind::IntKeyword)
}

/// `target is int name`
pub fn is_int<'a>(f: &NodeFactory<'a>, target: &str, name: &str) -> Expression<'a> {
    f.is_pattern(f.name(target), f.declaration_pattern(int(f), f.single_designation(name)))
}

/// `callee(out int name)`
pub fn call_out<'a>(f: &NodeFactory<'a>, callee: &str, name: &str) -> Expression<'a> {
    f.invocation(f.name(callee), vec![f.out_declaration(int(f), name)])
}

/// Run the single-root finder with a fresh symbol factory.
pub fn find_in<'a>(
    tree: &SyntaxTree<'a>,
    interner: &StringInterner,
    node: SyntaxNode<'a>,
) -> Result<Vec<LocalSymbol>, FinderError> {
    let mut factory = LocalSymbolFactory::new(interner.clone());
    let mut out = Vec::new();
    find_expression_variables(tree, &mut factory, SCOPE, Some(ENCLOSING), Some(node), &mut out)?;
    Ok(out)
}

pub fn names(interner: &StringInterner, symbols: &[LocalSymbol]) -> Vec<String> {
    symbols.iter().map(|s| interner.resolve(s.name).to_string()).collect()
}
