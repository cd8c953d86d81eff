//! Local symbols and the factory seam used by the expression variable finder.

use crate::scope::ScopeId;
use rsharp_ast::{Identifier, NodeId, SymbolId, SyntaxNode, TypeSyntax, VariableDeclarator};
use rsharp_core::intern::{InternedString, StringInterner};
use rsharp_core::text::TextRange;
use rustc_hash::FxHashMap;

/// How a local came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalDeclarationKind {
    /// Declared by a local declaration statement.
    RegularVariable,
    /// Bound by a pattern: `is int x`, `is var x`, `is Point p`.
    PatternVariable,
    /// Declared in an argument position: `M(out int x)`.
    OutVariable,
}

/// A local variable discovered while binding a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSymbol {
    pub id: SymbolId,
    pub name: InternedString,
    pub declaration_kind: LocalDeclarationKind,
    /// The scope the local is registered in.
    pub scope: ScopeId,
    /// For out variables, the scope enclosing the declaring statement.
    pub enclosing_scope: Option<ScopeId>,
    /// The declared type node; `None` when the type is inferred.
    pub type_syntax: Option<NodeId>,
    /// Declared with `var`, or with no type at all.
    pub is_implicitly_typed: bool,
    /// Range of the declared name.
    pub range: TextRange,
    /// For out variables, the invocation, object creation or constructor
    /// initializer whose argument list declares the local.
    pub declaring_node: Option<NodeId>,
}

/// A symbol table maps names to symbols.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: FxHashMap<InternedString, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    pub fn get(&self, name: &InternedString) -> Option<SymbolId> {
        self.table.get(name).copied()
    }

    pub fn set(&mut self, name: InternedString, symbol: SymbolId) {
        self.table.insert(name, symbol);
    }

    pub fn has(&self, name: &InternedString) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InternedString, &SymbolId)> {
        self.table.iter()
    }
}

/// Manufactures descriptors for variables declared inside expressions.
///
/// The finder owns no symbol representation of its own; whatever the factory
/// returns is appended to the caller's output in encounter order.
pub trait SymbolFactory<'a> {
    type Symbol;

    /// A variable bound by a pattern. `declared_type` is `None` for `var`
    /// patterns and untyped recursive patterns. `position` is the range of the
    /// pattern that binds the name.
    fn make_pattern_variable(
        &mut self,
        scope: ScopeId,
        declared_type: Option<&'a TypeSyntax<'a>>,
        name: &'a Identifier,
        position: TextRange,
    ) -> Self::Symbol;

    /// A variable declared in an argument position. `declaring_context` is the
    /// call-like node owning the argument list.
    fn make_out_variable(
        &mut self,
        scope: ScopeId,
        enclosing_scope: Option<ScopeId>,
        declared_type: &'a TypeSyntax<'a>,
        name: &'a Identifier,
        declaring_context: SyntaxNode<'a>,
    ) -> Self::Symbol;
}

/// Produces `LocalSymbol`s with sequential ids.
#[derive(Debug, Clone)]
pub struct LocalSymbolFactory {
    interner: StringInterner,
    next_id: u32,
}

impl LocalSymbolFactory {
    pub fn new(interner: StringInterner) -> Self {
        Self { interner, next_id: 0 }
    }

    /// Number of symbols created so far.
    pub fn symbol_count(&self) -> u32 {
        self.next_id
    }

    fn next_symbol_id(&mut self) -> SymbolId {
        let id = SymbolId(self.next_id);
        self.next_id += 1;
        id
    }

    fn is_var(&self, ty: &TypeSyntax<'_>) -> bool {
        match ty {
            TypeSyntax::Identifier(name) => self.interner.is(name.identifier.text, "var"),
            _ => false,
        }
    }

    /// A local declared by an ordinary declaration statement.
    pub fn make_local_variable(
        &mut self,
        scope: ScopeId,
        declared_type: &TypeSyntax<'_>,
        declarator: &VariableDeclarator<'_>,
    ) -> LocalSymbol {
        LocalSymbol {
            id: self.next_symbol_id(),
            name: declarator.identifier.text,
            declaration_kind: LocalDeclarationKind::RegularVariable,
            scope,
            enclosing_scope: None,
            type_syntax: Some(declared_type.id()),
            is_implicitly_typed: self.is_var(declared_type),
            range: declarator.identifier.data.range,
            declaring_node: None,
        }
    }
}

impl<'a> SymbolFactory<'a> for LocalSymbolFactory {
    type Symbol = LocalSymbol;

    fn make_pattern_variable(
        &mut self,
        scope: ScopeId,
        declared_type: Option<&'a TypeSyntax<'a>>,
        name: &'a Identifier,
        _position: TextRange,
    ) -> LocalSymbol {
        LocalSymbol {
            id: self.next_symbol_id(),
            name: name.text,
            declaration_kind: LocalDeclarationKind::PatternVariable,
            scope,
            enclosing_scope: None,
            type_syntax: declared_type.map(|t| t.id()),
            is_implicitly_typed: declared_type.map_or(true, |t| self.is_var(t)),
            range: name.data.range,
            declaring_node: None,
        }
    }

    fn make_out_variable(
        &mut self,
        scope: ScopeId,
        enclosing_scope: Option<ScopeId>,
        declared_type: &'a TypeSyntax<'a>,
        name: &'a Identifier,
        declaring_context: SyntaxNode<'a>,
    ) -> LocalSymbol {
        LocalSymbol {
            id: self.next_symbol_id(),
            name: name.text,
            declaration_kind: LocalDeclarationKind::OutVariable,
            scope,
            enclosing_scope,
            type_syntax: Some(declared_type.id()),
            is_implicitly_typed: self.is_var(declared_type),
            range: name.data.range,
            declaring_node: Some(declaring_context.id()),
        }
    }
}
