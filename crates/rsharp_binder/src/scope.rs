//! Scopes that collect locals for later name resolution.

use crate::symbol::{LocalSymbol, SymbolTable};
use rsharp_core::intern::InternedString;

/// Index of a scope within a `Scopes` collection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ScopeId(pub u32);

impl ScopeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A lexical scope. Scopes form a chain from inner to outer.
#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    /// The parent scope (None for the outermost scope).
    pub parent: Option<ScopeId>,
    /// Name lookup; a later declaration of the same name shadows the earlier.
    pub locals: SymbolTable,
    /// Every declared local, in declaration order.
    pub symbols: Vec<LocalSymbol>,
}

impl Scope {
    pub fn new(id: ScopeId, parent: Option<ScopeId>) -> Self {
        Self {
            id,
            parent,
            locals: SymbolTable::new(),
            symbols: Vec::new(),
        }
    }

    pub fn declare(&mut self, symbol: LocalSymbol) {
        self.locals.set(symbol.name, symbol.id);
        self.symbols.push(symbol);
    }

    /// Look up a local declared directly in this scope.
    pub fn get(&self, name: InternedString) -> Option<&LocalSymbol> {
        let id = self.locals.get(&name)?;
        self.symbols.iter().rev().find(|s| s.id == id)
    }
}

/// Owns every scope created while binding one body.
#[derive(Debug, Default)]
pub struct Scopes {
    scopes: Vec<Scope>,
}

impl Scopes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::new(id, parent));
        id
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    pub fn get_mut(&mut self, id: ScopeId) -> Option<&mut Scope> {
        self.scopes.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Resolve `name` starting at `scope` and walking outward.
    pub fn lookup(&self, scope: ScopeId, name: InternedString) -> Option<&LocalSymbol> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.get(id)?;
            if let Some(symbol) = scope.get(name) {
                return Some(symbol);
            }
            current = scope.parent;
        }
        None
    }
}
