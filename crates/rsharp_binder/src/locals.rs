//! Block-level local collection.
//!
//! Builds one scope per block, switch section or constructor initializer.
//! Ordinary locals and expression variables land in the scope in the order
//! they appear in source.

use crate::error::FinderError;
use crate::expression_variable_finder::{find_expression_variables, find_expression_variables_in_list};
use crate::scope::{ScopeId, Scopes};
use crate::symbol::{LocalSymbol, LocalSymbolFactory};
use rsharp_ast::{ConstructorInitializer, Statement, SwitchSection, SyntaxNode, SyntaxTree};
use rsharp_core::intern::StringInterner;

pub struct LocalScopeBuilder<'t, 'a> {
    tree: &'t SyntaxTree<'a>,
    factory: LocalSymbolFactory,
    scopes: Scopes,
}

impl<'t, 'a> LocalScopeBuilder<'t, 'a> {
    pub fn new(tree: &'t SyntaxTree<'a>, interner: StringInterner) -> Self {
        Self {
            tree,
            factory: LocalSymbolFactory::new(interner),
            scopes: Scopes::new(),
        }
    }

    pub fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    pub fn into_scopes(self) -> Scopes {
        self.scopes
    }

    /// Create a child scope of `parent` holding the locals of `statements`.
    ///
    /// Expression variables are registered in the new scope; `parent` is the
    /// enclosing scope handed to out variables.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn build_block_locals(
        &mut self,
        parent: Option<ScopeId>,
        statements: &'a [Statement<'a>],
    ) -> Result<ScopeId, FinderError> {
        let scope = self.scopes.push(parent);
        let mut locals = Vec::new();
        self.collect_statement_locals(scope, parent, statements, &mut locals)?;
        self.declare_all(scope, locals);
        Ok(scope)
    }

    /// Like `build_block_locals`, but pattern labels of the section are
    /// searched first.
    #[tracing::instrument(level = "debug", skip_all, fields(labels = section.labels.len()))]
    pub fn build_switch_section_locals(
        &mut self,
        parent: Option<ScopeId>,
        section: &'a SwitchSection<'a>,
    ) -> Result<ScopeId, FinderError> {
        let scope = self.scopes.push(parent);
        let mut locals = Vec::new();
        find_expression_variables(
            self.tree,
            &mut self.factory,
            scope,
            parent,
            Some(SyntaxNode::SwitchSection(section)),
            &mut locals,
        )?;
        self.collect_statement_locals(scope, parent, section.statements, &mut locals)?;
        self.declare_all(scope, locals);
        Ok(scope)
    }

    /// Scope for the out variables of a `: this(...)` or `: base(...)` call.
    pub fn build_constructor_initializer_locals(
        &mut self,
        parent: Option<ScopeId>,
        initializer: &'a ConstructorInitializer<'a>,
    ) -> Result<ScopeId, FinderError> {
        let scope = self.scopes.push(parent);
        let mut locals = Vec::new();
        let arguments = initializer.argument_list.arguments.iter().map(|arg| arg.expression);
        find_expression_variables_in_list(self.tree, &mut self.factory, scope, arguments, &mut locals)?;
        self.declare_all(scope, locals);
        Ok(scope)
    }

    fn collect_statement_locals(
        &mut self,
        scope: ScopeId,
        enclosing: Option<ScopeId>,
        statements: &'a [Statement<'a>],
        locals: &mut Vec<LocalSymbol>,
    ) -> Result<(), FinderError> {
        for stmt in statements {
            match stmt {
                Statement::LocalDeclaration(n) => {
                    let declaration = &n.declaration;
                    for declarator in declaration.variables {
                        locals.push(self.factory.make_local_variable(scope, declaration.type_syntax, declarator));
                        find_expression_variables(
                            self.tree,
                            &mut self.factory,
                            scope,
                            enclosing,
                            Some(SyntaxNode::VariableDeclarator(declarator)),
                            locals,
                        )?;
                    }
                }
                Statement::Expression(_)
                | Statement::If(_)
                | Statement::While(_)
                | Statement::Do(_)
                | Statement::Switch(_)
                | Statement::Lock(_)
                | Statement::Return(_)
                | Statement::Throw(_) => {
                    find_expression_variables(
                        self.tree,
                        &mut self.factory,
                        scope,
                        enclosing,
                        Some(SyntaxNode::Statement(stmt)),
                        locals,
                    )?;
                }
                // Nested blocks and loops get their own scopes.
                _ => {}
            }
        }
        Ok(())
    }

    fn declare_all(&mut self, scope: ScopeId, locals: Vec<LocalSymbol>) {
        let count = locals.len();
        if let Some(target) = self.scopes.get_mut(scope) {
            for local in locals {
                target.declare(local);
            }
        }
        tracing::debug!(scope = scope.0, locals = count, "built local scope");
    }
}
