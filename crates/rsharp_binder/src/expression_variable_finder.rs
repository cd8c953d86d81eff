//! Discovery of variables declared inside expressions.
//!
//! Pattern variables (`o is int x`) and out variables (`M(out int x)`) are
//! not introduced by declaration statements, so the binder has to find them
//! before it can resolve names in the enclosing scope. The finder walks only
//! the parts of a statement or expression where such declarations belong to
//! that scope:
//!
//! - local declarations contribute only their initializers
//! - `if`, `while` and `do` contribute their condition; `switch` and `lock`
//!   their governing expression
//! - a switch section contributes the pattern and `when` condition of each
//!   pattern label
//! - a query contributes its first source and the source of every `join`,
//!   following continuations
//! - switch expressions contribute only the governing expression
//! - lambdas and anonymous methods contribute nothing
//!
//! Any other node has its children walked in source order.

use crate::error::FinderError;
use crate::scope::ScopeId;
use crate::symbol::SymbolFactory;
use rsharp_ast::{
    BinaryExpression, DeclarationExpression, Expression, Pattern, QueryBody, QueryClause, Statement, SwitchLabel,
    SwitchSection, SyntaxKind, SyntaxNode, SyntaxTree, TypeSyntax, VariableDesignation,
};
use rsharp_core::text::{TextPos, TextRange};

/// Collect the variables declared in `node` into `out`.
///
/// `scope` receives every variable. `enclosing_scope` is passed to the
/// factory for out variables only. An absent `node` is a no-op.
///
/// On error the traversal stops; variables found before the offending
/// declaration stay in `out`.
#[tracing::instrument(level = "trace", skip_all, fields(scope = scope.0, root = ?node.map(|n| n.kind())))]
pub fn find_expression_variables<'a, F: SymbolFactory<'a>>(
    tree: &SyntaxTree<'a>,
    factory: &mut F,
    scope: ScopeId,
    enclosing_scope: Option<ScopeId>,
    node: Option<SyntaxNode<'a>>,
    out: &mut Vec<F::Symbol>,
) -> Result<(), FinderError> {
    let Some(node) = node else {
        return Ok(());
    };
    let mut finder = ExpressionVariableFinder::new(tree, factory, scope, enclosing_scope, out);
    finder.visit(node)
}

/// Collect the variables declared in each of `nodes`, in order.
///
/// Used for groups of expressions that share a scope, such as the arguments
/// of a constructor initializer. No enclosing scope is passed to the factory.
#[tracing::instrument(level = "trace", skip_all, fields(scope = scope.0))]
pub fn find_expression_variables_in_list<'a, F, I>(
    tree: &SyntaxTree<'a>,
    factory: &mut F,
    scope: ScopeId,
    nodes: I,
    out: &mut Vec<F::Symbol>,
) -> Result<(), FinderError>
where
    F: SymbolFactory<'a>,
    I: IntoIterator<Item = &'a Expression<'a>>,
{
    let mut finder = ExpressionVariableFinder::new(tree, factory, scope, None, out);
    for expression in nodes {
        finder.visit_expression(expression)?;
    }
    Ok(())
}

/// One traversal. Constructed per call and dropped when the call returns, so
/// no state outlives an entry point.
struct ExpressionVariableFinder<'t, 'a, F: SymbolFactory<'a>> {
    tree: &'t SyntaxTree<'a>,
    factory: &'t mut F,
    scope: ScopeId,
    enclosing_scope: Option<ScopeId>,
    out: &'t mut Vec<F::Symbol>,
}

impl<'t, 'a, F: SymbolFactory<'a>> ExpressionVariableFinder<'t, 'a, F> {
    fn new(
        tree: &'t SyntaxTree<'a>,
        factory: &'t mut F,
        scope: ScopeId,
        enclosing_scope: Option<ScopeId>,
        out: &'t mut Vec<F::Symbol>,
    ) -> Self {
        Self {
            tree,
            factory,
            scope,
            enclosing_scope,
            out,
        }
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    fn visit(&mut self, node: SyntaxNode<'a>) -> Result<(), FinderError> {
        match node {
            SyntaxNode::Statement(stmt) => self.visit_statement(stmt),
            SyntaxNode::SwitchSection(section) => self.visit_switch_section(section),
            SyntaxNode::Expression(expr) => self.visit_expression(expr),
            SyntaxNode::Pattern(pattern) => self.visit_pattern(pattern),
            SyntaxNode::QueryBody(body) => self.visit_query_body(body),
            SyntaxNode::QueryContinuation(cont) => self.visit_query_body(&cont.body),
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: SyntaxNode<'a>) -> Result<(), FinderError> {
        for child in node.children() {
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self, stmt: &'a Statement<'a>) -> Result<(), FinderError> {
        match stmt {
            Statement::LocalDeclaration(n) => {
                for declarator in n.declaration.variables {
                    if let Some(initializer) = declarator.initializer {
                        self.visit_expression(initializer)?;
                    }
                }
                Ok(())
            }
            Statement::If(n) => self.visit_expression(n.condition),
            Statement::While(n) => self.visit_expression(n.condition),
            Statement::Do(n) => self.visit_expression(n.condition),
            Statement::Switch(n) => self.visit_expression(n.expression),
            Statement::Lock(n) => self.visit_expression(n.expression),
            _ => self.visit_children(SyntaxNode::Statement(stmt)),
        }
    }

    fn visit_switch_section(&mut self, section: &'a SwitchSection<'a>) -> Result<(), FinderError> {
        for label in section.labels {
            if let SwitchLabel::CasePattern(label) = label {
                self.visit_pattern(label.pattern)?;
                if let Some(when) = label.when_clause {
                    self.visit_expression(when.condition)?;
                }
            }
        }
        Ok(())
    }

    fn visit_expression(&mut self, expr: &'a Expression<'a>) -> Result<(), FinderError> {
        match expr {
            Expression::Binary(binary) => self.visit_binary(binary),
            Expression::Declaration(decl) => self.report_out_variable(expr, decl),
            Expression::ParenthesizedLambda(_) | Expression::SimpleLambda(_) | Expression::AnonymousMethod(_) => Ok(()),
            Expression::Query(query) => {
                self.visit_expression(query.from_clause.expression)?;
                self.visit_query_body(&query.body)
            }
            Expression::Switch(switch) => self.visit_expression(switch.governing_expression),
            _ => self.visit_children(SyntaxNode::Expression(expr)),
        }
    }

    /// Walk a left-nested chain without recursing on the left operand.
    ///
    /// Right operands are stacked on the way down to the leftmost leaf and
    /// popped afterwards, which yields the same left-to-right order as plain
    /// recursion for chains of any length.
    fn visit_binary(&mut self, root: &'a BinaryExpression<'a>) -> Result<(), FinderError> {
        let mut rights: Vec<&'a Expression<'a>> = Vec::new();
        let mut current = root;
        let leftmost = loop {
            rights.push(current.right);
            match current.left {
                Expression::Binary(left) => current = left,
                leaf => break leaf,
            }
        };
        self.visit_expression(leftmost)?;
        while let Some(right) = rights.pop() {
            self.visit_expression(right)?;
        }
        Ok(())
    }

    fn visit_pattern(&mut self, pattern: &'a Pattern<'a>) -> Result<(), FinderError> {
        match pattern {
            Pattern::Declaration(p) => {
                self.report_pattern_variable(Some(p.type_syntax), &p.designation, p.data.range);
                self.visit_children(SyntaxNode::Pattern(pattern))
            }
            Pattern::Var(p) => {
                self.report_pattern_variable(None, &p.designation, p.data.range);
                Ok(())
            }
            Pattern::Recursive(p) => {
                // The designation follows the subpatterns in source order.
                self.visit_children(SyntaxNode::Pattern(pattern))?;
                if let Some(designation) = &p.designation {
                    self.report_pattern_variable(p.type_syntax, designation, p.data.range);
                }
                Ok(())
            }
            Pattern::Constant(_) | Pattern::Discard(_) => self.visit_children(SyntaxNode::Pattern(pattern)),
        }
    }

    fn visit_query_body(&mut self, body: &'a QueryBody<'a>) -> Result<(), FinderError> {
        let mut body = body;
        loop {
            for clause in body.clauses {
                if let QueryClause::Join(join) = clause {
                    self.visit_expression(join.in_expression)?;
                }
            }
            match body.continuation {
                Some(continuation) => body = &continuation.body,
                None => return Ok(()),
            }
        }
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    fn report_pattern_variable(
        &mut self,
        declared_type: Option<&'a TypeSyntax<'a>>,
        designation: &'a VariableDesignation,
        position: TextRange,
    ) {
        let Some(name) = designation.name() else {
            return;
        };
        tracing::trace!(kind = "pattern", pos = name.data.range.pos, scope = self.scope.0, "found expression variable");
        let symbol = self.factory.make_pattern_variable(self.scope, declared_type, name, position);
        self.out.push(symbol);
    }

    fn report_out_variable(
        &mut self,
        expr: &'a Expression<'a>,
        decl: &'a DeclarationExpression<'a>,
    ) -> Result<(), FinderError> {
        let pos = decl.data.range.pos;
        let declaring_context = self.out_variable_context(SyntaxNode::Expression(expr), pos)?;
        let Some(name) = decl.designation.name() else {
            return Ok(());
        };
        tracing::trace!(kind = "out", pos = name.data.range.pos, scope = self.scope.0, "found expression variable");
        let symbol =
            self.factory
                .make_out_variable(self.scope, self.enclosing_scope, decl.type_syntax, name, declaring_context);
        self.out.push(symbol);
        Ok(())
    }

    /// The call-like node whose argument list holds the declaration.
    fn out_variable_context(&self, decl: SyntaxNode<'a>, pos: TextPos) -> Result<SyntaxNode<'a>, FinderError> {
        let argument = self.expect_parent(decl, pos, |kind| kind == SyntaxKind::Argument)?;
        let list = self.expect_parent(argument, pos, |kind| {
            matches!(kind, SyntaxKind::ArgumentList | SyntaxKind::BracketedArgumentList)
        })?;
        self.expect_parent(list, pos, |kind| {
            matches!(
                kind,
                SyntaxKind::InvocationExpression
                    | SyntaxKind::ObjectCreationExpression
                    | SyntaxKind::ThisConstructorInitializer
                    | SyntaxKind::BaseConstructorInitializer
            )
        })
    }

    fn expect_parent(
        &self,
        node: SyntaxNode<'a>,
        pos: TextPos,
        accept: impl Fn(SyntaxKind) -> bool,
    ) -> Result<SyntaxNode<'a>, FinderError> {
        match self.tree.parent(node) {
            Some(parent) if accept(parent.kind()) => Ok(parent),
            parent => {
                let context = parent.map(|p| p.kind());
                tracing::error!(?context, pos, "declaration expression in unexpected context");
                Err(FinderError::UnexpectedDeclarationContext { context, pos })
            }
        }
    }
}
