//! Uniform references to syntax nodes.
//!
//! `SyntaxNode` lets walkers treat every node category alike: read its kind,
//! range and id, and enumerate its children in source order. Tokens and
//! identifiers are leaves of their owning node and are never yielded as
//! children.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;
use rsharp_core::text::TextRange;
use smallvec::SmallVec;

/// Children of one node, in source order.
pub type Children<'a> = SmallVec<[SyntaxNode<'a>; 4]>;

#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    Statement(&'a Statement<'a>),
    Block(&'a Block<'a>),
    VariableDeclaration(&'a VariableDeclaration<'a>),
    VariableDeclarator(&'a VariableDeclarator<'a>),
    SwitchSection(&'a SwitchSection<'a>),
    SwitchLabel(&'a SwitchLabel<'a>),
    WhenClause(&'a WhenClause<'a>),
    Expression(&'a Expression<'a>),
    SwitchExpressionArm(&'a SwitchExpressionArm<'a>),
    Parameter(&'a Parameter<'a>),
    Argument(&'a Argument<'a>),
    ArgumentList(&'a ArgumentList<'a>),
    ConstructorInitializer(&'a ConstructorInitializer<'a>),
    Type(&'a TypeSyntax<'a>),
    Pattern(&'a Pattern<'a>),
    Subpattern(&'a Subpattern<'a>),
    FromClause(&'a FromClause<'a>),
    QueryClause(&'a QueryClause<'a>),
    SelectOrGroupClause(&'a SelectOrGroupClause<'a>),
    QueryBody(&'a QueryBody<'a>),
    QueryContinuation(&'a QueryContinuation<'a>),
}

impl<'a> SyntaxNode<'a> {
    pub fn data(self) -> &'a NodeData {
        match self {
            SyntaxNode::Statement(n) => n.data(),
            SyntaxNode::Block(n) => &n.data,
            SyntaxNode::VariableDeclaration(n) => &n.data,
            SyntaxNode::VariableDeclarator(n) => &n.data,
            SyntaxNode::SwitchSection(n) => &n.data,
            SyntaxNode::SwitchLabel(n) => n.data(),
            SyntaxNode::WhenClause(n) => &n.data,
            SyntaxNode::Expression(n) => n.data(),
            SyntaxNode::SwitchExpressionArm(n) => &n.data,
            SyntaxNode::Parameter(n) => &n.data,
            SyntaxNode::Argument(n) => &n.data,
            SyntaxNode::ArgumentList(n) => &n.data,
            SyntaxNode::ConstructorInitializer(n) => &n.data,
            SyntaxNode::Type(n) => n.data(),
            SyntaxNode::Pattern(n) => n.data(),
            SyntaxNode::Subpattern(n) => &n.data,
            SyntaxNode::FromClause(n) => &n.data,
            SyntaxNode::QueryClause(n) => n.data(),
            SyntaxNode::SelectOrGroupClause(n) => n.data(),
            SyntaxNode::QueryBody(n) => &n.data,
            SyntaxNode::QueryContinuation(n) => &n.data,
        }
    }

    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    #[inline]
    pub fn range(self) -> TextRange {
        self.data().range
    }

    #[inline]
    pub fn id(self) -> NodeId {
        self.data().id
    }

    /// The direct child nodes, in source order.
    pub fn children(self) -> Children<'a> {
        let mut out = Children::new();
        match self {
            SyntaxNode::Statement(stmt) => statement_children(stmt, &mut out),
            SyntaxNode::Block(block) => push_statements(block.statements, &mut out),
            SyntaxNode::VariableDeclaration(decl) => {
                out.push(SyntaxNode::Type(decl.type_syntax));
                out.extend(decl.variables.iter().map(SyntaxNode::VariableDeclarator));
            }
            SyntaxNode::VariableDeclarator(d) => push_opt_expr(d.initializer, &mut out),
            SyntaxNode::SwitchSection(section) => {
                out.extend(section.labels.iter().map(SyntaxNode::SwitchLabel));
                push_statements(section.statements, &mut out);
            }
            SyntaxNode::SwitchLabel(label) => match label {
                SwitchLabel::Case(c) => out.push(SyntaxNode::Expression(c.value)),
                SwitchLabel::CasePattern(c) => {
                    out.push(SyntaxNode::Pattern(c.pattern));
                    if let Some(when) = c.when_clause {
                        out.push(SyntaxNode::WhenClause(when));
                    }
                }
                SwitchLabel::Default(_) => {}
            },
            SyntaxNode::WhenClause(when) => out.push(SyntaxNode::Expression(when.condition)),
            SyntaxNode::Expression(expr) => expression_children(expr, &mut out),
            SyntaxNode::SwitchExpressionArm(arm) => {
                out.push(SyntaxNode::Pattern(arm.pattern));
                if let Some(when) = arm.when_clause {
                    out.push(SyntaxNode::WhenClause(when));
                }
                out.push(SyntaxNode::Expression(arm.expression));
            }
            SyntaxNode::Parameter(p) => {
                if let Some(ty) = p.type_syntax {
                    out.push(SyntaxNode::Type(ty));
                }
            }
            SyntaxNode::Argument(arg) => out.push(SyntaxNode::Expression(arg.expression)),
            SyntaxNode::ArgumentList(list) => {
                out.extend(list.arguments.iter().map(SyntaxNode::Argument));
            }
            SyntaxNode::ConstructorInitializer(init) => {
                out.push(SyntaxNode::ArgumentList(&init.argument_list));
            }
            SyntaxNode::Type(ty) => match ty {
                TypeSyntax::Predefined(_) | TypeSyntax::Identifier(_) => {}
                TypeSyntax::Generic(g) => out.extend(g.type_arguments.iter().map(SyntaxNode::Type)),
                TypeSyntax::Array(a) => out.push(SyntaxNode::Type(a.element_type)),
                TypeSyntax::Nullable(n) => out.push(SyntaxNode::Type(n.element_type)),
            },
            SyntaxNode::Pattern(pattern) => pattern_children(pattern, &mut out),
            SyntaxNode::Subpattern(sub) => out.push(SyntaxNode::Pattern(sub.pattern)),
            SyntaxNode::FromClause(from) => from_clause_children(from, &mut out),
            SyntaxNode::QueryClause(clause) => match clause {
                QueryClause::From(from) => from_clause_children(from, &mut out),
                QueryClause::Let(l) => out.push(SyntaxNode::Expression(l.expression)),
                QueryClause::Where(w) => out.push(SyntaxNode::Expression(w.condition)),
                QueryClause::Join(j) => {
                    if let Some(ty) = j.type_syntax {
                        out.push(SyntaxNode::Type(ty));
                    }
                    out.push(SyntaxNode::Expression(j.in_expression));
                    out.push(SyntaxNode::Expression(j.left_expression));
                    out.push(SyntaxNode::Expression(j.right_expression));
                }
                QueryClause::OrderBy(o) => push_expressions(o.orderings, &mut out),
            },
            SyntaxNode::SelectOrGroupClause(clause) => match clause {
                SelectOrGroupClause::Select(s) => out.push(SyntaxNode::Expression(s.expression)),
                SelectOrGroupClause::Group(g) => {
                    out.push(SyntaxNode::Expression(g.group_expression));
                    out.push(SyntaxNode::Expression(g.by_expression));
                }
            },
            SyntaxNode::QueryBody(body) => {
                out.extend(body.clauses.iter().map(SyntaxNode::QueryClause));
                out.push(SyntaxNode::SelectOrGroupClause(&body.select_or_group));
                if let Some(cont) = body.continuation {
                    out.push(SyntaxNode::QueryContinuation(cont));
                }
            }
            SyntaxNode::QueryContinuation(cont) => out.push(SyntaxNode::QueryBody(&cont.body)),
        }
        out
    }
}

fn push_statements<'a>(statements: &'a [Statement<'a>], out: &mut Children<'a>) {
    out.extend(statements.iter().map(SyntaxNode::Statement));
}

fn push_expressions<'a>(expressions: &'a [Expression<'a>], out: &mut Children<'a>) {
    out.extend(expressions.iter().map(SyntaxNode::Expression));
}

fn push_opt_expr<'a>(expr: Option<&'a Expression<'a>>, out: &mut Children<'a>) {
    if let Some(e) = expr {
        out.push(SyntaxNode::Expression(e));
    }
}

fn statement_children<'a>(stmt: &'a Statement<'a>, out: &mut Children<'a>) {
    match stmt {
        Statement::Block(b) => push_statements(b.statements, out),
        Statement::LocalDeclaration(n) => {
            out.push(SyntaxNode::VariableDeclaration(&n.declaration));
        }
        Statement::Expression(n) => out.push(SyntaxNode::Expression(n.expression)),
        Statement::If(n) => {
            out.push(SyntaxNode::Expression(n.condition));
            out.push(SyntaxNode::Statement(n.statement));
            if let Some(else_stmt) = n.else_statement {
                out.push(SyntaxNode::Statement(else_stmt));
            }
        }
        Statement::While(n) => {
            out.push(SyntaxNode::Expression(n.condition));
            out.push(SyntaxNode::Statement(n.statement));
        }
        Statement::Do(n) => {
            out.push(SyntaxNode::Statement(n.statement));
            out.push(SyntaxNode::Expression(n.condition));
        }
        Statement::For(n) => {
            if let Some(decl) = n.declaration {
                out.push(SyntaxNode::VariableDeclaration(decl));
            }
            push_expressions(n.initializers, out);
            push_opt_expr(n.condition, out);
            push_expressions(n.incrementors, out);
            out.push(SyntaxNode::Statement(n.statement));
        }
        Statement::ForEach(n) => {
            out.push(SyntaxNode::Type(n.type_syntax));
            out.push(SyntaxNode::Expression(n.expression));
            out.push(SyntaxNode::Statement(n.statement));
        }
        Statement::Switch(n) => {
            out.push(SyntaxNode::Expression(n.expression));
            out.extend(n.sections.iter().map(SyntaxNode::SwitchSection));
        }
        Statement::Lock(n) => {
            out.push(SyntaxNode::Expression(n.expression));
            out.push(SyntaxNode::Statement(n.statement));
        }
        Statement::Return(n) => push_opt_expr(n.expression, out),
        Statement::Throw(n) => push_opt_expr(n.expression, out),
        Statement::Break(_) | Statement::Continue(_) | Statement::Empty(_) => {}
    }
}

fn expression_children<'a>(expr: &'a Expression<'a>, out: &mut Children<'a>) {
    match expr {
        Expression::IdentifierName(_) | Expression::Literal(_) | Expression::This(_) => {}
        Expression::Parenthesized(n) => out.push(SyntaxNode::Expression(n.expression)),
        Expression::Binary(n) => {
            out.push(SyntaxNode::Expression(n.left));
            out.push(SyntaxNode::Expression(n.right));
        }
        Expression::Assignment(n) => {
            out.push(SyntaxNode::Expression(n.left));
            out.push(SyntaxNode::Expression(n.right));
        }
        Expression::PrefixUnary(n) => out.push(SyntaxNode::Expression(n.operand)),
        Expression::Cast(n) => {
            out.push(SyntaxNode::Type(n.type_syntax));
            out.push(SyntaxNode::Expression(n.expression));
        }
        Expression::Conditional(n) => {
            out.push(SyntaxNode::Expression(n.condition));
            out.push(SyntaxNode::Expression(n.when_true));
            out.push(SyntaxNode::Expression(n.when_false));
        }
        Expression::MemberAccess(n) => out.push(SyntaxNode::Expression(n.expression)),
        Expression::Invocation(n) => {
            out.push(SyntaxNode::Expression(n.expression));
            out.push(SyntaxNode::ArgumentList(&n.argument_list));
        }
        Expression::ElementAccess(n) => {
            out.push(SyntaxNode::Expression(n.expression));
            out.push(SyntaxNode::ArgumentList(&n.argument_list));
        }
        Expression::ObjectCreation(n) => {
            out.push(SyntaxNode::Type(n.type_syntax));
            if let Some(args) = n.argument_list {
                out.push(SyntaxNode::ArgumentList(args));
            }
            push_opt_expr(n.initializer, out);
        }
        Expression::Initializer(n) => push_expressions(n.expressions, out),
        Expression::IsPattern(n) => {
            out.push(SyntaxNode::Expression(n.expression));
            out.push(SyntaxNode::Pattern(n.pattern));
        }
        Expression::Switch(n) => {
            out.push(SyntaxNode::Expression(n.governing_expression));
            out.extend(n.arms.iter().map(SyntaxNode::SwitchExpressionArm));
        }
        Expression::Declaration(n) => out.push(SyntaxNode::Type(n.type_syntax)),
        Expression::ParenthesizedLambda(n) => {
            out.extend(n.parameters.iter().map(SyntaxNode::Parameter));
            push_lambda_body(&n.body, out);
        }
        Expression::SimpleLambda(n) => {
            out.push(SyntaxNode::Parameter(&n.parameter));
            push_lambda_body(&n.body, out);
        }
        Expression::AnonymousMethod(n) => {
            if let Some(params) = n.parameters {
                out.extend(params.iter().map(SyntaxNode::Parameter));
            }
            out.push(SyntaxNode::Block(n.block));
        }
        Expression::Query(n) => {
            out.push(SyntaxNode::FromClause(&n.from_clause));
            out.push(SyntaxNode::QueryBody(&n.body));
        }
    }
}

fn push_lambda_body<'a>(body: &LambdaBody<'a>, out: &mut Children<'a>) {
    match *body {
        LambdaBody::Block(b) => out.push(SyntaxNode::Block(b)),
        LambdaBody::Expression(e) => out.push(SyntaxNode::Expression(e)),
    }
}

fn pattern_children<'a>(pattern: &'a Pattern<'a>, out: &mut Children<'a>) {
    match pattern {
        Pattern::Declaration(p) => out.push(SyntaxNode::Type(p.type_syntax)),
        Pattern::Constant(p) => out.push(SyntaxNode::Expression(p.expression)),
        Pattern::Recursive(p) => {
            if let Some(ty) = p.type_syntax {
                out.push(SyntaxNode::Type(ty));
            }
            if let Some(positional) = p.positional {
                out.extend(positional.iter().map(SyntaxNode::Subpattern));
            }
            if let Some(properties) = p.properties {
                out.extend(properties.iter().map(SyntaxNode::Subpattern));
            }
        }
        Pattern::Var(_) | Pattern::Discard(_) => {}
    }
}

fn from_clause_children<'a>(from: &'a FromClause<'a>, out: &mut Children<'a>) {
    if let Some(ty) = from.type_syntax {
        out.push(SyntaxNode::Type(ty));
    }
    out.push(SyntaxNode::Expression(from.expression));
}
