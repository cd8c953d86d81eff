//! Generated-style accessors for node enums.
//!
//! Every enum over node structs gets `data()`, `kind()` and `range()` so
//! callers never have to match just to read common node data.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;
use rsharp_core::text::TextRange;

macro_rules! common_accessors {
    () => {
        #[inline]
        pub fn kind(&self) -> SyntaxKind {
            self.data().kind
        }

        #[inline]
        pub fn range(&self) -> TextRange {
            self.data().range
        }

        #[inline]
        pub fn id(&self) -> NodeId {
            self.data().id
        }
    };
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Block(n) => &n.data,
            Statement::LocalDeclaration(n) => &n.data,
            Statement::Expression(n) => &n.data,
            Statement::If(n) => &n.data,
            Statement::While(n) => &n.data,
            Statement::Do(n) => &n.data,
            Statement::For(n) => &n.data,
            Statement::ForEach(n) => &n.data,
            Statement::Switch(n) => &n.data,
            Statement::Lock(n) => &n.data,
            Statement::Return(n) => &n.data,
            Statement::Throw(n) => &n.data,
            Statement::Break(d) => d,
            Statement::Continue(d) => d,
            Statement::Empty(d) => d,
        }
    }

    common_accessors!();
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::IdentifierName(n) => &n.data,
            Expression::Literal(n) => &n.data,
            Expression::This(d) => d,
            Expression::Parenthesized(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Assignment(n) => &n.data,
            Expression::PrefixUnary(n) => &n.data,
            Expression::Cast(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::MemberAccess(n) => &n.data,
            Expression::Invocation(n) => &n.data,
            Expression::ElementAccess(n) => &n.data,
            Expression::ObjectCreation(n) => &n.data,
            Expression::Initializer(n) => &n.data,
            Expression::IsPattern(n) => &n.data,
            Expression::Switch(n) => &n.data,
            Expression::Declaration(n) => &n.data,
            Expression::ParenthesizedLambda(n) => &n.data,
            Expression::SimpleLambda(n) => &n.data,
            Expression::AnonymousMethod(n) => &n.data,
            Expression::Query(n) => &n.data,
        }
    }

    common_accessors!();
}

impl<'a> TypeSyntax<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeSyntax::Predefined(n) => &n.data,
            TypeSyntax::Identifier(n) => &n.data,
            TypeSyntax::Generic(n) => &n.data,
            TypeSyntax::Array(n) => &n.data,
            TypeSyntax::Nullable(n) => &n.data,
        }
    }

    common_accessors!();
}

impl<'a> Pattern<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Pattern::Declaration(n) => &n.data,
            Pattern::Constant(n) => &n.data,
            Pattern::Var(n) => &n.data,
            Pattern::Recursive(n) => &n.data,
            Pattern::Discard(d) => d,
        }
    }

    common_accessors!();
}

impl<'a> SwitchLabel<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            SwitchLabel::Case(n) => &n.data,
            SwitchLabel::CasePattern(n) => &n.data,
            SwitchLabel::Default(d) => d,
        }
    }

    common_accessors!();
}

impl<'a> QueryClause<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            QueryClause::From(n) => &n.data,
            QueryClause::Let(n) => &n.data,
            QueryClause::Where(n) => &n.data,
            QueryClause::Join(n) => &n.data,
            QueryClause::OrderBy(n) => &n.data,
        }
    }

    common_accessors!();
}

impl<'a> SelectOrGroupClause<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            SelectOrGroupClause::Select(n) => &n.data,
            SelectOrGroupClause::Group(n) => &n.data,
        }
    }

    common_accessors!();
}

impl<'a> LambdaBody<'a> {
    pub fn range(&self) -> TextRange {
        match self {
            LambdaBody::Block(b) => b.data.range,
            LambdaBody::Expression(e) => e.range(),
        }
    }
}

impl VariableDesignation {
    pub fn range(&self) -> TextRange {
        match self {
            VariableDesignation::Single(id) => id.data.range,
            VariableDesignation::Discard(d) => d.range,
        }
    }
}
