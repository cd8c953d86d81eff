//! Programmatic construction of syntax trees.
//!
//! `NodeFactory` builds nodes bottom-up in a `SyntaxArena`. Constructors take
//! child nodes by value and move them into the arena, so a whole statement can
//! be written as one nested expression. Every node and token gets a fresh
//! `NodeId`. Leaves get increasing synthetic positions in construction order,
//! and each composite node spans its children.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;
use rsharp_core::arena::SyntaxArena;
use rsharp_core::intern::StringInterner;
use rsharp_core::text::{TextPos, TextRange};
use std::cell::Cell;

pub struct NodeFactory<'a> {
    arena: &'a SyntaxArena,
    interner: StringInterner,
    next_id: Cell<u32>,
    next_pos: Cell<TextPos>,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a SyntaxArena, interner: StringInterner) -> Self {
        Self {
            arena,
            interner,
            next_id: Cell::new(0),
            next_pos: Cell::new(0),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Move a finished node into the arena.
    #[inline]
    pub fn alloc<T>(&self, node: T) -> &'a T {
        self.arena.alloc(node)
    }

    #[inline]
    fn list<T>(&self, items: Vec<T>) -> NodeList<'a, T> {
        self.arena.alloc_vec(items)
    }

    /// Number of ids handed out so far.
    pub fn node_count(&self) -> u32 {
        self.next_id.get()
    }

    // ========================================================================
    // Ids and positions
    // ========================================================================

    fn data(&self, kind: SyntaxKind, range: TextRange) -> NodeData {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeData::new(kind, range, NodeId(id))
    }

    fn leaf_range(&self, width: u32) -> TextRange {
        let pos = self.next_pos.get();
        // One position of separation between adjacent leaves.
        self.next_pos.set(pos + width + 1);
        TextRange::new(pos, pos + width)
    }

    fn span(&self, ranges: &[TextRange]) -> TextRange {
        ranges
            .iter()
            .copied()
            .reduce(|a, b| a.cover(b))
            .unwrap_or_else(|| TextRange::empty(self.next_pos.get()))
    }

    fn node(&self, kind: SyntaxKind, ranges: &[TextRange]) -> NodeData {
        let range = self.span(ranges);
        self.data(kind, range)
    }

    // ========================================================================
    // Tokens and names
    // ========================================================================

    pub fn token(&self, kind: SyntaxKind) -> Token {
        let width = kind.token_text().map_or(1, |t| t.len() as u32);
        let range = self.leaf_range(width);
        Token {
            data: self.data(kind, range),
        }
    }

    pub fn identifier(&self, text: &str) -> Identifier {
        let range = self.leaf_range(text.len() as u32);
        Identifier {
            data: self.data(SyntaxKind::IdentifierToken, range),
            text: self.interner.intern(text),
        }
    }

    fn identifier_name(&self, text: &str) -> IdentifierName {
        let identifier = self.identifier(text);
        IdentifierName {
            data: self.node(SyntaxKind::IdentifierName, &[identifier.data.range]),
            identifier,
        }
    }

    pub fn single_designation(&self, name: &str) -> VariableDesignation {
        VariableDesignation::Single(self.identifier(name))
    }

    pub fn discard_designation(&self) -> VariableDesignation {
        let range = self.leaf_range(1);
        VariableDesignation::Discard(self.data(SyntaxKind::DiscardDesignation, range))
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn predefined_type(&self, keyword: SyntaxKind) -> TypeSyntax<'a> {
        let keyword = self.token(keyword);
        TypeSyntax::Predefined(PredefinedType {
            data: self.node(SyntaxKind::PredefinedType, &[keyword.data.range]),
            keyword,
        })
    }

    pub fn type_name(&self, name: &str) -> TypeSyntax<'a> {
        TypeSyntax::Identifier(self.identifier_name(name))
    }

    /// The contextual `var` type.
    pub fn var_type(&self) -> TypeSyntax<'a> {
        self.type_name("var")
    }

    pub fn generic_type(&self, name: &str, type_arguments: Vec<TypeSyntax<'a>>) -> TypeSyntax<'a> {
        let identifier = self.identifier(name);
        let mut ranges = vec![identifier.data.range];
        ranges.extend(type_arguments.iter().map(TypeSyntax::range));
        TypeSyntax::Generic(GenericName {
            data: self.node(SyntaxKind::GenericName, &ranges),
            identifier,
            type_arguments: self.list(type_arguments),
        })
    }

    pub fn array_type(&self, element_type: TypeSyntax<'a>, rank: u32) -> TypeSyntax<'a> {
        TypeSyntax::Array(ArrayType {
            data: self.node(SyntaxKind::ArrayType, &[element_type.range()]),
            element_type: self.alloc(element_type),
            rank,
        })
    }

    pub fn nullable_type(&self, element_type: TypeSyntax<'a>) -> TypeSyntax<'a> {
        TypeSyntax::Nullable(NullableType {
            data: self.node(SyntaxKind::NullableType, &[element_type.range()]),
            element_type: self.alloc(element_type),
        })
    }

    // ========================================================================
    // Simple expressions
    // ========================================================================

    pub fn name(&self, text: &str) -> Expression<'a> {
        Expression::IdentifierName(self.identifier_name(text))
    }

    fn literal(&self, kind: SyntaxKind, token: Token) -> Expression<'a> {
        Expression::Literal(LiteralExpression {
            data: self.node(kind, &[token.data.range]),
            token,
        })
    }

    pub fn numeric_literal(&self, text: &str) -> Expression<'a> {
        let range = self.leaf_range(text.len() as u32);
        let token = Token {
            data: self.data(SyntaxKind::NumericLiteralToken, range),
        };
        self.literal(SyntaxKind::NumericLiteralExpression, token)
    }

    pub fn string_literal(&self, text: &str) -> Expression<'a> {
        let range = self.leaf_range(text.len() as u32 + 2);
        let token = Token {
            data: self.data(SyntaxKind::StringLiteralToken, range),
        };
        self.literal(SyntaxKind::StringLiteralExpression, token)
    }

    pub fn bool_literal(&self, value: bool) -> Expression<'a> {
        if value {
            let token = self.token(SyntaxKind::TrueKeyword);
            self.literal(SyntaxKind::TrueLiteralExpression, token)
        } else {
            let token = self.token(SyntaxKind::FalseKeyword);
            self.literal(SyntaxKind::FalseLiteralExpression, token)
        }
    }

    pub fn null_literal(&self) -> Expression<'a> {
        let token = self.token(SyntaxKind::NullKeyword);
        self.literal(SyntaxKind::NullLiteralExpression, token)
    }

    pub fn this_expression(&self) -> Expression<'a> {
        let token = self.token(SyntaxKind::ThisKeyword);
        Expression::This(self.node(SyntaxKind::ThisExpression, &[token.data.range]))
    }

    pub fn parenthesized(&self, expression: Expression<'a>) -> Expression<'a> {
        Expression::Parenthesized(ParenthesizedExpression {
            data: self.node(SyntaxKind::ParenthesizedExpression, &[expression.range()]),
            expression: self.alloc(expression),
        })
    }

    pub fn binary(&self, left: Expression<'a>, operator: SyntaxKind, right: Expression<'a>) -> Expression<'a> {
        let operator_token = self.token(operator);
        Expression::Binary(BinaryExpression {
            data: self.node(SyntaxKind::BinaryExpression, &[left.range(), right.range(), operator_token.data.range]),
            left: self.alloc(left),
            operator_token,
            right: self.alloc(right),
        })
    }

    pub fn assignment(&self, left: Expression<'a>, right: Expression<'a>) -> Expression<'a> {
        let operator_token = self.token(SyntaxKind::EqualsToken);
        Expression::Assignment(AssignmentExpression {
            data: self.node(SyntaxKind::AssignmentExpression, &[left.range(), right.range(), operator_token.data.range]),
            left: self.alloc(left),
            operator_token,
            right: self.alloc(right),
        })
    }

    pub fn prefix_unary(&self, operator: SyntaxKind, operand: Expression<'a>) -> Expression<'a> {
        let operator_token = self.token(operator);
        Expression::PrefixUnary(PrefixUnaryExpression {
            data: self.node(SyntaxKind::PrefixUnaryExpression, &[operator_token.data.range, operand.range()]),
            operator_token,
            operand: self.alloc(operand),
        })
    }

    pub fn cast(&self, type_syntax: TypeSyntax<'a>, expression: Expression<'a>) -> Expression<'a> {
        Expression::Cast(CastExpression {
            data: self.node(SyntaxKind::CastExpression, &[type_syntax.range(), expression.range()]),
            type_syntax: self.alloc(type_syntax),
            expression: self.alloc(expression),
        })
    }

    pub fn conditional(
        &self,
        condition: Expression<'a>,
        when_true: Expression<'a>,
        when_false: Expression<'a>,
    ) -> Expression<'a> {
        Expression::Conditional(ConditionalExpression {
            data: self.node(
                SyntaxKind::ConditionalExpression,
                &[condition.range(), when_true.range(), when_false.range()],
            ),
            condition: self.alloc(condition),
            when_true: self.alloc(when_true),
            when_false: self.alloc(when_false),
        })
    }

    pub fn member_access(&self, expression: Expression<'a>, name: &str) -> Expression<'a> {
        let name = self.identifier(name);
        Expression::MemberAccess(MemberAccessExpression {
            data: self.node(SyntaxKind::SimpleMemberAccessExpression, &[expression.range(), name.data.range]),
            expression: self.alloc(expression),
            name,
        })
    }

    // ========================================================================
    // Calls and arguments
    // ========================================================================

    pub fn argument(&self, expression: Expression<'a>) -> Argument<'a> {
        Argument {
            data: self.node(SyntaxKind::Argument, &[expression.range()]),
            ref_kind_keyword: None,
            expression: self.alloc(expression),
        }
    }

    /// An argument passed with `out`, `ref` or `in`.
    pub fn ref_kind_argument(&self, keyword: SyntaxKind, expression: Expression<'a>) -> Argument<'a> {
        let keyword = self.token(keyword);
        Argument {
            data: self.node(SyntaxKind::Argument, &[keyword.data.range, expression.range()]),
            ref_kind_keyword: Some(keyword),
            expression: self.alloc(expression),
        }
    }

    pub fn out_argument(&self, expression: Expression<'a>) -> Argument<'a> {
        self.ref_kind_argument(SyntaxKind::OutKeyword, expression)
    }

    fn argument_list(&self, kind: SyntaxKind, arguments: Vec<Argument<'a>>) -> ArgumentList<'a> {
        let ranges: Vec<TextRange> = arguments.iter().map(|a| a.data.range).collect();
        ArgumentList {
            data: self.node(kind, &ranges),
            arguments: self.list(arguments),
        }
    }

    pub fn invocation(&self, expression: Expression<'a>, arguments: Vec<Argument<'a>>) -> Expression<'a> {
        let argument_list = self.argument_list(SyntaxKind::ArgumentList, arguments);
        Expression::Invocation(InvocationExpression {
            data: self.node(SyntaxKind::InvocationExpression, &[expression.range(), argument_list.data.range]),
            expression: self.alloc(expression),
            argument_list,
        })
    }

    pub fn element_access(&self, expression: Expression<'a>, arguments: Vec<Argument<'a>>) -> Expression<'a> {
        let argument_list = self.argument_list(SyntaxKind::BracketedArgumentList, arguments);
        Expression::ElementAccess(ElementAccessExpression {
            data: self.node(SyntaxKind::ElementAccessExpression, &[expression.range(), argument_list.data.range]),
            expression: self.alloc(expression),
            argument_list,
        })
    }

    pub fn object_creation(
        &self,
        type_syntax: TypeSyntax<'a>,
        arguments: Option<Vec<Argument<'a>>>,
        initializer: Option<Vec<Expression<'a>>>,
    ) -> Expression<'a> {
        let argument_list = arguments.map(|args| self.argument_list(SyntaxKind::ArgumentList, args));
        let initializer = initializer.map(|exprs| self.initializer(exprs));
        let mut ranges = vec![type_syntax.range()];
        ranges.extend(argument_list.as_ref().map(|l| l.data.range));
        ranges.extend(initializer.as_ref().map(Expression::range));
        Expression::ObjectCreation(ObjectCreationExpression {
            data: self.node(SyntaxKind::ObjectCreationExpression, &ranges),
            type_syntax: self.alloc(type_syntax),
            argument_list: argument_list.map(|l| self.alloc(l)),
            initializer: initializer.map(|i| self.alloc(i)),
        })
    }

    pub fn initializer(&self, expressions: Vec<Expression<'a>>) -> Expression<'a> {
        let ranges: Vec<TextRange> = expressions.iter().map(Expression::range).collect();
        Expression::Initializer(InitializerExpression {
            data: self.node(SyntaxKind::InitializerExpression, &ranges),
            expressions: self.list(expressions),
        })
    }

    /// `: this(...)` when `kind` is `ThisConstructorInitializer`, `: base(...)`
    /// when it is `BaseConstructorInitializer`.
    pub fn constructor_initializer(&self, kind: SyntaxKind, arguments: Vec<Argument<'a>>) -> ConstructorInitializer<'a> {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ThisConstructorInitializer | SyntaxKind::BaseConstructorInitializer
        ));
        let argument_list = self.argument_list(SyntaxKind::ArgumentList, arguments);
        ConstructorInitializer {
            data: self.node(kind, &[argument_list.data.range]),
            argument_list,
        }
    }

    /// `type name` in expression position.
    pub fn declaration_expression(&self, type_syntax: TypeSyntax<'a>, designation: VariableDesignation) -> Expression<'a> {
        Expression::Declaration(DeclarationExpression {
            data: self.node(SyntaxKind::DeclarationExpression, &[type_syntax.range(), designation.range()]),
            type_syntax: self.alloc(type_syntax),
            designation,
        })
    }

    /// `out type name` as a call argument.
    pub fn out_declaration(&self, type_syntax: TypeSyntax<'a>, name: &str) -> Argument<'a> {
        let designation = self.single_designation(name);
        let declaration = self.declaration_expression(type_syntax, designation);
        self.out_argument(declaration)
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    pub fn is_pattern(&self, expression: Expression<'a>, pattern: Pattern<'a>) -> Expression<'a> {
        Expression::IsPattern(IsPatternExpression {
            data: self.node(SyntaxKind::IsPatternExpression, &[expression.range(), pattern.range()]),
            expression: self.alloc(expression),
            pattern: self.alloc(pattern),
        })
    }

    pub fn declaration_pattern(&self, type_syntax: TypeSyntax<'a>, designation: VariableDesignation) -> Pattern<'a> {
        Pattern::Declaration(DeclarationPattern {
            data: self.node(SyntaxKind::DeclarationPattern, &[type_syntax.range(), designation.range()]),
            type_syntax: self.alloc(type_syntax),
            designation,
        })
    }

    pub fn constant_pattern(&self, expression: Expression<'a>) -> Pattern<'a> {
        Pattern::Constant(ConstantPattern {
            data: self.node(SyntaxKind::ConstantPattern, &[expression.range()]),
            expression: self.alloc(expression),
        })
    }

    pub fn var_pattern(&self, designation: VariableDesignation) -> Pattern<'a> {
        Pattern::Var(VarPattern {
            data: self.node(SyntaxKind::VarPattern, &[designation.range()]),
            designation,
        })
    }

    pub fn discard_pattern(&self) -> Pattern<'a> {
        let range = self.leaf_range(1);
        Pattern::Discard(self.data(SyntaxKind::DiscardPattern, range))
    }

    pub fn subpattern(&self, name: Option<&str>, pattern: Pattern<'a>) -> Subpattern<'a> {
        let name = name.map(|n| self.identifier(n));
        let mut ranges = vec![pattern.range()];
        ranges.extend(name.as_ref().map(|n| n.data.range));
        Subpattern {
            data: self.node(SyntaxKind::Subpattern, &ranges),
            name,
            pattern: self.alloc(pattern),
        }
    }

    pub fn recursive_pattern(
        &self,
        type_syntax: Option<TypeSyntax<'a>>,
        positional: Option<Vec<Subpattern<'a>>>,
        properties: Option<Vec<Subpattern<'a>>>,
        designation: Option<VariableDesignation>,
    ) -> Pattern<'a> {
        let mut ranges = Vec::new();
        ranges.extend(type_syntax.as_ref().map(TypeSyntax::range));
        for subs in positional.iter().chain(properties.iter()) {
            ranges.extend(subs.iter().map(|s| s.data.range));
        }
        ranges.extend(designation.as_ref().map(VariableDesignation::range));
        Pattern::Recursive(RecursivePattern {
            data: self.node(SyntaxKind::RecursivePattern, &ranges),
            type_syntax: type_syntax.map(|t| self.alloc(t)),
            positional: positional.map(|p| self.list(p)),
            properties: properties.map(|p| self.list(p)),
            designation,
        })
    }

    pub fn when_clause(&self, condition: Expression<'a>) -> WhenClause<'a> {
        WhenClause {
            data: self.node(SyntaxKind::WhenClause, &[condition.range()]),
            condition: self.alloc(condition),
        }
    }

    pub fn switch_expression(&self, governing: Expression<'a>, arms: Vec<SwitchExpressionArm<'a>>) -> Expression<'a> {
        let mut ranges = vec![governing.range()];
        ranges.extend(arms.iter().map(|a| a.data.range));
        Expression::Switch(SwitchExpression {
            data: self.node(SyntaxKind::SwitchExpression, &ranges),
            governing_expression: self.alloc(governing),
            arms: self.list(arms),
        })
    }

    pub fn switch_arm(
        &self,
        pattern: Pattern<'a>,
        when: Option<Expression<'a>>,
        expression: Expression<'a>,
    ) -> SwitchExpressionArm<'a> {
        let when_clause = when.map(|c| self.when_clause(c));
        let mut ranges = vec![pattern.range(), expression.range()];
        ranges.extend(when_clause.as_ref().map(|w| w.data.range));
        SwitchExpressionArm {
            data: self.node(SyntaxKind::SwitchExpressionArm, &ranges),
            pattern: self.alloc(pattern),
            when_clause: when_clause.map(|w| self.alloc(w)),
            expression: self.alloc(expression),
        }
    }

    // ========================================================================
    // Anonymous functions
    // ========================================================================

    pub fn parameter(&self, type_syntax: Option<TypeSyntax<'a>>, name: &str) -> Parameter<'a> {
        let identifier = self.identifier(name);
        let mut ranges = vec![identifier.data.range];
        ranges.extend(type_syntax.as_ref().map(TypeSyntax::range));
        Parameter {
            data: self.node(SyntaxKind::Parameter, &ranges),
            type_syntax: type_syntax.map(|t| self.alloc(t)),
            identifier,
        }
    }

    pub fn block_body(&self, statements: Vec<Statement<'a>>) -> LambdaBody<'a> {
        LambdaBody::Block(self.alloc(self.block(statements)))
    }

    pub fn expression_body(&self, expression: Expression<'a>) -> LambdaBody<'a> {
        LambdaBody::Expression(self.alloc(expression))
    }

    pub fn parenthesized_lambda(&self, parameters: Vec<Parameter<'a>>, body: LambdaBody<'a>) -> Expression<'a> {
        let mut ranges: Vec<TextRange> = parameters.iter().map(|p| p.data.range).collect();
        ranges.push(body.range());
        Expression::ParenthesizedLambda(ParenthesizedLambdaExpression {
            data: self.node(SyntaxKind::ParenthesizedLambdaExpression, &ranges),
            parameters: self.list(parameters),
            body,
        })
    }

    pub fn simple_lambda(&self, parameter: Parameter<'a>, body: LambdaBody<'a>) -> Expression<'a> {
        Expression::SimpleLambda(SimpleLambdaExpression {
            data: self.node(SyntaxKind::SimpleLambdaExpression, &[parameter.data.range, body.range()]),
            parameter,
            body,
        })
    }

    pub fn anonymous_method(
        &self,
        parameters: Option<Vec<Parameter<'a>>>,
        statements: Vec<Statement<'a>>,
    ) -> Expression<'a> {
        let block = self.block(statements);
        let mut ranges: Vec<TextRange> = parameters.iter().flatten().map(|p| p.data.range).collect();
        ranges.push(block.data.range);
        Expression::AnonymousMethod(AnonymousMethodExpression {
            data: self.node(SyntaxKind::AnonymousMethodExpression, &ranges),
            parameters: parameters.map(|p| self.list(p)),
            block: self.alloc(block),
        })
    }

    // ========================================================================
    // Query expressions
    // ========================================================================

    pub fn from_clause(&self, type_syntax: Option<TypeSyntax<'a>>, name: &str, expression: Expression<'a>) -> FromClause<'a> {
        let identifier = self.identifier(name);
        let mut ranges = vec![identifier.data.range, expression.range()];
        ranges.extend(type_syntax.as_ref().map(TypeSyntax::range));
        FromClause {
            data: self.node(SyntaxKind::FromClause, &ranges),
            type_syntax: type_syntax.map(|t| self.alloc(t)),
            identifier,
            expression: self.alloc(expression),
        }
    }

    pub fn let_clause(&self, name: &str, expression: Expression<'a>) -> QueryClause<'a> {
        let identifier = self.identifier(name);
        QueryClause::Let(LetClause {
            data: self.node(SyntaxKind::LetClause, &[identifier.data.range, expression.range()]),
            identifier,
            expression: self.alloc(expression),
        })
    }

    pub fn where_clause(&self, condition: Expression<'a>) -> QueryClause<'a> {
        QueryClause::Where(WhereClause {
            data: self.node(SyntaxKind::WhereClause, &[condition.range()]),
            condition: self.alloc(condition),
        })
    }

    pub fn join_clause(
        &self,
        name: &str,
        in_expression: Expression<'a>,
        left_expression: Expression<'a>,
        right_expression: Expression<'a>,
        into: Option<&str>,
    ) -> QueryClause<'a> {
        let identifier = self.identifier(name);
        let into = into.map(|n| self.identifier(n));
        let mut ranges = vec![
            identifier.data.range,
            in_expression.range(),
            left_expression.range(),
            right_expression.range(),
        ];
        ranges.extend(into.as_ref().map(|i| i.data.range));
        QueryClause::Join(JoinClause {
            data: self.node(SyntaxKind::JoinClause, &ranges),
            type_syntax: None,
            identifier,
            in_expression: self.alloc(in_expression),
            left_expression: self.alloc(left_expression),
            right_expression: self.alloc(right_expression),
            into,
        })
    }

    pub fn order_by_clause(&self, orderings: Vec<Expression<'a>>) -> QueryClause<'a> {
        let ranges: Vec<TextRange> = orderings.iter().map(Expression::range).collect();
        QueryClause::OrderBy(OrderByClause {
            data: self.node(SyntaxKind::OrderByClause, &ranges),
            orderings: self.list(orderings),
        })
    }

    pub fn select_clause(&self, expression: Expression<'a>) -> SelectOrGroupClause<'a> {
        SelectOrGroupClause::Select(SelectClause {
            data: self.node(SyntaxKind::SelectClause, &[expression.range()]),
            expression: self.alloc(expression),
        })
    }

    pub fn group_clause(&self, group: Expression<'a>, by: Expression<'a>) -> SelectOrGroupClause<'a> {
        SelectOrGroupClause::Group(GroupClause {
            data: self.node(SyntaxKind::GroupClause, &[group.range(), by.range()]),
            group_expression: self.alloc(group),
            by_expression: self.alloc(by),
        })
    }

    pub fn query_body(
        &self,
        clauses: Vec<QueryClause<'a>>,
        select_or_group: SelectOrGroupClause<'a>,
        continuation: Option<QueryContinuation<'a>>,
    ) -> QueryBody<'a> {
        let mut ranges: Vec<TextRange> = clauses.iter().map(QueryClause::range).collect();
        ranges.push(select_or_group.range());
        ranges.extend(continuation.as_ref().map(|c| c.data.range));
        QueryBody {
            data: self.node(SyntaxKind::QueryBody, &ranges),
            clauses: self.list(clauses),
            select_or_group,
            continuation: continuation.map(|c| self.alloc(c)),
        }
    }

    pub fn query_continuation(&self, name: &str, body: QueryBody<'a>) -> QueryContinuation<'a> {
        let identifier = self.identifier(name);
        QueryContinuation {
            data: self.node(SyntaxKind::QueryContinuation, &[identifier.data.range, body.data.range]),
            identifier,
            body,
        }
    }

    pub fn query(&self, from_clause: FromClause<'a>, body: QueryBody<'a>) -> Expression<'a> {
        Expression::Query(QueryExpression {
            data: self.node(SyntaxKind::QueryExpression, &[from_clause.data.range, body.data.range]),
            from_clause,
            body,
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&self, statements: Vec<Statement<'a>>) -> Block<'a> {
        let ranges: Vec<TextRange> = statements.iter().map(Statement::range).collect();
        Block {
            data: self.node(SyntaxKind::Block, &ranges),
            statements: self.list(statements),
        }
    }

    pub fn block_statement(&self, statements: Vec<Statement<'a>>) -> Statement<'a> {
        Statement::Block(self.block(statements))
    }

    pub fn declarator(&self, name: &str, initializer: Option<Expression<'a>>) -> VariableDeclarator<'a> {
        let identifier = self.identifier(name);
        let mut ranges = vec![identifier.data.range];
        ranges.extend(initializer.as_ref().map(Expression::range));
        VariableDeclarator {
            data: self.node(SyntaxKind::VariableDeclarator, &ranges),
            identifier,
            initializer: initializer.map(|e| self.alloc(e)),
        }
    }

    pub fn variable_declaration(
        &self,
        type_syntax: TypeSyntax<'a>,
        variables: Vec<VariableDeclarator<'a>>,
    ) -> VariableDeclaration<'a> {
        let mut ranges = vec![type_syntax.range()];
        ranges.extend(variables.iter().map(|v| v.data.range));
        VariableDeclaration {
            data: self.node(SyntaxKind::VariableDeclaration, &ranges),
            type_syntax: self.alloc(type_syntax),
            variables: self.list(variables),
        }
    }

    pub fn local_declaration(&self, type_syntax: TypeSyntax<'a>, variables: Vec<VariableDeclarator<'a>>) -> Statement<'a> {
        let declaration = self.variable_declaration(type_syntax, variables);
        Statement::LocalDeclaration(LocalDeclarationStatement {
            data: self.node(SyntaxKind::LocalDeclarationStatement, &[declaration.data.range]),
            declaration,
        })
    }

    pub fn expression_statement(&self, expression: Expression<'a>) -> Statement<'a> {
        Statement::Expression(ExpressionStatement {
            data: self.node(SyntaxKind::ExpressionStatement, &[expression.range()]),
            expression: self.alloc(expression),
        })
    }

    pub fn if_statement(
        &self,
        condition: Expression<'a>,
        statement: Statement<'a>,
        else_statement: Option<Statement<'a>>,
    ) -> Statement<'a> {
        let mut ranges = vec![condition.range(), statement.range()];
        ranges.extend(else_statement.as_ref().map(Statement::range));
        Statement::If(IfStatement {
            data: self.node(SyntaxKind::IfStatement, &ranges),
            condition: self.alloc(condition),
            statement: self.alloc(statement),
            else_statement: else_statement.map(|s| self.alloc(s)),
        })
    }

    pub fn while_statement(&self, condition: Expression<'a>, statement: Statement<'a>) -> Statement<'a> {
        Statement::While(WhileStatement {
            data: self.node(SyntaxKind::WhileStatement, &[condition.range(), statement.range()]),
            condition: self.alloc(condition),
            statement: self.alloc(statement),
        })
    }

    pub fn do_statement(&self, statement: Statement<'a>, condition: Expression<'a>) -> Statement<'a> {
        Statement::Do(DoStatement {
            data: self.node(SyntaxKind::DoStatement, &[statement.range(), condition.range()]),
            statement: self.alloc(statement),
            condition: self.alloc(condition),
        })
    }

    pub fn for_statement(
        &self,
        declaration: Option<VariableDeclaration<'a>>,
        initializers: Vec<Expression<'a>>,
        condition: Option<Expression<'a>>,
        incrementors: Vec<Expression<'a>>,
        statement: Statement<'a>,
    ) -> Statement<'a> {
        let mut ranges: Vec<TextRange> = declaration.iter().map(|d| d.data.range).collect();
        ranges.extend(initializers.iter().map(Expression::range));
        ranges.extend(condition.as_ref().map(Expression::range));
        ranges.extend(incrementors.iter().map(Expression::range));
        ranges.push(statement.range());
        Statement::For(ForStatement {
            data: self.node(SyntaxKind::ForStatement, &ranges),
            declaration: declaration.map(|d| self.alloc(d)),
            initializers: self.list(initializers),
            condition: condition.map(|c| self.alloc(c)),
            incrementors: self.list(incrementors),
            statement: self.alloc(statement),
        })
    }

    pub fn foreach_statement(
        &self,
        type_syntax: TypeSyntax<'a>,
        name: &str,
        expression: Expression<'a>,
        statement: Statement<'a>,
    ) -> Statement<'a> {
        let identifier = self.identifier(name);
        Statement::ForEach(ForEachStatement {
            data: self.node(
                SyntaxKind::ForEachStatement,
                &[type_syntax.range(), identifier.data.range, expression.range(), statement.range()],
            ),
            type_syntax: self.alloc(type_syntax),
            identifier,
            expression: self.alloc(expression),
            statement: self.alloc(statement),
        })
    }

    pub fn case_label(&self, value: Expression<'a>) -> SwitchLabel<'a> {
        SwitchLabel::Case(CaseSwitchLabel {
            data: self.node(SyntaxKind::CaseSwitchLabel, &[value.range()]),
            value: self.alloc(value),
        })
    }

    pub fn case_pattern_label(&self, pattern: Pattern<'a>, when: Option<Expression<'a>>) -> SwitchLabel<'a> {
        let when_clause = when.map(|c| self.when_clause(c));
        let mut ranges = vec![pattern.range()];
        ranges.extend(when_clause.as_ref().map(|w| w.data.range));
        SwitchLabel::CasePattern(CasePatternSwitchLabel {
            data: self.node(SyntaxKind::CasePatternSwitchLabel, &ranges),
            pattern: self.alloc(pattern),
            when_clause: when_clause.map(|w| self.alloc(w)),
        })
    }

    pub fn default_label(&self) -> SwitchLabel<'a> {
        let range = self.leaf_range("default".len() as u32);
        SwitchLabel::Default(self.data(SyntaxKind::DefaultSwitchLabel, range))
    }

    pub fn switch_section(&self, labels: Vec<SwitchLabel<'a>>, statements: Vec<Statement<'a>>) -> SwitchSection<'a> {
        let mut ranges: Vec<TextRange> = labels.iter().map(SwitchLabel::range).collect();
        ranges.extend(statements.iter().map(Statement::range));
        SwitchSection {
            data: self.node(SyntaxKind::SwitchSection, &ranges),
            labels: self.list(labels),
            statements: self.list(statements),
        }
    }

    pub fn switch_statement(&self, expression: Expression<'a>, sections: Vec<SwitchSection<'a>>) -> Statement<'a> {
        let mut ranges = vec![expression.range()];
        ranges.extend(sections.iter().map(|s| s.data.range));
        Statement::Switch(SwitchStatement {
            data: self.node(SyntaxKind::SwitchStatement, &ranges),
            expression: self.alloc(expression),
            sections: self.list(sections),
        })
    }

    pub fn lock_statement(&self, expression: Expression<'a>, statement: Statement<'a>) -> Statement<'a> {
        Statement::Lock(LockStatement {
            data: self.node(SyntaxKind::LockStatement, &[expression.range(), statement.range()]),
            expression: self.alloc(expression),
            statement: self.alloc(statement),
        })
    }

    pub fn return_statement(&self, expression: Option<Expression<'a>>) -> Statement<'a> {
        let ranges: Vec<TextRange> = expression.iter().map(Expression::range).collect();
        Statement::Return(ReturnStatement {
            data: self.node(SyntaxKind::ReturnStatement, &ranges),
            expression: expression.map(|e| self.alloc(e)),
        })
    }

    pub fn throw_statement(&self, expression: Option<Expression<'a>>) -> Statement<'a> {
        let ranges: Vec<TextRange> = expression.iter().map(Expression::range).collect();
        Statement::Throw(ThrowStatement {
            data: self.node(SyntaxKind::ThrowStatement, &ranges),
            expression: expression.map(|e| self.alloc(e)),
        })
    }

    pub fn break_statement(&self) -> Statement<'a> {
        let range = self.leaf_range("break".len() as u32);
        Statement::Break(self.data(SyntaxKind::BreakStatement, range))
    }

    pub fn continue_statement(&self) -> Statement<'a> {
        let range = self.leaf_range("continue".len() as u32);
        Statement::Continue(self.data(SyntaxKind::ContinueStatement, range))
    }

    pub fn empty_statement(&self) -> Statement<'a> {
        let range = self.leaf_range(1);
        Statement::Empty(self.data(SyntaxKind::EmptyStatement, range))
    }
}
