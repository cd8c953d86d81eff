//! Syntax node definitions.
//!
//! Nodes are immutable once built and reference their children through
//! arena-allocated references. Single children are `&'a T`; lists are
//! contiguous arena slices.

use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;
use rsharp_core::intern::InternedString;
use rsharp_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all nodes and tokens.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub id: NodeId,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, range: TextRange, id: NodeId) -> Self {
        Self { kind, range, id }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

/// A keyword or operator token.
#[derive(Debug, Clone)]
pub struct Token {
    pub data: NodeData,
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub data: NodeData,
    pub text: InternedString,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug)]
pub enum TypeSyntax<'a> {
    Predefined(PredefinedType),
    /// A simple name; also carries the contextual `var`.
    Identifier(IdentifierName),
    Generic(GenericName<'a>),
    Array(ArrayType<'a>),
    Nullable(NullableType<'a>),
}

#[derive(Debug)]
pub struct PredefinedType {
    pub data: NodeData,
    pub keyword: Token,
}

/// A simple name, used both as a type and as an expression.
#[derive(Debug)]
pub struct IdentifierName {
    pub data: NodeData,
    pub identifier: Identifier,
}

#[derive(Debug)]
pub struct GenericName<'a> {
    pub data: NodeData,
    pub identifier: Identifier,
    pub type_arguments: NodeList<'a, TypeSyntax<'a>>,
}

#[derive(Debug)]
pub struct ArrayType<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeSyntax<'a>,
    pub rank: u32,
}

#[derive(Debug)]
pub struct NullableType<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeSyntax<'a>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    Block(Block<'a>),
    LocalDeclaration(LocalDeclarationStatement<'a>),
    Expression(ExpressionStatement<'a>),
    If(IfStatement<'a>),
    While(WhileStatement<'a>),
    Do(DoStatement<'a>),
    For(ForStatement<'a>),
    ForEach(ForEachStatement<'a>),
    Switch(SwitchStatement<'a>),
    Lock(LockStatement<'a>),
    Return(ReturnStatement<'a>),
    Throw(ThrowStatement<'a>),
    Break(NodeData),
    Continue(NodeData),
    Empty(NodeData),
}

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct LocalDeclarationStatement<'a> {
    pub data: NodeData,
    pub declaration: VariableDeclaration<'a>,
}

#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    pub type_syntax: &'a TypeSyntax<'a>,
    pub variables: NodeList<'a, VariableDeclarator<'a>>,
}

#[derive(Debug)]
pub struct VariableDeclarator<'a> {
    pub data: NodeData,
    pub identifier: Identifier,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
    pub else_statement: OptionalNode<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub statement: &'a Statement<'a>,
    pub condition: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub declaration: OptionalNode<'a, VariableDeclaration<'a>>,
    pub initializers: NodeList<'a, Expression<'a>>,
    pub condition: OptionalNode<'a, Expression<'a>>,
    pub incrementors: NodeList<'a, Expression<'a>>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ForEachStatement<'a> {
    pub data: NodeData,
    pub type_syntax: &'a TypeSyntax<'a>,
    pub identifier: Identifier,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub sections: NodeList<'a, SwitchSection<'a>>,
}

#[derive(Debug)]
pub struct SwitchSection<'a> {
    pub data: NodeData,
    pub labels: NodeList<'a, SwitchLabel<'a>>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub enum SwitchLabel<'a> {
    Case(CaseSwitchLabel<'a>),
    CasePattern(CasePatternSwitchLabel<'a>),
    Default(NodeData),
}

#[derive(Debug)]
pub struct CaseSwitchLabel<'a> {
    pub data: NodeData,
    pub value: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CasePatternSwitchLabel<'a> {
    pub data: NodeData,
    pub pattern: &'a Pattern<'a>,
    pub when_clause: OptionalNode<'a, WhenClause<'a>>,
}

#[derive(Debug)]
pub struct WhenClause<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct LockStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    IdentifierName(IdentifierName),
    Literal(LiteralExpression),
    This(NodeData),
    Parenthesized(ParenthesizedExpression<'a>),
    Binary(BinaryExpression<'a>),
    Assignment(AssignmentExpression<'a>),
    PrefixUnary(PrefixUnaryExpression<'a>),
    Cast(CastExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    MemberAccess(MemberAccessExpression<'a>),
    Invocation(InvocationExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    ObjectCreation(ObjectCreationExpression<'a>),
    Initializer(InitializerExpression<'a>),
    IsPattern(IsPatternExpression<'a>),
    Switch(SwitchExpression<'a>),
    Declaration(DeclarationExpression<'a>),
    ParenthesizedLambda(ParenthesizedLambdaExpression<'a>),
    SimpleLambda(SimpleLambdaExpression<'a>),
    AnonymousMethod(AnonymousMethodExpression<'a>),
    Query(QueryExpression<'a>),
}

#[derive(Debug)]
pub struct LiteralExpression {
    pub data: NodeData,
    pub token: Token,
}

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// A binary operator application. Chains are left-nested: `a + b + c` is
/// `(a + b) + c`.
#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator_token: Token,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct AssignmentExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator_token: Token,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PrefixUnaryExpression<'a> {
    pub data: NodeData,
    pub operator_token: Token,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CastExpression<'a> {
    pub data: NodeData,
    pub type_syntax: &'a TypeSyntax<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct MemberAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct InvocationExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub argument_list: ArgumentList<'a>,
}

/// Indexer access; its argument list has kind `BracketedArgumentList`.
#[derive(Debug)]
pub struct ElementAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub argument_list: ArgumentList<'a>,
}

#[derive(Debug)]
pub struct ObjectCreationExpression<'a> {
    pub data: NodeData,
    pub type_syntax: &'a TypeSyntax<'a>,
    pub argument_list: OptionalNode<'a, ArgumentList<'a>>,
    /// Always an `Expression::Initializer` when present.
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct InitializerExpression<'a> {
    pub data: NodeData,
    pub expressions: NodeList<'a, Expression<'a>>,
}

/// `expr is pattern`
#[derive(Debug)]
pub struct IsPatternExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub pattern: &'a Pattern<'a>,
}

/// `governing switch { arms }`
#[derive(Debug)]
pub struct SwitchExpression<'a> {
    pub data: NodeData,
    pub governing_expression: &'a Expression<'a>,
    pub arms: NodeList<'a, SwitchExpressionArm<'a>>,
}

#[derive(Debug)]
pub struct SwitchExpressionArm<'a> {
    pub data: NodeData,
    pub pattern: &'a Pattern<'a>,
    pub when_clause: OptionalNode<'a, WhenClause<'a>>,
    pub expression: &'a Expression<'a>,
}

/// A type and name declared in expression position, as in `M(out int x)`.
#[derive(Debug)]
pub struct DeclarationExpression<'a> {
    pub data: NodeData,
    pub type_syntax: &'a TypeSyntax<'a>,
    pub designation: VariableDesignation,
}

#[derive(Debug)]
pub enum VariableDesignation {
    Single(Identifier),
    Discard(NodeData),
}

impl VariableDesignation {
    /// The declared name, or `None` for a discard.
    pub fn name(&self) -> Option<&Identifier> {
        match self {
            VariableDesignation::Single(id) => Some(id),
            VariableDesignation::Discard(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct Parameter<'a> {
    pub data: NodeData,
    pub type_syntax: OptionalNode<'a, TypeSyntax<'a>>,
    pub identifier: Identifier,
}

#[derive(Debug)]
pub enum LambdaBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

/// `(a, b) => body`
#[derive(Debug)]
pub struct ParenthesizedLambdaExpression<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub body: LambdaBody<'a>,
}

/// `a => body`
#[derive(Debug)]
pub struct SimpleLambdaExpression<'a> {
    pub data: NodeData,
    pub parameter: Parameter<'a>,
    pub body: LambdaBody<'a>,
}

/// `delegate (params) { block }`
#[derive(Debug)]
pub struct AnonymousMethodExpression<'a> {
    pub data: NodeData,
    pub parameters: Option<NodeList<'a, Parameter<'a>>>,
    pub block: &'a Block<'a>,
}

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug)]
pub struct Argument<'a> {
    pub data: NodeData,
    /// `out`, `ref` or `in`.
    pub ref_kind_keyword: Option<Token>,
    pub expression: &'a Expression<'a>,
}

/// Parenthesized or bracketed argument list, told apart by `data.kind`.
#[derive(Debug)]
pub struct ArgumentList<'a> {
    pub data: NodeData,
    pub arguments: NodeList<'a, Argument<'a>>,
}

/// `: this(...)` or `: base(...)` on a constructor.
#[derive(Debug)]
pub struct ConstructorInitializer<'a> {
    pub data: NodeData,
    pub argument_list: ArgumentList<'a>,
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug)]
pub enum Pattern<'a> {
    Declaration(DeclarationPattern<'a>),
    Constant(ConstantPattern<'a>),
    Var(VarPattern),
    Recursive(RecursivePattern<'a>),
    Discard(NodeData),
}

/// Type test binding a name: `is int x`.
#[derive(Debug)]
pub struct DeclarationPattern<'a> {
    pub data: NodeData,
    pub type_syntax: &'a TypeSyntax<'a>,
    pub designation: VariableDesignation,
}

#[derive(Debug)]
pub struct ConstantPattern<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct VarPattern {
    pub data: NodeData,
    pub designation: VariableDesignation,
}

/// `Type(positional...) { properties... } name`
#[derive(Debug)]
pub struct RecursivePattern<'a> {
    pub data: NodeData,
    pub type_syntax: OptionalNode<'a, TypeSyntax<'a>>,
    pub positional: Option<NodeList<'a, Subpattern<'a>>>,
    pub properties: Option<NodeList<'a, Subpattern<'a>>>,
    pub designation: Option<VariableDesignation>,
}

#[derive(Debug)]
pub struct Subpattern<'a> {
    pub data: NodeData,
    pub name: Option<Identifier>,
    pub pattern: &'a Pattern<'a>,
}

// ============================================================================
// Query expressions
// ============================================================================

#[derive(Debug)]
pub struct QueryExpression<'a> {
    pub data: NodeData,
    pub from_clause: FromClause<'a>,
    pub body: QueryBody<'a>,
}

#[derive(Debug)]
pub enum QueryClause<'a> {
    From(FromClause<'a>),
    Let(LetClause<'a>),
    Where(WhereClause<'a>),
    Join(JoinClause<'a>),
    OrderBy(OrderByClause<'a>),
}

#[derive(Debug)]
pub struct FromClause<'a> {
    pub data: NodeData,
    pub type_syntax: OptionalNode<'a, TypeSyntax<'a>>,
    pub identifier: Identifier,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct LetClause<'a> {
    pub data: NodeData,
    pub identifier: Identifier,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct WhereClause<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
}

/// `join T x in source on left equals right into g`
#[derive(Debug)]
pub struct JoinClause<'a> {
    pub data: NodeData,
    pub type_syntax: OptionalNode<'a, TypeSyntax<'a>>,
    pub identifier: Identifier,
    pub in_expression: &'a Expression<'a>,
    pub left_expression: &'a Expression<'a>,
    pub right_expression: &'a Expression<'a>,
    pub into: Option<Identifier>,
}

#[derive(Debug)]
pub struct OrderByClause<'a> {
    pub data: NodeData,
    pub orderings: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub enum SelectOrGroupClause<'a> {
    Select(SelectClause<'a>),
    Group(GroupClause<'a>),
}

#[derive(Debug)]
pub struct SelectClause<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct GroupClause<'a> {
    pub data: NodeData,
    pub group_expression: &'a Expression<'a>,
    pub by_expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct QueryBody<'a> {
    pub data: NodeData,
    pub clauses: NodeList<'a, QueryClause<'a>>,
    pub select_or_group: SelectOrGroupClause<'a>,
    pub continuation: OptionalNode<'a, QueryContinuation<'a>>,
}

/// `into name body`
#[derive(Debug)]
pub struct QueryContinuation<'a> {
    pub data: NodeData,
    pub identifier: Identifier,
    pub body: QueryBody<'a>,
}
