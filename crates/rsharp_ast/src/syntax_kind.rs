//! SyntaxKind enum - every token and node kind in the rsharp syntax tree.

/// The kind of a syntax token or node.
///
/// Kinds are grouped into contiguous ranges so that category checks are a
/// pair of integer comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown = 0,
    IdentifierToken = 1,
    NumericLiteralToken = 2,
    StringLiteralToken = 3,

    // Punctuation and operators
    PlusToken = 10,
    MinusToken = 11,
    AsteriskToken = 12,
    SlashToken = 13,
    PercentToken = 14,
    AmpersandAmpersandToken = 15,
    BarBarToken = 16,
    EqualsEqualsToken = 17,
    ExclamationEqualsToken = 18,
    LessThanToken = 19,
    GreaterThanToken = 20,
    QuestionQuestionToken = 21,
    ExclamationToken = 22,
    EqualsToken = 23,
    PlusEqualsToken = 24,
    MinusEqualsToken = 25,

    // Keywords
    BoolKeyword = 40,
    IntKeyword = 41,
    LongKeyword = 42,
    StringKeyword = 43,
    ObjectKeyword = 44,
    OutKeyword = 45,
    RefKeyword = 46,
    InKeyword = 47,
    TrueKeyword = 48,
    FalseKeyword = 49,
    NullKeyword = 50,
    ThisKeyword = 51,

    // ========================================================================
    // Names and types
    // ========================================================================
    IdentifierName = 100,
    GenericName = 101,
    PredefinedType = 102,
    ArrayType = 103,
    NullableType = 104,

    // ========================================================================
    // Expressions
    // ========================================================================
    ThisExpression = 120,
    NumericLiteralExpression = 121,
    StringLiteralExpression = 122,
    TrueLiteralExpression = 123,
    FalseLiteralExpression = 124,
    NullLiteralExpression = 125,
    ParenthesizedExpression = 126,
    BinaryExpression = 127,
    AssignmentExpression = 128,
    PrefixUnaryExpression = 129,
    CastExpression = 130,
    ConditionalExpression = 131,
    SimpleMemberAccessExpression = 132,
    InvocationExpression = 133,
    ElementAccessExpression = 134,
    ObjectCreationExpression = 135,
    InitializerExpression = 136,
    IsPatternExpression = 137,
    SwitchExpression = 138,
    SwitchExpressionArm = 139,
    DeclarationExpression = 140,
    ParenthesizedLambdaExpression = 141,
    SimpleLambdaExpression = 142,
    AnonymousMethodExpression = 143,
    QueryExpression = 144,

    // ========================================================================
    // Arguments and parameters
    // ========================================================================
    Argument = 160,
    ArgumentList = 161,
    BracketedArgumentList = 162,
    ThisConstructorInitializer = 163,
    BaseConstructorInitializer = 164,
    Parameter = 165,

    // ========================================================================
    // Designations and patterns
    // ========================================================================
    SingleVariableDesignation = 180,
    DiscardDesignation = 181,
    DeclarationPattern = 182,
    ConstantPattern = 183,
    VarPattern = 184,
    RecursivePattern = 185,
    DiscardPattern = 186,
    Subpattern = 187,

    // ========================================================================
    // Statements
    // ========================================================================
    Block = 200,
    LocalDeclarationStatement = 201,
    ExpressionStatement = 202,
    IfStatement = 203,
    WhileStatement = 204,
    DoStatement = 205,
    ForStatement = 206,
    ForEachStatement = 207,
    SwitchStatement = 208,
    LockStatement = 209,
    ReturnStatement = 210,
    ThrowStatement = 211,
    BreakStatement = 212,
    ContinueStatement = 213,
    EmptyStatement = 214,

    // Statement parts
    VariableDeclaration = 230,
    VariableDeclarator = 231,
    SwitchSection = 232,
    CaseSwitchLabel = 233,
    CasePatternSwitchLabel = 234,
    DefaultSwitchLabel = 235,
    WhenClause = 236,

    // ========================================================================
    // Query expressions
    // ========================================================================
    FromClause = 250,
    LetClause = 251,
    WhereClause = 252,
    JoinClause = 253,
    OrderByClause = 254,
    SelectClause = 255,
    GroupClause = 256,
    QueryBody = 257,
    QueryContinuation = 258,
}

impl SyntaxKind {
    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind represents a punctuation or operator token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.in_range(SyntaxKind::PlusToken, SyntaxKind::MinusEqualsToken)
    }

    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(SyntaxKind::BoolKeyword, SyntaxKind::ThisKeyword)
    }

    /// Whether this kind is a token rather than a node.
    #[inline]
    pub fn is_token(self) -> bool {
        self.in_range(SyntaxKind::Unknown, SyntaxKind::ThisKeyword)
    }

    #[inline]
    pub fn is_statement(self) -> bool {
        self.in_range(SyntaxKind::Block, SyntaxKind::EmptyStatement)
    }

    #[inline]
    pub fn is_pattern(self) -> bool {
        self.in_range(SyntaxKind::DeclarationPattern, SyntaxKind::DiscardPattern)
    }

    #[inline]
    pub fn is_query_clause(self) -> bool {
        self.in_range(SyntaxKind::FromClause, SyntaxKind::OrderByClause)
    }

    /// Fixed source text of a punctuation or keyword token.
    pub fn token_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::QuestionQuestionToken => "??",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::BoolKeyword => "bool",
            SyntaxKind::IntKeyword => "int",
            SyntaxKind::LongKeyword => "long",
            SyntaxKind::StringKeyword => "string",
            SyntaxKind::ObjectKeyword => "object",
            SyntaxKind::OutKeyword => "out",
            SyntaxKind::RefKeyword => "ref",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::ThisKeyword => "this",
            _ => return None,
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(SyntaxKind::PlusToken.is_punctuation());
        assert!(SyntaxKind::OutKeyword.is_keyword());
        assert!(SyntaxKind::OutKeyword.is_token());
        assert!(!SyntaxKind::Argument.is_token());
        assert!(SyntaxKind::LockStatement.is_statement());
        assert!(!SyntaxKind::SwitchSection.is_statement());
        assert!(SyntaxKind::RecursivePattern.is_pattern());
        assert!(!SyntaxKind::Subpattern.is_pattern());
        assert!(SyntaxKind::JoinClause.is_query_clause());
        assert!(!SyntaxKind::SelectClause.is_query_clause());
    }

    #[test]
    fn test_token_text() {
        assert_eq!(SyntaxKind::AmpersandAmpersandToken.token_text(), Some("&&"));
        assert_eq!(SyntaxKind::OutKeyword.token_text(), Some("out"));
        assert_eq!(SyntaxKind::IdentifierToken.token_text(), None);
        assert_eq!(SyntaxKind::InvocationExpression.token_text(), None);
    }
}
