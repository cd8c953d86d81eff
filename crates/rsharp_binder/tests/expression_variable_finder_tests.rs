//! Expression variable finder integration tests.
//!
//! Trees are built with `NodeFactory`; each test checks which pattern and out
//! variables are reported, and in what order.

mod common;

use common::*;
use rsharp_ast::{Expression, NodeFactory, Pattern, Statement, SyntaxKind, SyntaxNode, SyntaxTree};
use rsharp_binder::{
    find_expression_variables, find_expression_variables_in_list, FinderError, LocalDeclarationKind,
    LocalSymbolFactory,
};
use rsharp_core::{StringInterner, SyntaxArena};

fn expression_of<'a>(stmt: &'a Statement<'a>) -> &'a Expression<'a> {
    match stmt {
        Statement::Expression(es) => es.expression,
        _ => panic!("expected expression statement"),
    }
}

// ============================================================================
// Nothing to find
// ============================================================================

#[test]
fn test_no_declarations_yields_nothing() {
    init_tracing();
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    let condition = f.binary(
        f.name("a"),
        SyntaxKind::PlusToken,
        f.invocation(f.name("b"), vec![f.argument(f.name("c"))]),
    );
    let stmt = f.alloc(f.if_statement(condition, f.block_statement(vec![]), None));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    assert!(find_in(&tree, &interner, tree.root()).unwrap().is_empty());

    let Statement::If(if_stmt) = stmt else {
        panic!("expected if statement");
    };
    let mut factory = LocalSymbolFactory::new(interner.clone());
    let mut out = Vec::new();
    find_expression_variables_in_list(&tree, &mut factory, SCOPE, [if_stmt.condition], &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_absent_root_and_empty_list_are_noops() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());
    let stmt = f.alloc(f.empty_statement());
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let mut factory = LocalSymbolFactory::new(interner.clone());
    let mut out = Vec::new();
    find_expression_variables(&tree, &mut factory, SCOPE, None, None, &mut out).unwrap();
    find_expression_variables_in_list(&tree, &mut factory, SCOPE, Vec::new(), &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(factory.symbol_count(), 0);
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_if_condition_only() {
    init_tracing();
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // if (o is int x) { M(out int y); } else { N(out int z); }
    let stmt = f.alloc(f.if_statement(
        is_int(&f, "o", "x"),
        f.block_statement(vec![f.expression_statement(call_out(&f, "M", "y"))]),
        Some(f.block_statement(vec![f.expression_statement(call_out(&f, "N", "z"))])),
    ));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["x"]);
    assert_eq!(found[0].declaration_kind, LocalDeclarationKind::PatternVariable);
    assert_eq!(found[0].scope, SCOPE);
    assert_eq!(found[0].enclosing_scope, None);
}

#[test]
fn test_loop_lock_and_switch_governing_expressions() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    let while_stmt = f.alloc(f.while_statement(
        is_int(&f, "o", "w"),
        f.expression_statement(call_out(&f, "M", "body")),
    ));
    let do_stmt = f.alloc(f.do_statement(
        f.expression_statement(call_out(&f, "M", "body")),
        call_out(&f, "N", "d"),
    ));
    let lock_stmt = f.alloc(f.lock_statement(
        f.invocation(f.name("L"), vec![f.out_declaration(f.var_type(), "l")]),
        f.expression_statement(call_out(&f, "M", "body")),
    ));
    let section = f.switch_section(
        vec![f.case_pattern_label(f.declaration_pattern(int(&f), f.single_designation("i")), None)],
        vec![f.break_statement()],
    );
    let switch_stmt = f.alloc(f.switch_statement(call_out(&f, "S", "s"), vec![section]));

    for (stmt, expected) in [(while_stmt, "w"), (do_stmt, "d"), (lock_stmt, "l"), (switch_stmt, "s")] {
        let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));
        let found = find_in(&tree, &interner, tree.root()).unwrap();
        assert_eq!(names(&interner, &found), vec![expected], "{:?}", stmt.kind());
    }
}

#[test]
fn test_local_declaration_visits_initializers_only() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // int a = M(out int b), c, d = o is string s;
    let string_pattern = f.declaration_pattern(
        f.predefined_type(SyntaxKind::StringKeyword),
        f.single_designation("s"),
    );
    let stmt = f.alloc(f.local_declaration(
        int(&f),
        vec![
            f.declarator("a", Some(call_out(&f, "M", "b"))),
            f.declarator("c", None),
            f.declarator("d", Some(f.is_pattern(f.name("o"), string_pattern))),
        ],
    ));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["b", "s"]);
    assert_eq!(found[0].declaration_kind, LocalDeclarationKind::OutVariable);
    assert_eq!(found[1].declaration_kind, LocalDeclarationKind::PatternVariable);
}

#[test]
fn test_return_and_expression_statements_are_walked_generically() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // x = (int)M(out int a) + (c ? N(out int b) : o is int d).F;
    let cast = f.cast(int(&f), call_out(&f, "M", "a"));
    let conditional = f.conditional(f.name("c"), call_out(&f, "N", "b"), is_int(&f, "o", "d"));
    let sum = f.binary(cast, SyntaxKind::PlusToken, f.member_access(f.parenthesized(conditional), "F"));
    let stmt = f.alloc(f.expression_statement(f.assignment(f.name("x"), sum)));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));
    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["a", "b", "d"]);

    let ret = f.alloc(f.return_statement(Some(is_int(&f, "o", "r"))));
    let tree = SyntaxTree::new(SyntaxNode::Statement(ret));
    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["r"]);
}

// ============================================================================
// Switch sections
// ============================================================================

#[test]
fn test_case_pattern_then_when_clause() {
    init_tracing();
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // case int i when M(out int j): int k = N(out int l); break;
    let label = f.case_pattern_label(
        f.declaration_pattern(int(&f), f.single_designation("i")),
        Some(call_out(&f, "M", "j")),
    );
    let body = vec![
        f.local_declaration(int(&f), vec![f.declarator("k", Some(call_out(&f, "N", "l")))]),
        f.break_statement(),
    ];
    let section = f.switch_section(vec![label], body);
    let stmt = f.alloc(f.switch_statement(f.name("o"), vec![section]));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));
    let Statement::Switch(switch) = stmt else {
        panic!("expected switch statement");
    };

    let found = find_in(&tree, &interner, SyntaxNode::SwitchSection(&switch.sections[0])).unwrap();
    assert_eq!(names(&interner, &found), vec!["i", "j"]);
    assert_eq!(found[0].declaration_kind, LocalDeclarationKind::PatternVariable);
    assert_eq!(found[1].declaration_kind, LocalDeclarationKind::OutVariable);
    assert!(found[0].range.end < found[1].range.pos);
}

#[test]
fn test_constant_case_labels_are_not_searched() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    let section = f.switch_section(
        vec![f.case_label(call_out(&f, "M", "k")), f.default_label()],
        vec![f.break_statement()],
    );
    let stmt = f.alloc(f.switch_statement(f.name("o"), vec![section]));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));
    let Statement::Switch(switch) = stmt else {
        panic!("expected switch statement");
    };

    let found = find_in(&tree, &interner, SyntaxNode::SwitchSection(&switch.sections[0])).unwrap();
    assert!(found.is_empty());
}

// ============================================================================
// Out variables
// ============================================================================

#[test]
fn test_out_variables_in_invocation() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // M(out int x, out var y);
    let call = f.invocation(
        f.name("M"),
        vec![f.out_declaration(int(&f), "x"), f.out_declaration(f.var_type(), "y")],
    );
    let stmt = f.alloc(f.expression_statement(call));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["x", "y"]);

    let invocation_id = expression_of(stmt).id();
    for symbol in &found {
        assert_eq!(symbol.declaration_kind, LocalDeclarationKind::OutVariable);
        assert_eq!(symbol.scope, SCOPE);
        assert_eq!(symbol.enclosing_scope, Some(ENCLOSING));
        assert_eq!(symbol.declaring_node, Some(invocation_id));
        assert!(symbol.type_syntax.is_some());
    }
    assert!(!found[0].is_implicitly_typed);
    assert!(found[1].is_implicitly_typed);
}

#[test]
fn test_out_variable_in_object_creation() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // new C(out int a) { o is int b };
    let creation = f.object_creation(
        f.type_name("C"),
        Some(vec![f.out_declaration(int(&f), "a")]),
        Some(vec![is_int(&f, "o", "b")]),
    );
    let stmt = f.alloc(f.expression_statement(creation));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["a", "b"]);
    assert_eq!(found[0].declaring_node, Some(expression_of(stmt).id()));
    assert_eq!(found[1].declaring_node, None);
}

#[test]
fn test_constructor_initializer_arguments() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // : base(out int a, o is int b)
    let init = f.alloc(f.constructor_initializer(
        SyntaxKind::BaseConstructorInitializer,
        vec![f.out_declaration(int(&f), "a"), f.argument(is_int(&f, "o", "b"))],
    ));
    let tree = SyntaxTree::new(SyntaxNode::ConstructorInitializer(init));

    let mut factory = LocalSymbolFactory::new(interner.clone());
    let mut out = Vec::new();
    let arguments = init.argument_list.arguments.iter().map(|arg| arg.expression);
    find_expression_variables_in_list(&tree, &mut factory, SCOPE, arguments, &mut out).unwrap();

    assert_eq!(names(&interner, &out), vec!["a", "b"]);
    assert_eq!(out[0].declaring_node, Some(init.data.id));
    assert_eq!(out[0].enclosing_scope, None);

    let this_init = f.alloc(f.constructor_initializer(
        SyntaxKind::ThisConstructorInitializer,
        vec![f.out_declaration(int(&f), "t")],
    ));
    let tree = SyntaxTree::new(SyntaxNode::ConstructorInitializer(this_init));
    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["t"]);
}

#[test]
fn test_out_variable_in_element_access_is_fatal() {
    init_tracing();
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // if (o is int p && a[out int x]) {}
    let access = f.element_access(f.name("a"), vec![f.out_declaration(int(&f), "x")]);
    let condition = f.binary(is_int(&f, "o", "p"), SyntaxKind::AmpersandAmpersandToken, access);
    let stmt = f.alloc(f.if_statement(condition, f.block_statement(vec![]), None));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let Statement::If(if_stmt) = stmt else {
        panic!("expected if statement");
    };
    let Expression::Binary(binary) = if_stmt.condition else {
        panic!("expected binary condition");
    };
    let Expression::ElementAccess(access) = binary.right else {
        panic!("expected element access");
    };
    let decl_pos = access.argument_list.arguments[0].expression.range().pos;

    let mut factory = LocalSymbolFactory::new(interner.clone());
    let mut out = Vec::new();
    let result = find_expression_variables(&tree, &mut factory, SCOPE, None, Some(tree.root()), &mut out);

    assert_eq!(
        result,
        Err(FinderError::UnexpectedDeclarationContext {
            context: Some(SyntaxKind::ElementAccessExpression),
            pos: decl_pos,
        })
    );
    // Variables found before the violation are kept.
    assert_eq!(names(&interner, &out), vec!["p"]);
}

#[test]
fn test_declaration_outside_argument_is_fatal() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    let decl = f.declaration_expression(int(&f), f.single_designation("x"));
    let stmt = f.alloc(f.expression_statement(decl));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));
    let err = find_in(&tree, &interner, tree.root()).unwrap_err();
    assert!(matches!(
        err,
        FinderError::UnexpectedDeclarationContext {
            context: Some(SyntaxKind::ExpressionStatement),
            ..
        }
    ));

    // A detached declaration has no parent at all.
    let detached = f.alloc(f.declaration_expression(int(&f), f.single_designation("y")));
    let tree = SyntaxTree::new(SyntaxNode::Expression(detached));
    let err = find_in(&tree, &interner, tree.root()).unwrap_err();
    assert_eq!(
        err,
        FinderError::UnexpectedDeclarationContext {
            context: None,
            pos: detached.range().pos,
        }
    );
    assert!(err.to_string().contains("unexpected declaration expression context"));
}

#[test]
fn test_discards_are_validated_but_not_reported() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // M(out var _) && o is int _ && o is var _
    let out_discard = f.invocation(
        f.name("M"),
        vec![f.out_argument(f.declaration_expression(f.var_type(), f.discard_designation()))],
    );
    let is_discard = f.is_pattern(f.name("o"), f.declaration_pattern(int(&f), f.discard_designation()));
    let var_discard = f.is_pattern(f.name("o"), f.var_pattern(f.discard_designation()));
    let chain = f.binary(
        f.binary(out_discard, SyntaxKind::AmpersandAmpersandToken, is_discard),
        SyntaxKind::AmpersandAmpersandToken,
        var_discard,
    );
    let stmt = f.alloc(f.expression_statement(chain));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));
    assert!(find_in(&tree, &interner, tree.root()).unwrap().is_empty());

    // a[out var _] is still malformed.
    let access = f.element_access(
        f.name("a"),
        vec![f.out_argument(f.declaration_expression(f.var_type(), f.discard_designation()))],
    );
    let stmt = f.alloc(f.expression_statement(access));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));
    assert!(find_in(&tree, &interner, tree.root()).is_err());
}

// ============================================================================
// Anonymous functions
// ============================================================================

#[test]
fn test_anonymous_function_bodies_are_skipped() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // M(x => N(out int a), (y) => { N(out int b); }, delegate { N(out int c); }, out int d);
    let simple = f.simple_lambda(f.parameter(None, "x"), f.expression_body(call_out(&f, "N", "a")));
    let parenthesized = f.parenthesized_lambda(
        vec![f.parameter(Some(int(&f)), "y")],
        f.block_body(vec![f.expression_statement(call_out(&f, "N", "b"))]),
    );
    let anonymous = f.anonymous_method(None, vec![f.expression_statement(call_out(&f, "N", "c"))]);
    let call = f.invocation(
        f.name("M"),
        vec![
            f.argument(simple),
            f.argument(parenthesized),
            f.argument(anonymous),
            f.out_declaration(int(&f), "d"),
        ],
    );
    let stmt = f.alloc(f.expression_statement(call));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["d"]);
}

// ============================================================================
// Patterns and switch expressions
// ============================================================================

#[test]
fn test_recursive_and_var_patterns() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // o is Point(var x, int y) { Z: var z } p
    let pattern = f.recursive_pattern(
        Some(f.type_name("Point")),
        Some(vec![
            f.subpattern(None, f.var_pattern(f.single_designation("x"))),
            f.subpattern(None, f.declaration_pattern(int(&f), f.single_designation("y"))),
        ]),
        Some(vec![f.subpattern(Some("Z"), f.var_pattern(f.single_designation("z")))]),
        Some(f.single_designation("p")),
    );
    let stmt = f.alloc(f.if_statement(f.is_pattern(f.name("o"), pattern), f.empty_statement(), None));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["x", "y", "z", "p"]);
    assert!(found.iter().all(|s| s.declaration_kind == LocalDeclarationKind::PatternVariable));

    assert_eq!(found[0].type_syntax, None);
    assert!(found[0].is_implicitly_typed);
    assert!(!found[1].is_implicitly_typed);

    let Statement::If(if_stmt) = stmt else {
        panic!("expected if statement");
    };
    let Expression::IsPattern(is_pattern) = if_stmt.condition else {
        panic!("expected is-pattern");
    };
    let Pattern::Recursive(recursive) = is_pattern.pattern else {
        panic!("expected recursive pattern");
    };
    assert_eq!(found[3].type_syntax, recursive.type_syntax.map(|t| t.id()));
}

#[test]
fn test_switch_expression_visits_governing_expression_only() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // M(out int g) switch { int a when N(out int b) => a, _ => 0 };
    let arms = vec![
        f.switch_arm(
            f.declaration_pattern(int(&f), f.single_designation("a")),
            Some(call_out(&f, "N", "b")),
            f.name("a"),
        ),
        f.switch_arm(f.discard_pattern(), None, f.numeric_literal("0")),
    ];
    let switch = f.switch_expression(call_out(&f, "M", "g"), arms);
    let stmt = f.alloc(f.expression_statement(switch));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["g"]);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_sources_joins_and_continuations() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // from a in M(out int s)
    // let l = N(out int t)
    // where o is int w
    // join b in P(out int j) on a equals b
    // select a into g
    // join c in R(out int k) on g equals c
    // select Q(out int u)
    let from = f.from_clause(None, "a", call_out(&f, "M", "s"));
    let clauses = vec![
        f.let_clause("l", call_out(&f, "N", "t")),
        f.where_clause(is_int(&f, "o", "w")),
        f.join_clause("b", call_out(&f, "P", "j"), f.name("a"), f.name("b"), None),
    ];
    let select = f.select_clause(f.name("a"));
    let tail = f.query_body(
        vec![f.join_clause("c", call_out(&f, "R", "k"), f.name("g"), f.name("c"), None)],
        f.select_clause(call_out(&f, "Q", "u")),
        None,
    );
    let continuation = f.query_continuation("g", tail);
    let body = f.query_body(clauses, select, Some(continuation));
    let stmt = f.alloc(f.expression_statement(f.query(from, body)));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["s", "j", "k"]);
}

// ============================================================================
// Entry points
// ============================================================================

#[test]
fn test_list_entry_point_keeps_root_order() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    let block = f.alloc(f.block_statement(vec![
        f.expression_statement(call_out(&f, "M", "a")),
        f.expression_statement(is_int(&f, "o", "b")),
    ]));
    let tree = SyntaxTree::new(SyntaxNode::Statement(block));
    let Statement::Block(block) = block else {
        panic!("expected block");
    };
    let e1 = expression_of(&block.statements[0]);
    let e2 = expression_of(&block.statements[1]);

    let mut factory = LocalSymbolFactory::new(interner.clone());
    let mut out = Vec::new();
    find_expression_variables_in_list(&tree, &mut factory, SCOPE, [e1, e2], &mut out).unwrap();

    assert_eq!(names(&interner, &out), vec!["a", "b"]);
    assert_eq!(out[0].declaration_kind, LocalDeclarationKind::OutVariable);
    assert_eq!(out[1].declaration_kind, LocalDeclarationKind::PatternVariable);
}

#[test]
fn test_repeated_runs_are_identical() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    let condition = f.binary(
        is_int(&f, "o", "x"),
        SyntaxKind::BarBarToken,
        f.invocation(f.name("M"), vec![f.out_declaration(f.var_type(), "y")]),
    );
    let stmt = f.alloc(f.while_statement(condition, f.empty_statement()));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let first = find_in(&tree, &interner, tree.root()).unwrap();
    let second = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

// ============================================================================
// Deep binary chains
// ============================================================================

#[test]
fn test_deep_left_nested_chain_is_visited_in_order() {
    const N: usize = 50_000;
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // o is int x0 && M(out int x1) && o is int x2 && ...
    let leaf = |i: usize| {
        let name = format!("x{i}");
        if i % 2 == 0 {
            is_int(&f, "o", &name)
        } else {
            call_out(&f, "M", &name)
        }
    };
    let mut chain = leaf(0);
    for i in 1..=N {
        chain = f.binary(chain, SyntaxKind::AmpersandAmpersandToken, leaf(i));
    }
    let stmt = f.alloc(f.expression_statement(chain));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(found.len(), N + 1);
    for (i, symbol) in found.iter().enumerate() {
        assert_eq!(interner.resolve(symbol.name), format!("x{i}"));
    }
    assert!(found.windows(2).all(|w| w[0].range.pos < w[1].range.pos));
}

#[test]
fn test_binary_right_operand_chain_keeps_order() {
    let arena = SyntaxArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, interner.clone());

    // o is int a && (o is int b || o is int c) && o is int d
    let inner = f.binary(is_int(&f, "o", "b"), SyntaxKind::BarBarToken, is_int(&f, "o", "c"));
    let chain = f.binary(
        f.binary(is_int(&f, "o", "a"), SyntaxKind::AmpersandAmpersandToken, inner),
        SyntaxKind::AmpersandAmpersandToken,
        is_int(&f, "o", "d"),
    );
    let stmt = f.alloc(f.expression_statement(chain));
    let tree = SyntaxTree::new(SyntaxNode::Statement(stmt));

    let found = find_in(&tree, &interner, tree.root()).unwrap();
    assert_eq!(names(&interner, &found), vec!["a", "b", "c", "d"]);
}
