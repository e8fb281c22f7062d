//! Tests for expression parsing: precedence, member chains, arrows,
//! literals, templates and the cover grammar.

use esz_common::{Spanned, diagnostic_codes};

use crate::node::*;
use crate::{ParseError, ParseOptions, parse_module, parse_script};

fn expr(source: &str) -> Expression {
    let output = parse_script(source, ParseOptions::default()).expect("parse failed");
    match output.program.body.first() {
        Some(Statement::Expression(statement)) => statement.expression.clone(),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

fn error(source: &str) -> ParseError {
    parse_script(source, ParseOptions::default()).expect_err("expected a parse error")
}

fn module_error(source: &str) -> ParseError {
    parse_module(source, ParseOptions::default()).expect_err("expected a parse error")
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let Expression::Binary(add) = expr("1 + 2 * 3") else {
        panic!("expected binary expression");
    };
    assert_eq!(add.operator, BinaryOperator::Addition);
    let Expression::Binary(mul) = add.right.as_ref() else {
        panic!("expected multiplication on the right");
    };
    assert_eq!(mul.operator, BinaryOperator::Multiplication);
}

#[test]
fn test_subtraction_is_left_associative() {
    let Expression::Binary(outer) = expr("a - b - c") else {
        panic!("expected binary expression");
    };
    assert!(matches!(outer.left.as_ref(), Expression::Binary(_)));
    assert!(matches!(outer.right.as_ref(), Expression::Identifier(id) if id.name == "c"));
}

#[test]
fn test_exponent_is_right_associative() {
    let Expression::Binary(outer) = expr("2 ** 3 ** 2") else {
        panic!("expected binary expression");
    };
    assert_eq!(outer.operator, BinaryOperator::Exponential);
    assert!(matches!(outer.left.as_ref(), Expression::Literal(_)));
    let Expression::Binary(inner) = outer.right.as_ref() else {
        panic!("expected nested exponent on the right");
    };
    assert_eq!(inner.operator, BinaryOperator::Exponential);
}

#[test]
fn test_unary_before_exponent_is_rejected() {
    assert_eq!(error("-2 ** 2").code, diagnostic_codes::UNARY_BEFORE_EXPONENT);
    let Expression::Binary(binary) = expr("(-2) ** 2") else {
        panic!("expected binary expression");
    };
    assert!(binary.left.is_parenthesized());
}

#[test]
fn test_nullish_cannot_mix_with_logical_or() {
    assert_eq!(error("a ?? b || c").code, diagnostic_codes::MIXED_NULLISH_COALESCING);
    assert_eq!(error("a || b ?? c").code, diagnostic_codes::MIXED_NULLISH_COALESCING);
    let Expression::Logical(logical) = expr("(a ?? b) || c") else {
        panic!("expected logical expression");
    };
    assert_eq!(logical.operator, LogicalOperator::Or);
}

#[test]
fn test_and_binds_tighter_than_or() {
    let Expression::Logical(or) = expr("a && b || c") else {
        panic!("expected logical expression");
    };
    assert_eq!(or.operator, LogicalOperator::Or);
    assert!(matches!(
        or.left.as_ref(),
        Expression::Logical(and) if and.operator == LogicalOperator::And
    ));
}

#[test]
fn test_relational_operators_and_in() {
    let Expression::Binary(binary) = expr("a in b < c") else {
        panic!("expected binary expression");
    };
    // `in` and `<` share a level and associate to the left.
    assert_eq!(binary.operator, BinaryOperator::LessThan);
    assert!(matches!(
        binary.left.as_ref(),
        Expression::Binary(inner) if inner.operator == BinaryOperator::In
    ));
}

#[test]
fn test_conditional_expression() {
    let Expression::Conditional(conditional) = expr("a ? b : c ? d : e") else {
        panic!("expected conditional expression");
    };
    assert!(matches!(conditional.test.as_ref(), Expression::Identifier(_)));
    assert!(matches!(conditional.alternate.as_ref(), Expression::Conditional(_)));
}

#[test]
fn test_assignment_is_right_associative() {
    let Expression::Assignment(outer) = expr("a = b = c") else {
        panic!("expected assignment");
    };
    assert_eq!(outer.operator, AssignmentOperator::Assign);
    assert!(matches!(outer.left.as_ref(), Pattern::Identifier(id) if id.name == "a"));
    assert!(matches!(outer.right.as_ref(), Expression::Assignment(_)));
}

#[test]
fn test_compound_assignment() {
    let Expression::Assignment(assignment) = expr("a.b += 1") else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.operator, AssignmentOperator::Addition);
    assert!(matches!(assignment.left.as_ref(), Pattern::Member(_)));

    let Expression::Assignment(nullish) = expr("a ??= b") else {
        panic!("expected assignment");
    };
    assert_eq!(nullish.operator, AssignmentOperator::LogicalNullish);
}

#[test]
fn test_invalid_assignment_targets() {
    assert_eq!(error("1 = a").code, diagnostic_codes::INVALID_LHS_IN_ASSIGNMENT);
    assert_eq!(error("a + b = c").code, diagnostic_codes::INVALID_LHS_IN_ASSIGNMENT);
    assert_eq!(error("a?.b = 1").code, diagnostic_codes::INVALID_LHS_IN_ASSIGNMENT);
    assert_eq!(error("[a] += 1").code, diagnostic_codes::INVALID_LHS_IN_ASSIGNMENT);
}

#[test]
fn test_update_expressions() {
    let Expression::Update(prefix) = expr("++a") else {
        panic!("expected update expression");
    };
    assert!(prefix.prefix);
    assert_eq!(prefix.operator, UpdateOperator::Increment);

    let Expression::Update(postfix) = expr("a.b--") else {
        panic!("expected update expression");
    };
    assert!(!postfix.prefix);
    assert_eq!(postfix.operator, UpdateOperator::Decrement);

    assert_eq!(error("++a()").code, diagnostic_codes::INVALID_LHS_IN_PREFIX);
    assert_eq!(error("1++").code, diagnostic_codes::INVALID_LHS_IN_POSTFIX);
}

#[test]
fn test_line_break_before_postfix_operator_splits_statements() {
    let output = parse_script("a\n++b", ParseOptions::default()).expect("parse failed");
    assert_eq!(output.program.body.len(), 2);
    let Statement::Expression(second) = &output.program.body[1] else {
        panic!("expected expression statement");
    };
    assert!(matches!(&second.expression, Expression::Update(update) if update.prefix));
}

#[test]
fn test_unary_operators() {
    let Expression::Unary(unary) = expr("typeof void !x") else {
        panic!("expected unary expression");
    };
    assert_eq!(unary.operator, UnaryOperator::Typeof);
    assert!(matches!(
        unary.argument.as_ref(),
        Expression::Unary(inner) if inner.operator == UnaryOperator::Void
    ));
}

#[test]
fn test_strict_delete_of_identifier() {
    assert_eq!(module_error("delete x;").code, diagnostic_codes::STRICT_DELETE);
    assert_eq!(
        error("'use strict'; delete (x);").code,
        diagnostic_codes::STRICT_DELETE
    );
    assert!(matches!(expr("delete x"), Expression::Unary(_)));
}

#[test]
fn test_sequence_expression() {
    let Expression::Sequence(sequence) = expr("a, b, c") else {
        panic!("expected sequence expression");
    };
    assert_eq!(sequence.expressions.len(), 3);
    assert_eq!(sequence.span.start.offset, 0);
    assert_eq!(sequence.span.end.offset, 7);
}

#[test]
fn test_yield_is_an_identifier_in_sloppy_scripts() {
    let Expression::Binary(binary) = expr("yield + 1") else {
        panic!("expected binary expression");
    };
    assert!(matches!(binary.left.as_ref(), Expression::Identifier(id) if id.name == "yield"));
}

// =============================================================================
// Members, calls and new
// =============================================================================

#[test]
fn test_member_and_call_chain() {
    let Expression::Call(call) = expr("a.b[c](d)") else {
        panic!("expected call expression");
    };
    assert_eq!(call.arguments.len(), 1);
    let Expression::Member(computed) = call.callee.as_ref() else {
        panic!("expected member callee");
    };
    assert!(computed.computed);
    assert!(matches!(computed.property, MemberProperty::Computed(_)));
    let Expression::Member(dot) = computed.object.as_ref() else {
        panic!("expected member object");
    };
    assert!(!dot.computed);
    assert!(matches!(&dot.property, MemberProperty::Identifier(id) if id.name == "b"));
}

#[test]
fn test_member_spans() {
    let Expression::Member(outer) = expr("a.b.c") else {
        panic!("expected member expression");
    };
    assert_eq!(outer.span.start.offset, 0);
    assert_eq!(outer.span.end.offset, 5);
    assert_eq!(outer.object.span().end.offset, 3);
    assert_eq!(outer.property.span().start.offset, 4);
}

#[test]
fn test_keywords_are_property_names() {
    let Expression::Member(member) = expr("a.class.if") else {
        panic!("expected member expression");
    };
    assert!(matches!(&member.property, MemberProperty::Identifier(id) if id.name == "if"));
}

#[test]
fn test_optional_chain_is_wrapped() {
    let Expression::Chain(chain) = expr("a?.b.c") else {
        panic!("expected chain expression");
    };
    let Expression::Member(outer) = chain.expression.as_ref() else {
        panic!("expected member in chain");
    };
    assert!(!outer.optional);
    let Expression::Member(inner) = outer.object.as_ref() else {
        panic!("expected optional member");
    };
    assert!(inner.optional);
}

#[test]
fn test_optional_call_and_computed() {
    let Expression::Chain(chain) = expr("a?.(b)?.[c]") else {
        panic!("expected chain expression");
    };
    let Expression::Member(member) = chain.expression.as_ref() else {
        panic!("expected member in chain");
    };
    assert!(member.optional && member.computed);
    assert!(matches!(member.object.as_ref(), Expression::Call(call) if call.optional));
}

#[test]
fn test_optional_chain_errors() {
    assert_eq!(error("new a?.b()").code, diagnostic_codes::OPTIONAL_CHAIN_NEW);
    assert_eq!(error("a?.b`x`").code, diagnostic_codes::OPTIONAL_CHAIN_TEMPLATE);
    assert_eq!(error("a?.`x`").code, diagnostic_codes::OPTIONAL_CHAIN_TEMPLATE);
}

#[test]
fn test_new_expression() {
    let Expression::New(new) = expr("new a.b(c)") else {
        panic!("expected new expression");
    };
    assert!(matches!(new.callee.as_ref(), Expression::Member(_)));
    assert_eq!(new.arguments.len(), 1);

    let Expression::New(bare) = expr("new a") else {
        panic!("expected new expression");
    };
    assert!(bare.arguments.is_empty());
}

#[test]
fn test_new_binds_arguments_before_call() {
    let Expression::Call(call) = expr("new a()()") else {
        panic!("expected call expression");
    };
    assert!(matches!(call.callee.as_ref(), Expression::New(_)));
}

#[test]
fn test_spread_arguments() {
    let Expression::Call(call) = expr("f(a, ...b)") else {
        panic!("expected call expression");
    };
    assert!(matches!(call.arguments[1], Argument::Spread(_)));
}

// =============================================================================
// Arrows and groups
// =============================================================================

#[test]
fn test_arrow_with_expression_body() {
    let Expression::ArrowFunction(arrow) = expr("(a, b) => a + b") else {
        panic!("expected arrow function");
    };
    assert_eq!(arrow.params.len(), 2);
    assert!(arrow.expression);
    assert!(!arrow.is_async);
    assert!(matches!(arrow.body, ArrowBody::Expression(_)));
}

#[test]
fn test_arrow_with_block_body() {
    let Expression::ArrowFunction(arrow) = expr("x => { return x }") else {
        panic!("expected arrow function");
    };
    assert!(!arrow.expression);
    let ArrowBody::Block(block) = &arrow.body else {
        panic!("expected block body");
    };
    assert!(matches!(block.body[0], Statement::Return(_)));
}

#[test]
fn test_async_arrows() {
    let Expression::ArrowFunction(single) = expr("async x => x") else {
        panic!("expected arrow function");
    };
    assert!(single.is_async);

    let Expression::ArrowFunction(group) = expr("async (a) => await a") else {
        panic!("expected arrow function");
    };
    assert!(group.is_async);
    assert!(matches!(&group.body, ArrowBody::Expression(body) if matches!(body.as_ref(), Expression::Await(_))));
}

#[test]
fn test_async_as_arrow_parameter() {
    let Expression::ArrowFunction(arrow) = expr("async => 1") else {
        panic!("expected arrow function");
    };
    assert!(!arrow.is_async);
    assert!(matches!(&arrow.params[0], Pattern::Identifier(id) if id.name == "async"));
    assert_eq!(arrow.span.start.offset, 0);

    let Expression::Assignment(assign) = expr("x = async => async") else {
        panic!("expected assignment");
    };
    let Expression::ArrowFunction(arrow) = assign.right.as_ref() else {
        panic!("expected arrow on the right");
    };
    assert!(matches!(&arrow.body, ArrowBody::Expression(body) if matches!(body.as_ref(), Expression::Identifier(id) if id.name == "async")));

    let Expression::Call(call) = expr("f(async => 1)") else {
        panic!("expected call expression");
    };
    assert!(matches!(&call.arguments[0], Argument::Expression(Expression::ArrowFunction(_))));

    let Expression::Parenthesized(paren) = expr("(async => 1)") else {
        panic!("expected parenthesized expression");
    };
    assert!(matches!(paren.expression.as_ref(), Expression::ArrowFunction(_)));

    assert!(parse_module("export default async => 1;", ParseOptions::default()).is_ok());
    assert!(parse_script("async\n=> 1", ParseOptions::default()).is_err());
}

#[test]
fn test_async_call_is_not_an_arrow() {
    let Expression::Call(call) = expr("async(a, b)") else {
        panic!("expected call expression");
    };
    assert!(matches!(call.callee.as_ref(), Expression::Identifier(id) if id.name == "async"));
    assert_eq!(call.arguments.len(), 2);
}

#[test]
fn test_arrow_parameter_patterns() {
    let Expression::ArrowFunction(arrow) = expr("({a}, [b], c = 1, ...d) => 0") else {
        panic!("expected arrow function");
    };
    assert!(matches!(arrow.params[0], Pattern::Object(_)));
    assert!(matches!(arrow.params[1], Pattern::Array(_)));
    assert!(matches!(arrow.params[2], Pattern::Assignment(_)));
    assert!(matches!(arrow.params[3], Pattern::Rest(_)));
}

#[test]
fn test_arrow_parameter_errors() {
    assert_eq!(error("(a, ...b, c) => 0").code, diagnostic_codes::REST_PARAMETER_NOT_LAST);
    assert_eq!(error("(a, a) => 0").code, diagnostic_codes::DUPLICATE_PARAMETER);
    assert_eq!(error("(a.b) => 0").code, diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
}

#[test]
fn test_parenthesized_sequence_span() {
    let Expression::Parenthesized(paren) = expr("(a, b)") else {
        panic!("expected parenthesized expression");
    };
    assert_eq!(paren.span.start.offset, 0);
    assert_eq!(paren.span.end.offset, 6);
    let Expression::Sequence(sequence) = paren.expression.as_ref() else {
        panic!("expected sequence inside parentheses");
    };
    assert_eq!(sequence.span.start.offset, 1);
    assert_eq!(sequence.span.end.offset, 5);
}

#[test]
fn test_invalid_groups() {
    let empty = error("()");
    assert_eq!(empty.code, diagnostic_codes::UNEXPECTED_TOKEN);
    assert_eq!(empty.description, "Unexpected token )");
    assert_eq!(error("(a,)").code, diagnostic_codes::UNEXPECTED_TOKEN);
    assert_eq!(error("(...a)").code, diagnostic_codes::UNEXPECTED_TOKEN);
}

#[test]
fn test_arrow_ends_the_expression() {
    assert!(parse_script("x => x ? 1 : 2", ParseOptions::default()).is_ok());
    assert!(parse_script("(x => x) + 1", ParseOptions::default()).is_ok());
}

// =============================================================================
// Literals and templates
// =============================================================================

#[test]
fn test_numeric_literals() {
    let Expression::Literal(hex) = expr("0x1F") else {
        panic!("expected literal");
    };
    assert_eq!(hex.value, LiteralValue::Number(31.0));
    assert_eq!(hex.raw, "0x1F");

    let Expression::Literal(separated) = expr("1_000.5") else {
        panic!("expected literal");
    };
    assert_eq!(separated.value, LiteralValue::Number(1000.5));
}

#[test]
fn test_bigint_literal_value() {
    let Expression::Literal(literal) = expr("1_000n") else {
        panic!("expected literal");
    };
    assert_eq!(literal.value, LiteralValue::BigInt("1000".to_string()));
    assert_eq!(literal.raw, "1_000n");
}

#[test]
fn test_string_boolean_null_literals() {
    let Expression::Literal(string) = expr("'a\\nb'") else {
        panic!("expected literal");
    };
    assert_eq!(string.value, LiteralValue::String("a\nb".to_string()));
    assert_eq!(string.raw, "'a\\nb'");

    assert!(matches!(expr("true"), Expression::Literal(l) if l.value == LiteralValue::Boolean(true)));
    assert!(matches!(expr("null"), Expression::Literal(l) if l.value == LiteralValue::Null));
}

#[test]
fn test_strict_octal_literal() {
    assert_eq!(module_error("010;").code, diagnostic_codes::STRICT_OCTAL_LITERAL);
    assert!(parse_script("010;", ParseOptions::default()).is_ok());
}

#[test]
fn test_regex_literal() {
    let Expression::Literal(literal) = expr("/ab+c/gi") else {
        panic!("expected literal");
    };
    assert_eq!(
        literal.value,
        LiteralValue::RegExp {
            pattern: "ab+c".to_string(),
            flags: "gi".to_string(),
        }
    );
    assert_eq!(literal.raw, "/ab+c/gi");
}

#[test]
fn test_regex_after_assignment() {
    let Expression::Assignment(assignment) = expr("x = /=/g") else {
        panic!("expected assignment");
    };
    assert!(matches!(
        assignment.right.as_ref(),
        Expression::Literal(Literal { value: LiteralValue::RegExp { .. }, .. })
    ));
}

#[test]
fn test_division_is_not_a_regex() {
    let Expression::Binary(binary) = expr("a / b / c") else {
        panic!("expected binary expression");
    };
    assert_eq!(binary.operator, BinaryOperator::Division);
}

#[test]
fn test_template_literal() {
    let Expression::Template(template) = expr("`a${b}c${d}e`") else {
        panic!("expected template literal");
    };
    assert_eq!(template.quasis.len(), 3);
    assert_eq!(template.expressions.len(), 2);
    let cooked: Vec<_> = template
        .quasis
        .iter()
        .map(|q| q.value.cooked.as_deref())
        .collect();
    assert_eq!(cooked, vec![Some("a"), Some("c"), Some("e")]);
    assert!(template.quasis[2].tail);
    assert!(!template.quasis[0].tail);
}

#[test]
fn test_template_element_spans_include_delimiters() {
    let Expression::Template(template) = expr("`a${b}c`") else {
        panic!("expected template literal");
    };
    assert_eq!(template.quasis[0].span.start.offset, 0);
    assert_eq!(template.quasis[0].span.end.offset, 4);
    assert_eq!(template.quasis[1].span.start.offset, 5);
    assert_eq!(template.quasis[1].span.end.offset, 8);
}

#[test]
fn test_tagged_template_allows_invalid_escape() {
    let Expression::TaggedTemplate(tagged) = expr("tag`\\unicode`") else {
        panic!("expected tagged template");
    };
    assert!(matches!(tagged.tag.as_ref(), Expression::Identifier(_)));
    let element = &tagged.quasi.quasis[0];
    assert_eq!(element.value.cooked, None);
    assert_eq!(element.value.raw, "\\unicode");
}

#[test]
fn test_untagged_template_rejects_invalid_escape() {
    assert_eq!(error("`\\unicode`").code, diagnostic_codes::INVALID_TEMPLATE_ESCAPE);
}

// =============================================================================
// Array and object literals
// =============================================================================

#[test]
fn test_array_literal_holes_and_spread() {
    let Expression::Array(array) = expr("[a, , ...b]") else {
        panic!("expected array literal");
    };
    assert_eq!(array.elements.len(), 3);
    assert!(array.elements[1].is_none());
    assert!(matches!(array.elements[2], Some(Argument::Spread(_))));
}

#[test]
fn test_object_property_kinds() {
    let Expression::Parenthesized(paren) =
        expr("({ a: 1, b, c() {}, get d() { return 1 }, set d(v) {}, [e]: 2, ...f, async *g() {} })")
    else {
        panic!("expected parenthesized object");
    };
    let Expression::Object(object) = paren.expression.as_ref() else {
        panic!("expected object literal");
    };
    let properties: Vec<&Property> = object
        .properties
        .iter()
        .filter_map(|p| match p {
            ObjectProperty::Property(property) => Some(property),
            ObjectProperty::Spread(_) => None,
        })
        .collect();
    assert_eq!(object.properties.len(), 8);
    assert_eq!(properties.len(), 7);
    assert!(!properties[0].shorthand && !properties[0].method);
    assert!(properties[1].shorthand);
    assert!(properties[2].method);
    assert_eq!(properties[3].kind, PropertyKind::Get);
    assert_eq!(properties[4].kind, PropertyKind::Set);
    assert!(properties[5].computed);
    let Expression::Function(function) = &properties[6].value else {
        panic!("expected method function");
    };
    assert!(function.is_async && function.generator);
}

#[test]
fn test_get_and_set_as_plain_names() {
    let Expression::Parenthesized(paren) = expr("({ get: 1, set() {}, async })") else {
        panic!("expected parenthesized object");
    };
    let Expression::Object(object) = paren.expression.as_ref() else {
        panic!("expected object literal");
    };
    for property in object.properties.iter() {
        let ObjectProperty::Property(property) = property else {
            panic!("expected property");
        };
        assert_eq!(property.kind, PropertyKind::Init);
    }
}

#[test]
fn test_shorthand_initializer_needs_a_pattern() {
    let err = error("({a = 1})");
    assert_eq!(err.code, diagnostic_codes::UNEXPECTED_TOKEN);
    assert_eq!(err.description, "Unexpected token =");

    let Expression::Parenthesized(paren) = expr("({a = 1} = b)") else {
        panic!("expected parenthesized expression");
    };
    let Expression::Assignment(assignment) = paren.expression.as_ref() else {
        panic!("expected assignment");
    };
    assert!(matches!(assignment.left.as_ref(), Pattern::Object(_)));
}

#[test]
fn test_duplicate_proto() {
    assert_eq!(
        error("({ __proto__: a, '__proto__': b })").code,
        diagnostic_codes::DUPLICATE_PROTO
    );
    assert!(parse_script("({ __proto__: a, ['__proto__']: b })", ParseOptions::default()).is_ok());
    assert!(parse_script("({ __proto__: a, __proto__: b } = c)", ParseOptions::default()).is_ok());
}

#[test]
fn test_array_destructuring_assignment() {
    let Expression::Assignment(assignment) = expr("[a, b] = [b, a]") else {
        panic!("expected assignment");
    };
    let Pattern::Array(pattern) = assignment.left.as_ref() else {
        panic!("expected array pattern");
    };
    assert_eq!(pattern.elements.len(), 2);
    assert!(matches!(assignment.right.as_ref(), Expression::Array(_)));
}

// =============================================================================
// Meta properties, super and private names
// =============================================================================

#[test]
fn test_import_meta_requires_module() {
    assert_eq!(error("import.meta").code, diagnostic_codes::IMPORT_META_OUTSIDE_MODULE);
    let output = parse_module("import.meta.url", ParseOptions::default()).expect("parse failed");
    let Statement::Expression(statement) = &output.program.body[0] else {
        panic!("expected expression statement");
    };
    let Expression::Member(member) = &statement.expression else {
        panic!("expected member expression");
    };
    assert!(matches!(member.object.as_ref(), Expression::MetaProperty(meta) if meta.property.name == "meta"));
}

#[test]
fn test_dynamic_import() {
    let Expression::Import(import) = expr("import('a', { with: { type: 'json' } })") else {
        panic!("expected import expression");
    };
    assert!(matches!(import.source.as_ref(), Expression::Literal(_)));
    assert!(import.options.is_some());

    assert_eq!(error("import()").code, diagnostic_codes::IMPORT_CALL_ARITY);
    assert_eq!(error("import(a, b, c)").code, diagnostic_codes::IMPORT_CALL_ARITY);
    assert_eq!(error("new import('a')").code, diagnostic_codes::NEW_WITH_IMPORT);
    assert_eq!(error("import.metal").code, diagnostic_codes::INVALID_META_PROPERTY);
}

#[test]
fn test_new_target() {
    assert_eq!(error("new.target").code, diagnostic_codes::NEW_TARGET_OUTSIDE_FUNCTION);
    assert!(parse_script("function f() { return new.target }", ParseOptions::default()).is_ok());
    // Arrows see the enclosing function's new.target.
    assert!(parse_script("function f() { return () => new.target }", ParseOptions::default()).is_ok());
    assert_eq!(
        error("() => new.target").code,
        diagnostic_codes::NEW_TARGET_OUTSIDE_FUNCTION
    );
}

#[test]
fn test_super_outside_method() {
    assert_eq!(error("super.x").code, diagnostic_codes::UNEXPECTED_SUPER);
    assert_eq!(error("function f() { super.x }").code, diagnostic_codes::UNEXPECTED_SUPER);
    assert!(parse_script("({ m() { return super.x } })", ParseOptions::default()).is_ok());
}

#[test]
fn test_private_in_requires_enclosing_class() {
    assert_eq!(error("#x in o").code, diagnostic_codes::UNDECLARED_PRIVATE_NAME);
    assert!(
        parse_script("class C { #x; m(o) { return #x in o } }", ParseOptions::default()).is_ok()
    );
}

#[test]
fn test_error_position_fields() {
    let err = error("a +\n  ;");
    assert_eq!(err.line_number, 2);
    assert_eq!(err.column, 3);
    assert_eq!(err.index, 6);
    assert!(err.message.starts_with("Line 2: "));
}
