//! Tests for binding patterns, destructuring assignment and parameters.

use esz_common::diagnostic_codes;

use crate::node::*;
use crate::{ParseOptions, parse_module, parse_script};

fn code(source: &str) -> u32 {
    parse_script(source, ParseOptions::default())
        .expect_err("expected a parse error")
        .code
}

fn ok(source: &str) {
    if let Err(err) = parse_script(source, ParseOptions::default()) {
        panic!("{source:?} failed: {err}");
    }
}

fn declarator_pattern(source: &str) -> Pattern {
    let output = parse_script(source, ParseOptions::default()).expect("parse failed");
    match output.program.body.first() {
        Some(Statement::VariableDeclaration(declaration)) => {
            declaration.declarations[0].id.clone()
        }
        other => panic!("expected variable declaration, got {other:?}"),
    }
}

fn assignment_target(source: &str) -> Pattern {
    let output = parse_script(source, ParseOptions::default()).expect("parse failed");
    let Some(Statement::Expression(statement)) = output.program.body.first() else {
        panic!("expected expression statement");
    };
    match statement.expression.without_parentheses() {
        Expression::Assignment(assignment) => assignment.left.as_ref().clone(),
        other => panic!("expected assignment, got {other:?}"),
    }
}

// =============================================================================
// Binding patterns
// =============================================================================

#[test]
fn test_object_binding_pattern() {
    let Pattern::Object(object) = declarator_pattern("let {a, b: [c, d = 1], ...rest} = obj;")
    else {
        panic!("expected object pattern");
    };
    assert_eq!(object.properties.len(), 3);
    let ObjectPatternProperty::Property(a) = &object.properties[0] else {
        panic!("expected property");
    };
    assert!(a.shorthand);
    let ObjectPatternProperty::Property(b) = &object.properties[1] else {
        panic!("expected property");
    };
    let Pattern::Array(array) = &b.value else {
        panic!("expected nested array pattern");
    };
    assert!(matches!(array.elements[1], Some(Pattern::Assignment(_))));
    assert!(matches!(object.properties[2], ObjectPatternProperty::Rest(_)));
}

#[test]
fn test_array_binding_pattern_with_hole_and_rest() {
    let Pattern::Array(array) = declarator_pattern("let [a, , ...b] = c;") else {
        panic!("expected array pattern");
    };
    assert_eq!(array.elements.len(), 3);
    assert!(array.elements[1].is_none());
    assert!(matches!(array.elements[2], Some(Pattern::Rest(_))));
    assert_eq!(array.span.start.offset, 4);
    assert_eq!(array.span.end.offset, 15);
}

#[test]
fn test_shorthand_default_in_binding() {
    let Pattern::Object(object) = declarator_pattern("const {a = 1} = b;") else {
        panic!("expected object pattern");
    };
    let ObjectPatternProperty::Property(property) = &object.properties[0] else {
        panic!("expected property");
    };
    assert!(property.shorthand);
    assert!(matches!(property.value, Pattern::Assignment(_)));
}

#[test]
fn test_binding_rest_must_be_last() {
    assert_eq!(code("let [...a, b] = c;"), diagnostic_codes::REST_ELEMENT_NOT_LAST);
    assert_eq!(code("let {...a, b} = c;"), diagnostic_codes::REST_ELEMENT_NOT_LAST);
}

#[test]
fn test_duplicate_names_in_one_pattern() {
    assert_eq!(code("let {a, b: a} = c;"), diagnostic_codes::DUPLICATE_BINDING);
    ok("var [a, a] = c;");
}

// =============================================================================
// Destructuring assignment
// =============================================================================

#[test]
fn test_object_assignment_pattern_with_members() {
    let Pattern::Object(object) = assignment_target("({a: b.c, ...d.e} = f)") else {
        panic!("expected object pattern");
    };
    let ObjectPatternProperty::Property(property) = &object.properties[0] else {
        panic!("expected property");
    };
    assert!(matches!(property.value, Pattern::Member(_)));
    let ObjectPatternProperty::Rest(rest) = &object.properties[1] else {
        panic!("expected rest");
    };
    assert!(matches!(rest.argument.as_ref(), Pattern::Member(_)));
}

#[test]
fn test_parenthesized_simple_targets() {
    let Pattern::Array(array) = assignment_target("[(a), (b.c)] = d") else {
        panic!("expected array pattern");
    };
    assert!(matches!(array.elements[0], Some(Pattern::Identifier(_))));
    assert!(matches!(array.elements[1], Some(Pattern::Member(_))));
    ok("({a: (b)} = c)");
}

#[test]
fn test_nested_shorthand_defaults_become_patterns() {
    let Pattern::Array(array) = assignment_target("[{a = 1}, [b = 2] = []] = c") else {
        panic!("expected array pattern");
    };
    let Some(Pattern::Object(object)) = &array.elements[0] else {
        panic!("expected object pattern");
    };
    let ObjectPatternProperty::Property(property) = &object.properties[0] else {
        panic!("expected property");
    };
    assert!(matches!(property.value, Pattern::Assignment(_)));
    assert!(matches!(array.elements[1], Some(Pattern::Assignment(_))));
}

#[test]
fn test_invalid_destructuring_targets() {
    assert_eq!(code("[a + 1] = b"), diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
    assert_eq!(code("({a() {}} = b)"), diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
    assert_eq!(code("({get a() {}} = b)"), diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
    assert_eq!(code("[...a = 1] = b"), diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
    assert_eq!(code("[(a = 1)] = b"), diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
}

#[test]
fn test_assignment_rest_must_be_last() {
    assert_eq!(code("[a, ...b, c] = d"), diagnostic_codes::REST_ELEMENT_NOT_LAST);
    assert_eq!(code("[...a,] = b"), diagnostic_codes::REST_ELEMENT_NOT_LAST);
    assert_eq!(code("({...a, b} = c)"), diagnostic_codes::REST_ELEMENT_NOT_LAST);
    // The same shapes are fine as plain literals.
    ok("[a, ...b, c]; [...a,];");
}

#[test]
fn test_strict_assignment_to_eval() {
    let err = parse_module("[eval] = a;", ParseOptions::default())
        .expect_err("expected a parse error");
    assert_eq!(err.code, diagnostic_codes::STRICT_EVAL_ARGUMENTS);
    let err = parse_module("arguments = 1;", ParseOptions::default())
        .expect_err("expected a parse error");
    assert_eq!(err.code, diagnostic_codes::STRICT_EVAL_ARGUMENTS);
    ok("[eval] = a;");
}

// =============================================================================
// Parameters
// =============================================================================

#[test]
fn test_function_parameter_shapes() {
    let output = parse_script("function f(a, {b}, [c] = [], ...d) {}", ParseOptions::default())
        .expect("parse failed");
    let Statement::FunctionDeclaration(function) = &output.program.body[0] else {
        panic!("expected function declaration");
    };
    assert_eq!(function.params.len(), 4);
    assert!(matches!(function.params[0], Pattern::Identifier(_)));
    assert!(matches!(function.params[1], Pattern::Object(_)));
    assert!(matches!(function.params[2], Pattern::Assignment(_)));
    assert!(matches!(function.params[3], Pattern::Rest(_)));
}

#[test]
fn test_rest_parameter_errors() {
    assert_eq!(code("function f(...a, b) {}"), diagnostic_codes::REST_PARAMETER_NOT_LAST);
    assert_eq!(code("function f(...a = 1) {}"), diagnostic_codes::REST_WITH_INITIALIZER);
    assert_eq!(code("(...a = 1) => 0"), diagnostic_codes::REST_WITH_INITIALIZER);
}

#[test]
fn test_duplicate_parameters() {
    ok("function f(a, a) {}");
    assert_eq!(
        code("'use strict'; function f(a, a) {}"),
        diagnostic_codes::DUPLICATE_PARAMETER
    );
    assert_eq!(code("function f(a, [a]) {}"), diagnostic_codes::DUPLICATE_PARAMETER);
    assert_eq!(code("function f(a, a) { 'use strict' }"), diagnostic_codes::DUPLICATE_PARAMETER);
}

#[test]
fn test_use_strict_with_non_simple_parameters() {
    assert_eq!(
        code("function f(a = 1) { 'use strict' }"),
        diagnostic_codes::USE_STRICT_NON_SIMPLE_PARAMS
    );
    assert_eq!(
        code("(a = 1) => { 'use strict' }"),
        diagnostic_codes::USE_STRICT_NON_SIMPLE_PARAMS
    );
    ok("function f(a) { 'use strict' }");
}

#[test]
fn test_arrow_object_parameter_with_default() {
    let output = parse_script("({a = 1}) => a", ParseOptions::default()).expect("parse failed");
    let Statement::Expression(statement) = &output.program.body[0] else {
        panic!("expected expression statement");
    };
    let Expression::ArrowFunction(arrow) = &statement.expression else {
        panic!("expected arrow function");
    };
    assert!(matches!(arrow.params[0], Pattern::Object(_)));
}

#[test]
fn test_arrow_parameters_reject_members() {
    assert_eq!(code("({...a.b}) => 0"), diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
    assert_eq!(code("([a.b]) => 0"), diagnostic_codes::INVALID_DESTRUCTURING_TARGET);
}
