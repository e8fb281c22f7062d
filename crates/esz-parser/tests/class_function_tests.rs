//! Tests for classes, functions, generators and async functions.

use esz_common::diagnostic_codes;

use crate::node::*;
use crate::{ParseError, ParseOptions, parse_module, parse_script};

fn error(source: &str) -> ParseError {
    parse_script(source, ParseOptions::default()).expect_err("expected a parse error")
}

fn code(source: &str) -> u32 {
    error(source).code
}

fn ok(source: &str) {
    if let Err(err) = parse_script(source, ParseOptions::default()) {
        panic!("{source:?} failed: {err}");
    }
}

fn class(source: &str) -> Box<Class> {
    let output = parse_script(source, ParseOptions::default()).expect("parse failed");
    match output.program.body.first() {
        Some(Statement::ClassDeclaration(class)) => class.clone(),
        other => panic!("expected class declaration, got {other:?}"),
    }
}

fn function(source: &str) -> Box<Function> {
    let output = parse_script(source, ParseOptions::default()).expect("parse failed");
    match output.program.body.first() {
        Some(Statement::FunctionDeclaration(function)) => function.clone(),
        other => panic!("expected function declaration, got {other:?}"),
    }
}

fn method(element: &ClassElement) -> &MethodDefinition {
    match element {
        ClassElement::Method(method) => method,
        other => panic!("expected method, got {other:?}"),
    }
}

// =============================================================================
// Class shapes
// =============================================================================

#[test]
fn test_class_declaration_and_heritage() {
    let declaration = class("class A extends B {}");
    assert_eq!(declaration.kind, ClassKind::ClassDeclaration);
    assert_eq!(declaration.id.as_ref().map(|id| id.name.as_str()), Some("A"));
    assert!(matches!(declaration.super_class.as_deref(), Some(Expression::Identifier(_))));
    assert!(declaration.body.body.is_empty());
    assert_eq!(declaration.span.end.offset, 20);

    let output = parse_script("(class extends f() {});", ParseOptions::default())
        .expect("parse failed");
    let Statement::Expression(statement) = &output.program.body[0] else {
        panic!("expected expression statement");
    };
    let Expression::Class(expression) = statement.expression.without_parentheses() else {
        panic!("expected class expression");
    };
    assert_eq!(expression.kind, ClassKind::ClassExpression);
    assert!(expression.id.is_none());
    assert!(matches!(expression.super_class.as_deref(), Some(Expression::Call(_))));
}

#[test]
fn test_method_kinds() {
    let declaration = class("class A { constructor() {} m() {} get x() {} set x(v) {} static s() {} }");
    let kinds: Vec<_> = declaration.body.body.iter().map(|e| method(e).kind).collect();
    assert_eq!(
        kinds,
        vec![
            MethodKind::Constructor,
            MethodKind::Method,
            MethodKind::Get,
            MethodKind::Set,
            MethodKind::Method,
        ]
    );
    assert!(method(&declaration.body.body[4]).is_static);
    assert!(!method(&declaration.body.body[0]).is_static);
}

#[test]
fn test_generator_and_async_methods() {
    let declaration = class("class A { *g() { yield 1 } async a() { await 1 } static async *b() {} }");
    let g = method(&declaration.body.body[0]);
    assert!(g.value.generator && !g.value.is_async);
    let a = method(&declaration.body.body[1]);
    assert!(a.value.is_async && !a.value.generator);
    let b = method(&declaration.body.body[2]);
    assert!(b.is_static && b.value.is_async && b.value.generator);
}

#[test]
fn test_fields_and_computed_keys() {
    let declaration = class("class A { x; y = 1; static z = 2; [k] = 3; ['m']() {} }");
    let body = &declaration.body.body;
    assert_eq!(body.len(), 5);
    let ClassElement::Property(x) = &body[0] else {
        panic!("expected field");
    };
    assert!(x.value.is_none());
    let ClassElement::Property(z) = &body[2] else {
        panic!("expected field");
    };
    assert!(z.is_static && z.value.is_some());
    let ClassElement::Property(k) = &body[3] else {
        panic!("expected field");
    };
    assert!(k.computed);
    assert!(method(&body[4]).computed);
}

#[test]
fn test_fields_need_separators() {
    ok("class A { x\n y }");
    assert_eq!(code("class A { x y }"), diagnostic_codes::UNEXPECTED_IDENTIFIER);
}

#[test]
fn test_modifiers_as_element_names() {
    let declaration = class("class A { static() {} get; set = 1; async\n m() {} static static() {} }");
    let body = &declaration.body.body;
    let first = method(&body[0]);
    assert_eq!(first.key.static_name(), Some("static"));
    assert!(!first.is_static);
    assert!(matches!(&body[1], ClassElement::Property(p) if p.key.static_name() == Some("get")));
    assert!(matches!(&body[2], ClassElement::Property(p) if p.key.static_name() == Some("set")));
    // `async` followed by a line break is a field named async.
    assert!(matches!(&body[3], ClassElement::Property(p) if p.key.static_name() == Some("async")));
    let last = method(&body[5]);
    assert!(last.is_static);
    assert_eq!(last.key.static_name(), Some("static"));
}

#[test]
fn test_private_members() {
    let declaration = class("class A { #x = 1; #m() { return this.#x } static #s; has(o) { return #x in o } }");
    let ClassElement::Property(field) = &declaration.body.body[0] else {
        panic!("expected field");
    };
    let PropertyKey::PrivateIdentifier(private) = &field.key else {
        panic!("expected private key");
    };
    assert_eq!(private.name, "x");
    assert!(matches!(method(&declaration.body.body[1]).key, PropertyKey::PrivateIdentifier(_)));
}

#[test]
fn test_private_name_declared_after_use() {
    ok("class A { m() { return this.#x } #x; }");
    ok("class A { #x; m() { class B { n(o) { return o.#x } } } }");
}

#[test]
fn test_static_block() {
    let declaration = class("class A { static { let a = 1; this.b = a; } }");
    let ClassElement::StaticBlock(block) = &declaration.body.body[0] else {
        panic!("expected static block");
    };
    assert_eq!(block.body.len(), 2);
    assert_eq!(code("class A { static { return; } }"), diagnostic_codes::ILLEGAL_RETURN);
    assert_eq!(code("class A { static { await; } }"), diagnostic_codes::UNEXPECTED_RESERVED);
    assert_eq!(code("class A { static { arguments; } }"), diagnostic_codes::ARGUMENTS_IN_CLASS_INIT);
    ok("class A { static { function f() { return arguments; } } }");
}

#[test]
fn test_class_name_is_strict() {
    assert_eq!(code("class yield {}"), diagnostic_codes::STRICT_RESERVED_WORD);
    assert_eq!(code("class A {} class A {}"), diagnostic_codes::DUPLICATE_BINDING);
}

#[test]
fn test_class_body_is_strict() {
    assert_eq!(code("class A { m() { with (a) {} } }"), diagnostic_codes::STRICT_MODE_WITH);
    assert_eq!(code("class A { m() { 010 } }"), diagnostic_codes::STRICT_OCTAL_LITERAL);
    // The code after the class is sloppy again.
    ok("class A {} with (a) {}");
}

// =============================================================================
// Class early errors
// =============================================================================

#[test]
fn test_special_constructors() {
    let err = error("class A { get constructor() {} }");
    assert_eq!(err.code, diagnostic_codes::CONSTRUCTOR_SPECIAL_METHOD);
    assert_eq!(err.description, "Class constructor may not be a getter");
    assert_eq!(err.column, 15);
    assert_eq!(
        error("class A { *constructor() {} }").description,
        "Class constructor may not be a generator"
    );
    assert_eq!(
        error("class A { async constructor() {} }").description,
        "Class constructor may not be an async method"
    );
    // A static method named constructor is an ordinary method.
    ok("class A { static constructor() {} }");
    ok("class A { 'constructor'() {} }");
}

#[test]
fn test_duplicate_constructor() {
    assert_eq!(
        code("class A { constructor() {} constructor() {} }"),
        diagnostic_codes::DUPLICATE_CONSTRUCTOR
    );
}

#[test]
fn test_static_prototype_and_constructor_fields() {
    assert_eq!(code("class A { static prototype() {} }"), diagnostic_codes::STATIC_PROTOTYPE);
    assert_eq!(code("class A { static prototype = 1 }"), diagnostic_codes::STATIC_PROTOTYPE);
    ok("class A { prototype() {} }");
    assert_eq!(code("class A { constructor = 1 }"), diagnostic_codes::CONSTRUCTOR_FIELD);
    assert_eq!(code("class A { #constructor }"), diagnostic_codes::PRIVATE_CONSTRUCTOR);
}

#[test]
fn test_duplicate_private_names() {
    assert_eq!(code("class A { #a; #a; }"), diagnostic_codes::DUPLICATE_PRIVATE_NAME);
    assert_eq!(
        error("class A { #a; #a() {} }").description,
        "Identifier '#a' has already been declared"
    );
    ok("class A { get #a() {} set #a(v) {} }");
    assert_eq!(
        code("class A { static get #a() {} set #a(v) {} }"),
        diagnostic_codes::DUPLICATE_PRIVATE_NAME
    );
}

#[test]
fn test_undeclared_private_names() {
    let err = error("class A { m() { return this.#y } }");
    assert_eq!(err.code, diagnostic_codes::UNDECLARED_PRIVATE_NAME);
    assert_eq!(err.description, "Private field '#y' must be declared in an enclosing class");
    assert_eq!(code("this.#x"), diagnostic_codes::UNDECLARED_PRIVATE_NAME);
}

#[test]
fn test_private_delete() {
    assert_eq!(
        code("class A { #x; m() { delete this.#x } }"),
        diagnostic_codes::PRIVATE_DELETE
    );
}

#[test]
fn test_super_calls_and_properties() {
    ok("class A extends B { constructor() { super(); } }");
    ok("class A extends B { constructor() { (() => super())(); } }");
    ok("class A { m() { return super.m(); } static s() { return super['s']; } }");
    ok("class A { x = super.y; }");
    ok("({ m() { return super.m(); } })");

    assert_eq!(code("class A { constructor() { super(); } }"), diagnostic_codes::UNEXPECTED_SUPER);
    assert_eq!(code("class A extends B { m() { super(); } }"), diagnostic_codes::UNEXPECTED_SUPER);
    assert_eq!(code("class A extends B { x = super(); }"), diagnostic_codes::UNEXPECTED_SUPER);
    assert_eq!(
        code("class A extends B { constructor() { function f() { super(); } } }"),
        diagnostic_codes::UNEXPECTED_SUPER
    );
    assert_eq!(code("function f() { super.x; }"), diagnostic_codes::UNEXPECTED_SUPER);
}

#[test]
fn test_field_initializers() {
    assert_eq!(code("class A { x = arguments; }"), diagnostic_codes::ARGUMENTS_IN_CLASS_INIT);
    assert_eq!(
        code("class A { x = () => arguments; }"),
        diagnostic_codes::ARGUMENTS_IN_CLASS_INIT
    );
    ok("class A { x = function () { return arguments; }; }");
    ok("class A { x = new.target; }");
    ok("class A { static x = this; }");
}

#[test]
fn test_accessor_arity() {
    assert_eq!(code("class A { get x(a) {} }"), diagnostic_codes::GETTER_ARITY);
    assert_eq!(code("class A { set x() {} }"), diagnostic_codes::SETTER_ARITY);
    assert_eq!(code("class A { set x(a, b) {} }"), diagnostic_codes::SETTER_ARITY);
    assert_eq!(code("class A { set x(...a) {} }"), diagnostic_codes::SETTER_REST);
    assert_eq!(code("({ get x(a) {} })"), diagnostic_codes::GETTER_ARITY);
    assert_eq!(code("({ set x() {} })"), diagnostic_codes::SETTER_ARITY);
    ok("({ get x() {}, set x([a, b]) {} })");
}

#[test]
fn test_field_modifier_misuse() {
    assert_eq!(code("class A { async x = 1 }"), diagnostic_codes::UNEXPECTED_TOKEN);
    assert_eq!(code("class A { *x = 1 }"), diagnostic_codes::UNEXPECTED_TOKEN);
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn test_function_declaration_shape() {
    let declaration = function("function f(a, b) { return a }");
    assert_eq!(declaration.kind, FunctionKind::FunctionDeclaration);
    assert_eq!(declaration.span.start.offset, 0);
    assert_eq!(declaration.span.end.offset, 29);
    assert_eq!(declaration.params.len(), 2);
    assert_eq!(declaration.body.body.len(), 1);
    assert!(!declaration.generator && !declaration.is_async);
}

#[test]
fn test_function_expression_names() {
    ok("(function f() {})");
    ok("(function () {})");
    // The name of a function expression uses the function's own context.
    ok("function* g() { (function yield() {}); }");
    assert_eq!(code("(function* yield() {})"), diagnostic_codes::UNEXPECTED_RESERVED);
    assert_eq!(code("(async function await() {})"), diagnostic_codes::UNEXPECTED_RESERVED);
}

#[test]
fn test_sloppy_function_redeclaration() {
    ok("function f() {} function f() {}");
    ok("var f; function f() {}");
    let err = parse_module("function f() {} function f() {}", ParseOptions::default())
        .expect_err("expected a parse error");
    assert_eq!(err.code, diagnostic_codes::DUPLICATE_BINDING);
    assert_eq!(code("{ function f() {} let f; }"), diagnostic_codes::DUPLICATE_BINDING);
}

#[test]
fn test_strict_function_names_and_params() {
    assert_eq!(code("function eval() { 'use strict' }"), diagnostic_codes::STRICT_EVAL_ARGUMENTS);
    assert_eq!(
        code("function f(arguments) { 'use strict' }"),
        diagnostic_codes::STRICT_EVAL_ARGUMENTS
    );
    assert_eq!(code("function f(package) { 'use strict' }"), diagnostic_codes::STRICT_RESERVED_WORD);
    ok("function eval() {}");
}

// =============================================================================
// Generators
// =============================================================================

fn yields(source: &str) -> Vec<YieldExpression> {
    let declaration = function(source);
    declaration
        .body
        .body
        .iter()
        .filter_map(|statement| match statement {
            Statement::Expression(statement) => match &statement.expression {
                Expression::Yield(expression) => Some(expression.clone()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[test]
fn test_yield_expressions() {
    let found = yields("function* g() { yield; yield 1; yield* other(); }");
    assert!(function("function* g() {}").generator);
    assert_eq!(found.len(), 3);
    assert!(found[0].argument.is_none());
    assert!(found[1].argument.is_some() && !found[1].delegate);
    assert!(found[2].delegate);
}

#[test]
fn test_yield_without_operand_before_closer() {
    let found = yields("function* g() { yield\n1; }");
    assert!(found[0].argument.is_none());
    ok("function* g() { f(yield, yield); [yield]; }");
}

#[test]
fn test_yield_as_identifier() {
    ok("var yield = 1; yield + 1;");
    assert_eq!(code("function* g() { var yield; }"), diagnostic_codes::UNEXPECTED_RESERVED);
    assert_eq!(code("'use strict'; var yield;"), diagnostic_codes::STRICT_RESERVED_WORD);
}

#[test]
fn test_yield_in_generator_parameters() {
    assert_eq!(code("function* g(x = yield) {}"), diagnostic_codes::YIELD_IN_PARAMETER);
    assert_eq!(
        code("function* g() { (x = yield) => 0; }"),
        diagnostic_codes::YIELD_IN_PARAMETER
    );
}

// =============================================================================
// Async functions
// =============================================================================

#[test]
fn test_await_expressions() {
    let declaration = function("async function f() { await x; }");
    assert!(declaration.is_async);
    let Statement::Expression(statement) = &declaration.body.body[0] else {
        panic!("expected expression statement");
    };
    assert!(matches!(statement.expression, Expression::Await(_)));
}

#[test]
fn test_await_as_identifier_in_scripts() {
    ok("var await = 1; await + 1;");
    assert_eq!(code("async function f() { var await; }"), diagnostic_codes::UNEXPECTED_RESERVED);
    let err = parse_module("var await;", ParseOptions::default())
        .expect_err("expected a parse error");
    assert_eq!(err.code, diagnostic_codes::UNEXPECTED_RESERVED);
}

#[test]
fn test_await_in_async_parameters() {
    assert_eq!(
        code("async function f(a = await x) {}"),
        diagnostic_codes::AWAIT_IN_PARAMETER
    );
    assert_eq!(code("async (a = await) => 0"), diagnostic_codes::AWAIT_IN_PARAMETER);
    ok("(a = await) => 0");
}

#[test]
fn test_async_line_break_is_identifier() {
    let output = parse_script("async\nfunction f() {}", ParseOptions::default())
        .expect("parse failed");
    assert_eq!(output.program.body.len(), 2);
    let output = parse_script("async\nx => x", ParseOptions::default()).expect("parse failed");
    assert_eq!(output.program.body.len(), 2);
}

#[test]
fn test_async_function_expression_and_arrow() {
    let output = parse_script("(async function () {}); async () => {};", ParseOptions::default())
        .expect("parse failed");
    let Statement::Expression(first) = &output.program.body[0] else {
        panic!("expected expression statement");
    };
    let Expression::Function(expression) = first.expression.without_parentheses() else {
        panic!("expected function expression");
    };
    assert!(expression.is_async);
    assert_eq!(expression.kind, FunctionKind::FunctionExpression);
    let Statement::Expression(second) = &output.program.body[1] else {
        panic!("expected expression statement");
    };
    assert!(matches!(&second.expression, Expression::ArrowFunction(arrow) if arrow.is_async));
}
