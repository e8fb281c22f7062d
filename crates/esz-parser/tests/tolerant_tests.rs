//! Tests for tolerant mode: recoverable errors are collected and failed
//! statements are skipped to the next boundary.

use esz_common::diagnostic_codes;

use crate::node::*;
use crate::{ParseOptions, ParseOutput, parse_module, parse_script};

fn tolerant() -> ParseOptions {
    ParseOptions::default().with_tolerant(true)
}

fn tolerant_script(source: &str) -> ParseOutput {
    match parse_script(source, tolerant()) {
        Ok(output) => output,
        Err(err) => panic!("{source:?} failed even in tolerant mode: {err}"),
    }
}

fn codes(output: &ParseOutput) -> Vec<u32> {
    output.errors.iter().map(|err| err.code).collect()
}

#[test]
fn test_strict_violations_are_collected() {
    let output = tolerant_script("'use strict'; with (a) {} delete x;");
    assert_eq!(
        codes(&output),
        vec![diagnostic_codes::STRICT_MODE_WITH, diagnostic_codes::STRICT_DELETE]
    );
    assert_eq!(output.program.body.len(), 3);
    assert!(matches!(output.program.body[1], Statement::With(_)));
}

#[test]
fn test_errors_are_in_source_order() {
    let output = tolerant_script("'use strict';\nvar eval;\nvar arguments;");
    assert_eq!(output.errors.len(), 2);
    assert_eq!(output.errors[0].line_number, 2);
    assert_eq!(output.errors[1].line_number, 3);
    assert!(output.errors[0].index < output.errors[1].index);
    assert_eq!(output.errors[1].message, "Line 3: Unexpected eval or arguments in strict mode");
}

#[test]
fn test_redeclarations_keep_both_declarations() {
    let output = tolerant_script("let a = 1; let a = 2;");
    assert_eq!(codes(&output), vec![diagnostic_codes::DUPLICATE_BINDING]);
    assert_eq!(output.program.body.len(), 2);
}

#[test]
fn test_class_errors_are_collected() {
    let output = tolerant_script(
        "class A { constructor() {} constructor() {} static prototype() {} m() { this.#z } }",
    );
    assert_eq!(
        codes(&output),
        vec![
            diagnostic_codes::DUPLICATE_CONSTRUCTOR,
            diagnostic_codes::STATIC_PROTOTYPE,
            diagnostic_codes::UNDECLARED_PRIVATE_NAME,
        ]
    );
    let Statement::ClassDeclaration(class) = &output.program.body[0] else {
        panic!("expected class declaration");
    };
    assert_eq!(class.body.body.len(), 4);
}

#[test]
fn test_control_flow_errors_are_collected() {
    let output = tolerant_script("break; continue; return;");
    assert_eq!(
        codes(&output),
        vec![
            diagnostic_codes::ILLEGAL_BREAK,
            diagnostic_codes::ILLEGAL_CONTINUE,
            diagnostic_codes::ILLEGAL_RETURN,
        ]
    );
    assert_eq!(output.program.body.len(), 3);
}

#[test]
fn test_lexical_errors_are_collected() {
    let output = tolerant_script("'\\x4'; 1;");
    assert_eq!(codes(&output), vec![diagnostic_codes::INVALID_HEX_ESCAPE_SEQUENCE]);
    assert_eq!(output.program.body.len(), 2);
}

#[test]
fn test_unexpected_characters_are_skipped() {
    let output = tolerant_script("a;\n@\nb;");
    assert_eq!(codes(&output), vec![diagnostic_codes::UNEXPECTED_CHARACTER]);
    assert_eq!(output.errors[0].line_number, 2);
    assert_eq!(output.program.body.len(), 2);

    let err = parse_script("a;\n@\nb;", ParseOptions::default()).expect_err("expected an error");
    assert_eq!(err.code, diagnostic_codes::UNEXPECTED_CHARACTER);
}

#[test]
fn test_module_errors_are_collected() {
    let output = parse_module("export {a}; export {a}; export default 1;", tolerant())
        .expect("tolerant parse");
    assert_eq!(
        codes(&output),
        vec![
            diagnostic_codes::DUPLICATE_EXPORT,
            diagnostic_codes::UNDECLARED_EXPORT,
            diagnostic_codes::UNDECLARED_EXPORT,
        ]
    );
    assert_eq!(output.program.body.len(), 3);
}

#[test]
fn test_failed_statements_are_skipped() {
    let output = tolerant_script("a +;\nb;");
    assert_eq!(codes(&output), vec![diagnostic_codes::UNEXPECTED_TOKEN]);
    assert_eq!(output.program.body.len(), 1);
    assert_eq!(output.errors[0].index, 3);

    let output = tolerant_script("if (a");
    assert_eq!(codes(&output), vec![diagnostic_codes::UNEXPECTED_EOS]);
    assert!(output.program.body.is_empty());

    let output = tolerant_script("import a from 'm';\nx;");
    assert_eq!(codes(&output), vec![diagnostic_codes::ILLEGAL_IMPORT]);
    assert_eq!(output.program.body.len(), 1);
}

#[test]
fn test_recovery_stops_before_closing_brace() {
    let output = tolerant_script("function f() { a +; }\ng();");
    assert_eq!(codes(&output), vec![diagnostic_codes::UNEXPECTED_TOKEN]);
    assert_eq!(output.program.body.len(), 2);
    let Statement::FunctionDeclaration(function) = &output.program.body[0] else {
        panic!("expected function declaration");
    };
    assert!(function.body.body.is_empty());
}

#[test]
fn test_recovery_restarts_at_statement_keyword_on_new_line() {
    let output = tolerant_script("x = 1 +\nvar y = 2;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.program.body.len(), 1);
    assert!(matches!(output.program.body[0], Statement::VariableDeclaration(_)));
}

#[test]
fn test_broken_parameter_list() {
    let output = tolerant_script("function f( { ; ");
    assert!(!output.errors.is_empty());
    assert!(parse_script("function f( { ; ", ParseOptions::default()).is_err());
}

#[test]
fn test_nesting_limit() {
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let source = format!("{}a{}", "(".repeat(5_000), ")".repeat(5_000));
            let err = parse_script(source.as_str(), ParseOptions::default())
                .expect_err("expected a parse error");
            assert_eq!(err.code, diagnostic_codes::TOO_DEEPLY_NESTED);

            let output = tolerant_script(source.as_str());
            assert_eq!(codes(&output), vec![diagnostic_codes::TOO_DEEPLY_NESTED]);

            let source = format!("{}a{}", "[".repeat(100), "]".repeat(100));
            assert!(parse_script(source.as_str(), ParseOptions::default()).is_ok());
        })
        .expect("spawn parser thread");
    handle.join().expect("parser thread panicked");
}

#[test]
fn test_strict_mode_without_tolerance_reports_first_error() {
    let err = parse_script("'use strict'; with (a) {} delete x;", ParseOptions::default())
        .expect_err("expected a parse error");
    assert_eq!(err.code, diagnostic_codes::STRICT_MODE_WITH);
    let output = parse_script("a;", ParseOptions::default()).expect("parse failed");
    assert!(output.errors.is_empty());
}
