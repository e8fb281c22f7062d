//! ECMAScript parser for the esz front end.
//!
//! This crate provides the syntactic analysis phase:
//! - `node` - ESTree-shaped AST node catalogue
//! - `NodeList` - Growable child list frozen into boxed slices
//! - `ParseOptions` - Goal symbol, tolerance, trivia and JSX switches
//! - `ParserState` - Recursive descent parser over `esz_scanner::ScannerState`

pub mod parser;

pub use parser::node;
pub use parser::{
    ContextFlags, ErrorKind, NodeList, ParseError, ParseOptions, ParseOutput, ParseResult,
    ParserState, Program, SourceType, parse, parse_module, parse_script,
};

#[cfg(test)]
#[path = "../tests/node_list_tests.rs"]
mod node_list_tests;

#[cfg(test)]
#[path = "../tests/scope_tests.rs"]
mod scope_tests;

#[cfg(test)]
#[path = "../tests/expression_tests.rs"]
mod expression_tests;

#[cfg(test)]
#[path = "../tests/statement_tests.rs"]
mod statement_tests;

#[cfg(test)]
#[path = "../tests/pattern_tests.rs"]
mod pattern_tests;

#[cfg(test)]
#[path = "../tests/class_function_tests.rs"]
mod class_function_tests;

#[cfg(test)]
#[path = "../tests/module_tests.rs"]
mod module_tests;

#[cfg(test)]
#[path = "../tests/jsx_tests.rs"]
mod jsx_tests;

#[cfg(test)]
#[path = "../tests/tolerant_tests.rs"]
mod tolerant_tests;

#[cfg(test)]
#[path = "../tests/nesting_tests.rs"]
mod nesting_tests;

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
