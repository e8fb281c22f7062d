//! ECMAScript parser
//!
//! Recursive descent over the pull scanner, with precedence climbing for
//! binary operators and a cover grammar for patterns and arrow parameters.
//! `ParserState` is split across the `state_*` files by grammar area.

pub mod error;
pub mod node;
pub mod node_list;
pub mod options;
mod parse_rules;
pub mod scope;
pub mod state;
mod state_declarations;
mod state_expressions;
mod state_jsx;
mod state_modules;
mod state_patterns;
mod state_statements;

use std::sync::Arc;

use serde::Serialize;

pub use error::{ErrorKind, ParseError, ParseResult};
pub use node::Program;
pub use node_list::NodeList;
pub use options::{ParseOptions, SourceType};
pub use state::{ContextFlags, ParserState};

/// A parsed program with the errors tolerated on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutput {
    pub program: Program,
    /// Empty unless `options.tolerant` is set.
    pub errors: Vec<ParseError>,
}

/// Parse `source` with `options` as given.
pub fn parse(source: impl Into<Arc<str>>, options: ParseOptions) -> ParseResult<ParseOutput> {
    let mut state = ParserState::new(source, options);
    let program = state.parse_program()?;
    Ok(ParseOutput {
        program,
        errors: state.take_diagnostics(),
    })
}

/// Parse `source` with the script goal.
pub fn parse_script(source: impl Into<Arc<str>>, options: ParseOptions) -> ParseResult<ParseOutput> {
    parse(source, options.with_source_type(SourceType::Script))
}

/// Parse `source` with the module goal (strict, `import`/`export`,
/// top-level `await`).
pub fn parse_module(source: impl Into<Arc<str>>, options: ParseOptions) -> ParseResult<ParseOutput> {
    parse(source, options.with_source_type(SourceType::Module))
}
