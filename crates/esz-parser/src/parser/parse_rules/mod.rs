//! Parsing rule modules
//!
//! Small lookahead predicates shared by the statement and expression
//! productions. The grammar itself lives in the `state_*` files as methods on
//! `ParserState`.

mod utils;

pub(crate) use utils::is_binding_identifier_kind;
