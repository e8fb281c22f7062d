//! esz: an ECMAScript scanner and parser producing an ESTree-shaped AST.
//!
//! The work is split across the workspace crates; this package re-exports
//! them under one roof and owns the tracing subscriber setup.

// Positions, spans, interned atoms, comments and diagnostic tables
pub use esz_common as common;
pub use esz_common::{Comment, CommentKind, Position, Span, Spanned};

// Scanner - token kinds, tokens and the pull tokenizer
pub use esz_scanner as scanner;
pub use esz_scanner::{ScannerState, SyntaxKind, Token, TokenType};

// Parser - AST nodes, options, errors and the entry points
pub use esz_parser as parser;
pub use esz_parser::node;
pub use esz_parser::{
    ErrorKind, NodeList, ParseError, ParseOptions, ParseOutput, ParseResult, Program, SourceType,
    parse, parse_module, parse_script,
};

// Subscriber setup driven by ESZ_LOG / ESZ_LOG_FORMAT
pub mod tracing_config;
