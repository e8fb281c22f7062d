//! ECMAScript scanner/tokenizer for the esz front end.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token kinds and keyword tables
//! - `ScannerState` - Tokenizer state machine with parser-driven rescans
//! - `char_codes` - Character classification utilities
//! - `Token` - Recorded tokens for the optional token stream

pub mod char_codes;
pub mod jsx_entities;
pub mod scanner_impl;
pub mod syntax_kind;
pub mod token;

pub use scanner_impl::{
    LexicalError, LexicalErrorKind, ScannerSnapshot, ScannerState, TokenFlags, valid_regex_flags,
};
pub use syntax_kind::{SyntaxKind, TokenType, text_to_keyword};
pub use token::Token;

#[cfg(test)]
#[path = "../tests/scanner_impl_tests.rs"]
mod scanner_impl_tests;
