//! Parse errors.

use esz_common::{Position, diagnostic_codes, diagnostic_messages, format_message};
use esz_scanner::{LexicalError, LexicalErrorKind};
use serde::Serialize;

/// Error taxonomy: malformed tokens, grammar violations, engine bugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Lexical(LexicalErrorKind),
    Syntax,
    /// Never recovered from, even in tolerant mode.
    Internal,
}

/// An error with the position information downstream tools need for
/// `file:line:col: message` diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub code: u32,
    /// `Line N: description`.
    pub message: String,
    /// UTF-16 offset of the error.
    pub index: u32,
    pub line_number: u32,
    /// 1-based column.
    pub column: u32,
    pub description: String,
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    pub fn new(kind: ErrorKind, code: u32, description: String, pos: Position) -> Self {
        ParseError {
            kind,
            code,
            message: format!("Line {}: {}", pos.line, description),
            index: pos.offset,
            line_number: pos.line,
            column: pos.column + 1,
            description,
        }
    }

    pub fn syntax(code: u32, description: String, pos: Position) -> Self {
        ParseError::new(ErrorKind::Syntax, code, description, pos)
    }

    pub fn lexical(error: &LexicalError) -> Self {
        ParseError::new(
            ErrorKind::Lexical(error.kind),
            error.kind.code(),
            error.kind.to_string(),
            error.span.start,
        )
    }

    pub fn internal(detail: &str, pos: Position) -> Self {
        ParseError::new(
            ErrorKind::Internal,
            diagnostic_codes::INTERNAL,
            format_message(diagnostic_messages::INTERNAL, &[detail]),
            pos,
        )
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind == ErrorKind::Internal
    }
}
