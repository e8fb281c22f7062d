//! A consumed lexical unit, as recorded in the optional token stream.

use esz_common::{Span, Spanned};
use serde::Serialize;

use crate::scanner_impl::TokenFlags;
use crate::syntax_kind::{SyntaxKind, TokenType};

/// One token. Created by the scanner, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    pub kind: SyntaxKind,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Raw source text of the token.
    pub value: String,
    pub span: Span,
    #[serde(skip)]
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(kind: SyntaxKind, value: String, span: Span, flags: TokenFlags) -> Self {
        Token {
            kind,
            token_type: kind.token_type(),
            value,
            span,
            flags,
        }
    }

    #[inline]
    pub fn preceded_by_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn is_octal(&self) -> bool {
        self.flags.contains(TokenFlags::OCTAL)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}
