//! Lookahead utilities
//!
//! Each predicate inspects the token after the current one without consuming
//! anything; the scanner is rewound by `ParserState::look_ahead`.

use esz_scanner::SyntaxKind;

use crate::parser::state::{ParserState, PeekedToken};

/// Tokens that can start a binding name, before context checks.
#[inline]
pub(crate) fn is_binding_identifier_kind(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Identifier
        || kind.is_strict_mode_reserved_word()
        || kind.is_contextual_keyword()
}

/// Test the token after the current one.
pub(crate) fn look_ahead_is(state: &mut ParserState, f: impl FnOnce(PeekedToken) -> bool) -> bool {
    f(state.peek_token())
}

impl ParserState {
    /// `let` starts a lexical declaration rather than an identifier
    /// expression. Outside statement lists only `let [` and a `let` followed
    /// on the same line by a binding count, and those are errors there.
    pub(crate) fn look_ahead_is_let_declaration(&mut self, in_list: bool) -> bool {
        if self.scanner.has_unicode_escape() {
            return false;
        }
        look_ahead_is(self, |next| match next.kind {
            SyntaxKind::OpenBracketToken => true,
            SyntaxKind::OpenBraceToken => in_list || !next.line_break,
            kind if is_binding_identifier_kind(kind) => in_list || !next.line_break,
            _ => false,
        })
    }

    /// `async function` with no line break between the two words.
    pub(crate) fn look_ahead_is_async_function(&mut self) -> bool {
        if !self.is_contextual(SyntaxKind::AsyncKeyword) {
            return false;
        }
        look_ahead_is(self, |next| {
            next.kind == SyntaxKind::FunctionKeyword && !next.line_break
        })
    }

    /// `import(` or `import.`: an expression, not a declaration.
    pub(crate) fn look_ahead_is_import_call_or_meta(&mut self) -> bool {
        look_ahead_is(self, |next| {
            matches!(
                next.kind,
                SyntaxKind::OpenParenToken | SyntaxKind::DotToken
            )
        })
    }
}
