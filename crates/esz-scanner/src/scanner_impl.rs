//! Scanner implementation.
//!
//! `ScannerState` is a pull tokenizer: each call to `scan()` skips trivia and
//! produces one token. The scanner never decides on its own whether `/` starts
//! a regular expression or whether `}` continues a template; the parser asks
//! for those readings explicitly with the `re_scan_*` methods, which re-read
//! the current token from its start offset.

use std::sync::Arc;

use bitflags::bitflags;
use esz_common::comments::{Comment, CommentKind};
use esz_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use esz_common::interner::{Atom, Interner};
use esz_common::source::{Utf16Offsets, find_line_end, line_terminator_len};
use esz_common::span::{Position, Span};
use memchr::memmem;
use serde::Serialize;

use crate::char_codes::{
    digit_value, is_ascii_identifier_part, is_ascii_identifier_start, is_identifier_part, is_identifier_start, is_octal_digit, is_white_space,
};
use crate::jsx_entities::decode_entity;
use crate::syntax_kind::{SyntaxKind, text_to_keyword};

bitflags! {
    /// Per-token facts the parser needs after the scan.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u32 {
        /// A line terminator appeared between the previous token and this one.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// Legacy octal numeric literal (`017`) or octal escape (`"\017"`).
        const OCTAL = 1 << 1;
        /// `08`, `09` or the escapes `\8`, `\9`.
        const NON_OCTAL_DECIMAL = 1 << 2;
        /// Identifier spelled with at least one `\u` escape.
        const UNICODE_ESCAPE = 1 << 3;
        const UNTERMINATED = 1 << 4;
        const CONTAINS_SEPARATOR = 1 << 5;
        /// Template with an escape that has no cooked value.
        const CONTAINS_INVALID_ESCAPE = 1 << 6;
        const SCIENTIFIC = 1 << 7;
        const HEX_SPECIFIER = 1 << 8;
        const BINARY_SPECIFIER = 1 << 9;
        const OCTAL_SPECIFIER = 1 << 10;
        const BIG_INT = 1 << 11;
    }
}

/// Kinds of malformed tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum LexicalErrorKind {
    #[error("{}", diagnostic_messages::UNTERMINATED_STRING)]
    UnterminatedString,
    #[error("{}", diagnostic_messages::UNTERMINATED_TEMPLATE)]
    UnterminatedTemplate,
    #[error("{}", diagnostic_messages::UNTERMINATED_REGEXP)]
    UnterminatedRegExp,
    #[error("{}", diagnostic_messages::UNTERMINATED_COMMENT)]
    UnterminatedComment,
    #[error("{}", diagnostic_messages::INVALID_ESCAPE_SEQUENCE)]
    InvalidEscapeSequence,
    #[error("{}", diagnostic_messages::INVALID_HEX_ESCAPE_SEQUENCE)]
    InvalidHexEscapeSequence,
    #[error("{}", diagnostic_messages::INVALID_UNICODE_ESCAPE_SEQUENCE)]
    InvalidUnicodeEscapeSequence,
    #[error("{}", diagnostic_messages::INVALID_NUMERIC_LITERAL)]
    InvalidNumericLiteral,
    #[error("{}", diagnostic_messages::INVALID_NUMERIC_SEPARATOR)]
    InvalidNumericSeparator,
    #[error("{}", diagnostic_messages::IDENTIFIER_AFTER_NUMERIC_LITERAL)]
    IdentifierAfterNumericLiteral,
    #[error("{}", diagnostic_messages::INVALID_REGEXP_FLAGS)]
    InvalidRegExpFlags,
    #[error("{}", diagnostic_messages::INVALID_IDENTIFIER_ESCAPE)]
    InvalidIdentifierEscape,
    #[error("{}", diagnostic_messages::UNEXPECTED_CHARACTER)]
    UnexpectedCharacter,
}

impl LexicalErrorKind {
    pub fn code(self) -> u32 {
        match self {
            LexicalErrorKind::UnterminatedString => diagnostic_codes::UNTERMINATED_STRING,
            LexicalErrorKind::UnterminatedTemplate => diagnostic_codes::UNTERMINATED_TEMPLATE,
            LexicalErrorKind::UnterminatedRegExp => diagnostic_codes::UNTERMINATED_REGEXP,
            LexicalErrorKind::UnterminatedComment => diagnostic_codes::UNTERMINATED_COMMENT,
            LexicalErrorKind::InvalidEscapeSequence => diagnostic_codes::INVALID_ESCAPE_SEQUENCE,
            LexicalErrorKind::InvalidHexEscapeSequence => {
                diagnostic_codes::INVALID_HEX_ESCAPE_SEQUENCE
            }
            LexicalErrorKind::InvalidUnicodeEscapeSequence => {
                diagnostic_codes::INVALID_UNICODE_ESCAPE_SEQUENCE
            }
            LexicalErrorKind::InvalidNumericLiteral => diagnostic_codes::INVALID_NUMERIC_LITERAL,
            LexicalErrorKind::InvalidNumericSeparator => {
                diagnostic_codes::INVALID_NUMERIC_SEPARATOR
            }
            LexicalErrorKind::IdentifierAfterNumericLiteral => {
                diagnostic_codes::IDENTIFIER_AFTER_NUMERIC_LITERAL
            }
            LexicalErrorKind::InvalidRegExpFlags => diagnostic_codes::INVALID_REGEXP_FLAGS,
            LexicalErrorKind::InvalidIdentifierEscape => {
                diagnostic_codes::INVALID_IDENTIFIER_ESCAPE
            }
            LexicalErrorKind::UnexpectedCharacter => diagnostic_codes::UNEXPECTED_CHARACTER,
        }
    }
}

/// A malformed token, with the offending span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub span: Span,
}

/// Everything needed to rewind the scanner to an earlier token.
#[derive(Clone, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    line: u32,
    line_start: usize,
    token: SyntaxKind,
    token_start: usize,
    token_start_line: u32,
    token_start_line_start: usize,
    token_value: String,
    token_flags: TokenFlags,
    token_atom: Atom,
    number_value: f64,
    regex_flags: String,
    error: Option<LexicalError>,
    comments_len: usize,
    tokens_scanned: u32,
}

pub struct ScannerState {
    text: Arc<str>,
    utf16: Utf16Offsets,
    pos: usize,
    end: usize,
    line: u32,
    line_start: usize,

    token: SyntaxKind,
    token_start: usize,
    token_start_line: u32,
    token_start_line_start: usize,
    token_value: String,
    token_flags: TokenFlags,
    token_atom: Atom,
    number_value: f64,
    regex_flags: String,

    error: Option<LexicalError>,
    interner: Interner,
    retain_comments: bool,
    comments: Vec<Comment>,
    module_goal: bool,
    tokens_scanned: u32,
}

impl ScannerState {
    pub fn new(text: impl Into<Arc<str>>, retain_comments: bool) -> Self {
        let text: Arc<str> = text.into();
        let end = text.len();
        let utf16 = Utf16Offsets::new(&text);
        ScannerState {
            text,
            utf16,
            pos: 0,
            end,
            line: 1,
            line_start: 0,
            token: SyntaxKind::Unknown,
            token_start: 0,
            token_start_line: 1,
            token_start_line_start: 0,
            token_value: String::new(),
            token_flags: TokenFlags::empty(),
            token_atom: Atom::NONE,
            number_value: 0.0,
            regex_flags: String::new(),
            error: None,
            interner: Interner::new(),
            retain_comments,
            comments: Vec::new(),
            module_goal: false,
            tokens_scanned: 0,
        }
    }

    /// In module goal HTML-like comments are not recognised.
    pub fn set_module_goal(&mut self, module_goal: bool) {
        self.module_goal = module_goal;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn source_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn source_text_arc(&self) -> &Arc<str> {
        &self.text
    }

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Decoded value: identifier name, cooked string/template contents, raw
    /// numeric text, regex body.
    #[inline]
    pub fn get_token_value(&self) -> &str {
        &self.token_value
    }

    #[inline]
    pub fn get_token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    #[inline]
    pub fn get_token_atom(&self) -> Atom {
        self.token_atom
    }

    /// Numeric value of the current numeric literal.
    #[inline]
    pub fn get_number_value(&self) -> f64 {
        self.number_value
    }

    /// Flags of the current regular-expression literal.
    #[inline]
    pub fn get_regex_flags(&self) -> &str {
        &self.regex_flags
    }

    #[inline]
    pub fn get_token_start(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn get_token_end(&self) -> usize {
        self.pos
    }

    /// Raw source text of the current token.
    #[inline]
    pub fn get_token_text(&self) -> &str {
        self.text.get(self.token_start..self.pos).unwrap_or("")
    }

    pub fn token_start_position(&self) -> Position {
        self.make_position(
            self.token_start,
            self.token_start_line,
            self.token_start_line_start,
        )
    }

    pub fn token_end_position(&self) -> Position {
        self.current_position()
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn has_unicode_escape(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNICODE_ESCAPE)
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut Interner {
        &mut self.interner
    }

    pub fn take_interner(&mut self) -> Interner {
        std::mem::take(&mut self.interner)
    }

    /// The lexical error produced by the most recent scan, if any.
    pub fn take_lexical_error(&mut self) -> Option<LexicalError> {
        self.error.take()
    }

    pub fn take_comments(&mut self) -> Vec<Comment> {
        std::mem::take(&mut self.comments)
    }

    /// Raw template characters between the delimiters of the current template
    /// token, with CR and CRLF normalised to LF.
    pub fn get_template_raw(&self) -> String {
        let open = 1;
        let close = match self.token {
            SyntaxKind::TemplateHead | SyntaxKind::TemplateMiddle => 2,
            _ if self.token_flags.contains(TokenFlags::UNTERMINATED) => 0,
            _ => 1,
        };
        let start = (self.token_start + open).min(self.pos);
        let end = self.pos.saturating_sub(close).max(start);
        let raw = self.text.get(start..end).unwrap_or("");
        if raw.contains('\r') {
            raw.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            raw.to_string()
        }
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            line: self.line,
            line_start: self.line_start,
            token: self.token,
            token_start: self.token_start,
            token_start_line: self.token_start_line,
            token_start_line_start: self.token_start_line_start,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            token_atom: self.token_atom,
            number_value: self.number_value,
            regex_flags: self.regex_flags.clone(),
            error: self.error.clone(),
            comments_len: self.comments.len(),
            tokens_scanned: self.tokens_scanned,
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.line = snapshot.line;
        self.line_start = snapshot.line_start;
        self.token = snapshot.token;
        self.token_start = snapshot.token_start;
        self.token_start_line = snapshot.token_start_line;
        self.token_start_line_start = snapshot.token_start_line_start;
        self.token_value = snapshot.token_value;
        self.token_flags = snapshot.token_flags;
        self.token_atom = snapshot.token_atom;
        self.number_value = snapshot.number_value;
        self.regex_flags = snapshot.regex_flags;
        self.error = snapshot.error;
        self.comments.truncate(snapshot.comments_len);
        self.tokens_scanned = snapshot.tokens_scanned;
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.text.as_bytes().get(pos).copied()
    }

    #[inline]
    fn peek_byte(&self, ahead: usize) -> Option<u8> {
        self.byte_at(self.pos + ahead)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    /// Position of byte index `byte` on the line starting at byte `line_start`.
    #[inline]
    fn make_position(&self, byte: usize, line: u32, line_start: usize) -> Position {
        if self.utf16.is_identity() {
            return Position::new(byte as u32, line, (byte - line_start) as u32);
        }
        let offset = self.utf16.utf16_offset(byte);
        let column = offset - self.utf16.utf16_offset(line_start);
        Position::new(offset, line, column)
    }

    #[inline]
    fn current_position(&self) -> Position {
        self.make_position(self.pos, self.line, self.line_start)
    }

    /// Position of a byte index at or after the current line start, or of
    /// the token start for anything earlier.
    fn position_of(&self, byte: usize) -> Position {
        if byte >= self.line_start {
            self.make_position(byte, self.line, self.line_start)
        } else {
            self.token_start_position()
        }
    }

    /// Consume the line terminator at the cursor, if any. Returns whether one
    /// was consumed.
    #[inline]
    fn consume_line_terminator(&mut self) -> bool {
        let len = line_terminator_len(self.bytes(), self.pos);
        if len == 0 {
            return false;
        }
        self.pos += len;
        self.line += 1;
        self.line_start = self.pos;
        true
    }

    /// Advance to `to`, counting the line terminators crossed.
    fn advance_counting_lines(&mut self, to: usize) -> bool {
        let mut crossed = false;
        while self.pos < to {
            if !self.consume_line_terminator() {
                self.pos += 1;
            } else {
                crossed = true;
            }
        }
        crossed
    }

    fn reset_token(&mut self) {
        self.token_value.clear();
        self.token_atom = Atom::NONE;
        self.number_value = 0.0;
        self.regex_flags.clear();
        self.error = None;
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.pos;
        self.token_start_line = self.line;
        self.token_start_line_start = self.line_start;
    }

    fn report(&mut self, kind: LexicalErrorKind, start: usize) {
        if self.error.is_some() {
            return;
        }
        let start = self.position_of(start);
        tracing::trace!(?kind, offset = start.offset, "lexical error");
        self.error = Some(LexicalError {
            kind,
            span: Span::new(start, self.current_position()),
        });
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    fn skip_trivia(&mut self) {
        let first_token = self.tokens_scanned == 0;
        while self.pos < self.end {
            let b = self.bytes()[self.pos];
            match b {
                b' ' | b'\t' | 0x0B | 0x0C => self.pos += 1,
                b'\n' | b'\r' => {
                    self.consume_line_terminator();
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                }
                b'/' if self.peek_byte(1) == Some(b'/') => {
                    self.skip_line_comment(CommentKind::Line, 2);
                }
                b'/' if self.peek_byte(1) == Some(b'*') => {
                    if !self.skip_block_comment() {
                        return;
                    }
                }
                b'#' if self.pos == 0 && self.peek_byte(1) == Some(b'!') => {
                    self.skip_line_comment(CommentKind::Hashbang, 2);
                }
                b'<' if !self.module_goal && self.bytes()[self.pos..].starts_with(b"<!--") => {
                    self.skip_line_comment(CommentKind::HtmlOpen, 4);
                }
                b'-' if !self.module_goal
                    && (first_token || self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK))
                    && self.bytes()[self.pos..].starts_with(b"-->") =>
                {
                    self.skip_line_comment(CommentKind::HtmlClose, 3);
                }
                _ if b >= 0x80 => {
                    let Some(ch) = self.char_at(self.pos) else {
                        return;
                    };
                    if is_white_space(ch) {
                        self.pos += ch.len_utf8();
                    } else if self.consume_line_terminator() {
                        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    } else {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self, kind: CommentKind, opener_len: usize) {
        let start = self.pos;
        let start_pos = self.current_position();
        let body_start = start + opener_len;
        let end = find_line_end(self.bytes(), body_start);
        self.pos = end;
        if self.retain_comments {
            let value = self.text.get(body_start..end).unwrap_or("").to_string();
            let has_trailing_new_line = end < self.end;
            self.comments.push(Comment::new(
                kind,
                value,
                Span::new(start_pos, self.current_position()),
                has_trailing_new_line,
            ));
        }
    }

    /// Returns false when the comment is unterminated (the cursor is then at EOF).
    fn skip_block_comment(&mut self) -> bool {
        let start = self.pos;
        let start_pos = self.current_position();
        let body_start = start + 2;
        let close = memmem::find(&self.bytes()[body_start..], b"*/").map(|rel| body_start + rel);
        let (body_end, after) = match close {
            Some(close) => (close, close + 2),
            None => (self.end, self.end),
        };
        if self.advance_counting_lines(body_end) {
            self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
        }
        self.pos = after;
        if self.retain_comments {
            let value = self.text.get(body_start..body_end).unwrap_or("").to_string();
            let has_trailing_new_line = line_terminator_len(self.bytes(), self.pos) > 0;
            self.comments.push(Comment::new(
                CommentKind::Block,
                value,
                Span::new(start_pos, self.current_position()),
                has_trailing_new_line,
            ));
        }
        if close.is_none() {
            if self.error.is_none() {
                self.error = Some(LexicalError {
                    kind: LexicalErrorKind::UnterminatedComment,
                    span: Span::new(start_pos, self.current_position()),
                });
            }
            return false;
        }
        true
    }

    // =========================================================================
    // Main scan
    // =========================================================================

    /// Scan the next token.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::empty();
        self.reset_token();
        // An unterminated block comment leaves its error in place.
        self.skip_trivia();
        self.mark_token_start();
        self.tokens_scanned += 1;

        if self.pos >= self.end {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let b = self.bytes()[self.pos];
        self.token = match b {
            b'"' | b'\'' => self.scan_string(b),
            b'`' => {
                self.pos += 1;
                self.scan_template(true)
            }
            b'0'..=b'9' => self.scan_number(),
            b'.' => {
                if self.peek_byte(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number()
                } else if self.peek_byte(1) == Some(b'.') && self.peek_byte(2) == Some(b'.') {
                    self.pos += 3;
                    SyntaxKind::DotDotDotToken
                } else {
                    self.pos += 1;
                    SyntaxKind::DotToken
                }
            }
            b'#' => self.scan_private_identifier(),
            b'\\' => self.scan_identifier(),
            _ if is_ascii_identifier_start(b) => self.scan_identifier(),
            _ if b >= 0x80 => {
                let ch = self.char_at(self.pos).unwrap_or('\u{FFFD}');
                if is_identifier_start(ch) {
                    self.scan_identifier()
                } else {
                    let start = self.pos;
                    self.pos += ch.len_utf8().max(1);
                    self.report(LexicalErrorKind::UnexpectedCharacter, start);
                    SyntaxKind::Unknown
                }
            }
            _ => self.scan_punctuation(b),
        };
        self.token
    }

    fn scan_punctuation(&mut self, b: u8) -> SyntaxKind {
        let next = self.peek_byte(1);
        let next2 = self.peek_byte(2);
        let (kind, len) = match b {
            b'{' => (SyntaxKind::OpenBraceToken, 1),
            b'}' => (SyntaxKind::CloseBraceToken, 1),
            b'(' => (SyntaxKind::OpenParenToken, 1),
            b')' => (SyntaxKind::CloseParenToken, 1),
            b'[' => (SyntaxKind::OpenBracketToken, 1),
            b']' => (SyntaxKind::CloseBracketToken, 1),
            b';' => (SyntaxKind::SemicolonToken, 1),
            b',' => (SyntaxKind::CommaToken, 1),
            b':' => (SyntaxKind::ColonToken, 1),
            b'~' => (SyntaxKind::TildeToken, 1),
            b'?' => match next {
                Some(b'?') if next2 == Some(b'=') => (SyntaxKind::QuestionQuestionEqualsToken, 3),
                Some(b'?') => (SyntaxKind::QuestionQuestionToken, 2),
                // `a?.5:b` is a conditional, not an optional chain.
                Some(b'.') if !next2.is_some_and(|c| c.is_ascii_digit()) => {
                    (SyntaxKind::QuestionDotToken, 2)
                }
                _ => (SyntaxKind::QuestionToken, 1),
            },
            b'<' => match next {
                Some(b'<') if next2 == Some(b'=') => (SyntaxKind::LessThanLessThanEqualsToken, 3),
                Some(b'<') => (SyntaxKind::LessThanLessThanToken, 2),
                Some(b'=') => (SyntaxKind::LessThanEqualsToken, 2),
                _ => (SyntaxKind::LessThanToken, 1),
            },
            // Always a single `>`; the parser merges with `re_scan_greater_token`.
            b'>' => (SyntaxKind::GreaterThanToken, 1),
            b'=' => match next {
                Some(b'=') if next2 == Some(b'=') => (SyntaxKind::EqualsEqualsEqualsToken, 3),
                Some(b'=') => (SyntaxKind::EqualsEqualsToken, 2),
                Some(b'>') => (SyntaxKind::EqualsGreaterThanToken, 2),
                _ => (SyntaxKind::EqualsToken, 1),
            },
            b'!' => match next {
                Some(b'=') if next2 == Some(b'=') => (SyntaxKind::ExclamationEqualsEqualsToken, 3),
                Some(b'=') => (SyntaxKind::ExclamationEqualsToken, 2),
                _ => (SyntaxKind::ExclamationToken, 1),
            },
            b'+' => match next {
                Some(b'+') => (SyntaxKind::PlusPlusToken, 2),
                Some(b'=') => (SyntaxKind::PlusEqualsToken, 2),
                _ => (SyntaxKind::PlusToken, 1),
            },
            b'-' => match next {
                Some(b'-') => (SyntaxKind::MinusMinusToken, 2),
                Some(b'=') => (SyntaxKind::MinusEqualsToken, 2),
                _ => (SyntaxKind::MinusToken, 1),
            },
            b'*' => match next {
                Some(b'*') if next2 == Some(b'=') => (SyntaxKind::AsteriskAsteriskEqualsToken, 3),
                Some(b'*') => (SyntaxKind::AsteriskAsteriskToken, 2),
                Some(b'=') => (SyntaxKind::AsteriskEqualsToken, 2),
                _ => (SyntaxKind::AsteriskToken, 1),
            },
            b'/' => match next {
                Some(b'=') => (SyntaxKind::SlashEqualsToken, 2),
                _ => (SyntaxKind::SlashToken, 1),
            },
            b'%' => match next {
                Some(b'=') => (SyntaxKind::PercentEqualsToken, 2),
                _ => (SyntaxKind::PercentToken, 1),
            },
            b'&' => match next {
                Some(b'&') if next2 == Some(b'=') => {
                    (SyntaxKind::AmpersandAmpersandEqualsToken, 3)
                }
                Some(b'&') => (SyntaxKind::AmpersandAmpersandToken, 2),
                Some(b'=') => (SyntaxKind::AmpersandEqualsToken, 2),
                _ => (SyntaxKind::AmpersandToken, 1),
            },
            b'|' => match next {
                Some(b'|') if next2 == Some(b'=') => (SyntaxKind::BarBarEqualsToken, 3),
                Some(b'|') => (SyntaxKind::BarBarToken, 2),
                Some(b'=') => (SyntaxKind::BarEqualsToken, 2),
                _ => (SyntaxKind::BarToken, 1),
            },
            b'^' => match next {
                Some(b'=') => (SyntaxKind::CaretEqualsToken, 2),
                _ => (SyntaxKind::CaretToken, 1),
            },
            _ => {
                let start = self.pos;
                self.pos += 1;
                self.report(LexicalErrorKind::UnexpectedCharacter, start);
                return SyntaxKind::Unknown;
            }
        };
        self.pos += len;
        kind
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Read a `\u` escape inside an identifier (cursor on the backslash).
    fn scan_identifier_escape(&mut self) -> Option<char> {
        let start = self.pos;
        if self.peek_byte(1) != Some(b'u') {
            self.pos += 1;
            self.report(LexicalErrorKind::InvalidIdentifierEscape, start);
            return None;
        }
        self.pos += 2;
        match self.scan_unicode_escape_body() {
            Some(cp) => char::from_u32(cp),
            None => {
                self.report(LexicalErrorKind::InvalidUnicodeEscapeSequence, start);
                None
            }
        }
    }

    /// Consume identifier characters into `out`; returns whether any escape was seen.
    fn scan_identifier_parts(&mut self, out: &mut String, mut first: bool) -> bool {
        let mut escaped = false;
        while self.pos < self.end {
            let b = self.bytes()[self.pos];
            if b.is_ascii() {
                if b == b'\\' {
                    let start = self.pos;
                    escaped = true;
                    if let Some(ch) = self.scan_identifier_escape() {
                        let valid = if first {
                            is_identifier_start(ch)
                        } else {
                            is_identifier_part(ch)
                        };
                        if !valid {
                            self.report(LexicalErrorKind::InvalidIdentifierEscape, start);
                        }
                        out.push(ch);
                    }
                } else if (first && is_ascii_identifier_start(b))
                    || (!first && is_ascii_identifier_part(b))
                {
                    out.push(b as char);
                    self.pos += 1;
                } else {
                    break;
                }
            } else {
                let Some(ch) = self.char_at(self.pos) else {
                    break;
                };
                let valid = if first {
                    is_identifier_start(ch)
                } else {
                    is_identifier_part(ch)
                };
                if !valid {
                    break;
                }
                out.push(ch);
                self.pos += ch.len_utf8();
            }
            first = false;
        }
        escaped
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let mut value = std::mem::take(&mut self.token_value);
        let escaped = self.scan_identifier_parts(&mut value, true);
        if escaped {
            self.token_flags |= TokenFlags::UNICODE_ESCAPE;
        }
        self.token_atom = self.interner.intern(&value);
        let kind = match text_to_keyword(&value) {
            // Escaped contextual keywords stay plain identifiers.
            Some(kind) if escaped && kind.is_contextual_keyword() => SyntaxKind::Identifier,
            Some(kind) => kind,
            None => SyntaxKind::Identifier,
        };
        self.token_value = value;
        kind
    }

    fn scan_private_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        let starts_name = match self.byte_at(self.pos) {
            Some(b'\\') => true,
            Some(b) if b.is_ascii() => is_ascii_identifier_start(b),
            Some(_) => self.char_at(self.pos).is_some_and(is_identifier_start),
            None => false,
        };
        if !starts_name {
            self.report(LexicalErrorKind::UnexpectedCharacter, start);
            return SyntaxKind::Unknown;
        }
        let mut value = String::new();
        if self.scan_identifier_parts(&mut value, true) {
            self.token_flags |= TokenFlags::UNICODE_ESCAPE;
        }
        self.token_atom = self.interner.intern(&value);
        self.token_value = value;
        SyntaxKind::PrivateIdentifier
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Consume digits of `radix`, validating `_` separators. Returns the digit
    /// count (separators excluded).
    fn scan_digits(&mut self, radix: u32, allow_separators: bool) -> usize {
        let mut count = 0;
        let mut prev_separator = false;
        while let Some(b) = self.byte_at(self.pos) {
            if b == b'_' {
                let start = self.pos;
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                let next_is_digit = self
                    .peek_byte(1)
                    .is_some_and(|n| digit_value(n, radix).is_some());
                if !allow_separators || count == 0 || prev_separator || !next_is_digit {
                    self.pos += 1;
                    self.report(LexicalErrorKind::InvalidNumericSeparator, start);
                    prev_separator = true;
                    continue;
                }
                prev_separator = true;
                self.pos += 1;
                continue;
            }
            if digit_value(b, radix).is_none() {
                break;
            }
            prev_separator = false;
            count += 1;
            self.pos += 1;
        }
        count
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let first = self.bytes()[self.pos];
        let mut kind = SyntaxKind::NumericLiteral;

        let radix_prefix = if first == b'0' {
            match self.peek_byte(1) {
                Some(b'x' | b'X') => Some((16, TokenFlags::HEX_SPECIFIER)),
                Some(b'o' | b'O') => Some((8, TokenFlags::OCTAL_SPECIFIER)),
                Some(b'b' | b'B') => Some((2, TokenFlags::BINARY_SPECIFIER)),
                _ => None,
            }
        } else {
            None
        };

        if let Some((radix, flag)) = radix_prefix {
            self.token_flags |= flag;
            self.pos += 2;
            let digits_start = self.pos;
            if self.scan_digits(radix, true) == 0 {
                self.report(LexicalErrorKind::InvalidNumericLiteral, start);
            }
            let digits: String = self.text[digits_start..self.pos]
                .chars()
                .filter(|&c| c != '_')
                .collect();
            self.number_value = parse_radix(&digits, radix);
            if self.byte_at(self.pos) == Some(b'n') {
                self.pos += 1;
                self.token_flags |= TokenFlags::BIG_INT;
                kind = SyntaxKind::BigIntLiteral;
            }
        } else if first == b'0' && self.peek_byte(1).is_some_and(|c| c.is_ascii_digit()) {
            // Legacy octal (`017`) or non-octal decimal (`089`).
            self.pos += 1;
            let digits_start = self.pos;
            while self.byte_at(self.pos).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
            let digits = &self.text[digits_start..self.pos];
            if digits.bytes().all(is_octal_digit) {
                self.token_flags |= TokenFlags::OCTAL;
                self.number_value = parse_radix(digits, 8);
            } else {
                self.token_flags |= TokenFlags::NON_OCTAL_DECIMAL;
                self.scan_decimal_tail();
                self.number_value = self.decimal_value(start);
            }
            if self.byte_at(self.pos) == Some(b'_') {
                let sep = self.pos;
                self.pos += 1;
                self.report(LexicalErrorKind::InvalidNumericSeparator, sep);
            }
        } else {
            let mut integer = true;
            if first == b'0' && self.peek_byte(1) == Some(b'_') {
                // `0_1`: no separator after a leading zero.
                self.pos += 1;
                self.report(LexicalErrorKind::InvalidNumericSeparator, self.pos);
                self.scan_digits(10, true);
            } else if first != b'.' {
                self.scan_digits(10, true);
            }
            if self.byte_at(self.pos) == Some(b'.') {
                integer = false;
                self.pos += 1;
                if self.byte_at(self.pos) == Some(b'_') {
                    let sep = self.pos;
                    self.pos += 1;
                    self.report(LexicalErrorKind::InvalidNumericSeparator, sep);
                }
                self.scan_digits(10, true);
            }
            if self.scan_exponent() {
                integer = false;
            }
            if integer && self.byte_at(self.pos) == Some(b'n') {
                self.pos += 1;
                self.token_flags |= TokenFlags::BIG_INT;
                kind = SyntaxKind::BigIntLiteral;
                self.number_value = self.decimal_value_range(start, self.pos - 1);
            } else {
                self.number_value = self.decimal_value(start);
            }
        }

        // `3in x` or `1_` style junk glued to the literal.
        let glued = match self.byte_at(self.pos) {
            Some(b'\\') => true,
            Some(b) if b.is_ascii() => is_ascii_identifier_start(b) || b.is_ascii_digit(),
            Some(_) => self.char_at(self.pos).is_some_and(is_identifier_start),
            None => false,
        };
        if glued {
            self.report(LexicalErrorKind::IdentifierAfterNumericLiteral, start);
        }

        self.token_value.push_str(&self.text[start..self.pos]);
        kind
    }

    /// Fraction and exponent after the integer part of a non-octal-decimal literal.
    fn scan_decimal_tail(&mut self) {
        if self.byte_at(self.pos) == Some(b'.') {
            self.pos += 1;
            self.scan_digits(10, true);
        }
        self.scan_exponent();
    }

    fn scan_exponent(&mut self) -> bool {
        if !matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
            return false;
        }
        let start = self.pos;
        self.pos += 1;
        if matches!(self.byte_at(self.pos), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        self.token_flags |= TokenFlags::SCIENTIFIC;
        if self.scan_digits(10, true) == 0 {
            self.report(LexicalErrorKind::InvalidNumericLiteral, start);
        }
        true
    }

    fn decimal_value(&self, start: usize) -> f64 {
        self.decimal_value_range(start, self.pos)
    }

    fn decimal_value_range(&self, start: usize, end: usize) -> f64 {
        let text = &self.text[start..end];
        let cleaned: std::borrow::Cow<'_, str> = if text.contains('_') {
            text.replace('_', "").into()
        } else {
            text.into()
        };
        cleaned.parse::<f64>().unwrap_or(f64::NAN)
    }

    // =========================================================================
    // Strings and escapes
    // =========================================================================

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            if self.pos >= self.end {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.report(LexicalErrorKind::UnterminatedString, start);
                break;
            }
            let b = self.bytes()[self.pos];
            if b == quote {
                self.pos += 1;
                break;
            }
            match b {
                b'\\' => {
                    self.pos += 1;
                    self.scan_escape_sequence(&mut value, false);
                }
                b'\n' | b'\r' => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.report(LexicalErrorKind::UnterminatedString, start);
                    break;
                }
                _ if b.is_ascii() => {
                    // Copy the plain ASCII run in one go.
                    let run_start = self.pos;
                    while let Some(c) = self.byte_at(self.pos) {
                        if c == quote || c == b'\\' || c == b'\n' || c == b'\r' || !c.is_ascii() {
                            break;
                        }
                        self.pos += 1;
                    }
                    value.push_str(&self.text[run_start..self.pos]);
                }
                _ => {
                    let ch = self.char_at(self.pos).unwrap_or('\u{FFFD}');
                    value.push(ch);
                    // U+2028/U+2029 are legal inside strings but still end a line.
                    if !self.consume_line_terminator() {
                        self.pos += ch.len_utf8().max(1);
                    }
                }
            }
        }
        self.token_value = value;
        SyntaxKind::StringLiteral
    }

    /// Decode one escape sequence; the cursor is just past the backslash.
    ///
    /// In templates invalid escapes only set `CONTAINS_INVALID_ESCAPE`, since a
    /// tagged template may still use the raw value.
    fn scan_escape_sequence(&mut self, out: &mut String, in_template: bool) {
        let escape_start = self.pos - 1;
        let Some(b) = self.byte_at(self.pos) else {
            return;
        };
        match b {
            b'n' => {
                out.push('\n');
                self.pos += 1;
            }
            b't' => {
                out.push('\t');
                self.pos += 1;
            }
            b'r' => {
                out.push('\r');
                self.pos += 1;
            }
            b'b' => {
                out.push('\u{0008}');
                self.pos += 1;
            }
            b'f' => {
                out.push('\u{000C}');
                self.pos += 1;
            }
            b'v' => {
                out.push('\u{000B}');
                self.pos += 1;
            }
            b'\n' | b'\r' => {
                self.consume_line_terminator();
            }
            b'0' if !self.peek_byte(1).is_some_and(|c| c.is_ascii_digit()) => {
                out.push('\0');
                self.pos += 1;
            }
            b'0'..=b'7' => {
                if in_template {
                    self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                    self.pos += 1;
                    return;
                }
                self.token_flags |= TokenFlags::OCTAL;
                let max_len = if b <= b'3' { 3 } else { 2 };
                let mut code = 0u32;
                let mut len = 0;
                while len < max_len {
                    match self.byte_at(self.pos) {
                        Some(d) if is_octal_digit(d) => {
                            code = code * 8 + u32::from(d - b'0');
                            self.pos += 1;
                            len += 1;
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            b'8' | b'9' => {
                self.pos += 1;
                if in_template {
                    self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                    return;
                }
                self.token_flags |= TokenFlags::NON_OCTAL_DECIMAL;
                out.push(b as char);
            }
            b'x' => {
                self.pos += 1;
                let hi = self.byte_at(self.pos).and_then(|c| digit_value(c, 16));
                let lo = self.peek_byte(1).and_then(|c| digit_value(c, 16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        self.pos += 2;
                        out.push(char::from_u32(hi * 16 + lo).unwrap_or('\u{FFFD}'));
                    }
                    _ => {
                        if in_template {
                            self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                        } else {
                            self.report(LexicalErrorKind::InvalidHexEscapeSequence, escape_start);
                        }
                    }
                }
            }
            b'u' => {
                self.pos += 1;
                match self.scan_unicode_escape_body() {
                    Some(cp) => self.push_code_point(out, cp),
                    None => {
                        if in_template {
                            self.token_flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
                        } else {
                            self.report(
                                LexicalErrorKind::InvalidUnicodeEscapeSequence,
                                escape_start,
                            );
                        }
                    }
                }
            }
            _ if b.is_ascii() => {
                out.push(b as char);
                self.pos += 1;
            }
            _ => {
                if self.consume_line_terminator() {
                    return;
                }
                let ch = self.char_at(self.pos).unwrap_or('\u{FFFD}');
                out.push(ch);
                self.pos += ch.len_utf8().max(1);
            }
        }
    }

    /// Body of a `\u` escape (cursor just past the `u`): `{hex+}` or four hex digits.
    fn scan_unicode_escape_body(&mut self) -> Option<u32> {
        if self.byte_at(self.pos) == Some(b'{') {
            let save = self.pos;
            self.pos += 1;
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(d) = self.byte_at(self.pos).and_then(|c| digit_value(c, 16)) {
                value = value.saturating_mul(16).saturating_add(d);
                digits += 1;
                self.pos += 1;
            }
            if digits == 0 || value > 0x10FFFF || self.byte_at(self.pos) != Some(b'}') {
                self.pos = save;
                return None;
            }
            self.pos += 1;
            return Some(value);
        }
        let mut value = 0;
        for i in 0..4 {
            let d = self.peek_byte(i).and_then(|c| digit_value(c, 16))?;
            value = value * 16 + d;
        }
        self.pos += 4;
        Some(value)
    }

    /// Push a decoded code point, pairing a high surrogate with a following
    /// `\uDC00`-`\uDFFF` escape. Unpaired surrogates become U+FFFD.
    fn push_code_point(&mut self, out: &mut String, cp: u32) {
        if (0xD800..0xDC00).contains(&cp)
            && self.byte_at(self.pos) == Some(b'\\')
            && self.peek_byte(1) == Some(b'u')
        {
            let save = self.pos;
            self.pos += 2;
            if let Some(low) = self.scan_unicode_escape_body() {
                if (0xDC00..0xE000).contains(&low) {
                    let combined = 0x10000 + ((cp - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                    return;
                }
            }
            self.pos = save;
        }
        out.push(char::from_u32(cp).unwrap_or('\u{FFFD}'));
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Scan template characters; the cursor is just past `` ` `` or `}`.
    fn scan_template(&mut self, starts_with_backtick: bool) -> SyntaxKind {
        let start = self.token_start;
        let mut cooked = String::new();
        let kind = loop {
            if self.pos >= self.end {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.report(LexicalErrorKind::UnterminatedTemplate, start);
                break if starts_with_backtick {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
            }
            let b = self.bytes()[self.pos];
            match b {
                b'`' => {
                    self.pos += 1;
                    break if starts_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                b'$' if self.peek_byte(1) == Some(b'{') => {
                    self.pos += 2;
                    break if starts_with_backtick {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                b'\\' => {
                    self.pos += 1;
                    self.scan_escape_sequence(&mut cooked, true);
                }
                b'\r' | b'\n' => {
                    cooked.push('\n');
                    self.consume_line_terminator();
                }
                _ if b.is_ascii() => {
                    cooked.push(b as char);
                    self.pos += 1;
                }
                _ => {
                    let ch = self.char_at(self.pos).unwrap_or('\u{FFFD}');
                    cooked.push(ch);
                    if !self.consume_line_terminator() {
                        self.pos += ch.len_utf8().max(1);
                    }
                }
            }
        };
        self.token_value = cooked;
        kind
    }

    /// Rescan a `}` as the continuation of a template.
    pub fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.pos = self.token_start + 1;
        self.line = self.token_start_line;
        self.line_start = self.token_start_line_start;
        let line_break = self.token_flags & TokenFlags::PRECEDING_LINE_BREAK;
        self.token_flags = line_break;
        self.reset_token();
        self.token = self.scan_template(false);
        tracing::trace!(kind = ?self.token, start = self.token_start, "re_scan_template_token");
        self.token
    }

    // =========================================================================
    // Regular expressions
    // =========================================================================

    /// Rescan the current `/` or `/=` as a regular-expression literal.
    pub fn re_scan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        let start = self.token_start;
        self.pos = start + 1;
        self.error = None;
        let mut in_class = false;
        let body_start = self.pos;
        let body_end;
        loop {
            let Some(b) = self.byte_at(self.pos) else {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.report(LexicalErrorKind::UnterminatedRegExp, start);
                body_end = self.pos;
                break;
            };
            if line_terminator_len(self.bytes(), self.pos) > 0 {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.report(LexicalErrorKind::UnterminatedRegExp, start);
                body_end = self.pos;
                break;
            }
            match b {
                b'\\' => {
                    self.pos += 1;
                    if self.pos >= self.end || line_terminator_len(self.bytes(), self.pos) > 0 {
                        continue;
                    }
                    let len = self.char_at(self.pos).map_or(1, char::len_utf8);
                    self.pos += len;
                }
                b'[' => {
                    in_class = true;
                    self.pos += 1;
                }
                b']' => {
                    in_class = false;
                    self.pos += 1;
                }
                b'/' if !in_class => {
                    body_end = self.pos;
                    self.pos += 1;
                    break;
                }
                _ => {
                    let len = self.char_at(self.pos).map_or(1, char::len_utf8);
                    self.pos += len;
                }
            }
        }
        self.token_value = self.text[body_start..body_end].to_string();

        if !self.token_flags.contains(TokenFlags::UNTERMINATED) {
            let flags_start = self.pos;
            let mut flags = String::new();
            let escaped = self.scan_identifier_parts(&mut flags, false);
            if escaped || !valid_regex_flags(&flags) {
                self.report(LexicalErrorKind::InvalidRegExpFlags, flags_start);
            }
            self.regex_flags = flags;
        }
        self.token = SyntaxKind::RegularExpressionLiteral;
        tracing::trace!(start, end = self.pos, "re_scan_slash_token");
        self.token
    }

    /// Merge a `>` with following `>` / `=` characters in operator position.
    pub fn re_scan_greater_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::GreaterThanToken || self.pos != self.token_start + 1 {
            return self.token;
        }
        let (kind, extra) = match (self.peek_byte(0), self.peek_byte(1), self.peek_byte(2)) {
            (Some(b'>'), Some(b'>'), Some(b'=')) => {
                (SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken, 3)
            }
            (Some(b'>'), Some(b'>'), _) => (SyntaxKind::GreaterThanGreaterThanGreaterThanToken, 2),
            (Some(b'>'), Some(b'='), _) => (SyntaxKind::GreaterThanGreaterThanEqualsToken, 2),
            (Some(b'>'), _, _) => (SyntaxKind::GreaterThanGreaterThanToken, 1),
            (Some(b'='), _, _) => (SyntaxKind::GreaterThanEqualsToken, 1),
            _ => (SyntaxKind::GreaterThanToken, 0),
        };
        self.pos += extra;
        self.token = kind;
        kind
    }

    // =========================================================================
    // JSX
    // =========================================================================

    /// Scan in JSX child position: text, `<` or `{`. Whitespace is not trivia here.
    pub fn scan_jsx_token(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::empty();
        self.reset_token();
        self.mark_token_start();
        self.tokens_scanned += 1;
        if self.pos >= self.end {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }
        match self.bytes()[self.pos] {
            b'<' => {
                self.pos += 1;
                self.token = SyntaxKind::LessThanToken;
            }
            b'{' => {
                self.pos += 1;
                self.token = SyntaxKind::OpenBraceToken;
            }
            _ => {
                let mut value = String::new();
                while let Some(b) = self.byte_at(self.pos) {
                    if b == b'<' || b == b'{' {
                        break;
                    }
                    if b == b'&' {
                        if let Some((ch, len)) = decode_entity(&self.text[self.pos..]) {
                            value.push(ch);
                            self.pos += len;
                            continue;
                        }
                    }
                    let start = self.pos;
                    if self.consume_line_terminator() {
                        value.push_str(&self.text[start..self.pos]);
                        continue;
                    }
                    let ch = self.char_at(self.pos).unwrap_or('\u{FFFD}');
                    value.push(ch);
                    self.pos += ch.len_utf8().max(1);
                }
                self.token_value = value;
                self.token = SyntaxKind::JsxText;
            }
        }
        self.token
    }

    /// Extend the current identifier or keyword with `-name` segments.
    pub fn scan_jsx_identifier(&mut self) -> SyntaxKind {
        if !self.token.is_identifier_or_keyword() {
            return self.token;
        }
        let mut extended = false;
        while self.byte_at(self.pos) == Some(b'-') {
            self.pos += 1;
            extended = true;
            while let Some(b) = self.byte_at(self.pos) {
                if b.is_ascii() {
                    if !is_ascii_identifier_part(b) && b != b'-' {
                        break;
                    }
                    self.pos += 1;
                } else {
                    match self.char_at(self.pos) {
                        Some(ch) if is_identifier_part(ch) => self.pos += ch.len_utf8(),
                        _ => break,
                    }
                }
            }
        }
        if extended {
            self.token_value = self.text[self.token_start..self.pos].to_string();
            self.token_atom = self.interner.intern(&self.token_value);
        }
        self.token = SyntaxKind::Identifier;
        self.token
    }

    /// Rescan a quoted JSX attribute value: no escapes, entities decoded.
    pub fn scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        let Some(quote @ (b'"' | b'\'')) = self.byte_at(self.token_start) else {
            return self.token;
        };
        let start = self.token_start;
        self.pos = start + 1;
        self.line = self.token_start_line;
        self.line_start = self.token_start_line_start;
        self.error = None;
        let mut value = String::new();
        loop {
            let Some(b) = self.byte_at(self.pos) else {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.report(LexicalErrorKind::UnterminatedString, start);
                break;
            };
            if b == quote {
                self.pos += 1;
                break;
            }
            if b == b'&' {
                if let Some((ch, len)) = decode_entity(&self.text[self.pos..]) {
                    value.push(ch);
                    self.pos += len;
                    continue;
                }
            }
            let run_start = self.pos;
            if self.consume_line_terminator() {
                value.push_str(&self.text[run_start..self.pos]);
                continue;
            }
            let ch = self.char_at(self.pos).unwrap_or('\u{FFFD}');
            value.push(ch);
            self.pos += ch.len_utf8().max(1);
        }
        self.token_value = value;
        self.token = SyntaxKind::StringLiteral;
        self.token
    }
}

/// Regex flags must be a duplicate-free subset of `dgimsuyv`, without both `u` and `v`.
pub fn valid_regex_flags(flags: &str) -> bool {
    let mut seen = 0u32;
    for ch in flags.chars() {
        let bit = match ch {
            'd' => 1,
            'g' => 2,
            'i' => 4,
            'm' => 8,
            's' => 16,
            'u' => 32,
            'y' => 64,
            'v' => 128,
            _ => return false,
        };
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    seen & (32 | 128) != (32 | 128)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if let Ok(value) = u64::from_str_radix(digits, radix) {
        return value as f64;
    }
    digits.bytes().fold(0.0, |acc, b| {
        acc * f64::from(radix) + f64::from(digit_value(b, radix).unwrap_or(0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_flag_validation() {
        assert!(valid_regex_flags(""));
        assert!(valid_regex_flags("gimsuyd"));
        assert!(valid_regex_flags("v"));
        assert!(!valid_regex_flags("gg"));
        assert!(!valid_regex_flags("uv"));
        assert!(!valid_regex_flags("x"));
    }

    #[test]
    fn radix_parse_handles_overflow() {
        assert_eq!(parse_radix("ff", 16), 255.0);
        assert_eq!(parse_radix("777", 8), 511.0);
        let big = parse_radix("ffffffffffffffffffff", 16);
        assert!(big > 1.0e24);
    }
}
