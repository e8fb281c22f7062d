//! Parser state: token handling, context flags and error helpers.
//!
//! The grammar itself lives in the `state_*` files as further `impl ParserState`
//! blocks. This file owns the pieces every production shares: the scanner
//! cursor, lookahead, context flags, the recursion guard, tolerant error
//! collection and identifier validation.

use std::sync::Arc;

use bitflags::bitflags;
use esz_common::limits::{
    MAX_PARSER_RECURSION_DEPTH, PARSER_STACK_RED_ZONE, PARSER_STACK_SEGMENT,
};
use esz_common::{
    Atom, Position, Span, atoms, diagnostic_codes, diagnostic_messages, format_message,
};
use esz_scanner::{ScannerState, SyntaxKind, Token, text_to_keyword};
use rustc_hash::FxHashSet;

use super::error::{ParseError, ParseResult};
use super::node::Identifier;
use super::options::ParseOptions;
use super::scope::{ExportTracker, LabelTracker, PrivateNameTracker, ScopeTracker};

bitflags! {
    /// Grammar parameters of the production being parsed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ContextFlags: u32 {
        const STRICT = 1 << 0;
        const MODULE = 1 << 1;
        const IN_FUNCTION = 1 << 2;
        const IN_ITERATION = 1 << 3;
        const IN_SWITCH = 1 << 4;
        /// `await` is an operator ([+Await]).
        const AWAIT = 1 << 5;
        /// `yield` is an operator ([+Yield]).
        const YIELD = 1 << 6;
        /// `in` is not a binary operator here (for-statement heads).
        const DISALLOW_IN = 1 << 7;
        const IN_PARAMETERS = 1 << 8;
        const IN_CLASS = 1 << 9;
        const IN_CLASS_FIELD_INIT = 1 << 10;
        const IN_STATIC_BLOCK = 1 << 11;
        const ALLOW_SUPER_PROPERTY = 1 << 12;
        const ALLOW_SUPER_CALL = 1 << 13;
        const ALLOW_NEW_TARGET = 1 << 14;
    }
}

impl ContextFlags {
    /// Flags a non-arrow function body never inherits.
    pub const FUNCTION_RESET: ContextFlags = ContextFlags::AWAIT
        .union(ContextFlags::YIELD)
        .union(ContextFlags::IN_ITERATION)
        .union(ContextFlags::IN_SWITCH)
        .union(ContextFlags::DISALLOW_IN)
        .union(ContextFlags::IN_PARAMETERS)
        .union(ContextFlags::IN_CLASS_FIELD_INIT)
        .union(ContextFlags::IN_STATIC_BLOCK)
        .union(ContextFlags::ALLOW_SUPER_PROPERTY)
        .union(ContextFlags::ALLOW_SUPER_CALL);
}

/// How the next token is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScanGoal {
    Normal,
    /// Text, `<` or `{` between JSX tags.
    JsxChild,
    /// Quoted JSX attribute value: no escapes.
    JsxAttributeValue,
}

/// The token after the current one, seen through a lookahead.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PeekedToken {
    pub kind: SyntaxKind,
    pub line_break: bool,
}

/// Facts about the expression being parsed that only become errors once it
/// is known not to be a pattern (or arrow parameters).
#[derive(Clone, Debug, Default)]
pub(crate) struct CoverState {
    /// First `{a = 1}` or duplicate `__proto__`.
    pub error: Option<ParseError>,
    /// First `await` (operator or identifier) since the last save.
    pub first_await: Option<Position>,
    /// First `yield` expression since the last save.
    pub first_yield: Option<Position>,
}

/// What the tolerant statement loop restores after a failed statement.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RecoveryPoint {
    flags: ContextFlags,
    labels_len: usize,
    scope_depth: usize,
    private_depth: usize,
    recursion_depth: u32,
}

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) options: ParseOptions,
    pub(crate) current_token: SyntaxKind,
    pub(crate) context_flags: ContextFlags,
    pub(crate) parse_diagnostics: Vec<ParseError>,
    pub(crate) recursion_depth: u32,
    /// End of the most recently consumed token; closes node spans.
    pub(crate) last_token_end: Position,
    pub(crate) scope: ScopeTracker,
    pub(crate) labels: LabelTracker,
    pub(crate) private_names: PrivateNameTracker,
    pub(crate) exports: ExportTracker,
    pub(crate) cover: CoverState,
    /// Start offsets of spread elements followed by a comma.
    pub(crate) invalid_rest_offsets: FxHashSet<u32>,
    /// Offset where an assignment expression, and so an arrow, may begin.
    pub(crate) potential_arrow_at: Option<u32>,
    pub(crate) tokens: Vec<Token>,
}

impl ParserState {
    pub fn new(source: impl Into<Arc<str>>, options: ParseOptions) -> Self {
        let mut scanner = ScannerState::new(source, options.comments);
        scanner.set_module_goal(options.is_module());
        let module = options.is_module();
        ParserState {
            scanner,
            options,
            current_token: SyntaxKind::Unknown,
            context_flags: ContextFlags::empty(),
            parse_diagnostics: Vec::new(),
            recursion_depth: 0,
            last_token_end: Position::START,
            scope: ScopeTracker::new(module),
            labels: LabelTracker::default(),
            private_names: PrivateNameTracker::default(),
            exports: ExportTracker::default(),
            cover: CoverState::default(),
            invalid_rest_offsets: FxHashSet::default(),
            potential_arrow_at: None,
            tokens: Vec::new(),
        }
    }

    /// Errors collected in tolerant mode.
    pub fn get_diagnostics(&self) -> &[ParseError] {
        &self.parse_diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.parse_diagnostics)
    }

    pub fn source_text(&self) -> &str {
        self.scanner.source_text()
    }

    // =========================================================================
    // Token Helpers
    // =========================================================================

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> Position {
        self.scanner.token_start_position()
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &str {
        self.scanner.get_token_value()
    }

    #[inline]
    pub(crate) fn token_atom(&self) -> Atom {
        self.scanner.get_token_atom()
    }

    /// Span of the current (not yet consumed) token.
    #[inline]
    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.token_pos(), self.scanner.token_end_position())
    }

    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    /// Current token is `kind` spelled without escapes. Used for contextual
    /// keywords (`of`, `async`, `get`, ...) that are identifiers otherwise.
    #[inline]
    pub(crate) fn is_contextual(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind && !self.scanner.has_unicode_escape()
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    pub(crate) fn finish(&self, start: Position) -> Span {
        Span::new(start, self.last_token_end)
    }

    /// Consume the current token and scan the next one in normal mode.
    pub fn next_token(&mut self) -> ParseResult<SyntaxKind> {
        self.advance(ScanGoal::Normal)
    }

    /// Consume the current token; the next one is JSX child content.
    pub(crate) fn next_jsx_child_token(&mut self) -> ParseResult<SyntaxKind> {
        self.advance(ScanGoal::JsxChild)
    }

    /// Consume the current token; the next one is a JSX attribute value.
    pub(crate) fn next_jsx_attribute_value_token(&mut self) -> ParseResult<SyntaxKind> {
        self.advance(ScanGoal::JsxAttributeValue)
    }

    fn advance(&mut self, goal: ScanGoal) -> ParseResult<SyntaxKind> {
        self.record_current_token();
        if self.current_token != SyntaxKind::Unknown {
            self.last_token_end = self.scanner.token_end_position();
        }
        loop {
            let kind = match goal {
                ScanGoal::Normal => self.scanner.scan(),
                ScanGoal::JsxChild => self.scanner.scan_jsx_token(),
                ScanGoal::JsxAttributeValue => match self.scanner.scan() {
                    SyntaxKind::StringLiteral => self.scanner.scan_jsx_attribute_value(),
                    kind => kind,
                },
            };
            self.current_token = kind;
            self.check_lexical_error()?;
            // The bad character was reported; tolerant mode steps over it.
            if kind == SyntaxKind::Unknown && self.options.tolerant {
                continue;
            }
            return Ok(kind);
        }
    }

    fn record_current_token(&mut self) {
        if !self.options.tokens
            || matches!(
                self.current_token,
                SyntaxKind::Unknown | SyntaxKind::EndOfFileToken
            )
        {
            return;
        }
        let token = Token::new(
            self.current_token,
            self.scanner.get_token_text().to_string(),
            self.token_span(),
            self.scanner.get_token_flags(),
        );
        self.tokens.push(token);
    }

    fn check_lexical_error(&mut self) -> ParseResult<()> {
        if let Some(error) = self.scanner.take_lexical_error() {
            self.tolerate(ParseError::lexical(&error))?;
        }
        Ok(())
    }

    /// Reinterpret the current `>` in operator position (`>>`, `>=`, ...).
    pub(crate) fn re_scan_greater(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_greater_token();
        self.current_token
    }

    /// Reinterpret the current `/` or `/=` as a regular expression.
    pub(crate) fn re_scan_slash(&mut self) -> ParseResult<SyntaxKind> {
        self.current_token = self.scanner.re_scan_slash_token();
        self.check_lexical_error()?;
        Ok(self.current_token)
    }

    /// Reinterpret the current `}` as a template continuation.
    pub(crate) fn re_scan_template(&mut self) -> ParseResult<SyntaxKind> {
        self.current_token = self.scanner.re_scan_template_token();
        self.check_lexical_error()?;
        Ok(self.current_token)
    }

    /// Extend the current name with JSX `-` segments.
    pub(crate) fn re_scan_jsx_identifier(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.scan_jsx_identifier();
        self.current_token
    }

    /// Consume `kind` or fail with an unexpected-token error.
    pub fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.current_token != kind {
            return Err(self.unexpected_token_error());
        }
        self.check_keyword_escape()?;
        self.next_token()?;
        Ok(())
    }

    /// Consume `kind` if it is the current token.
    pub fn parse_optional(&mut self, kind: SyntaxKind) -> ParseResult<bool> {
        if self.current_token != kind {
            return Ok(false);
        }
        self.check_keyword_escape()?;
        self.next_token()?;
        Ok(true)
    }

    /// Consume a keyword the caller already matched on.
    pub(crate) fn consume_keyword(&mut self) -> ParseResult<()> {
        self.check_keyword_escape()?;
        self.next_token()?;
        Ok(())
    }

    fn check_keyword_escape(&mut self) -> ParseResult<()> {
        if self.current_token.is_keyword() && self.scanner.has_unicode_escape() {
            let pos = self.token_pos();
            self.tolerate_at(
                pos,
                diagnostic_codes::KEYWORD_ESCAPED,
                diagnostic_messages::KEYWORD_ESCAPED,
            )?;
        }
        Ok(())
    }

    /// Automatic semicolon insertion: an explicit `;`, or `}` / end of
    /// input, or a line break before the current token.
    pub fn parse_semicolon(&mut self) -> ParseResult<()> {
        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token()?;
            return Ok(());
        }
        if self.can_parse_semicolon() {
            return Ok(());
        }
        Err(self.unexpected_token_error())
    }

    pub fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.current_token,
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.has_preceding_line_break()
    }

    // =========================================================================
    // Lookahead
    // =========================================================================

    /// Run `f` speculatively; the scanner and token stream are rewound after.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.scanner.save_state();
        let token = self.current_token;
        let last_token_end = self.last_token_end;
        let tokens_len = self.tokens.len();
        let diagnostics_len = self.parse_diagnostics.len();

        let result = f(self);

        self.scanner.restore_state(snapshot);
        self.current_token = token;
        self.last_token_end = last_token_end;
        self.tokens.truncate(tokens_len);
        self.parse_diagnostics.truncate(diagnostics_len);
        result
    }

    /// The token after the current one.
    pub(crate) fn peek_token(&mut self) -> PeekedToken {
        self.look_ahead(|p| {
            let kind = p.scanner.scan();
            PeekedToken {
                kind,
                line_break: p.scanner.has_preceding_line_break(),
            }
        })
    }

    // =========================================================================
    // Context Flags
    // =========================================================================

    #[inline]
    pub(crate) fn in_context(&self, flag: ContextFlags) -> bool {
        self.context_flags.contains(flag)
    }

    #[inline]
    pub(crate) fn is_strict(&self) -> bool {
        self.context_flags.contains(ContextFlags::STRICT)
    }

    #[inline]
    pub(crate) fn is_module(&self) -> bool {
        self.context_flags.contains(ContextFlags::MODULE)
    }

    /// Run `f` with `set` added and `clear` removed; the previous flags come
    /// back afterwards, whether `f` succeeds or not.
    pub(crate) fn with_context<T>(
        &mut self,
        set: ContextFlags,
        clear: ContextFlags,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.context_flags;
        self.context_flags = (saved - clear) | set;
        let result = f(self);
        self.context_flags = saved;
        result
    }

    /// Parse with `in` allowed as an operator again (inside brackets,
    /// parentheses, braces).
    pub(crate) fn allow_in<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.with_context(ContextFlags::empty(), ContextFlags::DISALLOW_IN, f)
    }

    // =========================================================================
    // Recursion Guard
    // =========================================================================

    pub(crate) fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= MAX_PARSER_RECURSION_DEPTH {
            let pos = self.token_pos();
            return Err(self.error_at(
                pos,
                diagnostic_codes::TOO_DEEPLY_NESTED,
                diagnostic_messages::TOO_DEEPLY_NESTED,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    pub(crate) fn with_recursion<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.enter_recursion()?;
        let result =
            stacker::maybe_grow(PARSER_STACK_RED_ZONE, PARSER_STACK_SEGMENT, || f(self));
        self.exit_recursion();
        result
    }

    /// Run a recursive walk over an already-built subtree on enough stack.
    /// Its depth is bounded by the nesting the recursion guard admitted.
    pub(crate) fn with_stack<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        stacker::maybe_grow(PARSER_STACK_RED_ZONE, PARSER_STACK_SEGMENT, || f(self))
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub(crate) fn error_at(
        &self,
        pos: Position,
        code: u32,
        description: impl Into<String>,
    ) -> ParseError {
        ParseError::syntax(code, description.into(), pos)
    }

    /// Record `error` in tolerant mode; otherwise hand it back to abort.
    /// Internal errors are never tolerated.
    pub(crate) fn tolerate(&mut self, error: ParseError) -> ParseResult<()> {
        if self.options.tolerant && !error.is_internal() {
            self.parse_diagnostics.push(error);
            Ok(())
        } else {
            Err(error)
        }
    }

    pub(crate) fn tolerate_at(
        &mut self,
        pos: Position,
        code: u32,
        description: impl Into<String>,
    ) -> ParseResult<()> {
        let error = self.error_at(pos, code, description);
        self.tolerate(error)
    }

    /// The error for an unexpected current token, worded by token class.
    pub(crate) fn unexpected_token_error(&self) -> ParseError {
        use diagnostic_codes as codes;
        use diagnostic_messages as messages;

        let pos = self.token_pos();
        let kind = self.current_token;
        let (code, description) = match kind {
            SyntaxKind::EndOfFileToken => (codes::UNEXPECTED_EOS, messages::UNEXPECTED_EOS.into()),
            SyntaxKind::Unknown => (
                codes::INVALID_OR_UNEXPECTED_TOKEN,
                messages::INVALID_OR_UNEXPECTED_TOKEN.into(),
            ),
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                (codes::UNEXPECTED_NUMBER, messages::UNEXPECTED_NUMBER.into())
            }
            SyntaxKind::StringLiteral => {
                (codes::UNEXPECTED_STRING, messages::UNEXPECTED_STRING.into())
            }
            SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier => (
                codes::UNEXPECTED_IDENTIFIER,
                messages::UNEXPECTED_IDENTIFIER.into(),
            ),
            kind if kind.is_template() => {
                (codes::UNEXPECTED_TEMPLATE, messages::UNEXPECTED_TEMPLATE.into())
            }
            kind if kind.is_keyword() && self.scanner.has_unicode_escape() => {
                (codes::KEYWORD_ESCAPED, messages::KEYWORD_ESCAPED.into())
            }
            SyntaxKind::EnumKeyword => {
                (codes::UNEXPECTED_RESERVED, messages::UNEXPECTED_RESERVED.into())
            }
            kind if kind.is_strict_mode_reserved_word() && self.is_strict() => (
                codes::UNEXPECTED_STRICT_RESERVED,
                messages::UNEXPECTED_STRICT_RESERVED.into(),
            ),
            kind if kind.is_strict_mode_reserved_word() || kind.is_contextual_keyword() => (
                codes::UNEXPECTED_IDENTIFIER,
                messages::UNEXPECTED_IDENTIFIER.into(),
            ),
            _ => (
                codes::UNEXPECTED_TOKEN,
                format_message(messages::UNEXPECTED_TOKEN, &[self.scanner.get_token_text()]),
            ),
        };
        ParseError::syntax(code, description, pos)
    }

    // =========================================================================
    // Cover Grammar
    // =========================================================================

    /// Parse something that can never become a pattern: pending cover errors
    /// raised inside it are reported.
    pub(crate) fn isolate_cover_grammar<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.cover.error.take();
        let result = f(self);
        let inner = std::mem::replace(&mut self.cover.error, saved);
        let value = result?;
        if let Some(error) = inner {
            self.tolerate(error)?;
        }
        Ok(value)
    }

    /// Parse something that may still be reinterpreted as a pattern: its
    /// cover errors stay pending for the caller.
    pub(crate) fn inherit_cover_grammar<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.cover.error.take();
        let result = f(self);
        let inner = self.cover.error.take();
        self.cover.error = saved.or(inner);
        result
    }

    /// Report the pending cover error: the expression stayed an expression.
    pub(crate) fn raise_cover_error(&mut self) -> ParseResult<()> {
        if let Some(error) = self.cover.error.take() {
            self.tolerate(error)?;
        }
        Ok(())
    }

    pub(crate) fn set_cover_error(&mut self, error: ParseError) {
        if self.cover.error.is_none() {
            self.cover.error = Some(error);
        }
    }

    /// Discard the pending cover error: the expression became a pattern.
    pub(crate) fn clear_cover_error(&mut self) {
        self.cover.error = None;
    }

    pub(crate) fn note_await(&mut self, pos: Position) {
        self.cover.first_await.get_or_insert(pos);
    }

    pub(crate) fn note_yield(&mut self, pos: Position) {
        self.cover.first_yield.get_or_insert(pos);
    }

    /// Start tracking `await`/`yield` for a region that may become arrow
    /// parameters. Returns the outer region's facts.
    pub(crate) fn begin_parameter_cover(&mut self) -> (Option<Position>, Option<Position>) {
        (self.cover.first_await.take(), self.cover.first_yield.take())
    }

    /// Finish a region begun with `begin_parameter_cover`. If it became arrow
    /// parameters its facts are checked by the caller and dropped here;
    /// otherwise they merge into the outer region.
    pub(crate) fn end_parameter_cover(
        &mut self,
        outer: (Option<Position>, Option<Position>),
        became_parameters: bool,
    ) {
        let (outer_await, outer_yield) = outer;
        if became_parameters {
            self.cover.first_await = outer_await;
            self.cover.first_yield = outer_yield;
        } else {
            self.cover.first_await = outer_await.or(self.cover.first_await);
            self.cover.first_yield = outer_yield.or(self.cover.first_yield);
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    pub(crate) fn recovery_point(&self) -> RecoveryPoint {
        RecoveryPoint {
            flags: self.context_flags,
            labels_len: self.labels.len(),
            scope_depth: self.scope.depth(),
            private_depth: self.private_names.depth(),
            recursion_depth: self.recursion_depth,
        }
    }

    pub(crate) fn restore_recovery_point(&mut self, point: RecoveryPoint) {
        self.context_flags = point.flags;
        self.labels.truncate(point.labels_len);
        self.scope.truncate(point.scope_depth);
        self.private_names.truncate(point.private_depth);
        self.recursion_depth = point.recursion_depth;
        self.cover = CoverState::default();
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Tokens that can name a binding or reference, subject to context checks.
    pub(crate) fn is_identifier_token(&self) -> bool {
        let kind = self.current_token;
        kind == SyntaxKind::Identifier
            || kind.is_strict_mode_reserved_word()
            || kind.is_contextual_keyword()
    }

    /// Build an Identifier from the current token without consuming it.
    pub(crate) fn identifier_from_token(&self) -> Identifier {
        Identifier {
            span: self.token_span(),
            name: self.token_value().to_string(),
            atom: self.token_atom(),
        }
    }

    /// Any identifier name, keywords included (property names, `import`
    /// specifiers, meta properties).
    pub(crate) fn parse_identifier_name(&mut self) -> ParseResult<Identifier> {
        if !self.current_token.is_identifier_or_keyword() {
            return Err(self.unexpected_token_error());
        }
        let id = self.identifier_from_token();
        self.next_token()?;
        Ok(id)
    }

    pub(crate) fn parse_identifier_reference(&mut self) -> ParseResult<Identifier> {
        if !self.is_identifier_token() {
            return Err(self.unexpected_token_error());
        }
        let id = self.identifier_from_token();
        self.next_token()?;
        self.check_identifier_reference(&id)?;
        Ok(id)
    }

    pub(crate) fn parse_binding_identifier(&mut self) -> ParseResult<Identifier> {
        if !self.is_identifier_token() {
            return Err(self.unexpected_token_error());
        }
        let id = self.identifier_from_token();
        self.next_token()?;
        self.check_binding_identifier(&id)?;
        Ok(id)
    }

    pub(crate) fn check_identifier_reference(&mut self, id: &Identifier) -> ParseResult<()> {
        self.check_identifier(id, false)
    }

    pub(crate) fn check_binding_identifier(&mut self, id: &Identifier) -> ParseResult<()> {
        self.check_identifier(id, true)
    }

    fn check_identifier(&mut self, id: &Identifier, binding: bool) -> ParseResult<()> {
        use diagnostic_codes as codes;
        use diagnostic_messages as messages;

        let pos = id.span.start;
        if id.atom == atoms::AWAIT {
            self.note_await(pos);
        }
        if let Some(keyword) = text_to_keyword(&id.name) {
            if keyword.is_reserved_word() {
                return self.tolerate_at(
                    pos,
                    codes::UNEXPECTED_RESERVED,
                    messages::UNEXPECTED_RESERVED,
                );
            }
            if keyword.is_strict_mode_reserved_word() && self.is_strict() {
                let (code, message) = if binding {
                    (codes::STRICT_RESERVED_WORD, messages::STRICT_RESERVED_WORD)
                } else {
                    (
                        codes::UNEXPECTED_STRICT_RESERVED,
                        messages::UNEXPECTED_STRICT_RESERVED,
                    )
                };
                return self.tolerate_at(pos, code, message);
            }
        }
        match id.atom {
            atoms::YIELD if self.in_context(ContextFlags::YIELD) => {
                self.tolerate_at(
                    pos,
                    codes::UNEXPECTED_RESERVED,
                    messages::UNEXPECTED_RESERVED,
                )?;
            }
            atoms::AWAIT
                if self.context_flags.intersects(
                    ContextFlags::AWAIT | ContextFlags::MODULE | ContextFlags::IN_STATIC_BLOCK,
                ) =>
            {
                self.tolerate_at(
                    pos,
                    codes::UNEXPECTED_RESERVED,
                    messages::UNEXPECTED_RESERVED,
                )?;
            }
            atoms::ARGUMENTS
                if self.context_flags.intersects(
                    ContextFlags::IN_CLASS_FIELD_INIT | ContextFlags::IN_STATIC_BLOCK,
                ) =>
            {
                self.tolerate_at(
                    pos,
                    codes::ARGUMENTS_IN_CLASS_INIT,
                    messages::ARGUMENTS_IN_CLASS_INIT,
                )?;
            }
            _ => {}
        }
        if binding && self.is_strict() && is_eval_or_arguments(id.atom) {
            self.tolerate_at(
                pos,
                codes::STRICT_EVAL_ARGUMENTS,
                messages::STRICT_EVAL_ARGUMENTS,
            )?;
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn is_eval_or_arguments(atom: Atom) -> bool {
    atom == atoms::EVAL || atom == atoms::ARGUMENTS
}
