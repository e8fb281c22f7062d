//! Parser state - program and statement parsing methods

use esz_common::{
    Position, Span, Spanned, atoms, diagnostic_codes, diagnostic_messages, format_message,
};
use esz_scanner::{SyntaxKind, TokenFlags};

use super::error::ParseResult;
use super::node::{
    BlockStatement, BreakStatement, CatchClause, ContinueStatement, DebuggerStatement,
    DoWhileStatement, EmptyStatement, Expression, ExpressionStatement, ForInStatement, ForInit,
    ForOfStatement, ForStatement, ForTarget, IfStatement, LabeledStatement, Literal,
    LiteralValue, Pattern, Program, ReturnStatement, SequenceExpression, Statement,
    SwitchCase, SwitchStatement, ThrowStatement, TryStatement, VariableDeclaration,
    VariableKind, WhileStatement, WithStatement,
};
use super::node_list::NodeList;
use super::scope::{LabelKind, ScopeKind};
use super::state::{ContextFlags, ParserState};
use super::state_declarations::BindingKind;

/// Where a statement appears. Declarations are only allowed in lists; the
/// sloppy-mode function exceptions depend on the exact position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StatementContext {
    /// Statement list item (block, body, case clause).
    List,
    /// Consequent or alternate of an `if`.
    If,
    /// Body of a label that is itself in a list.
    Label,
    /// Any other single-statement position (loop bodies, `with`, nested labels).
    Nested,
}

impl StatementContext {
    fn for_label_body(self) -> StatementContext {
        match self {
            StatementContext::List | StatementContext::Label => StatementContext::Label,
            StatementContext::If | StatementContext::Nested => StatementContext::Nested,
        }
    }
}

impl ParserState {
    // =========================================================================
    // Parse Methods - Program
    // =========================================================================

    /// Parse the whole source as a script or module.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let source_type = self.options.source_type;
        if source_type.is_module() {
            self.context_flags |= ContextFlags::STRICT | ContextFlags::MODULE | ContextFlags::AWAIT;
        }
        tracing::debug!(
            source_type = ?source_type,
            len = self.source_text().len(),
            "parse_program start"
        );

        self.scope.enter(ScopeKind::Top);
        self.next_token()?;

        let mut body = NodeList::new();
        self.parse_directive_prologue(&mut body)?;
        self.parse_statement_list_items(SyntaxKind::EndOfFileToken, &mut body)?;

        if source_type.is_module() {
            for (atom, name, pos) in self.exports.take_pending_locals() {
                if !self.scope.is_declared_at_top(atom) {
                    self.tolerate_at(
                        pos,
                        diagnostic_codes::UNDECLARED_EXPORT,
                        format_message(diagnostic_messages::UNDECLARED_EXPORT, &[&name]),
                    )?;
                }
            }
        }
        self.scope.exit();

        let end = self.token_pos();
        let comments = self.scanner.take_comments().into_boxed_slice();
        let tokens = std::mem::take(&mut self.tokens).into_boxed_slice();
        tracing::debug!(
            statements = body.len(),
            comments = comments.len(),
            tokens = tokens.len(),
            errors = self.parse_diagnostics.len(),
            "parse_program finish"
        );

        Ok(Program {
            span: Span::new(Position::START, end),
            source_type,
            body: body.freeze(),
            comments,
            tokens,
        })
    }

    // =========================================================================
    // Parse Methods - Statement Lists
    // =========================================================================

    /// Parse statement list items until `end` (not consumed) or end of input.
    pub(crate) fn parse_statement_list_items(
        &mut self,
        end: SyntaxKind,
        list: &mut NodeList<Statement>,
    ) -> ParseResult<()> {
        while !self.is_token(end) && !self.is_token(SyntaxKind::EndOfFileToken) {
            if let Some(statement) = self.parse_statement_list_item_recovering()? {
                list.add(statement);
            }
        }
        Ok(())
    }

    /// Parse one statement list item. In tolerant mode a failed item is
    /// recorded, the parser state is rolled back and tokens are skipped to
    /// the next plausible statement boundary; `None` is returned then.
    fn parse_statement_list_item_recovering(&mut self) -> ParseResult<Option<Statement>> {
        if !self.options.tolerant {
            return self.parse_statement_list_item().map(Some);
        }
        let point = self.recovery_point();
        let start = self.scanner.get_token_start();
        match self.parse_statement_list_item() {
            Ok(statement) => Ok(Some(statement)),
            Err(error) if error.is_internal() => Err(error),
            Err(error) => {
                tracing::trace!(
                    code = error.code,
                    index = error.index,
                    "recovering from statement error"
                );
                self.parse_diagnostics.push(error);
                self.restore_recovery_point(point);
                self.skip_to_statement_boundary(start)?;
                Ok(None)
            }
        }
    }

    fn skip_to_statement_boundary(&mut self, failed_start: usize) -> ParseResult<()> {
        if self.scanner.get_token_start() == failed_start
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            self.next_token()?;
        }
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken | SyntaxKind::CloseBraceToken => return Ok(()),
                SyntaxKind::SemicolonToken => {
                    self.next_token()?;
                    return Ok(());
                }
                kind if self.has_preceding_line_break() && starts_statement(kind) => {
                    return Ok(());
                }
                _ => {
                    self.next_token()?;
                }
            }
        }
    }

    /// Parse the directive prologue of a body into `list`. Returns the
    /// position of the `"use strict"` directive, if there is one.
    pub(crate) fn parse_directive_prologue(
        &mut self,
        list: &mut NodeList<Statement>,
    ) -> ParseResult<Option<Position>> {
        let mut first_octal: Option<Position> = None;
        let mut use_strict = None;

        while self.is_token(SyntaxKind::StringLiteral) {
            let pos = self.token_pos();
            let octal = self
                .scanner
                .get_token_flags()
                .intersects(TokenFlags::OCTAL | TokenFlags::NON_OCTAL_DECIMAL);

            let Some(statement) = self.parse_statement_list_item_recovering()? else {
                break;
            };
            let Statement::Expression(mut statement) = statement else {
                list.add(statement);
                break;
            };
            let Expression::Literal(Literal {
                value: LiteralValue::String(_),
                raw,
                ..
            }) = &statement.expression
            else {
                list.add(Statement::Expression(statement));
                break;
            };

            let inner = raw.get(1..).unwrap_or_default();
            let directive = inner
                .strip_suffix(['"', '\''])
                .unwrap_or(inner)
                .to_string();

            if directive == "use strict" {
                if !self.is_strict() {
                    if let Some(octal_pos) = first_octal {
                        self.tolerate_at(
                            octal_pos,
                            diagnostic_codes::STRICT_OCTAL_ESCAPE,
                            diagnostic_messages::STRICT_OCTAL_ESCAPE,
                        )?;
                    }
                }
                self.context_flags |= ContextFlags::STRICT;
                use_strict.get_or_insert(pos);
            } else if octal && first_octal.is_none() {
                first_octal = Some(pos);
            }

            statement.directive = Some(directive);
            list.add(Statement::Expression(statement));
        }
        Ok(use_strict)
    }

    // =========================================================================
    // Parse Methods - Statements
    // =========================================================================

    pub(crate) fn parse_statement_list_item(&mut self) -> ParseResult<Statement> {
        self.with_recursion(|p| p.parse_statement_list_item_inner())
    }

    fn parse_statement_list_item_inner(&mut self) -> ParseResult<Statement> {
        match self.token() {
            SyntaxKind::FunctionKeyword => Ok(Statement::FunctionDeclaration(
                self.parse_function_declaration(false, false)?,
            )),
            SyntaxKind::ClassKeyword => Ok(Statement::ClassDeclaration(
                self.parse_class_declaration(false)?,
            )),
            SyntaxKind::ConstKeyword => self.parse_lexical_declaration(VariableKind::Const),
            SyntaxKind::LetKeyword if self.look_ahead_is_let_declaration(true) => {
                self.parse_lexical_declaration(VariableKind::Let)
            }
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => Ok(
                Statement::FunctionDeclaration(self.parse_function_declaration(true, false)?),
            ),
            SyntaxKind::ImportKeyword if !self.look_ahead_is_import_call_or_meta() => {
                self.check_module_item(true)?;
                self.parse_import_declaration()
            }
            SyntaxKind::ExportKeyword => {
                self.check_module_item(false)?;
                self.parse_export_declaration()
            }
            _ => self.parse_statement(StatementContext::List),
        }
    }

    /// `import` / `export` only appear at the top level of a module.
    fn check_module_item(&mut self, import: bool) -> ParseResult<()> {
        let pos = self.token_pos();
        if !self.is_module() {
            let (code, message) = if import {
                (diagnostic_codes::ILLEGAL_IMPORT, diagnostic_messages::ILLEGAL_IMPORT)
            } else {
                (diagnostic_codes::ILLEGAL_EXPORT, diagnostic_messages::ILLEGAL_EXPORT)
            };
            return Err(self.error_at(pos, code, message));
        }
        if self.scope.depth() != 1 {
            return Err(self.error_at(
                pos,
                diagnostic_codes::MODULE_ITEM_NOT_TOP_LEVEL,
                diagnostic_messages::MODULE_ITEM_NOT_TOP_LEVEL,
            ));
        }
        Ok(())
    }

    pub(crate) fn parse_statement(&mut self, ctx: StatementContext) -> ParseResult<Statement> {
        tracing::trace!(kind = ?self.token(), offset = self.token_pos().offset, "parse_statement");
        self.with_recursion(|p| p.parse_statement_inner(ctx))
    }

    fn parse_statement_inner(&mut self, ctx: StatementContext) -> ParseResult<Statement> {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::OpenBraceToken => Ok(Statement::Block(self.parse_block_statement(true)?)),
            SyntaxKind::SemicolonToken => {
                self.next_token()?;
                Ok(Statement::Empty(EmptyStatement {
                    span: self.finish(pos),
                }))
            }
            SyntaxKind::VarKeyword => {
                let mut declaration = self.parse_variable_declaration_list(VariableKind::Var, false)?;
                self.parse_semicolon()?;
                declaration.span = self.finish(pos);
                Ok(Statement::VariableDeclaration(declaration))
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_while_statement(),
            SyntaxKind::ContinueKeyword => self.parse_continue_statement(),
            SyntaxKind::BreakKeyword => self.parse_break_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::WithKeyword => self.parse_with_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::DebuggerKeyword => {
                self.consume_keyword()?;
                self.parse_semicolon()?;
                Ok(Statement::Debugger(DebuggerStatement {
                    span: self.finish(pos),
                }))
            }
            SyntaxKind::FunctionKeyword => self.parse_function_in_single_statement(ctx),
            SyntaxKind::ClassKeyword => Err(self.unexpected_token_error()),
            SyntaxKind::ConstKeyword => Err(self.lexical_in_single_statement(pos)),
            SyntaxKind::LetKeyword if self.look_ahead_is_let_declaration(false) => {
                Err(self.lexical_in_single_statement(pos))
            }
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => Err(self.error_at(
                pos,
                diagnostic_codes::ASYNC_FUNCTION_IN_SINGLE_STATEMENT,
                diagnostic_messages::ASYNC_FUNCTION_IN_SINGLE_STATEMENT,
            )),
            SyntaxKind::ImportKeyword if !self.look_ahead_is_import_call_or_meta() => {
                self.check_module_item(true)?;
                Err(self.error_at(
                    pos,
                    diagnostic_codes::MODULE_ITEM_NOT_TOP_LEVEL,
                    diagnostic_messages::MODULE_ITEM_NOT_TOP_LEVEL,
                ))
            }
            SyntaxKind::ExportKeyword => {
                self.check_module_item(false)?;
                Err(self.error_at(
                    pos,
                    diagnostic_codes::MODULE_ITEM_NOT_TOP_LEVEL,
                    diagnostic_messages::MODULE_ITEM_NOT_TOP_LEVEL,
                ))
            }
            _ => self.parse_expression_or_labeled_statement(ctx),
        }
    }

    fn lexical_in_single_statement(&self, pos: Position) -> super::error::ParseError {
        self.error_at(
            pos,
            diagnostic_codes::LEXICAL_IN_SINGLE_STATEMENT,
            diagnostic_messages::LEXICAL_IN_SINGLE_STATEMENT,
        )
    }

    /// `if (a) function f() {}` and `l: function f() {}` are allowed in
    /// sloppy mode for plain functions; everything else is an error.
    fn parse_function_in_single_statement(
        &mut self,
        ctx: StatementContext,
    ) -> ParseResult<Statement> {
        let pos = self.token_pos();
        let annex_b = !self.is_strict()
            && matches!(ctx, StatementContext::If | StatementContext::Label);
        if !annex_b {
            return Err(self.error_at(
                pos,
                diagnostic_codes::STRICT_FUNCTION,
                diagnostic_messages::STRICT_FUNCTION,
            ));
        }
        if self.peek_token().kind == SyntaxKind::AsteriskToken {
            return Err(self.error_at(
                pos,
                diagnostic_codes::GENERATOR_IN_SINGLE_STATEMENT,
                diagnostic_messages::GENERATOR_IN_SINGLE_STATEMENT,
            ));
        }
        Ok(Statement::FunctionDeclaration(
            self.parse_hanging_function_declaration()?,
        ))
    }

    /// `let` / `const` declaration in a statement list.
    fn parse_lexical_declaration(&mut self, kind: VariableKind) -> ParseResult<Statement> {
        let pos = self.token_pos();
        let mut declaration = self.parse_variable_declaration_list(kind, false)?;
        self.parse_semicolon()?;
        declaration.span = self.finish(pos);
        Ok(Statement::VariableDeclaration(declaration))
    }

    /// Parse `{ ... }`. `new_scope` is false for bodies that share the scope
    /// of their parameters (catch clauses).
    pub(crate) fn parse_block_statement(&mut self, new_scope: bool) -> ParseResult<BlockStatement> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        if new_scope {
            self.scope.enter(ScopeKind::Block);
        }
        let mut body = NodeList::new();
        self.parse_statement_list_items(SyntaxKind::CloseBraceToken, &mut body)?;
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        if new_scope {
            self.scope.exit();
        }
        Ok(BlockStatement {
            span: self.finish(pos),
            body: body.freeze(),
        })
    }

    fn parse_expression_or_labeled_statement(
        &mut self,
        ctx: StatementContext,
    ) -> ParseResult<Statement> {
        let pos = self.token_pos();
        let expression = self.parse_expression()?;

        if let Expression::Identifier(label) = &expression {
            if self.is_token(SyntaxKind::ColonToken) {
                let label = label.clone();
                self.next_token()?;
                return self.parse_labeled_body(pos, label, ctx);
            }
        }

        self.parse_semicolon()?;
        Ok(Statement::Expression(ExpressionStatement {
            span: self.finish(pos),
            expression,
            directive: None,
        }))
    }

    fn parse_labeled_body(
        &mut self,
        pos: Position,
        label: super::node::Identifier,
        ctx: StatementContext,
    ) -> ParseResult<Statement> {
        let kind = match self.token() {
            SyntaxKind::ForKeyword | SyntaxKind::WhileKeyword | SyntaxKind::DoKeyword => {
                LabelKind::Iteration
            }
            _ => LabelKind::Statement,
        };
        let body_start = self.token_pos().offset;
        let pushed = self
            .labels
            .push_label(label.atom, kind, label.span.start.offset, body_start);
        if !pushed {
            self.tolerate_at(
                label.span.start,
                diagnostic_codes::LABEL_REDECLARATION,
                format_message(diagnostic_messages::LABEL_REDECLARATION, &[&label.name]),
            )?;
        }

        let body = self.parse_statement(ctx.for_label_body());
        if pushed {
            self.labels.pop_label();
        }
        let body = body?;

        Ok(Statement::Labeled(LabeledStatement {
            span: self.finish(pos),
            label,
            body: Box::new(body),
        }))
    }

    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let test = self.allow_in(|p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let consequent = self.parse_statement(StatementContext::If)?;
        let alternate = if self.is_token(SyntaxKind::ElseKeyword) {
            self.consume_keyword()?;
            Some(Box::new(self.parse_statement(StatementContext::If)?))
        } else {
            None
        };
        Ok(Statement::If(IfStatement {
            span: self.finish(pos),
            test,
            consequent: Box::new(consequent),
            alternate,
        }))
    }

    fn parse_loop_body(&mut self) -> ParseResult<Statement> {
        self.with_context(ContextFlags::IN_ITERATION, ContextFlags::empty(), |p| {
            p.parse_statement(StatementContext::Nested)
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let test = self.allow_in(|p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = self.parse_loop_body()?;
        Ok(Statement::While(WhileStatement {
            span: self.finish(pos),
            test,
            body: Box::new(body),
        }))
    }

    fn parse_do_while_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let body = self.parse_loop_body()?;
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let test = self.allow_in(|p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        // `do ; while (x) y` needs no separator after the closing paren.
        self.parse_optional(SyntaxKind::SemicolonToken)?;
        Ok(Statement::DoWhile(DoWhileStatement {
            span: self.finish(pos),
            body: Box::new(body),
            test,
        }))
    }

    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;

        let mut is_await = false;
        if self.is_token(SyntaxKind::AwaitKeyword) {
            if !self.in_context(ContextFlags::AWAIT) {
                return Err(self.unexpected_token_error());
            }
            is_await = true;
            self.next_token()?;
        }
        self.parse_expected(SyntaxKind::OpenParenToken)?;

        self.scope.enter(ScopeKind::Block);
        let statement = self.parse_for_rest(pos, is_await)?;
        self.scope.exit();
        Ok(statement)
    }

    fn parse_for_rest(&mut self, pos: Position, is_await: bool) -> ParseResult<Statement> {
        if self.is_token(SyntaxKind::SemicolonToken) {
            if is_await {
                return Err(self.for_await_requires_of());
            }
            return self.parse_for_loop_tail(pos, None);
        }

        let declaration_kind = match self.token() {
            SyntaxKind::VarKeyword => Some(VariableKind::Var),
            SyntaxKind::ConstKeyword => Some(VariableKind::Const),
            SyntaxKind::LetKeyword if self.look_ahead_is_let_declaration(true) => {
                Some(VariableKind::Let)
            }
            _ => None,
        };

        if let Some(kind) = declaration_kind {
            let declaration = self.with_context(
                ContextFlags::DISALLOW_IN,
                ContextFlags::empty(),
                |p| p.parse_variable_declaration_list(kind, true),
            )?;
            return self.parse_for_declaration_tail(pos, is_await, declaration);
        }

        let head_pos = self.token_pos();
        let starts_with_let = self.is_token(SyntaxKind::LetKeyword);
        let starts_with_async = self.is_contextual(SyntaxKind::AsyncKeyword);
        let init = self.with_context(ContextFlags::DISALLOW_IN, ContextFlags::empty(), |p| {
            p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
        })?;

        let is_of = self.is_contextual(SyntaxKind::OfKeyword);
        if is_of || self.is_token(SyntaxKind::InKeyword) {
            if !is_of && is_await {
                return Err(self.for_await_requires_of());
            }
            if is_of && starts_with_let {
                return Err(self.error_at(
                    head_pos,
                    diagnostic_codes::INVALID_LHS_IN_FOR_OF,
                    diagnostic_messages::INVALID_LHS_IN_FOR_OF,
                ));
            }
            if is_of
                && !is_await
                && starts_with_async
                && matches!(&init, Expression::Identifier(id) if id.atom == atoms::ASYNC)
            {
                return Err(self.error_at(
                    head_pos,
                    diagnostic_codes::FOR_OF_ASYNC,
                    diagnostic_messages::FOR_OF_ASYNC,
                ));
            }
            let left = self.for_in_of_target(init, is_of)?;
            self.clear_cover_error();
            return self.parse_for_in_of_tail(pos, is_of, is_await, ForTarget::Pattern(left));
        }

        if is_await {
            return Err(self.for_await_requires_of());
        }
        self.raise_cover_error()?;

        let init = if self.is_token(SyntaxKind::CommaToken) {
            let mut expressions = NodeList::new();
            expressions.add(init);
            while self.parse_optional(SyntaxKind::CommaToken)? {
                let next = self.with_context(
                    ContextFlags::DISALLOW_IN,
                    ContextFlags::empty(),
                    |p| p.parse_assignment_expression(),
                )?;
                expressions.add(next);
            }
            Expression::Sequence(SequenceExpression {
                span: self.finish(head_pos),
                expressions: expressions.freeze(),
            })
        } else {
            init
        };
        self.parse_for_loop_tail(pos, Some(ForInit::Expression(init)))
    }

    /// Reinterpret the head expression of `for (x in/of y)` as a target.
    fn for_in_of_target(&mut self, init: Expression, is_of: bool) -> ParseResult<Pattern> {
        let (code, message) = if is_of {
            (
                diagnostic_codes::INVALID_LHS_IN_FOR_OF,
                diagnostic_messages::INVALID_LHS_IN_FOR_OF,
            )
        } else {
            (
                diagnostic_codes::INVALID_LHS_IN_FOR_IN,
                diagnostic_messages::INVALID_LHS_IN_FOR_IN,
            )
        };
        if matches!(init, Expression::Assignment(_)) {
            return Err(self.error_at(init.span().start, code, message));
        }
        self.expression_to_assignment_target(init, code, message)
    }

    fn parse_for_declaration_tail(
        &mut self,
        pos: Position,
        is_await: bool,
        declaration: VariableDeclaration,
    ) -> ParseResult<Statement> {
        let is_of = self.is_contextual(SyntaxKind::OfKeyword);
        if is_of || self.is_token(SyntaxKind::InKeyword) {
            if !is_of && is_await {
                return Err(self.for_await_requires_of());
            }
            if declaration.declarations.len() != 1 {
                return Err(self.error_at(
                    declaration.span.start,
                    diagnostic_codes::FOR_IN_OF_MULTIPLE_BINDINGS,
                    format_message(
                        diagnostic_messages::FOR_IN_OF_MULTIPLE_BINDINGS,
                        &[loop_name(is_of)],
                    ),
                ));
            }
            if let Some(declarator) = declaration.declarations.first() {
                if declarator.init.is_some() {
                    let annex_b = !is_of
                        && !self.is_strict()
                        && declaration.kind == VariableKind::Var
                        && matches!(declarator.id, Pattern::Identifier(_));
                    if !annex_b {
                        return Err(self.error_at(
                            declaration.span.start,
                            diagnostic_codes::FOR_IN_OF_INITIALIZER,
                            format_message(
                                diagnostic_messages::FOR_IN_OF_INITIALIZER,
                                &[loop_name(is_of)],
                            ),
                        ));
                    }
                }
            }
            return self.parse_for_in_of_tail(
                pos,
                is_of,
                is_await,
                ForTarget::VariableDeclaration(declaration),
            );
        }

        if is_await {
            return Err(self.for_await_requires_of());
        }
        self.check_declarator_initializers(&declaration)?;
        self.parse_for_loop_tail(pos, Some(ForInit::VariableDeclaration(declaration)))
    }

    fn parse_for_in_of_tail(
        &mut self,
        pos: Position,
        is_of: bool,
        is_await: bool,
        left: ForTarget,
    ) -> ParseResult<Statement> {
        self.next_token()?;
        let right = if is_of {
            self.allow_in(|p| p.parse_assignment_expression())?
        } else {
            self.allow_in(|p| p.parse_expression())?
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = Box::new(self.parse_loop_body()?);
        let span = self.finish(pos);
        Ok(if is_of {
            Statement::ForOf(ForOfStatement {
                span,
                is_await,
                left,
                right,
                body,
            })
        } else {
            Statement::ForIn(ForInStatement {
                span,
                left,
                right,
                body,
            })
        })
    }

    fn parse_for_loop_tail(&mut self, pos: Position, init: Option<ForInit>) -> ParseResult<Statement> {
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let test = if self.is_token(SyntaxKind::SemicolonToken) {
            None
        } else {
            Some(self.allow_in(|p| p.parse_expression())?)
        };
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let update = if self.is_token(SyntaxKind::CloseParenToken) {
            None
        } else {
            Some(self.allow_in(|p| p.parse_expression())?)
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = self.parse_loop_body()?;
        Ok(Statement::For(ForStatement {
            span: self.finish(pos),
            init,
            test,
            update,
            body: Box::new(body),
        }))
    }

    fn for_await_requires_of(&self) -> super::error::ParseError {
        self.error_at(
            self.token_pos(),
            diagnostic_codes::FOR_AWAIT_REQUIRES_OF,
            diagnostic_messages::FOR_AWAIT_REQUIRES_OF,
        )
    }

    fn parse_continue_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let label = self.parse_jump_label()?;
        match &label {
            Some(label) => match self.labels.find(label.atom) {
                None => self.unknown_label(label)?,
                Some(LabelKind::Statement) => self.tolerate_at(
                    label.span.start,
                    diagnostic_codes::CONTINUE_NON_ITERATION,
                    format_message(diagnostic_messages::CONTINUE_NON_ITERATION, &[&label.name]),
                )?,
                Some(LabelKind::Iteration) => {}
            },
            None if !self.in_context(ContextFlags::IN_ITERATION) => self.tolerate_at(
                pos,
                diagnostic_codes::ILLEGAL_CONTINUE,
                diagnostic_messages::ILLEGAL_CONTINUE,
            )?,
            None => {}
        }
        self.parse_semicolon()?;
        Ok(Statement::Continue(ContinueStatement {
            span: self.finish(pos),
            label,
        }))
    }

    fn parse_break_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let label = self.parse_jump_label()?;
        match &label {
            Some(label) => {
                if self.labels.find(label.atom).is_none() {
                    self.unknown_label(label)?;
                }
            }
            None => {
                if !self
                    .context_flags
                    .intersects(ContextFlags::IN_ITERATION | ContextFlags::IN_SWITCH)
                {
                    self.tolerate_at(
                        pos,
                        diagnostic_codes::ILLEGAL_BREAK,
                        diagnostic_messages::ILLEGAL_BREAK,
                    )?;
                }
            }
        }
        self.parse_semicolon()?;
        Ok(Statement::Break(BreakStatement {
            span: self.finish(pos),
            label,
        }))
    }

    /// Label of `break` / `continue`: only on the same line.
    fn parse_jump_label(&mut self) -> ParseResult<Option<super::node::Identifier>> {
        if self.is_identifier_token() && !self.has_preceding_line_break() {
            Ok(Some(self.parse_identifier_reference()?))
        } else {
            Ok(None)
        }
    }

    fn unknown_label(&mut self, label: &super::node::Identifier) -> ParseResult<()> {
        self.tolerate_at(
            label.span.start,
            diagnostic_codes::UNKNOWN_LABEL,
            format_message(diagnostic_messages::UNKNOWN_LABEL, &[&label.name]),
        )
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        if !self.in_context(ContextFlags::IN_FUNCTION) {
            self.tolerate_at(
                pos,
                diagnostic_codes::ILLEGAL_RETURN,
                diagnostic_messages::ILLEGAL_RETURN,
            )?;
        }
        self.consume_keyword()?;
        let argument = if self.can_parse_semicolon() {
            None
        } else {
            Some(self.allow_in(|p| p.parse_expression())?)
        };
        self.parse_semicolon()?;
        Ok(Statement::Return(ReturnStatement {
            span: self.finish(pos),
            argument,
        }))
    }

    fn parse_with_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        if self.is_strict() {
            self.tolerate_at(
                pos,
                diagnostic_codes::STRICT_MODE_WITH,
                diagnostic_messages::STRICT_MODE_WITH,
            )?;
        }
        self.consume_keyword()?;
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let object = self.allow_in(|p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = self.parse_statement(StatementContext::Nested)?;
        Ok(Statement::With(WithStatement {
            span: self.finish(pos),
            object,
            body: Box::new(body),
        }))
    }

    fn parse_switch_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let discriminant = self.allow_in(|p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;

        self.scope.enter(ScopeKind::Block);
        let cases = self.with_context(ContextFlags::IN_SWITCH, ContextFlags::empty(), |p| {
            p.parse_switch_cases()
        })?;
        self.scope.exit();

        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Statement::Switch(SwitchStatement {
            span: self.finish(pos),
            discriminant,
            cases,
        }))
    }

    fn parse_switch_cases(&mut self) -> ParseResult<Box<[SwitchCase]>> {
        let mut cases = NodeList::new();
        let mut seen_default = false;
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let pos = self.token_pos();
            let test = match self.token() {
                SyntaxKind::CaseKeyword => {
                    self.consume_keyword()?;
                    Some(self.allow_in(|p| p.parse_expression())?)
                }
                SyntaxKind::DefaultKeyword => {
                    if seen_default {
                        self.tolerate_at(
                            pos,
                            diagnostic_codes::MULTIPLE_DEFAULTS_IN_SWITCH,
                            diagnostic_messages::MULTIPLE_DEFAULTS_IN_SWITCH,
                        )?;
                    }
                    seen_default = true;
                    self.consume_keyword()?;
                    None
                }
                _ => return Err(self.unexpected_token_error()),
            };
            self.parse_expected(SyntaxKind::ColonToken)?;

            let mut consequent = NodeList::new();
            while !matches!(
                self.token(),
                SyntaxKind::CaseKeyword
                    | SyntaxKind::DefaultKeyword
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            ) {
                if let Some(statement) = self.parse_statement_list_item_recovering()? {
                    consequent.add(statement);
                }
            }
            cases.add(SwitchCase {
                span: self.finish(pos),
                test,
                consequent: consequent.freeze(),
            });
        }
        Ok(cases.freeze())
    }

    fn parse_throw_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        if self.has_preceding_line_break() {
            return Err(self.error_at(
                self.last_token_end,
                diagnostic_codes::NEWLINE_AFTER_THROW,
                diagnostic_messages::NEWLINE_AFTER_THROW,
            ));
        }
        let argument = self.allow_in(|p| p.parse_expression())?;
        self.parse_semicolon()?;
        Ok(Statement::Throw(ThrowStatement {
            span: self.finish(pos),
            argument,
        }))
    }

    fn parse_try_statement(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let block = self.parse_block_statement(true)?;

        let handler = if self.is_token(SyntaxKind::CatchKeyword) {
            Some(self.parse_catch_clause()?)
        } else {
            None
        };
        let finalizer = if self.is_token(SyntaxKind::FinallyKeyword) {
            self.consume_keyword()?;
            Some(self.parse_block_statement(true)?)
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            return Err(self.error_at(
                self.token_pos(),
                diagnostic_codes::MISSING_CATCH_OR_FINALLY,
                diagnostic_messages::MISSING_CATCH_OR_FINALLY,
            ));
        }
        Ok(Statement::Try(TryStatement {
            span: self.finish(pos),
            block,
            handler,
            finalizer,
        }))
    }

    fn parse_catch_clause(&mut self) -> ParseResult<CatchClause> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        self.scope.enter(ScopeKind::Catch);

        let param = if self.parse_optional(SyntaxKind::OpenParenToken)? {
            let param = if self.is_identifier_token() {
                let id = self.parse_binding_identifier()?;
                self.scope.declare_simple_catch_param(id.atom);
                Pattern::Identifier(id)
            } else {
                self.parse_binding_target(BindingKind::Lexical)?
            };
            self.parse_expected(SyntaxKind::CloseParenToken)?;
            Some(param)
        } else {
            None
        };
        let body = self.parse_block_statement(false)?;
        self.scope.exit();

        Ok(CatchClause {
            span: self.finish(pos),
            param,
            body,
        })
    }
}

/// Tokens the tolerant resync stops before when they start a line.
fn starts_statement(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::IfKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::SwitchKeyword
            | SyntaxKind::ThrowKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::WithKeyword
            | SyntaxKind::DebuggerKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::ExportKeyword
    )
}

#[inline]
fn loop_name(is_of: bool) -> &'static str {
    if is_of { "for-of" } else { "for-in" }
}
