//! Parser state - expressions
//!
//! Precedence climbing for binary operators, right-associative assignment,
//! and the cover grammar that lets a parenthesized list or an array/object
//! literal turn into arrow parameters or a destructuring target once the
//! following token decides it.

use esz_common::{
    Position, Span, Spanned, atoms, diagnostic_codes, diagnostic_messages, format_message,
};
use esz_scanner::{SyntaxKind, TokenFlags};

use super::error::ParseResult;
use super::node::{
    Argument, ArrayExpression, ArrowBody, ArrowFunctionExpression, AssignmentExpression,
    AssignmentOperator, AwaitExpression, BinaryExpression, BinaryOperator, CallExpression,
    ChainExpression, ConditionalExpression, Expression, Identifier, ImportExpression, Literal,
    LiteralValue, LogicalExpression, LogicalOperator, MemberExpression, MemberProperty,
    MetaProperty, NewExpression, ObjectExpression, ObjectProperty, ParenthesizedExpression,
    Pattern, PrivateIdentifier, Property, PropertyKey, PropertyKind, RestElement,
    SequenceExpression, SpreadElement, Super, TaggedTemplateExpression, TemplateElement,
    TemplateLiteral, TemplateValue, ThisExpression, UnaryExpression, UnaryOperator,
    UpdateExpression, UpdateOperator, YieldExpression,
};
use super::node_list::NodeList;
use super::parse_rules::is_binding_identifier_kind;
use super::scope::ScopeKind;
use super::state::{ContextFlags, ParserState};
use super::state_declarations::{FunctionFlavor, FunctionShape};
use super::state_patterns::bound_names;

/// Precedence of relational operators; `#x in obj` binds at this level.
const RELATIONAL_PRECEDENCE: u8 = 8;

/// `await` / `yield` first seen inside a would-be parameter list.
type ParameterCover = (Option<Position>, Option<Position>);

impl ParserState {
    // =========================================================================
    // Parse Methods - Expressions
    // =========================================================================

    /// `Expression`: assignment expressions separated by commas.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let first = self.parse_assignment_expression()?;
        if !self.is_token(SyntaxKind::CommaToken) {
            return Ok(first);
        }
        let mut expressions = NodeList::new();
        expressions.add(first);
        while self.parse_optional(SyntaxKind::CommaToken)? {
            expressions.add(self.parse_assignment_expression()?);
        }
        Ok(Expression::Sequence(SequenceExpression {
            span: self.finish(pos),
            expressions: expressions.freeze(),
        }))
    }

    /// An assignment expression that can never become a pattern.
    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Expression> {
        self.isolate_cover_grammar(|p| p.parse_assignment_expression_cover())
    }

    /// An assignment expression whose cover errors stay pending: the caller
    /// may still reinterpret it as a pattern.
    pub(crate) fn parse_assignment_expression_cover(&mut self) -> ParseResult<Expression> {
        self.with_recursion(|p| p.parse_assignment_expression_inner())
    }

    fn parse_assignment_expression_inner(&mut self) -> ParseResult<Expression> {
        if self.is_token(SyntaxKind::YieldKeyword) && self.in_context(ContextFlags::YIELD) {
            return self.parse_yield_expression();
        }

        let pos = self.token_pos();
        self.potential_arrow_at = Some(pos.offset);
        let left = self.parse_conditional_expression()?;
        if is_arrow(&left) {
            return Ok(left);
        }
        let Some(operator) = assignment_operator(self.token()) else {
            return Ok(left);
        };

        let target = if operator == AssignmentOperator::Assign {
            let target = self.expression_to_assignment_target(
                left,
                diagnostic_codes::INVALID_LHS_IN_ASSIGNMENT,
                diagnostic_messages::INVALID_LHS_IN_ASSIGNMENT,
            )?;
            if matches!(target, Pattern::Array(_) | Pattern::Object(_)) {
                self.clear_cover_error();
            }
            target
        } else {
            self.simple_target_from_expression(
                left,
                diagnostic_codes::INVALID_LHS_IN_ASSIGNMENT,
                diagnostic_messages::INVALID_LHS_IN_ASSIGNMENT,
            )?
        };

        self.next_token()?;
        let right = self.parse_assignment_expression()?;
        Ok(Expression::Assignment(AssignmentExpression {
            span: self.finish(pos),
            operator,
            left: Box::new(target),
            right: Box::new(right),
        }))
    }

    fn parse_yield_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        if self.in_context(ContextFlags::IN_PARAMETERS) {
            self.tolerate_at(
                pos,
                diagnostic_codes::YIELD_IN_PARAMETER,
                diagnostic_messages::YIELD_IN_PARAMETER,
            )?;
        }
        self.note_yield(pos);
        self.consume_keyword()?;

        let mut delegate = false;
        let mut argument = None;
        if !self.has_preceding_line_break() {
            delegate = self.parse_optional(SyntaxKind::AsteriskToken)?;
            if delegate || can_start_expression(self.token()) {
                argument = Some(Box::new(self.parse_assignment_expression()?));
            }
        }
        Ok(Expression::Yield(YieldExpression {
            span: self.finish(pos),
            argument,
            delegate,
        }))
    }

    fn parse_conditional_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let test = self.inherit_cover_grammar(|p| p.parse_binary_expression(0))?;
        if is_arrow(&test) || !self.is_token(SyntaxKind::QuestionToken) {
            return Ok(test);
        }
        self.next_token()?;
        let consequent = self.allow_in(|p| p.parse_assignment_expression())?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let alternate = self.parse_assignment_expression()?;
        Ok(Expression::Conditional(ConditionalExpression {
            span: self.finish(pos),
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }))
    }

    // =========================================================================
    // Parse Methods - Binary Operators
    // =========================================================================

    /// Binary operator token at the cursor, if it may continue the expression.
    fn binary_operator_token(&mut self) -> SyntaxKind {
        let kind = match self.token() {
            SyntaxKind::GreaterThanToken => self.re_scan_greater(),
            kind => kind,
        };
        if kind == SyntaxKind::InKeyword && self.in_context(ContextFlags::DISALLOW_IN) {
            return SyntaxKind::Unknown;
        }
        kind
    }

    /// Operators binding tighter than `min_precedence`, left-associative
    /// except `**`.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let mut left = if self.is_token(SyntaxKind::PrivateIdentifier) {
            self.parse_private_in_operand(min_precedence)?
        } else {
            self.parse_unary_expression()?
        };
        if is_arrow(&left) {
            return Ok(left);
        }

        loop {
            let kind = self.binary_operator_token();
            let precedence = kind.binary_precedence();
            if precedence == 0 || precedence <= min_precedence {
                break;
            }
            let operator_pos = self.token_pos();
            if kind == SyntaxKind::AsteriskAsteriskToken
                && matches!(left, Expression::Unary(_) | Expression::Await(_))
            {
                return Err(self.error_at(
                    operator_pos,
                    diagnostic_codes::UNARY_BEFORE_EXPONENT,
                    diagnostic_messages::UNARY_BEFORE_EXPONENT,
                ));
            }
            if kind.is_keyword() {
                self.consume_keyword()?;
            } else {
                self.next_token()?;
            }
            let right_min = if kind == SyntaxKind::AsteriskAsteriskToken {
                precedence - 1
            } else {
                precedence
            };
            let right = self.with_recursion(|p| p.parse_binary_expression(right_min))?;
            left = self.build_binary(pos, operator_pos, kind, left, right)?;
        }
        Ok(left)
    }

    /// `#x` as the left operand of `in`.
    fn parse_private_in_operand(&mut self, min_precedence: u8) -> ParseResult<Expression> {
        let private = self.parse_private_name_reference()?;
        let in_allowed = self.is_token(SyntaxKind::InKeyword)
            && !self.in_context(ContextFlags::DISALLOW_IN)
            && min_precedence < RELATIONAL_PRECEDENCE;
        if !in_allowed {
            return Err(self.unexpected_token_error());
        }
        Ok(Expression::PrivateIdentifier(private))
    }

    fn build_binary(
        &mut self,
        pos: Position,
        operator_pos: Position,
        kind: SyntaxKind,
        left: Expression,
        right: Expression,
    ) -> ParseResult<Expression> {
        let span = self.finish(pos);
        if let Some(operator) = logical_operator(kind) {
            let mixes = |e: &Expression| match e {
                Expression::Logical(logical) => {
                    (logical.operator == LogicalOperator::Coalesce)
                        != (operator == LogicalOperator::Coalesce)
                }
                _ => false,
            };
            if mixes(&left) || mixes(&right) {
                self.tolerate_at(
                    operator_pos,
                    diagnostic_codes::MIXED_NULLISH_COALESCING,
                    diagnostic_messages::MIXED_NULLISH_COALESCING,
                )?;
            }
            return Ok(Expression::Logical(LogicalExpression {
                span,
                operator,
                left: Box::new(left),
                right: Box::new(right),
            }));
        }
        let Some(operator) = binary_operator(kind) else {
            return Err(self.error_at(
                operator_pos,
                diagnostic_codes::UNEXPECTED_TOKEN,
                format_message(
                    diagnostic_messages::UNEXPECTED_TOKEN,
                    &[kind.token_text().unwrap_or_default()],
                ),
            ));
        };
        Ok(Expression::Binary(BinaryExpression {
            span,
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    // =========================================================================
    // Parse Methods - Unary and Update
    // =========================================================================

    fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let kind = self.token();
        if let Some(operator) = unary_operator(kind) {
            if kind.is_keyword() {
                self.consume_keyword()?;
            } else {
                self.next_token()?;
            }
            let argument = self.with_recursion(|p| p.parse_unary_expression())?;
            if operator == UnaryOperator::Delete {
                self.check_delete_operand(&argument)?;
            }
            return Ok(Expression::Unary(UnaryExpression {
                span: self.finish(pos),
                operator,
                prefix: true,
                argument: Box::new(argument),
            }));
        }

        match kind {
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                let operator = if kind == SyntaxKind::PlusPlusToken {
                    UpdateOperator::Increment
                } else {
                    UpdateOperator::Decrement
                };
                self.next_token()?;
                let argument = self.with_recursion(|p| p.parse_unary_expression())?;
                self.check_simple_target(
                    &argument,
                    diagnostic_codes::INVALID_LHS_IN_PREFIX,
                    diagnostic_messages::INVALID_LHS_IN_PREFIX,
                )?;
                Ok(Expression::Update(UpdateExpression {
                    span: self.finish(pos),
                    operator,
                    prefix: true,
                    argument: Box::new(argument),
                }))
            }
            SyntaxKind::AwaitKeyword if self.in_context(ContextFlags::AWAIT) => {
                self.parse_await_expression()
            }
            _ => self.parse_postfix_expression(),
        }
    }

    fn check_delete_operand(&mut self, argument: &Expression) -> ParseResult<()> {
        let operand = argument.without_parentheses();
        if self.is_strict() && matches!(operand, Expression::Identifier(_)) {
            self.tolerate_at(
                operand.span().start,
                diagnostic_codes::STRICT_DELETE,
                diagnostic_messages::STRICT_DELETE,
            )?;
        }
        let member = match operand {
            Expression::Member(member) => Some(member),
            Expression::Chain(chain) => match chain.expression.as_ref() {
                Expression::Member(member) => Some(member),
                _ => None,
            },
            _ => None,
        };
        if let Some(member) = member {
            if matches!(member.property, MemberProperty::PrivateIdentifier(_)) {
                self.tolerate_at(
                    member.property.span().start,
                    diagnostic_codes::PRIVATE_DELETE,
                    diagnostic_messages::PRIVATE_DELETE,
                )?;
            }
        }
        Ok(())
    }

    fn parse_await_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        if self.in_context(ContextFlags::IN_PARAMETERS) {
            self.tolerate_at(
                pos,
                diagnostic_codes::AWAIT_IN_PARAMETER,
                diagnostic_messages::AWAIT_IN_PARAMETER,
            )?;
        }
        self.note_await(pos);
        self.consume_keyword()?;
        let argument = self.with_recursion(|p| p.parse_unary_expression())?;
        Ok(Expression::Await(AwaitExpression {
            span: self.finish(pos),
            argument: Box::new(argument),
        }))
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let expression = self.inherit_cover_grammar(|p| p.parse_call_expression())?;
        if is_arrow(&expression) || self.has_preceding_line_break() {
            return Ok(expression);
        }
        let operator = match self.token() {
            SyntaxKind::PlusPlusToken => UpdateOperator::Increment,
            SyntaxKind::MinusMinusToken => UpdateOperator::Decrement,
            _ => return Ok(expression),
        };
        self.check_simple_target(
            &expression,
            diagnostic_codes::INVALID_LHS_IN_POSTFIX,
            diagnostic_messages::INVALID_LHS_IN_POSTFIX,
        )?;
        self.next_token()?;
        Ok(Expression::Update(UpdateExpression {
            span: self.finish(pos),
            operator,
            prefix: false,
            argument: Box::new(expression),
        }))
    }

    // =========================================================================
    // Parse Methods - Calls and Members
    // =========================================================================

    /// `LeftHandSideExpression` that is never reinterpreted (class heritage).
    pub(crate) fn parse_left_hand_side_expression(&mut self) -> ParseResult<Expression> {
        self.isolate_cover_grammar(|p| p.parse_call_expression())
    }

    fn parse_call_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let base = match self.token() {
            SyntaxKind::SuperKeyword => self.parse_super_expression(true)?,
            SyntaxKind::NewKeyword => self.parse_new_expression()?,
            SyntaxKind::ImportKeyword => self.parse_import_expression()?,
            _ => self.parse_primary_expression()?,
        };
        if is_arrow(&base) {
            return Ok(base);
        }
        self.parse_member_call_tail(pos, base, true)
    }

    /// Member accesses, calls (when `allow_call`), tagged templates and
    /// optional chains following `expression`.
    fn parse_member_call_tail(
        &mut self,
        pos: Position,
        mut expression: Expression,
        allow_call: bool,
    ) -> ParseResult<Expression> {
        let mut in_chain = false;
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token()?;
                    let property = self.parse_member_property_name()?;
                    expression = self.member(pos, expression, property, false, false);
                }
                SyntaxKind::QuestionDotToken => {
                    if !allow_call {
                        return Err(self.error_at(
                            self.token_pos(),
                            diagnostic_codes::OPTIONAL_CHAIN_NEW,
                            diagnostic_messages::OPTIONAL_CHAIN_NEW,
                        ));
                    }
                    in_chain = true;
                    self.next_token()?;
                    expression = match self.token() {
                        SyntaxKind::OpenParenToken => {
                            let arguments = self.parse_arguments()?;
                            self.call(pos, expression, arguments, true)
                        }
                        SyntaxKind::OpenBracketToken => {
                            let property = self.parse_computed_member_property()?;
                            self.member(pos, expression, property, true, true)
                        }
                        kind if kind.is_template() => {
                            return Err(self.optional_chain_template_error());
                        }
                        _ => {
                            let property = self.parse_member_property_name()?;
                            self.member(pos, expression, property, false, true)
                        }
                    };
                }
                SyntaxKind::OpenBracketToken => {
                    let property = self.parse_computed_member_property()?;
                    expression = self.member(pos, expression, property, true, false);
                }
                SyntaxKind::OpenParenToken if allow_call => {
                    let arguments = self.parse_arguments()?;
                    expression = self.call(pos, expression, arguments, false);
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    if in_chain {
                        return Err(self.optional_chain_template_error());
                    }
                    let quasi = self.parse_template_literal(true)?;
                    expression = Expression::TaggedTemplate(TaggedTemplateExpression {
                        span: self.finish(pos),
                        tag: Box::new(expression),
                        quasi,
                    });
                }
                _ => break,
            }
        }
        if in_chain {
            expression = Expression::Chain(ChainExpression {
                span: self.finish(pos),
                expression: Box::new(expression),
            });
        }
        Ok(expression)
    }

    fn member(
        &self,
        pos: Position,
        object: Expression,
        property: MemberProperty,
        computed: bool,
        optional: bool,
    ) -> Expression {
        Expression::Member(MemberExpression {
            span: self.finish(pos),
            object: Box::new(object),
            property,
            computed,
            optional,
        })
    }

    fn call(
        &self,
        pos: Position,
        callee: Expression,
        arguments: Box<[Argument]>,
        optional: bool,
    ) -> Expression {
        Expression::Call(CallExpression {
            span: self.finish(pos),
            callee: Box::new(callee),
            arguments,
            optional,
        })
    }

    fn optional_chain_template_error(&self) -> super::error::ParseError {
        self.error_at(
            self.token_pos(),
            diagnostic_codes::OPTIONAL_CHAIN_TEMPLATE,
            diagnostic_messages::OPTIONAL_CHAIN_TEMPLATE,
        )
    }

    /// Name after `.` or `?.`: any identifier name or `#private`.
    fn parse_member_property_name(&mut self) -> ParseResult<MemberProperty> {
        if self.is_token(SyntaxKind::PrivateIdentifier) {
            return Ok(MemberProperty::PrivateIdentifier(
                self.parse_private_name_reference()?,
            ));
        }
        Ok(MemberProperty::Identifier(self.parse_identifier_name()?))
    }

    fn parse_computed_member_property(&mut self) -> ParseResult<MemberProperty> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let property = self.allow_in(|p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(MemberProperty::Computed(Box::new(property)))
    }

    /// Parenthesized call arguments.
    fn parse_arguments(&mut self) -> ParseResult<Box<[Argument]>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let mut arguments = NodeList::new();
        while !self.is_token(SyntaxKind::CloseParenToken) {
            if self.is_token(SyntaxKind::DotDotDotToken) {
                let pos = self.token_pos();
                self.next_token()?;
                let argument = self.allow_in(|p| p.parse_assignment_expression())?;
                arguments.add(Argument::Spread(SpreadElement {
                    span: self.finish(pos),
                    argument,
                }));
            } else {
                arguments.add(Argument::Expression(
                    self.allow_in(|p| p.parse_assignment_expression())?,
                ));
            }
            if !self.is_token(SyntaxKind::CloseParenToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(arguments.freeze())
    }

    /// Arguments that may still turn into arrow parameters (`async (...)`,
    /// parenthesized groups): cover errors stay pending.
    fn parse_cover_list(&mut self, close: SyntaxKind) -> ParseResult<NodeList<Argument>> {
        let mut items = NodeList::new();
        while !self.is_token(close) {
            if self.is_token(SyntaxKind::DotDotDotToken) {
                let pos = self.token_pos();
                self.next_token()?;
                let argument = self.allow_in(|p| {
                    p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
                })?;
                if self.is_token(SyntaxKind::CommaToken) {
                    self.invalid_rest_offsets.insert(pos.offset);
                }
                items.add(Argument::Spread(SpreadElement {
                    span: self.finish(pos),
                    argument,
                }));
            } else {
                items.add(Argument::Expression(self.allow_in(|p| {
                    p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
                })?));
            }
            if !self.is_token(close) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        Ok(items)
    }

    fn parse_super_expression(&mut self, allow_call: bool) -> ParseResult<Expression> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let allowed = match self.token() {
            SyntaxKind::OpenParenToken => {
                allow_call && self.in_context(ContextFlags::ALLOW_SUPER_CALL)
            }
            SyntaxKind::DotToken | SyntaxKind::OpenBracketToken => {
                self.in_context(ContextFlags::ALLOW_SUPER_PROPERTY)
            }
            _ => {
                return Err(self.error_at(
                    pos,
                    diagnostic_codes::UNEXPECTED_SUPER,
                    diagnostic_messages::UNEXPECTED_SUPER,
                ));
            }
        };
        if !allowed {
            self.tolerate_at(
                pos,
                diagnostic_codes::UNEXPECTED_SUPER,
                diagnostic_messages::UNEXPECTED_SUPER,
            )?;
        }
        Ok(Expression::Super(Super {
            span: self.finish(pos),
        }))
    }

    fn parse_new_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let meta = self.identifier_from_token();
        self.consume_keyword()?;

        if self.parse_optional(SyntaxKind::DotToken)? {
            let property = self.parse_meta_property_name(&meta, atoms::TARGET, "target")?;
            if !self.in_context(ContextFlags::ALLOW_NEW_TARGET) {
                self.tolerate_at(
                    pos,
                    diagnostic_codes::NEW_TARGET_OUTSIDE_FUNCTION,
                    diagnostic_messages::NEW_TARGET_OUTSIDE_FUNCTION,
                )?;
            }
            return Ok(Expression::MetaProperty(MetaProperty {
                span: self.finish(pos),
                meta,
                property,
            }));
        }

        let callee_pos = self.token_pos();
        let callee = match self.token() {
            SyntaxKind::NewKeyword => self.with_recursion(|p| p.parse_new_expression())?,
            SyntaxKind::SuperKeyword => self.parse_super_expression(false)?,
            SyntaxKind::ImportKeyword => {
                return Err(self.error_at(
                    callee_pos,
                    diagnostic_codes::NEW_WITH_IMPORT,
                    diagnostic_messages::NEW_WITH_IMPORT,
                ));
            }
            _ => self.isolate_cover_grammar(|p| p.parse_primary_expression())?,
        };
        let callee = self.parse_member_call_tail(callee_pos, callee, false)?;
        let arguments = if self.is_token(SyntaxKind::OpenParenToken) {
            self.parse_arguments()?
        } else {
            Box::default()
        };
        Ok(Expression::New(NewExpression {
            span: self.finish(pos),
            callee: Box::new(callee),
            arguments,
        }))
    }

    /// The `target` of `new.target` or the `meta` of `import.meta`.
    fn parse_meta_property_name(
        &mut self,
        meta: &Identifier,
        expected: esz_common::Atom,
        expected_name: &str,
    ) -> ParseResult<Identifier> {
        let is_expected = self.is_token(SyntaxKind::Identifier)
            && self.token_atom() == expected
            && !self.scanner.has_unicode_escape();
        if !is_expected {
            return Err(self.error_at(
                self.token_pos(),
                diagnostic_codes::INVALID_META_PROPERTY,
                format_message(
                    diagnostic_messages::INVALID_META_PROPERTY,
                    &[&meta.name, expected_name],
                ),
            ));
        }
        self.parse_identifier_name()
    }

    /// `import(source[, options])` or `import.meta`.
    fn parse_import_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let meta = self.identifier_from_token();
        self.consume_keyword()?;

        if self.parse_optional(SyntaxKind::DotToken)? {
            let property = self.parse_meta_property_name(&meta, atoms::META, "meta")?;
            if !self.options.is_module() {
                self.tolerate_at(
                    pos,
                    diagnostic_codes::IMPORT_META_OUTSIDE_MODULE,
                    diagnostic_messages::IMPORT_META_OUTSIDE_MODULE,
                )?;
            }
            return Ok(Expression::MetaProperty(MetaProperty {
                span: self.finish(pos),
                meta,
                property,
            }));
        }

        self.parse_expected(SyntaxKind::OpenParenToken)?;
        if self.is_token(SyntaxKind::CloseParenToken) {
            return Err(self.import_call_arity_error());
        }
        let source = self.allow_in(|p| p.parse_assignment_expression())?;
        let mut options = None;
        if self.parse_optional(SyntaxKind::CommaToken)?
            && !self.is_token(SyntaxKind::CloseParenToken)
        {
            options = Some(Box::new(
                self.allow_in(|p| p.parse_assignment_expression())?,
            ));
            self.parse_optional(SyntaxKind::CommaToken)?;
        }
        if !self.is_token(SyntaxKind::CloseParenToken) {
            return Err(self.import_call_arity_error());
        }
        self.next_token()?;
        Ok(Expression::Import(ImportExpression {
            span: self.finish(pos),
            source: Box::new(source),
            options,
        }))
    }

    fn import_call_arity_error(&self) -> super::error::ParseError {
        self.error_at(
            self.token_pos(),
            diagnostic_codes::IMPORT_CALL_ARITY,
            diagnostic_messages::IMPORT_CALL_ARITY,
        )
    }

    // =========================================================================
    // Parse Methods - Primary Expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        let can_be_arrow = self.potential_arrow_at == Some(pos.offset);
        match self.token() {
            SyntaxKind::AsyncKeyword if !self.scanner.has_unicode_escape() => {
                self.parse_async_primary(pos, can_be_arrow)
            }
            _ if self.is_identifier_token() => {
                let id = self.parse_identifier_reference()?;
                if can_be_arrow && self.at_arrow() {
                    self.check_assignment_to_identifier(&id)?;
                    let params = Box::new([Pattern::Identifier(id)]);
                    return self.parse_arrow_function(pos, params, false);
                }
                Ok(Expression::Identifier(id))
            }
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral => Ok(Expression::Literal(self.parse_literal()?)),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                self.re_scan_slash()?;
                Ok(Expression::Literal(self.parse_regex_literal()?))
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword | SyntaxKind::NullKeyword => {
                let raw = self.scanner.get_token_text().to_string();
                let value = match self.token() {
                    SyntaxKind::TrueKeyword => LiteralValue::Boolean(true),
                    SyntaxKind::FalseKeyword => LiteralValue::Boolean(false),
                    _ => LiteralValue::Null,
                };
                self.consume_keyword()?;
                Ok(Expression::Literal(Literal {
                    span: self.finish(pos),
                    value,
                    raw,
                }))
            }
            SyntaxKind::ThisKeyword => {
                self.consume_keyword()?;
                Ok(Expression::This(ThisExpression {
                    span: self.finish(pos),
                }))
            }
            SyntaxKind::OpenParenToken => self.parse_group_expression(pos, can_be_arrow),
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::FunctionKeyword => {
                Ok(Expression::Function(self.parse_function_expression(false)?))
            }
            SyntaxKind::ClassKeyword => Ok(Expression::Class(self.parse_class_expression()?)),
            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                Ok(Expression::Template(self.parse_template_literal(false)?))
            }
            SyntaxKind::LessThanToken if self.options.jsx => self.parse_jsx_element_or_fragment(),
            _ => Err(self.unexpected_token_error()),
        }
    }

    #[inline]
    fn at_arrow(&self) -> bool {
        self.is_token(SyntaxKind::EqualsGreaterThanToken) && !self.has_preceding_line_break()
    }

    /// `async function`, `async x => ...`, `async (...) => ...`, a call to
    /// a function named `async`, or the plain identifier.
    fn parse_async_primary(&mut self, pos: Position, can_be_arrow: bool) -> ParseResult<Expression> {
        let next = self.peek_token();
        if next.kind == SyntaxKind::FunctionKeyword && !next.line_break {
            return Ok(Expression::Function(self.parse_function_expression(true)?));
        }
        if can_be_arrow && !next.line_break {
            if is_binding_identifier_kind(next.kind) && self.async_identifier_arrow_follows() {
                self.next_token()?;
                let id = self.with_context(ContextFlags::AWAIT, ContextFlags::empty(), |p| {
                    p.parse_binding_identifier()
                })?;
                if !self.at_arrow() {
                    return Err(self.unexpected_token_error());
                }
                self.check_assignment_to_identifier(&id)?;
                let params = Box::new([Pattern::Identifier(id)]);
                return self.parse_arrow_function(pos, params, true);
            }
            if next.kind == SyntaxKind::OpenParenToken {
                return self.parse_async_call_or_arrow(pos);
            }
        }
        // `async => 1`: a plain parameter named `async`.
        let id = self.parse_identifier_reference()?;
        if can_be_arrow && self.at_arrow() {
            self.check_assignment_to_identifier(&id)?;
            let params = Box::new([Pattern::Identifier(id)]);
            return self.parse_arrow_function(pos, params, false);
        }
        Ok(Expression::Identifier(id))
    }

    /// `async x =>`: the token after the identifier is an arrow on the same
    /// line. Keeps `for (async of ...)` an identifier.
    fn async_identifier_arrow_follows(&mut self) -> bool {
        self.look_ahead(|p| {
            p.scanner.scan();
            let kind = p.scanner.scan();
            kind == SyntaxKind::EqualsGreaterThanToken && !p.scanner.has_preceding_line_break()
        })
    }

    fn parse_async_call_or_arrow(&mut self, pos: Position) -> ParseResult<Expression> {
        let callee = self.identifier_from_token();
        self.next_token()?;
        self.check_identifier_reference(&callee)?;

        let outer = self.begin_parameter_cover();
        let items = self.parse_expected(SyntaxKind::OpenParenToken).and_then(|()| {
            let items = self.parse_cover_list(SyntaxKind::CloseParenToken)?;
            self.parse_expected(SyntaxKind::CloseParenToken)?;
            Ok(items)
        });
        let inner = (self.cover.first_await, self.cover.first_yield);
        let becomes_arrow = items.is_ok() && self.at_arrow();
        self.end_parameter_cover(outer, becomes_arrow);
        let items = items?;

        if becomes_arrow {
            self.check_arrow_parameter_cover(inner, true)?;
            let params = self.arrow_parameters_from(items)?;
            self.clear_cover_error();
            return self.parse_arrow_function(pos, params, true);
        }

        self.raise_cover_error()?;
        Ok(self.call(pos, Expression::Identifier(callee), items.freeze(), false))
    }

    /// `( ... )`: a parenthesized expression or arrow parameters.
    fn parse_group_expression(&mut self, pos: Position, can_be_arrow: bool) -> ParseResult<Expression> {
        self.next_token()?;
        let outer = self.begin_parameter_cover();
        let items = self.parse_group_items();
        let inner = (self.cover.first_await, self.cover.first_yield);
        let becomes_arrow = can_be_arrow && items.is_ok() && self.at_arrow();
        self.end_parameter_cover(outer, becomes_arrow);
        let (items, trailing_comma, close_pos) = items?;

        if becomes_arrow {
            self.check_arrow_parameter_cover(inner, false)?;
            let params = self.arrow_parameters_from(items)?;
            self.clear_cover_error();
            return self.parse_arrow_function(pos, params, false);
        }

        let has_rest = items.iter().any(|item| matches!(item, Argument::Spread(_)));
        if items.is_empty() || trailing_comma || has_rest {
            return Err(self.error_at(
                close_pos,
                diagnostic_codes::UNEXPECTED_TOKEN,
                format_message(diagnostic_messages::UNEXPECTED_TOKEN, &[")"]),
            ));
        }

        let mut expressions: Vec<Expression> = items
            .freeze()
            .into_vec()
            .into_iter()
            .filter_map(|item| match item {
                Argument::Expression(expression) => Some(expression),
                Argument::Spread(_) => None,
            })
            .collect();
        let expression = if expressions.len() == 1 {
            expressions.remove(0)
        } else {
            let start = expressions.first().map_or(pos, |e| e.span().start);
            let end = expressions.last().map_or(pos, |e| e.span().end);
            Expression::Sequence(SequenceExpression {
                span: Span::new(start, end),
                expressions: expressions.into_boxed_slice(),
            })
        };
        Ok(Expression::Parenthesized(ParenthesizedExpression {
            span: self.finish(pos),
            expression: Box::new(expression),
        }))
    }

    /// Items of a group up to and including `)`. Returns the items, whether
    /// a trailing comma was seen, and the position of the `)`.
    fn parse_group_items(&mut self) -> ParseResult<(NodeList<Argument>, bool, Position)> {
        let mut items = NodeList::new();
        let mut trailing_comma = false;
        while !self.is_token(SyntaxKind::CloseParenToken) {
            if self.is_token(SyntaxKind::DotDotDotToken) {
                let rest_pos = self.token_pos();
                self.next_token()?;
                let argument = self.allow_in(|p| {
                    p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
                })?;
                items.add(Argument::Spread(SpreadElement {
                    span: self.finish(rest_pos),
                    argument,
                }));
                if !self.is_token(SyntaxKind::CloseParenToken) {
                    return Err(self.error_at(
                        self.token_pos(),
                        diagnostic_codes::REST_PARAMETER_NOT_LAST,
                        diagnostic_messages::REST_PARAMETER_NOT_LAST,
                    ));
                }
                break;
            }
            items.add(Argument::Expression(self.allow_in(|p| {
                p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
            })?));
            if !self.is_token(SyntaxKind::CommaToken) {
                break;
            }
            self.next_token()?;
            trailing_comma = self.is_token(SyntaxKind::CloseParenToken);
        }
        let close_pos = self.token_pos();
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok((items, trailing_comma, close_pos))
    }

    // =========================================================================
    // Parse Methods - Arrow Functions
    // =========================================================================

    fn check_arrow_parameter_cover(
        &mut self,
        (first_await, first_yield): ParameterCover,
        is_async: bool,
    ) -> ParseResult<()> {
        if let Some(yield_pos) = first_yield {
            self.tolerate_at(
                yield_pos,
                diagnostic_codes::YIELD_IN_PARAMETER,
                diagnostic_messages::YIELD_IN_PARAMETER,
            )?;
        }
        if let Some(await_pos) = first_await {
            if is_async || self.in_context(ContextFlags::AWAIT) {
                self.tolerate_at(
                    await_pos,
                    diagnostic_codes::AWAIT_IN_PARAMETER,
                    diagnostic_messages::AWAIT_IN_PARAMETER,
                )?;
            }
        }
        Ok(())
    }

    fn arrow_parameters_from(&mut self, items: NodeList<Argument>) -> ParseResult<Box<[Pattern]>> {
        let len = items.len();
        let mut params = NodeList::with_capacity(len);
        for (index, item) in items.freeze().into_vec().into_iter().enumerate() {
            let param = match item {
                Argument::Expression(expression) => self.expression_to_parameter(expression)?,
                Argument::Spread(spread) => {
                    let start = spread.span.start;
                    if index + 1 != len || self.invalid_rest_offsets.contains(&start.offset) {
                        return Err(self.error_at(
                            start,
                            diagnostic_codes::REST_PARAMETER_NOT_LAST,
                            diagnostic_messages::REST_PARAMETER_NOT_LAST,
                        ));
                    }
                    if matches!(spread.argument, Expression::Assignment(_)) {
                        return Err(self.error_at(
                            spread.argument.span().start,
                            diagnostic_codes::REST_WITH_INITIALIZER,
                            diagnostic_messages::REST_WITH_INITIALIZER,
                        ));
                    }
                    let argument = self.expression_to_parameter(spread.argument)?;
                    Pattern::Rest(RestElement {
                        span: spread.span,
                        argument: Box::new(argument),
                    })
                }
            };
            params.add(param);
        }
        Ok(params.freeze())
    }

    /// Parse `=> body` for already converted parameters.
    fn parse_arrow_function(
        &mut self,
        pos: Position,
        params: Box<[Pattern]>,
        is_async: bool,
    ) -> ParseResult<Expression> {
        tracing::trace!(offset = pos.offset, is_async, "parse_arrow_function");
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;

        let mut set = ContextFlags::IN_FUNCTION;
        if is_async {
            set |= ContextFlags::AWAIT;
        }
        let mut clear = ContextFlags::AWAIT
            | ContextFlags::YIELD
            | ContextFlags::IN_PARAMETERS
            | ContextFlags::IN_ITERATION
            | ContextFlags::IN_SWITCH;
        let block_body = self.is_token(SyntaxKind::OpenBraceToken);
        if block_body {
            clear |= ContextFlags::DISALLOW_IN;
        }

        let saved_flags = self.context_flags;
        self.context_flags = (saved_flags - clear) | set;
        self.labels.enter_function();
        self.scope.enter(ScopeKind::Function);

        let result = self.parse_arrow_body(&params, block_body);

        self.scope.exit();
        self.labels.exit_function();
        self.context_flags = saved_flags;
        let body = result?;

        Ok(Expression::ArrowFunction(Box::new(ArrowFunctionExpression {
            span: self.finish(pos),
            params,
            expression: !block_body,
            body,
            is_async,
        })))
    }

    fn parse_arrow_body(&mut self, params: &[Pattern], block_body: bool) -> ParseResult<ArrowBody> {
        for name in bound_names(params) {
            self.scope.declare_var(name.atom);
        }
        self.check_duplicate_parameters(params)?;

        if !block_body {
            let body = self.parse_assignment_expression()?;
            return Ok(ArrowBody::Expression(Box::new(body)));
        }

        let was_strict = self.is_strict();
        let (body, use_strict) = self.parse_function_body()?;
        if let Some(directive_pos) = use_strict {
            let simple = params.iter().all(|p| matches!(p, Pattern::Identifier(_)));
            if !simple {
                self.tolerate_at(
                    directive_pos,
                    diagnostic_codes::USE_STRICT_NON_SIMPLE_PARAMS,
                    diagnostic_messages::USE_STRICT_NON_SIMPLE_PARAMS,
                )?;
            }
            if !was_strict {
                for name in bound_names(params) {
                    self.check_strict_binding_name(name)?;
                }
            }
        }
        Ok(ArrowBody::Block(body))
    }

    // =========================================================================
    // Parse Methods - Literals
    // =========================================================================

    /// Numeric, BigInt or string literal at the cursor.
    pub(crate) fn parse_literal(&mut self) -> ParseResult<Literal> {
        let pos = self.token_pos();
        self.check_strict_literal()?;
        let raw = self.scanner.get_token_text().to_string();
        let value = match self.token() {
            SyntaxKind::NumericLiteral => LiteralValue::Number(self.scanner.get_number_value()),
            SyntaxKind::BigIntLiteral => {
                LiteralValue::BigInt(raw.trim_end_matches('n').replace('_', ""))
            }
            SyntaxKind::StringLiteral => LiteralValue::String(self.token_value().to_string()),
            _ => return Err(self.unexpected_token_error()),
        };
        self.next_token()?;
        Ok(Literal {
            span: self.finish(pos),
            value,
            raw,
        })
    }

    fn check_strict_literal(&mut self) -> ParseResult<()> {
        if !self.is_strict() {
            return Ok(());
        }
        let flags = self.scanner.get_token_flags();
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::NumericLiteral if flags.contains(TokenFlags::OCTAL) => self.tolerate_at(
                pos,
                diagnostic_codes::STRICT_OCTAL_LITERAL,
                diagnostic_messages::STRICT_OCTAL_LITERAL,
            ),
            SyntaxKind::NumericLiteral if flags.contains(TokenFlags::NON_OCTAL_DECIMAL) => self
                .tolerate_at(
                    pos,
                    diagnostic_codes::STRICT_LEADING_ZERO_DECIMAL,
                    diagnostic_messages::STRICT_LEADING_ZERO_DECIMAL,
                ),
            SyntaxKind::StringLiteral
                if flags.intersects(TokenFlags::OCTAL | TokenFlags::NON_OCTAL_DECIMAL) =>
            {
                self.tolerate_at(
                    pos,
                    diagnostic_codes::STRICT_OCTAL_ESCAPE,
                    diagnostic_messages::STRICT_OCTAL_ESCAPE,
                )
            }
            _ => Ok(()),
        }
    }

    fn parse_regex_literal(&mut self) -> ParseResult<Literal> {
        let pos = self.token_pos();
        let raw = self.scanner.get_token_text().to_string();
        let value = LiteralValue::RegExp {
            pattern: self.token_value().to_string(),
            flags: self.scanner.get_regex_flags().to_string(),
        };
        self.next_token()?;
        Ok(Literal {
            span: self.finish(pos),
            value,
            raw,
        })
    }

    /// Template literal starting at the current template token. Untagged
    /// templates may not contain invalid escapes.
    fn parse_template_literal(&mut self, tagged: bool) -> ParseResult<TemplateLiteral> {
        let pos = self.token_pos();
        let mut quasis = NodeList::new();
        let mut expressions = NodeList::new();
        loop {
            let kind = self.token();
            quasis.add(self.template_element(tagged)?);
            self.next_token()?;
            if matches!(
                kind,
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateTail
            ) {
                break;
            }
            expressions.add(self.allow_in(|p| p.parse_expression())?);
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                return Err(self.unexpected_token_error());
            }
            self.re_scan_template()?;
        }
        Ok(TemplateLiteral {
            span: self.finish(pos),
            quasis: quasis.freeze(),
            expressions: expressions.freeze(),
        })
    }

    fn template_element(&mut self, tagged: bool) -> ParseResult<TemplateElement> {
        let kind = self.token();
        let span = self.token_span();
        let invalid_escape = self
            .scanner
            .get_token_flags()
            .contains(TokenFlags::CONTAINS_INVALID_ESCAPE);
        let cooked = if invalid_escape {
            if !tagged {
                self.tolerate_at(
                    span.start,
                    diagnostic_codes::INVALID_TEMPLATE_ESCAPE,
                    diagnostic_messages::INVALID_TEMPLATE_ESCAPE,
                )?;
            }
            None
        } else {
            Some(self.token_value().to_string())
        };
        Ok(TemplateElement {
            span,
            value: TemplateValue {
                raw: self.scanner.get_template_raw(),
                cooked,
            },
            tail: matches!(
                kind,
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateTail
            ),
        })
    }

    // =========================================================================
    // Parse Methods - Array and Object Literals
    // =========================================================================

    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        self.next_token()?;
        let mut elements = NodeList::new();
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.parse_optional(SyntaxKind::CommaToken)? {
                elements.add(None);
                continue;
            }
            let items = self.parse_cover_item()?;
            elements.add(Some(items));
            if !self.is_token(SyntaxKind::CloseBracketToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(Expression::Array(ArrayExpression {
            span: self.finish(pos),
            elements: elements.freeze(),
        }))
    }

    /// One array element or spread, parsed so it can still become a pattern.
    fn parse_cover_item(&mut self) -> ParseResult<Argument> {
        if !self.is_token(SyntaxKind::DotDotDotToken) {
            let expression = self.allow_in(|p| {
                p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
            })?;
            return Ok(Argument::Expression(expression));
        }
        Ok(Argument::Spread(self.parse_cover_spread()?))
    }

    fn parse_cover_spread(&mut self) -> ParseResult<SpreadElement> {
        let pos = self.token_pos();
        self.next_token()?;
        let argument = self.allow_in(|p| {
            p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
        })?;
        if self.is_token(SyntaxKind::CommaToken) {
            self.invalid_rest_offsets.insert(pos.offset);
        }
        Ok(SpreadElement {
            span: self.finish(pos),
            argument,
        })
    }

    fn parse_object_literal(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        self.next_token()?;
        let mut properties = NodeList::new();
        let mut has_proto = false;
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.is_token(SyntaxKind::DotDotDotToken) {
                properties.add(ObjectProperty::Spread(self.parse_cover_spread()?));
            } else {
                properties.add(ObjectProperty::Property(
                    self.parse_object_property(&mut has_proto)?,
                ));
            }
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Expression::Object(ObjectExpression {
            span: self.finish(pos),
            properties: properties.freeze(),
        }))
    }

    /// `get`, `set` or `async` followed by something that makes it the
    /// property name itself.
    fn property_modifier_is_name(&mut self) -> bool {
        let next = self.peek_token();
        matches!(
            next.kind,
            SyntaxKind::OpenParenToken
                | SyntaxKind::ColonToken
                | SyntaxKind::CommaToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EqualsToken
        )
    }

    fn parse_object_property(&mut self, has_proto: &mut bool) -> ParseResult<Property> {
        let pos = self.token_pos();

        let mut is_async = false;
        if self.is_contextual(SyntaxKind::AsyncKeyword)
            && !self.property_modifier_is_name()
            && !self.peek_token().line_break
        {
            is_async = true;
            self.next_token()?;
        }
        let generator = self.parse_optional(SyntaxKind::AsteriskToken)?;

        let mut kind = PropertyKind::Init;
        if !is_async
            && !generator
            && (self.is_contextual(SyntaxKind::GetKeyword)
                || self.is_contextual(SyntaxKind::SetKeyword))
            && !self.property_modifier_is_name()
        {
            kind = if self.is_token(SyntaxKind::GetKeyword) {
                PropertyKind::Get
            } else {
                PropertyKind::Set
            };
            self.next_token()?;
        }

        let shorthand = if self.is_identifier_token() {
            Some(self.identifier_from_token())
        } else {
            None
        };
        let (key, computed) = self.parse_property_key()?;

        if kind != PropertyKind::Init {
            let flavor = if kind == PropertyKind::Get {
                FunctionFlavor::Getter
            } else {
                FunctionFlavor::Setter
            };
            let value = self.parse_object_method(flavor, false, false)?;
            return Ok(Property {
                span: self.finish(pos),
                key,
                value,
                kind,
                method: false,
                shorthand: false,
                computed,
            });
        }

        if is_async || generator || self.is_token(SyntaxKind::OpenParenToken) {
            let value = self.parse_object_method(FunctionFlavor::Method, is_async, generator)?;
            return Ok(Property {
                span: self.finish(pos),
                key,
                value,
                kind,
                method: true,
                shorthand: false,
                computed,
            });
        }

        if self.parse_optional(SyntaxKind::ColonToken)? {
            if !computed && key.static_name() == Some("__proto__") {
                if *has_proto {
                    let error = self.error_at(
                        pos,
                        diagnostic_codes::DUPLICATE_PROTO,
                        diagnostic_messages::DUPLICATE_PROTO,
                    );
                    self.set_cover_error(error);
                }
                *has_proto = true;
            }
            let value = self.allow_in(|p| {
                p.inherit_cover_grammar(|p| p.parse_assignment_expression_cover())
            })?;
            return Ok(Property {
                span: self.finish(pos),
                key,
                value,
                kind,
                method: false,
                shorthand: false,
                computed,
            });
        }

        let Some(id) = shorthand else {
            return Err(self.unexpected_token_error());
        };
        self.check_identifier_reference(&id)?;
        let value = if self.is_token(SyntaxKind::EqualsToken) {
            // `{a = 1}` is only valid once the literal becomes a pattern.
            let error = self.error_at(
                self.token_pos(),
                diagnostic_codes::UNEXPECTED_TOKEN,
                format_message(diagnostic_messages::UNEXPECTED_TOKEN, &["="]),
            );
            self.set_cover_error(error);
            self.next_token()?;
            let right = self.allow_in(|p| p.parse_assignment_expression())?;
            Expression::Assignment(AssignmentExpression {
                span: self.finish(pos),
                operator: AssignmentOperator::Assign,
                left: Box::new(Pattern::Identifier(id)),
                right: Box::new(right),
            })
        } else {
            Expression::Identifier(id)
        };
        Ok(Property {
            span: self.finish(pos),
            key,
            value,
            kind,
            method: false,
            shorthand: true,
            computed: false,
        })
    }

    fn parse_object_method(
        &mut self,
        flavor: FunctionFlavor,
        is_async: bool,
        generator: bool,
    ) -> ParseResult<Expression> {
        if !self.is_token(SyntaxKind::OpenParenToken) {
            return Err(self.unexpected_token_error());
        }
        let function = self.parse_method_function(FunctionShape {
            flavor,
            is_async,
            generator,
        })?;
        Ok(Expression::Function(function))
    }

    /// Property name: identifier name, string, number, or `[computed]`.
    /// Returns the key and whether it is computed.
    pub(crate) fn parse_property_key(&mut self) -> ParseResult<(PropertyKey, bool)> {
        match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                Ok((PropertyKey::Literal(self.parse_literal()?), false))
            }
            SyntaxKind::OpenBracketToken => {
                self.next_token()?;
                let expression = self.allow_in(|p| p.parse_assignment_expression())?;
                self.parse_expected(SyntaxKind::CloseBracketToken)?;
                Ok((PropertyKey::Computed(Box::new(expression)), true))
            }
            kind if kind.is_identifier_or_keyword() => {
                Ok((PropertyKey::Identifier(self.parse_identifier_name()?), false))
            }
            _ => Err(self.unexpected_token_error()),
        }
    }

    // =========================================================================
    // Private Names
    // =========================================================================

    /// `#name` at the cursor, without recording a use.
    pub(crate) fn parse_private_identifier(&mut self) -> ParseResult<PrivateIdentifier> {
        if !self.is_token(SyntaxKind::PrivateIdentifier) {
            return Err(self.unexpected_token_error());
        }
        let private = PrivateIdentifier {
            span: self.token_span(),
            name: self.token_value().to_string(),
            atom: self.token_atom(),
        };
        self.next_token()?;
        Ok(private)
    }

    /// `#name` used in `obj.#name` or `#name in obj`; resolved against the
    /// enclosing classes when the outermost one closes.
    fn parse_private_name_reference(&mut self) -> ParseResult<PrivateIdentifier> {
        let private = self.parse_private_identifier()?;
        if !self.private_names.use_name(private.atom, private.span.start) {
            self.tolerate_at(
                private.span.start,
                diagnostic_codes::UNDECLARED_PRIVATE_NAME,
                format_message(diagnostic_messages::UNDECLARED_PRIVATE_NAME, &[&private.name]),
            )?;
        }
        Ok(private)
    }
}

/// Arrows bind looser than every operator: once parsed they end the
/// expression unless parenthesized.
#[inline]
fn is_arrow(expression: &Expression) -> bool {
    matches!(expression, Expression::ArrowFunction(_))
}

/// Tokens that can begin an `AssignmentExpression` (decides whether `yield`
/// has an operand).
fn can_start_expression(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    if is_binding_identifier_kind(kind) || kind.is_literal() || kind.is_template() {
        return true;
    }
    matches!(
        kind,
        OpenParenToken
            | OpenBracketToken
            | OpenBraceToken
            | PlusToken
            | MinusToken
            | ExclamationToken
            | TildeToken
            | PlusPlusToken
            | MinusMinusToken
            | SlashToken
            | SlashEqualsToken
            | LessThanToken
            | PrivateIdentifier
            | ThisKeyword
            | SuperKeyword
            | NewKeyword
            | ImportKeyword
            | FunctionKeyword
            | ClassKeyword
            | TrueKeyword
            | FalseKeyword
            | NullKeyword
            | TypeOfKeyword
            | VoidKeyword
            | DeleteKeyword
    )
}

fn assignment_operator(kind: SyntaxKind) -> Option<AssignmentOperator> {
    use AssignmentOperator as Op;
    Some(match kind {
        SyntaxKind::EqualsToken => Op::Assign,
        SyntaxKind::PlusEqualsToken => Op::Addition,
        SyntaxKind::MinusEqualsToken => Op::Subtraction,
        SyntaxKind::AsteriskEqualsToken => Op::Multiplication,
        SyntaxKind::SlashEqualsToken => Op::Division,
        SyntaxKind::PercentEqualsToken => Op::Remainder,
        SyntaxKind::AsteriskAsteriskEqualsToken => Op::Exponential,
        SyntaxKind::LessThanLessThanEqualsToken => Op::ShiftLeft,
        SyntaxKind::GreaterThanGreaterThanEqualsToken => Op::ShiftRight,
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Op::ShiftRightZeroFill,
        SyntaxKind::BarEqualsToken => Op::BitwiseOr,
        SyntaxKind::CaretEqualsToken => Op::BitwiseXor,
        SyntaxKind::AmpersandEqualsToken => Op::BitwiseAnd,
        SyntaxKind::BarBarEqualsToken => Op::LogicalOr,
        SyntaxKind::AmpersandAmpersandEqualsToken => Op::LogicalAnd,
        SyntaxKind::QuestionQuestionEqualsToken => Op::LogicalNullish,
        _ => return None,
    })
}

fn logical_operator(kind: SyntaxKind) -> Option<LogicalOperator> {
    match kind {
        SyntaxKind::BarBarToken => Some(LogicalOperator::Or),
        SyntaxKind::AmpersandAmpersandToken => Some(LogicalOperator::And),
        SyntaxKind::QuestionQuestionToken => Some(LogicalOperator::Coalesce),
        _ => None,
    }
}

fn binary_operator(kind: SyntaxKind) -> Option<BinaryOperator> {
    use BinaryOperator as Op;
    Some(match kind {
        SyntaxKind::EqualsEqualsToken => Op::Equality,
        SyntaxKind::ExclamationEqualsToken => Op::Inequality,
        SyntaxKind::EqualsEqualsEqualsToken => Op::StrictEquality,
        SyntaxKind::ExclamationEqualsEqualsToken => Op::StrictInequality,
        SyntaxKind::LessThanToken => Op::LessThan,
        SyntaxKind::LessThanEqualsToken => Op::LessEqualThan,
        SyntaxKind::GreaterThanToken => Op::GreaterThan,
        SyntaxKind::GreaterThanEqualsToken => Op::GreaterEqualThan,
        SyntaxKind::LessThanLessThanToken => Op::ShiftLeft,
        SyntaxKind::GreaterThanGreaterThanToken => Op::ShiftRight,
        SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Op::ShiftRightZeroFill,
        SyntaxKind::PlusToken => Op::Addition,
        SyntaxKind::MinusToken => Op::Subtraction,
        SyntaxKind::AsteriskToken => Op::Multiplication,
        SyntaxKind::SlashToken => Op::Division,
        SyntaxKind::PercentToken => Op::Remainder,
        SyntaxKind::AsteriskAsteriskToken => Op::Exponential,
        SyntaxKind::BarToken => Op::BitwiseOr,
        SyntaxKind::CaretToken => Op::BitwiseXor,
        SyntaxKind::AmpersandToken => Op::BitwiseAnd,
        SyntaxKind::InKeyword => Op::In,
        SyntaxKind::InstanceOfKeyword => Op::Instanceof,
        _ => return None,
    })
}

fn unary_operator(kind: SyntaxKind) -> Option<UnaryOperator> {
    Some(match kind {
        SyntaxKind::MinusToken => UnaryOperator::Minus,
        SyntaxKind::PlusToken => UnaryOperator::Plus,
        SyntaxKind::ExclamationToken => UnaryOperator::LogicalNot,
        SyntaxKind::TildeToken => UnaryOperator::BitwiseNot,
        SyntaxKind::TypeOfKeyword => UnaryOperator::Typeof,
        SyntaxKind::VoidKeyword => UnaryOperator::Void,
        SyntaxKind::DeleteKeyword => UnaryOperator::Delete,
        _ => return None,
    })
}
