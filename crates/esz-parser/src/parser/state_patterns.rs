//! Parser state - binding patterns and expression-to-pattern reinterpretation
//!
//! Destructuring targets in assignments and arrow parameters are parsed as
//! expressions first (array and object literals) and converted here once the
//! `=` or `=>` that decides their meaning has been seen. Declarations and
//! function parameters parse binding patterns directly.

use esz_common::{Position, Spanned, diagnostic_codes, diagnostic_messages};
use esz_scanner::SyntaxKind;

use super::error::{ParseError, ParseResult};
use super::node::{
    Argument, ArrayExpression, ArrayPattern, AssignmentOperator, AssignmentPattern,
    AssignmentProperty, Expression, Identifier, ObjectExpression, ObjectPattern,
    ObjectPatternProperty, ObjectProperty, Pattern, PropertyKind, RestElement,
};
use super::node_list::NodeList;
use super::state::{ParserState, is_eval_or_arguments};
use super::state_declarations::BindingKind;

/// What a reinterpreted expression is going to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TargetMode {
    /// Left side of `=` or a `for-in/of` head: member targets are allowed.
    Assignment,
    /// Arrow parameters: identifiers only.
    Binding,
}

impl ParserState {
    // =========================================================================
    // Parse Methods - Binding Patterns
    // =========================================================================

    /// Identifier, `[...]` or `{...}` binding target; declares every bound name.
    pub(crate) fn parse_binding_target(&mut self, kind: BindingKind) -> ParseResult<Pattern> {
        match self.token() {
            SyntaxKind::OpenBracketToken => {
                self.with_recursion(|p| p.parse_array_binding_pattern(kind))
            }
            SyntaxKind::OpenBraceToken => {
                self.with_recursion(|p| p.parse_object_binding_pattern(kind))
            }
            _ => {
                let id = self.parse_binding_identifier()?;
                self.declare_name(&id, kind)?;
                Ok(Pattern::Identifier(id))
            }
        }
    }

    /// Binding target with an optional `= default`.
    pub(crate) fn parse_binding_element(&mut self, kind: BindingKind) -> ParseResult<Pattern> {
        let pos = self.token_pos();
        let target = self.parse_binding_target(kind)?;
        if !self.parse_optional(SyntaxKind::EqualsToken)? {
            return Ok(target);
        }
        let right = self.allow_in(|p| p.parse_assignment_expression())?;
        Ok(Pattern::Assignment(AssignmentPattern {
            span: self.finish(pos),
            left: Box::new(target),
            right: Box::new(right),
        }))
    }

    fn parse_array_binding_pattern(&mut self, kind: BindingKind) -> ParseResult<Pattern> {
        let pos = self.token_pos();
        self.next_token()?;
        let mut elements = NodeList::new();
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.parse_optional(SyntaxKind::CommaToken)? {
                elements.add(None);
                continue;
            }
            if self.is_token(SyntaxKind::DotDotDotToken) {
                let rest_pos = self.token_pos();
                self.next_token()?;
                let argument = self.parse_binding_target(kind)?;
                elements.add(Some(Pattern::Rest(RestElement {
                    span: self.finish(rest_pos),
                    argument: Box::new(argument),
                })));
                if !self.is_token(SyntaxKind::CloseBracketToken) {
                    return Err(self.rest_not_last(self.token_pos()));
                }
                break;
            }
            elements.add(Some(self.parse_binding_element(kind)?));
            if !self.is_token(SyntaxKind::CloseBracketToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(Pattern::Array(ArrayPattern {
            span: self.finish(pos),
            elements: elements.freeze(),
        }))
    }

    fn parse_object_binding_pattern(&mut self, kind: BindingKind) -> ParseResult<Pattern> {
        let pos = self.token_pos();
        self.next_token()?;
        let mut properties = NodeList::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.is_token(SyntaxKind::DotDotDotToken) {
                let rest_pos = self.token_pos();
                self.next_token()?;
                let id = self.parse_binding_identifier()?;
                self.declare_name(&id, kind)?;
                properties.add(ObjectPatternProperty::Rest(RestElement {
                    span: self.finish(rest_pos),
                    argument: Box::new(Pattern::Identifier(id)),
                }));
                if !self.is_token(SyntaxKind::CloseBraceToken) {
                    return Err(self.rest_not_last(self.token_pos()));
                }
                break;
            }
            properties.add(self.parse_binding_property(kind)?);
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Pattern::Object(ObjectPattern {
            span: self.finish(pos),
            properties: properties.freeze(),
        }))
    }

    fn parse_binding_property(&mut self, kind: BindingKind) -> ParseResult<ObjectPatternProperty> {
        let pos = self.token_pos();
        let shorthand_id = if self.is_identifier_token() {
            Some(self.identifier_from_token())
        } else {
            None
        };
        let (key, computed) = self.parse_property_key()?;

        if self.parse_optional(SyntaxKind::ColonToken)? {
            let value = self.parse_binding_element(kind)?;
            return Ok(ObjectPatternProperty::Property(AssignmentProperty {
                span: self.finish(pos),
                key,
                value,
                shorthand: false,
                computed,
            }));
        }

        let Some(id) = shorthand_id else {
            return Err(self.unexpected_token_error());
        };
        self.check_binding_identifier(&id)?;
        self.declare_name(&id, kind)?;
        let mut value = Pattern::Identifier(id);
        if self.parse_optional(SyntaxKind::EqualsToken)? {
            let right = self.allow_in(|p| p.parse_assignment_expression())?;
            value = Pattern::Assignment(AssignmentPattern {
                span: self.finish(pos),
                left: Box::new(value),
                right: Box::new(right),
            });
        }
        Ok(ObjectPatternProperty::Property(AssignmentProperty {
            span: self.finish(pos),
            key,
            value,
            shorthand: true,
            computed: false,
        }))
    }

    // =========================================================================
    // Reinterpretation
    // =========================================================================

    /// Convert the left side of `=` (or a `for-in/of` head) into a pattern.
    /// `code`/`message` report a target that can never be assigned to.
    pub(crate) fn expression_to_assignment_target(
        &mut self,
        expression: Expression,
        code: u32,
        message: &'static str,
    ) -> ParseResult<Pattern> {
        match expression {
            Expression::Array(_) | Expression::Object(_) => {
                self.pattern_from_expression(expression, TargetMode::Assignment)
            }
            Expression::Identifier(_) | Expression::Member(_) | Expression::Parenthesized(_) => {
                self.simple_target_from_expression(expression, code, message)
            }
            other => Err(self.error_at(other.span().start, code, message)),
        }
    }

    /// Convert one arrow parameter (possibly with a default) to a pattern.
    pub(crate) fn expression_to_parameter(&mut self, expression: Expression) -> ParseResult<Pattern> {
        self.element_pattern_from(expression, TargetMode::Binding)
    }

    /// Identifier or member target of a compound assignment or update.
    pub(crate) fn simple_target_from_expression(
        &mut self,
        expression: Expression,
        code: u32,
        message: &'static str,
    ) -> ParseResult<Pattern> {
        match expression {
            Expression::Identifier(id) => {
                self.check_assignment_to_identifier(&id)?;
                Ok(Pattern::Identifier(id))
            }
            Expression::Member(member) => Ok(Pattern::Member(member)),
            Expression::Parenthesized(paren) => {
                self.simple_target_from_expression(*paren.expression, code, message)
            }
            other => Err(self.error_at(other.span().start, code, message)),
        }
    }

    /// Validate an update-expression operand without converting it.
    pub(crate) fn check_simple_target(
        &mut self,
        expression: &Expression,
        code: u32,
        message: &'static str,
    ) -> ParseResult<()> {
        match expression.without_parentheses() {
            Expression::Identifier(id) => self.check_assignment_to_identifier(id),
            Expression::Member(_) => Ok(()),
            other => Err(self.error_at(other.span().start, code, message)),
        }
    }

    pub(crate) fn check_assignment_to_identifier(&mut self, id: &Identifier) -> ParseResult<()> {
        if self.is_strict() && is_eval_or_arguments(id.atom) {
            self.tolerate_at(
                id.span.start,
                diagnostic_codes::STRICT_EVAL_ARGUMENTS,
                diagnostic_messages::STRICT_EVAL_ARGUMENTS,
            )?;
        }
        Ok(())
    }

    fn pattern_from_expression(
        &mut self,
        expression: Expression,
        mode: TargetMode,
    ) -> ParseResult<Pattern> {
        self.with_stack(|p| p.pattern_from_expression_inner(expression, mode))
    }

    fn pattern_from_expression_inner(
        &mut self,
        expression: Expression,
        mode: TargetMode,
    ) -> ParseResult<Pattern> {
        match expression {
            Expression::Array(array) => self.array_pattern_from(array, mode),
            Expression::Object(object) => self.object_pattern_from(object, mode),
            Expression::Identifier(id) => {
                self.check_assignment_to_identifier(&id)?;
                Ok(Pattern::Identifier(id))
            }
            Expression::Member(member) if mode == TargetMode::Assignment => {
                Ok(Pattern::Member(member))
            }
            Expression::Parenthesized(paren)
                if mode == TargetMode::Assignment
                    && matches!(
                        paren.expression.without_parentheses(),
                        Expression::Identifier(_) | Expression::Member(_)
                    ) =>
            {
                self.pattern_from_expression(*paren.expression, mode)
            }
            other => Err(self.invalid_destructuring_target(other.span().start)),
        }
    }

    /// A destructuring element: a target, or `target = default`.
    fn element_pattern_from(
        &mut self,
        expression: Expression,
        mode: TargetMode,
    ) -> ParseResult<Pattern> {
        match expression {
            Expression::Assignment(assign) if assign.operator == AssignmentOperator::Assign => {
                if mode == TargetMode::Binding {
                    self.check_binding_pattern(&assign.left)?;
                }
                Ok(Pattern::Assignment(AssignmentPattern {
                    span: assign.span,
                    left: assign.left,
                    right: assign.right,
                }))
            }
            other => self.pattern_from_expression(other, mode),
        }
    }

    fn array_pattern_from(
        &mut self,
        array: ArrayExpression,
        mode: TargetMode,
    ) -> ParseResult<Pattern> {
        let len = array.elements.len();
        let mut elements = NodeList::with_capacity(len);
        for (index, element) in array.elements.into_vec().into_iter().enumerate() {
            let pattern = match element {
                None => None,
                Some(Argument::Spread(spread)) => {
                    let start = spread.span.start;
                    if index + 1 != len || self.invalid_rest_offsets.contains(&start.offset) {
                        return Err(self.rest_not_last(start));
                    }
                    if matches!(spread.argument, Expression::Assignment(_)) {
                        return Err(self.invalid_destructuring_target(spread.argument.span().start));
                    }
                    let argument = self.pattern_from_expression(spread.argument, mode)?;
                    Some(Pattern::Rest(RestElement {
                        span: spread.span,
                        argument: Box::new(argument),
                    }))
                }
                Some(Argument::Expression(expression)) => {
                    Some(self.element_pattern_from(expression, mode)?)
                }
            };
            elements.add(pattern);
        }
        Ok(Pattern::Array(ArrayPattern {
            span: array.span,
            elements: elements.freeze(),
        }))
    }

    fn object_pattern_from(
        &mut self,
        object: ObjectExpression,
        mode: TargetMode,
    ) -> ParseResult<Pattern> {
        let len = object.properties.len();
        let mut properties = NodeList::with_capacity(len);
        for (index, property) in object.properties.into_vec().into_iter().enumerate() {
            let converted = match property {
                ObjectProperty::Property(property) => {
                    if property.method || property.kind != PropertyKind::Init {
                        return Err(self.invalid_destructuring_target(property.span.start));
                    }
                    let value = self.element_pattern_from(property.value, mode)?;
                    ObjectPatternProperty::Property(AssignmentProperty {
                        span: property.span,
                        key: property.key,
                        value,
                        shorthand: property.shorthand,
                        computed: property.computed,
                    })
                }
                ObjectProperty::Spread(spread) => {
                    let start = spread.span.start;
                    if index + 1 != len || self.invalid_rest_offsets.contains(&start.offset) {
                        return Err(self.rest_not_last(start));
                    }
                    let argument = match (spread.argument, mode) {
                        (Expression::Identifier(id), _) => {
                            self.check_assignment_to_identifier(&id)?;
                            Pattern::Identifier(id)
                        }
                        (
                            argument @ (Expression::Member(_) | Expression::Parenthesized(_)),
                            TargetMode::Assignment,
                        ) => self.simple_target_from_expression(
                            argument,
                            diagnostic_codes::INVALID_DESTRUCTURING_TARGET,
                            diagnostic_messages::INVALID_DESTRUCTURING_TARGET,
                        )?,
                        (other, _) => {
                            return Err(self.invalid_destructuring_target(other.span().start));
                        }
                    };
                    ObjectPatternProperty::Rest(RestElement {
                        span: spread.span,
                        argument: Box::new(argument),
                    })
                }
            };
            properties.add(converted);
        }
        Ok(Pattern::Object(ObjectPattern {
            span: object.span,
            properties: properties.freeze(),
        }))
    }

    /// Arrow parameters cannot contain member targets.
    fn check_binding_pattern(&mut self, pattern: &Pattern) -> ParseResult<()> {
        match pattern {
            Pattern::Identifier(_) => Ok(()),
            Pattern::Member(member) => Err(self.invalid_destructuring_target(member.span.start)),
            Pattern::Object(object) => {
                for property in &object.properties {
                    match property {
                        ObjectPatternProperty::Property(property) => {
                            self.check_binding_pattern(&property.value)?
                        }
                        ObjectPatternProperty::Rest(rest) => {
                            self.check_binding_pattern(&rest.argument)?
                        }
                    }
                }
                Ok(())
            }
            Pattern::Array(array) => {
                for element in array.elements.iter().flatten() {
                    self.check_binding_pattern(element)?;
                }
                Ok(())
            }
            Pattern::Assignment(assign) => self.check_binding_pattern(&assign.left),
            Pattern::Rest(rest) => self.check_binding_pattern(&rest.argument),
        }
    }

    fn invalid_destructuring_target(&self, pos: Position) -> ParseError {
        self.error_at(
            pos,
            diagnostic_codes::INVALID_DESTRUCTURING_TARGET,
            diagnostic_messages::INVALID_DESTRUCTURING_TARGET,
        )
    }

    pub(crate) fn rest_not_last(&self, pos: Position) -> ParseError {
        self.error_at(
            pos,
            diagnostic_codes::REST_ELEMENT_NOT_LAST,
            diagnostic_messages::REST_ELEMENT_NOT_LAST,
        )
    }
}

/// Every identifier bound by `patterns`, in source order.
pub(crate) fn bound_names(patterns: &[Pattern]) -> Vec<&Identifier> {
    let mut names = Vec::new();
    for pattern in patterns {
        collect_bound_names(pattern, &mut names);
    }
    names
}

pub(crate) fn collect_bound_names<'a>(pattern: &'a Pattern, out: &mut Vec<&'a Identifier>) {
    match pattern {
        Pattern::Identifier(id) => out.push(id),
        Pattern::Member(_) => {}
        Pattern::Object(object) => {
            for property in &object.properties {
                match property {
                    ObjectPatternProperty::Property(property) => {
                        collect_bound_names(&property.value, out)
                    }
                    ObjectPatternProperty::Rest(rest) => collect_bound_names(&rest.argument, out),
                }
            }
        }
        Pattern::Array(array) => {
            for element in array.elements.iter().flatten() {
                collect_bound_names(element, out);
            }
        }
        Pattern::Assignment(assign) => collect_bound_names(&assign.left, out),
        Pattern::Rest(rest) => collect_bound_names(&rest.argument, out),
    }
}
