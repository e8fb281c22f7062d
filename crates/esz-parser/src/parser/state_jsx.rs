//! Parser state - JSX elements and fragments
//!
//! Tags are scanned with the normal scanner; text between tags, quoted
//! attribute values and hyphenated names use the JSX scan goals. Each `>`
//! that closes a tag is consumed with the goal of whatever follows it: child
//! content inside an element, the normal goal after the outermost one.

use esz_common::{Position, Span, diagnostic_codes, diagnostic_messages, format_message};
use esz_scanner::SyntaxKind;

use super::error::ParseResult;
use super::node::{
    Expression, JsxAttribute, JsxAttributeItem, JsxAttributeValue, JsxChild, JsxClosingElement,
    JsxClosingFragment, JsxElement, JsxElementName, JsxEmptyExpression, JsxExpression,
    JsxExpressionContainer, JsxFragment, JsxIdentifier, JsxMemberExpression,
    JsxNamespacedName, JsxOpeningElement, JsxOpeningFragment, JsxSpreadAttribute,
    JsxSpreadChild, JsxText, Literal, LiteralValue,
};
use super::node_list::NodeList;
use super::state::ParserState;

enum JsxNode {
    Element(Box<JsxElement>),
    Fragment(Box<JsxFragment>),
}

/// How to scan the token after a tag's closing `>`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum After {
    /// The tag is nested: more child content follows.
    Child,
    /// The tag ends the outermost element.
    Expression,
}

impl ParserState {
    // =========================================================================
    // Parse Methods - JSX
    // =========================================================================

    /// `<...>` in expression position.
    pub(crate) fn parse_jsx_element_or_fragment(&mut self) -> ParseResult<Expression> {
        let pos = self.token_pos();
        tracing::trace!(offset = pos.offset, "parse_jsx_element_or_fragment");
        self.next_token()?;
        Ok(match self.parse_jsx_node(pos, After::Expression)? {
            JsxNode::Element(element) => Expression::JsxElement(element),
            JsxNode::Fragment(fragment) => Expression::JsxFragment(fragment),
        })
    }

    /// An element or fragment whose `<` (at `pos`) is already consumed.
    fn parse_jsx_node(&mut self, pos: Position, after: After) -> ParseResult<JsxNode> {
        self.with_recursion(|p| {
            if p.is_token(SyntaxKind::GreaterThanToken) {
                p.parse_jsx_fragment(pos, after).map(JsxNode::Fragment)
            } else {
                p.parse_jsx_element(pos, after).map(JsxNode::Element)
            }
        })
    }

    fn parse_jsx_fragment(&mut self, pos: Position, after: After) -> ParseResult<Box<JsxFragment>> {
        self.next_jsx_child_token()?;
        let opening_fragment = JsxOpeningFragment {
            span: self.finish(pos),
        };
        let (children, closing_pos) = self.parse_jsx_children()?;

        // At the `/` of `</`.
        self.next_token()?;
        if !self.is_token(SyntaxKind::GreaterThanToken) {
            self.tolerate_at(
                closing_pos,
                diagnostic_codes::JSX_MISMATCHED_CLOSING_TAG,
                format_message(diagnostic_messages::JSX_MISMATCHED_CLOSING_TAG, &["<>"]),
            )?;
            self.parse_jsx_element_name()?;
        }
        self.finish_jsx_tag(after)?;
        Ok(Box::new(JsxFragment {
            span: self.finish(pos),
            opening_fragment,
            children,
            closing_fragment: JsxClosingFragment {
                span: self.finish(closing_pos),
            },
        }))
    }

    fn parse_jsx_element(&mut self, pos: Position, after: After) -> ParseResult<Box<JsxElement>> {
        let name = self.parse_jsx_element_name()?;
        let attributes = self.parse_jsx_attributes()?;

        if self.is_token(SyntaxKind::SlashToken) {
            self.next_token()?;
            self.finish_jsx_tag(after)?;
            let span = self.finish(pos);
            return Ok(Box::new(JsxElement {
                span,
                opening_element: JsxOpeningElement {
                    span,
                    name,
                    attributes,
                    self_closing: true,
                },
                children: Box::default(),
                closing_element: None,
            }));
        }

        if !self.is_token(SyntaxKind::GreaterThanToken) {
            return Err(self.unexpected_token_error());
        }
        self.next_jsx_child_token()?;
        let opening_element = JsxOpeningElement {
            span: self.finish(pos),
            name,
            attributes,
            self_closing: false,
        };
        let (children, closing_pos) = self.parse_jsx_children()?;

        self.next_token()?;
        let closing_name = if self.is_token(SyntaxKind::GreaterThanToken) {
            None
        } else {
            Some(self.parse_jsx_element_name()?)
        };
        let opening_text = jsx_name_text(&opening_element.name);
        let matches = closing_name
            .as_ref()
            .is_some_and(|closing| jsx_name_text(closing) == opening_text);
        if !matches {
            self.tolerate_at(
                closing_pos,
                diagnostic_codes::JSX_MISMATCHED_CLOSING_TAG,
                format_message(
                    diagnostic_messages::JSX_MISMATCHED_CLOSING_TAG,
                    &[&opening_text],
                ),
            )?;
        }
        self.finish_jsx_tag(after)?;
        let closing_element = JsxClosingElement {
            span: self.finish(closing_pos),
            name: closing_name.unwrap_or_else(|| opening_element.name.clone()),
        };
        Ok(Box::new(JsxElement {
            span: self.finish(pos),
            opening_element,
            children,
            closing_element: Some(closing_element),
        }))
    }

    /// Consume the `>` ending a tag.
    fn finish_jsx_tag(&mut self, after: After) -> ParseResult<()> {
        if !self.is_token(SyntaxKind::GreaterThanToken) {
            return Err(self.unexpected_token_error());
        }
        match after {
            After::Child => self.next_jsx_child_token()?,
            After::Expression => self.next_token()?,
        };
        Ok(())
    }

    /// Children up to a closing tag. Returns them with the position of the
    /// closing tag's `<`; the parser is left at its `/`.
    fn parse_jsx_children(&mut self) -> ParseResult<(Box<[JsxChild]>, Position)> {
        let mut children = NodeList::new();
        loop {
            match self.token() {
                SyntaxKind::JsxText => {
                    children.add(JsxChild::Text(JsxText {
                        span: self.token_span(),
                        value: self.token_value().to_string(),
                        raw: self.scanner.get_token_text().to_string(),
                    }));
                    self.next_jsx_child_token()?;
                }
                SyntaxKind::OpenBraceToken => children.add(self.parse_jsx_child_expression()?),
                SyntaxKind::LessThanToken => {
                    let pos = self.token_pos();
                    self.next_token()?;
                    if self.is_token(SyntaxKind::SlashToken) {
                        return Ok((children.freeze(), pos));
                    }
                    children.add(match self.parse_jsx_node(pos, After::Child)? {
                        JsxNode::Element(element) => JsxChild::Element(element),
                        JsxNode::Fragment(fragment) => JsxChild::Fragment(fragment),
                    });
                }
                _ => return Err(self.unexpected_token_error()),
            }
        }
    }

    /// `{expression}`, `{...spread}` or `{}` between tags.
    fn parse_jsx_child_expression(&mut self) -> ParseResult<JsxChild> {
        let pos = self.token_pos();
        self.next_token()?;

        if self.is_token(SyntaxKind::DotDotDotToken) {
            self.next_token()?;
            let expression = self.allow_in(|p| p.parse_expression())?;
            self.finish_jsx_child_brace()?;
            return Ok(JsxChild::Spread(JsxSpreadChild {
                span: self.finish(pos),
                expression,
            }));
        }

        let expression = if self.is_token(SyntaxKind::CloseBraceToken) {
            JsxExpression::Empty(JsxEmptyExpression {
                span: Span::new(self.last_token_end, self.token_pos()),
            })
        } else {
            JsxExpression::Expression(Box::new(self.allow_in(|p| p.parse_expression())?))
        };
        self.finish_jsx_child_brace()?;
        Ok(JsxChild::ExpressionContainer(JsxExpressionContainer {
            span: self.finish(pos),
            expression,
        }))
    }

    fn finish_jsx_child_brace(&mut self) -> ParseResult<()> {
        if !self.is_token(SyntaxKind::CloseBraceToken) {
            return Err(self.unexpected_token_error());
        }
        self.next_jsx_child_token()?;
        Ok(())
    }

    // =========================================================================
    // Parse Methods - JSX Names and Attributes
    // =========================================================================

    /// Identifier name with `-` segments allowed.
    fn parse_jsx_identifier(&mut self) -> ParseResult<JsxIdentifier> {
        if !self.token().is_identifier_or_keyword() {
            return Err(self.unexpected_token_error());
        }
        self.re_scan_jsx_identifier();
        let id = JsxIdentifier {
            span: self.token_span(),
            name: self.token_value().to_string(),
        };
        self.next_token()?;
        Ok(id)
    }

    /// `a`, `a:b` or `a.b.c`.
    fn parse_jsx_element_name(&mut self) -> ParseResult<JsxElementName> {
        let first = self.parse_jsx_identifier()?;
        let start = first.span.start;
        if self.parse_optional(SyntaxKind::ColonToken)? {
            let name = self.parse_jsx_identifier()?;
            return Ok(JsxElementName::Namespaced(JsxNamespacedName {
                span: self.finish(start),
                namespace: first,
                name,
            }));
        }
        let mut name = JsxElementName::Identifier(first);
        while self.parse_optional(SyntaxKind::DotToken)? {
            let property = self.parse_jsx_identifier()?;
            name = JsxElementName::Member(JsxMemberExpression {
                span: self.finish(start),
                object: Box::new(name),
                property,
            });
        }
        Ok(name)
    }

    /// `a` or `a:b` naming an attribute.
    fn parse_jsx_attribute_name(&mut self) -> ParseResult<JsxElementName> {
        let first = self.parse_jsx_identifier()?;
        if !self.parse_optional(SyntaxKind::ColonToken)? {
            return Ok(JsxElementName::Identifier(first));
        }
        let start = first.span.start;
        let name = self.parse_jsx_identifier()?;
        Ok(JsxElementName::Namespaced(JsxNamespacedName {
            span: self.finish(start),
            namespace: first,
            name,
        }))
    }

    fn parse_jsx_attributes(&mut self) -> ParseResult<Box<[JsxAttributeItem]>> {
        let mut attributes = NodeList::new();
        while !matches!(
            self.token(),
            SyntaxKind::GreaterThanToken | SyntaxKind::SlashToken
        ) {
            let pos = self.token_pos();
            if self.parse_optional(SyntaxKind::OpenBraceToken)? {
                self.parse_expected(SyntaxKind::DotDotDotToken)?;
                let argument = self.allow_in(|p| p.parse_assignment_expression())?;
                self.parse_expected(SyntaxKind::CloseBraceToken)?;
                attributes.add(JsxAttributeItem::Spread(JsxSpreadAttribute {
                    span: self.finish(pos),
                    argument,
                }));
                continue;
            }

            let name = self.parse_jsx_attribute_name()?;
            let value = if self.is_token(SyntaxKind::EqualsToken) {
                self.next_jsx_attribute_value_token()?;
                Some(self.parse_jsx_attribute_value()?)
            } else {
                None
            };
            attributes.add(JsxAttributeItem::Attribute(JsxAttribute {
                span: self.finish(pos),
                name,
                value,
            }));
        }
        Ok(attributes.freeze())
    }

    fn parse_jsx_attribute_value(&mut self) -> ParseResult<JsxAttributeValue> {
        let pos = self.token_pos();
        match self.token() {
            SyntaxKind::StringLiteral => {
                let literal = Literal {
                    span: self.token_span(),
                    value: LiteralValue::String(self.token_value().to_string()),
                    raw: self.scanner.get_token_text().to_string(),
                };
                self.next_token()?;
                Ok(JsxAttributeValue::Literal(literal))
            }
            SyntaxKind::OpenBraceToken => {
                self.next_token()?;
                if self.is_token(SyntaxKind::CloseBraceToken) {
                    return Err(self.unexpected_token_error());
                }
                let expression = self.allow_in(|p| p.parse_assignment_expression())?;
                self.parse_expected(SyntaxKind::CloseBraceToken)?;
                Ok(JsxAttributeValue::ExpressionContainer(JsxExpressionContainer {
                    span: self.finish(pos),
                    expression: JsxExpression::Expression(Box::new(expression)),
                }))
            }
            SyntaxKind::LessThanToken => {
                self.next_token()?;
                Ok(match self.parse_jsx_node(pos, After::Expression)? {
                    JsxNode::Element(element) => JsxAttributeValue::Element(element),
                    JsxNode::Fragment(fragment) => JsxAttributeValue::Fragment(fragment),
                })
            }
            _ => Err(self.unexpected_token_error()),
        }
    }
}

/// Qualified tag name as written: `a`, `a:b`, `a.b.c`.
fn jsx_name_text(name: &JsxElementName) -> String {
    match name {
        JsxElementName::Identifier(id) => id.name.clone(),
        JsxElementName::Namespaced(namespaced) => {
            format!("{}:{}", namespaced.namespace.name, namespaced.name.name)
        }
        JsxElementName::Member(member) => {
            format!("{}.{}", jsx_name_text(&member.object), member.property.name)
        }
    }
}
