//! Parser state - function, class and variable declarations

use esz_common::{Position, atoms, diagnostic_codes, diagnostic_messages, format_message};
use esz_scanner::{SyntaxKind, text_to_keyword};
use rustc_hash::FxHashSet;

use super::error::ParseResult;
use super::node::{
    BlockStatement, Class, ClassBody, ClassElement, ClassKind, Function, FunctionKind,
    Identifier, MethodDefinition, MethodKind, Pattern, PropertyDefinition, PropertyKey,
    RestElement, StaticBlock, VariableDeclaration, VariableDeclarator, VariableKind,
};
use super::node_list::NodeList;
use super::scope::{PrivateNameKind, ScopeKind};
use super::state::{ContextFlags, ParserState, is_eval_or_arguments};
use super::state_patterns::bound_names;

/// How a binding identifier enters the current scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BindingKind {
    /// `var` declarations and parameters.
    Var,
    /// `let`, `const`, `class`, imports, catch patterns.
    Lexical,
    /// Sloppy-mode function declarations.
    Function,
}

/// What kind of function body is being parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FunctionFlavor {
    Plain,
    Method,
    Getter,
    Setter,
    Constructor,
    DerivedConstructor,
}

impl FunctionFlavor {
    fn is_method(self) -> bool {
        self != FunctionFlavor::Plain
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FunctionShape {
    pub flavor: FunctionFlavor,
    pub is_async: bool,
    pub generator: bool,
}

impl ParserState {
    // =========================================================================
    // Bindings
    // =========================================================================

    /// Declare `id` in the current scope, reporting redeclarations.
    pub(crate) fn declare_name(&mut self, id: &Identifier, kind: BindingKind) -> ParseResult<()> {
        let declared = match kind {
            BindingKind::Var => self.scope.declare_var(id.atom),
            BindingKind::Lexical => {
                if id.atom == atoms::LET {
                    self.tolerate_at(
                        id.span.start,
                        diagnostic_codes::LET_AS_LEXICAL_NAME,
                        diagnostic_messages::LET_AS_LEXICAL_NAME,
                    )?;
                }
                self.scope.declare_lexical(id.atom)
            }
            BindingKind::Function => self.scope.declare_function(id.atom),
        };
        if !declared {
            self.tolerate_at(
                id.span.start,
                diagnostic_codes::DUPLICATE_BINDING,
                format_message(diagnostic_messages::DUPLICATE_BINDING, &[&id.name]),
            )?;
        }
        Ok(())
    }

    // =========================================================================
    // Parse Methods - Variable Declarations
    // =========================================================================

    /// Parse `var|let|const a = 1, [b] = c`. The current token is the
    /// keyword. Outside a `for` head, missing initializers are checked here.
    pub(crate) fn parse_variable_declaration_list(
        &mut self,
        kind: VariableKind,
        in_for_head: bool,
    ) -> ParseResult<VariableDeclaration> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let binding_kind = if kind.is_lexical() {
            BindingKind::Lexical
        } else {
            BindingKind::Var
        };

        let mut declarations = NodeList::new();
        loop {
            let declarator_pos = self.token_pos();
            let id = self.parse_binding_target(binding_kind)?;
            let init = if self.parse_optional(SyntaxKind::EqualsToken)? {
                Some(self.parse_assignment_expression()?)
            } else {
                None
            };
            declarations.add(VariableDeclarator {
                span: self.finish(declarator_pos),
                id,
                init,
            });
            if !self.parse_optional(SyntaxKind::CommaToken)? {
                break;
            }
        }

        let declaration = VariableDeclaration {
            span: self.finish(pos),
            kind,
            declarations: declarations.freeze(),
        };
        if !in_for_head {
            self.check_declarator_initializers(&declaration)?;
        }
        Ok(declaration)
    }

    pub(crate) fn check_declarator_initializers(
        &mut self,
        declaration: &VariableDeclaration,
    ) -> ParseResult<()> {
        for declarator in &declaration.declarations {
            if declarator.init.is_some() {
                continue;
            }
            if declaration.kind == VariableKind::Const {
                self.tolerate_at(
                    declarator.span.end,
                    diagnostic_codes::CONST_WITHOUT_INITIALIZER,
                    diagnostic_messages::CONST_WITHOUT_INITIALIZER,
                )?;
            } else if !matches!(declarator.id, Pattern::Identifier(_)) {
                self.tolerate_at(
                    declarator.span.end,
                    diagnostic_codes::DESTRUCTURING_WITHOUT_INITIALIZER,
                    diagnostic_messages::DESTRUCTURING_WITHOUT_INITIALIZER,
                )?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Parse Methods - Functions
    // =========================================================================

    /// Parse `[async] function [*] name (...) { ... }` in a statement list.
    /// `default_export` makes the name optional.
    pub(crate) fn parse_function_declaration(
        &mut self,
        is_async: bool,
        default_export: bool,
    ) -> ParseResult<Box<Function>> {
        self.parse_function_declaration_impl(is_async, default_export, true)
    }

    /// Sloppy `if (a) function f() {}`: the name is not bound in the
    /// enclosing scope.
    pub(crate) fn parse_hanging_function_declaration(&mut self) -> ParseResult<Box<Function>> {
        self.parse_function_declaration_impl(false, false, false)
    }

    fn parse_function_declaration_impl(
        &mut self,
        is_async: bool,
        default_export: bool,
        declare: bool,
    ) -> ParseResult<Box<Function>> {
        let pos = self.token_pos();
        tracing::trace!(offset = pos.offset, is_async, "parse_function_declaration");
        if is_async {
            self.next_token()?;
        }
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        let generator = self.parse_optional(SyntaxKind::AsteriskToken)?;

        // The name of a declaration belongs to the enclosing context.
        let id = if default_export && self.is_token(SyntaxKind::OpenParenToken) {
            None
        } else {
            let id = self.parse_binding_identifier()?;
            if declare {
                let kind = if self.is_strict() || generator || is_async {
                    if self.scope.treat_functions_as_var() {
                        BindingKind::Var
                    } else {
                        BindingKind::Lexical
                    }
                } else {
                    BindingKind::Function
                };
                self.declare_name(&id, kind)?;
            }
            Some(id)
        };

        let shape = FunctionShape {
            flavor: FunctionFlavor::Plain,
            is_async,
            generator,
        };
        let (params, body) = self.parse_function_rest(shape, id.as_ref())?;
        Ok(Box::new(Function {
            kind: FunctionKind::FunctionDeclaration,
            span: self.finish(pos),
            id,
            params,
            body,
            generator,
            is_async,
        }))
    }

    /// Parse `[async] function [*] [name] (...) { ... }` in expression
    /// position. The name is bound inside the function's own context.
    pub(crate) fn parse_function_expression(&mut self, is_async: bool) -> ParseResult<Box<Function>> {
        let pos = self.token_pos();
        if is_async {
            self.next_token()?;
        }
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        let generator = self.parse_optional(SyntaxKind::AsteriskToken)?;

        let id = if self.is_identifier_token() {
            let mut set = ContextFlags::empty();
            if is_async {
                set |= ContextFlags::AWAIT;
            }
            if generator {
                set |= ContextFlags::YIELD;
            }
            let clear = ContextFlags::AWAIT | ContextFlags::YIELD;
            Some(self.with_context(set, clear, |p| p.parse_binding_identifier())?)
        } else {
            None
        };

        let shape = FunctionShape {
            flavor: FunctionFlavor::Plain,
            is_async,
            generator,
        };
        let (params, body) = self.parse_function_rest(shape, id.as_ref())?;
        Ok(Box::new(Function {
            kind: FunctionKind::FunctionExpression,
            span: self.finish(pos),
            id,
            params,
            body,
            generator,
            is_async,
        }))
    }

    /// Parse the parameters and body of a method. The current token is `(`.
    pub(crate) fn parse_method_function(&mut self, shape: FunctionShape) -> ParseResult<Box<Function>> {
        let pos = self.token_pos();
        let (params, body) = self.parse_function_rest(shape, None)?;
        Ok(Box::new(Function {
            kind: FunctionKind::FunctionExpression,
            span: self.finish(pos),
            id: None,
            params,
            body,
            generator: shape.generator,
            is_async: shape.is_async,
        }))
    }

    /// Parameters and body of any non-arrow function, in a fresh function
    /// context and scope.
    fn parse_function_rest(
        &mut self,
        shape: FunctionShape,
        id: Option<&Identifier>,
    ) -> ParseResult<(Box<[Pattern]>, BlockStatement)> {
        let mut set = ContextFlags::IN_FUNCTION | ContextFlags::ALLOW_NEW_TARGET;
        if shape.is_async {
            set |= ContextFlags::AWAIT;
        }
        if shape.generator {
            set |= ContextFlags::YIELD;
        }
        if shape.flavor.is_method() {
            set |= ContextFlags::ALLOW_SUPER_PROPERTY;
        }
        if shape.flavor == FunctionFlavor::DerivedConstructor {
            set |= ContextFlags::ALLOW_SUPER_CALL;
        }

        let saved_flags = self.context_flags;
        self.context_flags = (saved_flags - ContextFlags::FUNCTION_RESET) | set;
        let outer_cover = self.begin_parameter_cover();
        self.labels.enter_function();
        self.scope.enter(ScopeKind::Function);

        let result = self.parse_parameters_and_body(shape, id);

        self.scope.exit();
        self.labels.exit_function();
        self.end_parameter_cover(outer_cover, true);
        self.context_flags = saved_flags;
        result
    }

    fn parse_parameters_and_body(
        &mut self,
        shape: FunctionShape,
        id: Option<&Identifier>,
    ) -> ParseResult<(Box<[Pattern]>, BlockStatement)> {
        let was_strict = self.is_strict();
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let (params, simple) = self.with_context(
            ContextFlags::IN_PARAMETERS,
            ContextFlags::empty(),
            |p| p.parse_formal_parameters(shape.flavor),
        )?;

        let (body, use_strict) = self.parse_function_body()?;
        if let Some(directive_pos) = use_strict {
            if !simple {
                self.tolerate_at(
                    directive_pos,
                    diagnostic_codes::USE_STRICT_NON_SIMPLE_PARAMS,
                    diagnostic_messages::USE_STRICT_NON_SIMPLE_PARAMS,
                )?;
            }
            if !was_strict {
                if let Some(id) = id {
                    self.check_strict_binding_name(id)?;
                }
                for name in bound_names(&params) {
                    self.check_strict_binding_name(name)?;
                }
            }
        }

        let allow_duplicates =
            !self.is_strict() && simple && shape.flavor == FunctionFlavor::Plain;
        if !allow_duplicates {
            self.check_duplicate_parameters(&params)?;
        }
        Ok((params, body))
    }

    /// Parse `(a, [b] = c, ...d)` after the `(`. Returns the parameters and
    /// whether the list is simple (plain identifiers only).
    fn parse_formal_parameters(
        &mut self,
        flavor: FunctionFlavor,
    ) -> ParseResult<(Box<[Pattern]>, bool)> {
        let list_pos = self.last_token_end;
        let mut params = NodeList::new();
        let mut simple = true;

        while !self.is_token(SyntaxKind::CloseParenToken) {
            if self.is_token(SyntaxKind::DotDotDotToken) {
                let rest_pos = self.token_pos();
                self.next_token()?;
                let argument = self.parse_binding_target(BindingKind::Var)?;
                if self.is_token(SyntaxKind::EqualsToken) {
                    return Err(self.error_at(
                        self.token_pos(),
                        diagnostic_codes::REST_WITH_INITIALIZER,
                        diagnostic_messages::REST_WITH_INITIALIZER,
                    ));
                }
                params.add(Pattern::Rest(RestElement {
                    span: self.finish(rest_pos),
                    argument: Box::new(argument),
                }));
                simple = false;
                if !self.is_token(SyntaxKind::CloseParenToken) {
                    return Err(self.error_at(
                        self.token_pos(),
                        diagnostic_codes::REST_PARAMETER_NOT_LAST,
                        diagnostic_messages::REST_PARAMETER_NOT_LAST,
                    ));
                }
                break;
            }

            let param = self.parse_binding_element(BindingKind::Var)?;
            if !matches!(param, Pattern::Identifier(_)) {
                simple = false;
            }
            params.add(param);
            if !self.is_token(SyntaxKind::CloseParenToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let params = params.freeze();
        self.check_accessor_arity(flavor, &params, list_pos)?;
        Ok((params, simple))
    }

    pub(crate) fn check_accessor_arity(
        &mut self,
        flavor: FunctionFlavor,
        params: &[Pattern],
        pos: Position,
    ) -> ParseResult<()> {
        match flavor {
            FunctionFlavor::Getter if !params.is_empty() => self.tolerate_at(
                pos,
                diagnostic_codes::GETTER_ARITY,
                diagnostic_messages::GETTER_ARITY,
            ),
            FunctionFlavor::Setter if params.len() != 1 => self.tolerate_at(
                pos,
                diagnostic_codes::SETTER_ARITY,
                diagnostic_messages::SETTER_ARITY,
            ),
            FunctionFlavor::Setter if matches!(params.first(), Some(Pattern::Rest(_))) => self
                .tolerate_at(
                    pos,
                    diagnostic_codes::SETTER_REST,
                    diagnostic_messages::SETTER_REST,
                ),
            _ => Ok(()),
        }
    }

    /// Function body with its directive prologue. Returns the position of a
    /// `"use strict"` directive if the body has one.
    pub(crate) fn parse_function_body(
        &mut self,
    ) -> ParseResult<(BlockStatement, Option<Position>)> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut body = NodeList::new();
        let use_strict = self.parse_directive_prologue(&mut body)?;
        self.parse_statement_list_items(SyntaxKind::CloseBraceToken, &mut body)?;
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok((
            BlockStatement {
                span: self.finish(pos),
                body: body.freeze(),
            },
            use_strict,
        ))
    }

    /// Names validated again once a body turns out to be strict.
    pub(crate) fn check_strict_binding_name(&mut self, id: &Identifier) -> ParseResult<()> {
        if is_eval_or_arguments(id.atom) {
            return self.tolerate_at(
                id.span.start,
                diagnostic_codes::STRICT_EVAL_ARGUMENTS,
                diagnostic_messages::STRICT_EVAL_ARGUMENTS,
            );
        }
        if text_to_keyword(&id.name).is_some_and(|kind| kind.is_strict_mode_reserved_word()) {
            return self.tolerate_at(
                id.span.start,
                diagnostic_codes::STRICT_RESERVED_WORD,
                diagnostic_messages::STRICT_RESERVED_WORD,
            );
        }
        Ok(())
    }

    pub(crate) fn check_duplicate_parameters(&mut self, params: &[Pattern]) -> ParseResult<()> {
        let mut seen = FxHashSet::default();
        let mut duplicate = None;
        for name in bound_names(params) {
            if !seen.insert(name.atom) {
                duplicate = Some(name.span.start);
                break;
            }
        }
        if let Some(pos) = duplicate {
            self.tolerate_at(
                pos,
                diagnostic_codes::DUPLICATE_PARAMETER,
                diagnostic_messages::DUPLICATE_PARAMETER,
            )?;
        }
        Ok(())
    }

    // =========================================================================
    // Parse Methods - Classes
    // =========================================================================

    pub(crate) fn parse_class_declaration(&mut self, default_export: bool) -> ParseResult<Box<Class>> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let id = if default_export
            && matches!(
                self.token(),
                SyntaxKind::OpenBraceToken | SyntaxKind::ExtendsKeyword
            ) {
            None
        } else {
            let id = self.with_context(ContextFlags::STRICT, ContextFlags::empty(), |p| {
                p.parse_binding_identifier()
            })?;
            self.declare_name(&id, BindingKind::Lexical)?;
            Some(id)
        };
        self.parse_class_tail(pos, ClassKind::ClassDeclaration, id)
    }

    pub(crate) fn parse_class_expression(&mut self) -> ParseResult<Box<Class>> {
        let pos = self.token_pos();
        self.consume_keyword()?;
        let id = if self.is_identifier_token() {
            Some(
                self.with_context(ContextFlags::STRICT, ContextFlags::empty(), |p| {
                    p.parse_binding_identifier()
                })?,
            )
        } else {
            None
        };
        self.parse_class_tail(pos, ClassKind::ClassExpression, id)
    }

    fn parse_class_tail(
        &mut self,
        pos: Position,
        kind: ClassKind,
        id: Option<Identifier>,
    ) -> ParseResult<Box<Class>> {
        self.with_context(ContextFlags::STRICT, ContextFlags::empty(), |p| {
            let super_class = if p.is_token(SyntaxKind::ExtendsKeyword) {
                p.consume_keyword()?;
                Some(Box::new(p.with_recursion(|p| p.parse_left_hand_side_expression())?))
            } else {
                None
            };
            let body = p.parse_class_body(super_class.is_some())?;
            Ok(Box::new(Class {
                kind,
                span: p.finish(pos),
                id,
                super_class,
                body,
            }))
        })
    }

    fn parse_class_body(&mut self, derived: bool) -> ParseResult<ClassBody> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        self.private_names.enter_class();

        let elements = self.with_context(ContextFlags::IN_CLASS, ContextFlags::empty(), |p| {
            let mut elements = NodeList::new();
            let mut has_constructor = false;
            while !p.is_token(SyntaxKind::CloseBraceToken) {
                if p.parse_optional(SyntaxKind::SemicolonToken)? {
                    continue;
                }
                let element = p.parse_class_element(derived, &mut has_constructor)?;
                elements.add(element);
            }
            Ok(elements)
        })?;
        self.parse_expected(SyntaxKind::CloseBraceToken)?;

        for (atom, name_pos) in self.private_names.exit_class() {
            let name = self.scanner.interner().resolve(atom).to_string();
            self.tolerate_at(
                name_pos,
                diagnostic_codes::UNDECLARED_PRIVATE_NAME,
                format_message(diagnostic_messages::UNDECLARED_PRIVATE_NAME, &[&name]),
            )?;
        }

        Ok(ClassBody {
            span: self.finish(pos),
            body: elements.freeze(),
        })
    }

    /// Whether the token after a modifier (`static`, `async`, `get`, `set`)
    /// means the modifier is really the element name.
    fn modifier_is_name(&mut self, allow_line_break: bool) -> bool {
        let next = self.peek_token();
        matches!(
            next.kind,
            SyntaxKind::OpenParenToken
                | SyntaxKind::EqualsToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        ) || (!allow_line_break && next.line_break)
    }

    fn parse_class_element(
        &mut self,
        derived: bool,
        has_constructor: &mut bool,
    ) -> ParseResult<ClassElement> {
        let pos = self.token_pos();

        let mut is_static = false;
        if self.is_contextual(SyntaxKind::StaticKeyword) {
            if self.peek_token().kind == SyntaxKind::OpenBraceToken {
                return self.parse_static_block(pos);
            }
            if !self.modifier_is_name(true) {
                is_static = true;
                self.next_token()?;
            }
        }

        let mut is_async = false;
        if self.is_contextual(SyntaxKind::AsyncKeyword) && !self.modifier_is_name(false) {
            is_async = true;
            self.next_token()?;
        }
        let generator = self.parse_optional(SyntaxKind::AsteriskToken)?;

        let mut kind = MethodKind::Method;
        if !is_async
            && !generator
            && (self.is_contextual(SyntaxKind::GetKeyword)
                || self.is_contextual(SyntaxKind::SetKeyword))
            && !self.modifier_is_name(true)
        {
            kind = if self.is_token(SyntaxKind::GetKeyword) {
                MethodKind::Get
            } else {
                MethodKind::Set
            };
            self.next_token()?;
        }

        let key_pos = self.token_pos();
        let (key, computed) = self.parse_class_element_name()?;
        let static_name = if computed {
            None
        } else {
            key.static_name().map(str::to_string)
        };

        if self.is_token(SyntaxKind::OpenParenToken) {
            let is_constructor = !is_static && static_name.as_deref() == Some("constructor");
            if is_constructor {
                let special = match kind {
                    MethodKind::Get => Some("a getter"),
                    MethodKind::Set => Some("a setter"),
                    _ if generator => Some("a generator"),
                    _ if is_async => Some("an async method"),
                    _ => None,
                };
                if let Some(special) = special {
                    self.tolerate_at(
                        key_pos,
                        diagnostic_codes::CONSTRUCTOR_SPECIAL_METHOD,
                        format_message(diagnostic_messages::CONSTRUCTOR_SPECIAL_METHOD, &[special]),
                    )?;
                }
                if *has_constructor {
                    self.tolerate_at(
                        key_pos,
                        diagnostic_codes::DUPLICATE_CONSTRUCTOR,
                        diagnostic_messages::DUPLICATE_CONSTRUCTOR,
                    )?;
                }
                *has_constructor = true;
                kind = MethodKind::Constructor;
            } else if is_static && static_name.as_deref() == Some("prototype") {
                self.tolerate_at(
                    key_pos,
                    diagnostic_codes::STATIC_PROTOTYPE,
                    diagnostic_messages::STATIC_PROTOTYPE,
                )?;
            }

            let flavor = match kind {
                MethodKind::Constructor if derived => FunctionFlavor::DerivedConstructor,
                MethodKind::Constructor => FunctionFlavor::Constructor,
                MethodKind::Get => FunctionFlavor::Getter,
                MethodKind::Set => FunctionFlavor::Setter,
                MethodKind::Method => FunctionFlavor::Method,
            };
            if let PropertyKey::PrivateIdentifier(private) = &key {
                let private_kind = match kind {
                    MethodKind::Get => PrivateNameKind::Getter,
                    MethodKind::Set => PrivateNameKind::Setter,
                    _ => PrivateNameKind::Method,
                };
                self.declare_private_name(private.atom, &private.name, key_pos, private_kind, is_static)?;
            }

            let value = self.parse_method_function(FunctionShape {
                flavor,
                is_async,
                generator,
            })?;
            return Ok(ClassElement::Method(MethodDefinition {
                span: self.finish(pos),
                key,
                value,
                kind,
                computed,
                is_static,
            }));
        }

        // Field definition.
        if is_async || generator || kind != MethodKind::Method {
            return Err(self.unexpected_token_error());
        }
        if static_name.as_deref() == Some("constructor") {
            self.tolerate_at(
                key_pos,
                diagnostic_codes::CONSTRUCTOR_FIELD,
                diagnostic_messages::CONSTRUCTOR_FIELD,
            )?;
        } else if is_static && static_name.as_deref() == Some("prototype") {
            self.tolerate_at(
                key_pos,
                diagnostic_codes::STATIC_PROTOTYPE,
                diagnostic_messages::STATIC_PROTOTYPE,
            )?;
        }
        if let PropertyKey::PrivateIdentifier(private) = &key {
            self.declare_private_name(
                private.atom,
                &private.name,
                key_pos,
                PrivateNameKind::Field,
                is_static,
            )?;
        }

        let value = if self.parse_optional(SyntaxKind::EqualsToken)? {
            Some(self.parse_field_initializer()?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(ClassElement::Property(PropertyDefinition {
            span: self.finish(pos),
            key,
            value,
            computed,
            is_static,
        }))
    }

    /// Class element key: a property name or `#name`.
    fn parse_class_element_name(&mut self) -> ParseResult<(PropertyKey, bool)> {
        if self.is_token(SyntaxKind::PrivateIdentifier) {
            let private = self.parse_private_identifier()?;
            if private.name == "constructor" {
                self.tolerate_at(
                    private.span.start,
                    diagnostic_codes::PRIVATE_CONSTRUCTOR,
                    diagnostic_messages::PRIVATE_CONSTRUCTOR,
                )?;
            }
            return Ok((PropertyKey::PrivateIdentifier(private), false));
        }
        self.parse_property_key()
    }

    fn declare_private_name(
        &mut self,
        atom: esz_common::Atom,
        name: &str,
        pos: Position,
        kind: PrivateNameKind,
        is_static: bool,
    ) -> ParseResult<()> {
        if !self.private_names.declare(atom, kind, is_static) {
            self.tolerate_at(
                pos,
                diagnostic_codes::DUPLICATE_PRIVATE_NAME,
                format_message(diagnostic_messages::DUPLICATE_PRIVATE_NAME, &[name]),
            )?;
        }
        Ok(())
    }

    /// `x = <init>` in a class body: `arguments` is forbidden, `super.x`
    /// and `new.target` are allowed, `await` / `yield` are not operators.
    fn parse_field_initializer(&mut self) -> ParseResult<super::node::Expression> {
        let set = ContextFlags::IN_CLASS_FIELD_INIT
            | ContextFlags::ALLOW_SUPER_PROPERTY
            | ContextFlags::ALLOW_NEW_TARGET;
        let clear = ContextFlags::AWAIT
            | ContextFlags::YIELD
            | ContextFlags::ALLOW_SUPER_CALL
            | ContextFlags::DISALLOW_IN
            | ContextFlags::IN_PARAMETERS;
        self.with_context(set, clear, |p| p.parse_assignment_expression())
    }

    fn parse_static_block(&mut self, pos: Position) -> ParseResult<ClassElement> {
        self.next_token()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;

        let set = ContextFlags::IN_STATIC_BLOCK
            | ContextFlags::ALLOW_SUPER_PROPERTY
            | ContextFlags::ALLOW_NEW_TARGET;
        let clear = ContextFlags::FUNCTION_RESET | ContextFlags::IN_FUNCTION;
        self.labels.enter_function();
        self.scope.enter(ScopeKind::StaticBlock);
        let body = self.with_context(set, clear, |p| {
            let mut body = NodeList::new();
            p.parse_statement_list_items(SyntaxKind::CloseBraceToken, &mut body)?;
            Ok(body)
        });
        self.scope.exit();
        self.labels.exit_function();
        let body = body?;

        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(ClassElement::StaticBlock(StaticBlock {
            span: self.finish(pos),
            body: body.freeze(),
        }))
    }
}
