//! Parser state - import and export declarations

use esz_common::{Position, Spanned, diagnostic_codes, diagnostic_messages, format_message};
use esz_scanner::{SyntaxKind, text_to_keyword};

use super::error::ParseResult;
use super::node::{
    Declaration, ExportAllDeclaration, ExportDefaultDeclaration, ExportDefaultKind,
    ExportNamedDeclaration, ExportSpecifier, Identifier, ImportAttribute, ImportDeclaration,
    ImportDefaultSpecifier, ImportNamedSpecifier, ImportNamespaceSpecifier, ImportSpecifier,
    Literal, ModuleExportName, Statement, VariableKind,
};
use super::node_list::NodeList;
use super::state::ParserState;
use super::state_declarations::BindingKind;
use super::state_patterns::collect_bound_names;

impl ParserState {
    // =========================================================================
    // Parse Methods - Imports
    // =========================================================================

    /// `import ...;` at the top level of a module.
    pub(crate) fn parse_import_declaration(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        tracing::trace!(offset = pos.offset, "parse_import_declaration");
        self.consume_keyword()?;

        let mut specifiers = NodeList::new();
        if !self.is_token(SyntaxKind::StringLiteral) {
            if self.is_identifier_token() {
                let local_pos = self.token_pos();
                let local = self.parse_import_binding()?;
                specifiers.add(ImportSpecifier::Default(ImportDefaultSpecifier {
                    span: self.finish(local_pos),
                    local,
                }));
                if self.parse_optional(SyntaxKind::CommaToken)? {
                    self.parse_namespace_or_named_imports(&mut specifiers)?;
                }
            } else {
                self.parse_namespace_or_named_imports(&mut specifiers)?;
            }
            self.parse_expected_contextual(SyntaxKind::FromKeyword)?;
        }

        let source = self.parse_module_specifier()?;
        let attributes = self.parse_import_attributes()?;
        self.parse_semicolon()?;
        Ok(Statement::ImportDeclaration(ImportDeclaration {
            span: self.finish(pos),
            specifiers: specifiers.freeze(),
            source,
            attributes,
        }))
    }

    fn parse_namespace_or_named_imports(
        &mut self,
        specifiers: &mut NodeList<ImportSpecifier>,
    ) -> ParseResult<()> {
        let pos = self.token_pos();
        if self.parse_optional(SyntaxKind::AsteriskToken)? {
            self.parse_expected_contextual(SyntaxKind::AsKeyword)?;
            let local = self.parse_import_binding()?;
            specifiers.add(ImportSpecifier::Namespace(ImportNamespaceSpecifier {
                span: self.finish(pos),
                local,
            }));
            return Ok(());
        }

        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            specifiers.add(ImportSpecifier::Named(self.parse_import_specifier()?));
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(())
    }

    /// `imported`, `imported as local` or `"string" as local`.
    fn parse_import_specifier(&mut self) -> ParseResult<ImportNamedSpecifier> {
        let pos = self.token_pos();
        let imported = self.parse_module_export_name()?;
        let local = if self.is_contextual(SyntaxKind::AsKeyword) {
            self.next_token()?;
            self.parse_import_binding()?
        } else {
            let ModuleExportName::Identifier(id) = &imported else {
                return Err(self.unexpected_token_error());
            };
            let id = id.clone();
            self.check_binding_identifier(&id)?;
            self.declare_name(&id, BindingKind::Lexical)?;
            id
        };
        Ok(ImportNamedSpecifier {
            span: self.finish(pos),
            imported,
            local,
        })
    }

    /// A local binding introduced by an import.
    fn parse_import_binding(&mut self) -> ParseResult<Identifier> {
        let id = self.parse_binding_identifier()?;
        self.declare_name(&id, BindingKind::Lexical)?;
        Ok(id)
    }

    fn parse_module_specifier(&mut self) -> ParseResult<Literal> {
        if !self.is_token(SyntaxKind::StringLiteral) {
            return Err(self.unexpected_token_error());
        }
        self.parse_literal()
    }

    /// Identifier name or string literal in a specifier list.
    fn parse_module_export_name(&mut self) -> ParseResult<ModuleExportName> {
        if self.is_token(SyntaxKind::StringLiteral) {
            return Ok(ModuleExportName::Literal(self.parse_literal()?));
        }
        Ok(ModuleExportName::Identifier(self.parse_identifier_name()?))
    }

    /// `with { key: "value", ... }` after a module specifier.
    fn parse_import_attributes(&mut self) -> ParseResult<Box<[ImportAttribute]>> {
        if !self.is_token(SyntaxKind::WithKeyword) {
            return Ok(Box::default());
        }
        self.consume_keyword()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut attributes = NodeList::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let pos = self.token_pos();
            let key = self.parse_module_export_name()?;
            self.parse_expected(SyntaxKind::ColonToken)?;
            let value = self.parse_module_specifier()?;
            attributes.add(ImportAttribute {
                span: self.finish(pos),
                key,
                value,
            });
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(attributes.freeze())
    }

    fn parse_expected_contextual(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if !self.is_contextual(kind) {
            return Err(self.unexpected_token_error());
        }
        self.next_token()?;
        Ok(())
    }

    // =========================================================================
    // Parse Methods - Exports
    // =========================================================================

    /// `export ...` at the top level of a module.
    pub(crate) fn parse_export_declaration(&mut self) -> ParseResult<Statement> {
        let pos = self.token_pos();
        tracing::trace!(offset = pos.offset, "parse_export_declaration");
        self.consume_keyword()?;

        match self.token() {
            SyntaxKind::DefaultKeyword => self.parse_export_default(pos),
            SyntaxKind::AsteriskToken => self.parse_export_all(pos),
            SyntaxKind::OpenBraceToken => self.parse_export_named_specifiers(pos),
            _ => {
                let declaration = self.parse_exported_declaration()?;
                Ok(Statement::ExportNamedDeclaration(ExportNamedDeclaration {
                    span: self.finish(pos),
                    declaration: Some(declaration),
                    specifiers: Box::default(),
                    source: None,
                    attributes: Box::default(),
                }))
            }
        }
    }

    fn parse_export_default(&mut self, pos: Position) -> ParseResult<Statement> {
        let default_pos = self.token_pos();
        self.consume_keyword()?;
        self.add_export("default", default_pos)?;

        let declaration = match self.token() {
            SyntaxKind::FunctionKeyword => {
                ExportDefaultKind::FunctionDeclaration(self.parse_function_declaration(false, true)?)
            }
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => {
                ExportDefaultKind::FunctionDeclaration(self.parse_function_declaration(true, true)?)
            }
            SyntaxKind::ClassKeyword => {
                ExportDefaultKind::ClassDeclaration(self.parse_class_declaration(true)?)
            }
            _ => {
                let expression = self.allow_in(|p| p.parse_assignment_expression())?;
                self.parse_semicolon()?;
                ExportDefaultKind::Expression(Box::new(expression))
            }
        };
        Ok(Statement::ExportDefaultDeclaration(ExportDefaultDeclaration {
            span: self.finish(pos),
            declaration,
        }))
    }

    /// `export * from "m"` or `export * as name from "m"`.
    fn parse_export_all(&mut self, pos: Position) -> ParseResult<Statement> {
        self.next_token()?;
        let exported = if self.is_contextual(SyntaxKind::AsKeyword) {
            self.next_token()?;
            let name_pos = self.token_pos();
            let name = self.parse_module_export_name()?;
            self.add_export(name.name(), name_pos)?;
            Some(name)
        } else {
            None
        };
        self.parse_expected_contextual(SyntaxKind::FromKeyword)?;
        let source = self.parse_module_specifier()?;
        let attributes = self.parse_import_attributes()?;
        self.parse_semicolon()?;
        Ok(Statement::ExportAllDeclaration(ExportAllDeclaration {
            span: self.finish(pos),
            exported,
            source,
            attributes,
        }))
    }

    /// `export { a, b as c } [from "m"]`.
    fn parse_export_named_specifiers(&mut self, pos: Position) -> ParseResult<Statement> {
        self.next_token()?;
        let mut specifiers = NodeList::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let specifier_pos = self.token_pos();
            let local = self.parse_module_export_name()?;
            let exported = if self.is_contextual(SyntaxKind::AsKeyword) {
                self.next_token()?;
                self.parse_module_export_name()?
            } else {
                local.clone()
            };
            self.add_export(exported.name(), exported.span().start)?;
            specifiers.add(ExportSpecifier {
                span: self.finish(specifier_pos),
                local,
                exported,
            });
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CommaToken)?;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;

        let mut source = None;
        let mut attributes = Box::default();
        if self.is_contextual(SyntaxKind::FromKeyword) {
            self.next_token()?;
            source = Some(self.parse_module_specifier()?);
            attributes = self.parse_import_attributes()?;
        } else {
            // Without `from`, every local names a binding of this module.
            for specifier in specifiers.iter() {
                self.check_local_export(&specifier.local)?;
            }
        }
        self.parse_semicolon()?;
        Ok(Statement::ExportNamedDeclaration(ExportNamedDeclaration {
            span: self.finish(pos),
            declaration: None,
            specifiers: specifiers.freeze(),
            source,
            attributes,
        }))
    }

    fn check_local_export(&mut self, local: &ModuleExportName) -> ParseResult<()> {
        let id = match local {
            ModuleExportName::Identifier(id) => id,
            ModuleExportName::Literal(literal) => {
                return self.tolerate_at(
                    literal.span.start,
                    diagnostic_codes::UNEXPECTED_STRING,
                    diagnostic_messages::UNEXPECTED_STRING,
                );
            }
        };
        if text_to_keyword(&id.name).is_some_and(|kind| kind.is_reserved_word()) {
            return self.tolerate_at(
                id.span.start,
                diagnostic_codes::UNEXPECTED_RESERVED,
                diagnostic_messages::UNEXPECTED_RESERVED,
            );
        }
        self.exports
            .add_pending_local(id.atom, id.name.clone(), id.span.start);
        Ok(())
    }

    /// `export var|let|const|function|async function|class ...`.
    fn parse_exported_declaration(&mut self) -> ParseResult<Declaration> {
        let declaration = match self.token() {
            SyntaxKind::VarKeyword => {
                Declaration::Variable(self.parse_exported_variables(VariableKind::Var)?)
            }
            SyntaxKind::LetKeyword => {
                Declaration::Variable(self.parse_exported_variables(VariableKind::Let)?)
            }
            SyntaxKind::ConstKeyword => {
                Declaration::Variable(self.parse_exported_variables(VariableKind::Const)?)
            }
            SyntaxKind::FunctionKeyword => {
                Declaration::Function(self.parse_function_declaration(false, false)?)
            }
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => {
                Declaration::Function(self.parse_function_declaration(true, false)?)
            }
            SyntaxKind::ClassKeyword => Declaration::Class(self.parse_class_declaration(false)?),
            _ => return Err(self.unexpected_token_error()),
        };

        let mut names = Vec::new();
        match &declaration {
            Declaration::Variable(variables) => {
                for declarator in &variables.declarations {
                    collect_bound_names(&declarator.id, &mut names);
                }
            }
            Declaration::Function(function) => names.extend(function.id.as_ref()),
            Declaration::Class(class) => names.extend(class.id.as_ref()),
        }
        let names: Vec<(String, Position)> = names
            .into_iter()
            .map(|id| (id.name.clone(), id.span.start))
            .collect();
        for (name, pos) in names {
            self.add_export(&name, pos)?;
        }
        Ok(declaration)
    }

    fn parse_exported_variables(
        &mut self,
        kind: VariableKind,
    ) -> ParseResult<super::node::VariableDeclaration> {
        let pos = self.token_pos();
        let mut declaration = self.parse_variable_declaration_list(kind, false)?;
        self.parse_semicolon()?;
        declaration.span = self.finish(pos);
        Ok(declaration)
    }

    fn add_export(&mut self, name: &str, pos: Position) -> ParseResult<()> {
        if !self.exports.add_exported(name) {
            self.tolerate_at(
                pos,
                diagnostic_codes::DUPLICATE_EXPORT,
                format_message(diagnostic_messages::DUPLICATE_EXPORT, &[name]),
            )?;
        }
        Ok(())
    }
}
