//! AST node catalogue.
//!
//! ESTree-shaped owned tree. Every node struct carries a `span` and serializes
//! with its ESTree `type` tag; the closed enums are untagged so the inner
//! node supplies the tag. Children are owned (`Box` / boxed slices), there
//! are no parent links.

use esz_common::{Atom, Comment, Span, Spanned};
use esz_scanner::Token;
use serde::Serialize;

use super::options::SourceType;

// =============================================================================
// Program
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Program {
    pub span: Span,
    pub source_type: SourceType,
    pub body: Box<[Statement]>,
    #[serde(skip_serializing_if = "<[Comment]>::is_empty")]
    pub comments: Box<[Comment]>,
    #[serde(skip_serializing_if = "<[Token]>::is_empty")]
    pub tokens: Box<[Token]>,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Block(BlockStatement),
    Empty(EmptyStatement),
    Expression(ExpressionStatement),
    If(IfStatement),
    Labeled(LabeledStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    With(WithStatement),
    Switch(SwitchStatement),
    Return(ReturnStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    ForIn(ForInStatement),
    ForOf(ForOfStatement),
    Debugger(DebuggerStatement),
    FunctionDeclaration(Box<Function>),
    ClassDeclaration(Box<Class>),
    VariableDeclaration(VariableDeclaration),
    ImportDeclaration(ImportDeclaration),
    ExportNamedDeclaration(ExportNamedDeclaration),
    ExportDefaultDeclaration(ExportDefaultDeclaration),
    ExportAllDeclaration(ExportAllDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BlockStatement {
    pub span: Span,
    pub body: Box<[Statement]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EmptyStatement {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExpressionStatement {
    pub span: Span,
    pub expression: Expression,
    /// Raw directive text (without quotes) for directive prologue entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct IfStatement {
    pub span: Span,
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct LabeledStatement {
    pub span: Span,
    pub label: Identifier,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BreakStatement {
    pub span: Span,
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ContinueStatement {
    pub span: Span,
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct WithStatement {
    pub span: Span,
    pub object: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SwitchStatement {
    pub span: Span,
    pub discriminant: Expression,
    pub cases: Box<[SwitchCase]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SwitchCase {
    pub span: Span,
    /// `None` for `default:`.
    pub test: Option<Expression>,
    pub consequent: Box<[Statement]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ReturnStatement {
    pub span: Span,
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ThrowStatement {
    pub span: Span,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TryStatement {
    pub span: Span,
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct CatchClause {
    pub span: Span,
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct WhileStatement {
    pub span: Span,
    pub test: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct DoWhileStatement {
    pub span: Span,
    pub body: Box<Statement>,
    pub test: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ForStatement {
    pub span: Span,
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    VariableDeclaration(VariableDeclaration),
    Expression(Expression),
}

/// Left side of `for-in` / `for-of`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForTarget {
    VariableDeclaration(VariableDeclaration),
    Pattern(Pattern),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ForInStatement {
    pub span: Span,
    pub left: ForTarget,
    pub right: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ForOfStatement {
    pub span: Span,
    #[serde(rename = "await")]
    pub is_await: bool,
    pub left: ForTarget,
    pub right: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DebuggerStatement {
    pub span: Span,
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }

    #[inline]
    pub fn is_lexical(self) -> bool {
        !matches!(self, VariableKind::Var)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub span: Span,
    pub kind: VariableKind,
    pub declarations: Box<[VariableDeclarator]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct VariableDeclarator {
    pub span: Span,
    pub id: Pattern,
    pub init: Option<Expression>,
}

/// Declarations that can follow `export`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Declaration {
    Function(Box<Function>),
    Class(Box<Class>),
    Variable(VariableDeclaration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FunctionKind {
    FunctionDeclaration,
    FunctionExpression,
}

/// Function declarations, function expressions and method values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(rename = "type")]
    pub kind: FunctionKind,
    pub span: Span,
    pub id: Option<Identifier>,
    pub params: Box<[Pattern]>,
    pub body: BlockStatement,
    pub generator: bool,
    #[serde(rename = "async")]
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ArrowFunctionExpression {
    pub span: Span,
    pub params: Box<[Pattern]>,
    pub body: ArrowBody,
    #[serde(rename = "async")]
    pub is_async: bool,
    /// True for a concise (expression) body.
    pub expression: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassKind {
    ClassDeclaration,
    ClassExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(rename = "type")]
    pub kind: ClassKind,
    pub span: Span,
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassBody {
    pub span: Span,
    pub body: Box<[ClassElement]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassElement {
    Method(MethodDefinition),
    Property(PropertyDefinition),
    StaticBlock(StaticBlock),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct MethodDefinition {
    pub span: Span,
    pub key: PropertyKey,
    pub value: Box<Function>,
    pub kind: MethodKind,
    pub computed: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub span: Span,
    pub key: PropertyKey,
    pub value: Option<Expression>,
    pub computed: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct StaticBlock {
    pub span: Span,
    pub body: Box<[Statement]>,
}

// =============================================================================
// Modules
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportDeclaration {
    pub span: Span,
    pub specifiers: Box<[ImportSpecifier]>,
    pub source: Literal,
    pub attributes: Box<[ImportAttribute]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportSpecifier {
    Default(ImportDefaultSpecifier),
    Namespace(ImportNamespaceSpecifier),
    Named(ImportNamedSpecifier),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportDefaultSpecifier {
    pub span: Span,
    pub local: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportNamespaceSpecifier {
    pub span: Span,
    pub local: Identifier,
}

/// `import { imported as local }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportSpecifier", rename_all = "camelCase")]
pub struct ImportNamedSpecifier {
    pub span: Span,
    pub imported: ModuleExportName,
    pub local: Identifier,
}

/// `with { type: "json" }` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportAttribute {
    pub span: Span,
    pub key: ModuleExportName,
    pub value: Literal,
}

/// Identifier name or string literal naming a module binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleExportName {
    Identifier(Identifier),
    Literal(Literal),
}

impl ModuleExportName {
    /// The exported name as a string.
    pub fn name(&self) -> &str {
        match self {
            ModuleExportName::Identifier(id) => &id.name,
            ModuleExportName::Literal(lit) => match &lit.value {
                LiteralValue::String(s) => s,
                _ => &lit.raw,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportNamedDeclaration {
    pub span: Span,
    pub declaration: Option<Declaration>,
    pub specifiers: Box<[ExportSpecifier]>,
    pub source: Option<Literal>,
    pub attributes: Box<[ImportAttribute]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportSpecifier {
    pub span: Span,
    pub local: ModuleExportName,
    pub exported: ModuleExportName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportDefaultDeclaration {
    pub span: Span,
    pub declaration: ExportDefaultKind,
}

/// What `export default` can carry.
///
/// `export default x` is `Expression(Identifier)`. A destructuring pattern is
/// only ever the left side of an `Expression(Assignment)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultKind {
    FunctionDeclaration(Box<Function>),
    ClassDeclaration(Box<Class>),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExportAllDeclaration {
    pub span: Span,
    pub exported: Option<ModuleExportName>,
    pub source: Literal,
    pub attributes: Box<[ImportAttribute]>,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Identifier(Identifier),
    PrivateIdentifier(PrivateIdentifier),
    Literal(Literal),
    This(ThisExpression),
    Super(Super),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Function(Box<Function>),
    ArrowFunction(Box<ArrowFunctionExpression>),
    Class(Box<Class>),
    Template(TemplateLiteral),
    TaggedTemplate(TaggedTemplateExpression),
    Member(MemberExpression),
    Call(CallExpression),
    New(NewExpression),
    Chain(ChainExpression),
    Update(UpdateExpression),
    Unary(UnaryExpression),
    Binary(BinaryExpression),
    Logical(LogicalExpression),
    Conditional(ConditionalExpression),
    Assignment(AssignmentExpression),
    Sequence(SequenceExpression),
    Yield(YieldExpression),
    Await(AwaitExpression),
    MetaProperty(MetaProperty),
    Import(ImportExpression),
    Parenthesized(ParenthesizedExpression),
    JsxElement(Box<JsxElement>),
    JsxFragment(Box<JsxFragment>),
}

impl Expression {
    /// Strip any number of enclosing parentheses.
    pub fn without_parentheses(&self) -> &Expression {
        let mut expr = self;
        while let Expression::Parenthesized(paren) = expr {
            expr = &paren.expression;
        }
        expr
    }

    #[inline]
    pub fn is_parenthesized(&self) -> bool {
        matches!(self, Expression::Parenthesized(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Identifier {
    pub span: Span,
    pub name: String,
    #[serde(skip)]
    pub atom: Atom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct PrivateIdentifier {
    pub span: Span,
    /// Name without the leading `#`.
    pub name: String,
    #[serde(skip)]
    pub atom: Atom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Literal {
    pub span: Span,
    pub value: LiteralValue,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    /// Digits of a BigInt literal without separators or the `n` suffix.
    BigInt(String),
    Boolean(bool),
    Null,
    RegExp { pattern: String, flags: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Super {
    pub span: Span,
}

/// Element of an argument list or array literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Argument {
    Expression(Expression),
    Spread(SpreadElement),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SpreadElement {
    pub span: Span,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ArrayExpression {
    pub span: Span,
    /// `None` marks a hole.
    pub elements: Box<[Option<Argument>]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ObjectExpression {
    pub span: Span,
    pub properties: Box<[ObjectProperty]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectProperty {
    Property(Property),
    Spread(SpreadElement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Property {
    pub span: Span,
    pub key: PropertyKey,
    pub value: Expression,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
    PrivateIdentifier(PrivateIdentifier),
    Computed(Box<Expression>),
}

impl PropertyKey {
    /// Static name of a non-computed key (identifier name or string literal).
    pub fn static_name(&self) -> Option<&str> {
        match self {
            PropertyKey::Identifier(id) => Some(&id.name),
            PropertyKey::Literal(Literal {
                value: LiteralValue::String(s),
                ..
            }) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TemplateLiteral {
    pub span: Span,
    pub quasis: Box<[TemplateElement]>,
    pub expressions: Box<[Expression]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TemplateElement {
    pub span: Span,
    pub value: TemplateValue,
    pub tail: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateValue {
    pub raw: String,
    /// `None` when the raw text has an invalid escape (tagged templates only).
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TaggedTemplateExpression {
    pub span: Span,
    pub tag: Box<Expression>,
    pub quasi: TemplateLiteral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MemberProperty {
    Identifier(Identifier),
    PrivateIdentifier(PrivateIdentifier),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct MemberExpression {
    pub span: Span,
    pub object: Box<Expression>,
    pub property: MemberProperty,
    pub computed: bool,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct CallExpression {
    pub span: Span,
    pub callee: Box<Expression>,
    pub arguments: Box<[Argument]>,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct NewExpression {
    pub span: Span,
    pub callee: Box<Expression>,
    pub arguments: Box<[Argument]>,
}

/// Wraps a member/call chain containing at least one `?.`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ChainExpression {
    pub span: Span,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct UpdateExpression {
    pub span: Span,
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    LogicalNot,
    #[serde(rename = "~")]
    BitwiseNot,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct UnaryExpression {
    pub span: Span,
    pub operator: UnaryOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "==")]
    Equality,
    #[serde(rename = "!=")]
    Inequality,
    #[serde(rename = "===")]
    StrictEquality,
    #[serde(rename = "!==")]
    StrictInequality,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessEqualThan,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterEqualThan,
    #[serde(rename = "<<")]
    ShiftLeft,
    #[serde(rename = ">>")]
    ShiftRight,
    #[serde(rename = ">>>")]
    ShiftRightZeroFill,
    #[serde(rename = "+")]
    Addition,
    #[serde(rename = "-")]
    Subtraction,
    #[serde(rename = "*")]
    Multiplication,
    #[serde(rename = "/")]
    Division,
    #[serde(rename = "%")]
    Remainder,
    #[serde(rename = "**")]
    Exponential,
    #[serde(rename = "|")]
    BitwiseOr,
    #[serde(rename = "^")]
    BitwiseXor,
    #[serde(rename = "&")]
    BitwiseAnd,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BinaryExpression {
    pub span: Span,
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOperator {
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "??")]
    Coalesce,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct LogicalExpression {
    pub span: Span,
    pub operator: LogicalOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ConditionalExpression {
    pub span: Span,
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    Addition,
    #[serde(rename = "-=")]
    Subtraction,
    #[serde(rename = "*=")]
    Multiplication,
    #[serde(rename = "/=")]
    Division,
    #[serde(rename = "%=")]
    Remainder,
    #[serde(rename = "**=")]
    Exponential,
    #[serde(rename = "<<=")]
    ShiftLeft,
    #[serde(rename = ">>=")]
    ShiftRight,
    #[serde(rename = ">>>=")]
    ShiftRightZeroFill,
    #[serde(rename = "|=")]
    BitwiseOr,
    #[serde(rename = "^=")]
    BitwiseXor,
    #[serde(rename = "&=")]
    BitwiseAnd,
    #[serde(rename = "||=")]
    LogicalOr,
    #[serde(rename = "&&=")]
    LogicalAnd,
    #[serde(rename = "??=")]
    LogicalNullish,
}

impl AssignmentOperator {
    #[inline]
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            AssignmentOperator::LogicalOr
                | AssignmentOperator::LogicalAnd
                | AssignmentOperator::LogicalNullish
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct AssignmentExpression {
    pub span: Span,
    pub operator: AssignmentOperator,
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SequenceExpression {
    pub span: Span,
    pub expressions: Box<[Expression]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct YieldExpression {
    pub span: Span,
    pub argument: Option<Box<Expression>>,
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct AwaitExpression {
    pub span: Span,
    pub argument: Box<Expression>,
}

/// `new.target` and `import.meta`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct MetaProperty {
    pub span: Span,
    pub meta: Identifier,
    pub property: Identifier,
}

/// Dynamic `import(source, options?)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportExpression {
    pub span: Span,
    pub source: Box<Expression>,
    pub options: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ParenthesizedExpression {
    pub span: Span,
    pub expression: Box<Expression>,
}

// =============================================================================
// Patterns
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pattern {
    Identifier(Identifier),
    /// Assignment targets only; never produced for bindings.
    Member(MemberExpression),
    Object(ObjectPattern),
    Array(ArrayPattern),
    Assignment(AssignmentPattern),
    Rest(RestElement),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ObjectPattern {
    pub span: Span,
    pub properties: Box<[ObjectPatternProperty]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectPatternProperty {
    Property(AssignmentProperty),
    Rest(RestElement),
}

/// Property inside an object pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property", rename_all = "camelCase")]
pub struct AssignmentProperty {
    pub span: Span,
    pub key: PropertyKey,
    pub value: Pattern,
    pub shorthand: bool,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ArrayPattern {
    pub span: Span,
    pub elements: Box<[Option<Pattern>]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct AssignmentPattern {
    pub span: Span,
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct RestElement {
    pub span: Span,
    pub argument: Box<Pattern>,
}

// =============================================================================
// JSX
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXElement", rename_all = "camelCase")]
pub struct JsxElement {
    pub span: Span,
    pub opening_element: JsxOpeningElement,
    pub children: Box<[JsxChild]>,
    pub closing_element: Option<JsxClosingElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningElement", rename_all = "camelCase")]
pub struct JsxOpeningElement {
    pub span: Span,
    pub name: JsxElementName,
    pub attributes: Box<[JsxAttributeItem]>,
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingElement", rename_all = "camelCase")]
pub struct JsxClosingElement {
    pub span: Span,
    pub name: JsxElementName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXFragment", rename_all = "camelCase")]
pub struct JsxFragment {
    pub span: Span,
    pub opening_fragment: JsxOpeningFragment,
    pub children: Box<[JsxChild]>,
    pub closing_fragment: JsxClosingFragment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningFragment")]
pub struct JsxOpeningFragment {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingFragment")]
pub struct JsxClosingFragment {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxElementName {
    Identifier(JsxIdentifier),
    Namespaced(JsxNamespacedName),
    Member(JsxMemberExpression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXIdentifier")]
pub struct JsxIdentifier {
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXNamespacedName")]
pub struct JsxNamespacedName {
    pub span: Span,
    pub namespace: JsxIdentifier,
    pub name: JsxIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXMemberExpression")]
pub struct JsxMemberExpression {
    pub span: Span,
    /// A `JsxElementName::Identifier` or `JsxElementName::Member`.
    pub object: Box<JsxElementName>,
    pub property: JsxIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeItem {
    Attribute(JsxAttribute),
    Spread(JsxSpreadAttribute),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXAttribute")]
pub struct JsxAttribute {
    pub span: Span,
    pub name: JsxElementName,
    pub value: Option<JsxAttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadAttribute")]
pub struct JsxSpreadAttribute {
    pub span: Span,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeValue {
    Literal(Literal),
    ExpressionContainer(JsxExpressionContainer),
    Element(Box<JsxElement>),
    Fragment(Box<JsxFragment>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXExpressionContainer")]
pub struct JsxExpressionContainer {
    pub span: Span,
    pub expression: JsxExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxExpression {
    Expression(Box<Expression>),
    Empty(JsxEmptyExpression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXEmptyExpression")]
pub struct JsxEmptyExpression {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxChild {
    Text(JsxText),
    Element(Box<JsxElement>),
    Fragment(Box<JsxFragment>),
    ExpressionContainer(JsxExpressionContainer),
    Spread(JsxSpreadChild),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXText")]
pub struct JsxText {
    pub span: Span,
    pub value: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadChild")]
pub struct JsxSpreadChild {
    pub span: Span,
    pub expression: Expression,
}

// =============================================================================
// Spanned
// =============================================================================

macro_rules! impl_spanned_struct {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

macro_rules! impl_spanned_enum {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl Spanned for $ty {
            fn span(&self) -> Span {
                match self {
                    $($ty::$variant(node) => node.span(),)*
                }
            }
        }
    };
}

impl_spanned_struct!(
    Program,
    BlockStatement,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    WithStatement,
    SwitchStatement,
    SwitchCase,
    ReturnStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    DebuggerStatement,
    VariableDeclaration,
    VariableDeclarator,
    Function,
    ArrowFunctionExpression,
    Class,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    StaticBlock,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportNamedSpecifier,
    ImportAttribute,
    ExportNamedDeclaration,
    ExportSpecifier,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    Identifier,
    PrivateIdentifier,
    Literal,
    ThisExpression,
    Super,
    SpreadElement,
    ArrayExpression,
    ObjectExpression,
    Property,
    TemplateLiteral,
    TemplateElement,
    TaggedTemplateExpression,
    MemberExpression,
    CallExpression,
    NewExpression,
    ChainExpression,
    UpdateExpression,
    UnaryExpression,
    BinaryExpression,
    LogicalExpression,
    ConditionalExpression,
    AssignmentExpression,
    SequenceExpression,
    YieldExpression,
    AwaitExpression,
    MetaProperty,
    ImportExpression,
    ParenthesizedExpression,
    ObjectPattern,
    AssignmentProperty,
    ArrayPattern,
    AssignmentPattern,
    RestElement,
    JsxElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
    JsxOpeningFragment,
    JsxClosingFragment,
    JsxIdentifier,
    JsxNamespacedName,
    JsxMemberExpression,
    JsxAttribute,
    JsxSpreadAttribute,
    JsxExpressionContainer,
    JsxEmptyExpression,
    JsxText,
    JsxSpreadChild,
);

impl_spanned_enum!(Statement {
    Block,
    Empty,
    Expression,
    If,
    Labeled,
    Break,
    Continue,
    With,
    Switch,
    Return,
    Throw,
    Try,
    While,
    DoWhile,
    For,
    ForIn,
    ForOf,
    Debugger,
    FunctionDeclaration,
    ClassDeclaration,
    VariableDeclaration,
    ImportDeclaration,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
});

impl_spanned_enum!(Expression {
    Identifier,
    PrivateIdentifier,
    Literal,
    This,
    Super,
    Array,
    Object,
    Function,
    ArrowFunction,
    Class,
    Template,
    TaggedTemplate,
    Member,
    Call,
    New,
    Chain,
    Update,
    Unary,
    Binary,
    Logical,
    Conditional,
    Assignment,
    Sequence,
    Yield,
    Await,
    MetaProperty,
    Import,
    Parenthesized,
    JsxElement,
    JsxFragment,
});

impl_spanned_enum!(Pattern {
    Identifier,
    Member,
    Object,
    Array,
    Assignment,
    Rest,
});

impl_spanned_enum!(ForInit {
    VariableDeclaration,
    Expression
});
impl_spanned_enum!(ForTarget {
    VariableDeclaration,
    Pattern
});
impl_spanned_enum!(Declaration {
    Function,
    Class,
    Variable
});
impl_spanned_enum!(ArrowBody { Block, Expression });
impl_spanned_enum!(ClassElement {
    Method,
    Property,
    StaticBlock
});
impl_spanned_enum!(ImportSpecifier {
    Default,
    Namespace,
    Named
});
impl_spanned_enum!(ModuleExportName { Identifier, Literal });
impl_spanned_enum!(ExportDefaultKind {
    FunctionDeclaration,
    ClassDeclaration,
    Expression
});
impl_spanned_enum!(Argument { Expression, Spread });
impl_spanned_enum!(ObjectProperty { Property, Spread });
impl_spanned_enum!(PropertyKey {
    Identifier,
    Literal,
    PrivateIdentifier,
    Computed
});
impl_spanned_enum!(MemberProperty {
    Identifier,
    PrivateIdentifier,
    Computed
});
impl_spanned_enum!(ObjectPatternProperty { Property, Rest });
impl_spanned_enum!(JsxElementName {
    Identifier,
    Namespaced,
    Member
});
impl_spanned_enum!(JsxAttributeItem { Attribute, Spread });
impl_spanned_enum!(JsxAttributeValue {
    Literal,
    ExpressionContainer,
    Element,
    Fragment
});
impl_spanned_enum!(JsxExpression { Expression, Empty });
impl_spanned_enum!(JsxChild {
    Text,
    Element,
    Fragment,
    ExpressionContainer,
    Spread
});
