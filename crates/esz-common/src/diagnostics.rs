//! Diagnostic codes and message templates.
//!
//! Every error the scanner or parser reports has a stable numeric code and a
//! message template. Templates use `{0}`, `{1}`, ... placeholders filled in by
//! [`format_message`].

pub mod diagnostic_codes {
    // Lexical
    pub const UNEXPECTED_TOKEN: u32 = 1001;
    pub const INVALID_OR_UNEXPECTED_TOKEN: u32 = 1002;
    pub const UNEXPECTED_EOS: u32 = 1003;
    pub const UNEXPECTED_NUMBER: u32 = 1004;
    pub const UNEXPECTED_STRING: u32 = 1005;
    pub const UNEXPECTED_IDENTIFIER: u32 = 1006;
    pub const UNEXPECTED_RESERVED: u32 = 1007;
    pub const UNEXPECTED_TEMPLATE: u32 = 1008;
    pub const UNEXPECTED_STRICT_RESERVED: u32 = 1009;
    pub const UNTERMINATED_STRING: u32 = 1010;
    pub const UNTERMINATED_TEMPLATE: u32 = 1011;
    pub const UNTERMINATED_REGEXP: u32 = 1012;
    pub const UNTERMINATED_COMMENT: u32 = 1013;
    pub const INVALID_ESCAPE_SEQUENCE: u32 = 1014;
    pub const INVALID_HEX_ESCAPE_SEQUENCE: u32 = 1015;
    pub const INVALID_UNICODE_ESCAPE_SEQUENCE: u32 = 1016;
    pub const INVALID_NUMERIC_LITERAL: u32 = 1017;
    pub const INVALID_NUMERIC_SEPARATOR: u32 = 1018;
    pub const IDENTIFIER_AFTER_NUMERIC_LITERAL: u32 = 1019;
    pub const INVALID_REGEXP_FLAGS: u32 = 1020;
    pub const INVALID_IDENTIFIER_ESCAPE: u32 = 1021;
    pub const UNEXPECTED_CHARACTER: u32 = 1022;
    pub const KEYWORD_ESCAPED: u32 = 1023;

    // Statements and declarations
    pub const MISSING_CATCH_OR_FINALLY: u32 = 1100;
    pub const ILLEGAL_BREAK: u32 = 1101;
    pub const ILLEGAL_CONTINUE: u32 = 1102;
    pub const CONTINUE_NON_ITERATION: u32 = 1103;
    pub const UNKNOWN_LABEL: u32 = 1104;
    pub const LABEL_REDECLARATION: u32 = 1105;
    pub const ILLEGAL_RETURN: u32 = 1106;
    pub const STRICT_MODE_WITH: u32 = 1107;
    pub const STRICT_EVAL_ARGUMENTS: u32 = 1108;
    pub const STRICT_OCTAL_LITERAL: u32 = 1109;
    pub const STRICT_OCTAL_ESCAPE: u32 = 1110;
    pub const STRICT_LEADING_ZERO_DECIMAL: u32 = 1111;
    pub const DUPLICATE_PARAMETER: u32 = 1112;
    pub const STRICT_DELETE: u32 = 1113;
    pub const STRICT_FUNCTION: u32 = 1114;
    pub const STRICT_RESERVED_WORD: u32 = 1115;
    pub const INVALID_LHS_IN_ASSIGNMENT: u32 = 1116;
    pub const INVALID_LHS_IN_FOR_IN: u32 = 1117;
    pub const INVALID_LHS_IN_FOR_OF: u32 = 1118;
    pub const INVALID_LHS_IN_PREFIX: u32 = 1119;
    pub const INVALID_LHS_IN_POSTFIX: u32 = 1120;
    pub const INVALID_DESTRUCTURING_TARGET: u32 = 1121;
    pub const MULTIPLE_DEFAULTS_IN_SWITCH: u32 = 1122;
    pub const NEWLINE_AFTER_THROW: u32 = 1123;
    pub const CONST_WITHOUT_INITIALIZER: u32 = 1124;
    pub const DESTRUCTURING_WITHOUT_INITIALIZER: u32 = 1125;
    pub const LEXICAL_IN_SINGLE_STATEMENT: u32 = 1126;
    pub const LET_AS_LEXICAL_NAME: u32 = 1127;
    pub const DUPLICATE_BINDING: u32 = 1128;
    pub const FOR_IN_OF_INITIALIZER: u32 = 1129;
    pub const FOR_IN_OF_MULTIPLE_BINDINGS: u32 = 1130;
    pub const FOR_OF_ASYNC: u32 = 1131;
    pub const FOR_AWAIT_REQUIRES_OF: u32 = 1132;
    pub const ASYNC_FUNCTION_IN_SINGLE_STATEMENT: u32 = 1133;
    pub const GENERATOR_IN_SINGLE_STATEMENT: u32 = 1134;

    // Modules
    pub const ILLEGAL_IMPORT: u32 = 1140;
    pub const ILLEGAL_EXPORT: u32 = 1141;
    pub const MODULE_ITEM_NOT_TOP_LEVEL: u32 = 1142;
    pub const DUPLICATE_EXPORT: u32 = 1143;
    pub const UNDECLARED_EXPORT: u32 = 1144;
    pub const IMPORT_META_OUTSIDE_MODULE: u32 = 1145;
    pub const NEW_WITH_IMPORT: u32 = 1146;
    pub const NEW_TARGET_OUTSIDE_FUNCTION: u32 = 1147;
    pub const INVALID_META_PROPERTY: u32 = 1148;
    pub const IMPORT_CALL_ARITY: u32 = 1149;

    // Classes and functions
    pub const UNEXPECTED_SUPER: u32 = 1150;
    pub const CONSTRUCTOR_SPECIAL_METHOD: u32 = 1151;
    pub const DUPLICATE_CONSTRUCTOR: u32 = 1152;
    pub const STATIC_PROTOTYPE: u32 = 1153;
    pub const CONSTRUCTOR_FIELD: u32 = 1154;
    pub const PRIVATE_CONSTRUCTOR: u32 = 1155;
    pub const DUPLICATE_PRIVATE_NAME: u32 = 1156;
    pub const UNDECLARED_PRIVATE_NAME: u32 = 1157;
    pub const PRIVATE_DELETE: u32 = 1158;
    pub const GETTER_ARITY: u32 = 1160;
    pub const SETTER_ARITY: u32 = 1161;
    pub const SETTER_REST: u32 = 1162;
    pub const REST_PARAMETER_NOT_LAST: u32 = 1163;
    pub const REST_ELEMENT_NOT_LAST: u32 = 1164;
    pub const REST_WITH_INITIALIZER: u32 = 1165;
    pub const UNARY_BEFORE_EXPONENT: u32 = 1166;
    pub const MIXED_NULLISH_COALESCING: u32 = 1167;
    pub const USE_STRICT_NON_SIMPLE_PARAMS: u32 = 1168;
    pub const YIELD_IN_PARAMETER: u32 = 1170;
    pub const AWAIT_IN_PARAMETER: u32 = 1171;
    pub const ARGUMENTS_IN_CLASS_INIT: u32 = 1173;
    pub const DUPLICATE_PROTO: u32 = 1174;
    pub const OPTIONAL_CHAIN_NEW: u32 = 1175;
    pub const OPTIONAL_CHAIN_TEMPLATE: u32 = 1176;
    pub const INVALID_TEMPLATE_ESCAPE: u32 = 1177;

    // JSX
    pub const JSX_MISMATCHED_CLOSING_TAG: u32 = 1190;

    // Engine
    pub const TOO_DEEPLY_NESTED: u32 = 1195;
    pub const INTERNAL: u32 = 1999;
}

pub mod diagnostic_messages {
    pub const UNEXPECTED_TOKEN: &str = "Unexpected token {0}";
    pub const INVALID_OR_UNEXPECTED_TOKEN: &str = "Invalid or unexpected token";
    pub const UNEXPECTED_EOS: &str = "Unexpected end of input";
    pub const UNEXPECTED_NUMBER: &str = "Unexpected number";
    pub const UNEXPECTED_STRING: &str = "Unexpected string";
    pub const UNEXPECTED_IDENTIFIER: &str = "Unexpected identifier";
    pub const UNEXPECTED_RESERVED: &str = "Unexpected reserved word";
    pub const UNEXPECTED_TEMPLATE: &str = "Unexpected template string";
    pub const UNEXPECTED_STRICT_RESERVED: &str = "Unexpected strict mode reserved word";
    pub const UNTERMINATED_STRING: &str = "Unterminated string literal";
    pub const UNTERMINATED_TEMPLATE: &str = "Unterminated template literal";
    pub const UNTERMINATED_REGEXP: &str = "Invalid regular expression: missing /";
    pub const UNTERMINATED_COMMENT: &str = "Unterminated comment";
    pub const INVALID_ESCAPE_SEQUENCE: &str = "Invalid escape sequence";
    pub const INVALID_HEX_ESCAPE_SEQUENCE: &str = "Invalid hexadecimal escape sequence";
    pub const INVALID_UNICODE_ESCAPE_SEQUENCE: &str = "Invalid Unicode escape sequence";
    pub const INVALID_NUMERIC_LITERAL: &str = "Invalid numeric literal";
    pub const INVALID_NUMERIC_SEPARATOR: &str = "Numeric separators are not allowed here";
    pub const IDENTIFIER_AFTER_NUMERIC_LITERAL: &str =
        "An identifier or keyword cannot immediately follow a numeric literal";
    pub const INVALID_REGEXP_FLAGS: &str = "Invalid regular expression flags";
    pub const INVALID_IDENTIFIER_ESCAPE: &str = "Invalid Unicode escape sequence in identifier";
    pub const UNEXPECTED_CHARACTER: &str = "Invalid or unexpected token";
    pub const KEYWORD_ESCAPED: &str = "Keyword must not contain escaped characters";

    pub const MISSING_CATCH_OR_FINALLY: &str = "Missing catch or finally after try";
    pub const ILLEGAL_BREAK: &str = "Illegal break statement";
    pub const ILLEGAL_CONTINUE: &str =
        "Illegal continue statement: no surrounding iteration statement";
    pub const CONTINUE_NON_ITERATION: &str =
        "Illegal continue statement: '{0}' does not denote an iteration statement";
    pub const UNKNOWN_LABEL: &str = "Undefined label '{0}'";
    pub const LABEL_REDECLARATION: &str = "Label '{0}' has already been declared";
    pub const ILLEGAL_RETURN: &str = "Illegal return statement";
    pub const STRICT_MODE_WITH: &str = "Strict mode code may not include a with statement";
    pub const STRICT_EVAL_ARGUMENTS: &str = "Unexpected eval or arguments in strict mode";
    pub const STRICT_OCTAL_LITERAL: &str = "Octal literals are not allowed in strict mode.";
    pub const STRICT_OCTAL_ESCAPE: &str = "Octal escape sequences are not allowed in strict mode.";
    pub const STRICT_LEADING_ZERO_DECIMAL: &str =
        "Decimals with leading zeros are not allowed in strict mode.";
    pub const DUPLICATE_PARAMETER: &str = "Duplicate parameter name not allowed in this context";
    pub const STRICT_DELETE: &str = "Delete of an unqualified identifier in strict mode.";
    pub const STRICT_FUNCTION: &str =
        "In strict mode code, functions can only be declared at top level or inside a block.";
    pub const STRICT_RESERVED_WORD: &str = "Use of future reserved word in strict mode";
    pub const INVALID_LHS_IN_ASSIGNMENT: &str = "Invalid left-hand side in assignment";
    pub const INVALID_LHS_IN_FOR_IN: &str = "Invalid left-hand side in for-in";
    pub const INVALID_LHS_IN_FOR_OF: &str = "Invalid left-hand side in for-of";
    pub const INVALID_LHS_IN_PREFIX: &str =
        "Invalid left-hand side expression in prefix operation";
    pub const INVALID_LHS_IN_POSTFIX: &str =
        "Invalid left-hand side expression in postfix operation";
    pub const INVALID_DESTRUCTURING_TARGET: &str = "Invalid destructuring assignment target";
    pub const MULTIPLE_DEFAULTS_IN_SWITCH: &str =
        "More than one default clause in switch statement";
    pub const NEWLINE_AFTER_THROW: &str = "Illegal newline after throw";
    pub const CONST_WITHOUT_INITIALIZER: &str = "Missing initializer in const declaration";
    pub const DESTRUCTURING_WITHOUT_INITIALIZER: &str =
        "Missing initializer in destructuring declaration";
    pub const LEXICAL_IN_SINGLE_STATEMENT: &str =
        "Lexical declaration cannot appear in a single-statement context";
    pub const LET_AS_LEXICAL_NAME: &str = "let is disallowed as a lexically bound name";
    pub const DUPLICATE_BINDING: &str = "Identifier '{0}' has already been declared";
    pub const FOR_IN_OF_INITIALIZER: &str =
        "{0} loop variable declaration may not have an initializer.";
    pub const FOR_IN_OF_MULTIPLE_BINDINGS: &str =
        "Invalid left-hand side in {0}: must have a single binding.";
    pub const FOR_OF_ASYNC: &str = "The left-hand side of a for-of loop may not be 'async'.";
    pub const FOR_AWAIT_REQUIRES_OF: &str = "for await is only valid with for-of loops";
    pub const ASYNC_FUNCTION_IN_SINGLE_STATEMENT: &str =
        "Async functions can only be declared at the top level or inside a block.";
    pub const GENERATOR_IN_SINGLE_STATEMENT: &str =
        "Generators can only be declared at the top level or inside a block.";

    pub const ILLEGAL_IMPORT: &str = "Cannot use import statement outside a module";
    pub const ILLEGAL_EXPORT: &str = "Cannot use export statement outside a module";
    pub const MODULE_ITEM_NOT_TOP_LEVEL: &str =
        "'import' and 'export' may only appear at the top level";
    pub const DUPLICATE_EXPORT: &str = "Duplicate export of '{0}'";
    pub const UNDECLARED_EXPORT: &str = "Export '{0}' is not defined";
    pub const IMPORT_META_OUTSIDE_MODULE: &str = "Cannot use 'import.meta' outside a module";
    pub const NEW_WITH_IMPORT: &str = "Cannot use new with import";
    pub const NEW_TARGET_OUTSIDE_FUNCTION: &str = "new.target expression is not allowed here";
    pub const INVALID_META_PROPERTY: &str = "The only valid meta property for {0} is {0}.{1}";
    pub const IMPORT_CALL_ARITY: &str = "Dynamic import requires one or two arguments";

    pub const UNEXPECTED_SUPER: &str = "'super' keyword unexpected here";
    pub const CONSTRUCTOR_SPECIAL_METHOD: &str = "Class constructor may not be {0}";
    pub const DUPLICATE_CONSTRUCTOR: &str = "A class may only have one constructor";
    pub const STATIC_PROTOTYPE: &str = "Classes may not have a static property named 'prototype'";
    pub const CONSTRUCTOR_FIELD: &str = "Classes may not have a field named 'constructor'";
    pub const PRIVATE_CONSTRUCTOR: &str =
        "Classes may not have a private field named '#constructor'";
    pub const DUPLICATE_PRIVATE_NAME: &str = "Identifier '#{0}' has already been declared";
    pub const UNDECLARED_PRIVATE_NAME: &str =
        "Private field '#{0}' must be declared in an enclosing class";
    pub const PRIVATE_DELETE: &str = "Private fields can not be deleted";
    pub const GETTER_ARITY: &str = "Getter must not have any formal parameters.";
    pub const SETTER_ARITY: &str = "Setter must have exactly one formal parameter.";
    pub const SETTER_REST: &str = "Setter function argument must not be a rest parameter";
    pub const REST_PARAMETER_NOT_LAST: &str = "Rest parameter must be last formal parameter";
    pub const REST_ELEMENT_NOT_LAST: &str = "Rest element must be last element";
    pub const REST_WITH_INITIALIZER: &str = "Rest parameter may not have a default initializer";
    pub const UNARY_BEFORE_EXPONENT: &str = "Unary operator used immediately before exponentiation expression. Parenthesis must be used to disambiguate operator precedence";
    pub const MIXED_NULLISH_COALESCING: &str =
        "Nullish coalescing operator(??) requires parens when mixing with logical operators";
    pub const USE_STRICT_NON_SIMPLE_PARAMS: &str =
        "Illegal 'use strict' directive in function with non-simple parameter list";
    pub const YIELD_IN_PARAMETER: &str = "Yield expression not allowed in formal parameter";
    pub const AWAIT_IN_PARAMETER: &str =
        "Illegal await-expression in formal parameters of async function";
    pub const ARGUMENTS_IN_CLASS_INIT: &str =
        "'arguments' is not allowed in class field initializer or static initialization block";
    pub const DUPLICATE_PROTO: &str =
        "Duplicate __proto__ fields are not allowed in object literals";
    pub const OPTIONAL_CHAIN_NEW: &str = "Invalid optional chain from new expression";
    pub const OPTIONAL_CHAIN_TEMPLATE: &str = "Invalid tagged template on optional chain";
    pub const INVALID_TEMPLATE_ESCAPE: &str = "Invalid escape sequence in template";

    pub const JSX_MISMATCHED_CLOSING_TAG: &str = "Expected corresponding JSX closing tag for {0}";

    pub const TOO_DEEPLY_NESTED: &str = "Maximum nesting depth exceeded";
    pub const INTERNAL: &str = "Internal parser error: {0}";
}

/// Format a message template by replacing `{0}`, `{1}`, ... with `args`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
