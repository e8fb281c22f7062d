use crate::*;

fn kinds(source: &str) -> Vec<SyntaxKind> {
    let mut scanner = ScannerState::new(source, false);
    let mut out = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        out.push(kind);
    }
    out
}

fn first_error(source: &str) -> Option<LexicalErrorKind> {
    let mut scanner = ScannerState::new(source, false);
    loop {
        let kind = scanner.scan();
        if let Some(err) = scanner.take_lexical_error() {
            return Some(err.kind);
        }
        if kind == SyntaxKind::EndOfFileToken {
            return None;
        }
    }
}

#[test]
fn test_scan_empty() {
    let mut scanner = ScannerState::new("", true);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_whitespace_skip() {
    let mut scanner = ScannerState::new("  \t\u{00A0}\u{FEFF} foo", true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "foo");
    assert!(!scanner.has_preceding_line_break());
    assert_eq!(scanner.get_token_start(), 9);
    assert_eq!(scanner.token_start_position().offset, 6);
}

#[test]
fn test_scan_newline_sets_flag() {
    let mut scanner = ScannerState::new("a\nb\u{2028}c", false);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(!scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.token_start_position().line, 2);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.token_start_position().line, 3);
    assert_eq!(scanner.token_start_position().column, 0);
}

#[test]
fn test_scan_punctuation() {
    assert_eq!(
        kinds("{}()[];,"),
        vec![
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::CommaToken,
        ]
    );
}

#[test]
fn test_scan_compound_operators() {
    assert_eq!(
        kinds("=== !== == != => && || ?? ??= **= ... ?."),
        vec![
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::AmpersandAmpersandToken,
            SyntaxKind::BarBarToken,
            SyntaxKind::QuestionQuestionToken,
            SyntaxKind::QuestionQuestionEqualsToken,
            SyntaxKind::AsteriskAsteriskEqualsToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::QuestionDotToken,
        ]
    );
}

#[test]
fn test_question_dot_before_digit_is_conditional() {
    assert_eq!(
        kinds("a?.5:b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::ColonToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_greater_than_is_rescanned_on_demand() {
    let mut scanner = ScannerState::new("a >>>= b", false);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(
        scanner.re_scan_greater_token(),
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
    );
    assert_eq!(scanner.get_token_text(), ">>>=");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_keywords_and_contextual_words() {
    assert_eq!(
        kinds("if let async await of yield"),
        vec![
            SyntaxKind::IfKeyword,
            SyntaxKind::LetKeyword,
            SyntaxKind::AsyncKeyword,
            SyntaxKind::AwaitKeyword,
            SyntaxKind::OfKeyword,
            SyntaxKind::YieldKeyword,
        ]
    );
}

#[test]
fn test_escaped_keyword_keeps_kind_with_flag() {
    let mut scanner = ScannerState::new("\\u0069f", false);
    assert_eq!(scanner.scan(), SyntaxKind::IfKeyword);
    assert!(scanner.has_unicode_escape());
    assert_eq!(scanner.get_token_value(), "if");
}

#[test]
fn test_escaped_contextual_keyword_is_identifier() {
    let mut scanner = ScannerState::new("\\u{61}sync", false);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "async");
    assert!(scanner.has_unicode_escape());
}

#[test]
fn test_identifier_atoms_are_shared() {
    let mut scanner = ScannerState::new("foo bar foo", false);
    scanner.scan();
    let first = scanner.get_token_atom();
    scanner.scan();
    let second = scanner.get_token_atom();
    scanner.scan();
    assert_eq!(scanner.get_token_atom(), first);
    assert_ne!(first, second);
    assert_eq!(scanner.interner().resolve(first), "foo");
}

#[test]
fn test_unicode_identifier() {
    let mut scanner = ScannerState::new("ünïcödé_ñ x", false);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "ünïcödé_ñ");
}

#[test]
fn test_invalid_identifier_escape() {
    assert_eq!(
        first_error("\\u0031abc"),
        Some(LexicalErrorKind::InvalidIdentifierEscape)
    );
}

#[test]
fn test_private_identifier() {
    let mut scanner = ScannerState::new("#secret", false);
    assert_eq!(scanner.scan(), SyntaxKind::PrivateIdentifier);
    assert_eq!(scanner.get_token_value(), "secret");
    assert_eq!(first_error("# x"), Some(LexicalErrorKind::UnexpectedCharacter));
}

#[test]
fn test_numeric_literals() {
    let cases: &[(&str, f64)] = &[
        ("0", 0.0),
        ("42", 42.0),
        ("3.25", 3.25),
        (".5", 0.5),
        ("1e3", 1000.0),
        ("2E-2", 0.02),
        ("0x1F", 31.0),
        ("0o17", 15.0),
        ("0b101", 5.0),
        ("1_000_000", 1_000_000.0),
        ("017", 15.0),
        ("089", 89.0),
    ];
    for (source, value) in cases {
        let mut scanner = ScannerState::new(*source, false);
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral, "{source}");
        assert_eq!(scanner.get_number_value(), *value, "{source}");
        assert_eq!(scanner.get_token_value(), *source);
        assert!(scanner.take_lexical_error().is_none(), "{source}");
    }
}

#[test]
fn test_numeric_flags() {
    let mut scanner = ScannerState::new("017 089 0x10 1e5", false);
    scanner.scan();
    assert!(scanner.get_token_flags().contains(TokenFlags::OCTAL));
    scanner.scan();
    assert!(scanner.get_token_flags().contains(TokenFlags::NON_OCTAL_DECIMAL));
    scanner.scan();
    assert!(scanner.get_token_flags().contains(TokenFlags::HEX_SPECIFIER));
    scanner.scan();
    assert!(scanner.get_token_flags().contains(TokenFlags::SCIENTIFIC));
}

#[test]
fn test_bigint_literal() {
    let mut scanner = ScannerState::new("123n 0xffn", false);
    assert_eq!(scanner.scan(), SyntaxKind::BigIntLiteral);
    assert_eq!(scanner.get_token_value(), "123n");
    assert_eq!(scanner.scan(), SyntaxKind::BigIntLiteral);
    assert!(scanner.get_token_flags().contains(TokenFlags::BIG_INT));
}

#[test]
fn test_numeric_errors() {
    assert_eq!(first_error("3in x"), Some(LexicalErrorKind::IdentifierAfterNumericLiteral));
    assert_eq!(first_error("1__0"), Some(LexicalErrorKind::InvalidNumericSeparator));
    assert_eq!(first_error("1_"), Some(LexicalErrorKind::InvalidNumericSeparator));
    assert_eq!(first_error("0x"), Some(LexicalErrorKind::InvalidNumericLiteral));
    assert_eq!(first_error("1e"), Some(LexicalErrorKind::InvalidNumericLiteral));
}

#[test]
fn test_separator_after_leading_zero() {
    assert_eq!(first_error("0_1"), Some(LexicalErrorKind::InvalidNumericSeparator));
    assert_eq!(first_error("0_0"), Some(LexicalErrorKind::InvalidNumericSeparator));
    assert_eq!(first_error("0.0_1"), None);
    assert_eq!(first_error("10_1"), None);

    let mut scanner = ScannerState::new("0_1", false);
    scanner.scan();
    let err = scanner.take_lexical_error().expect("separator error");
    assert_eq!(err.span.start.offset, 1);
}

#[test]
fn test_positions_count_utf16_units() {
    let mut scanner = ScannerState::new("'\\u00e9\u{e9}'; x", false);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_end_position().offset, 9);
    assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_start(), 12);
    let pos = scanner.token_start_position();
    assert_eq!((pos.offset, pos.line, pos.column), (11, 1, 11));

    // Outside the BMP a character is a surrogate pair: two units.
    let mut scanner = ScannerState::new("'\u{1F600}'; x", false);
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    let pos = scanner.token_start_position();
    assert_eq!((pos.offset, pos.column), (6, 6));
    assert_eq!(scanner.token_end_position().offset, 7);

    let mut scanner = ScannerState::new("'\u{e9}\u{1F600}';\n\u{e9}\u{e9} + y", false);
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    let pos = scanner.token_start_position();
    assert_eq!((pos.offset, pos.line, pos.column), (7, 2, 0));
    assert_eq!(scanner.scan(), SyntaxKind::PlusToken);
    assert_eq!(scanner.token_start_position().column, 3);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    let pos = scanner.token_start_position();
    assert_eq!((pos.offset, pos.column), (12, 5));
}

#[test]
fn test_string_escapes() {
    let mut scanner = ScannerState::new(r#"'a\nb\x41B\u{1F600}\'c'"#, false);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_value(), "a\nbAB\u{1F600}'c");
}

#[test]
fn test_string_surrogate_pairs() {
    let mut scanner = ScannerState::new(r#""😀" "\uD800""#, false);
    scanner.scan();
    assert_eq!(scanner.get_token_value(), "\u{1F600}");
    scanner.scan();
    assert_eq!(scanner.get_token_value(), "\u{FFFD}");
}

#[test]
fn test_string_legacy_octal_escape() {
    let mut scanner = ScannerState::new(r#""\101\0""#, false);
    scanner.scan();
    assert_eq!(scanner.get_token_value(), "A\0");
    assert!(scanner.get_token_flags().contains(TokenFlags::OCTAL));
}

#[test]
fn test_string_line_continuation() {
    let mut scanner = ScannerState::new("'a\\\nb' x", false);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_value(), "ab");
    scanner.scan();
    assert_eq!(scanner.token_start_position().line, 2);
}

#[test]
fn test_unterminated_string() {
    assert_eq!(first_error("'abc"), Some(LexicalErrorKind::UnterminatedString));
    assert_eq!(first_error("'abc\n'"), Some(LexicalErrorKind::UnterminatedString));
    assert_eq!(first_error(r#""\x4""#), Some(LexicalErrorKind::InvalidHexEscapeSequence));
}

#[test]
fn test_template_tokens() {
    let mut scanner = ScannerState::new("`a${b}c${d}e`", false);
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.get_token_value(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.get_template_raw(), "c");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.get_token_value(), "e");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_template_invalid_escape_is_flagged_not_fatal() {
    let mut scanner = ScannerState::new(r"`\unicode`", false);
    assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert!(scanner.get_token_flags().contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
    assert!(scanner.take_lexical_error().is_none());
    assert_eq!(scanner.get_template_raw(), r"\unicode");
}

#[test]
fn test_template_raw_normalizes_crlf() {
    let mut scanner = ScannerState::new("`a\r\nb`", false);
    scanner.scan();
    assert_eq!(scanner.get_token_value(), "a\nb");
    assert_eq!(scanner.get_template_raw(), "a\nb");
}

#[test]
fn test_unterminated_template() {
    assert_eq!(first_error("`abc"), Some(LexicalErrorKind::UnterminatedTemplate));
}

#[test]
fn test_slash_is_division_until_rescanned() {
    let mut scanner = ScannerState::new("/ab[/]c/gi", false);
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(scanner.re_scan_slash_token(), SyntaxKind::RegularExpressionLiteral);
    assert_eq!(scanner.get_token_value(), "ab[/]c");
    assert_eq!(scanner.get_regex_flags(), "gi");
    assert_eq!(scanner.get_token_text(), "/ab[/]c/gi");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_regex_errors() {
    let mut scanner = ScannerState::new("/abc\n/", false);
    scanner.scan();
    scanner.re_scan_slash_token();
    assert_eq!(
        scanner.take_lexical_error().map(|e| e.kind),
        Some(LexicalErrorKind::UnterminatedRegExp)
    );

    let mut scanner = ScannerState::new("/a/gg", false);
    scanner.scan();
    scanner.re_scan_slash_token();
    assert_eq!(
        scanner.take_lexical_error().map(|e| e.kind),
        Some(LexicalErrorKind::InvalidRegExpFlags)
    );
}

#[test]
fn test_comments_are_collected() {
    let mut scanner = ScannerState::new("// one\n/* two\nthree */ x", true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.token_start_position().line, 3);
    let comments = scanner.take_comments();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].kind, esz_common::CommentKind::Line);
    assert_eq!(comments[0].value, " one");
    assert_eq!(comments[1].kind, esz_common::CommentKind::Block);
    assert_eq!(comments[1].value, " two\nthree ");
}

#[test]
fn test_comments_not_collected_when_disabled() {
    let mut scanner = ScannerState::new("/* c */ x", false);
    scanner.scan();
    assert!(scanner.take_comments().is_empty());
}

#[test]
fn test_unterminated_block_comment() {
    assert_eq!(first_error("/* never"), Some(LexicalErrorKind::UnterminatedComment));
}

#[test]
fn test_hashbang_only_at_start() {
    let mut scanner = ScannerState::new("#!/usr/bin/env node\nx", true);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    let comments = scanner.take_comments();
    assert_eq!(comments[0].kind, esz_common::CommentKind::Hashbang);
}

#[test]
fn test_html_comments_in_script_goal() {
    assert_eq!(kinds("x <!-- hidden\n--> also hidden\ny"), vec![
        SyntaxKind::Identifier,
        SyntaxKind::Identifier,
    ]);

    let mut scanner = ScannerState::new("x <!-- y", false);
    scanner.set_module_goal(true);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
}

#[test]
fn test_save_and_restore_state() {
    let mut scanner = ScannerState::new("a /* c */ b c", true);
    scanner.scan();
    let snapshot = scanner.save_state();
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "b");
    scanner.scan();
    scanner.restore_state(snapshot);
    assert_eq!(scanner.get_token_value(), "a");
    assert!(scanner.take_comments().is_empty());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "b");
}

#[test]
fn test_unexpected_character() {
    let mut scanner = ScannerState::new("a @ b", false);
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    let err = scanner.take_lexical_error().map(|e| e.kind);
    assert_eq!(err, Some(LexicalErrorKind::UnexpectedCharacter));
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_jsx_text_and_entities() {
    let mut scanner = ScannerState::new("hello &amp; &#x41; world<", false);
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
    assert_eq!(scanner.get_token_value(), "hello & A world");
    assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanToken);
}

#[test]
fn test_jsx_identifier_with_dashes() {
    let mut scanner = ScannerState::new("data-foo-bar=", false);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan_jsx_identifier(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_value(), "data-foo-bar");
    assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
}

#[test]
fn test_jsx_attribute_value_has_no_escapes() {
    let mut scanner = ScannerState::new(r#""a\n&lt;""#, false);
    scanner.scan();
    assert_eq!(scanner.scan_jsx_attribute_value(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.get_token_value(), "a\\n<");
}

#[test]
fn test_lexical_error_codes_are_stable() {
    assert_eq!(LexicalErrorKind::UnterminatedString.code(), 1010);
    assert_eq!(
        LexicalErrorKind::UnterminatedRegExp.to_string(),
        "Invalid regular expression: missing /"
    );
}
