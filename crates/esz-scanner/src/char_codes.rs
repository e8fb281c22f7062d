//! Character classification for the ECMAScript lexical grammar.

pub const NULL: char = '\0';
pub const TAB: char = '\t';
pub const VERTICAL_TAB: char = '\u{000B}';
pub const FORM_FEED: char = '\u{000C}';
pub const SPACE: char = ' ';
pub const NON_BREAKING_SPACE: char = '\u{00A0}';
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// WhiteSpace per ECMA-262 11.2: TAB, VT, FF, ZWNBSP and any `Zs` code point.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    match ch {
        TAB | VERTICAL_TAB | FORM_FEED | SPACE | NON_BREAKING_SPACE | BYTE_ORDER_MARK => true,
        '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => true,
        _ => false,
    }
}

#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic() || ch == '$' || ch == '_';
    }
    // Other_ID_Start: KATAKANA-HIRAGANA VOICED/SEMI-VOICED SOUND MARK
    ch == '\u{309B}' || ch == '\u{309C}' || unicode_ident::is_xid_start(ch)
}

#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '$' || ch == '_';
    }
    ch == ZERO_WIDTH_NON_JOINER
        || ch == ZERO_WIDTH_JOINER
        || ch == '\u{309B}'
        || ch == '\u{309C}'
        || unicode_ident::is_xid_continue(ch)
}

#[inline]
pub fn is_ascii_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'$' || b == b'_'
}

#[inline]
pub fn is_ascii_identifier_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'$' || b == b'_'
}

#[inline]
pub fn is_octal_digit(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}

#[inline]
pub fn is_binary_digit(b: u8) -> bool {
    b == b'0' || b == b'1'
}

/// Digit value in `radix`, or None.
#[inline]
pub fn digit_value(b: u8, radix: u32) -> Option<u32> {
    (b as char).to_digit(radix)
}
