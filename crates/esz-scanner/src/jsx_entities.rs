//! HTML character references recognised in JSX text and attribute values.

/// Named entities, sorted by name for binary search.
static ENTITIES: &[(&str, char)] = &[
    ("AElig", '\u{00C6}'),
    ("Aacute", '\u{00C1}'),
    ("Agrave", '\u{00C0}'),
    ("Alpha", '\u{0391}'),
    ("Beta", '\u{0392}'),
    ("Ccedil", '\u{00C7}'),
    ("Delta", '\u{0394}'),
    ("Eacute", '\u{00C9}'),
    ("Gamma", '\u{0393}'),
    ("Lambda", '\u{039B}'),
    ("Ntilde", '\u{00D1}'),
    ("Omega", '\u{03A9}'),
    ("Ouml", '\u{00D6}'),
    ("Pi", '\u{03A0}'),
    ("Sigma", '\u{03A3}'),
    ("Uuml", '\u{00DC}'),
    ("aacute", '\u{00E1}'),
    ("acute", '\u{00B4}'),
    ("aelig", '\u{00E6}'),
    ("agrave", '\u{00E0}'),
    ("alpha", '\u{03B1}'),
    ("amp", '&'),
    ("apos", '\''),
    ("auml", '\u{00E4}'),
    ("beta", '\u{03B2}'),
    ("brvbar", '\u{00A6}'),
    ("bull", '\u{2022}'),
    ("ccedil", '\u{00E7}'),
    ("cent", '\u{00A2}'),
    ("copy", '\u{00A9}'),
    ("curren", '\u{00A4}'),
    ("dagger", '\u{2020}'),
    ("darr", '\u{2193}'),
    ("deg", '\u{00B0}'),
    ("delta", '\u{03B4}'),
    ("divide", '\u{00F7}'),
    ("eacute", '\u{00E9}'),
    ("egrave", '\u{00E8}'),
    ("emsp", '\u{2003}'),
    ("ensp", '\u{2002}'),
    ("epsilon", '\u{03B5}'),
    ("euml", '\u{00EB}'),
    ("euro", '\u{20AC}'),
    ("frac12", '\u{00BD}'),
    ("frac14", '\u{00BC}'),
    ("frac34", '\u{00BE}'),
    ("gamma", '\u{03B3}'),
    ("ge", '\u{2265}'),
    ("gt", '>'),
    ("harr", '\u{2194}'),
    ("hellip", '\u{2026}'),
    ("iacute", '\u{00ED}'),
    ("iexcl", '\u{00A1}'),
    ("infin", '\u{221E}'),
    ("iquest", '\u{00BF}'),
    ("iuml", '\u{00EF}'),
    ("lambda", '\u{03BB}'),
    ("laquo", '\u{00AB}'),
    ("larr", '\u{2190}'),
    ("ldquo", '\u{201C}'),
    ("le", '\u{2264}'),
    ("lsquo", '\u{2018}'),
    ("lt", '<'),
    ("mdash", '\u{2014}'),
    ("micro", '\u{00B5}'),
    ("middot", '\u{00B7}'),
    ("mu", '\u{03BC}'),
    ("nbsp", '\u{00A0}'),
    ("ndash", '\u{2013}'),
    ("ne", '\u{2260}'),
    ("not", '\u{00AC}'),
    ("ntilde", '\u{00F1}'),
    ("oacute", '\u{00F3}'),
    ("omega", '\u{03C9}'),
    ("ouml", '\u{00F6}'),
    ("para", '\u{00B6}'),
    ("pi", '\u{03C0}'),
    ("plusmn", '\u{00B1}'),
    ("pound", '\u{00A3}'),
    ("quot", '"'),
    ("raquo", '\u{00BB}'),
    ("rarr", '\u{2192}'),
    ("rdquo", '\u{201D}'),
    ("reg", '\u{00AE}'),
    ("rsquo", '\u{2019}'),
    ("sect", '\u{00A7}'),
    ("shy", '\u{00AD}'),
    ("sigma", '\u{03C3}'),
    ("szlig", '\u{00DF}'),
    ("thinsp", '\u{2009}'),
    ("times", '\u{00D7}'),
    ("trade", '\u{2122}'),
    ("uacute", '\u{00FA}'),
    ("uarr", '\u{2191}'),
    ("uuml", '\u{00FC}'),
    ("yen", '\u{00A5}'),
    ("zwj", '\u{200D}'),
    ("zwnj", '\u{200C}'),
];

/// Longest entity body we look at before giving up on a `;`.
const MAX_ENTITY_LEN: usize = 10;

/// Decode a character reference at the start of `text` (which begins with `&`).
///
/// Returns the character and the number of bytes consumed, or None when the
/// text is not a well-formed reference; the `&` is then literal.
pub fn decode_entity(text: &str) -> Option<(char, usize)> {
    let body = text.strip_prefix('&')?;
    let semi = body.bytes().take(MAX_ENTITY_LEN + 1).position(|b| b == b';')?;
    let name = &body[..semi];
    let consumed = semi + 2;

    if let Some(numeric) = name.strip_prefix('#') {
        let code = if let Some(hex) = numeric
            .strip_prefix('x')
            .or_else(|| numeric.strip_prefix('X'))
        {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            numeric.parse::<u32>().ok()?
        };
        return char::from_u32(code).map(|ch| (ch, consumed));
    }

    ENTITIES
        .binary_search_by(|(entity, _)| (*entity).cmp(name))
        .ok()
        .map(|index| (ENTITIES[index].1, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(ENTITIES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn decodes_named_and_numeric() {
        assert_eq!(decode_entity("&amp; rest"), Some(('&', 5)));
        assert_eq!(decode_entity("&nbsp;"), Some(('\u{00A0}', 6)));
        assert_eq!(decode_entity("&#65;"), Some(('A', 5)));
        assert_eq!(decode_entity("&#x41;"), Some(('A', 6)));
        assert_eq!(decode_entity("&unknown;"), None);
        assert_eq!(decode_entity("& amp"), None);
    }
}
