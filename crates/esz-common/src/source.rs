//! Immutable source buffer.

use std::sync::Arc;

use memchr::memchr3;

pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// An immutable, cheaply clonable view over the full input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceText {
    text: Arc<str>,
}

impl SourceText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        SourceText { text: text.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The shared backing buffer.
    #[inline]
    pub fn arc(&self) -> &Arc<str> {
        &self.text
    }

    /// Borrow `length` bytes starting at `offset`. Out-of-range requests are
    /// clamped to the buffer end.
    pub fn slice(&self, offset: usize, length: usize) -> &str {
        let start = offset.min(self.text.len());
        let end = start.saturating_add(length).min(self.text.len());
        self.text.get(start..end).unwrap_or("")
    }

    /// Owned variant of [`slice`](Self::slice). Requesting the whole buffer
    /// hands back the same allocation; any other range is copied.
    pub fn slice_shared(&self, offset: usize, length: usize) -> Arc<str> {
        if offset == 0 && length >= self.text.len() {
            return Arc::clone(&self.text);
        }
        Arc::from(self.slice(offset, length))
    }
}

impl From<&str> for SourceText {
    fn from(value: &str) -> Self {
        SourceText::new(value)
    }
}

impl From<String> for SourceText {
    fn from(value: String) -> Self {
        SourceText::new(value)
    }
}

/// Maps byte offsets of a UTF-8 buffer to UTF-16 code unit offsets.
///
/// Only non-ASCII characters are recorded. Between two of them both measures
/// advance by one per byte, so an ASCII-only buffer needs no table at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Utf16Offsets {
    /// `(byte offset, UTF-16 offset)` just past each non-ASCII character.
    checkpoints: Vec<(u32, u32)>,
}

impl Utf16Offsets {
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Utf16Offsets::default();
        }
        let mut checkpoints = Vec::new();
        let mut byte_end = 0usize;
        let mut utf16_end = 0usize;
        for (byte, ch) in text.char_indices().filter(|(_, ch)| !ch.is_ascii()) {
            utf16_end += (byte - byte_end) + ch.len_utf16();
            byte_end = byte + ch.len_utf8();
            checkpoints.push((byte_end as u32, utf16_end as u32));
        }
        Utf16Offsets { checkpoints }
    }

    /// Whether byte and UTF-16 offsets coincide everywhere.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// UTF-16 offset of the character boundary at byte offset `byte`.
    pub fn utf16_offset(&self, byte: usize) -> u32 {
        let byte = byte as u32;
        let index = self.checkpoints.partition_point(|&(end, _)| end <= byte);
        match index.checked_sub(1).map(|i| self.checkpoints[i]) {
            Some((byte_end, utf16_end)) => utf16_end + (byte - byte_end),
            None => byte,
        }
    }
}

/// Byte index in `text` of the UTF-16 offset `utf16`. `None` when the offset
/// falls past the end or between the two halves of a surrogate pair.
pub fn byte_offset_of_utf16(text: &str, utf16: u32) -> Option<usize> {
    let target = utf16 as usize;
    if text.is_ascii() {
        return (target <= text.len()).then_some(target);
    }
    let mut units = 0usize;
    for (byte, ch) in text.char_indices() {
        if units == target {
            return Some(byte);
        }
        if units > target {
            return None;
        }
        units += ch.len_utf16();
    }
    (units == target).then_some(text.len())
}

#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

/// Byte length of the line terminator starting at `pos`, or 0 if there is none.
/// `\r\n` is a single two-byte unit.
#[inline]
pub fn line_terminator_len(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        Some(b'\n') => 1,
        Some(b'\r') => {
            if bytes.get(pos + 1) == Some(&b'\n') {
                2
            } else {
                1
            }
        }
        Some(0xE2) if bytes.get(pos + 1) == Some(&0x80) => match bytes.get(pos + 2) {
            Some(0xA8) | Some(0xA9) => 3,
            _ => 0,
        },
        _ => 0,
    }
}

/// Offset of the next line terminator at or after `from`, or `bytes.len()`.
pub fn find_line_end(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < bytes.len() {
        match memchr3(b'\n', b'\r', 0xE2, &bytes[pos..]) {
            Some(rel) => {
                let candidate = pos + rel;
                if line_terminator_len(bytes, candidate) > 0 {
                    return candidate;
                }
                pos = candidate + 1;
            }
            None => return bytes.len(),
        }
    }
    bytes.len()
}
