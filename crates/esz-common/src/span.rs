//! Source positions and spans.
//!
//! Offsets count UTF-16 code units from the start of the source, so a
//! character outside the Basic Multilingual Plane occupies two. Lines are
//! 1-based, columns are 0-based UTF-16 code units from the start of the line.
//! The scanner keeps byte indices internally and converts them through
//! [`Utf16Offsets`](crate::source::Utf16Offsets) when it hands out positions.

use serde::Serialize;

use crate::source::byte_offset_of_utf16;

/// A single point in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// UTF-16 code units from the start of the buffer.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column in UTF-16 code units (`offset - line_start`).
    pub column: u32,
}

impl Position {
    /// The position of the first character of a buffer.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 0,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

/// A `(start, end)` pair bracketing a token or syntactic construct.
///
/// `start.offset <= end.offset` always holds for spans built by the parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// An empty span located at `pos`.
    #[inline]
    pub const fn at(pos: Position) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Length in UTF-16 code units.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end.offset.saturating_sub(self.start.offset)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end.offset <= self.start.offset
    }

    /// Whether `other` lies entirely inside this span (bounds inclusive).
    #[inline]
    pub fn contains(&self, other: &Span) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }

    /// The smallest span covering both `self` and `other`.
    pub fn cover(&self, other: &Span) -> Span {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Span { start, end }
    }

    /// Slice the covered text out of `source`. Returns "" for out-of-bounds spans.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        let start = byte_offset_of_utf16(source, self.start.offset);
        let end = byte_offset_of_utf16(source, self.end.offset);
        match (start, end) {
            (Some(start), Some(end)) => source.get(start..end).unwrap_or(""),
            _ => "",
        }
    }
}

/// Implemented by every AST node and token carrying a span.
pub trait Spanned {
    fn span(&self) -> Span;

    #[inline]
    fn start(&self) -> Position {
        self.span().start
    }

    #[inline]
    fn end(&self) -> Position {
        self.span().end
    }
}

impl Spanned for Span {
    #[inline]
    fn span(&self) -> Span {
        *self
    }
}

impl<T: Spanned> Spanned for Box<T> {
    #[inline]
    fn span(&self) -> Span {
        (**self).span()
    }
}
