//! Comment trivia.
//!
//! Comments are not part of the AST. When comment retention is enabled the
//! scanner records one `Comment` per comment it skips, in source order.

use serde::Serialize;

use crate::span::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
    /// `#!...` on the first line.
    Hashbang,
    /// `<!-- ...` (script goal only).
    HtmlOpen,
    /// `--> ...` at the start of a line (script goal only).
    HtmlClose,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Comment body without its delimiters.
    pub value: String,
    pub span: Span,
    /// Whether a line terminator directly follows the comment.
    pub has_trailing_new_line: bool,
}

impl Comment {
    pub fn new(kind: CommentKind, value: String, span: Span, has_trailing_new_line: bool) -> Self {
        Comment {
            kind,
            value,
            span,
            has_trailing_new_line,
        }
    }

    #[inline]
    pub fn is_multi_line(&self) -> bool {
        self.kind == CommentKind::Block
    }

    /// The comment text including delimiters.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

impl crate::span::Spanned for Comment {
    fn span(&self) -> Span {
        self.span
    }
}
