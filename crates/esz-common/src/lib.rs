//! Common types and utilities for the esz ECMAScript front end.
//!
//! This crate provides foundational types used across all esz crates:
//! - Source positions and spans (`Position`, `Span`, `Spanned`)
//! - The immutable source buffer (`SourceText`)
//! - String interning (`Atom`, `Interner`) with well-known atoms
//! - Comment trivia (`Comment`, `CommentKind`)
//! - Diagnostic codes and message templates
//! - Parser limits and thresholds

// Span - Source location tracking (UTF-16 offsets plus line/column)
pub mod span;
pub use span::{Position, Span, Spanned};

// Source buffer and line terminator rules
pub mod source;
pub use source::{SourceText, Utf16Offsets};

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner, atoms};

// Comment trivia
pub mod comments;
pub use comments::{Comment, CommentKind};

// Diagnostic codes and messages
pub mod diagnostics;
pub use diagnostics::{diagnostic_codes, diagnostic_messages, format_message};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod span_tests;

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod interner_tests;
