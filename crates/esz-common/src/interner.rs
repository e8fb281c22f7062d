//! String interner for identifier deduplication.
//!
//! Identifier and keyword values are interned into a per-parse pool and passed
//! around as u32 indices (Atoms), so hot comparisons like "is this `eval`?"
//! become integer compares. The pool is pre-seeded from a read-only table of
//! well-known strings whose atoms have fixed indices (see [`atoms`]); the table
//! itself is shared process-wide and never mutated.

use std::ptr;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }

    /// Whether this atom is one of the pre-seeded well-known strings.
    #[inline]
    pub fn is_well_known(self) -> bool {
        (self.0 as usize) < COMMON_STRINGS.len()
    }
}

/// Well-known strings. The position in this table is the atom index, so the
/// constants in [`atoms`] must stay in the same order.
static COMMON_STRINGS: &[&str] = &[
    "",
    "arguments",
    "eval",
    "await",
    "async",
    "yield",
    "let",
    "static",
    "of",
    "get",
    "set",
    "from",
    "as",
    "constructor",
    "prototype",
    "__proto__",
    "target",
    "meta",
    "use strict",
    "true",
    "false",
    "null",
    "undefined",
    "enum",
    "export",
    "import",
    "super",
    "&&",
    "||",
    "??",
    "in",
    "implements",
    "interface",
    "package",
    "private",
    "protected",
    "public",
    "default",
];

/// Atoms with fixed indices into the well-known table.
pub mod atoms {
    use super::Atom;

    pub const EMPTY: Atom = Atom(0);
    pub const ARGUMENTS: Atom = Atom(1);
    pub const EVAL: Atom = Atom(2);
    pub const AWAIT: Atom = Atom(3);
    pub const ASYNC: Atom = Atom(4);
    pub const YIELD: Atom = Atom(5);
    pub const LET: Atom = Atom(6);
    pub const STATIC: Atom = Atom(7);
    pub const OF: Atom = Atom(8);
    pub const GET: Atom = Atom(9);
    pub const SET: Atom = Atom(10);
    pub const FROM: Atom = Atom(11);
    pub const AS: Atom = Atom(12);
    pub const CONSTRUCTOR: Atom = Atom(13);
    pub const PROTOTYPE: Atom = Atom(14);
    pub const PROTO: Atom = Atom(15);
    pub const TARGET: Atom = Atom(16);
    pub const META: Atom = Atom(17);
    pub const USE_STRICT: Atom = Atom(18);
    pub const TRUE: Atom = Atom(19);
    pub const FALSE: Atom = Atom(20);
    pub const NULL: Atom = Atom(21);
    pub const UNDEFINED: Atom = Atom(22);
    pub const ENUM: Atom = Atom(23);
    pub const EXPORT: Atom = Atom(24);
    pub const IMPORT: Atom = Atom(25);
    pub const SUPER: Atom = Atom(26);
    pub const LOGICAL_AND: Atom = Atom(27);
    pub const LOGICAL_OR: Atom = Atom(28);
    pub const NULLISH: Atom = Atom(29);
    pub const IN: Atom = Atom(30);
    pub const IMPLEMENTS: Atom = Atom(31);
    pub const INTERFACE: Atom = Atom(32);
    pub const PACKAGE: Atom = Atom(33);
    pub const PRIVATE: Atom = Atom(34);
    pub const PROTECTED: Atom = Atom(35);
    pub const PUBLIC: Atom = Atom(36);
    pub const DEFAULT: Atom = Atom(37);
}

/// The canonical `&'static str` for a well-known atom.
#[inline]
pub fn well_known_text(atom: Atom) -> Option<&'static str> {
    COMMON_STRINGS.get(atom.0 as usize).copied()
}

/// Compare two strings, taking the identity shortcut when both point at the
/// same canonical well-known string.
#[inline]
pub fn same(a: &str, b: &str) -> bool {
    ptr::eq(a, b) || a == b
}

/// String interner that deduplicates strings and returns Atom handles.
///
/// One interner belongs to one parse; nothing here is shared between threads.
pub struct Interner {
    map: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

impl Default for Interner {
    fn default() -> Self {
        Interner::new()
    }
}

impl Interner {
    /// Create an interner with every well-known string pre-interned at its
    /// fixed index.
    pub fn new() -> Self {
        let mut interner = Interner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        for s in COMMON_STRINGS {
            interner.push_new(s);
        }
        interner
    }

    fn push_new(&mut self, s: &str) -> Atom {
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Intern a string, returning its Atom handle.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        self.push_new(s)
    }

    /// Look up an already interned string without inserting it.
    #[inline]
    pub fn lookup(&self, s: &str) -> Option<Atom> {
        self.map.get(s).copied()
    }

    /// Resolve an Atom back to its string value.
    /// Returns "" if the atom did not come from this interner.
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.strings
            .get(atom.0 as usize)
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when nothing beyond the well-known table has been interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= COMMON_STRINGS.len()
    }
}
