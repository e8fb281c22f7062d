//! Scope shape tracking for early errors.
//!
//! Nothing here resolves references; the trackers only record which names a
//! scope declares so the parser can reject redeclarations, bad labels,
//! undeclared private names and bad module exports while it parses.

use esz_common::{Atom, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

// =============================================================================
// Lexical scopes
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    /// Script or module top level.
    Top,
    /// Function or arrow: parameters and body share it.
    Function,
    Block,
    /// Catch clause: parameter and body share it.
    Catch,
    StaticBlock,
}

impl ScopeKind {
    /// `var` declarations stop walking outward here.
    #[inline]
    fn is_var_scope(self) -> bool {
        matches!(
            self,
            ScopeKind::Top | ScopeKind::Function | ScopeKind::StaticBlock
        )
    }
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    var: FxHashSet<Atom>,
    lexical: FxHashSet<Atom>,
    functions: FxHashSet<Atom>,
    /// Single-identifier catch parameter; `var` of the same name is allowed.
    simple_catch_param: Option<Atom>,
}

impl Scope {
    fn new(kind: ScopeKind) -> Self {
        Scope {
            kind,
            var: FxHashSet::default(),
            lexical: FxHashSet::default(),
            functions: FxHashSet::default(),
            simple_catch_param: None,
        }
    }
}

#[derive(Debug)]
pub struct ScopeTracker {
    scopes: SmallVec<[Scope; 8]>,
    module: bool,
}

impl ScopeTracker {
    pub fn new(module: bool) -> Self {
        ScopeTracker {
            scopes: SmallVec::new(),
            module,
        }
    }

    pub fn enter(&mut self, kind: ScopeKind) {
        self.scopes.push(Scope::new(kind));
    }

    pub fn exit(&mut self) {
        self.scopes.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Drop scopes opened after `depth` (error recovery).
    pub fn truncate(&mut self, depth: usize) {
        self.scopes.truncate(depth);
    }

    fn treat_functions_as_var_in(&self, scope: &Scope) -> bool {
        scope.kind == ScopeKind::Function || (!self.module && scope.kind == ScopeKind::Top)
    }

    /// Whether function declarations in the current scope behave like `var`.
    pub fn treat_functions_as_var(&self) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| self.treat_functions_as_var_in(scope))
    }

    /// Declare a `let` / `const` / `class` / import binding.
    /// Returns false when the name is already declared in this scope.
    pub fn declare_lexical(&mut self, name: Atom) -> bool {
        let Some(scope) = self.scopes.last_mut() else {
            return true;
        };
        let redeclared = scope.lexical.contains(&name)
            || scope.functions.contains(&name)
            || scope.var.contains(&name);
        scope.lexical.insert(name);
        !redeclared
    }

    /// Declare the identifier of `catch (e)`.
    pub fn declare_simple_catch_param(&mut self, name: Atom) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.lexical.insert(name);
            scope.simple_catch_param = Some(name);
        }
    }

    /// Declare a sloppy-mode function declaration.
    pub fn declare_function(&mut self, name: Atom) -> bool {
        let as_var = self.treat_functions_as_var();
        let Some(scope) = self.scopes.last_mut() else {
            return true;
        };
        let redeclared = if as_var {
            scope.lexical.contains(&name)
        } else {
            scope.lexical.contains(&name) || scope.var.contains(&name)
        };
        scope.functions.insert(name);
        !redeclared
    }

    /// Declare a `var` binding (or parameter), walking out to the nearest
    /// var scope.
    pub fn declare_var(&mut self, name: Atom) -> bool {
        let module = self.module;
        for scope in self.scopes.iter_mut().rev() {
            let catch_exempt = scope.simple_catch_param == Some(name);
            let functions_as_var =
                scope.kind == ScopeKind::Function || (!module && scope.kind == ScopeKind::Top);
            if (scope.lexical.contains(&name) && !catch_exempt)
                || (!functions_as_var && scope.functions.contains(&name))
            {
                return false;
            }
            scope.var.insert(name);
            if scope.kind.is_var_scope() {
                break;
            }
        }
        true
    }

    /// Whether the top-level scope declares `name` in any form.
    pub fn is_declared_at_top(&self, name: Atom) -> bool {
        self.scopes.first().is_some_and(|scope| {
            scope.lexical.contains(&name)
                || scope.var.contains(&name)
                || scope.functions.contains(&name)
        })
    }
}

// =============================================================================
// Labels
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    Statement,
    Iteration,
}

#[derive(Clone, Copy, Debug)]
enum LabelEntry {
    Label {
        name: Atom,
        kind: LabelKind,
        /// Offset of the labelled statement.
        statement_start: u32,
    },
    /// Labels never cross a function boundary.
    FunctionBoundary,
}

#[derive(Debug, Default)]
pub struct LabelTracker {
    entries: SmallVec<[LabelEntry; 8]>,
}

impl LabelTracker {
    fn current_function(&self) -> impl Iterator<Item = &LabelEntry> {
        self.entries
            .iter()
            .rev()
            .take_while(|entry| !matches!(entry, LabelEntry::FunctionBoundary))
    }

    pub fn find(&self, name: Atom) -> Option<LabelKind> {
        self.current_function().find_map(|entry| match *entry {
            LabelEntry::Label { name: n, kind, .. } if n == name => Some(kind),
            _ => None,
        })
    }

    /// Push `name` labelling the statement at `body_start`. Labels chained in
    /// front of the same statement (`a: b: while ...`) take on `kind` too.
    /// Returns false for a duplicate label in the current function.
    pub fn push_label(
        &mut self,
        name: Atom,
        kind: LabelKind,
        label_start: u32,
        body_start: u32,
    ) -> bool {
        if self.find(name).is_some() {
            return false;
        }
        for entry in self.entries.iter_mut().rev() {
            match entry {
                LabelEntry::Label {
                    kind: chained_kind,
                    statement_start,
                    ..
                } if *statement_start == label_start => {
                    *statement_start = body_start;
                    *chained_kind = kind;
                }
                _ => break,
            }
        }
        self.entries.push(LabelEntry::Label {
            name,
            kind,
            statement_start: body_start,
        });
        true
    }

    pub fn pop_label(&mut self) {
        if matches!(self.entries.last(), Some(LabelEntry::Label { .. })) {
            self.entries.pop();
        }
    }

    pub fn enter_function(&mut self) {
        self.entries.push(LabelEntry::FunctionBoundary);
    }

    pub fn exit_function(&mut self) {
        while let Some(entry) = self.entries.pop() {
            if matches!(entry, LabelEntry::FunctionBoundary) {
                break;
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}

// =============================================================================
// Private names
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivateNameKind {
    Field,
    Method,
    Getter,
    Setter,
    /// A getter and a setter sharing the name.
    Accessor,
}

#[derive(Debug, Default)]
struct ClassFrame {
    declared: FxHashMap<Atom, (PrivateNameKind, bool)>,
    used: Vec<(Atom, Position)>,
}

#[derive(Debug, Default)]
pub struct PrivateNameTracker {
    frames: SmallVec<[ClassFrame; 4]>,
}

impl PrivateNameTracker {
    pub fn enter_class(&mut self) {
        self.frames.push(ClassFrame::default());
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn truncate(&mut self, depth: usize) {
        self.frames.truncate(depth);
    }

    /// Declare `#name` in the innermost class. Returns false on a duplicate
    /// (a getter/setter pair with the same placement is not one).
    pub fn declare(&mut self, name: Atom, kind: PrivateNameKind, is_static: bool) -> bool {
        let Some(frame) = self.frames.last_mut() else {
            return true;
        };
        match frame.declared.get(&name).copied() {
            None => {
                frame.declared.insert(name, (kind, is_static));
                true
            }
            Some((existing, existing_static)) => {
                let pairs = existing_static == is_static
                    && matches!(
                        (existing, kind),
                        (PrivateNameKind::Getter, PrivateNameKind::Setter)
                            | (PrivateNameKind::Setter, PrivateNameKind::Getter)
                    );
                if pairs {
                    frame
                        .declared
                        .insert(name, (PrivateNameKind::Accessor, is_static));
                }
                pairs
            }
        }
    }

    /// Record a use of `#name`. Returns false when there is no enclosing
    /// class at all.
    pub fn use_name(&mut self, name: Atom, pos: Position) -> bool {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.used.push((name, pos));
                true
            }
            None => false,
        }
    }

    /// Close the innermost class. Uses it does not declare move to the
    /// enclosing class; at the outermost class they are returned as errors.
    pub fn exit_class(&mut self) -> Vec<(Atom, Position)> {
        let Some(frame) = self.frames.pop() else {
            return Vec::new();
        };
        let unresolved: Vec<(Atom, Position)> = frame
            .used
            .into_iter()
            .filter(|(name, _)| !frame.declared.contains_key(name))
            .collect();
        match self.frames.last_mut() {
            Some(parent) => {
                parent.used.extend(unresolved);
                Vec::new()
            }
            None => unresolved,
        }
    }
}

// =============================================================================
// Module exports
// =============================================================================

#[derive(Debug, Default)]
pub struct ExportTracker {
    exported: FxHashSet<String>,
    pending_locals: Vec<(Atom, String, Position)>,
}

impl ExportTracker {
    /// Record an exported name. Returns false if it was already exported.
    pub fn add_exported(&mut self, name: &str) -> bool {
        self.exported.insert(name.to_string())
    }

    /// `export { local }` without `from`: `local` must be declared at top level
    /// by the end of the module.
    pub fn add_pending_local(&mut self, atom: Atom, name: String, pos: Position) {
        self.pending_locals.push((atom, name, pos));
    }

    pub fn take_pending_locals(&mut self) -> Vec<(Atom, String, Position)> {
        std::mem::take(&mut self.pending_locals)
    }
}
