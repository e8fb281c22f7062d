//! Tests for the early-error scope trackers.

use esz_common::{Atom, Position};

use crate::parser::scope::{
    ExportTracker, LabelKind, LabelTracker, PrivateNameKind, PrivateNameTracker, ScopeKind,
    ScopeTracker,
};

const A: Atom = Atom(1000);
const B: Atom = Atom(1001);

#[test]
fn test_lexical_redeclaration_in_same_scope() {
    let mut scope = ScopeTracker::new(false);
    scope.enter(ScopeKind::Top);
    assert!(scope.declare_lexical(A));
    assert!(!scope.declare_lexical(A));
    assert!(scope.declare_lexical(B));
}

#[test]
fn test_var_conflicts_with_enclosing_lexical() {
    let mut scope = ScopeTracker::new(false);
    scope.enter(ScopeKind::Top);
    assert!(scope.declare_lexical(A));
    scope.enter(ScopeKind::Block);
    // `let a; { var a; }`: the var hoists through the block to the top.
    assert!(!scope.declare_var(A));
}

#[test]
fn test_var_stops_at_function_scope() {
    let mut scope = ScopeTracker::new(false);
    scope.enter(ScopeKind::Top);
    assert!(scope.declare_lexical(A));
    scope.enter(ScopeKind::Function);
    assert!(scope.declare_var(A));
    assert!(scope.declare_var(A));
}

#[test]
fn test_lexical_after_var_is_redeclaration() {
    let mut scope = ScopeTracker::new(false);
    scope.enter(ScopeKind::Top);
    scope.enter(ScopeKind::Block);
    assert!(scope.declare_var(A));
    // The var passed through the block, so the block already knows it.
    assert!(!scope.declare_lexical(A));
}

#[test]
fn test_simple_catch_parameter_allows_var() {
    let mut scope = ScopeTracker::new(false);
    scope.enter(ScopeKind::Top);
    scope.enter(ScopeKind::Catch);
    scope.declare_simple_catch_param(A);
    assert!(scope.declare_var(A));
    assert!(!scope.declare_lexical(A));
}

#[test]
fn test_sloppy_functions_behave_like_var_at_top() {
    let mut script = ScopeTracker::new(false);
    script.enter(ScopeKind::Top);
    assert!(script.declare_function(A));
    assert!(script.declare_function(A));
    assert!(script.declare_var(A));

    let mut module = ScopeTracker::new(true);
    module.enter(ScopeKind::Top);
    assert!(module.declare_function(A));
    assert!(!module.declare_var(A));
}

#[test]
fn test_block_functions_are_lexical() {
    let mut scope = ScopeTracker::new(false);
    scope.enter(ScopeKind::Top);
    scope.enter(ScopeKind::Block);
    assert!(scope.declare_lexical(A));
    assert!(!scope.declare_function(A));
}

#[test]
fn test_is_declared_at_top() {
    let mut scope = ScopeTracker::new(true);
    scope.enter(ScopeKind::Top);
    scope.declare_var(A);
    scope.enter(ScopeKind::Block);
    scope.declare_lexical(B);
    assert!(scope.is_declared_at_top(A));
    assert!(!scope.is_declared_at_top(B));
    scope.truncate(1);
    assert_eq!(scope.depth(), 1);
}

#[test]
fn test_labels_do_not_cross_functions() {
    let mut labels = LabelTracker::default();
    assert!(labels.push_label(A, LabelKind::Iteration, 0, 3));
    assert_eq!(labels.find(A), Some(LabelKind::Iteration));
    assert!(!labels.push_label(A, LabelKind::Statement, 3, 6));

    labels.enter_function();
    assert_eq!(labels.find(A), None);
    assert!(labels.push_label(A, LabelKind::Statement, 20, 23));
    labels.exit_function();

    assert_eq!(labels.find(A), Some(LabelKind::Iteration));
    labels.pop_label();
    assert!(labels.is_empty());
}

#[test]
fn test_chained_labels_share_iteration_kind() {
    let mut labels = LabelTracker::default();
    // `a: b: while (x) ...`
    assert!(labels.push_label(A, LabelKind::Statement, 0, 3));
    assert!(labels.push_label(B, LabelKind::Iteration, 3, 6));
    assert_eq!(labels.find(A), Some(LabelKind::Iteration));
    assert_eq!(labels.find(B), Some(LabelKind::Iteration));
}

#[test]
fn test_private_getter_setter_pair() {
    let mut names = PrivateNameTracker::default();
    names.enter_class();
    assert!(names.declare(A, PrivateNameKind::Getter, false));
    assert!(names.declare(A, PrivateNameKind::Setter, false));
    assert!(!names.declare(A, PrivateNameKind::Getter, false));

    assert!(names.declare(B, PrivateNameKind::Getter, true));
    assert!(!names.declare(B, PrivateNameKind::Setter, false));
    assert!(names.exit_class().is_empty());
}

#[test]
fn test_private_uses_resolve_in_outer_class() {
    let pos = Position::new(10, 1, 10);
    let mut names = PrivateNameTracker::default();
    assert!(!names.use_name(A, pos));

    names.enter_class();
    names.declare(A, PrivateNameKind::Field, false);
    names.enter_class();
    assert!(names.use_name(A, pos));
    assert!(names.use_name(B, pos));
    assert!(names.exit_class().is_empty());

    let unresolved = names.exit_class();
    assert_eq!(unresolved, vec![(B, pos)]);
}

#[test]
fn test_export_tracker_duplicates_and_pending() {
    let mut exports = ExportTracker::default();
    assert!(exports.add_exported("default"));
    assert!(exports.add_exported("a"));
    assert!(!exports.add_exported("a"));

    exports.add_pending_local(A, "a".to_string(), Position::START);
    let pending = exports.take_pending_locals();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].1, "a");
    assert!(exports.take_pending_locals().is_empty());
}
