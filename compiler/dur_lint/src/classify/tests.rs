#![allow(clippy::unwrap_used, clippy::expect_used)]

use dur_ir::{DeclKind, FileBuilder, SourceFile, UnaryOp};
use dur_types::{Idx, Pool};
use pretty_assertions::assert_eq;

use super::*;
use crate::resolve::resolve_file;

fn unitless(file: &SourceFile, id: ExprId) -> Result<bool, LintError> {
    let pool = Pool::new();
    let resolutions = resolve_file(file);
    Classifier::new(file, &pool, &resolutions).uses_unitless_value(id)
}

/// Wrap `value` in `_ = value` inside a function so it gets resolved.
fn in_func(b: &mut FileBuilder, value: ExprId) {
    let blank = b.ident("_", Idx::NONE);
    let stmt = b.assign(&[blank], &[value]);
    b.func("f", &[], &[stmt]);
}

#[test]
fn literals() {
    let mut b = FileBuilder::new("p/test.go");
    let ten = b.int(10, Idx::DURATION);
    let zero = b.int(0, Idx::DURATION);
    let half = b.float(0.5, Idx::DURATION);
    let float_zero = b.float(0.0, Idx::DURATION);
    let file = b.finish();

    assert_eq!(unitless(&file, ten), Ok(true));
    assert_eq!(unitless(&file, zero), Ok(false));
    assert_eq!(unitless(&file, half), Ok(true));
    assert_eq!(unitless(&file, float_zero), Ok(false));
}

#[test]
fn sums_need_both_sides_proper() {
    let mut b = FileBuilder::new("p/test.go");
    let ten = b.int(10, Idx::DURATION);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let mixed = b.add(ten, second, Idx::DURATION);
    let minute = b.qualified("time", "Minute", Idx::DURATION);
    let hour = b.qualified("time", "Hour", Idx::DURATION);
    let proper = b.sub(minute, hour, Idx::DURATION);
    let file = b.finish();

    assert_eq!(unitless(&file, mixed), Ok(true));
    assert_eq!(unitless(&file, proper), Ok(false));
}

#[test]
fn products_need_one_side_proper() {
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let scaled = b.mul(five, second, Idx::DURATION);
    let two = b.int(2, Idx::DURATION);
    let three = b.int(3, Idx::DURATION);
    let bare = b.mul(two, three, Idx::DURATION);
    let paren = b.paren(bare);
    let file = b.finish();

    assert_eq!(unitless(&file, scaled), Ok(false));
    assert_eq!(unitless(&file, bare), Ok(true));
    assert_eq!(unitless(&file, paren), Ok(true));
}

#[test]
fn calls_are_opaque() {
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::INT);
    let callee = b.ident("returnsDuration", Idx::NONE);
    let call = b.call(callee, &[five], Idx::DURATION);
    let file = b.finish();

    assert_eq!(unitless(&file, call), Ok(false));
}

#[test]
fn identifiers_follow_their_declaration() {
    let mut b = FileBuilder::new("p/test.go");
    let ten = b.int(10, Idx::UNTYPED_INT);
    let two = b.int(2, Idx::DURATION);
    let conv = b.duration_conversion(two);
    let grouped = b.value_spec(DeclKind::Const, &["ignored", "typed"], None, &[ten, conv]);
    b.top_level(grouped);
    let thirty = b.int(30, Idx::DURATION);
    let explicit = b.value_spec(DeclKind::Const, &["explicit"], Some(Idx::DURATION), &[thirty]);
    b.top_level(explicit);

    let untyped_use = b.ident("ignored", Idx::DURATION);
    in_func(&mut b, untyped_use);
    let typed_use = b.ident("typed", Idx::DURATION);
    in_func(&mut b, typed_use);
    let explicit_use = b.ident("explicit", Idx::DURATION);
    in_func(&mut b, explicit_use);
    let unknown = b.ident("elsewhere", Idx::DURATION);
    in_func(&mut b, unknown);
    let file = b.finish();

    assert_eq!(unitless(&file, untyped_use), Ok(true));
    assert_eq!(unitless(&file, typed_use), Ok(false));
    assert_eq!(unitless(&file, explicit_use), Ok(false));
    assert_eq!(unitless(&file, unknown), Ok(false));
}

#[test]
fn missing_initializer_is_an_internal_error() {
    let mut b = FileBuilder::new("p/test.go");
    let one = b.int(1, Idx::UNTYPED_INT);
    let two = b.int(2, Idx::UNTYPED_INT);
    let decl = b.value_spec(DeclKind::Const, &["a", "b", "c"], None, &[one, two]);
    b.top_level(decl);
    let use_c = b.ident("c", Idx::DURATION);
    in_func(&mut b, use_c);
    let file = b.finish();

    let err = unitless(&file, use_c).unwrap_err();
    assert!(matches!(err, LintError::MissingInitializer { ref name, .. } if name == "c"));
}

#[test]
fn multi_valued_initializer_is_opaque() {
    // var a, n = pair()
    let mut b = FileBuilder::new("p/test.go");
    let callee = b.ident("pair", Idx::NONE);
    let pair = b.call(callee, &[], Idx::NONE);
    let decl = b.value_spec(DeclKind::Var, &["a", "n"], None, &[pair]);
    b.top_level(decl);
    let use_a = b.ident("a", Idx::DURATION);
    in_func(&mut b, use_a);
    let use_n = b.ident("n", Idx::DURATION);
    in_func(&mut b, use_n);
    let file = b.finish();

    assert_eq!(unitless(&file, use_a), Ok(false));
    assert_eq!(unitless(&file, use_n), Ok(false));
}

#[test]
fn negation_is_opaque() {
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    let negated = b.unary(UnaryOp::Neg, five, Idx::DURATION);
    let file = b.finish();

    assert_eq!(unitless(&file, five), Ok(true));
    assert_eq!(unitless(&file, negated), Ok(false));
}

#[test]
fn conversion_calls_match_on_trailing_name() {
    let pool = Pool::new();
    let mut b = FileBuilder::new("p/test.go");
    let first = b.int(10, Idx::DURATION);
    let qualified = b.duration_conversion(first);
    let ten = b.int(10, Idx::DURATION);
    let aliased_callee = b.qualified("timeAliased", "Duration", Idx::NONE);
    let aliased = b.call(aliased_callee, &[ten], Idx::DURATION);
    let ten = b.int(10, Idx::DURATION);
    let bare_callee = b.ident("Duration", Idx::NONE);
    let bare = b.call(bare_callee, &[ten], Idx::DURATION);
    let other_callee = b.qualified("time", "Sleep", Idx::NONE);
    let ten = b.int(10, Idx::DURATION);
    let other = b.call(other_callee, &[ten], Idx::NONE);
    let two_args_callee = b.qualified("time", "Duration", Idx::NONE);
    let (x, y) = (b.int(1, Idx::INT), b.int(2, Idx::INT));
    let two_args = b.call(two_args_callee, &[x, y], Idx::DURATION);
    let file = b.finish();

    let resolutions = resolve_file(&file);
    let classifier = Classifier::new(&file, &pool, &resolutions);
    assert!(classifier.is_unit_conversion_call(file.expr(qualified)));
    assert!(classifier.is_unit_conversion_call(file.expr(aliased)));
    assert!(classifier.is_unit_conversion_call(file.expr(bare)));
    assert!(!classifier.is_unit_conversion_call(file.expr(other)));
    assert!(!classifier.is_unit_conversion_call(file.expr(two_args)));
    assert_eq!(classifier.conversion_argument(file.expr(qualified)), Some(first));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let mut b = FileBuilder::new("p/test.go");
    let mut expr = b.int(1, Idx::DURATION);
    for _ in 0..50_000 {
        expr = b.paren(expr);
    }
    let file = b.finish();

    assert_eq!(unitless(&file, expr), Ok(true));
}
