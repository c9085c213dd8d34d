#![allow(clippy::unwrap_used, clippy::expect_used)]

use dur_diagnostic::LintCode;
use dur_ir::{walk_file, DeclKind, ExprId, FileBuilder, SourceFile};
use dur_types::{Idx, Pool};
use pretty_assertions::assert_eq;

use super::*;
use crate::resolve::resolve_file;

fn run(file: &SourceFile, config: LintConfig) -> Vec<(LintCode, String)> {
    let pool = Pool::new();
    let resolutions = resolve_file(file);
    let mut linter = FileLinter::new(Classifier::new(file, &pool, &resolutions), config);
    walk_file(&mut linter, file).unwrap();
    linter
        .finish()
        .unwrap()
        .into_iter()
        .map(|d| {
            let span = d.primary_span().unwrap();
            (d.code, file.snippet(span).to_string())
        })
        .collect()
}

fn assign_in_func(b: &mut FileBuilder, value: ExprId) {
    let target = b.ident("target", Idx::DURATION);
    let stmt = b.assign(&[target], &[value]);
    b.func("f", &[], &[stmt]);
}

#[test]
fn untyped_constant_use_is_flagged_at_the_use() {
    // const c = 5; target = c
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::UNTYPED_INT);
    let decl = b.value_spec(DeclKind::Const, &["c"], None, &[five]);
    b.top_level(decl);
    let c = b.ident("c", Idx::DURATION);
    assign_in_func(&mut b, c);
    let file = b.finish();

    assert_eq!(
        run(&file, LintConfig::default()),
        vec![(LintCode::L0001, "c".to_string())]
    );
}

#[test]
fn literal_times_unit_is_clean() {
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let value = b.mul(five, second, Idx::DURATION);
    assign_in_func(&mut b, value);
    let file = b.finish();

    assert_eq!(run(&file, LintConfig::default()), vec![]);
    assert_eq!(run(&file, LintConfig::strict()), vec![]);
}

#[test]
fn bare_literal_is_flagged() {
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    assign_in_func(&mut b, five);
    let file = b.finish();

    assert_eq!(
        run(&file, LintConfig::default()),
        vec![(LintCode::L0001, "5".to_string())]
    );
}

#[test]
fn strict_conversion_is_flagged_at_its_argument() {
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    let conv = b.duration_conversion(five);
    assign_in_func(&mut b, conv);
    let file = b.finish();

    assert_eq!(run(&file, LintConfig::default()), vec![]);
    assert_eq!(
        run(&file, LintConfig::strict()),
        vec![(LintCode::L0003, "5".to_string())]
    );
}

#[test]
fn multiplied_conversion_is_redeemed() {
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    let conv = b.duration_conversion(five);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let value = b.mul(conv, second, Idx::DURATION);
    assign_in_func(&mut b, value);
    let file = b.finish();

    assert_eq!(run(&file, LintConfig::strict()), vec![]);
}

#[test]
fn parenthesized_conversion_is_not_redeemed() {
    // target = (time.Duration(5)) * time.Second
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    let conv = b.duration_conversion(five);
    let conv = b.paren(conv);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let value = b.mul(conv, second, Idx::DURATION);
    assign_in_func(&mut b, value);
    let file = b.finish();

    assert_eq!(run(&file, LintConfig::default()), vec![]);
    assert_eq!(
        run(&file, LintConfig::strict()),
        vec![(LintCode::L0003, "5".to_string())]
    );
}

#[test]
fn added_conversion_is_not_redeemed() {
    // target = (time.Duration(5) + time.Second) * time.Second
    let mut b = FileBuilder::new("p/test.go");
    let five = b.int(5, Idx::DURATION);
    let conv = b.duration_conversion(five);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let sum = b.add(conv, second, Idx::DURATION);
    let sum = b.paren(sum);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let value = b.mul(sum, second, Idx::DURATION);
    assign_in_func(&mut b, value);
    let file = b.finish();

    assert_eq!(
        run(&file, LintConfig::strict()),
        vec![(LintCode::L0003, "5".to_string())]
    );
}

#[test]
fn conversion_inside_call_argument_reports_once() {
    // acceptsDuration(time.Duration(10))
    let mut b = FileBuilder::new("p/test.go");
    let ten = b.int(10, Idx::DURATION);
    let conv = b.duration_conversion(ten);
    let callee = b.ident("acceptsDuration", Idx::NONE);
    let call = b.call(callee, &[conv], Idx::NONE);
    let stmt = b.expr_stmt(call);
    b.func("f", &[], &[stmt]);
    let file = b.finish();

    assert_eq!(
        run(&file, LintConfig::strict()),
        vec![(LintCode::L0003, "10".to_string())]
    );
}

#[test]
fn non_strict_mode_does_not_descend_into_conversions() {
    // time.Duration(f(10)) where f takes a duration
    let mut b = FileBuilder::new("p/test.go");
    let callee = b.ident("acceptsDuration", Idx::NONE);
    let ten = b.int(10, Idx::DURATION);
    let inner = b.call(callee, &[ten], Idx::INT);
    let conv = b.duration_conversion(inner);
    assign_in_func(&mut b, conv);
    let file = b.finish();

    assert_eq!(run(&file, LintConfig::default()), vec![]);
    assert_eq!(
        run(&file, LintConfig::strict()),
        vec![
            (LintCode::L0003, "acceptsDuration 10".to_string()),
            (LintCode::L0002, "10".to_string()),
        ]
    );
}

#[test]
fn multi_target_assignment_checks_every_pair() {
    let mut b = FileBuilder::new("p/test.go");
    let x = b.ident("x", Idx::DURATION);
    let y = b.ident("y", Idx::DURATION);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let ten = b.int(10, Idx::DURATION);
    let pair = b.assign(&[x, y], &[second, ten]);

    let x = b.ident("x", Idx::DURATION);
    let y = b.ident("y", Idx::DURATION);
    let callee = b.ident("twoDurations", Idx::NONE);
    let call = b.call(callee, &[], Idx::NONE);
    let spread = b.assign(&[x, y], &[call]);
    b.func("f", &[], &[pair, spread]);
    let file = b.finish();

    assert_eq!(
        run(&file, LintConfig::default()),
        vec![(LintCode::L0001, "10".to_string())]
    );
}

#[test]
fn typed_declarations_check_each_initializer() {
    // var c, d time.Duration = time.Second, 10
    let mut b = FileBuilder::new("p/test.go");
    let second = b.qualified("time", "Second", Idx::DURATION);
    let ten = b.int(10, Idx::DURATION);
    let decl = b.value_spec(
        DeclKind::Var,
        &["c", "d"],
        Some(Idx::DURATION),
        &[second, ten],
    );
    b.top_level(decl);
    let file = b.finish();

    assert_eq!(
        run(&file, LintConfig::default()),
        vec![(LintCode::L0001, "10".to_string())]
    );
}

#[test]
fn findings_come_back_in_source_order() {
    // time.Sleep(10 + time.Duration(3)) reports the argument before the
    // deferred conversion is settled.
    let mut b = FileBuilder::new("p/test.go");
    let callee = b.qualified("time", "Sleep", Idx::NONE);
    let ten = b.int(10, Idx::DURATION);
    let three = b.int(3, Idx::DURATION);
    let conv = b.duration_conversion(three);
    let sum = b.add(ten, conv, Idx::DURATION);
    let call = b.call(callee, &[sum], Idx::NONE);
    let stmt = b.expr_stmt(call);
    b.func("f", &[], &[stmt]);
    let file = b.finish();

    let found = run(&file, LintConfig::strict());
    assert_eq!(
        found.iter().map(|(code, _)| *code).collect::<Vec<_>>(),
        vec![LintCode::L0002, LintCode::L0003]
    );
}

#[test]
fn multi_valued_declaration_is_not_an_error() {
    // var a, n = pair(); target = a; acceptsDuration(n)
    let mut b = FileBuilder::new("p/test.go");
    let callee = b.ident("pair", Idx::NONE);
    let pair = b.call(callee, &[], Idx::NONE);
    let decl = b.value_spec(DeclKind::Var, &["a", "n"], None, &[pair]);
    b.top_level(decl);
    let target = b.ident("target", Idx::DURATION);
    let a = b.ident("a", Idx::DURATION);
    let assign = b.assign(&[target], &[a]);
    let callee = b.ident("acceptsDuration", Idx::NONE);
    let n = b.ident("n", Idx::DURATION);
    let call = b.call(callee, &[n], Idx::NONE);
    let stmt = b.expr_stmt(call);
    b.func("f", &[], &[assign, stmt]);
    let file = b.finish();

    assert_eq!(run(&file, LintConfig::default()), vec![]);
    assert_eq!(run(&file, LintConfig::strict()), vec![]);
}
