#![allow(clippy::unwrap_used, clippy::expect_used)]

use dur_diagnostic::LintCode;
use dur_ir::{FileBuilder, SourceFile, Span};
use dur_types::{Idx, Pool};
use pretty_assertions::assert_eq;

use super::*;
use crate::resolve::resolve_file;

fn with_classifier<T>(file: &SourceFile, f: impl FnOnce(&Classifier<'_>) -> T) -> T {
    let pool = Pool::new();
    let resolutions = resolve_file(file);
    f(&Classifier::new(file, &pool, &resolutions))
}

fn code(result: Result<Option<Diagnostic>, LintError>) -> Option<LintCode> {
    result.unwrap().map(|d| d.code)
}

#[test]
fn assignment_only_checks_duration_targets() {
    let mut b = FileBuilder::new("p/test.go");
    let duration_target = b.ident("a", Idx::DURATION);
    let int_target = b.ident("n", Idx::INT);
    let ten = b.int(10, Idx::DURATION);
    let file = b.finish();

    with_classifier(&file, |c| {
        assert_eq!(
            code(check_assignment(c, duration_target, ten)),
            Some(LintCode::L0001)
        );
        assert_eq!(code(check_assignment(c, int_target, ten)), None);
    });
}

#[test]
fn typed_value_reports_the_value_span() {
    let mut b = FileBuilder::new("p/test.go");
    let ten = b.int(10, Idx::DURATION);
    let file = b.finish();

    with_classifier(&file, |c| {
        let diagnostic = check_typed_value(c, Idx::DURATION, ten).unwrap().unwrap();
        assert_eq!(file.snippet(diagnostic.primary_span().unwrap()), "10");
        assert_eq!(
            diagnostic.message,
            "untyped constant in time.Duration assignment"
        );
    });
}

#[test]
fn arguments_are_checked_against_their_own_type() {
    let mut b = FileBuilder::new("p/test.go");
    let ten = b.int(10, Idx::DURATION);
    let count = b.int(10, Idx::INT);
    let second = b.qualified("time", "Second", Idx::DURATION);
    let file = b.finish();

    with_classifier(&file, |c| {
        assert_eq!(code(check_argument(c, ten)), Some(LintCode::L0002));
        assert_eq!(code(check_argument(c, count)), None);
        assert_eq!(code(check_argument(c, second)), None);
    });
}

#[test]
fn conversion_argument_flags_integers_and_unitless_values() {
    let mut b = FileBuilder::new("p/test.go");
    let literal = b.int(10, Idx::DURATION);
    let callee = b.ident("returnsInteger", Idx::NONE);
    let integer = b.call(callee, &[], Idx::UINT8);
    let callee = b.ident("returnsDuration", Idx::NONE);
    let five = b.int(5, Idx::INT);
    let duration = b.call(callee, &[five], Idx::DURATION);
    let custom = b.ident("customDurationConst", Idx::NONE);
    let file = b.finish();
    let at = Span::new(0, 1);

    with_classifier(&file, |c| {
        assert_eq!(
            code(check_conversion_argument(c, at, literal)),
            Some(LintCode::L0003)
        );
        assert_eq!(
            code(check_conversion_argument(c, at, integer)),
            Some(LintCode::L0003)
        );
        assert_eq!(code(check_conversion_argument(c, at, duration)), None);
        assert_eq!(code(check_conversion_argument(c, at, custom)), None);
    });
}

#[test]
fn conversion_finding_points_at_the_call() {
    let mut b = FileBuilder::new("p/test.go");
    let seven = b.int(7, Idx::DURATION);
    let conversion = b.duration_conversion(seven);
    let file = b.finish();
    let call = file.expr(conversion).span;

    with_classifier(&file, |c| {
        let diagnostic = check_conversion_argument(c, call, seven).unwrap().unwrap();
        assert_eq!(file.snippet(diagnostic.primary_span().unwrap()), "7");
        let secondary: Vec<_> = diagnostic
            .labels
            .iter()
            .filter(|l| !l.is_primary)
            .map(|l| l.span)
            .collect();
        assert_eq!(secondary, vec![call]);
    });
}
