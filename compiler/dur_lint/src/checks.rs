//! Entry-point checks for the constructs that place a value into a
//! duration slot.
//!
//! Each check returns the finding, if any, and leaves reporting to the
//! caller: assignment and argument findings are final, conversion findings
//! go through the context stack's deferral.

use dur_diagnostic::{improper_conversion, unitless_argument, unitless_assignment, Diagnostic};
use dur_ir::{ExprId, Span};
use dur_types::Idx;

use crate::classify::Classifier;
use crate::error::LintError;

/// `target = value`, or `Key: value` in a composite literal.
pub fn check_assignment(
    classifier: &Classifier<'_>,
    target: ExprId,
    value: ExprId,
) -> Result<Option<Diagnostic>, LintError> {
    let target_ty = classifier.file().expr(target).ty;
    check_typed_value(classifier, target_ty, value)
}

/// An initializer of a declaration with explicit type `target_ty`.
pub fn check_typed_value(
    classifier: &Classifier<'_>,
    target_ty: Idx,
    value: ExprId,
) -> Result<Option<Diagnostic>, LintError> {
    if !classifier.is_duration_type(target_ty) || !classifier.uses_unitless_value(value)? {
        return Ok(None);
    }
    Ok(Some(unitless_assignment(classifier.file().expr(value).span)))
}

/// An argument of a call that is not a duration conversion.
pub fn check_argument(
    classifier: &Classifier<'_>,
    arg: ExprId,
) -> Result<Option<Diagnostic>, LintError> {
    let expr = classifier.file().expr(arg);
    if !classifier.is_duration_type(expr.ty) || !classifier.uses_unitless_value(arg)? {
        return Ok(None);
    }
    Ok(Some(unitless_argument(expr.span)))
}

/// The argument `arg` of the duration conversion at `conversion`, under
/// strict conversions.
pub fn check_conversion_argument(
    classifier: &Classifier<'_>,
    conversion: Span,
    arg: ExprId,
) -> Result<Option<Diagnostic>, LintError> {
    let expr = classifier.file().expr(arg);
    let explicit_integer = classifier.is_integer_type(expr.ty);
    if !explicit_integer && !classifier.uses_unitless_value(arg)? {
        return Ok(None);
    }
    Ok(Some(improper_conversion(expr.span, conversion)))
}

#[cfg(test)]
mod tests;
