//! Unit classification of typed expressions.
//!
//! The [`Classifier`] answers three questions about an expression without
//! keeping any state of its own:
//!
//! - is its type the duration type, or an integer type;
//! - does its value trace back to a unit-less number
//!   ([`Classifier::uses_unitless_value`]);
//! - is it a `time.Duration(x)` conversion.
//!
//! Calls, selectors and composite literals are opaque: their values are
//! trusted as already unit-correct.

use dur_ir::{BinaryOp, DeclName, Expr, ExprId, ExprKind, Name, SourceFile};
use dur_types::{Idx, Pool, DURATION_CONVERSION};

use crate::error::LintError;
use crate::resolve::{Binding, Resolutions};

const RED_ZONE: usize = 100 * 1024;
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Read-only predicates over one file.
#[derive(Copy, Clone)]
pub struct Classifier<'a> {
    file: &'a SourceFile,
    pool: &'a Pool,
    resolutions: &'a Resolutions,
}

impl<'a> Classifier<'a> {
    pub fn new(file: &'a SourceFile, pool: &'a Pool, resolutions: &'a Resolutions) -> Self {
        Classifier {
            file,
            pool,
            resolutions,
        }
    }

    pub fn file(&self) -> &'a SourceFile {
        self.file
    }

    pub fn pool(&self) -> &'a Pool {
        self.pool
    }

    #[inline]
    pub fn is_duration_type(&self, ty: Idx) -> bool {
        self.pool.is_duration(ty)
    }

    /// Built-in integer types only; named integer types do not count.
    #[inline]
    pub fn is_integer_type(&self, ty: Idx) -> bool {
        self.pool.is_integer(ty)
    }

    /// Whether the value of `id` is built from a number with no unit.
    ///
    /// Zero literals are unit-independent. A sum is unit-less when either
    /// side is; a product only when both are. Identifiers follow their
    /// declaration: explicitly typed declarations are trusted, untyped ones
    /// are unit-less unless their initializer already is a duration.
    pub fn uses_unitless_value(&self, id: ExprId) -> Result<bool, LintError> {
        stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || {
            let expr = self.file.expr(id);
            match expr.kind {
                ExprKind::Int(_) | ExprKind::Float(_) => Ok(!expr.kind.is_zero_literal()),
                ExprKind::Str(_) => Ok(true),
                ExprKind::Binary {
                    op: BinaryOp::Add | BinaryOp::Sub,
                    left,
                    right,
                } => Ok(self.uses_unitless_value(left)? || self.uses_unitless_value(right)?),
                ExprKind::Binary {
                    op: BinaryOp::Mul,
                    left,
                    right,
                } => Ok(self.uses_unitless_value(left)? && self.uses_unitless_value(right)?),
                ExprKind::Paren(inner) => self.uses_unitless_value(inner),
                ExprKind::Ident(name) => self.declared_unitless(id, name),
                _ => Ok(false),
            }
        })
    }

    fn declared_unitless(&self, id: ExprId, name: Name) -> Result<bool, LintError> {
        let Some(Binding::Value(decl)) = self.resolutions.get(id) else {
            return Ok(false);
        };
        let spec = self.file.arena.get_spec(decl);
        if spec.ty.is_some() {
            return Ok(false);
        }

        let values = self.file.arena.get_expr_list(spec.values);
        // `var a, b = pair()`: one multi-valued call initializes every name.
        if spec.names.len() > 1 && values.len() == 1 {
            return Ok(false);
        }

        let Some(position) = spec.position_of(name) else {
            return Err(LintError::NameNotInDeclaration {
                name: self.file.name(name).to_string(),
                span: self.file.expr(id).span,
            });
        };
        let Some(&value) = values.get(position) else {
            let DeclName { span, .. } = spec.names[position];
            return Err(LintError::MissingInitializer {
                name: self.file.name(name).to_string(),
                span,
            });
        };

        Ok(!self.is_duration_type(self.file.expr(value).ty))
    }

    /// The argument of a `Duration(x)` conversion call, if `expr` is one.
    ///
    /// Matches on the callee's trailing name only, so `time.Duration(x)`,
    /// an aliased `t.Duration(x)` and a dot-imported `Duration(x)` are all
    /// recognized.
    pub fn conversion_argument(&self, expr: &Expr) -> Option<ExprId> {
        let ExprKind::Call { func, args } = expr.kind else {
            return None;
        };
        let callee = match self.file.expr(func).kind {
            ExprKind::Selector { field, .. } => field,
            ExprKind::Ident(name) => name,
            _ => return None,
        };
        if self.file.name(callee) != DURATION_CONVERSION {
            return None;
        }
        match self.file.arena.get_expr_list(args) {
            &[arg] => Some(arg),
            _ => None,
        }
    }

    pub fn is_unit_conversion_call(&self, expr: &Expr) -> bool {
        self.conversion_argument(expr).is_some()
    }
}

#[cfg(test)]
mod tests;
