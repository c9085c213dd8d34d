//! The traversal controller.
//!
//! [`FileLinter`] walks a file once. Entering a node pushes its context and
//! runs whichever entry-point check the node's shape calls for; leaving it
//! pops the context, which settles any deferred conversion findings.

use dur_diagnostic::{Diagnostic, DiagnosticQueue};
use dur_ir::{Descend, Expr, ExprKind, ExprRange, Node, StmtKind, ValueSpec, Visitor};

use crate::checks::{check_argument, check_assignment, check_conversion_argument, check_typed_value};
use crate::classify::Classifier;
use crate::config::LintConfig;
use crate::context::{Context, ContextStack};
use crate::error::LintError;

/// Visitor linting one file.
pub struct FileLinter<'a> {
    classifier: Classifier<'a>,
    config: LintConfig,
    stack: ContextStack,
    queue: DiagnosticQueue,
}

impl<'a> FileLinter<'a> {
    pub fn new(classifier: Classifier<'a>, config: LintConfig) -> Self {
        FileLinter {
            classifier,
            config,
            stack: ContextStack::new(),
            queue: DiagnosticQueue::new(),
        }
    }

    /// Report anything still deferred at the root and return the file's
    /// findings in source order.
    pub fn finish(mut self) -> Result<Vec<Diagnostic>, LintError> {
        self.stack.finish(&mut self.queue)?;
        Ok(self.queue.flush())
    }

    fn report(&mut self, finding: Option<Diagnostic>) {
        if let Some(diagnostic) = finding {
            tracing::trace!(code = %diagnostic.code, "reported");
            self.queue.push(diagnostic);
        }
    }

    fn check_assign_stmt(&mut self, lhs: ExprRange, rhs: ExprRange) -> Result<(), LintError> {
        let arena = &self.classifier.file().arena;
        let (targets, values) = (arena.get_expr_list(lhs), arena.get_expr_list(rhs));
        if targets.len() != values.len() {
            // `a, b = f()`: one opaque call feeds every target.
            return Ok(());
        }
        for (&target, &value) in targets.iter().zip(values) {
            let finding = check_assignment(&self.classifier, target, value)?;
            self.report(finding);
        }
        Ok(())
    }

    fn check_spec(&mut self, spec: &ValueSpec) -> Result<(), LintError> {
        let Some(ty) = spec.ty else {
            return Ok(());
        };
        for &value in self.classifier.file().arena.get_expr_list(spec.values) {
            let finding = check_typed_value(&self.classifier, ty, value)?;
            self.report(finding);
        }
        Ok(())
    }

    fn enter_call(&mut self, expr: &Expr, args: ExprRange) -> Result<Descend, LintError> {
        if let Some(arg) = self.classifier.conversion_argument(expr) {
            if !self.config.forbid_improper_conversions {
                return Ok(Descend::Skip);
            }
            if let Some(finding) = check_conversion_argument(&self.classifier, expr.span, arg)? {
                self.stack.defer_bare_conversion(finding)?;
            }
            return Ok(Descend::Children);
        }

        for &arg in self.classifier.file().arena.get_expr_list(args) {
            let finding = check_argument(&self.classifier, arg)?;
            self.report(finding);
        }
        Ok(Descend::Children)
    }
}

impl<'ast> Visitor<'ast> for FileLinter<'_> {
    type Error = LintError;

    fn enter(&mut self, node: Node<'ast>) -> Result<Descend, LintError> {
        self.stack.push(Context::for_node(node, self.classifier.pool()));

        match node {
            Node::Stmt(_, stmt) => {
                if let StmtKind::Assign { lhs, rhs, .. } = stmt.kind {
                    self.check_assign_stmt(lhs, rhs)?;
                }
            }
            Node::Spec(_, spec) => self.check_spec(spec)?,
            Node::Expr(_, expr) => match expr.kind {
                ExprKind::KeyValue { key, value } => {
                    let finding = check_assignment(&self.classifier, key, value)?;
                    self.report(finding);
                }
                ExprKind::Call { args, .. } => return self.enter_call(expr, args),
                _ => {}
            },
            Node::File(_) | Node::Func(_) => {}
        }
        Ok(Descend::Children)
    }

    fn leave(&mut self, _node: Node<'ast>) -> Result<(), LintError> {
        self.stack.pop(&mut self.queue)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
