//! Diagnostic queue for one file.
//!
//! The traversal reports findings in the order it resolves them, which is
//! post-order for deferred conversions and pre-order for assignments. The
//! queue restores source order on [`DiagnosticQueue::flush`] so that two
//! runs over the same file print the same list.

use dur_ir::Span;

use crate::Diagnostic;

/// Collects diagnostics and returns them sorted by position.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by primary span and return them, clearing the queue.
    ///
    /// The sort is stable: findings at the same position keep report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| sort_key(&w[0]) <= sort_key(&w[1]));

        if !already_sorted {
            self.diagnostics.sort_by_key(sort_key);
        }

        std::mem::take(&mut self.diagnostics)
    }
}

fn sort_key(diagnostic: &Diagnostic) -> (u32, u32) {
    let span = diagnostic.primary_span().unwrap_or(Span::DUMMY);
    (span.start, span.end)
}

impl Extend<Diagnostic> for DiagnosticQueue {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}
