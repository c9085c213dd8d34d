//! One syntax unit.

use crate::{Expr, ExprArena, ExprId, Item, Name, SharedInterner, Span};

/// A parsed and type-annotated source file.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: String,
    /// Source text the spans index into.
    pub text: String,
    pub arena: ExprArena,
    pub items: Vec<Item>,
    pub interner: SharedInterner,
}

impl SourceFile {
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        self.arena.get_expr(id)
    }

    /// Resolve an interned name.
    #[inline]
    pub fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Source text covered by `span`, empty if it falls outside the file.
    pub fn snippet(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or("")
    }
}
