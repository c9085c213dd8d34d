//! Flat storage for one file's tree.

use crate::{DeclId, Expr, ExprId, ExprRange, Stmt, StmtId, StmtRange, ValueSpec};

fn next_index(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} arena exceeded u32::MAX entries"))
}

/// Arena owning every expression, statement and value spec of a file.
///
/// Indices handed out by one arena are only meaningful for that arena.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
    specs: Vec<ValueSpec>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len(), "expression list");
        self.expr_lists.extend(ids);
        let len = next_index(self.expr_lists.len(), "expression list") - start;
        ExprRange::new(start, len)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len(), "statement"));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn alloc_stmt_list(&mut self, ids: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = next_index(self.stmt_lists.len(), "statement list");
        self.stmt_lists.extend(ids);
        let len = next_index(self.stmt_lists.len(), "statement list") - start;
        StmtRange::new(start, len)
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.indices()]
    }

    pub fn alloc_spec(&mut self, spec: ValueSpec) -> DeclId {
        let id = DeclId::new(next_index(self.specs.len(), "value spec"));
        self.specs.push(spec);
        id
    }

    #[inline]
    pub fn get_spec(&self, id: DeclId) -> &ValueSpec {
        &self.specs[id.index()]
    }

    /// Shift every stored span past `by` bytes of text inserted at `at`.
    pub(crate) fn shift_spans(&mut self, at: u32, by: u32) {
        for expr in &mut self.exprs {
            expr.span.shift(at, by);
        }
        for stmt in &mut self.stmts {
            stmt.span.shift(at, by);
        }
        for spec in &mut self.specs {
            spec.span.shift(at, by);
            for name in &mut spec.names {
                name.span.shift(at, by);
            }
        }
    }
}
