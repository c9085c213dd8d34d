//! Incremental construction of a [`SourceFile`].
//!
//! Nodes are built bottom-up. Every leaf appends its text to a synthetic
//! source buffer and receives the span of that text; composite nodes span
//! their children. Operators and selector dots are spliced in between the
//! operands they join, so snippets read back as written:
//!
//! ```text
//! let mut b = FileBuilder::new("p/test.go");
//! let ten = b.int(10, Idx::DURATION);
//! let second = b.qualified("time", "Second", Idx::DURATION);
//! let sum = b.add(ten, second, Idx::DURATION);
//! b.snippet(b.span_of(sum))   // "10 + time.Second"
//! ```
//!
//! Calls and parentheses add no text of their own. Statements end the
//! current line so diagnostics can be reported per line.

use dur_types::Idx;

use crate::{
    BinaryOp, DeclId, DeclKind, DeclName, Expr, ExprArena, ExprId, ExprKind, Function, Item,
    Name, Param, SharedInterner, SourceFile, Span, Stmt, StmtId, StmtKind, UnaryOp, ValueSpec,
};

/// Builder for a typed [`SourceFile`].
#[derive(Debug)]
pub struct FileBuilder {
    path: String,
    text: String,
    arena: ExprArena,
    items: Vec<Item>,
    interner: SharedInterner,
}

impl FileBuilder {
    /// Start a file with its own interner.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_interner(path, SharedInterner::new())
    }

    /// Start a file sharing `interner` with other files of the same package.
    pub fn with_interner(path: impl Into<String>, interner: SharedInterner) -> Self {
        FileBuilder {
            path: path.into(),
            text: String::new(),
            arena: ExprArena::new(),
            items: Vec::new(),
            interner,
        }
    }

    pub fn intern(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Append `text` to the source buffer and return its span.
    fn leaf(&mut self, text: &str) -> Span {
        let start = self.offset();
        self.text.push_str(text);
        let end = self.offset();
        self.text.push(' ');
        Span::new(start, end)
    }

    /// Splice `text` into the buffer at `at`, moving every later span.
    fn insert(&mut self, at: u32, text: &str) -> Span {
        self.text.insert_str(at as usize, text);
        let by = u32::try_from(text.len())
            .unwrap_or_else(|_| panic!("inserted text exceeded u32::MAX bytes"));
        self.arena.shift_spans(at, by);
        for item in &mut self.items {
            if let Item::Func(func) = item {
                func.span.shift(at, by);
                for param in &mut func.params {
                    param.span.shift(at, by);
                }
            }
        }
        Span::new(at, at + by)
    }

    fn offset(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or_else(|_| panic!("source exceeded u32::MAX bytes"))
    }

    fn newline(&mut self) {
        if self.text.ends_with(' ') {
            self.text.pop();
        }
        self.text.push('\n');
    }

    fn expr(&mut self, kind: ExprKind, span: Span, ty: Idx) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span, ty))
    }

    pub fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    pub fn snippet(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or("")
    }

    fn merged(&self, ids: &[ExprId]) -> Option<Span> {
        ids.iter()
            .map(|&id| self.span_of(id))
            .reduce(Span::merge)
    }

    // Expressions

    pub fn int(&mut self, value: u64, ty: Idx) -> ExprId {
        let span = self.leaf(&value.to_string());
        self.expr(ExprKind::Int(value), span, ty)
    }

    pub fn float(&mut self, value: f64, ty: Idx) -> ExprId {
        let span = self.leaf(&format!("{value:?}"));
        self.expr(ExprKind::Float(value.to_bits()), span, ty)
    }

    pub fn string(&mut self, value: &str, ty: Idx) -> ExprId {
        let span = self.leaf(&format!("{value:?}"));
        let name = self.intern(value);
        self.expr(ExprKind::Str(name), span, ty)
    }

    pub fn ident(&mut self, name: &str, ty: Idx) -> ExprId {
        let span = self.leaf(name);
        let name = self.intern(name);
        self.expr(ExprKind::Ident(name), span, ty)
    }

    /// Struct-literal key naming a field of type `ty`.
    pub fn field(&mut self, name: &str, ty: Idx) -> ExprId {
        let span = self.leaf(name);
        let name = self.intern(name);
        self.expr(ExprKind::Field(name), span, ty)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, ty: Idx) -> ExprId {
        let at = self.span_of(left).start.max(self.span_of(right).start);
        self.insert(at, &format!("{} ", op.as_symbol()));
        let span = self.span_of(left).merge(self.span_of(right));
        self.expr(ExprKind::Binary { op, left, right }, span, ty)
    }

    pub fn add(&mut self, left: ExprId, right: ExprId, ty: Idx) -> ExprId {
        self.binary(BinaryOp::Add, left, right, ty)
    }

    pub fn sub(&mut self, left: ExprId, right: ExprId, ty: Idx) -> ExprId {
        self.binary(BinaryOp::Sub, left, right, ty)
    }

    pub fn mul(&mut self, left: ExprId, right: ExprId, ty: Idx) -> ExprId {
        self.binary(BinaryOp::Mul, left, right, ty)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId, ty: Idx) -> ExprId {
        let at = self.span_of(operand).start;
        let span = self.insert(at, op.as_symbol()).merge(self.span_of(operand));
        self.expr(ExprKind::Unary { op, operand }, span, ty)
    }

    /// Parenthesize `inner`; the parens take the inner expression's type.
    pub fn paren(&mut self, inner: ExprId) -> ExprId {
        let Expr { span, ty, .. } = *self.arena.get_expr(inner);
        self.expr(ExprKind::Paren(inner), span, ty)
    }

    pub fn call(&mut self, func: ExprId, args: &[ExprId], ty: Idx) -> ExprId {
        let span = match self.merged(args) {
            Some(args) => self.span_of(func).merge(args),
            None => self.span_of(func),
        };
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.expr(ExprKind::Call { func, args }, span, ty)
    }

    pub fn selector(&mut self, base: ExprId, field: &str, ty: Idx) -> ExprId {
        let at = self.span_of(base).end;
        let span = self.span_of(base).merge(self.insert(at, &format!(".{field}")));
        let field = self.intern(field);
        self.expr(ExprKind::Selector { base, field }, span, ty)
    }

    /// `pkg.member`, with the package identifier left untyped.
    pub fn qualified(&mut self, pkg: &str, member: &str, ty: Idx) -> ExprId {
        let base = self.ident(pkg, Idx::NONE);
        self.selector(base, member, ty)
    }

    /// `time.Duration(arg)`.
    pub fn duration_conversion(&mut self, arg: ExprId) -> ExprId {
        let func = self.qualified("time", dur_types::DURATION_CONVERSION, Idx::NONE);
        self.call(func, &[arg], Idx::DURATION)
    }

    pub fn composite(&mut self, elems: &[ExprId], ty: Idx) -> ExprId {
        let span = match self.merged(elems) {
            Some(span) => span,
            None => self.leaf("{}"),
        };
        let elems = self.arena.alloc_expr_list(elems.iter().copied());
        self.expr(ExprKind::Composite { elems }, span, ty)
    }

    pub fn key_value(&mut self, key: ExprId, value: ExprId) -> ExprId {
        let span = self.span_of(key).merge(self.span_of(value));
        self.expr(ExprKind::KeyValue { key, value }, span, Idx::NONE)
    }

    // Declarations and statements

    /// A `const`/`var` spec. `names` and `values` correspond by position.
    pub fn value_spec(
        &mut self,
        kind: DeclKind,
        names: &[&str],
        ty: Option<Idx>,
        values: &[ExprId],
    ) -> DeclId {
        let keyword = self.leaf(kind.keyword());
        let names: Vec<DeclName> = names
            .iter()
            .map(|name| DeclName {
                span: self.leaf(name),
                name: self.intern(name),
            })
            .collect();
        let span = self
            .merged(values)
            .map_or(keyword, |values| keyword.merge(values));
        let span = names.iter().fold(span, |span, n| span.merge(n.span));
        let values = self.arena.alloc_expr_list(values.iter().copied());
        self.newline();
        self.arena.alloc_spec(ValueSpec {
            kind,
            names,
            ty,
            values,
            span,
        })
    }

    fn stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.newline();
        self.arena.alloc_stmt(Stmt { kind, span })
    }

    fn assignment(&mut self, lhs: &[ExprId], rhs: &[ExprId], define: bool) -> StmtId {
        let all: Vec<ExprId> = lhs.iter().chain(rhs).copied().collect();
        let span = self.merged(&all).unwrap_or(Span::DUMMY);
        let lhs = self.arena.alloc_expr_list(lhs.iter().copied());
        let rhs = self.arena.alloc_expr_list(rhs.iter().copied());
        self.stmt(StmtKind::Assign { lhs, rhs, define }, span)
    }

    /// `lhs... = rhs...`
    pub fn assign(&mut self, lhs: &[ExprId], rhs: &[ExprId]) -> StmtId {
        self.assignment(lhs, rhs, false)
    }

    /// `lhs... := rhs...`
    pub fn define(&mut self, lhs: &[ExprId], rhs: &[ExprId]) -> StmtId {
        self.assignment(lhs, rhs, true)
    }

    pub fn decl_stmt(&mut self, decl: DeclId) -> StmtId {
        let span = self.arena.get_spec(decl).span;
        self.arena.alloc_stmt(Stmt {
            kind: StmtKind::Decl(decl),
            span,
        })
    }

    pub fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        let span = self.span_of(expr);
        self.stmt(StmtKind::Expr(expr), span)
    }

    pub fn return_stmt(&mut self, values: &[ExprId]) -> StmtId {
        let span = match self.merged(values) {
            Some(span) => span,
            None => self.leaf("return"),
        };
        let values = self.arena.alloc_expr_list(values.iter().copied());
        self.stmt(StmtKind::Return(values), span)
    }

    pub fn block(&mut self, stmts: &[StmtId]) -> StmtId {
        let span = stmts
            .iter()
            .map(|&id| self.arena.get_stmt(id).span)
            .reduce(Span::merge)
            .unwrap_or(Span::DUMMY);
        let stmts = self.arena.alloc_stmt_list(stmts.iter().copied());
        self.stmt(StmtKind::Block(stmts), span)
    }

    // Items

    /// Add a file-level `const`/`var` declaration.
    pub fn top_level(&mut self, decl: DeclId) {
        self.items.push(Item::Decl(decl));
    }

    /// Add a function with the given parameters and body.
    pub fn func(&mut self, name: &str, params: &[(&str, Idx)], body: &[StmtId]) {
        let name_span = self.leaf(name);
        let params = params
            .iter()
            .map(|&(param, ty)| Param {
                span: self.leaf(param),
                name: self.intern(param),
                ty,
            })
            .collect();
        self.newline();
        let span = body
            .iter()
            .map(|&id| self.arena.get_stmt(id).span)
            .fold(name_span, Span::merge);
        let body = self.arena.alloc_stmt_list(body.iter().copied());
        let name = self.intern(name);
        self.items.push(Item::Func(Function {
            name,
            span,
            params,
            body,
        }));
    }

    pub fn finish(self) -> SourceFile {
        SourceFile {
            path: self.path,
            text: self.text,
            arena: self.arena,
            items: self.items,
            interner: self.interner,
        }
    }
}
