//! Pre-order/post-order traversal.
//!
//! [`walk_file`] calls [`Visitor::enter`] when it reaches a node and
//! [`Visitor::leave`] once the node's subtree is done, for every node of the
//! file. Children are visited in source order: left operand before right,
//! callee before arguments, assignment targets before values.
//!
//! Returning [`Descend::Skip`] from `enter` prunes the subtree, but the node
//! itself is still left, so enter/leave calls always pair up.
//!
//! # Example
//!
//! ```text
//! struct Depth { current: usize, max: usize }
//!
//! impl<'ast> Visitor<'ast> for Depth {
//!     type Error = Infallible;
//!
//!     fn enter(&mut self, _node: Node<'ast>) -> Result<Descend, Infallible> {
//!         self.current += 1;
//!         self.max = self.max.max(self.current);
//!         Ok(Descend::Children)
//!     }
//!
//!     fn leave(&mut self, _node: Node<'ast>) -> Result<(), Infallible> {
//!         self.current -= 1;
//!         Ok(())
//!     }
//! }
//! ```

use dur_types::Idx;

use crate::{
    DeclId, Expr, ExprId, ExprKind, Function, Item, SourceFile, Stmt, StmtId, StmtKind,
    ValueSpec,
};

/// Minimum stack space to keep available before recursing.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// A borrowed view of one visited node.
#[derive(Copy, Clone, Debug)]
pub enum Node<'ast> {
    File(&'ast SourceFile),
    Func(&'ast Function),
    Spec(DeclId, &'ast ValueSpec),
    Stmt(StmtId, &'ast Stmt),
    Expr(ExprId, &'ast Expr),
}

impl<'ast> Node<'ast> {
    /// Resolved type of an expression node, `Idx::NONE` for every other node.
    pub fn ty(self) -> Idx {
        match self {
            Node::Expr(_, expr) => expr.ty,
            _ => Idx::NONE,
        }
    }

    pub fn as_expr(self) -> Option<(ExprId, &'ast Expr)> {
        match self {
            Node::Expr(id, expr) => Some((id, expr)),
            _ => None,
        }
    }

    /// Short description of the node's shape, for logs and internal errors.
    pub fn shape(self) -> &'static str {
        match self {
            Node::File(_) => "file",
            Node::Func(_) => "func",
            Node::Spec(..) => "value spec",
            Node::Stmt(_, stmt) => match stmt.kind {
                StmtKind::Assign { .. } => "assignment",
                StmtKind::Decl(_) => "declaration",
                StmtKind::Expr(_) => "expression statement",
                StmtKind::Return(_) => "return",
                StmtKind::Block(_) => "block",
            },
            Node::Expr(_, expr) => match expr.kind {
                ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::Str(_) => "literal",
                ExprKind::Ident(_) => "identifier",
                ExprKind::Field(_) => "field key",
                ExprKind::Binary { .. } => "binary",
                ExprKind::Unary { .. } => "unary",
                ExprKind::Paren(_) => "paren",
                ExprKind::Call { .. } => "call",
                ExprKind::Selector { .. } => "selector",
                ExprKind::Composite { .. } => "composite literal",
                ExprKind::KeyValue { .. } => "key-value",
            },
        }
    }
}

/// Whether traversal continues into a node's children.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Descend {
    Children,
    Skip,
}

/// Pre-order/post-order visitor.
///
/// The visitor may mutate its own state; the tree is immutable. An error
/// from either callback stops the walk and is returned from [`walk_file`].
pub trait Visitor<'ast> {
    type Error;

    /// Called when traversal reaches `node`, before its children.
    fn enter(&mut self, node: Node<'ast>) -> Result<Descend, Self::Error>;

    /// Called after `node`'s children, or right after `enter` when it
    /// returned [`Descend::Skip`].
    fn leave(&mut self, node: Node<'ast>) -> Result<(), Self::Error> {
        let _ = node;
        Ok(())
    }
}

/// Walk every node of `file`, starting with the file node itself.
pub fn walk_file<'ast, V>(visitor: &mut V, file: &'ast SourceFile) -> Result<(), V::Error>
where
    V: Visitor<'ast> + ?Sized,
{
    walk_node(visitor, file, Node::File(file))
}

fn walk_node<'ast, V>(visitor: &mut V, file: &'ast SourceFile, node: Node<'ast>) -> Result<(), V::Error>
where
    V: Visitor<'ast> + ?Sized,
{
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || {
        if visitor.enter(node)? == Descend::Children {
            walk_children(visitor, file, node)?;
        }
        visitor.leave(node)
    })
}

fn walk_children<'ast, V>(
    visitor: &mut V,
    file: &'ast SourceFile,
    node: Node<'ast>,
) -> Result<(), V::Error>
where
    V: Visitor<'ast> + ?Sized,
{
    let arena = &file.arena;
    match node {
        Node::File(file) => {
            for item in &file.items {
                let child = match item {
                    Item::Decl(id) => Node::Spec(*id, arena.get_spec(*id)),
                    Item::Func(func) => Node::Func(func),
                };
                walk_node(visitor, file, child)?;
            }
        }
        Node::Func(func) => {
            for &id in arena.get_stmt_list(func.body) {
                walk_node(visitor, file, Node::Stmt(id, arena.get_stmt(id)))?;
            }
        }
        Node::Spec(_, spec) => walk_exprs(visitor, file, arena.get_expr_list(spec.values))?,
        Node::Stmt(_, stmt) => match stmt.kind {
            StmtKind::Assign { lhs, rhs, .. } => {
                walk_exprs(visitor, file, arena.get_expr_list(lhs))?;
                walk_exprs(visitor, file, arena.get_expr_list(rhs))?;
            }
            StmtKind::Decl(id) => walk_node(visitor, file, Node::Spec(id, arena.get_spec(id)))?,
            StmtKind::Expr(id) => walk_exprs(visitor, file, &[id])?,
            StmtKind::Return(values) => walk_exprs(visitor, file, arena.get_expr_list(values))?,
            StmtKind::Block(stmts) => {
                for &id in arena.get_stmt_list(stmts) {
                    walk_node(visitor, file, Node::Stmt(id, arena.get_stmt(id)))?;
                }
            }
        },
        Node::Expr(_, expr) => match expr.kind {
            ExprKind::Int(_)
            | ExprKind::Float(_)
            | ExprKind::Str(_)
            | ExprKind::Ident(_)
            | ExprKind::Field(_) => {}
            ExprKind::Binary { left, right, .. } => walk_exprs(visitor, file, &[left, right])?,
            ExprKind::Unary { operand, .. } => walk_exprs(visitor, file, &[operand])?,
            ExprKind::Paren(inner) => walk_exprs(visitor, file, &[inner])?,
            ExprKind::Call { func, args } => {
                walk_exprs(visitor, file, &[func])?;
                walk_exprs(visitor, file, arena.get_expr_list(args))?;
            }
            ExprKind::Selector { base, .. } => walk_exprs(visitor, file, &[base])?,
            ExprKind::Composite { elems } => walk_exprs(visitor, file, arena.get_expr_list(elems))?,
            ExprKind::KeyValue { key, value } => walk_exprs(visitor, file, &[key, value])?,
        },
    }
    Ok(())
}

fn walk_exprs<'ast, V>(visitor: &mut V, file: &'ast SourceFile, ids: &[ExprId]) -> Result<(), V::Error>
where
    V: Visitor<'ast> + ?Sized,
{
    for &id in ids {
        walk_node(visitor, file, Node::Expr(id, file.arena.get_expr(id)))?;
    }
    Ok(())
}
