//! Typed syntax tree for the duration lint.
//!
//! The lint never parses or type-checks anything itself. A front end lowers
//! its parsed, type-annotated tree into a [`SourceFile`]: a flat arena of
//! expressions, statements and value specs, each expression carrying the
//! [`Idx`](dur_types::Idx) its type checker resolved.
//!
//! # Layout
//!
//! - No `Box<Expr>`: children are [`ExprId`] indices into an [`ExprArena`]
//! - Argument and element lists are [`ExprRange`] slices of one shared list
//! - Names are interned ([`Name`]) through a [`SharedInterner`]
//!
//! # Traversal
//!
//! [`walk_file`] drives a [`Visitor`] over every node in pre-order/post-order
//! pairs, the shape the lint's context stack mirrors.

mod arena;
mod ast;
mod builder;
mod file;
mod ids;
mod interner;
mod name;
mod span;
mod visitor;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, DeclKind, DeclName, Expr, ExprKind, Function, Item, Param, Stmt, StmtKind, UnaryOp,
    ValueSpec,
};
pub use builder::FileBuilder;
pub use file::SourceFile;
pub use ids::{DeclId, ExprId, ExprRange, StmtId, StmtRange};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use visitor::{walk_file, Descend, Node, Visitor};
