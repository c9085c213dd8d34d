//! Identifier resolution pre-pass.
//!
//! Builds a read-only table from identifier expressions to the declaration
//! that introduced them. The classifier uses it to follow a name back to its
//! `const`/`var` spec and decide whether the name carries a unit.
//!
//! Scoping follows the source language's block rules:
//!
//! - File-level declarations and functions are visible throughout the file
//! - A local `const`/`var` is visible after its spec
//! - `x := v` binds `x` after `v`, reusing an existing `x` of the same scope
//! - Functions and blocks open scopes
//!
//! Names that resolve to nothing here (package qualifiers, symbols declared
//! in other files) get no entry.

use std::convert::Infallible;

use dur_ir::{
    walk_file, DeclId, Descend, ExprId, ExprKind, Item, Name, Node, SourceFile, StmtKind, Visitor,
};
use rustc_hash::FxHashMap;

/// What an identifier refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Binding {
    /// A name declared by a value spec.
    Value(DeclId),
    /// A function parameter.
    Param,
    /// A name introduced by `:=`.
    ShortVar,
    /// A function declared in the file.
    Func,
}

/// Identifier expression to binding table for one file.
#[derive(Clone, Debug, Default)]
pub struct Resolutions {
    bindings: FxHashMap<ExprId, Binding>,
}

impl Resolutions {
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<Binding> {
        self.bindings.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Resolve every identifier expression of `file`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %file.path))]
pub fn resolve_file(file: &SourceFile) -> Resolutions {
    let mut resolver = Resolver {
        file,
        scopes: Vec::new(),
        bindings: FxHashMap::default(),
    };
    walk_file(&mut resolver, file).unwrap_or_else(|never| match never {});
    tracing::debug!(resolved = resolver.bindings.len(), "identifiers resolved");
    Resolutions {
        bindings: resolver.bindings,
    }
}

struct Resolver<'ast> {
    file: &'ast SourceFile,
    scopes: Vec<FxHashMap<Name, Binding>>,
    bindings: FxHashMap<ExprId, Binding>,
}

impl Resolver<'_> {
    fn bind(&mut self, name: Name, binding: Binding) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, binding);
        }
    }

    fn lookup(&self, name: Name) -> Option<Binding> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&name).copied())
    }

    /// Bind the targets of a `:=` once its values have been resolved.
    fn define(&mut self, targets: &[ExprId]) {
        for &id in targets {
            let ExprKind::Ident(name) = self.file.expr(id).kind else {
                continue;
            };
            let existing = self
                .scopes
                .last()
                .and_then(|scope| scope.get(&name).copied());
            let binding = existing.unwrap_or(Binding::ShortVar);
            self.bind(name, binding);
            self.bindings.insert(id, binding);
        }
    }
}

impl<'ast> Visitor<'ast> for Resolver<'ast> {
    type Error = Infallible;

    fn enter(&mut self, node: Node<'ast>) -> Result<Descend, Infallible> {
        match node {
            Node::File(file) => {
                self.scopes.push(FxHashMap::default());
                for item in &file.items {
                    match item {
                        Item::Decl(id) => {
                            for decl in &file.arena.get_spec(*id).names {
                                self.bind(decl.name, Binding::Value(*id));
                            }
                        }
                        Item::Func(func) => self.bind(func.name, Binding::Func),
                    }
                }
            }
            Node::Func(func) => {
                self.scopes.push(FxHashMap::default());
                for param in &func.params {
                    self.bind(param.name, Binding::Param);
                }
            }
            Node::Stmt(_, stmt) => {
                if let StmtKind::Block(_) = stmt.kind {
                    self.scopes.push(FxHashMap::default());
                }
            }
            Node::Expr(id, expr) => {
                if let ExprKind::Ident(name) = expr.kind {
                    if let Some(binding) = self.lookup(name) {
                        self.bindings.insert(id, binding);
                    }
                }
            }
            Node::Spec(..) => {}
        }
        Ok(Descend::Children)
    }

    fn leave(&mut self, node: Node<'ast>) -> Result<(), Infallible> {
        match node {
            Node::File(_) | Node::Func(_) => {
                self.scopes.pop();
            }
            Node::Spec(id, spec) => {
                for decl in &spec.names {
                    self.bind(decl.name, Binding::Value(id));
                }
            }
            Node::Stmt(_, stmt) => match stmt.kind {
                StmtKind::Block(_) => {
                    self.scopes.pop();
                }
                StmtKind::Assign {
                    lhs, define: true, ..
                } => {
                    let file = self.file;
                    self.define(file.arena.get_expr_list(lhs));
                }
                _ => {}
            },
            Node::Expr(..) => {}
        }
        Ok(())
    }
}
