//! Per-node resolution state and the stack that mirrors tree ancestry.
//!
//! Every visited node gets a [`Context`] on entry. When the node is left its
//! context settles into a [`Resolution`]:
//!
//! | Outcome   | Condition                              | Deferred findings |
//! |-----------|----------------------------------------|-------------------|
//! | `Clean`   | duration-typed and not improper        | dropped           |
//! | `Dirty`   | not clean, not a multiplication        | reported          |
//! | `Pending` | not clean, a multiplication            | moved to parent   |
//!
//! A multiplication that is still improper had no proper operand to combine
//! with, so an enclosing multiplication may yet redeem it. Anything else ends
//! the repair path.
//!
//! The bottom of the stack is a sentinel that collects findings forwarded
//! past the outermost node; [`ContextStack::finish`] reports them.

use dur_diagnostic::Diagnostic;
use dur_ir::{BinaryOp, ExprKind, Node};
use dur_types::Pool;
use smallvec::SmallVec;

use crate::error::LintError;

/// How a context settled when its node was left.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Resolution {
    /// Proper duration; deferred findings are dropped.
    Clean,
    /// Improper and unredeemable; deferred findings are reported.
    Dirty,
    /// Improper multiplication; deferred findings move to the parent.
    Pending,
}

/// Resolution state of one visited node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    /// The node's type is the duration type.
    pub is_duration_type: bool,
    /// The node is a binary multiplication.
    pub is_multiplication: bool,
    /// The node is a conversion of a unit-less integer.
    pub is_bare_conversion: bool,
    pub has_proper_child: bool,
    pub has_improper_child: bool,
    deferred: SmallVec<[Diagnostic; 1]>,
}

impl Context {
    pub fn new(is_duration_type: bool, is_multiplication: bool) -> Self {
        Context {
            is_duration_type,
            is_multiplication,
            ..Context::default()
        }
    }

    /// Context for entering `node`.
    pub fn for_node(node: Node<'_>, pool: &Pool) -> Self {
        let is_multiplication = node.as_expr().is_some_and(|(_, expr)| {
            matches!(
                expr.kind,
                ExprKind::Binary {
                    op: BinaryOp::Mul,
                    ..
                }
            )
        });
        Context::new(pool.is_duration(node.ty()), is_multiplication)
    }

    pub fn is_improper(&self) -> bool {
        self.is_duration_type
            && (self.is_bare_conversion
                || (self.has_improper_child && !self.is_multiplication)
                || (self.has_improper_child && !self.has_proper_child))
    }

    pub fn is_proper(&self) -> bool {
        self.is_duration_type && !self.is_improper()
    }

    pub fn resolution(&self) -> Resolution {
        if self.is_proper() {
            Resolution::Clean
        } else if self.is_multiplication {
            Resolution::Pending
        } else {
            Resolution::Dirty
        }
    }

    /// Findings attached to this node awaiting its resolution.
    pub fn deferred(&self) -> &[Diagnostic] {
        &self.deferred
    }

    pub fn defer(&mut self, diagnostic: Diagnostic) {
        self.deferred.push(diagnostic);
    }
}

/// Stack of contexts from the outermost entered node to the current one.
#[derive(Debug, Default)]
pub struct ContextStack {
    sentinel: Context,
    frames: Vec<Context>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entered nodes not yet left.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, context: Context) {
        self.frames.push(context);
    }

    pub fn current(&self) -> Result<&Context, LintError> {
        self.frames.last().ok_or(LintError::EmptyContextStack)
    }

    pub fn current_mut(&mut self) -> Result<&mut Context, LintError> {
        self.frames.last_mut().ok_or(LintError::EmptyContextStack)
    }

    /// The current node's parent, or the sentinel for the outermost node.
    fn parent_mut(&mut self) -> &mut Context {
        match self.frames.len() {
            0 | 1 => &mut self.sentinel,
            len => &mut self.frames[len - 2],
        }
    }

    /// Mark the current node as a bare conversion and attach `diagnostic` to
    /// its parent, where an enclosing multiplication can still redeem it.
    pub fn defer_bare_conversion(&mut self, diagnostic: Diagnostic) -> Result<(), LintError> {
        self.current_mut()?.is_bare_conversion = true;
        tracing::trace!(depth = self.depth(), "conversion deferred to parent");
        self.parent_mut().defer(diagnostic);
        Ok(())
    }

    /// Leave the current node: fold its outcome into the parent, then drop,
    /// report into `sink`, or forward its deferred findings.
    pub fn pop<S>(&mut self, sink: &mut S) -> Result<Resolution, LintError>
    where
        S: Extend<Diagnostic>,
    {
        let context = self.frames.pop().ok_or(LintError::EmptyContextStack)?;
        let resolution = context.resolution();
        let parent = self.frames.last_mut().unwrap_or(&mut self.sentinel);

        parent.has_proper_child |= context.is_proper();
        parent.has_improper_child |= context.is_improper();

        if !context.deferred.is_empty() {
            tracing::trace!(
                ?resolution,
                count = context.deferred.len(),
                "deferred findings settled"
            );
        }
        match resolution {
            Resolution::Clean => {}
            Resolution::Dirty => sink.extend(context.deferred),
            Resolution::Pending => parent.deferred.extend(context.deferred),
        }
        Ok(resolution)
    }

    /// End the traversal, reporting whatever reached the sentinel.
    pub fn finish<S>(self, sink: &mut S) -> Result<(), LintError>
    where
        S: Extend<Diagnostic>,
    {
        if !self.frames.is_empty() {
            return Err(LintError::UnbalancedStack {
                depth: self.frames.len(),
            });
        }
        if !self.sentinel.deferred.is_empty() {
            tracing::trace!(
                count = self.sentinel.deferred.len(),
                "reporting findings left at the root"
            );
        }
        sink.extend(self.sentinel.deferred);
        Ok(())
    }
}
