//! Internal consistency failures.
//!
//! These only occur when the front end hands over a tree that breaks its own
//! contract (an identifier bound to a declaration that does not declare it,
//! a declared name with no initializer). The run aborts with the error; no
//! partial report is produced.

use dur_ir::Span;
use thiserror::Error;

/// Fatal error raised while linting a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    /// An identifier resolved to a value spec that does not list its name.
    #[error("identifier `{name}` at {span} not found in its declaration")]
    NameNotInDeclaration { name: String, span: Span },

    /// A declared name has no initializer at its position.
    #[error("declaration of `{name}` at {span} has no initializer for it")]
    MissingInitializer { name: String, span: Span },

    /// A context was requested with no node entered.
    #[error("context stack queried before any node was entered")]
    EmptyContextStack,

    /// Traversal ended with contexts still pushed.
    #[error("context stack unbalanced at end of traversal ({depth} contexts left)")]
    UnbalancedStack { depth: usize },
}
