//! Diagnostics produced by the duration lint.
//!
//! Every finding is a [`Diagnostic`] carrying one of three [`LintCode`]s and
//! the span of the offending expression:
//!
//! - `L0001`: unit-less value assigned to a duration
//! - `L0002`: unit-less value passed as a duration argument
//! - `L0003`: integer converted to a duration without a unit multiplication
//!
//! A [`DiagnosticQueue`] collects one file's findings and hands them back in
//! source order.

mod diagnostic;
mod lint_code;
pub mod queue;

pub use diagnostic::{improper_conversion, unitless_argument, unitless_assignment, Diagnostic, Label};
pub use lint_code::LintCode;
pub use queue::DiagnosticQueue;
