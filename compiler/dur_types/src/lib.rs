//! Type identities for the duration lint.
//!
//! The type-resolution collaborator records a static type for every
//! expression. This crate gives those types a compact handle ([`Idx`]) and
//! the handful of queries the lint needs: is a type *the* duration type, and
//! is it an integer-like basic type.
//!
//! # Canonical Duration
//!
//! Exactly one duration identity exists per [`Pool`]: [`Idx::DURATION`],
//! displayed as `time.Duration`. It is a named type over `int64`, so it is
//! never itself integer-typed. Other named types with the same underlying
//! type (`type CustomDuration int`) are distinct identities.

mod flags;
mod idx;
mod pool;
mod tag;

pub use flags::BasicInfo;
pub use idx::Idx;
pub use pool::Pool;
pub use tag::Tag;

/// Trailing callee name of the duration conversion, `time.Duration(x)`.
///
/// Matched on name alone: the qualifier may be an import alias.
pub const DURATION_CONVERSION: &str = "Duration";
