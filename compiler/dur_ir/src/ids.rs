//! Arena indices.
//!
//! `ExprId(u32)` instead of `Box<Expr>`; ranges address the arena's shared
//! list storage so a call's arguments are one `(start, len)` pair.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);
define_id!(
    /// Index into the statement arena.
    StmtId
);
define_id!(
    /// Index of a `const`/`var` value spec.
    DeclId
);

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub fn indices(&self) -> std::ops::Range<usize> {
                self.start as usize..(self.start + self.len) as usize
            }
        }
    };
}

define_range!(
    /// Slice of the arena's expression lists.
    ExprRange
);
define_range!(
    /// Slice of the arena's statement lists.
    StmtRange
);
