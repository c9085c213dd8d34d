//! Type index handle.
//!
//! Every type lives in a [`Pool`](crate::Pool) and is referenced by a 32-bit
//! index. Basic types and the canonical duration are pre-interned at fixed
//! indices, so the identity checks the lint runs on every node are integer
//! comparisons.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Pre-interned basic types (0-18) ===
    pub const BOOL: Self = Self(0);
    pub const STRING: Self = Self(1);
    pub const INT: Self = Self(2);
    pub const INT8: Self = Self(3);
    pub const INT16: Self = Self(4);
    pub const INT32: Self = Self(5);
    pub const INT64: Self = Self(6);
    pub const UINT: Self = Self(7);
    pub const UINT8: Self = Self(8);
    pub const UINT16: Self = Self(9);
    pub const UINT32: Self = Self(10);
    pub const UINT64: Self = Self(11);
    pub const UINTPTR: Self = Self(12);
    pub const FLOAT32: Self = Self(13);
    pub const FLOAT64: Self = Self(14);
    /// Type of an integer constant before it is assigned a type.
    pub const UNTYPED_INT: Self = Self(15);
    pub const UNTYPED_RUNE: Self = Self(16);
    pub const UNTYPED_FLOAT: Self = Self(17);
    pub const UNTYPED_STRING: Self = Self(18);

    /// The canonical duration type, `time.Duration`.
    pub const DURATION: Self = Self(19);

    /// Number of pre-interned types.
    pub const PRIMITIVE_COUNT: u32 = 20;

    /// Sentinel: the collaborator recorded no type (statements, package names
    /// it chose not to type, ...).
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Check if this is one of the pre-interned types.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DURATION => write!(f, "Idx::DURATION"),
            Self::NONE => write!(f, "Idx::NONE"),
            _ => write!(f, "Idx({})", self.0),
        }
    }
}

impl Default for Idx {
    fn default() -> Self {
        Self::NONE
    }
}

const _: () = assert!(std::mem::size_of::<Idx>() == 4);
