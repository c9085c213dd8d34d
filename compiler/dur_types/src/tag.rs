//! Type kind tag.

use std::fmt;

/// Kind of a pooled type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// Predeclared basic type (`int`, `string`, untyped constants, ...).
    Basic,
    /// Defined type with an underlying type (`time.Duration`, `type X int`).
    Named,
    /// Struct type.
    Struct,
    /// Function or method signature.
    Func,
    /// Imported package name.
    Package,
    /// Multi-value result of a call.
    Tuple,
}

impl Tag {
    /// Short lowercase name, used in pool dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Basic => "basic",
            Tag::Named => "named",
            Tag::Struct => "struct",
            Tag::Func => "func",
            Tag::Package => "package",
            Tag::Tuple => "tuple",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
