//! Basic type metadata flags.

use bitflags::bitflags;

bitflags! {
    /// Properties of a basic type, fixed when the pool is created.
    ///
    /// Non-basic types (named, struct, func, ...) carry no flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct BasicInfo: u8 {
        /// `bool` and untyped boolean constants.
        const IS_BOOLEAN = 1 << 0;
        /// Every sized and unsized integer, including rune/byte aliases.
        const IS_INTEGER = 1 << 1;
        /// Unsigned integers.
        const IS_UNSIGNED = 1 << 2;
        /// `float32`, `float64` and untyped float constants.
        const IS_FLOAT = 1 << 3;
        /// `string` and untyped string constants.
        const IS_STRING = 1 << 4;
        /// The type of a constant that has not yet been given a type.
        const IS_UNTYPED = 1 << 5;

        /// Any numeric basic type.
        const IS_NUMERIC = Self::IS_INTEGER.bits() | Self::IS_FLOAT.bits();
    }
}
