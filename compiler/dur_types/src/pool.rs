//! Type pool.
//!
//! A flat table of type entries. [`Pool::new`] pre-interns the basic types
//! and the canonical duration at the indices named on [`Idx`]; the
//! collaborator interns everything else it resolves (struct, func and
//! user-defined named types) through the constructors below.

use crate::{BasicInfo, Idx, Tag};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    tag: Tag,
    name: String,
    info: BasicInfo,
    underlying: Idx,
}

/// Storage for every type known to one lint run.
#[derive(Clone, Debug)]
pub struct Pool {
    entries: Vec<Entry>,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Create a pool with the basic types and `time.Duration` pre-interned.
    pub fn new() -> Self {
        let int = BasicInfo::IS_INTEGER;
        let uint = BasicInfo::IS_INTEGER | BasicInfo::IS_UNSIGNED;
        let untyped = BasicInfo::IS_UNTYPED;

        let mut pool = Pool {
            entries: Vec::with_capacity(64),
        };
        pool.push_basic("bool", BasicInfo::IS_BOOLEAN);
        pool.push_basic("string", BasicInfo::IS_STRING);
        pool.push_basic("int", int);
        pool.push_basic("int8", int);
        pool.push_basic("int16", int);
        pool.push_basic("int32", int);
        pool.push_basic("int64", int);
        pool.push_basic("uint", uint);
        pool.push_basic("uint8", uint);
        pool.push_basic("uint16", uint);
        pool.push_basic("uint32", uint);
        pool.push_basic("uint64", uint);
        pool.push_basic("uintptr", uint);
        pool.push_basic("float32", BasicInfo::IS_FLOAT);
        pool.push_basic("float64", BasicInfo::IS_FLOAT);
        pool.push_basic("untyped int", int | untyped);
        pool.push_basic("untyped rune", int | untyped);
        pool.push_basic("untyped float", BasicInfo::IS_FLOAT | untyped);
        pool.push_basic("untyped string", BasicInfo::IS_STRING | untyped);
        let duration = pool.named("time.Duration", Idx::INT64);

        debug_assert_eq!(duration, Idx::DURATION);
        debug_assert_eq!(pool.entries.len(), Idx::PRIMITIVE_COUNT as usize);
        pool
    }

    fn push_basic(&mut self, name: &str, info: BasicInfo) {
        self.push(Tag::Basic, name, info, Idx::NONE);
    }

    fn push(&mut self, tag: Tag, name: &str, info: BasicInfo, underlying: Idx) -> Idx {
        let raw = u32::try_from(self.entries.len())
            .unwrap_or_else(|_| panic!("type pool exceeded u32::MAX entries"));
        self.entries.push(Entry {
            tag,
            name: name.to_string(),
            info,
            underlying,
        });
        Idx::from_raw(raw)
    }

    /// Intern a defined type over `underlying`.
    pub fn named(&mut self, name: &str, underlying: Idx) -> Idx {
        self.push(Tag::Named, name, BasicInfo::empty(), underlying)
    }

    /// Intern a struct type.
    pub fn struct_type(&mut self, name: &str) -> Idx {
        self.push(Tag::Struct, name, BasicInfo::empty(), Idx::NONE)
    }

    /// Intern a function signature.
    pub fn func_type(&mut self, name: &str) -> Idx {
        self.push(Tag::Func, name, BasicInfo::empty(), Idx::NONE)
    }

    /// Intern an imported package name.
    pub fn package(&mut self, name: &str) -> Idx {
        self.push(Tag::Package, name, BasicInfo::empty(), Idx::NONE)
    }

    /// Intern a multi-value call result.
    pub fn tuple(&mut self, name: &str) -> Idx {
        self.push(Tag::Tuple, name, BasicInfo::empty(), Idx::NONE)
    }

    fn entry(&self, idx: Idx) -> Option<&Entry> {
        if idx.is_none() {
            return None;
        }
        self.entries.get(idx.index())
    }

    /// Tag of a type, or `None` for the sentinel and foreign indices.
    pub fn tag(&self, idx: Idx) -> Option<Tag> {
        self.entry(idx).map(|e| e.tag)
    }

    /// Basic-type flags; empty for anything that is not a basic type.
    pub fn info(&self, idx: Idx) -> BasicInfo {
        self.entry(idx).map_or(BasicInfo::empty(), |e| e.info)
    }

    /// Underlying type of a named type, `Idx::NONE` otherwise.
    pub fn underlying(&self, idx: Idx) -> Idx {
        self.entry(idx).map_or(Idx::NONE, |e| e.underlying)
    }

    /// Human-readable type name.
    pub fn display(&self, idx: Idx) -> &str {
        self.entry(idx).map_or("<none>", |e| e.name.as_str())
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `idx` is the canonical duration type.
    ///
    /// Identity only: a named type whose underlying type matches the
    /// duration's is still a different type.
    #[inline]
    pub fn is_duration(&self, idx: Idx) -> bool {
        idx == Idx::DURATION
    }

    /// Check if `idx` is an integer-like basic type (sized, unsized or an
    /// untyped integer/rune constant).
    ///
    /// Named types are never integer-typed, even over an integer.
    pub fn is_integer(&self, idx: Idx) -> bool {
        self.tag(idx) == Some(Tag::Basic) && self.info(idx).contains(BasicInfo::IS_INTEGER)
    }
}
