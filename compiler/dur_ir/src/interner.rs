//! String interner.
//!
//! Interned strings are leaked so lookups can hand out `&'static str`
//! without holding the lock; an interner lives as long as the lint run.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

#[derive(Default)]
struct Inner {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
pub struct StringInterner {
    inner: RwLock<Inner>,
}

impl StringInterner {
    /// Create an interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        let interner = StringInterner {
            inner: RwLock::new(Inner::default()),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    /// Intern a string, returning its existing name if already present.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&name) = self.inner.read().map.get(s) {
            return name;
        }

        let mut inner = self.inner.write();
        // Another writer may have won the race between the two locks.
        if let Some(&name) = inner.map.get(s) {
            return name;
        }
        let raw = u32::try_from(inner.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded u32::MAX strings"));
        let name = Name::from_raw(raw);
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        inner.strings.push(leaked);
        inner.map.insert(leaked, name);
        name
    }

    /// Look up the string for a name.
    ///
    /// # Panics
    /// Panics if `name` was produced by a different interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.inner.read().strings[name.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

/// Shared handle to an interner, cloned into every file of a package.
#[derive(Clone, Debug, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
