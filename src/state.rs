//! Traversal state threaded through one top-level comparison.
//!
//! A [`State`] carries the recursive entry point, the optional identity-pair
//! cache, a caller-defined `meta` payload and the strict flag. It is created
//! per call and passed by shared reference to every rule; the only interior
//! mutation is the cache, and only the cycle-safe wrapper touches it.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::cell::RefCell;

use crate::cache::PairCache;
use crate::value::{Obj, PropertyKey, Value};

/// Where a nested value sits inside its parent.
#[derive(Clone, Copy, Debug)]
pub enum Key<'a> {
    /// Array index, or entry position inside a map.
    Index(usize),
    /// Object property.
    Property(&'a PropertyKey),
    /// Map key (for the value of an entry) or set element.
    Entry(&'a Value),
}

/// The dispatcher as a shareable callable: `(a, b, state) -> bool`.
pub type Compare<M> = Arc<dyn Fn(&Value, &Value, &State<'_, M>) -> bool + Send + Sync>;

/// The low-level comparator every rule recurses through:
/// `(a, b, key_a, key_b, parent_a, parent_b, state) -> bool`.
pub type InternalComparator<M> =
    Arc<dyn Fn(&Value, &Value, Key<'_>, Key<'_>, &Obj, &Obj, &State<'_, M>) -> bool + Send + Sync>;

/// Build an [`InternalComparator`] from a closure.
pub fn interceptor<M, F>(f: F) -> InternalComparator<M>
where
    F: Fn(&Value, &Value, Key<'_>, Key<'_>, &Obj, &Obj, &State<'_, M>) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Per-call context supplied by a state factory.
pub struct StateInit<M> {
    /// Identity-pair cache; a circular comparator supplies its default cache
    /// when this is `None`.
    pub cache: Option<Box<dyn PairCache>>,
    /// Caller-defined payload.
    pub meta: M,
}

impl<M: Default> Default for StateInit<M> {
    fn default() -> Self {
        Self { cache: None, meta: M::default() }
    }
}

/// Context of one top-level comparison.
pub struct State<'c, M> {
    comparator: &'c InternalComparator<M>,
    cache: Option<RefCell<Box<dyn PairCache>>>,
    meta: M,
    strict: bool,
}

impl<'c, M> State<'c, M> {
    /// Assemble a state around `comparator`.
    pub fn new(
        comparator: &'c InternalComparator<M>,
        cache: Option<Box<dyn PairCache>>,
        meta: M,
        strict: bool,
    ) -> Self {
        Self { comparator, cache: cache.map(RefCell::new), meta, strict }
    }

    /// Compare two nested values through the internal comparator.
    #[inline]
    pub fn equals(
        &self,
        a: &Value,
        b: &Value,
        key_a: Key<'_>,
        key_b: Key<'_>,
        parent_a: &Obj,
        parent_b: &Obj,
    ) -> bool {
        (self.comparator)(a, b, key_a, key_b, parent_a, parent_b, self)
    }

    /// The identity-pair cache, if this comparison is cycle-safe.
    pub fn cache(&self) -> Option<&RefCell<Box<dyn PairCache>>> {
        self.cache.as_ref()
    }

    /// Caller-defined payload.
    pub fn meta(&self) -> &M {
        &self.meta
    }

    /// `true` when the strict rule set is active.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Consume the state, returning its cache.
    pub fn into_cache(self) -> Option<Box<dyn PairCache>> {
        self.cache.map(RefCell::into_inner)
    }
}
