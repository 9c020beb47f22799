/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Identity-pair cache and the cycle-safe rule wrapper.
//!
//! # How cycles terminate
//!
//! Before a wrapped rule recurses into the children of `(a, b)` it records
//! `a ↦ b` and `b ↦ a`. Meeting the same pair again further down means the
//! graphs loop back onto a comparison already in progress, which is assumed
//! consistent and short-circuits to `true`. Entries are restored as soon as
//! the wrapped rule returns, so a pair compared on one branch is re-compared
//! in full when an independent branch reaches it later.
//!
//! # Invariants
//!
//! - A pair is cached iff its comparison is currently on the call stack.
//! - An object seen while already paired with a *different* partner, whose
//!   counterpart is also paired elsewhere, compares unequal.
//! - Entries displaced by a nested pairing are put back on return.
//! - Only object operands are cached; primitives never reach the wrapper.
//!
//! # Implementations
//!
//! [`DefaultPairCache`] is chosen at compile time: a hashbrown map on hosted
//! targets, a linear scan on bare-metal and 16-bit targets where the working
//! set is tiny.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;
use tracing::trace;

use crate::rules::{rule, Rule};
use crate::value::ObjId;

/// Object-identity keyed mapping from one operand to its current partner.
pub trait PairCache {
    /// Current partner of `key`.
    fn get(&self, key: ObjId) -> Option<ObjId>;

    /// Pair `key` with `partner`, returning the displaced partner.
    fn set(&mut self, key: ObjId, partner: ObjId) -> Option<ObjId>;

    /// Remove `key`, returning its partner.
    fn delete(&mut self, key: ObjId) -> Option<ObjId>;

    /// Number of cached keys.
    fn len(&self) -> usize;

    /// `true` if nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─── HashPairCache ───────────────────────────────────────────────────────────

/// Hash-map backed cache.
#[derive(Clone, Debug, Default)]
pub struct HashPairCache {
    pairs: HashMap<ObjId, ObjId>,
}

impl HashPairCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self { pairs: HashMap::new() }
    }
}

impl PairCache for HashPairCache {
    fn get(&self, key: ObjId) -> Option<ObjId> {
        self.pairs.get(&key).copied()
    }

    fn set(&mut self, key: ObjId, partner: ObjId) -> Option<ObjId> {
        self.pairs.insert(key, partner)
    }

    fn delete(&mut self, key: ObjId) -> Option<ObjId> {
        self.pairs.remove(&key)
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}

// ─── LinearPairCache ─────────────────────────────────────────────────────────

/// Vector backed cache with linear lookup.
///
/// The cache only ever holds the pairs on the current recursion path, so for
/// shallow graphs a scan beats hashing.
#[derive(Clone, Debug, Default)]
pub struct LinearPairCache {
    pairs: Vec<(ObjId, ObjId)>,
}

impl LinearPairCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }
}

impl PairCache for LinearPairCache {
    fn get(&self, key: ObjId) -> Option<ObjId> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, p)| *p)
    }

    fn set(&mut self, key: ObjId, partner: ObjId) -> Option<ObjId> {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => Some(core::mem::replace(&mut slot.1, partner)),
            None => {
                self.pairs.push((key, partner));
                None
            }
        }
    }

    fn delete(&mut self, key: ObjId) -> Option<ObjId> {
        let idx = self.pairs.iter().position(|(k, _)| *k == key)?;
        Some(self.pairs.swap_remove(idx).1)
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// Cache used when none is supplied.
#[cfg(not(any(target_os = "none", target_pointer_width = "16")))]
pub type DefaultPairCache = HashPairCache;

/// Cache used when none is supplied.
#[cfg(any(target_os = "none", target_pointer_width = "16"))]
pub type DefaultPairCache = LinearPairCache;

/// A caller-owned cache shared across comparisons.
impl<C: PairCache> PairCache for Rc<RefCell<C>> {
    fn get(&self, key: ObjId) -> Option<ObjId> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: ObjId, partner: ObjId) -> Option<ObjId> {
        self.borrow_mut().set(key, partner)
    }

    fn delete(&mut self, key: ObjId) -> Option<ObjId> {
        self.borrow_mut().delete(key)
    }

    fn len(&self) -> usize {
        self.borrow().len()
    }
}

// ─── Cycle-safe wrapper ──────────────────────────────────────────────────────

/// Wrap `inner` so that self-referential graphs terminate.
///
/// Needs `state.cache()`; without one the wrapper calls `inner` directly.
pub fn circular<M: 'static>(inner: Rule<M>) -> Rule<M> {
    rule(move |a, b, state| {
        let Some(cache) = state.cache() else {
            return inner(a, b, state);
        };
        let (left, right) = (a.id(), b.id());

        let (displaced_left, displaced_right) = {
            let mut cache = cache.borrow_mut();
            if let (Some(l), Some(r)) = (cache.get(left), cache.get(right)) {
                let cycle = l == right && r == left;
                trace!(?left, ?right, cycle, "pair already in progress");
                return cycle;
            }
            (cache.set(left, right), cache.set(right, left))
        };

        let result = inner(a, b, state);

        let mut cache = cache.borrow_mut();
        restore(&mut **cache, right, displaced_right);
        restore(&mut **cache, left, displaced_left);
        result
    })
}

fn restore(cache: &mut dyn PairCache, key: ObjId, displaced: Option<ObjId>) {
    match displaced {
        Some(partner) => {
            cache.set(key, partner);
        }
        None => {
            cache.delete(key);
        }
    }
}
