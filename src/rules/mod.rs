//! Per-category comparison rules.
//!
//! Every rule has the same shape, `(a, b, state) -> bool`, and is only ever
//! called by the dispatcher with two objects of the same [`Category`]. Rules
//! read their operands and recurse into nested values through
//! [`State::equals`]; none of them mutate anything.
//!
//! | Module | Rules |
//! |--------|-------|
//! | `keyed` | [`are_objects_equal`], [`are_objects_equal_strict`] |
//! | `sequence` | [`are_arrays_equal`], [`are_arrays_equal_strict`], [`are_typed_arrays_equal`] |
//! | `collections` | [`are_maps_equal`], [`are_sets_equal`] |
//! | `scalar` | dates, regular expressions, boxed primitives, thenables, functions |
//!
//! [`Category`]: crate::Category

mod collections;
mod keyed;
mod scalar;
mod sequence;

use alloc::sync::Arc;

pub use collections::{are_maps_equal, are_sets_equal};
pub use keyed::{are_objects_equal, are_objects_equal_strict};
pub use scalar::{
    are_dates_equal, are_functions_equal, are_primitive_wrappers_equal, are_promises_equal,
    are_regexps_equal, are_regexps_equal_legacy,
};
pub use sequence::{are_arrays_equal, are_arrays_equal_strict, are_typed_arrays_equal};

use crate::state::State;
use crate::value::Obj;

/// A comparison rule for one category.
pub type Rule<M> = Arc<dyn Fn(&Obj, &Obj, &State<'_, M>) -> bool + Send + Sync>;

/// Build a [`Rule`] from a closure or function item.
pub fn rule<M, F>(f: F) -> Rule<M>
where
    F: Fn(&Obj, &Obj, &State<'_, M>) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A rule that holds when both `first` and `second` hold. `second` is not
/// evaluated once `first` fails.
pub fn combine<M: 'static>(first: Rule<M>, second: Rule<M>) -> Rule<M> {
    rule(move |a, b, state| first(a, b, state) && second(a, b, state))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Minimal harness for exercising a single rule in isolation.

    use alloc::boxed::Box;

    use crate::cache::DefaultPairCache;
    use crate::state::{interceptor, InternalComparator, State};
    use crate::value::{Obj, Value};
    use crate::{deep_equal, same_value_zero};

    /// Recurse with the full deep comparison.
    pub fn deep() -> InternalComparator<()> {
        interceptor(|a: &Value, b: &Value, _, _, _, _, _: &State<'_, ()>| deep_equal(a, b))
    }

    /// Recurse with SameValueZero only.
    pub fn shallow() -> InternalComparator<()> {
        interceptor(|a: &Value, b: &Value, _, _, _, _, _: &State<'_, ()>| same_value_zero(a, b))
    }

    pub fn run<F>(comparator: &InternalComparator<()>, a: &Value, b: &Value, f: F) -> bool
    where
        F: Fn(&Obj, &Obj, &State<'_, ()>) -> bool,
    {
        let state = State::new(comparator, Some(Box::new(DefaultPairCache::default())), (), false);
        f(a.as_object().unwrap(), b.as_object().unwrap(), &state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_combine_short_circuits() {
        let never: Rule<()> = rule(|_, _, _| false);
        let boom: Rule<()> = rule(|_, _, _| panic!("evaluated"));
        let both = combine(never, boom);
        let (a, b) = (Value::new_object(), Value::new_object());
        assert!(!testing::run(&testing::deep(), &a, &b, |a, b, s| both(a, b, s)));
    }
}
