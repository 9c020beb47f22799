//! Unordered collections: maps and sets.
//!
//! Both rules look for a one-to-one matching between the two sides. For each
//! entry of `a`, the unconsumed entries of `b` are scanned in insertion order
//! and the first structurally equal one is consumed. Structural keys cannot be
//! hashed, so the worst case is quadratic.

use alloc::vec;

use crate::state::{Key, State};
use crate::value::Obj;

/// Equal size and a bijection between entries with equal keys and values.
pub fn are_maps_equal<M>(a: &Obj, b: &Obj, state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    let (Some(xs), Some(ys)) = (da.as_map(), db.as_map()) else {
        return false;
    };
    if xs.len() != ys.len() {
        return false;
    }
    let mut consumed = vec![false; ys.len()];
    for (i, (ka, va)) in xs.iter().enumerate() {
        let found = ys.iter().enumerate().position(|(j, (kb, vb))| {
            !consumed[j]
                && state.equals(ka, kb, Key::Index(i), Key::Index(j), a, b)
                && state.equals(va, vb, Key::Entry(ka), Key::Entry(kb), a, b)
        });
        match found {
            Some(j) => consumed[j] = true,
            None => return false,
        }
    }
    true
}

/// Equal size and a bijection between equal elements.
pub fn are_sets_equal<M>(a: &Obj, b: &Obj, state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    let (Some(xs), Some(ys)) = (da.as_set(), db.as_set()) else {
        return false;
    };
    if xs.len() != ys.len() {
        return false;
    }
    let mut consumed = vec![false; ys.len()];
    for x in xs {
        let found = ys
            .iter()
            .enumerate()
            .position(|(j, y)| !consumed[j] && state.equals(x, y, Key::Entry(x), Key::Entry(y), a, b));
        match found {
            Some(j) => consumed[j] = true,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{deep, run};
    use crate::value::Value;

    fn maps_equal(a: &Value, b: &Value) -> bool {
        run(&deep(), a, b, are_maps_equal)
    }

    fn sets_equal(a: &Value, b: &Value) -> bool {
        run(&deep(), a, b, are_sets_equal)
    }

    fn bc() -> Value {
        Value::object([("b", "c")])
    }

    #[test]
    fn test_insertion_order_is_irrelevant() {
        let a = Value::map([("x", 1), ("y", 2)]);
        let b = Value::map([("y", 2), ("x", 1)]);
        assert!(maps_equal(&a, &b));
    }

    #[test]
    fn test_structural_keys_match_duplicate_looking_entries() {
        let a = Value::map([(bc(), 2), (bc(), 2)]);
        let b = Value::map([(bc(), 2), (bc(), 2)]);
        assert!(maps_equal(&a, &b));
    }

    #[test]
    fn test_one_changed_entry_breaks_the_matching() {
        let a = Value::map([(bc(), 2), (bc(), 2)]);
        let first = Value::map([(Value::object([("b", "x")]), 2), (bc(), 2)]);
        let second = Value::map([(bc(), 2), (bc(), 3)]);
        assert!(!maps_equal(&a, &first));
        assert!(!maps_equal(&first, &a));
        assert!(!maps_equal(&a, &second));
        assert!(!maps_equal(&second, &a));
    }

    #[test]
    fn test_map_values_must_match_their_keys() {
        let a = Value::map([("x", 1), ("y", 2)]);
        let b = Value::map([("x", 2), ("y", 1)]);
        assert!(!maps_equal(&a, &b));
    }

    #[test]
    fn test_sets_match_structurally() {
        let a = Value::set([bc(), Value::from(1)]);
        let b = Value::set([Value::from(1), bc()]);
        assert!(sets_equal(&a, &b));
        assert!(!sets_equal(&a, &Value::set([Value::from(1), Value::from(2)])));
    }

    #[test]
    fn test_each_element_is_consumed_once() {
        let a = Value::set([bc(), bc()]);
        let b = Value::set([bc(), Value::object([("b", "d")])]);
        assert!(!sets_equal(&a, &b));
    }

    #[test]
    fn test_size_mismatch() {
        assert!(!sets_equal(&Value::set([1]), &Value::set([1, 2])));
        assert!(!maps_equal(&Value::map([(1, 1)]), &Value::map([(1, 1), (2, 2)])));
    }
}
