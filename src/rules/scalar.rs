//! Leaf categories whose equality never recurses.

use crate::same_value::{same_value_zero, same_value_zero_f64};
use crate::state::State;
use crate::value::Obj;

/// SameValueZero of the timestamps; two invalid dates are equal.
pub fn are_dates_equal<M>(a: &Obj, b: &Obj, _state: &State<'_, M>) -> bool {
    match (a.borrow().as_date(), b.borrow().as_date()) {
        (Some(x), Some(y)) => same_value_zero_f64(x, y),
        _ => false,
    }
}

/// Same source text and same flag set, in whatever order the flags were
/// written.
pub fn are_regexps_equal<M>(a: &Obj, b: &Obj, _state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    match (da.as_regexp(), db.as_regexp()) {
        (Some(x), Some(y)) => x.source() == y.source() && x.flags() == y.flags(),
        _ => false,
    }
}

/// Flag-by-flag comparison for hosts without a combined flags accessor.
///
/// Checks `global`, `ignore_case`, `multiline`, `unicode` and `sticky`
/// individually and also requires the same `last_index`. Flags outside that
/// list are not compared.
pub fn are_regexps_equal_legacy<M>(a: &Obj, b: &Obj, _state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    let (Some(x), Some(y)) = (da.as_regexp(), db.as_regexp()) else {
        return false;
    };
    x.source() == y.source()
        && x.global() == y.global()
        && x.ignore_case() == y.ignore_case()
        && x.multiline() == y.multiline()
        && x.unicode() == y.unicode()
        && x.sticky() == y.sticky()
        && x.last_index == y.last_index
}

/// SameValueZero of the unwrapped primitives.
pub fn are_primitive_wrappers_equal<M>(a: &Obj, b: &Obj, _state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    match (da.as_boxed(), db.as_boxed()) {
        (Some(x), Some(y)) => same_value_zero(x, y),
        _ => false,
    }
}

/// Identity only. Pending values are never awaited.
pub fn are_promises_equal<M>(a: &Obj, b: &Obj, _state: &State<'_, M>) -> bool {
    a.ptr_eq(b)
}

/// Identity only, whatever the function body.
pub fn are_functions_equal<M>(a: &Obj, b: &Obj, _state: &State<'_, M>) -> bool {
    a.ptr_eq(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{deep, run};
    use crate::value::{RegExp, Value};

    #[test]
    fn test_dates() {
        let d = |ms| Value::date(ms);
        assert!(run(&deep(), &d(1.0e12), &d(1.0e12), are_dates_equal));
        assert!(!run(&deep(), &d(1.0e12), &d(2.0e12), are_dates_equal));
        assert!(run(&deep(), &Value::invalid_date(), &Value::invalid_date(), are_dates_equal));
    }

    #[test]
    fn test_regexp_flag_order_is_irrelevant() {
        let a = Value::regexp("a+b", "gi").unwrap();
        let b = Value::regexp("a+b", "ig").unwrap();
        let c = Value::regexp("a+b", "g").unwrap();
        let d = Value::regexp("a+c", "gi").unwrap();
        assert!(run(&deep(), &a, &b, are_regexps_equal));
        assert!(!run(&deep(), &a, &c, are_regexps_equal));
        assert!(!run(&deep(), &a, &d, are_regexps_equal));
    }

    #[test]
    fn test_legacy_regexp_compares_the_match_cursor() {
        let fresh = RegExp::new("x", "gy").unwrap();
        let advanced = fresh.clone().with_last_index(3);
        let (a, b) = (Value::from(fresh.clone()), Value::from(advanced));
        assert!(run(&deep(), &a, &b, are_regexps_equal));
        assert!(!run(&deep(), &a, &b, are_regexps_equal_legacy));
        assert!(run(&deep(), &a, &Value::from(fresh), are_regexps_equal_legacy));
    }

    #[test]
    fn test_legacy_regexp_ignores_unlisted_flags() {
        let a = Value::regexp("x", "gs").unwrap();
        let b = Value::regexp("x", "g").unwrap();
        assert!(run(&deep(), &a, &b, are_regexps_equal_legacy));
        assert!(!run(&deep(), &a, &b, are_regexps_equal));
    }

    #[test]
    fn test_boxed_primitives() {
        let boxed = |v: Value| Value::boxed(v).unwrap();
        assert!(run(&deep(), &boxed("s".into()), &boxed("s".into()), are_primitive_wrappers_equal));
        assert!(run(&deep(), &boxed(f64::NAN.into()), &boxed(f64::NAN.into()), are_primitive_wrappers_equal));
        assert!(!run(&deep(), &boxed(true.into()), &boxed(1.into()), are_primitive_wrappers_equal));
    }

    #[test]
    fn test_thenables_and_functions_compare_by_identity() {
        let p = Value::promise();
        assert!(run(&deep(), &p, &p.clone(), are_promises_equal));
        assert!(!run(&deep(), &p, &Value::promise(), are_promises_equal));

        let f = Value::function("f");
        assert!(run(&deep(), &f, &f.clone(), are_functions_equal));
        assert!(!run(&deep(), &f, &Value::function("f"), are_functions_equal));
    }
}
