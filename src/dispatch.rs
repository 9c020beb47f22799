/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Category dispatch.
//!
//! [`Dispatcher::compare`] is the recursive core: every top-level call and
//! every nested value goes through it.
//!
//! # Order of checks
//!
//! 1. SameValueZero identity → equal.
//! 2. Either side a primitive → unequal.
//! 3. Different prototypes → unequal.
//! 4. Different categories → unequal. No rule runs on a mismatched pair.
//! 5. Matching dedicated category → that category's rule.
//! 6. Unclassified → the unknown-tag hook, then the configured fallback,
//!    then the keyed-object rule.

use alloc::sync::Arc;

use tracing::trace;

use crate::classify::Category;
use crate::config::Config;
use crate::same_value::same_value_zero;
use crate::state::State;
use crate::value::Value;

/// Routes a pair of values to the rule for their shared category.
pub struct Dispatcher<M> {
    config: Arc<Config<M>>,
}

impl<M> Dispatcher<M> {
    /// Dispatch through `config`.
    pub fn new(config: Arc<Config<M>>) -> Self {
        Self { config }
    }

    /// The rule table in use.
    pub fn config(&self) -> &Config<M> {
        &self.config
    }

    /// Compare `a` and `b` under `state`.
    pub fn compare(&self, a: &Value, b: &Value, state: &State<'_, M>) -> bool {
        if same_value_zero(a, b) {
            return true;
        }
        let (Value::Object(x), Value::Object(y)) = (a, b) else {
            return false;
        };

        let (left, right) = {
            let (dx, dy) = (x.borrow(), y.borrow());
            if dx.prototype != dy.prototype {
                trace!(left = ?dx.prototype, right = ?dy.prototype, "prototype mismatch");
                return false;
            }
            (Category::of(&dx), Category::of(&dy))
        };
        if left != right {
            trace!(?left, ?right, "category mismatch");
            return false;
        }

        let config = &*self.config;
        match left {
            Category::Array => (config.are_arrays_equal)(x, y, state),
            Category::Object => (config.are_objects_equal)(x, y, state),
            Category::Map => (config.are_maps_equal)(x, y, state),
            Category::Set => (config.are_sets_equal)(x, y, state),
            Category::Date => (config.are_dates_equal)(x, y, state),
            Category::RegExp => (config.are_regexps_equal)(x, y, state),
            Category::Boxed => (config.are_primitive_wrappers_equal)(x, y, state),
            Category::TypedArray => (config.are_typed_arrays_equal)(x, y, state),
            Category::Thenable => (config.are_promises_equal)(x, y, state),
            Category::Function => (config.are_functions_equal)(x, y, state),
            Category::Unclassified { tag } => {
                if let Some(matched) = config.unknown_tag.as_ref().and_then(|hook| hook(&*tag)) {
                    trace!(%tag, "unknown-tag rule");
                    return matched(x, y, state);
                }
                match &config.are_unclassified_equal {
                    Some(fallback) => fallback(x, y, state),
                    None => (config.are_objects_equal)(x, y, state),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LinearPairCache;
    use crate::config::PartialConfig;
    use crate::rules::rule;
    use crate::state::{interceptor, InternalComparator};
    use crate::value::Class;
    use alloc::boxed::Box;
    use core::sync::atomic::{AtomicUsize, Ordering};

    fn compare_with(config: Config<()>, a: &Value, b: &Value) -> bool {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(config)));
        let inner = dispatcher.clone();
        let comparator: InternalComparator<()> =
            interceptor(move |a, b, _, _, _, _, state| inner.compare(a, b, state));
        let state = State::new(&comparator, None, (), false);
        dispatcher.compare(a, b, &state)
    }

    fn compare(a: &Value, b: &Value) -> bool {
        compare_with(Config::new(false), a, b)
    }

    #[test]
    fn test_primitives() {
        assert!(compare(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(compare(&Value::from(0.0), &Value::from(-0.0)));
        assert!(!compare(&Value::from(f64::NAN), &Value::from(123)));
        assert!(!compare(&Value::Null, &Value::Undefined));
        assert!(!compare(&Value::from(1), &Value::array([1])));
    }

    #[test]
    fn test_category_mismatch_never_reaches_a_rule() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let counting = rule(move |_, _, _| {
            counter.fetch_add(1, Ordering::Relaxed);
            true
        });
        let config = Config::new(false).merge(PartialConfig {
            are_objects_equal: Some(counting.clone()),
            are_arrays_equal: Some(counting),
            ..PartialConfig::default()
        });
        assert!(!compare_with(config, &Value::new_object(), &Value::new_array()));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_map_and_set_never_match() {
        assert!(!compare(&Value::map([(1, 1)]), &Value::set([1])));
    }

    #[test]
    fn test_prototypes_must_agree() {
        let point = Class::new("Point");
        let other = Class::new("Point");
        let a = Value::instance(&point, [("x", 1)]);
        assert!(compare(&a, &Value::instance(&point, [("x", 1)])));
        assert!(!compare(&a, &Value::instance(&other, [("x", 1)])));
        assert!(!compare(&a, &Value::object([("x", 1)])));
        assert!(!compare(&Value::null_prototype([("x", 1)]), &Value::object([("x", 1)])));
    }

    #[test]
    fn test_unclassified_falls_back_to_keyed_rule() {
        let a = Value::host("URL");
        let b = Value::host("URL");
        a.as_object().unwrap().set("href", "x").unwrap();
        b.as_object().unwrap().set("href", "x").unwrap();
        assert!(compare(&a, &b));
        assert!(!compare(&Value::host("URL"), &Value::host("Blob")));
    }

    #[test]
    fn test_unknown_tag_hook_takes_precedence() {
        let config = Config::new(false).merge(PartialConfig {
            are_unclassified_equal: Some(rule(|_, _, _| false)),
            unknown_tag: Some(Arc::new(|tag: &str| (tag == "URL").then(|| rule(|_, _, _| true)))),
            ..PartialConfig::default()
        });
        let shared = Arc::new(config);
        let run = |a: &Value, b: &Value| compare_with((*shared).clone(), a, b);
        assert!(run(&Value::host("URL"), &Value::host("URL")));
        assert!(!run(&Value::host("Blob"), &Value::host("Blob")));
    }

    #[test]
    fn test_circular_rules_leave_the_cache_empty() {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(Config::<()>::new(false).into_circular())));
        let inner = dispatcher.clone();
        let comparator: InternalComparator<()> =
            interceptor(move |a, b, _, _, _, _, state| inner.compare(a, b, state));
        let state = State::new(&comparator, Some(Box::new(LinearPairCache::new())), (), false);

        let x = Value::object([("a", 1)]);
        x.as_object().unwrap().set("self", x.clone()).unwrap();
        let y = Value::object([("a", 1)]);
        y.as_object().unwrap().set("self", y.clone()).unwrap();
        assert!(dispatcher.compare(&x, &y, &state));
        assert!(state.cache().unwrap().borrow().is_empty());
    }
}
