//! Assertion macros for tests.

/// Assert that two [`Value`](crate::Value)s are deeply equal, cycles allowed.
///
/// ```
/// use valeq::{assert_deep_eq, Value};
///
/// assert_deep_eq!(Value::array([1, 2]), Value::array([1, 2]));
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !$crate::circular_deep_equal(left, right) {
                    core::panic!(
                        "deep equality assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                        left, right
                    );
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                if !$crate::circular_deep_equal(left, right) {
                    core::panic!(
                        "deep equality assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`: {}",
                        left, right, core::format_args!($($arg)+)
                    );
                }
            }
        }
    };
}

/// Assert that two [`Value`](crate::Value)s are not deeply equal, cycles
/// allowed.
#[macro_export]
macro_rules! assert_deep_ne {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if $crate::circular_deep_equal(left, right) {
                    core::panic!(
                        "deep inequality assertion failed: `(left != right)`\n  left: `{:?}`,\n right: `{:?}`",
                        left, right
                    );
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_passing_assertions() {
        assert_deep_eq!(Value::object([("a", 1)]), Value::object([("a", 1)]));
        assert_deep_eq!(Value::from(f64::NAN), Value::from(f64::NAN), "NaN is self-equal");
        assert_deep_ne!(Value::array([1, 2]), Value::array([2, 1]));
    }

    #[test]
    #[should_panic(expected = "deep equality assertion failed")]
    fn test_failing_assertion_panics() {
        assert_deep_eq!(Value::array([1]), Value::array([2]));
    }
}
