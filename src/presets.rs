//! Pre-built comparators behind the crate-root functions.
//!
//! Each is built on first use and shared for the life of the process.

use alloc::boxed::Box;

use once_cell::race::OnceBox;

use crate::factory::{shallow_internal_comparator, CustomEqual, CustomEqualOptions};
use crate::same_value::same_value_zero;
use crate::value::Value;

fn options(circular: bool, strict: bool, shallow: bool) -> CustomEqualOptions<()> {
    let options = CustomEqualOptions::default().circular(circular).strict(strict);
    if shallow {
        options.with_internal_comparator(shallow_internal_comparator)
    } else {
        options
    }
}

macro_rules! preset {
    ($(#[$doc:meta])* $name:ident, circular: $circular:expr, strict: $strict:expr, shallow: $shallow:expr) => {
        $(#[$doc])*
        pub fn $name(a: &Value, b: &Value) -> bool {
            static COMPARATOR: OnceBox<CustomEqual<()>> = OnceBox::new();
            COMPARATOR
                .get_or_init(|| Box::new(CustomEqual::new(options($circular, $strict, $shallow))))
                .equals(a, b)
        }
    };
}

preset!(
    /// Fully recursive comparison. Not cycle-safe.
    deep_equal, circular: false, strict: false, shallow: false
);
preset!(
    /// One level deep: nested members are compared with SameValueZero.
    shallow_equal, circular: false, strict: false, shallow: true
);
preset!(
    /// [`deep_equal`] that tolerates self- and mutually-referential graphs.
    circular_deep_equal, circular: true, strict: false, shallow: false
);
preset!(
    /// [`shallow_equal`] that tolerates a value containing itself.
    circular_shallow_equal, circular: true, strict: false, shallow: true
);
preset!(
    /// [`deep_equal`] over every own property, with matching descriptor flags.
    strict_deep_equal, circular: false, strict: true, shallow: false
);
preset!(
    /// [`shallow_equal`] over every own property, with matching descriptor flags.
    strict_shallow_equal, circular: false, strict: true, shallow: true
);
preset!(
    /// Cycle-safe [`strict_deep_equal`].
    strict_circular_deep_equal, circular: true, strict: true, shallow: false
);
preset!(
    /// Cycle-safe [`strict_shallow_equal`].
    strict_circular_shallow_equal, circular: true, strict: true, shallow: true
);

/// SameValueZero: identity, except `NaN` equals `NaN` and `+0` equals `-0`.
pub fn same_value_zero_equal(a: &Value, b: &Value) -> bool {
    same_value_zero(a, b)
}
