//! Ordered sequences: arrays and typed arrays.

use crate::rules::keyed::are_objects_equal_strict;
use crate::same_value::{same_value_zero_f32, same_value_zero_f64};
use crate::state::{Key, State};
use crate::value::{Obj, TypedArray};

/// Equal length and index-wise equal elements. Order-sensitive.
pub fn are_arrays_equal<M>(a: &Obj, b: &Obj, state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    let (Some(xs), Some(ys)) = (da.as_array(), db.as_array()) else {
        return false;
    };
    if xs.len() != ys.len() {
        return false;
    }
    xs.iter()
        .zip(ys)
        .enumerate()
        .all(|(i, (x, y))| state.equals(x, y, Key::Index(i), Key::Index(i), a, b))
}

/// [`are_arrays_equal`] plus strict comparison of extra own properties.
pub fn are_arrays_equal_strict<M>(a: &Obj, b: &Obj, state: &State<'_, M>) -> bool {
    are_arrays_equal(a, b, state) && are_objects_equal_strict(a, b, state)
}

/// Same element kind, same length, element-wise SameValueZero.
///
/// Two arrays with identical bytes but different element kinds are unequal.
pub fn are_typed_arrays_equal<M>(a: &Obj, b: &Obj, _state: &State<'_, M>) -> bool {
    let (da, db) = (a.borrow(), b.borrow());
    let (Some(xs), Some(ys)) = (da.as_typed_array(), db.as_typed_array()) else {
        return false;
    };
    match (xs, ys) {
        (TypedArray::Int8(x), TypedArray::Int8(y)) => x == y,
        (TypedArray::Uint8(x), TypedArray::Uint8(y)) => x == y,
        (TypedArray::Uint8Clamped(x), TypedArray::Uint8Clamped(y)) => x == y,
        (TypedArray::Int16(x), TypedArray::Int16(y)) => x == y,
        (TypedArray::Uint16(x), TypedArray::Uint16(y)) => x == y,
        (TypedArray::Int32(x), TypedArray::Int32(y)) => x == y,
        (TypedArray::Uint32(x), TypedArray::Uint32(y)) => x == y,
        (TypedArray::Float32(x), TypedArray::Float32(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_value_zero_f32(*p, *q))
        }
        (TypedArray::Float64(x), TypedArray::Float64(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_value_zero_f64(*p, *q))
        }
        (TypedArray::BigInt64(x), TypedArray::BigInt64(y)) => x == y,
        (TypedArray::BigUint64(x), TypedArray::BigUint64(y)) => x == y,
        _ => false,
    }
}
